//! square root implementation
//!
//! Heron's method: starting from a guess of the right order of
//! magnitude, iterate `x' = (x² + n) / 2x` until successive estimates
//! are closer than the context's precision, then round to the
//! context's scale.

use crate::*;
use arithmetic::{divide, split};

/// Fractional digits carried through each iteration (at least)
const ITERATION_SCALE: i64 = 10;


/// Take the square root of a non-negative decimal using the default context
///
/// ```
/// # use bignumerics::*;
/// let root = sqrt(&BigDecimal::from(4)).unwrap();
/// assert_eq!(root.to_string(), "2.0000000000");
/// ```
#[inline]
pub fn sqrt(value: &BigDecimal) -> Result<BigDecimal> {
    sqrt_with_context(value, &Context::default())
}

/// Take the square root of a non-negative decimal
///
/// Fails with [`NumericError::NegativeSquareRoot`] if `value < 0`.
///
pub fn sqrt_with_context(value: &BigDecimal, ctx: &Context) -> Result<BigDecimal> {
    if value.is_negative() {
        return Err(NumericError::NegativeSquareRoot(value.clone()));
    }
    if value.is_zero() {
        return Ok(BigDecimal::new(BigInt::zero(), ctx.scale()));
    }

    let iteration_scale = cmp::max(ITERATION_SCALE, ctx.scale());
    let precision = ctx.precision();

    let mut estimate = initial_guess(value);
    let mut iterations = 0u64;

    loop {
        let numerator = &estimate * &estimate + value;
        let denominator = &estimate + &estimate;
        let next = divide(&numerator, &denominator, iteration_scale, RoundingMode::HalfUp)?;
        iterations += 1;

        let delta = (&next - &estimate).abs();
        trace!("sqrt({}) iteration {}: {} (delta {})", value, iterations, next, delta);

        estimate = next;

        // continue while delta ≥ precision
        if delta < *precision {
            break;
        }
    }

    debug!("sqrt({}) converged after {} iterations", value, iterations);

    ctx.round(&estimate)
}

/// First estimate of √n
///
/// Writes `n = c·10^e` with `e` even and `c < 100`, then picks
/// `6·10^(e/2)` when `c ≥ 10` and `2·10^(e/2)` otherwise.
///
fn initial_guess(n: &BigDecimal) -> BigDecimal {
    let hundred = BigDecimal::from(100);
    let ten = BigDecimal::from(10);

    let mut coefficient = n.clone();
    let mut exponent = 0i64;
    while coefficient >= hundred {
        // exact division by 100
        let (int_val, scale) = split(&coefficient);
        coefficient = BigDecimal::new(int_val, scale + 2);
        exponent += 2;
    }

    let leading_digit = if coefficient >= ten { 6 } else { 2 };
    BigDecimal::new(BigInt::from(leading_digit), -(exponent / 2))
}


/// Return the exact integer square root of a perfect square
///
/// Fails with [`NumericError::NotPerfectSquare`] for anything else,
/// negative numbers included.
///
/// ```
/// # use bignumerics::*;
/// assert_eq!(sqrt_of_perfect_square(&BigInt::from(144)).unwrap(), BigInt::from(12));
/// assert!(sqrt_of_perfect_square(&BigInt::from(143)).is_err());
/// ```
pub fn sqrt_of_perfect_square(value: &BigInt) -> Result<BigInt> {
    match integer_sqrt(value) {
        Some(root) if &root * &root == *value => Ok(root),
        _ => Err(NumericError::NotPerfectSquare(value.clone())),
    }
}

/// True if value is the square of an integer
pub fn is_perfect_square(value: &BigInt) -> bool {
    match integer_sqrt(value) {
        Some(root) => &root * &root == *value,
        None => false,
    }
}

/// floor(√n), or None if n is negative
fn integer_sqrt(n: &BigInt) -> Option<BigInt> {
    if n.is_negative() {
        None
    } else {
        Some(n.sqrt())
    }
}
