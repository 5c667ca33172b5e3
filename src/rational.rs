//! Exact rational numbers
//!
//! Arithmetic never normalizes or reduces its result: `1/2 + 1/2` is
//! `4/4`. Equality is structural, so `1/2 != 2/4`; use
//! [`Rational::equivalent`] to compare values.

use crate::*;
use arithmetic::divide;

lazy_static! {
    /// 0/1
    pub static ref ZERO: Rational = Rational::from_integer(BigInt::zero());

    /// 1/1
    pub static ref ONE: Rational = Rational::from_integer(BigInt::one());
}


/// A fraction of two arbitrary precision integers
///
/// The denominator is never zero.
///
/// ```
/// # use bignumerics::*;
/// let a = Rational::new(1, 2).unwrap();
/// let b = Rational::new(2, 4).unwrap();
/// assert_ne!(a, b);
/// assert!(a.equivalent(&b));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    /// Create fraction, failing if denominator is zero
    pub fn new<N, D>(numerator: N, denominator: D) -> Result<Self>
    where
        N: Into<BigInt>,
        D: Into<BigInt>,
    {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(NumericError::ZeroDenominator);
        }
        Ok(Self { numerator: numerator.into(), denominator })
    }

    /// Create fraction `n/1`
    pub fn from_integer<N: Into<BigInt>>(n: N) -> Self {
        Self { numerator: n.into(), denominator: BigInt::one() }
    }

    /// Build from parts already known to have a nonzero denominator
    #[inline]
    pub(crate) fn from_parts(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());
        Self { numerator, denominator }
    }

    #[inline]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Consume, returning `(numerator, denominator)`
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    /// a/b + c/d = (ad + cb)/bd
    pub fn add(&self, other: &Rational) -> Rational {
        let numerator = &self.numerator * &other.denominator + &other.numerator * &self.denominator;
        let denominator = &self.denominator * &other.denominator;
        Self::from_parts(numerator, denominator)
    }

    /// a/b - c/d = (ad - cb)/bd
    pub fn subtract(&self, other: &Rational) -> Rational {
        let numerator = &self.numerator * &other.denominator - &other.numerator * &self.denominator;
        let denominator = &self.denominator * &other.denominator;
        Self::from_parts(numerator, denominator)
    }

    /// a/b · c/d = ac/bd
    pub fn multiply(&self, other: &Rational) -> Rational {
        Self::from_parts(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }

    /// a/b ÷ c/d = ad/bc
    ///
    /// Fails with [`NumericError::NotInvertible`] if `c` is zero.
    pub fn divide(&self, other: &Rational) -> Result<Rational> {
        if other.numerator.is_zero() {
            return Err(NumericError::NotInvertible(other.to_string()));
        }
        Ok(Self::from_parts(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        ))
    }

    /// Raise numerator and denominator to a non-negative power
    ///
    /// ```
    /// # use bignumerics::*;
    /// let x = Rational::new(-2, 3).unwrap();
    /// assert_eq!(x.pow(3).unwrap(), Rational::new(-8, 27).unwrap());
    /// assert_eq!(x.pow(0).unwrap(), Rational::new(1, 1).unwrap());
    /// ```
    pub fn pow(&self, exponent: i64) -> Result<Rational> {
        if exponent < 0 {
            return Err(NumericError::NegativeExponent(exponent));
        }
        let exp = exponent as usize;
        Ok(Self::from_parts(
            num_traits::pow(self.numerator.clone(), exp),
            num_traits::pow(self.denominator.clone(), exp),
        ))
    }

    /// -a/b
    pub fn negate(&self) -> Rational {
        Self::from_parts(-&self.numerator, self.denominator.clone())
    }

    /// b/a, failing if `a` is zero
    pub fn invert(&self) -> Result<Rational> {
        if self.numerator.is_zero() {
            return Err(NumericError::NotInvertible(self.to_string()));
        }
        Ok(Self::from_parts(self.denominator.clone(), self.numerator.clone()))
    }

    /// |a|/|b|
    pub fn abs(&self) -> Rational {
        Self::from_parts(self.numerator.abs(), self.denominator.abs())
    }

    /// Move sign onto the numerator; zero becomes `0/1`
    ///
    /// ```
    /// # use bignumerics::*;
    /// let x = Rational::new(3, -6).unwrap();
    /// assert_eq!(x.normalize(), Rational::new(-3, 6).unwrap());
    /// assert_eq!(Rational::new(0, -7).unwrap().normalize(), Rational::new(0, 1).unwrap());
    /// ```
    pub fn normalize(&self) -> Rational {
        if self.numerator.is_zero() {
            return ZERO.clone();
        }
        if self.denominator.is_negative() {
            return Self::from_parts(-&self.numerator, -&self.denominator);
        }
        self.clone()
    }

    /// Divide numerator and denominator by their greatest common divisor
    ///
    /// The sign placement is left unchanged.
    pub fn reduce(&self) -> Rational {
        let gcd = self.numerator.gcd(&self.denominator);
        if gcd.is_one() {
            return self.clone();
        }
        Self::from_parts(&self.numerator / &gcd, &self.denominator / &gcd)
    }

    /// True if both fractions have the same value
    pub fn equivalent(&self, other: &Rational) -> bool {
        self.normalize().reduce() == other.normalize().reduce()
    }

    /// -1, 0, or 1 depending on the sign of the value
    pub fn signum(&self) -> i8 {
        match (self.numerator.sign(), self.denominator.sign()) {
            (Sign::NoSign, _) => 0,
            (a, b) if a == b => 1,
            _ => -1,
        }
    }

    /// True if numerator is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// True if value is strictly less than zero
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    /// Decimal approximation using the default context
    pub fn to_decimal(&self) -> Result<BigDecimal> {
        self.to_decimal_with_context(&Context::default())
    }

    /// Divide numerator by denominator at the context's scale
    ///
    /// ```
    /// # use bignumerics::*;
    /// let third = Rational::new(1, 3).unwrap();
    /// let ctx = Context::default().with_scale(4).unwrap();
    /// assert_eq!(third.to_decimal_with_context(&ctx).unwrap().to_string(), "0.3333");
    /// ```
    pub fn to_decimal_with_context(&self, ctx: &Context) -> Result<BigDecimal> {
        divide(
            &BigDecimal::from(self.numerator.clone()),
            &BigDecimal::from(self.denominator.clone()),
            ctx.scale(),
            ctx.rounding_mode(),
        )
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}
