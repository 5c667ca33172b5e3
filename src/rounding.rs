//! Rounding structures and subroutines

use crate::*;

/// Determines how to calculate the last digit of the number
///
/// Default rounding mode is HalfUp
///
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum RoundingMode {
    /// Always round away from zero
    ///
    ///
    /// * 5.5 → 6.0
    /// * 2.5 → 3.0
    /// * 1.6 → 2.0
    /// * 1.1 → 2.0
    /// * -1.1 → -2.0
    /// * -1.6 → -2.0
    /// * -2.5 → -3.0
    /// * -5.5 → -6.0
    Up,

    /// Always round towards zero
    ///
    /// * 5.5  →  5.0
    /// * 2.5  →  2.0
    /// * 1.6  →  1.0
    /// * 1.1  →  1.0
    /// * -1.1 → -1.0
    /// * -1.6 → -1.0
    /// * -2.5 → -2.0
    /// * -5.5 → -5.0
    Down,

    /// Towards +∞
    ///
    /// * 5.5 → 6.0
    /// * 2.5 → 3.0
    /// * 1.6 → 2.0
    /// * 1.1 → 2.0
    /// * -1.1 → -1.0
    /// * -1.6 → -1.0
    /// * -2.5 → -2.0
    /// * -5.5 → -5.0
    Ceiling,

    /// Towards -∞
    ///
    /// * 5.5 → 5.0
    /// * 2.5 → 2.0
    /// * 1.6 → 1.0
    /// * 1.1 → 1.0
    /// * -1.1 → -2.0
    /// * -1.6 → -2.0
    /// * -2.5 → -3.0
    /// * -5.5 → -6.0
    Floor,

    /// Round to 'nearest neighbor', or up if ending decimal is 5
    ///
    /// * 5.5 → 6.0
    /// * 2.5 → 3.0
    /// * 1.6 → 2.0
    /// * 1.1 → 1.0
    /// * -1.1 → -1.0
    /// * -1.6 → -2.0
    /// * -2.5 → -3.0
    /// * -5.5 → -6.0
    HalfUp,

    /// Round to 'nearest neighbor', or down if ending decimal is 5
    ///
    /// * 5.5 → 5.0
    /// * 2.5 → 2.0
    /// * 1.6 → 2.0
    /// * 1.1 → 1.0
    /// * -1.1 → -1.0
    /// * -1.6 → -2.0
    /// * -2.5 → -2.0
    /// * -5.5 → -5.0
    HalfDown,

    /// Round to 'nearest neighbor', if equidistant, round towards
    /// nearest even digit
    ///
    /// * 5.5 → 6.0
    /// * 2.5 → 2.0
    /// * 1.6 → 2.0
    /// * 1.1 → 1.0
    /// * -1.1 → -1.0
    /// * -1.6 → -2.0
    /// * -2.5 → -2.0
    /// * -5.5 → -6.0
    ///
    HalfEven,

    /// Assert that no rounding is needed
    ///
    /// Any operation that would discard a nonzero digit fails with
    /// [`NumericError::RoundingNecessary`].
    ///
    /// * 5.5 → error
    /// * 1.0 → 1.0
    /// * -1.0 → -1.0
    Unnecessary,
}

impl Default for RoundingMode {
    fn default() -> RoundingMode {
        RoundingMode::HalfUp
    }
}


impl RoundingMode {
    /// Divide two integers, rounding the quotient to an integer
    ///
    /// Parameters
    /// ----------
    /// * dividend (BigInt) - The number to be divided
    /// * divisor (BigInt) - Must be nonzero
    ///
    /// Returns
    /// -------
    /// The quotient, rounded according to this mode. The rounding
    /// decision is made from the truncated quotient and the size of the
    /// remainder relative to half the divisor, so no digits beyond the
    /// last kept one are ever materialized.
    ///
    /// Examples
    /// --------
    /// - `55 / 10` → 5 or 6 depending on scheme
    /// - `-25 / 10` → -2 or -3 depending on scheme
    /// - `1 / 3` with `Unnecessary` → `Err(RoundingNecessary)`
    ///
    pub fn round_quotient(&self, dividend: &BigInt, divisor: &BigInt) -> Result<BigInt> {
        use self::RoundingMode::*;
        use std::cmp::Ordering::*;

        if divisor.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        let (quotient, remainder) = dividend.div_rem(divisor);

        // exact: never round
        if remainder.is_zero() {
            return Ok(quotient);
        }

        let negative = dividend.is_negative() != divisor.is_negative();
        let remainder_vs_half = (remainder.abs() * 2u8).cmp(&divisor.abs());

        let away_from_zero = match (*self, remainder_vs_half) {
            (Unnecessary, _) => return Err(NumericError::RoundingNecessary),
            (Up,        _) => true,
            (Down,      _) => false,
            (Floor,     _) => negative,
            (Ceiling,   _) => !negative,
            (_,      Less) => false,
            (_,   Greater) => true,
            (HalfUp,   Equal) => true,
            (HalfDown, Equal) => false,
            (HalfEven, Equal) => quotient.is_odd(),
        };

        if !away_from_zero {
            Ok(quotient)
        } else if negative {
            Ok(quotient - 1u8)
        } else {
            Ok(quotient + 1u8)
        }
    }
}


impl From<bigdecimal::RoundingMode> for RoundingMode {
    fn from(mode: bigdecimal::RoundingMode) -> RoundingMode {
        use bigdecimal::RoundingMode as M;

        match mode {
            M::Up => RoundingMode::Up,
            M::Down => RoundingMode::Down,
            M::Ceiling => RoundingMode::Ceiling,
            M::Floor => RoundingMode::Floor,
            M::HalfUp => RoundingMode::HalfUp,
            M::HalfDown => RoundingMode::HalfDown,
            M::HalfEven => RoundingMode::HalfEven,
        }
    }
}

/// `bigdecimal` has no counterpart for `Unnecessary`
impl TryFrom<RoundingMode> for bigdecimal::RoundingMode {
    type Error = RoundingMode;

    fn try_from(mode: RoundingMode) -> std::result::Result<Self, RoundingMode> {
        use bigdecimal::RoundingMode as M;

        match mode {
            RoundingMode::Up => Ok(M::Up),
            RoundingMode::Down => Ok(M::Down),
            RoundingMode::Ceiling => Ok(M::Ceiling),
            RoundingMode::Floor => Ok(M::Floor),
            RoundingMode::HalfUp => Ok(M::HalfUp),
            RoundingMode::HalfDown => Ok(M::HalfDown),
            RoundingMode::HalfEven => Ok(M::HalfEven),
            RoundingMode::Unnecessary => Err(mode),
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    include!("rounding.tests.rs");
}
