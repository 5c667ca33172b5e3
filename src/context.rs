// \file src/context.rs

//! A `Context` object is the set of parameters that govern operations
//! whose exact result is irrational.
//!
//! The square root engine stops iterating once successive estimates are
//! closer than `precision`, then rounds to `scale` fractional digits
//! using `rounding_mode`. Trigonometric evaluation derives its working
//! precision from the same values.

use crate::*;

/// Default rounding mode applied to approximated results
pub const DEFAULT_ROUNDING_MODE: RoundingMode = RoundingMode::HalfUp;

/// Information regarding behavior of approximating operations
///
/// ```
/// # use bignumerics::*;
/// let ctx = Context::default()
///                   .with_scale(20).unwrap()
///                   .with_rounding_mode(RoundingMode::HalfEven);
///
/// assert_eq!(ctx.scale(), 20);
/// assert_eq!(ctx.precision(), &"1e-10".parse::<BigDecimal>().unwrap());
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Context {
    /// Iteration stops once estimates differ by less than this value
    precision: BigDecimal,

    /// Number of fractional digits in the output
    scale: i64,

    /// Method to round the output
    rounding_mode: RoundingMode,
}

impl Context {
    /// Create context, validating every field
    pub fn new(precision: BigDecimal, scale: i64, rounding_mode: RoundingMode) -> Result<Self> {
        Context::default()
            .with_precision(precision)?
            .with_scale(scale)
            .map(|ctx| ctx.with_rounding_mode(rounding_mode))
    }

    /// Return context with given convergence threshold
    ///
    /// Fails unless `0 < precision < 1`
    pub fn with_precision(self, precision: BigDecimal) -> Result<Self> {
        if precision <= BigDecimal::zero() || precision >= BigDecimal::one() {
            return Err(NumericError::PrecisionOutOfRange(precision));
        }
        Ok(Self { precision, ..self })
    }

    /// Return context with given number of output digits
    pub fn with_scale(self, scale: i64) -> Result<Self> {
        if scale < 0 {
            return Err(NumericError::NegativeScale(scale));
        }
        Ok(Self { scale, ..self })
    }

    /// Copy context with new rounding mode
    pub fn with_rounding_mode(&self, mode: RoundingMode) -> Self {
        Self {
            rounding_mode: mode,
            ..self.clone()
        }
    }

    /// Convergence threshold of iterative methods
    #[inline]
    pub fn precision(&self) -> &BigDecimal {
        &self.precision
    }

    /// Fractional digits of approximated results
    #[inline]
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Rounding mode of approximated results
    #[inline]
    pub fn rounding_mode(&self) -> RoundingMode {
        self.rounding_mode
    }

    /// Number of fractional digits needed to resolve `precision`
    ///
    /// 1e-10 needs 10, 0.005 needs 3.
    pub(crate) fn precision_digits(&self) -> i64 {
        let (_, exponent) = self.precision.as_bigint_and_exponent();
        cmp::max(exponent, 0)
    }

    /// Round value to this context's scale with its rounding mode
    pub(crate) fn round(&self, value: &BigDecimal) -> Result<BigDecimal> {
        arithmetic::rescale(value, self.scale, self.rounding_mode)
    }
}

/// 1e-10
fn default_precision() -> BigDecimal {
    BigDecimal::new(BigInt::one(), 10)
}

impl Default for Context {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            scale: DEFAULT_SCALE,
            rounding_mode: DEFAULT_ROUNDING_MODE,
        }
    }
}


#[cfg(test)]
mod test_context {
    use super::*;

    #[test]
    fn default_values() {
        let ctx = Context::default();
        assert_eq!(ctx.precision(), &BigDecimal::new(1.into(), 10));
        assert_eq!(ctx.scale(), DEFAULT_SCALE);
        assert_eq!(ctx.rounding_mode(), RoundingMode::HalfUp);
        assert_eq!(ctx.precision_digits(), 10);
    }

    #[test]
    fn new_with_valid_fields() {
        let precision: BigDecimal = "0.005".parse().unwrap();
        let ctx = Context::new(precision.clone(), 3, RoundingMode::Floor).unwrap();
        assert_eq!(ctx.precision(), &precision);
        assert_eq!(ctx.scale(), 3);
        assert_eq!(ctx.rounding_mode(), RoundingMode::Floor);
        assert_eq!(ctx.precision_digits(), 3);
    }

    #[test]
    fn zero_scale_is_allowed() {
        let ctx = Context::default().with_scale(0).unwrap();
        assert_eq!(ctx.scale(), 0);
    }

    macro_rules! impl_invalid_precision {
        ($name:ident: $input:literal) => {
            #[test]
            fn $name() {
                let precision: BigDecimal = $input.parse().unwrap();
                let err = Context::default().with_precision(precision.clone()).unwrap_err();
                assert_eq!(err, NumericError::PrecisionOutOfRange(precision));
                assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            }
        };
    }

    impl_invalid_precision!(case_0: "0");
    impl_invalid_precision!(case_1: "1");
    impl_invalid_precision!(case_1d0: "1.0");
    impl_invalid_precision!(case_neg_0d1: "-0.1");
    impl_invalid_precision!(case_2: "2");

    #[test]
    fn negative_scale_rejected() {
        let err = Context::new(default_precision(), -1, RoundingMode::HalfUp).unwrap_err();
        assert_eq!(err, NumericError::NegativeScale(-1));
    }

    #[test]
    fn with_rounding_mode_keeps_other_fields() {
        let ctx = Context::default().with_scale(4).unwrap();
        let ctx2 = ctx.with_rounding_mode(RoundingMode::Down);
        assert_eq!(ctx2.scale(), 4);
        assert_eq!(ctx2.rounding_mode(), RoundingMode::Down);
        assert_eq!(ctx.rounding_mode(), RoundingMode::HalfUp);
    }

    #[test]
    fn round_uses_scale_and_mode() {
        let ctx = Context::default().with_scale(2).unwrap().with_rounding_mode(RoundingMode::Down);
        let n: BigDecimal = "3.14159".parse().unwrap();
        let rounded = ctx.round(&n).unwrap();
        assert_eq!(rounded.as_bigint_and_exponent(), (314.into(), 2));
    }
}
