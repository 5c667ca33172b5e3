//! trigonometric functions
//!
//! Evaluated by `astro-float` in binary floating point, at a precision
//! wide enough that rounding the result to the caller's scale is
//! unaffected by binary conversion error.

use crate::*;
use arithmetic::{plain_string, rescale, split};

use astro_float::{BigFloat, Consts, Radix, RoundingMode as FloatRoundingMode, Sign as FloatSign, WORD_BIT_SIZE};

/// Decimal digits computed beyond what the context asks for
const GUARD_DIGITS: i64 = 8;

/// Extra mantissa bits on top of the decimal requirement
const GUARD_BITS: usize = 64;

const FLOAT_ROUNDING: FloatRoundingMode = FloatRoundingMode::ToEven;


/// Trigonometric evaluator for a single context
///
/// Results are returned at the working scale (the context's scale plus
/// guard digits), leaving the final rounding to the caller so that sums
/// such as `atan(x) + π` are rounded once.
///
pub(crate) struct Trig {
    consts: Consts,
    working_scale: i64,
}

impl Trig {
    pub(crate) fn new(ctx: &Context) -> Result<Self> {
        let consts = Consts::new().map_err(|err| NumericError::Trigonometry(format!("{:?}", err)))?;
        let working_scale = cmp::max(ctx.scale(), ctx.precision_digits()) + GUARD_DIGITS;
        Ok(Self { consts, working_scale })
    }

    /// Fractional digits of every returned value
    pub(crate) fn working_scale(&self) -> i64 {
        self.working_scale
    }

    /// Binary precision needed to resolve `value` to the working scale
    fn bits_for(&self, value: &BigDecimal) -> usize {
        let (int_val, scale) = split(value);
        let int_digits = cmp::max(int_val.magnitude().to_str_radix(10).len() as i64 - scale, 1);
        let decimal_digits = (int_digits + self.working_scale) as f64;
        (decimal_digits * std::f64::consts::LOG2_10).ceil() as usize + GUARD_BITS
    }

    fn to_float(&mut self, value: &BigDecimal, bits: usize) -> Result<BigFloat> {
        let float = BigFloat::parse(&plain_string(value), Radix::Dec, bits, FLOAT_ROUNDING, &mut self.consts);
        if float.is_nan() {
            return Err(NumericError::Trigonometry(format!("cannot represent {}", value)));
        }
        Ok(float)
    }

    fn to_decimal(&self, float: BigFloat) -> Result<BigDecimal> {
        let decimal = decimal_from_float(&float, self.working_scale)
            .ok_or_else(|| NumericError::Trigonometry(format!("non-finite result {}", float)))?;
        rescale(&decimal, self.working_scale, RoundingMode::HalfEven)
    }

    /// π
    pub(crate) fn pi(&mut self) -> Result<BigDecimal> {
        let bits = self.bits_for(&BigDecimal::from(4));
        let pi = self.consts.pi(bits, FLOAT_ROUNDING);
        self.to_decimal(pi)
    }

    /// Arc tangent, in (-π/2, π/2)
    pub(crate) fn atan(&mut self, value: &BigDecimal) -> Result<BigDecimal> {
        let bits = self.bits_for(value);
        debug!("atan({}) with {} bits", value, bits);
        let x = self.to_float(value, bits)?;
        let result = x.atan(bits, FLOAT_ROUNDING, &mut self.consts);
        self.to_decimal(result)
    }

    /// Sine of angle in radians
    pub(crate) fn sin(&mut self, angle: &BigDecimal) -> Result<BigDecimal> {
        let bits = self.bits_for(angle);
        debug!("sin({}) with {} bits", angle, bits);
        let x = self.to_float(angle, bits)?;
        let result = x.sin(bits, FLOAT_ROUNDING, &mut self.consts);
        self.to_decimal(result)
    }

    /// Cosine of angle in radians
    pub(crate) fn cos(&mut self, angle: &BigDecimal) -> Result<BigDecimal> {
        let bits = self.bits_for(angle);
        debug!("cos({}) with {} bits", angle, bits);
        let x = self.to_float(angle, bits)?;
        let result = x.cos(bits, FLOAT_ROUNDING, &mut self.consts);
        self.to_decimal(result)
    }
}

/// Exact decimal value of a finite float, or None for NaN and infinities
///
/// The mantissa words are least significant first and hold the fraction
/// `0.m`, so the value is `m · 2^(e - bits in the words)`. Values below
/// a quarter unit of `10^-scale` come back as zero.
///
fn decimal_from_float(float: &BigFloat, scale: i64) -> Option<BigDecimal> {
    let (words, _, sign, exponent, _) = float.as_raw_parts()?;

    let negligible = -(scale as f64) * std::f64::consts::LOG2_10 - 2.0;
    if (exponent as f64) < negligible {
        return Some(BigDecimal::zero());
    }

    let mantissa = words
        .iter()
        .rev()
        .fold(BigInt::zero(), |acc, &word| (acc << WORD_BIT_SIZE) + BigInt::from(word));
    let shift = exponent as i64 - (words.len() * WORD_BIT_SIZE) as i64;

    let magnitude = if shift >= 0 {
        BigDecimal::new(mantissa << shift as usize, 0)
    } else {
        // m / 2^k == m·5^k / 10^k
        let k = -shift;
        BigDecimal::new(mantissa * num_traits::pow(BigInt::from(5), k as usize), k)
    };

    match sign {
        FloatSign::Neg => Some(-magnitude),
        FloatSign::Pos => Some(magnitude),
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn float(text: &str) -> BigFloat {
        let mut consts = Consts::new().unwrap();
        BigFloat::parse(text, Radix::Dec, 256, FLOAT_ROUNDING, &mut consts)
    }

    mod decimal_from_float {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $input:literal => $expected:literal) => {
                #[test]
                fn $name() {
                    let value = decimal_from_float(&float($input), 30).unwrap();
                    let expected: BigDecimal = $expected.parse().unwrap();
                    assert_eq!(value, expected);
                }
            };
        }

        impl_case!(case_0: "0" => "0");
        impl_case!(case_1: "1" => "1");
        impl_case!(case_3: "3" => "3");
        impl_case!(case_0d5: "0.5" => "0.5");
        impl_case!(case_n0d375: "-0.375" => "-0.375");
        impl_case!(case_n12: "-12" => "-12");
        impl_case!(case_2e64: "18446744073709551616" => "18446744073709551616");
        impl_case!(case_1e40: "1e40" => "10000000000000000000000000000000000000000");
        impl_case!(case_n1e40: "-1e40" => "-10000000000000000000000000000000000000000");
        impl_case!(case_below_scale: "1e-40" => "0");

        #[test]
        fn small_negative_close_to_input() {
            let value = decimal_from_float(&float("-2.5e-20"), 30).unwrap();
            let expected: BigDecimal = "-2.5e-20".parse().unwrap();
            assert!((&value - &expected).abs() < BigDecimal::new(BigInt::one(), 70));
        }

        #[test]
        fn non_finite() {
            assert_eq!(decimal_from_float(&astro_float::NAN, 10), None);
            assert_eq!(decimal_from_float(&astro_float::INF_POS, 10), None);
            assert_eq!(decimal_from_float(&astro_float::INF_NEG, 10), None);
        }
    }

    fn assert_close(actual: &BigDecimal, expected: &str, scale: i64) {
        let expected: BigDecimal = expected.parse().unwrap();
        let tolerance = BigDecimal::new(BigInt::one(), scale);
        assert!((actual - &expected).abs() < tolerance, "{} != {}", actual, expected);
    }

    #[test]
    fn working_scale_includes_guard_digits() {
        let trig = Trig::new(&Context::default()).unwrap();
        assert_eq!(trig.working_scale(), 10 + GUARD_DIGITS);

        let ctx = Context::new("1e-30".parse().unwrap(), 5, RoundingMode::HalfUp).unwrap();
        let trig = Trig::new(&ctx).unwrap();
        assert_eq!(trig.working_scale(), 30 + GUARD_DIGITS);
    }

    #[test]
    fn pi() {
        let mut trig = Trig::new(&Context::default()).unwrap();
        let pi = trig.pi().unwrap();
        assert_eq!(split(&pi).1, trig.working_scale());
        assert_close(&pi, "3.14159265358979323846264338327950288", 17);
    }

    #[test]
    fn atan_one_is_quarter_pi() {
        let mut trig = Trig::new(&Context::default()).unwrap();
        let result = trig.atan(&BigDecimal::from(1)).unwrap();
        assert_close(&result, "0.78539816339744830961566084581987572", 17);
    }

    #[test]
    fn atan_negative() {
        let mut trig = Trig::new(&Context::default()).unwrap();
        let result = trig.atan(&"-0.5".parse().unwrap()).unwrap();
        assert_close(&result, "-0.46364760900080611621425623146121440", 17);
    }

    #[test]
    fn sin_cos_zero() {
        let mut trig = Trig::new(&Context::default()).unwrap();
        assert!(trig.sin(&BigDecimal::zero()).unwrap().is_zero());
        assert_eq!(trig.cos(&BigDecimal::zero()).unwrap(), BigDecimal::from(1));
    }

    #[test]
    fn sin_cos_one() {
        let mut trig = Trig::new(&Context::default()).unwrap();
        assert_close(&trig.sin(&BigDecimal::from(1)).unwrap(), "0.84147098480789650665250232163029900", 17);
        assert_close(&trig.cos(&BigDecimal::from(1)).unwrap(), "0.54030230586813971740093660744297660", 17);
    }

    #[test]
    fn wide_context_is_more_precise() {
        let ctx = Context::default().with_scale(40).unwrap();
        let mut trig = Trig::new(&ctx).unwrap();
        let pi = trig.pi().unwrap();
        assert_close(&pi, "3.14159265358979323846264338327950288419716939937510582097494", 45);
    }
}
