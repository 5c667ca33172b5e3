//! arithmetic routines

use crate::*;

pub(crate) mod sqrt;
pub(crate) mod trig;

/// Return 10^pow
pub(crate) fn ten_to_the(pow: u64) -> BigInt {
    if pow < 20 {
        return BigInt::from(10u64.pow(pow as u32));
    }
    num_traits::pow(BigInt::from(10u8), pow as usize)
}

/// Return the integer digits and the scale of a decimal
///
/// A positive scale means a negative power of 10.
#[inline]
pub(crate) fn split(value: &BigDecimal) -> (BigInt, i64) {
    value.as_bigint_and_exponent()
}

/// Divide `num` by `den`, producing exactly `scale` fractional digits
///
/// The quotient is computed with integer arithmetic on the unscaled
/// digits, so the only rounding is the final one made by `mode`.
///
pub(crate) fn divide(
    num: &BigDecimal,
    den: &BigDecimal,
    scale: i64,
    mode: RoundingMode,
) -> Result<BigDecimal> {
    let (num_int, num_scale) = split(num);
    let (den_int, den_scale) = split(den);

    if den_int.is_zero() {
        return Err(NumericError::DivisionByZero);
    }

    // num/den = num_int/den_int * 10^(den_scale - num_scale)
    let shift = scale + den_scale - num_scale;
    let (dividend, divisor) = if shift >= 0 {
        (num_int * ten_to_the(shift as u64), den_int)
    } else {
        (num_int, den_int * ten_to_the(shift.unsigned_abs()))
    };

    let int_val = mode.round_quotient(&dividend, &divisor)?;
    Ok(BigDecimal::new(int_val, scale))
}

/// Return a decimal equal to `value` with exactly `scale` fractional
/// digits, padding with zeros or rounding off digits as needed
///
pub(crate) fn rescale(value: &BigDecimal, scale: i64, mode: RoundingMode) -> Result<BigDecimal> {
    let (int_val, current_scale) = split(value);

    match scale.cmp(&current_scale) {
        Ordering::Equal => Ok(BigDecimal::new(int_val, scale)),
        Ordering::Greater => {
            let diff = (scale - current_scale) as u64;
            Ok(BigDecimal::new(int_val * ten_to_the(diff), scale))
        }
        Ordering::Less => {
            let diff = (current_scale - scale) as u64;
            let rounded = mode.round_quotient(&int_val, &ten_to_the(diff))?;
            Ok(BigDecimal::new(rounded, scale))
        }
    }
}

/// Write decimal without exponent notation
///
/// ```ignore
/// "-0.00125" == plain_string(&BigDecimal::new(-125.into(), 5))
/// ```
pub(crate) fn plain_string(value: &BigDecimal) -> String {
    let (int_val, scale) = split(value);
    let mut digits = int_val.magnitude().to_str_radix(10);

    if scale <= 0 {
        digits.extend(std::iter::repeat('0').take(scale.unsigned_abs() as usize));
    } else {
        let scale = scale as usize;
        if digits.len() <= scale {
            let padding = scale - digits.len() + 1;
            digits.insert_str(0, &"0".repeat(padding));
        }
        let point = digits.len() - scale;
        digits.insert(point, '.');
    }

    if int_val.sign() == Sign::Minus {
        digits.insert(0, '-');
    }
    digits
}


#[cfg(test)]
mod test {
    use super::*;

    mod ten_to_the {
        use super::*;

        #[test]
        fn small_and_large() {
            assert_eq!(ten_to_the(0), BigInt::from(1));
            assert_eq!(ten_to_the(3), BigInt::from(1000));
            assert_eq!(ten_to_the(19), BigInt::from(10_000_000_000_000_000_000u64));
            assert_eq!(ten_to_the(25).to_string(), format!("1{}", "0".repeat(25)));
        }
    }

    mod divide {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $a:literal / $b:literal @ $scale:literal $mode:ident => $expected:literal) => {
                #[test]
                fn $name() {
                    let a: BigDecimal = $a.parse().unwrap();
                    let b: BigDecimal = $b.parse().unwrap();
                    let q = divide(&a, &b, $scale, RoundingMode::$mode).unwrap();
                    let expected: BigDecimal = $expected.parse().unwrap();
                    assert_eq!(q, expected);
                    assert_eq!(split(&q).1, $scale);
                }
            };
        }

        impl_case!(case_1_3: "1" / "3" @ 10 HalfUp => "0.3333333333");
        impl_case!(case_2_3: "2" / "3" @ 10 HalfUp => "0.6666666667");
        impl_case!(case_2_3_down: "2" / "3" @ 10 Down => "0.6666666666");
        impl_case!(case_n2_3: "-2" / "3" @ 4 HalfUp => "-0.6667");
        impl_case!(case_n2_3_ceiling: "-2" / "3" @ 4 Ceiling => "-0.6666");
        impl_case!(case_1d5_0d25: "1.5" / "0.25" @ 2 HalfUp => "6.00");
        impl_case!(case_125_1000: "125" / "1000" @ 2 HalfEven => "0.12");
        impl_case!(case_135_1000: "135" / "1000" @ 2 HalfEven => "0.14");
        impl_case!(case_7e3_2: "7e3" / "2" @ 0 Unnecessary => "3500");
        impl_case!(case_1_8: "1" / "8" @ 3 Unnecessary => "0.125");

        #[test]
        fn division_by_zero() {
            let a = BigDecimal::from(1);
            let result = divide(&a, &BigDecimal::zero(), 10, RoundingMode::HalfUp);
            assert_eq!(result, Err(NumericError::DivisionByZero));
        }

        #[test]
        fn unnecessary_inexact() {
            let result = divide(&BigDecimal::from(1), &BigDecimal::from(3), 5, RoundingMode::Unnecessary);
            assert_eq!(result, Err(NumericError::RoundingNecessary));
        }
    }

    mod rescale {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $a:literal @ $scale:literal $mode:ident => $expected:literal) => {
                #[test]
                fn $name() {
                    let a: BigDecimal = $a.parse().unwrap();
                    let r = rescale(&a, $scale, RoundingMode::$mode).unwrap();
                    let expected: BigDecimal = $expected.parse().unwrap();
                    assert_eq!(r, expected);
                    assert_eq!(split(&r).1, $scale);
                }
            };
        }

        impl_case!(case_2_pad: "2" @ 10 HalfUp => "2.0000000000");
        impl_case!(case_129d41675_2_up: "129.41675" @ 2 Up => "129.42");
        impl_case!(case_129d41675_4_even: "129.41675" @ 4 HalfEven => "129.4168");
        impl_case!(case_129d41675_4_down: "129.41675" @ 4 HalfDown => "129.4167");
        impl_case!(case_n0d5_0_half_up: "-0.5" @ 0 HalfUp => "-1");
        impl_case!(case_n0d5_0_half_even: "-0.5" @ 0 HalfEven => "0");
        impl_case!(case_1e3_1: "1e3" @ 1 Unnecessary => "1000.0");
    }

    mod plain_string {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $int:literal E $exp:literal => $expected:literal) => {
                #[test]
                fn $name() {
                    let n = BigDecimal::new(BigInt::from($int), -($exp));
                    assert_eq!(plain_string(&n), $expected);
                }
            };
        }

        impl_case!(case_0: 0 E 0 => "0");
        impl_case!(case_123: 123 E 0 => "123");
        impl_case!(case_12e2: 12 E 2 => "1200");
        impl_case!(case_1d5: 15 E -1 => "1.5");
        impl_case!(case_n0d00125: -125 E -5 => "-0.00125");
        impl_case!(case_0d125: 125 E -3 => "0.125");
    }
}
