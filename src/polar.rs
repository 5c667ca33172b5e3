//! Polar coordinates of a complex number

use crate::*;
use arithmetic::trig::Trig;

/// Magnitude and angle (radians) of a complex number
///
/// Neither part is range checked; a negative `radial` or an angle
/// outside (-π, π] is kept as given and reconstructs accordingly.
///
/// ```
/// # use bignumerics::*;
/// let polar = PolarForm::new(5.into(), 0.into());
/// let z = polar.complex_number().unwrap();
/// assert_eq!(z, DecimalComplex::new(5.into(), 0.into()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PolarForm {
    radial: BigDecimal,
    angular: BigDecimal,
}

impl PolarForm {
    pub fn new(radial: BigDecimal, angular: BigDecimal) -> Self {
        Self { radial, angular }
    }

    /// Distance from the origin
    #[inline]
    pub fn radial(&self) -> &BigDecimal {
        &self.radial
    }

    /// Angle from the positive real axis, in radians
    #[inline]
    pub fn angular(&self) -> &BigDecimal {
        &self.angular
    }

    /// Consume, returning `(radial, angular)`
    pub fn into_parts(self) -> (BigDecimal, BigDecimal) {
        (self.radial, self.angular)
    }

    /// Rectangular form using the default context
    #[inline]
    pub fn complex_number(&self) -> Result<DecimalComplex> {
        self.complex_number_with_context(&Context::default())
    }

    /// `radial·cos(angular) + radial·sin(angular)·i`, each part rounded
    /// to the context
    pub fn complex_number_with_context(&self, ctx: &Context) -> Result<DecimalComplex> {
        let mut trig = Trig::new(ctx)?;
        let real = &self.radial * trig.cos(&self.angular)?;
        let imaginary = &self.radial * trig.sin(&self.angular)?;
        Ok(DecimalComplex::new(ctx.round(&real)?, ctx.round(&imaginary)?))
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    fn polar(r: &str, theta: &str) -> PolarForm {
        PolarForm::new(dec(r), dec(theta))
    }

    macro_rules! impl_case {
        ($name:ident: ($r:literal, $theta:literal) => ($re:literal, $im:literal)) => {
            #[test]
            fn $name() {
                let z = polar($r, $theta).complex_number().unwrap();
                assert_eq!(z, DecimalComplex::new(dec($re), dec($im)));
                assert_eq!(z.real().as_bigint_and_exponent().1, 10);
                assert_eq!(z.imaginary().as_bigint_and_exponent().1, 10);
            }
        };
    }

    impl_case!(case_5_0: ("5", "0") => ("5", "0"));
    impl_case!(case_2_1: ("2", "1") => ("1.0806046117", "1.6829419696"));
    impl_case!(case_1_half_pi: ("1", "1.5707963267948966192313216916") => ("0", "1"));
    impl_case!(case_sqrt2_quarter_pi: ("1.4142135623730950488", "0.78539816339744830962") => ("1", "1"));

    // not range checked
    impl_case!(case_negative_radial: ("-5", "0") => ("-5", "0"));
    impl_case!(case_3_2pi: ("3", "6.2831853071795864769252867666") => ("3", "0"));

    #[test]
    fn with_context() {
        let ctx = Context::default().with_scale(3).unwrap().with_rounding_mode(RoundingMode::Down);
        let z = polar("2", "1").complex_number_with_context(&ctx).unwrap();
        assert_eq!(z, DecimalComplex::new(dec("1.080"), dec("1.682")));
    }

    #[test]
    fn accessors() {
        let p = polar("2", "-0.5");
        assert_eq!(p.radial(), &dec("2"));
        assert_eq!(p.angular(), &dec("-0.5"));
        assert_eq!(p.into_parts(), (dec("2"), dec("-0.5")));
    }
}
