//! Implementation of std::fmt traits

use crate::*;

/// Fraction as written, `numerator/denominator`, never reduced
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numerator(), self.denominator())
    }
}

/// `a+bi` or `a-bi`
impl<T: Component> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let im = self.imaginary();
        let sign = if im.is_negative() { '-' } else { '+' };
        write!(f, "{}{}{}i", self.real(), sign, im.abs())
    }
}

/// `r∠θ`
impl fmt::Display for PolarForm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}∠{}", self.radial(), self.angular())
    }
}
