//! Code for num_traits

use crate::*;

impl Zero for Rational {
    #[inline]
    fn zero() -> Rational {
        Rational::from_integer(BigInt::zero())
    }

    /// True for any zero numerator, whatever the denominator
    #[inline]
    fn is_zero(&self) -> bool {
        self.numerator().is_zero()
    }
}

impl One for Rational {
    #[inline]
    fn one() -> Rational {
        Rational::from_integer(BigInt::one())
    }

    /// True if the value is one, so `3/3` is one
    #[inline]
    fn is_one(&self) -> bool {
        self.numerator() == self.denominator()
    }
}

impl<T: Component> Zero for Complex<T> {
    #[inline]
    fn zero() -> Complex<T> {
        Complex::new(T::zero(), T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.real().is_zero() && self.imaginary().is_zero()
    }
}

impl<T: Component> One for Complex<T> {
    #[inline]
    fn one() -> Complex<T> {
        Complex::new(T::one(), T::zero())
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rational_identities() {
        let x = Rational::new(3, -7).unwrap();
        assert_eq!(Rational::zero(), *rational::ZERO);
        assert_eq!(Rational::one(), *rational::ONE);
        assert!(Zero::is_zero(&Rational::new(0, -4).unwrap()));
        assert!(One::is_one(&Rational::new(-4, -4).unwrap()));
        assert!(!One::is_one(&Rational::new(4, -4).unwrap()));
        assert!((&x + &Rational::zero()).equivalent(&x));
        assert!((&x * &Rational::one()).equivalent(&x));
    }

    #[test]
    fn complex_identities() {
        let z = BigComplex::new(3.into(), (-7).into());
        assert_eq!(BigComplex::zero(), *complex::big::ZERO);
        assert_eq!(BigComplex::one(), *complex::big::ONE);
        assert_eq!(DecimalComplex::zero(), *complex::decimal::ZERO);
        assert_eq!(DecimalComplex::one(), *complex::decimal::ONE);
        assert_eq!(&z + &BigComplex::zero(), z);
        assert_eq!(&z * &BigComplex::one(), z);
        assert!(One::is_one(&BigComplex::one()));
    }

    #[test]
    fn sum_with_iterator() {
        let total = (1..=4)
            .map(|d| Rational::new(1, d).unwrap())
            .fold(Rational::zero(), |acc, x| acc + x);
        assert!(total.equivalent(&Rational::new(25, 12).unwrap()));
    }
}
