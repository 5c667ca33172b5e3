//! Implement math operations: Add, Sub, Mul, Neg
//!
//! Only the infallible operations get operators; division, inversion
//! and powers return `Result` and stay methods.

use crate::*;

use std::ops::{Add, Mul, Neg, Sub};


impl_ref_ref_binop_by_method!(impl[] Add for Rational, add => Rational::add);
impl_ref_ref_binop_by_method!(impl[] Sub for Rational, sub => Rational::subtract);
impl_ref_ref_binop_by_method!(impl[] Mul for Rational, mul => Rational::multiply);

impl Neg for Rational {
    type Output = Rational;

    #[inline]
    fn neg(self) -> Rational {
        Rational::negate(&self)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    #[inline]
    fn neg(self) -> Rational {
        Rational::negate(self)
    }
}


impl_ref_ref_binop_by_method!(impl[T: Component] Add for Complex<T>, add => Complex::<T>::add);
impl_ref_ref_binop_by_method!(impl[T: Component] Sub for Complex<T>, sub => Complex::<T>::subtract);
impl_ref_ref_binop_by_method!(impl[T: Component] Mul for Complex<T>, mul => Complex::<T>::multiply);

impl<T: Component> Neg for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn neg(self) -> Complex<T> {
        Complex::negate(&self)
    }
}

impl<T: Component> Neg for &Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn neg(self) -> Complex<T> {
        Complex::negate(self)
    }
}
