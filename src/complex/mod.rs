//! Complex numbers
//!
//! [`Complex<T>`] holds the arithmetic common to every component type.
//! Two instantiations are provided:
//!
//! * [`BigComplex`] over `BigInt`, exact and closed under everything
//!   but division
//! * [`DecimalComplex`] over `BigDecimal`, which adds division,
//!   argument and polar form
//!
//! Operations on a `BigComplex` whose result can leave the integers
//! convert to `DecimalComplex` first.

use crate::*;

pub mod big;
pub mod decimal;

/// Complex number over arbitrary precision integers
pub type BigComplex = Complex<BigInt>;

/// Complex number over arbitrary precision decimals
pub type DecimalComplex = Complex<BigDecimal>;


/// Numeric type usable as the parts of a [`Complex`]
///
/// Every operation on this trait's implementors is exact.
pub trait Component: Clone + fmt::Debug + fmt::Display + num_traits::Num + Signed {}

impl Component for BigInt {}
impl Component for BigDecimal {}


/// Complex number `real + imaginary·i`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Complex<T> {
    real: T,
    imaginary: T,
}

impl<T: Component> Complex<T> {
    pub fn new(real: T, imaginary: T) -> Self {
        Self { real, imaginary }
    }

    #[inline]
    pub fn real(&self) -> &T {
        &self.real
    }

    #[inline]
    pub fn imaginary(&self) -> &T {
        &self.imaginary
    }

    /// Consume, returning `(real, imaginary)`
    pub fn into_parts(self) -> (T, T) {
        (self.real, self.imaginary)
    }

    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.real.clone() + other.real.clone(),
            self.imaginary.clone() + other.imaginary.clone(),
        )
    }

    pub fn subtract(&self, other: &Self) -> Self {
        Self::new(
            self.real.clone() - other.real.clone(),
            self.imaginary.clone() - other.imaginary.clone(),
        )
    }

    /// (a + bi)(c + di) = (ac - bd) + (ad + bc)i
    pub fn multiply(&self, other: &Self) -> Self {
        let (a, b) = (&self.real, &self.imaginary);
        let (c, d) = (&other.real, &other.imaginary);
        Self::new(
            a.clone() * c.clone() - b.clone() * d.clone(),
            a.clone() * d.clone() + b.clone() * c.clone(),
        )
    }

    pub fn negate(&self) -> Self {
        Self::new(-self.real.clone(), -self.imaginary.clone())
    }

    /// a - bi
    pub fn conjugate(&self) -> Self {
        Self::new(self.real.clone(), -self.imaginary.clone())
    }

    /// Square of the modulus, a² + b²
    pub fn abs_pow2(&self) -> T {
        self.real.clone() * self.real.clone() + self.imaginary.clone() * self.imaginary.clone()
    }

    /// Raise to a non-negative integer power by repeated multiplication
    ///
    /// `z⁰` is one, including for `z = 0`.
    ///
    /// ```
    /// # use bignumerics::*;
    /// let i = BigComplex::new(0.into(), 1.into());
    /// assert_eq!(i.pow(2).unwrap(), BigComplex::new((-1).into(), 0.into()));
    /// assert!(i.pow(-1).is_err());
    /// ```
    pub fn pow(&self, exponent: i64) -> Result<Self> {
        if exponent < 0 {
            return Err(NumericError::NegativeExponent(exponent));
        }
        let mut result = Self::new(T::one(), T::zero());
        for _ in 0..exponent {
            result = result.multiply(self);
        }
        Ok(result)
    }

    /// Matrix of multiplication by this number acting on `(re, im)`
    ///
    /// ```
    /// # use bignumerics::*;
    /// let z = BigComplex::new(3.into(), 4.into());
    /// let [[a, b], [c, d]] = z.matrix();
    /// assert_eq!((a, b, c, d), (3.into(), (-4).into(), 4.into(), 3.into()));
    /// ```
    pub fn matrix(&self) -> [[T; 2]; 2] {
        [
            [self.real.clone(), -self.imaginary.clone()],
            [self.imaginary.clone(), self.real.clone()],
        ]
    }

    /// True if both parts are zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.real.is_zero() && self.imaginary.is_zero()
    }

    /// True if imaginary part is zero
    #[inline]
    pub fn is_real(&self) -> bool {
        self.imaginary.is_zero()
    }
}

impl<T: Component> From<T> for Complex<T> {
    fn from(real: T) -> Self {
        Self::new(real, T::zero())
    }
}
