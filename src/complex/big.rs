//! Operations specific to complex numbers over BigInt

use crate::*;

lazy_static! {
    /// 0 + 0i
    pub static ref ZERO: BigComplex = BigComplex::new(BigInt::zero(), BigInt::zero());

    /// 1 + 0i
    pub static ref ONE: BigComplex = BigComplex::new(BigInt::one(), BigInt::zero());

    /// 0 + 1i
    pub static ref IMAGINARY: BigComplex = BigComplex::new(BigInt::zero(), BigInt::one());
}


impl Complex<BigInt> {
    /// Modulus using the default context
    #[inline]
    pub fn abs(&self) -> Result<BigDecimal> {
        self.abs_with_context(&Context::default())
    }

    /// Modulus √(a² + b²)
    ///
    /// When a² + b² is a perfect square the root is exact and only
    /// rescaled to the context.
    ///
    /// ```
    /// # use bignumerics::*;
    /// let z = BigComplex::new(5.into(), (-12).into());
    /// assert_eq!(z.abs().unwrap().to_string(), "13.0000000000");
    /// ```
    pub fn abs_with_context(&self, ctx: &Context) -> Result<BigDecimal> {
        let squared = self.abs_pow2();
        if let Ok(root) = sqrt_of_perfect_square(&squared) {
            return ctx.round(&BigDecimal::from(root));
        }
        sqrt_with_context(&BigDecimal::from(squared), ctx)
    }

    /// Convert to decimal components, exactly
    pub fn to_decimal(&self) -> DecimalComplex {
        DecimalComplex::new(
            BigDecimal::from(self.real().clone()),
            BigDecimal::from(self.imaginary().clone()),
        )
    }

    /// Divide using the default context
    #[inline]
    pub fn divide(&self, other: &BigComplex) -> Result<DecimalComplex> {
        self.divide_with_context(other, &Context::default())
    }

    /// Divide, producing decimal parts at the context's scale
    pub fn divide_with_context(&self, other: &BigComplex, ctx: &Context) -> Result<DecimalComplex> {
        if other.is_zero() {
            return Err(NumericError::NotInvertible(other.to_string()));
        }
        self.to_decimal().divide_with_context(&other.to_decimal(), ctx)
    }

    /// Multiplicative inverse using the default context
    #[inline]
    pub fn invert(&self) -> Result<DecimalComplex> {
        self.invert_with_context(&Context::default())
    }

    pub fn invert_with_context(&self, ctx: &Context) -> Result<DecimalComplex> {
        self.to_decimal().invert_with_context(ctx)
    }

    /// Principal argument using the default context
    #[inline]
    pub fn argument(&self) -> Result<BigDecimal> {
        self.argument_with_context(&Context::default())
    }

    pub fn argument_with_context(&self, ctx: &Context) -> Result<BigDecimal> {
        self.to_decimal().argument_with_context(ctx)
    }

    /// Polar form using the default context
    #[inline]
    pub fn polar_form(&self) -> Result<PolarForm> {
        self.polar_form_with_context(&Context::default())
    }

    /// Polar form, with an exact modulus when one exists
    pub fn polar_form_with_context(&self, ctx: &Context) -> Result<PolarForm> {
        let angular = self.argument_with_context(ctx)?;
        let radial = self.abs_with_context(ctx)?;
        Ok(PolarForm::new(radial, angular))
    }
}

impl From<BigComplex> for DecimalComplex {
    fn from(z: BigComplex) -> Self {
        let (real, imaginary) = z.into_parts();
        DecimalComplex::new(real.into(), imaginary.into())
    }
}

impl From<&BigComplex> for DecimalComplex {
    fn from(z: &BigComplex) -> Self {
        z.to_decimal()
    }
}
