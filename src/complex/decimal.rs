//! Operations specific to complex numbers over BigDecimal

use crate::*;
use arithmetic::divide;
use arithmetic::trig::Trig;

lazy_static! {
    /// 0 + 0i
    pub static ref ZERO: DecimalComplex = DecimalComplex::new(BigDecimal::zero(), BigDecimal::zero());

    /// 1 + 0i
    pub static ref ONE: DecimalComplex = DecimalComplex::new(BigDecimal::one(), BigDecimal::zero());

    /// 0 + 1i
    pub static ref IMAGINARY: DecimalComplex = DecimalComplex::new(BigDecimal::zero(), BigDecimal::one());
}


impl Complex<BigDecimal> {
    /// Modulus using the default context
    #[inline]
    pub fn abs(&self) -> Result<BigDecimal> {
        self.abs_with_context(&Context::default())
    }

    /// Modulus √(a² + b²)
    pub fn abs_with_context(&self, ctx: &Context) -> Result<BigDecimal> {
        sqrt_with_context(&self.abs_pow2(), ctx)
    }

    /// Divide using the default context
    #[inline]
    pub fn divide(&self, other: &DecimalComplex) -> Result<DecimalComplex> {
        self.divide_with_context(other, &Context::default())
    }

    /// Divide by `p + qi`
    ///
    /// Each part of `(a + bi)(p - qi) / (p² + q²)` is divided at the
    /// context's scale with its rounding mode. Fails with
    /// [`NumericError::NotInvertible`] if the divisor is zero.
    ///
    /// ```
    /// # use bignumerics::*;
    /// let a = DecimalComplex::new(1.into(), 0.into());
    /// let b = DecimalComplex::new(0.into(), 4.into());
    /// let q = a.divide(&b).unwrap();
    /// assert_eq!(q, DecimalComplex::new(0.into(), "-0.25".parse().unwrap()));
    /// ```
    pub fn divide_with_context(&self, other: &DecimalComplex, ctx: &Context) -> Result<DecimalComplex> {
        if other.is_zero() {
            return Err(NumericError::NotInvertible(other.to_string()));
        }
        let (a, b) = (self.real(), self.imaginary());
        let (p, q) = (other.real(), other.imaginary());
        let denominator = other.abs_pow2();

        let real = divide(&(a * p + b * q), &denominator, ctx.scale(), ctx.rounding_mode())?;
        let imaginary = divide(&(b * p - a * q), &denominator, ctx.scale(), ctx.rounding_mode())?;
        Ok(Self::new(real, imaginary))
    }

    /// Multiplicative inverse using the default context
    #[inline]
    pub fn invert(&self) -> Result<DecimalComplex> {
        self.invert_with_context(&Context::default())
    }

    /// 1 / self
    pub fn invert_with_context(&self, ctx: &Context) -> Result<DecimalComplex> {
        ONE.divide_with_context(self, ctx)
    }

    /// Principal argument using the default context
    #[inline]
    pub fn argument(&self) -> Result<BigDecimal> {
        self.argument_with_context(&Context::default())
    }

    /// Principal argument in (-π, π]
    ///
    /// Fails with [`NumericError::UndefinedArgument`] at zero.
    ///
    pub fn argument_with_context(&self, ctx: &Context) -> Result<BigDecimal> {
        let (re, im) = (self.real(), self.imaginary());

        if re.is_zero() && im.is_zero() {
            return Err(NumericError::UndefinedArgument);
        }

        let mut trig = Trig::new(ctx)?;
        let working_scale = trig.working_scale();

        let angle = if re.is_zero() {
            let half_pi = divide(&trig.pi()?, &BigDecimal::from(2), working_scale, RoundingMode::HalfEven)?;
            if im.is_positive() { half_pi } else { -half_pi }
        } else {
            let ratio = divide(im, re, working_scale, RoundingMode::HalfEven)?;
            let atan = trig.atan(&ratio)?;
            match (re.sign(), im.sign()) {
                (Sign::Plus, _) => atan,
                (_, Sign::Minus) => atan - trig.pi()?,
                (_, _) => atan + trig.pi()?,
            }
        };

        ctx.round(&angle)
    }

    /// Polar form using the default context
    #[inline]
    pub fn polar_form(&self) -> Result<PolarForm> {
        self.polar_form_with_context(&Context::default())
    }

    /// Modulus and argument
    ///
    /// Fails with [`NumericError::UndefinedArgument`] at zero.
    pub fn polar_form_with_context(&self, ctx: &Context) -> Result<PolarForm> {
        let angular = self.argument_with_context(ctx)?;
        let radial = self.abs_with_context(ctx)?;
        Ok(PolarForm::new(radial, angular))
    }
}
