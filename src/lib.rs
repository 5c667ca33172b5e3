// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Big Numerics
//!
//! Exact rational numbers, complex numbers over arbitrary precision
//! integers and decimals, polar forms, and the square root engine they
//! share.
//!
//! All values are immutable; arithmetic returns new values. Operations
//! that approximate an irrational result come in two flavors: a plain
//! one using the default [`Context`] (precision `1e-10`, scale `10`,
//! rounding `HalfUp`) and a `_with_context` one taking an explicit
//! configuration.
//!
//! Rational results are deliberately left unnormalized and unreduced;
//! use [`Rational::normalize`] and [`Rational::reduce`] (or
//! [`Rational::equivalent`]) when canonical form matters.
//!
//! # Example
//!
//! ```
//! use bignumerics::{BigComplex, BigDecimal, Rational};
//!
//! let half = Rational::new(1, 2).unwrap();
//! let third = Rational::new(1, 3).unwrap();
//! assert_eq!(half.add(&third), Rational::new(5, 6).unwrap());
//!
//! let z = BigComplex::new(3.into(), 4.into());
//! assert_eq!(z.abs().unwrap(), BigDecimal::from(5));
//! ```
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::redundant_field_names)]


pub extern crate bigdecimal;
pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;
extern crate astro_float;

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

#[cfg(feature = "serde")]
extern crate serde;

use std::cmp::{self, Ordering};
use std::fmt;
use std::str::FromStr;

pub use bigdecimal::BigDecimal;
pub use num_bigint::BigInt;
use num_bigint::{ParseBigIntError, Sign};
use num_integer::Integer as IntegerTrait;
pub use num_traits::{One, Signed, Zero};

use thiserror::Error;


// const DEFAULT_SCALE: i64 = ${RUST_BIGNUMERICS_DEFAULT_SCALE} or 10;
include!(concat!(env!("OUT_DIR"), "/default_scale.rs"));

#[macro_use]
mod macros;

#[cfg(test)]
extern crate paste;

// sqrt, trig, scaled division
mod arithmetic;
pub use arithmetic::sqrt::{is_perfect_square, sqrt, sqrt_of_perfect_square, sqrt_with_context};

// Add<T>, Sub<T>, Mul<T>, Neg
mod impl_ops;

// ordering predicates for Rational
mod impl_cmp;

// Implementations of num_traits
mod impl_num;

// Display
mod impl_fmt;

// FromStr
mod parsing;

#[cfg(feature = "serde")]
mod impl_serde;

pub mod rounding;
pub use rounding::RoundingMode;

// Precision configuration
mod context;
pub use context::Context;

pub mod rational;
pub use rational::Rational;

pub mod complex;
pub use complex::{BigComplex, Complex, Component, DecimalComplex};

pub mod polar;
pub use polar::PolarForm;


/// Broad classification of a [`NumericError`]
///
/// Every failure is a precondition violation detected before any
/// result is produced.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller-supplied value is outside the operation's domain
    InvalidArgument,
    /// The receiver is in a state where the operation is undefined
    InvalidState,
}

/// Errors from arithmetic and construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    #[error("denominator must not be zero")]
    ZeroDenominator,

    #[error("precision must be in the open interval (0, 1), got {0}")]
    PrecisionOutOfRange(BigDecimal),

    #[error("scale must not be negative, got {0}")]
    NegativeScale(i64),

    #[error("cannot take the square root of negative value {0}")]
    NegativeSquareRoot(BigDecimal),

    #[error("{0} is not a perfect square")]
    NotPerfectSquare(BigInt),

    #[error("exponent must not be negative, got {0}")]
    NegativeExponent(i64),

    #[error("rounding necessary to represent result at requested scale")]
    RoundingNecessary,

    #[error("division by zero")]
    DivisionByZero,

    #[error("{0} is not invertible")]
    NotInvertible(String),

    #[error("argument of zero is undefined")]
    UndefinedArgument,

    #[error("trigonometric evaluation failed: {0}")]
    Trigonometry(String),
}

impl NumericError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        use NumericError::*;

        match *self {
            ZeroDenominator
            | PrecisionOutOfRange(_)
            | NegativeScale(_)
            | NegativeSquareRoot(_)
            | NotPerfectSquare(_)
            | NegativeExponent(_)
            | RoundingNecessary => ErrorKind::InvalidArgument,
            DivisionByZero
            | NotInvertible(_)
            | UndefinedArgument
            | Trigonometry(_) => ErrorKind::InvalidState,
        }
    }
}

pub type Result<T> = std::result::Result<T, NumericError>;


/// Errors from parsing values out of strings
#[derive(Error, Debug)]
pub enum ParseNumberError {
    #[error("failed to parse empty string")]
    Empty,

    #[error(transparent)]
    ParseBigInt(#[from] ParseBigIntError),

    #[error(transparent)]
    ParseBigDecimal(#[from] bigdecimal::ParseBigDecimalError),

    #[error("zero denominator in {0:?}")]
    ZeroDenominator(String),

    #[error("malformed complex number {0:?}")]
    MalformedComplex(String),
}


#[cfg(test)]
mod test_error_kind {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $err:expr => $kind:ident) => {
            #[test]
            fn $name() {
                assert_eq!($err.kind(), ErrorKind::$kind);
            }
        };
    }

    impl_case!(case_zero_denominator: NumericError::ZeroDenominator => InvalidArgument);
    impl_case!(case_negative_scale: NumericError::NegativeScale(-1) => InvalidArgument);
    impl_case!(case_negative_exponent: NumericError::NegativeExponent(-3) => InvalidArgument);
    impl_case!(case_not_perfect_square: NumericError::NotPerfectSquare(BigInt::from(2)) => InvalidArgument);
    impl_case!(case_rounding_necessary: NumericError::RoundingNecessary => InvalidArgument);
    impl_case!(case_not_invertible: NumericError::NotInvertible("0/1".into()) => InvalidState);
    impl_case!(case_undefined_argument: NumericError::UndefinedArgument => InvalidState);
    impl_case!(case_division_by_zero: NumericError::DivisionByZero => InvalidState);

    #[test]
    fn display_includes_value() {
        let err = NumericError::NegativeSquareRoot(BigDecimal::from(-4));
        assert_eq!(err.to_string(), "cannot take the square root of negative value -4");
    }
}
