//! Routines for parsing rational and complex numbers from strings

use crate::*;


impl FromStr for Rational {
    type Err = ParseNumberError;

    /// Parse `"n/d"` or `"n"`, whitespace allowed around each part
    ///
    /// The fraction is kept as written, so `"2/4"` is not reduced.
    fn from_str(s: &str) -> std::result::Result<Rational, ParseNumberError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseNumberError::Empty);
        }

        let (numerator, denominator) = match s.split_once('/') {
            None => (BigInt::from_str(s)?, BigInt::one()),
            Some((n, d)) => (BigInt::from_str(n.trim())?, BigInt::from_str(d.trim())?),
        };

        Rational::new(numerator, denominator)
            .map_err(|_| ParseNumberError::ZeroDenominator(s.to_string()))
    }
}


/// Parse `"a+bi"`, `"a-bi"`, `"bi"`, `"a"`, and the unit forms `"i"`, `"-i"`
///
/// Whitespace anywhere is ignored. Exponents in decimal parts (`1e-3`)
/// are not mistaken for the sign of the imaginary part.
impl<T> FromStr for Complex<T>
where
    T: Component + FromStr,
    ParseNumberError: From<<T as FromStr>::Err>,
{
    type Err = ParseNumberError;

    fn from_str(s: &str) -> std::result::Result<Complex<T>, ParseNumberError> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(ParseNumberError::Empty);
        }

        let body = match compact.strip_suffix('i') {
            Some(body) => body,
            None => {
                if compact.contains('i') {
                    return Err(ParseNumberError::MalformedComplex(s.to_string()));
                }
                return Ok(Complex::new(T::from_str(&compact)?, T::zero()));
            }
        };
        if body.contains('i') {
            return Err(ParseNumberError::MalformedComplex(s.to_string()));
        }

        let (real, imaginary) = match find_imaginary_sign(body) {
            Some(idx) => body.split_at(idx),
            None => ("", body),
        };

        let real = if real.is_empty() { T::zero() } else { T::from_str(real)? };
        let imaginary = match imaginary {
            "" | "+" => T::one(),
            "-" => -T::one(),
            digits => T::from_str(digits)?,
        };

        Ok(Complex::new(real, imaginary))
    }
}

/// Index of the sign that starts the imaginary part, if any
///
/// A leading sign belongs to the first number, and a sign right after
/// an exponent marker belongs to the exponent.
fn find_imaginary_sign(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&idx| matches!(bytes[idx], b'+' | b'-') && !matches!(bytes[idx - 1], b'e' | b'E'))
}
