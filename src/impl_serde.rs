//!
//! Support for serde implementations
//!
//! Rational and complex numbers serialize as their display strings
//! (`"3/4"`, `"3-4i"`), so no precision is lost in formats without
//! arbitrary precision numbers. PolarForm serializes as a struct of
//! two decimal strings.
//!
use crate::*;
use serde::{de, ser};
use std::marker::PhantomData;


impl ser::Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}

impl<T: Component> ser::Serialize for Complex<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}


/// Used by SerDe to construct any value parsed from a string
struct FromStrVisitor<V> {
    expecting: &'static str,
    value: PhantomData<V>,
}

impl<V> FromStrVisitor<V> {
    fn new(expecting: &'static str) -> Self {
        Self { expecting, value: PhantomData }
    }
}

impl<'de, V> de::Visitor<'de> for FromStrVisitor<V>
where
    V: FromStr,
    V::Err: fmt::Display,
{
    type Value = V;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.expecting)
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<V, E>
    where
        E: de::Error,
    {
        V::from_str(value).map_err(|err| E::custom(format!("{}", err)))
    }

    fn visit_i64<E>(self, value: i64) -> std::result::Result<V, E>
    where
        E: de::Error,
    {
        V::from_str(&value.to_string()).map_err(|err| E::custom(format!("{}", err)))
    }

    fn visit_u64<E>(self, value: u64) -> std::result::Result<V, E>
    where
        E: de::Error,
    {
        V::from_str(&value.to_string()).map_err(|err| E::custom(format!("{}", err)))
    }

    /// Floats parse from their shortest round-trip form, so `1.1` is
    /// read as the decimal 1.1 rather than its binary expansion
    fn visit_f64<E>(self, value: f64) -> std::result::Result<V, E>
    where
        E: de::Error,
    {
        if !value.is_finite() {
            return Err(E::invalid_value(de::Unexpected::Float(value), &self));
        }
        V::from_str(&value.to_string()).map_err(|err| E::custom(format!("{}", err)))
    }
}

impl<'de> de::Deserialize<'de> for Rational {
    fn deserialize<D>(d: D) -> std::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(FromStrVisitor::new("a fraction string or number"))
    }
}

impl<'de, T> de::Deserialize<'de> for Complex<T>
where
    T: Component + FromStr,
    ParseNumberError: From<<T as FromStr>::Err>,
{
    fn deserialize<D>(d: D) -> std::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(FromStrVisitor::new("a complex number string or number"))
    }
}


/// Decimal serialized through its string form
struct DecimalStr<'a>(&'a BigDecimal);

impl ser::Serialize for DecimalStr<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(self.0)
    }
}

struct DecimalString(BigDecimal);

impl<'de> de::Deserialize<'de> for DecimalString {
    fn deserialize<D>(d: D) -> std::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(FromStrVisitor::<BigDecimal>::new("a decimal string or number"))
            .map(DecimalString)
    }
}

const POLAR_FIELDS: &[&str] = &["radial", "angular"];

impl ser::Serialize for PolarForm {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("PolarForm", 2)?;
        state.serialize_field("radial", &DecimalStr(self.radial()))?;
        state.serialize_field("angular", &DecimalStr(self.angular()))?;
        state.end()
    }
}

enum PolarField {
    Radial,
    Angular,
}

impl<'de> de::Deserialize<'de> for PolarField {
    fn deserialize<D>(d: D) -> std::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct FieldVisitor;

        impl<'de> de::Visitor<'de> for FieldVisitor {
            type Value = PolarField;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "`radial` or `angular`")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<PolarField, E>
            where
                E: de::Error,
            {
                match value {
                    "radial" => Ok(PolarField::Radial),
                    "angular" => Ok(PolarField::Angular),
                    _ => Err(de::Error::unknown_field(value, POLAR_FIELDS)),
                }
            }
        }

        d.deserialize_identifier(FieldVisitor)
    }
}

struct PolarFormVisitor;

impl<'de> de::Visitor<'de> for PolarFormVisitor {
    type Value = PolarForm;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "struct PolarForm")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<PolarForm, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let DecimalString(radial) = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let DecimalString(angular) = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        Ok(PolarForm::new(radial, angular))
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<PolarForm, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        let mut radial = None;
        let mut angular = None;

        while let Some(key) = map.next_key()? {
            match key {
                PolarField::Radial => {
                    if radial.is_some() {
                        return Err(de::Error::duplicate_field("radial"));
                    }
                    let DecimalString(value) = map.next_value()?;
                    radial = Some(value);
                }
                PolarField::Angular => {
                    if angular.is_some() {
                        return Err(de::Error::duplicate_field("angular"));
                    }
                    let DecimalString(value) = map.next_value()?;
                    angular = Some(value);
                }
            }
        }

        let radial = radial.ok_or_else(|| de::Error::missing_field("radial"))?;
        let angular = angular.ok_or_else(|| de::Error::missing_field("angular"))?;
        Ok(PolarForm::new(radial, angular))
    }
}

impl<'de> de::Deserialize<'de> for PolarForm {
    fn deserialize<D>(d: D) -> std::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_struct("PolarForm", POLAR_FIELDS, PolarFormVisitor)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    use serde_test::{
        Token, assert_tokens, assert_de_tokens, assert_de_tokens_error
    };

    mod rational {
        use super::*;

        macro_rules! impl_case {
            ($name:ident : $n:literal / $d:literal => $output:literal) => {
                #[test]
                fn $name() {
                    let value = Rational::new($n, $d).unwrap();
                    assert_tokens(&value, &[Token::Str($output)]);
                }
            }
        }

        impl_case!(case_3_4: 3 / 4 => "3/4");
        impl_case!(case_n3_4: -3 / 4 => "-3/4");
        impl_case!(case_2_n4: 2 / -4 => "2/-4");

        #[test]
        fn from_integer_token() {
            assert_de_tokens(&Rational::from_integer(-7), &[Token::I64(-7)]);
            assert_de_tokens(&Rational::from_integer(7), &[Token::U64(7)]);
        }

        #[test]
        fn zero_denominator() {
            assert_de_tokens_error::<Rational>(&[Token::Str("1/0")], "zero denominator in \"1/0\"");
        }
    }

    mod complex {
        use super::*;

        #[test]
        fn big() {
            let z = BigComplex::new(3.into(), (-4).into());
            assert_tokens(&z, &[Token::Str("3-4i")]);
        }

        #[test]
        fn decimal() {
            let z = DecimalComplex::new("1.25".parse().unwrap(), "0.5".parse().unwrap());
            assert_tokens(&z, &[Token::Str("1.25+0.5i")]);
        }

        #[test]
        fn from_float_token() {
            let z = DecimalComplex::new("1.5".parse().unwrap(), 0.into());
            assert_de_tokens(&z, &[Token::F64(1.5)]);

            let z = DecimalComplex::new("-0.1".parse().unwrap(), 0.into());
            assert_de_tokens(&z, &[Token::F64(-0.1)]);

            assert_de_tokens(&BigComplex::new(2.into(), 0.into()), &[Token::F64(2.0)]);
        }

        #[test]
        fn non_finite_float() {
            assert_de_tokens_error::<DecimalComplex>(
                &[Token::F64(f64::NAN)],
                "invalid value: floating point `NaN`, expected a complex number string or number",
            );
        }

        #[test]
        fn malformed() {
            assert_de_tokens_error::<BigComplex>(&[Token::Str("3+4ii")], "malformed complex number \"3+4ii\"");
        }
    }

    mod polar {
        use super::*;

        #[test]
        fn struct_tokens() {
            let p = PolarForm::new(5.into(), "0.9272952180".parse().unwrap());
            assert_tokens(&p, &[
                Token::Struct { name: "PolarForm", len: 2 },
                Token::Str("radial"),
                Token::Str("5"),
                Token::Str("angular"),
                Token::Str("0.9272952180"),
                Token::StructEnd,
            ]);
        }

        #[test]
        fn seq_tokens() {
            let p = PolarForm::new(2.into(), "-1.5".parse().unwrap());
            assert_de_tokens(&p, &[
                Token::Seq { len: Some(2) },
                Token::Str("2"),
                Token::Str("-1.5"),
                Token::SeqEnd,
            ]);
        }

        #[test]
        fn missing_field() {
            assert_de_tokens_error::<PolarForm>(
                &[
                    Token::Struct { name: "PolarForm", len: 1 },
                    Token::Str("radial"),
                    Token::Str("5"),
                    Token::StructEnd,
                ],
                "missing field `angular`",
            );
        }
    }

    mod json {
        use super::*;

        #[test]
        fn round_trip() {
            let value = Rational::new(-6, 4).unwrap();
            let json = serde_json::to_string(&value).unwrap();
            assert_eq!(json, "\"-6/4\"");
            assert_eq!(serde_json::from_str::<Rational>(&json).unwrap(), value);

            let polar = PolarForm::new(5.into(), "0.5".parse().unwrap());
            let json = serde_json::to_string(&polar).unwrap();
            assert_eq!(json, r#"{"radial":"5","angular":"0.5"}"#);
            assert_eq!(serde_json::from_str::<PolarForm>(&json).unwrap(), polar);
        }

        #[test]
        fn float_number() {
            let z: DecimalComplex = serde_json::from_str("1.5").unwrap();
            assert_eq!(z, DecimalComplex::new("1.5".parse().unwrap(), 0.into()));

            let polar: PolarForm = serde_json::from_str(r#"{"radial":2,"angular":0.25}"#).unwrap();
            assert_eq!(polar, PolarForm::new(2.into(), "0.25".parse().unwrap()));

            assert!(serde_json::from_str::<Rational>("1.5").is_err());
        }

        #[test]
        fn integer_number() {
            let value: Rational = serde_json::from_str("12").unwrap();
            assert_eq!(value, Rational::from_integer(12));
        }
    }
}
