// Test arithmetic shared by both component types

fn bc(re: i64, im: i64) -> BigComplex {
    BigComplex::new(re.into(), im.into())
}

fn dc(re: &str, im: &str) -> DecimalComplex {
    DecimalComplex::new(re.parse().unwrap(), im.parse().unwrap())
}

macro_rules! impl_case {
    ($name:ident: $method:ident ($a:expr, $b:expr) => $expected:expr) => {
        #[test]
        fn $name() {
            assert_eq!($a.$method(&$b), $expected);
        }
    };
}

mod add {
    use super::*;

    impl_case!(case_big: add(bc(1, 2), bc(3, -5)) => bc(4, -3));
    impl_case!(case_decimal: add(dc("1.5", "2"), dc("-0.25", "0.1")) => dc("1.25", "2.1"));
}

mod subtract {
    use super::*;

    impl_case!(case_big: subtract(bc(1, 2), bc(3, -5)) => bc(-2, 7));
    impl_case!(case_decimal: subtract(dc("1.5", "2"), dc("-0.25", "0.1")) => dc("1.75", "1.9"));
}

mod multiply {
    use super::*;

    impl_case!(case_big: multiply(bc(1, 2), bc(3, 4)) => bc(-5, 10));
    impl_case!(case_i_squared: multiply(bc(0, 1), bc(0, 1)) => bc(-1, 0));
    impl_case!(case_decimal: multiply(dc("0.5", "1.5"), dc("2", "-2")) => dc("4", "2"));
}

#[test]
fn negate_and_conjugate() {
    assert_eq!(bc(3, -4).negate(), bc(-3, 4));
    assert_eq!(bc(3, -4).conjugate(), bc(3, 4));
    assert_eq!(dc("1.5", "0").conjugate(), dc("1.5", "0"));
}

#[test]
fn abs_pow2() {
    assert_eq!(bc(3, 4).abs_pow2(), BigInt::from(25));
    assert_eq!(bc(-3, -4).abs_pow2(), BigInt::from(25));
    assert_eq!(dc("0.5", "1.5").abs_pow2(), "2.5".parse::<BigDecimal>().unwrap());
}

mod pow {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $z:expr, $exp:literal => $expected:expr) => {
            #[test]
            fn $name() {
                assert_eq!($z.pow($exp), $expected);
            }
        };
    }

    impl_case!(case_1p1i_sq: bc(1, 1), 2 => Ok(bc(0, 2)));
    impl_case!(case_1p1i_4th: bc(1, 1), 4 => Ok(bc(-4, 0)));
    impl_case!(case_0th: bc(7, 9), 0 => Ok(bc(1, 0)));
    impl_case!(case_zero_0th: bc(0, 0), 0 => Ok(bc(1, 0)));
    impl_case!(case_first: bc(7, 9), 1 => Ok(bc(7, 9)));
    impl_case!(case_decimal: dc("0.5", "0"), 3 => Ok(dc("0.125", "0")));
    impl_case!(case_negative: bc(7, 9), -2 => Err(NumericError::NegativeExponent(-2)));
}

#[test]
fn matrix() {
    let m = bc(2, 5).matrix();
    let n = |x: i64| BigInt::from(x);
    assert_eq!(m, [[n(2), n(-5)], [n(5), n(2)]]);

    // multiplying matrices multiplies the numbers
    let a = bc(2, 5);
    let b = bc(-1, 3);
    let [[p, q], [r, s]] = a.matrix();
    let [[w, x], [y, z]] = b.matrix();
    let product = [
        [&p * &w + &q * &y, &p * &x + &q * &z],
        [&r * &w + &s * &y, &r * &x + &s * &z],
    ];
    assert_eq!(product, a.multiply(&b).matrix());
}

#[test]
fn from_real() {
    assert_eq!(BigComplex::from(BigInt::from(7)), bc(7, 0));
    assert!(bc(7, 0).is_real());
    assert!(!bc(7, 1).is_real());
    assert!(bc(0, 0).is_zero());
    assert!(!bc(0, 1).is_zero());
}

mod prop {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn conjugate_product_is_real(a in -10_000i64..10_000, b in -10_000i64..10_000) {
            let z = bc(a, b);
            let product = z.multiply(&z.conjugate());
            prop_assert!(product.imaginary().is_zero());
            prop_assert_eq!(product.real(), &z.abs_pow2());
        }

        #[test]
        fn multiply_commutes(a in -1000i64..1000, b in -1000i64..1000, c in -1000i64..1000, d in -1000i64..1000) {
            prop_assert_eq!(bc(a, b).multiply(&bc(c, d)), bc(c, d).multiply(&bc(a, b)));
        }

        #[test]
        fn decimal_conjugate_product_is_real(a in -10_000i64..10_000, b in -10_000i64..10_000, scale in 0i64..4) {
            let z = DecimalComplex::new(BigDecimal::new(a.into(), scale), BigDecimal::new(b.into(), scale));
            let product = z.multiply(&z.conjugate());
            prop_assert!(product.imaginary().is_zero());
            prop_assert_eq!(product.real(), &z.abs_pow2());
        }
    }
}
