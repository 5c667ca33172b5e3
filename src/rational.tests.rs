// Test Rational arithmetic and canonical forms

fn r(n: i64, d: i64) -> Rational {
    Rational::new(n, d).unwrap()
}

#[test]
fn one_half_plus_one_third() {
    let sum = r(1, 2).add(&r(1, 3));
    assert_eq!(sum, r(5, 6));
}

#[test]
fn zero_denominator_rejected() {
    let err = Rational::new(1, 0).unwrap_err();
    assert_eq!(err, NumericError::ZeroDenominator);
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn structural_equality_is_not_equivalence() {
    assert_ne!(r(1, 2), r(2, 4));
    assert!(r(1, 2).equivalent(&r(2, 4)));
    assert!(r(-1, 2).equivalent(&r(1, -2)));
    assert!(!r(1, 2).equivalent(&r(-1, 2)));
}

#[test]
fn constants() {
    assert_eq!(*ZERO, r(0, 1));
    assert_eq!(*ONE, r(1, 1));
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

    impl_case!(case_1_2_1_2: add(r(1, 2), r(1, 2)) => r(4, 4));
    impl_case!(case_1_2_n1_3: add(r(1, 2), r(-1, 3)) => r(1, 6));
    impl_case!(case_3_n4_1_4: add(r(3, -4), r(1, 4)) => r(8, -16));
    impl_case!(case_0_1_2_3: add(r(0, 1), r(2, 3)) => r(2, 3));
}

mod subtract {
    use super::*;

    impl_case!(case_1_2_1_3: subtract(r(1, 2), r(1, 3)) => r(1, 6));
    impl_case!(case_1_3_1_2: subtract(r(1, 3), r(1, 2)) => r(-1, 6));
    impl_case!(case_1_2_1_2: subtract(r(1, 2), r(1, 2)) => r(0, 4));
}

mod multiply {
    use super::*;

    impl_case!(case_2_3_3_4: multiply(r(2, 3), r(3, 4)) => r(6, 12));
    impl_case!(case_n1_2_1_n5: multiply(r(-1, 2), r(1, -5)) => r(-1, -10));
    impl_case!(case_0_7_3_4: multiply(r(0, 7), r(3, 4)) => r(0, 28));
}

mod divide {
    use super::*;

    #[test]
    fn by_nonzero() {
        assert_eq!(r(1, 2).divide(&r(3, 4)).unwrap(), r(4, 6));
        assert_eq!(r(-1, 2).divide(&r(-3, 5)).unwrap(), r(-5, -6));
    }

    #[test]
    fn by_zero() {
        let err = r(1, 2).divide(&r(0, 3)).unwrap_err();
        assert_eq!(err, NumericError::NotInvertible("0/3".into()));
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }
}

mod unary {
    use super::*;

    #[test]
    fn negate() {
        assert_eq!(r(1, 2).negate(), r(-1, 2));
        assert_eq!(r(1, -2).negate(), r(-1, -2));
    }

    #[test]
    fn invert() {
        assert_eq!(r(2, 3).invert().unwrap(), r(3, 2));
        assert_eq!(r(-2, 3).invert().unwrap(), r(3, -2));
        assert_eq!(r(0, 3).invert().unwrap_err().kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn abs() {
        assert_eq!(r(-2, 3).abs(), r(2, 3));
        assert_eq!(r(-2, -3).abs(), r(2, 3));
        assert_eq!(r(2, -3).abs(), r(2, 3));
    }

    #[test]
    fn signum() {
        assert_eq!(r(2, 3).signum(), 1);
        assert_eq!(r(-2, -3).signum(), 1);
        assert_eq!(r(-2, 3).signum(), -1);
        assert_eq!(r(2, -3).signum(), -1);
        assert_eq!(r(0, -3).signum(), 0);
        assert!(r(2, -3).is_negative());
        assert!(!r(0, -3).is_negative());
        assert!(r(0, -3).is_zero());
    }
}

mod pow {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:expr, $exp:literal => $expected:expr) => {
            #[test]
            fn $name() {
                assert_eq!($a.pow($exp), $expected);
            }
        };
    }

    impl_case!(case_2_3_sq: r(2, 3), 2 => Ok(r(4, 9)));
    impl_case!(case_n1_2_cube: r(-1, 2), 3 => Ok(r(-1, 8)));
    impl_case!(case_1_n2_sq: r(1, -2), 2 => Ok(r(1, 4)));
    impl_case!(case_0th: r(7, 9), 0 => Ok(r(1, 1)));
    impl_case!(case_zero_0th: r(0, 9), 0 => Ok(r(1, 1)));
    impl_case!(case_negative: r(7, 9), -1 => Err(NumericError::NegativeExponent(-1)));
}

mod canonical {
    use super::*;

    #[test]
    fn normalize() {
        assert_eq!(r(1, -2).normalize(), r(-1, 2));
        assert_eq!(r(-1, -2).normalize(), r(1, 2));
        assert_eq!(r(-1, 2).normalize(), r(-1, 2));
        assert_eq!(r(0, -5).normalize(), r(0, 1));
        assert_eq!(r(0, 5).normalize(), r(0, 1));
    }

    #[test]
    fn reduce() {
        assert_eq!(r(6, 12).reduce(), r(1, 2));
        assert_eq!(r(-6, 12).reduce(), r(-1, 2));
        assert_eq!(r(6, -12).reduce(), r(1, -2));
        assert_eq!(r(5, 7).reduce(), r(5, 7));
        assert_eq!(r(0, 7).reduce(), r(0, 1));
    }

    #[test]
    fn normalize_reduce_is_idempotent() {
        let x = r(-18, -24).normalize().reduce();
        assert_eq!(x, r(3, 4));
        assert_eq!(x.normalize().reduce(), x);
    }
}

mod to_decimal {
    use super::*;

    #[test]
    fn default_context() {
        let d = r(1, 3).to_decimal().unwrap();
        assert_eq!(d, "0.3333333333".parse::<BigDecimal>().unwrap());
    }

    #[test]
    fn negative_denominator() {
        let ctx = Context::default().with_scale(2).unwrap();
        let d = r(2, -3).to_decimal_with_context(&ctx).unwrap();
        assert_eq!(d, "-0.67".parse::<BigDecimal>().unwrap());
    }

    #[test]
    fn unnecessary_rounding() {
        let ctx = Context::default().with_rounding_mode(RoundingMode::Unnecessary);
        assert_eq!(r(1, 3).to_decimal_with_context(&ctx), Err(NumericError::RoundingNecessary));
        assert_eq!(r(1, 8).to_decimal_with_context(&ctx).unwrap(), "0.125".parse::<BigDecimal>().unwrap());
    }
}

mod prop {
    use super::*;
    use proptest::prelude::*;

    fn rational() -> impl Strategy<Value = Rational> {
        (-1000i64..1000, (-1000i64..1000).prop_filter("nonzero", |d| *d != 0))
            .prop_map(|(n, d)| r(n, d))
    }

    proptest! {
        #[test]
        fn add_commutes(a in rational(), b in rational()) {
            prop_assert!(a.add(&b).equivalent(&b.add(&a)));
        }

        #[test]
        fn add_associates(a in rational(), b in rational(), c in rational()) {
            prop_assert!(a.add(&b).add(&c).equivalent(&a.add(&b.add(&c))));
        }

        #[test]
        fn multiply_distributes(a in rational(), b in rational(), c in rational()) {
            let lhs = a.multiply(&b.add(&c));
            let rhs = a.multiply(&b).add(&a.multiply(&c));
            prop_assert!(lhs.equivalent(&rhs));
        }

        #[test]
        fn subtract_self_is_zero(a in rational()) {
            prop_assert!(a.subtract(&a).equivalent(&ZERO));
        }

        #[test]
        fn divide_self_is_one(a in rational()) {
            prop_assume!(!a.is_zero());
            prop_assert!(a.divide(&a).unwrap().equivalent(&ONE));
        }
    }
}
