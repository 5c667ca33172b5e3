// Test division, modulus, argument and polar form of DecimalComplex

fn dc(re: &str, im: &str) -> DecimalComplex {
    DecimalComplex::new(re.parse().unwrap(), im.parse().unwrap())
}

fn dec(s: &str) -> BigDecimal {
    s.parse().unwrap()
}

#[test]
fn constants() {
    assert_eq!(*ZERO, dc("0", "0"));
    assert_eq!(*ONE, dc("1", "0"));
    assert_eq!(*IMAGINARY, dc("0", "1"));
}

mod abs {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: ($re:literal, $im:literal) => $expected:literal) => {
            #[test]
            fn $name() {
                assert_eq!(dc($re, $im).abs().unwrap(), dec($expected));
            }
        };
    }

    impl_case!(case_3_4: ("3", "4") => "5");
    impl_case!(case_0d3_0d4: ("0.3", "-0.4") => "0.5");
    impl_case!(case_1_1: ("1", "1") => "1.4142135624");
    impl_case!(case_0d5_0d5: ("0.5", "0.5") => "0.7071067812");
    impl_case!(case_0_0: ("0", "0") => "0");

    #[test]
    fn with_context() {
        let ctx = Context::default().with_scale(3).unwrap().with_rounding_mode(RoundingMode::Down);
        assert_eq!(dc("1", "1").abs_with_context(&ctx).unwrap(), dec("1.414"));
    }
}

mod divide {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: ($a:literal, $b:literal) / ($p:literal, $q:literal) => ($re:literal, $im:literal)) => {
            #[test]
            fn $name() {
                let quotient = dc($a, $b).divide(&dc($p, $q)).unwrap();
                assert_eq!(quotient, dc($re, $im));
                assert_eq!(quotient.real().as_bigint_and_exponent().1, 10);
                assert_eq!(quotient.imaginary().as_bigint_and_exponent().1, 10);
            }
        };
    }

    impl_case!(case_1p2i_3p4i: ("1", "2") / ("3", "4") => ("0.44", "0.08"));
    impl_case!(case_1_1p1i: ("1", "0") / ("1", "1") => ("0.5", "-0.5"));
    impl_case!(case_1_3: ("1", "0") / ("3", "0") => ("0.3333333333", "0"));
    impl_case!(case_2_3i: ("2", "0") / ("0", "3") => ("0", "-0.6666666667"));
    impl_case!(case_1d5p2d5i_0d5: ("1.5", "2.5") / ("0.5", "0") => ("3", "5"));

    #[test]
    fn rounding_mode_applies() {
        let ctx = Context::default().with_scale(4).unwrap().with_rounding_mode(RoundingMode::Floor);
        let quotient = dc("2", "0").divide_with_context(&dc("0", "3"), &ctx).unwrap();
        assert_eq!(quotient, dc("0", "-0.6667"));
    }

    #[test]
    fn by_zero() {
        let err = dc("1", "1").divide(&dc("0", "0.000")).unwrap_err();
        assert!(matches!(err, NumericError::NotInvertible(_)));
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn invert() {
        assert_eq!(dc("0", "2").invert().unwrap(), dc("0", "-0.5"));
        assert_eq!(dc("0", "0").invert().unwrap_err().kind(), ErrorKind::InvalidState);
    }
}

mod argument {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: ($re:literal, $im:literal) => $expected:literal) => {
            #[test]
            fn $name() {
                assert_eq!(dc($re, $im).argument().unwrap(), dec($expected));
            }
        };
    }

    // real > 0
    impl_case!(case_1_1: ("1", "1") => "0.7853981634");
    impl_case!(case_1_n1: ("1", "-1") => "-0.7853981634");
    impl_case!(case_1_0: ("1", "0") => "0");
    impl_case!(case_3_4: ("3", "4") => "0.9272952180");

    // real < 0
    impl_case!(case_n1_1: ("-1", "1") => "2.3561944902");
    impl_case!(case_n1_0: ("-1", "0") => "3.1415926536");
    impl_case!(case_n1_n1: ("-1", "-1") => "-2.3561944902");

    // real = 0
    impl_case!(case_0_2: ("0", "2") => "1.5707963268");
    impl_case!(case_0_n2: ("0", "-2") => "-1.5707963268");

    #[test]
    fn origin_is_undefined() {
        let err = dc("0", "0").argument().unwrap_err();
        assert_eq!(err, NumericError::UndefinedArgument);
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn wider_context() {
        let ctx = Context::new(dec("1e-25"), 25, RoundingMode::HalfEven).unwrap();
        let arg = dc("1", "1").argument_with_context(&ctx).unwrap();
        assert_eq!(arg, dec("0.7853981633974483096156608"));
    }
}

mod polar {
    use super::*;

    #[test]
    fn of_3_4i() {
        let polar = dc("3", "4").polar_form().unwrap();
        assert_eq!(polar.radial(), &dec("5"));
        assert_eq!(polar.angular(), &dec("0.9272952180"));
    }

    #[test]
    fn of_zero() {
        assert_eq!(dc("0", "0").polar_form(), Err(NumericError::UndefinedArgument));
    }

    macro_rules! impl_round_trip {
        ($name:ident: ($re:literal, $im:literal)) => {
            #[test]
            fn $name() {
                let z = dc($re, $im);
                let back = z.polar_form().unwrap().complex_number().unwrap();
                let tolerance = dec("1e-9");
                assert!((back.real() - z.real()).abs() < tolerance, "{} != {}", back, z);
                assert!((back.imaginary() - z.imaginary()).abs() < tolerance, "{} != {}", back, z);
            }
        };
    }

    impl_round_trip!(round_trip_1_1: ("1", "1"));
    impl_round_trip!(round_trip_3_4: ("3", "4"));
    impl_round_trip!(round_trip_n2_0d5: ("-2", "0.5"));
    impl_round_trip!(round_trip_n1_n1: ("-1", "-1"));
    impl_round_trip!(round_trip_0_n3: ("0", "-3"));
    impl_round_trip!(round_trip_0d001_7: ("0.001", "7"));
}
