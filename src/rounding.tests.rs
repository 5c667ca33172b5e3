
#[allow(non_snake_case)]
mod test_round_quotient {
    use paste::paste;
    use super::*;

    macro_rules! impl_test {
        ( $($mode:ident),+ => $expected:literal) => {
            $(
                paste! {
                    #[test]
                    fn [< mode_ $mode >]() {
                        let (dividend, divisor) = test_input();
                        let mode = self::RoundingMode::$mode;
                        let result = mode.round_quotient(&dividend, &divisor).unwrap();
                        assert_eq!(result, BigInt::from($expected));
                    }
                }
            )*
        }
    }

    macro_rules! define_test_input {
        ( $dividend:literal / $divisor:literal ) => {
            fn test_input() -> (BigInt, BigInt) {
                (BigInt::from($dividend), BigInt::from($divisor))
            }
        };
    }

    mod case_55_10 {
        use super::*;

        define_test_input!(55 / 10);

        impl_test!(Up, Ceiling, HalfUp, HalfEven => 6);
        impl_test!(Down, Floor, HalfDown => 5);
    }

    mod case_neg_55_10 {
        use super::*;

        define_test_input!(-55 / 10);

        impl_test!(Up, Floor, HalfUp, HalfEven => -6);
        impl_test!(Down, Ceiling, HalfDown => -5);
    }

    mod case_25_10 {
        use super::*;

        define_test_input!(25 / 10);

        impl_test!(Up, Ceiling, HalfUp => 3);
        impl_test!(Down, Floor, HalfDown, HalfEven => 2);
    }

    mod case_neg_25_10 {
        use super::*;

        define_test_input!(-25 / 10);

        impl_test!(Up, Floor, HalfUp => -3);
        impl_test!(Down, Ceiling, HalfDown, HalfEven => -2);
    }

    mod case_16_10 {
        use super::*;

        define_test_input!(16 / 10);

        impl_test!(Up, Ceiling, HalfUp, HalfDown, HalfEven => 2);
        impl_test!(Down, Floor => 1);
    }

    mod case_neg_11_10 {
        use super::*;

        define_test_input!(-11 / 10);

        impl_test!(Up, Floor => -2);
        impl_test!(Down, Ceiling, HalfUp, HalfDown, HalfEven => -1);
    }

    mod case_1_neg_3 {
        use super::*;

        define_test_input!(1 / -3);

        impl_test!(Up, Floor => -1);
        impl_test!(Down, Ceiling, HalfUp, HalfDown, HalfEven => 0);
    }

    mod case_neg_2_neg_3 {
        use super::*;

        define_test_input!(-2 / -3);

        impl_test!(Up, Ceiling, HalfUp, HalfDown, HalfEven => 1);
        impl_test!(Down, Floor => 0);
    }

    mod case_40_10 {
        use super::*;

        define_test_input!(40 / 10);

        impl_test!(Up, Down, Ceiling, Floor, HalfUp, HalfDown, HalfEven, Unnecessary => 4);
    }

    #[test]
    fn unnecessary_rejects_inexact() {
        let result = RoundingMode::Unnecessary.round_quotient(&BigInt::from(1), &BigInt::from(3));
        assert_eq!(result, Err(NumericError::RoundingNecessary));
    }

    #[test]
    fn zero_divisor() {
        let result = RoundingMode::HalfUp.round_quotient(&BigInt::from(1), &BigInt::zero());
        assert_eq!(result, Err(NumericError::DivisionByZero));
    }
}


mod test_conversions {
    use super::*;

    macro_rules! impl_case {
        ($($mode:ident),*) => {
            $(
                paste::paste! {
                    #[test]
                    fn [< roundtrip_ $mode:snake >]() {
                        let theirs = bigdecimal::RoundingMode::$mode;
                        let ours = RoundingMode::from(theirs);
                        assert_eq!(ours, RoundingMode::$mode);
                        assert_eq!(bigdecimal::RoundingMode::try_from(ours), Ok(theirs));
                    }
                }
            )*
        };
    }

    impl_case!(Up, Down, Ceiling, Floor, HalfUp, HalfDown, HalfEven);

    #[test]
    fn unnecessary_has_no_counterpart() {
        let result = bigdecimal::RoundingMode::try_from(RoundingMode::Unnecessary);
        assert_eq!(result, Err(RoundingMode::Unnecessary));
    }

    #[test]
    fn default_is_half_up() {
        assert_eq!(RoundingMode::default(), RoundingMode::HalfUp);
    }
}
