//! Value ordering of rational numbers
//!
//! `Rational` equality is structural, so it does not implement
//! `PartialOrd`; an ordering where `1/2` and `2/4` compare equal would
//! disagree with `==`. The named predicates below compare values.
//!

use crate::*;

impl Rational {
    /// Compare values by cross multiplication
    ///
    /// Both operands are normalized first so the denominators are
    /// positive and multiplying through preserves the order.
    ///
    /// ```
    /// # use bignumerics::*;
    /// # use std::cmp::Ordering;
    /// let a = Rational::new(1, -3).unwrap();
    /// let b = Rational::new(-2, 5).unwrap();
    /// assert_eq!(a.cmp_value(&b), Ordering::Greater);
    /// assert_eq!(a.cmp_value(&Rational::new(2, -6).unwrap()), Ordering::Equal);
    /// ```
    pub fn cmp_value(&self, other: &Rational) -> Ordering {
        let lhs = self.normalize();
        let rhs = other.normalize();
        let a = lhs.numerator() * rhs.denominator();
        let b = rhs.numerator() * lhs.denominator();
        a.cmp(&b)
    }

    pub fn less_than_or_equal_to(&self, other: &Rational) -> bool {
        self.cmp_value(other) != Ordering::Greater
    }

    pub fn greater_than_or_equal_to(&self, other: &Rational) -> bool {
        !self.less_than_or_equal_to(other) || self.equivalent(other)
    }

    pub fn less_than(&self, other: &Rational) -> bool {
        self.less_than_or_equal_to(other) && !self.equivalent(other)
    }

    pub fn greater_than(&self, other: &Rational) -> bool {
        !self.less_than_or_equal_to(other)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    macro_rules! impl_case {
        ($name:ident: $a:expr, $b:expr => $ord:ident) => {
            paste! {
                #[test]
                fn [< $name _ $ord:snake >]() {
                    let a = $a;
                    let b = $b;
                    let expected = Ordering::$ord;
                    assert_eq!(a.cmp_value(&b), expected);
                    assert_eq!(b.cmp_value(&a), expected.reverse());

                    assert_eq!(a.less_than(&b), expected == Ordering::Less);
                    assert_eq!(a.less_than_or_equal_to(&b), expected != Ordering::Greater);
                    assert_eq!(a.greater_than(&b), expected == Ordering::Greater);
                    assert_eq!(a.greater_than_or_equal_to(&b), expected != Ordering::Less);
                }
            }
        };
    }

    impl_case!(case_1_2_vs_1_3: r(1, 2), r(1, 3) => Greater);
    impl_case!(case_1_3_vs_1_2: r(1, 3), r(1, 2) => Less);
    impl_case!(case_neg_denominators: r(1, -3), r(-1, 2) => Greater);
    impl_case!(case_both_negative: r(-1, -2), r(1, 3) => Greater);
    impl_case!(case_zero_vs_negative: r(0, -5), r(-1, 100) => Greater);

    // equality boundary: the derived predicates must agree with cmp_value
    impl_case!(case_same: r(1, 2), r(1, 2) => Equal);
    impl_case!(case_unreduced: r(1, 2), r(2, 4) => Equal);
    impl_case!(case_sign_placement: r(-3, 4), r(3, -4) => Equal);
    impl_case!(case_zeros: r(0, 7), r(0, -2) => Equal);

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn predicates_are_consistent(an in -50i64..50, ad in 1i64..50, bn in -50i64..50, bd in -50i64..-1) {
                let a = r(an, ad);
                let b = r(bn, bd);
                prop_assert_eq!(a.less_than(&b), b.greater_than(&a));
                prop_assert_eq!(a.less_than_or_equal_to(&b), b.greater_than_or_equal_to(&a));
                prop_assert_eq!(a.less_than(&b) || a.greater_than(&b), !a.equivalent(&b));
                prop_assert_eq!(a.less_than_or_equal_to(&b) && a.greater_than_or_equal_to(&b), a.equivalent(&b));
            }
        }
    }
}
