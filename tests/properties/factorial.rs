//! Property tests for the factorial core.

use proptest::prelude::*;

use xfact::{compute, factorial, FactorialError, Width};

/// Reference product built with `checked_mul`
fn checked_reference(n: i128, max: i128) -> Option<i128> {
    let mut acc: i128 = 1;
    for i in 2..=n {
        acc = acc.checked_mul(i)?;
        if acc > max {
            return None;
        }
    }
    Some(acc)
}

fn width() -> impl Strategy<Value = Width> {
    prop_oneof![Just(Width::I32), Just(Width::I64), Just(Width::I128)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every negative argument is rejected, never computed.
    #[test]
    fn property_negative_input_rejected(n in i32::MIN..0) {
        prop_assert_eq!(compute(n), Err(FactorialError::NegativeInput { n: n.into() }));
    }

    /// PROPERTY: Every result is either positive or a reported error.
    #[test]
    fn property_result_is_positive_or_error(n in any::<i32>()) {
        match compute(n) {
            Ok(value) => prop_assert!(value >= 1),
            Err(FactorialError::NegativeInput { .. }) => prop_assert!(n < 0),
            Err(FactorialError::Overflow { width, .. }) => {
                prop_assert!(n > 12);
                prop_assert_eq!(width, Width::I32);
            }
        }
    }

    /// PROPERTY: Same argument, same answer.
    #[test]
    fn property_repeated_calls_agree(n in -5i64..40, w in width()) {
        let n = i128::from(n);
        prop_assert_eq!(w.compute(n), w.compute(n));
    }

    /// PROPERTY: Factorial grows strictly once past 1.
    #[test]
    fn property_monotonic_within_range(a in 1i32..12, b in 2i32..=12) {
        prop_assume!(a < b);
        prop_assert!(compute(a).unwrap() < compute(b).unwrap());
    }

    /// PROPERTY: Results agree with a checked_mul reference in every width.
    #[test]
    fn property_matches_checked_reference(n in 0i64..=40, w in width()) {
        let n = i128::from(n);
        let expected = checked_reference(n, w.max_value());
        match w.compute(n) {
            Ok(value) => prop_assert_eq!(Some(value), expected),
            Err(err) => {
                prop_assert!(expected.is_none());
                prop_assert_eq!(err, FactorialError::Overflow { n, width: w });
            }
        }
    }

    /// PROPERTY: Arguments far outside the width never panic.
    #[test]
    fn property_any_i128_is_total(n in any::<i128>(), w in width()) {
        let outcome = w.compute(n);
        if n < 0 {
            prop_assert_eq!(outcome, Err(FactorialError::NegativeInput { n }));
        } else if n > w.largest_input() {
            prop_assert_eq!(outcome, Err(FactorialError::Overflow { n, width: w }));
        } else {
            prop_assert!(outcome.is_ok());
        }
    }

    /// PROPERTY: The generic core agrees across widths where both succeed.
    #[test]
    fn property_widths_agree_where_they_overlap(n in 0i32..=12) {
        let narrow = i128::from(factorial(n).unwrap());
        let wide = i128::from(factorial(i64::from(n)).unwrap());
        prop_assert_eq!(narrow, wide);
        prop_assert_eq!(factorial(i128::from(n)).unwrap(), wide);
    }
}
