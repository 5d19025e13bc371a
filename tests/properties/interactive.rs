//! Property tests for the interactive reader.

use std::io::Cursor;

use proptest::prelude::*;

use xfact::{run_interactive, InteractiveOptions, SessionEvent, StopReason};

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        (-20i64..40).prop_map(|n| n.to_string()),
        proptest::string::string_regex("[A-Za-z0-9+\\-.]{1,8}").unwrap(),
    ]
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(" "), Just("\n"), Just("\t"), Just("  \n ")]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any input ends the session exactly once, with counts that add up.
    #[test]
    fn property_session_always_stops_once(
        parts in proptest::collection::vec((token(), separator()), 0..=16),
    ) {
        let input: String = parts.iter().map(|(t, s)| format!("{}{}", t, s)).collect();

        let mut stops = 0;
        let mut evaluations = 0;
        let mut prompts = 0;
        let summary = run_interactive(Cursor::new(input), InteractiveOptions::default(), |event| {
            match event {
                SessionEvent::Prompt => prompts += 1,
                SessionEvent::Evaluated(_) => evaluations += 1,
                SessionEvent::Stopped(_) => stops += 1,
            }
            Ok(())
        })
        .unwrap();

        prop_assert_eq!(stops, 1);
        prop_assert_eq!(summary.evaluated, evaluations);
        prop_assert_eq!(summary.succeeded + summary.failed, summary.evaluated);
        prop_assert_eq!(prompts, evaluations + 1);
    }

    /// PROPERTY: Tokens after the sentinel are never evaluated.
    #[test]
    fn property_nothing_after_sentinel(
        before in proptest::collection::vec(0i64..15, 0..=6),
        after in proptest::collection::vec(0i64..15, 1..=6),
    ) {
        let mut words: Vec<String> = before.iter().map(|n| n.to_string()).collect();
        words.push("-1".to_string());
        words.extend(after.iter().map(|n| n.to_string()));

        let summary = run_interactive(
            Cursor::new(words.join(" ")),
            InteractiveOptions::default(),
            |_| Ok(()),
        )
        .unwrap();

        prop_assert_eq!(summary.stop, StopReason::Sentinel);
        prop_assert_eq!(summary.evaluated, before.len());
    }
}
