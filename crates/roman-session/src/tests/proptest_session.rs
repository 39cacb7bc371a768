//! Property-based tests for TransliterationSession.
//!
//! Random submission sequences must keep the counter, the history bound and
//! the current output consistent with each other.

use proptest::prelude::*;

use roman_core::engine::transliterate;

use super::make_fallback_session;

fn arb_input() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::collection::vec(
            prop::sample::select(vec![
                'ا', 'ب', 'د', 'ک', 'ی', 'ہ', 'ے', 'ء', 'م', 'ن', ' ', '\n', '؟', 'a',
            ]),
            0..12,
        )
        .prop_map(|cs| cs.into_iter().collect::<String>()),
        1 => Just(String::new()),
        1 => Just("   ".to_string()),
    ]
}

proptest! {
    #[test]
    fn prop_session_invariants(
        inputs in prop::collection::vec(arb_input(), 0..20),
        max_records in 1usize..6,
    ) {
        let mut s = make_fallback_session(max_records);
        let mut accepted = 0u64;
        let mut last_output: Option<String> = None;

        for input in &inputs {
            match s.submit(input) {
                Ok(outcome) => {
                    prop_assert!(!input.trim().is_empty());
                    prop_assert_eq!(&outcome.output, &transliterate(input));
                    accepted += 1;
                    last_output = Some(outcome.output);
                }
                Err(_) => prop_assert!(input.trim().is_empty()),
            }
            prop_assert_eq!(s.total_transliterations(), accepted);
            prop_assert!(s.history().len() <= max_records);
            prop_assert_eq!(s.history().len() as u64, accepted.min(max_records as u64));
            prop_assert_eq!(s.current_output(), last_output.as_deref());
        }
    }
}
