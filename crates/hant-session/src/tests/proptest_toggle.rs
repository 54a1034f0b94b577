//! Property-based tests for the toggle state machine.
//!
//! Random texts built from marker characters and filler go through random
//! numbers of toggles; the label must always describe the next conversion.

use proptest::prelude::*;

use hant_core::markers::MARKER_PAIRS;
use hant_core::{toggle_label, Script, ScriptState};

use super::table_converter;
use crate::DocumentSession;

fn arb_char() -> impl Strategy<Value = char> {
    prop_oneof![
        3 => prop::sample::select(MARKER_PAIRS.to_vec()).prop_map(|(t, _)| t),
        3 => prop::sample::select(MARKER_PAIRS.to_vec()).prop_map(|(_, s)| s),
        2 => prop::sample::select(vec!['是', '的', '一', '我', '在']),
        1 => prop::sample::select(vec!['a', '1', ' ', '\n', '，', '。']),
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_char(), 0..80).prop_map(|cs| cs.into_iter().collect())
}

proptest! {
    #[test]
    fn label_always_matches_next_toggle(text in arb_text(), toggles in 1usize..8) {
        let converter = table_converter();
        let mut session = DocumentSession::new(&converter, "", &text);
        session.detect();

        for _ in 0..toggles {
            let state = session.state().script().unwrap();
            let label = session.toggle_label().unwrap();
            prop_assert_eq!(label, toggle_label(state));

            let (from, to) = label.split_once('→').unwrap();
            prop_assert_eq!(from, state.name());

            let after = session.toggle();
            prop_assert_eq!(after.name(), to);
            prop_assert_eq!(session.state(), ScriptState::Resolved(after));
        }
    }

    #[test]
    fn repeated_toggles_do_not_compound(text in arb_text()) {
        let converter = table_converter();
        let mut session = DocumentSession::new(&converter, "", &text);
        session.detect();

        session.toggle();
        let first = session.text();
        session.toggle();
        let second = session.text();
        session.toggle();
        prop_assert_eq!(session.text(), first);
        session.toggle();
        prop_assert_eq!(session.text(), second);
    }

    #[test]
    fn toggle_preserves_length(text in arb_text()) {
        let converter = table_converter();
        let mut session = DocumentSession::new(&converter, "", &text);
        let before = session.text().chars().count();
        session.toggle();
        prop_assert_eq!(session.text().chars().count(), before);
    }

    #[test]
    fn state_is_never_unknown_after_toggle(text in arb_text()) {
        let converter = table_converter();
        let mut session = DocumentSession::new(&converter, "", &text);
        let script = session.toggle();
        prop_assert!(matches!(script, Script::Simplified | Script::Traditional));
        prop_assert!(session.state().is_resolved());
    }
}
