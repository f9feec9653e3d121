//! Property-based tests for the types crate.
//!
//! These tests use proptest to verify invariants around:
//! - Record field identity and immutability
//! - Stack frame text form agreeing with the parser
//! - Lossless JSON serialization

use crate::{DeprecatedUsage, ProgressNotification, StackFrame};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_identifier() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,15}").unwrap()
}

fn arb_owner() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,7}((::|\\.)[A-Za-z][A-Za-z0-9_]{0,7}){0,3}")
        .unwrap()
}

fn arb_file() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,7}(/[a-z][a-z0-9_]{0,7}){0,3}\\.(rs|java|kt)")
        .unwrap()
}

/// Columns are only generated alongside a line: the text form has no slot for a bare column.
fn arb_frame() -> impl Strategy<Value = StackFrame> {
    (
        prop::option::of(arb_owner()),
        arb_identifier(),
        prop::option::of((arb_file(), prop::option::of((1u32..100_000, prop::option::of(1u32..500))))),
    )
        .prop_map(|(owner, function, location)| {
            let mut frame = StackFrame::new(function);
            frame.owner = owner;
            if let Some((file, position)) = location {
                frame.file = Some(file);
                if let Some((line, column)) = position {
                    frame.line = Some(line);
                    frame.column = column;
                }
            }
            frame
        })
}

fn arb_stack_trace() -> impl Strategy<Value = Vec<StackFrame>> {
    prop::collection::vec(arb_frame(), 0..8)
}

/// Free text, including empty strings and non-ASCII.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), any::<String>()]
}

fn arb_usage() -> impl Strategy<Value = DeprecatedUsage> {
    (arb_text(), arb_text(), arb_text(), arb_stack_trace())
        .prop_map(|(m, d, a, s)| DeprecatedUsage::new(m, d, a, s))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn accessors_return_constructor_inputs(
        m in arb_text(),
        d in arb_text(),
        a in arb_text(),
        s in arb_stack_trace(),
    ) {
        let usage = DeprecatedUsage::new(m.clone(), d.clone(), a.clone(), s.clone());
        prop_assert_eq!(usage.message(), m.as_str());
        prop_assert_eq!(usage.detail(), d.as_str());
        prop_assert_eq!(usage.advice(), a.as_str());
        prop_assert_eq!(usage.stack_trace(), s.as_slice());
    }

    #[test]
    fn clones_are_equal_and_read_identically(usage in arb_usage()) {
        let copy = usage.clone();
        prop_assert_eq!(&copy, &usage);
        prop_assert_eq!(copy.message(), usage.message());
        prop_assert_eq!(copy.stack_trace(), usage.stack_trace());
    }

    #[test]
    fn frame_text_form_parses_back(frame in arb_frame()) {
        let text = frame.to_string();
        let parsed: StackFrame = text.parse().map_err(|e| TestCaseError::fail(format!("{e}: {text}")))?;
        prop_assert_eq!(parsed, frame);
    }

    #[test]
    fn frame_parser_never_panics(text in any::<String>()) {
        let _ = text.parse::<StackFrame>();
    }

    #[test]
    fn usage_json_is_lossless(usage in arb_usage()) {
        let json = serde_json::to_string(&usage).unwrap();
        let back: DeprecatedUsage = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, usage);
    }

    #[test]
    fn envelope_json_is_lossless(usage in arb_usage(), secs in 0i64..4_000_000_000) {
        let emitted_at = time::OffsetDateTime::from_unix_timestamp(secs).unwrap();
        let notification = ProgressNotification::new(usage, emitted_at);
        let json = serde_json::to_string(&notification).unwrap();
        let back: ProgressNotification = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, notification);
    }
}
