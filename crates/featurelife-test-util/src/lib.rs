//! Shared test utilities for the featurelife workspace.
//!
//! This crate exists because `xtask` needs `normalize_nondeterministic` at
//! runtime (not behind `#[cfg(test)]`), so a `#[cfg(test)]` module inside
//! `featurelife-types` would not suffice.

use featurelife_types::{DeprecatedUsage, StackFrame};
use serde_json::Value;

/// Placeholder written over emission timestamps.
pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// `emitted_at` is replaced at any depth: notifications can be nested in
/// fixture arrays, and the placeholder cannot collide with a real RFC 3339 value.
/// Payload contents are never touched.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    normalize_recursive(&mut value);
    value
}

fn normalize_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if map.contains_key("emitted_at") {
                map.insert(
                    "emitted_at".to_string(),
                    Value::String(TIMESTAMP_PLACEHOLDER.to_string()),
                );
            }
            for (key, val) in map.iter_mut() {
                // Deprecated-usage text is caller data; leave it alone.
                if key != "payload" {
                    normalize_recursive(val);
                }
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_recursive(val);
            }
        }
        _ => {}
    }
}

/// The two-frame call path used by [`sample_usage`], innermost first.
pub fn sample_frames() -> Vec<StackFrame> {
    vec![
        StackFrame::new("foo")
            .with_owner("app::legacy")
            .with_location("src/legacy.rs", 12)
            .with_column(5),
        StackFrame::new("main")
            .with_owner("app")
            .with_location("src/main.rs", 3),
    ]
}

/// A fully populated record for tests and fixtures.
pub fn sample_usage() -> DeprecatedUsage {
    DeprecatedUsage::new(
        "Method foo() is deprecated.",
        "This method will be removed in the next major version.",
        "Use bar() instead.",
        sample_frames(),
    )
}
