//! Fuzz target for the stack frame text parser.
//!
//! Goal: parsing should **never panic**, and any frame it accepts must print
//! back to text that parses to the same frame.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_frame_parser
//! ```

#![no_main]

use featurelife_types::StackFrame;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 4096 {
        return;
    }

    if let Ok(frame) = text.parse::<StackFrame>() {
        let printed = frame.to_string();
        let reparsed: StackFrame = printed
            .parse()
            .unwrap_or_else(|e| panic!("printed frame {printed:?} does not parse: {e}"));
        assert_eq!(reparsed, frame);
    }
});
