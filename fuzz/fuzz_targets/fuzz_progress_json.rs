//! Fuzz target for progress notification JSON.
//!
//! Goal: deserialization should **never panic**, and anything accepted must
//! survive a serialize/deserialize cycle unchanged.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_progress_json
//! ```

#![no_main]

use featurelife_types::ProgressNotification;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    if let Ok(notification) = serde_json::from_slice::<ProgressNotification>(data) {
        let json = serde_json::to_vec(&notification).expect("serialize accepted notification");
        let back: ProgressNotification =
            serde_json::from_slice(&json).expect("reparse serialized notification");
        assert_eq!(back, notification);
    }
});
