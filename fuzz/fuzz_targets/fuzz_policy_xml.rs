//! Fuzz target for policy XML loading.
//!
//! Goal: the loader should **never panic** on any input; malformed documents are errors.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_xml
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Policy exports are read as UTF-8 text
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = ampguard_policy::fuzz::parse_policy(text);
    }
});
