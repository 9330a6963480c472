//! Fuzz target for path resolution over loaded policy trees.
//!
//! Arbitrary documents and arbitrary `/`-separated paths, including empty segments and
//! numeric indexes past the end of a sequence.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_resolve_path
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    document: String,
    path: String,
}

fuzz_target!(|input: Input| {
    let _ = ampguard_policy::fuzz::parse_and_resolve(&input.document, &input.path);
});
