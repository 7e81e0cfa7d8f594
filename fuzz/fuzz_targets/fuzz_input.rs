#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Arbitrary text must either be rejected up front or build a valid tree
    if let Ok(tree) = ukkonen::tree::build(data) {
        assert!(ukkonen::tree::verify(&tree).is_ok());
    }
});
