#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ukkonen::tree::{Text, build_text, verify, NoopSink};

#[derive(Arbitrary, Debug)]
struct Input {
    /// Indices into a small alphabet so repeats are common
    symbols: Vec<u8>,
    alphabet: u8,
}

fuzz_target!(|input: Input| {
    let size = (input.alphabet % 6) as u32 + 1;
    let body: String = input
        .symbols
        .iter()
        .take(512)
        .map(|&s| char::from_u32('a' as u32 + (s as u32 % size)).unwrap())
        .collect();

    // '$' never occurs in the body, so the text is always valid
    let text = Text::with_sentinel(&body, '$').unwrap();
    let tree = build_text(text, &mut NoopSink);
    if let Err(violation) = verify(&tree) {
        panic!("{:?}: {}", body, violation);
    }
});
