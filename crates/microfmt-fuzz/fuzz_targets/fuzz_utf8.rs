#![no_main]
use libfuzzer_sys::fuzz_target;
use microfmt_core::{FnSink, Sink, Utf8Decoder};

fuzz_target!(|data: &[u8]| {
    let mut points = Vec::new();
    let mut decoder = Utf8Decoder::new(FnSink(|c: u32| {
        points.push(c);
        true
    }));
    for &b in data {
        decoder.accept(b);
    }
    decoder.finish();
    let accepted = decoder.accepted();
    drop(decoder);

    assert_eq!(accepted, points.len());
    assert!(points.len() <= data.len());
    // Well-formed input decodes exactly like the standard library.
    if let Ok(text) = std::str::from_utf8(data) {
        let expected: Vec<u32> = text.chars().map(u32::from).collect();
        assert_eq!(points, expected);
    }
});
