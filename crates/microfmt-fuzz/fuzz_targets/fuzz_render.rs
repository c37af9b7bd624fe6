#![no_main]
use libfuzzer_sys::fuzz_target;
use microfmt_core::{Arg, Discard, render, render_to_buffer};

fuzz_target!(|data: &[u8]| {
    // First byte picks the buffer size, the rest is the template.
    let Some((&cap, template)) = data.split_first() else {
        return;
    };
    let args = [
        Arg::Int(-7),
        Arg::Uint(u64::MAX),
        Arg::Bool(true),
        Arg::Char('ж'),
        Arg::Str("fuzz"),
        Arg::Ptr(0x1000),
        Arg::Float(-1.5e10),
        Arg::Float(f64::NAN),
    ];

    let full = render(Discard, template, &args);

    let cap = usize::from(cap);
    let mut buf = vec![0xa5u8; cap + 1];
    let written = render_to_buffer(&mut buf[..cap], template, &args);
    assert_eq!(buf[cap], 0xa5, "wrote past the buffer");
    if cap == 0 {
        assert_eq!(written, 0);
    } else {
        assert!(written <= cap - 1);
        assert_eq!(written, full.min(cap - 1));
        assert_eq!(buf[written], 0);
    }
});
