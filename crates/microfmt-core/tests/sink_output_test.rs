// Output through the different sinks: truncating buffers, declining sinks
// and UTF-8 decoding to code points.

use microfmt_core::{
    Arg, Discard, FnSink, RenderContext, Sink, Utf8Decoder, args, format_float_to_buffer,
    format_int_to_buffer, format_uint_to_buffer, render, render_codepoints, render_to_buffer,
};

fn code_points(template: &str, args: &[Arg<'_>]) -> (Vec<u32>, usize) {
    let mut out = Vec::new();
    let count = render_codepoints(
        FnSink(|c: u32| {
            out.push(c);
            true
        }),
        template,
        args,
    );
    (out, count)
}

fn expect_unicode(expected: &str, template: &str, args: &[Arg<'_>]) {
    let (points, count) = code_points(template, args);
    let wanted: Vec<u32> = expected.chars().map(u32::from).collect();
    assert_eq!(points, wanted, "template {template:?}");
    assert_eq!(count, wanted.len());
}

#[test]
fn unicode_templates_and_arguments() {
    expect_unicode("Русский текст", "Русский текст", &[]);
    expect_unicode("日本語テキスト", "日本語テキスト", &[]);
    expect_unicode("Русский текст 日本語テキスト", "Русский текст {}", &args!["日本語テキスト"]);
    expect_unicode(
        "-Русский текст-日本語テキスト-",
        "-{}-{}-",
        &args!["Русский текст", "日本語テキスト"],
    );
}

#[test]
fn unicode_width_counts_characters() {
    expect_unicode("[   жук]", "[{:>6}]", &args!["жук"]);
    expect_unicode("[日本  ]", "[{:4}]", &args!["日本"]);
}

#[test]
fn malformed_bytes_become_replacements() {
    let (points, count) = code_points("", &[]);
    assert!(points.is_empty());
    assert_eq!(count, 0);

    let mut out = Vec::new();
    let template: &[u8] = b"before \xc0\xc1 after";
    let count = render_codepoints(
        FnSink(|c: u32| {
            out.push(c);
            true
        }),
        template,
        &[],
    );
    let wanted: Vec<u32> = "before ?? after".chars().map(u32::from).collect();
    assert_eq!(out, wanted);
    assert_eq!(count, wanted.len());
}

#[test]
fn recovers_after_bad_bytes() {
    let mut out = Vec::new();
    let template: &[u8] = b"\x80\xc0\xd0\xb6{}";
    render_codepoints(
        FnSink(|c: u32| {
            out.push(c);
            true
        }),
        template,
        &args!['日'],
    );
    assert_eq!(out, [u32::from('?'), u32::from('?'), 0x436, 0x65e5]);
}

#[test]
fn decoder_composes_with_any_byte_source() {
    let mut out = Vec::new();
    let mut decoder = Utf8Decoder::with_replacement(
        FnSink(|c: u32| {
            out.push(c);
            true
        }),
        '\u{fffd}',
    );
    let mut ctx = RenderContext::new(&mut decoder, &[]);
    ctx.render("ok \u{e9}\u{301}".as_bytes());
    drop(ctx);
    decoder.accept(0xe6);
    decoder.finish();
    assert_eq!(decoder.accepted(), 6);
    drop(decoder);
    assert_eq!(out, [0x6f, 0x6b, 0x20, 0xe9, 0x301, 0xfffd]);
}

#[test]
fn truncated_buffers() {
    let mut buf = [0, 1, 2];
    assert_eq!(format_int_to_buffer(&mut buf[..2], -12345), 1);
    assert_eq!(buf, [b'-', 0, 2]);

    let mut buf = [0, 1, 2];
    assert_eq!(format_uint_to_buffer(&mut buf[..2], 12345), 1);
    assert_eq!(buf, [b'1', 0, 2]);

    let mut buf = [0, 1, 2, 3, 4, 5, 6];
    assert_eq!(format_float_to_buffer(&mut buf[..6], -1.123_456_789, 10), 5);
    assert_eq!(buf, [b'-', b'1', b'.', b'1', b'2', 0, 6]);

    let mut buf = [0, 1, 2, 3, 4, 5, 6];
    let written = render_to_buffer(
        &mut buf[..6],
        "{}{}{}{}{}{}{}{}{}{}",
        &args![10, 20, 30, 40, 50, 60, 70],
    );
    assert_eq!(written, 5);
    assert_eq!(buf, [b'1', b'0', b'2', b'0', b'3', 0, 6]);
}

#[test]
fn written_never_exceeds_capacity() {
    let template = "{:>12}|{:#b}|{:^9.2}|{}";
    let values = args!["abc", 1000u16, -3.25, '√'];
    let full = render(Discard, template, &values);
    for capacity in 0..full + 4 {
        let mut buf = vec![0xaau8; capacity];
        let written = render_to_buffer(&mut buf, template, &values);
        if capacity == 0 {
            assert_eq!(written, 0);
            continue;
        }
        assert_eq!(written, full.min(capacity - 1));
        assert_eq!(buf[written], 0);
    }
}

#[test]
fn declining_sink_still_sees_every_byte() {
    let mut offered = 0;
    let mut kept = Vec::new();
    let count = render(
        FnSink(|b: u8| {
            offered += 1;
            if kept.len() < 4 {
                kept.push(b);
                return true;
            }
            false
        }),
        "{:08.3}",
        &args![2.0],
    );
    assert_eq!(count, 4);
    assert_eq!(offered, 8);
    assert_eq!(kept, b"0002");
}

#[test]
fn discard_measures_full_length() {
    assert_eq!(render(Discard, "{:>20}", &args![1]), 20);
    assert_eq!(render(Discard, "{:q}", &args![1]), "{{error}}".len() + 3);
}
