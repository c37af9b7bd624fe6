//! Integer rendering in radix 2, 8, 10 and 16.
//!
//! Digits come out most significant first from a single loop: start at the
//! largest power of the radix that fits in a `u64`, shrink it until it no
//! longer exceeds the value, then divide down to 1. Stack use does not
//! depend on the number of digits.

use crate::pad;
use crate::render::RenderContext;
use crate::sink::Sink;
use crate::spec::FormatSpec;

/// Largest power of `radix` representable in a `u64`.
#[must_use]
pub const fn top_divisor(radix: u64) -> u64 {
    let mut divisor = 1u64;
    while divisor <= u64::MAX / radix {
        divisor *= radix;
    }
    divisor
}

/// Number of digits of `value` in `radix`; zero has one digit.
#[must_use]
pub fn digit_count(mut value: u64, radix: u64) -> usize {
    let mut count = 0;
    while value != 0 {
        value /= radix;
        count += 1;
    }
    count.max(1)
}

fn digit_char(digit: u64, upper_case: bool) -> u8 {
    // digit < 16
    let digit = digit as u8;
    match digit {
        0..=9 => b'0' + digit,
        _ if upper_case => b'A' + digit - 10,
        _ => b'a' + digit - 10,
    }
}

/// Emit the digits of `value`, no sign, prefix or padding.
pub(crate) fn write_digits<S: Sink<u8>>(
    ctx: &mut RenderContext<'_, S>,
    mut value: u64,
    radix: u64,
    upper_case: bool,
) {
    let mut divisor = top_divisor(radix);
    while divisor > value && divisor >= radix {
        divisor /= radix;
    }
    loop {
        ctx.put(digit_char(value / divisor, upper_case));
        value %= divisor;
        if divisor == 1 {
            break;
        }
        divisor /= radix;
    }
}

/// Render a magnitude with sign, alternate-form prefix and padding.
///
/// The radix comes from the spec's presentation; anything that is not
/// binary, octal or hex renders in decimal.
pub(crate) fn render_magnitude<S: Sink<u8>>(
    ctx: &mut RenderContext<'_, S>,
    spec: &FormatSpec,
    magnitude: u64,
    negative: bool,
) {
    let radix = spec.presentation.map_or(10, |p| p.radix());
    let sign = pad::sign_char(spec, negative);
    let prefix = pad::radix_prefix(spec);
    let len = digit_count(magnitude, radix) + prefix.len() + usize::from(sign.is_some());

    pad::emit_field(ctx, spec, len, sign, prefix, true, |ctx| {
        write_digits(ctx, magnitude, radix, spec.upper_case);
    });
}

pub(crate) fn render_signed<S: Sink<u8>>(ctx: &mut RenderContext<'_, S>, spec: &FormatSpec, value: i64) {
    render_magnitude(ctx, spec, value.unsigned_abs(), value < 0);
}

pub(crate) fn render_unsigned<S: Sink<u8>>(ctx: &mut RenderContext<'_, S>, spec: &FormatSpec, value: u64) {
    render_magnitude(ctx, spec, value, false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{Align, Presentation, SignMode};

    fn digits(value: u64, radix: u64, upper_case: bool) -> String {
        let mut out = Vec::new();
        let mut ctx = RenderContext::new(crate::sink::FnSink(|b: u8| {
            out.push(b);
            true
        }), &[]);
        write_digits(&mut ctx, value, radix, upper_case);
        drop(ctx);
        String::from_utf8(out).unwrap()
    }

    fn field(spec: &FormatSpec, value: i64) -> String {
        let mut out = Vec::new();
        let mut ctx = RenderContext::new(crate::sink::FnSink(|b: u8| {
            out.push(b);
            true
        }), &[]);
        render_signed(&mut ctx, spec, value);
        drop(ctx);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn top_divisors() {
        assert_eq!(top_divisor(2), 1 << 63);
        assert_eq!(top_divisor(8), 1 << 63);
        assert_eq!(top_divisor(10), 10_000_000_000_000_000_000);
        assert_eq!(top_divisor(16), 1 << 60);
    }

    #[test]
    fn counts_digits() {
        assert_eq!(digit_count(0, 10), 1);
        assert_eq!(digit_count(9, 10), 1);
        assert_eq!(digit_count(10, 10), 2);
        assert_eq!(digit_count(u64::MAX, 10), 20);
        assert_eq!(digit_count(u64::MAX, 16), 16);
        assert_eq!(digit_count(u64::MAX, 2), 64);
        assert_eq!(digit_count(u64::MAX, 8), 22);
    }

    #[test]
    fn writes_digits_most_significant_first() {
        assert_eq!(digits(0, 10, false), "0");
        assert_eq!(digits(7, 10, false), "7");
        assert_eq!(digits(1000, 10, false), "1000");
        assert_eq!(digits(u64::MAX, 10, false), "18446744073709551615");
        assert_eq!(digits(10_000_000_000_000_000_000, 10, false), "10000000000000000000");
        assert_eq!(digits(0xdead_beef, 16, false), "deadbeef");
        assert_eq!(digits(0xdead_beef, 16, true), "DEADBEEF");
        assert_eq!(digits(u64::MAX, 8, false), "1777777777777777777777");
        assert_eq!(digits(0b1011, 2, false), "1011");
    }

    #[test]
    fn sign_prefix_and_zero_fill_order() {
        let spec = FormatSpec {
            presentation: Some(Presentation::Hex),
            alternate: true,
            zero_pad: true,
            width: Some(7),
            align: Some(Align::Right),
            ..FormatSpec::default()
        };
        assert_eq!(field(&spec, -0x123), "-0x0123");
        assert_eq!(field(&spec, 0x123), "0x00123");
    }

    #[test]
    fn space_fill_goes_before_sign() {
        let spec = FormatSpec {
            presentation: Some(Presentation::Hex),
            alternate: true,
            width: Some(7),
            align: Some(Align::Right),
            ..FormatSpec::default()
        };
        assert_eq!(field(&spec, -0x123), " -0x123");
    }

    #[test]
    fn extremes() {
        let spec = FormatSpec {
            sign: SignMode::Always,
            ..FormatSpec::default()
        };
        assert_eq!(field(&spec, i64::MIN), "-9223372036854775808");
        assert_eq!(field(&spec, i64::MAX), "+9223372036854775807");
        assert_eq!(field(&spec, 0), "+0");
    }

    #[test]
    fn octal_alternate_adds_single_zero() {
        let spec = FormatSpec {
            presentation: Some(Presentation::Octal),
            alternate: true,
            ..FormatSpec::default()
        };
        assert_eq!(field(&spec, 0o1234567), "01234567");
        assert_eq!(field(&spec, 0), "00");
    }
}
