//! Number rendering without a template.
//!
//! Same renderers as the `{}` placeholders, with no width, sign flag or
//! prefix. Each function returns the number of bytes the sink accepted;
//! the `_to_buffer` forms truncate and NUL-terminate like
//! [`render_to_buffer`](crate::render_to_buffer).

use crate::buffer::fill_terminated;
use crate::float;
use crate::int;
use crate::render::RenderContext;
use crate::sink::Sink;
use crate::spec::{FormatSpec, Presentation};

fn emit<S: Sink<u8>>(sink: S, body: impl FnOnce(&mut RenderContext<'_, S>)) -> usize {
    let mut ctx = RenderContext::new(sink, &[]);
    body(&mut ctx);
    ctx.accepted()
}

fn emit_radix<S: Sink<u8>>(sink: S, value: u64, presentation: Presentation) -> usize {
    let spec = FormatSpec::with_presentation(presentation);
    emit(sink, |ctx| int::render_unsigned(ctx, &spec, value))
}

/// Signed decimal.
pub fn format_int<S: Sink<u8>>(sink: S, value: i64) -> usize {
    emit(sink, |ctx| int::render_signed(ctx, &FormatSpec::default(), value))
}

/// Unsigned decimal.
pub fn format_uint<S: Sink<u8>>(sink: S, value: u64) -> usize {
    emit_radix(sink, value, Presentation::Decimal)
}

/// Lower-case hexadecimal, no `0x`.
pub fn format_hex<S: Sink<u8>>(sink: S, value: u64) -> usize {
    emit_radix(sink, value, Presentation::Hex)
}

pub fn format_oct<S: Sink<u8>>(sink: S, value: u64) -> usize {
    emit_radix(sink, value, Presentation::Octal)
}

pub fn format_bin<S: Sink<u8>>(sink: S, value: u64) -> usize {
    emit_radix(sink, value, Presentation::Binary)
}

/// Fixed-point with exactly `precision` fractional digits; `nan`, `inf`
/// and `-inf` for the special values.
pub fn format_float<S: Sink<u8>>(sink: S, value: f64, precision: usize) -> usize {
    let spec = FormatSpec {
        precision: Some(precision),
        ..FormatSpec::with_presentation(Presentation::Float)
    };
    emit(sink, |ctx| float::render_float(ctx, &spec, value))
}

pub fn format_int_to_buffer(buf: &mut [u8], value: i64) -> usize {
    fill_terminated(buf, |sink| {
        format_int(sink, value);
    })
}

pub fn format_uint_to_buffer(buf: &mut [u8], value: u64) -> usize {
    fill_terminated(buf, |sink| {
        format_uint(sink, value);
    })
}

pub fn format_hex_to_buffer(buf: &mut [u8], value: u64) -> usize {
    fill_terminated(buf, |sink| {
        format_hex(sink, value);
    })
}

pub fn format_oct_to_buffer(buf: &mut [u8], value: u64) -> usize {
    fill_terminated(buf, |sink| {
        format_oct(sink, value);
    })
}

pub fn format_bin_to_buffer(buf: &mut [u8], value: u64) -> usize {
    fill_terminated(buf, |sink| {
        format_bin(sink, value);
    })
}

pub fn format_float_to_buffer(buf: &mut [u8], value: f64, precision: usize) -> usize {
    fill_terminated(buf, |sink| {
        format_float(sink, value, precision);
    })
}
