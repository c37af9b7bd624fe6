//! Fixed-point rendering of `f64` values.
//!
//! No library formatting or logarithms: the integral digit count comes from
//! scaling a power-of-ten divisor up to the value, digits are peeled off by
//! division, and the fraction is produced by repeated multiplication by 10.
//! Rounding is half-up at the last requested place, so results near a
//! rounding boundary may differ from `core::fmt` in the last digit.

use crate::pad;
use crate::render::RenderContext;
use crate::sink::Sink;
use crate::spec::FormatSpec;

/// Precision used when a placeholder does not give one.
pub const DEFAULT_PRECISION: usize = 6;

/// Correction added before truncating each fractional digit so that a
/// remainder like `4.999999999999999` still yields `5`.
const DIGIT_NUDGE: f64 = 8.0 * f64::EPSILON;

/// `0.5 / 10^precision`, the half-unit added to round the last digit.
#[must_use]
pub fn rounding_increment(precision: usize) -> f64 {
    let mut rounding = 0.5;
    for _ in 0..precision {
        rounding /= 10.0;
        if rounding == 0.0 {
            break;
        }
    }
    rounding
}

/// Largest power of ten not above `magnitude` (at least 1) and the number of
/// integral digits it implies.
#[must_use]
pub fn integral_divisor(magnitude: f64) -> (f64, usize) {
    let mut divisor = 1.0;
    let mut digits = 1;
    while divisor * 10.0 <= magnitude {
        divisor *= 10.0;
        digits += 1;
    }
    (divisor, digits)
}

fn digit(value: f64) -> u8 {
    // Truncation toward zero; the clamp absorbs carries from the rounding
    // increment that would otherwise produce ':' and beyond.
    (value as u64).min(9) as u8
}

pub(crate) fn render_float<S: Sink<u8>>(ctx: &mut RenderContext<'_, S>, spec: &FormatSpec, value: f64) {
    if value.is_nan() {
        let text = if spec.upper_case { "NAN" } else { "nan" };
        pad::emit_text(ctx, spec, text, false);
        return;
    }
    if value.is_infinite() {
        let text = if spec.upper_case { "INF" } else { "inf" };
        pad::emit_text(ctx, spec, text, value < 0.0);
        return;
    }

    let precision = spec.precision.unwrap_or(DEFAULT_PRECISION);
    let negative = value < 0.0;
    let mut magnitude = value.abs() + rounding_increment(precision);
    let (mut divisor, integral_digits) = integral_divisor(magnitude);

    let sign = pad::sign_char(spec, negative);
    let len = integral_digits
        + usize::from(precision > 0)
        + precision
        + usize::from(sign.is_some());

    pad::emit_field(ctx, spec, len, sign, b"", true, |ctx| {
        for _ in 0..integral_digits {
            let d = digit(magnitude / divisor);
            ctx.put(b'0' + d);
            magnitude = (magnitude - f64::from(d) * divisor).max(0.0);
            divisor /= 10.0;
        }

        if precision > 0 {
            ctx.put(b'.');
        }
        for _ in 0..precision {
            magnitude *= 10.0;
            let d = digit(magnitude + DIGIT_NUDGE);
            ctx.put(b'0' + d);
            magnitude = (magnitude - f64::from(d)).max(0.0);
        }
    });
}
