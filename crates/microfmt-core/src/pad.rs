//! Alignment and padding shared by every value renderer.
//!
//! Emission order for one field:
//!
//! ```text
//! zero_pad:   sign, prefix, leading fill, body
//! otherwise:  fill, sign, prefix, body, trailing fill
//! ```
//!
//! Text fields keep the zero_pad ordering but fill with spaces:
//!
//! ```text
//! {:06} of -inf  =>  "-  inf"
//! ```
//!
//! `len` passed in here is always the full field length: body plus sign
//! plus radix prefix.

use crate::render::RenderContext;
use crate::sink::Sink;
use crate::spec::{Align, FormatSpec, Presentation, SignMode};

/// Fill needed to bring a field of `len` up to the spec's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub leading: usize,
    pub trailing: usize,
    pub fill: u8,
}

impl Padding {
    pub const NONE: Self = Self {
        leading: 0,
        trailing: 0,
        fill: b' ',
    };

    /// `honor_zero` is false for text fields, which pad with spaces even
    /// when the zero flag is set.
    #[must_use]
    pub fn new(spec: &FormatSpec, len: usize, honor_zero: bool) -> Self {
        let extra = match spec.width {
            Some(width) if width > len => width - len,
            _ => return Self::NONE,
        };

        // The zero flag overrides any alignment: everything goes in front.
        if spec.zero_pad || spec.align == Some(Align::Right) {
            let fill = if spec.zero_pad && honor_zero {
                b'0'
            } else {
                b' '
            };
            return Self {
                leading: extra,
                trailing: 0,
                fill,
            };
        }

        match spec.align {
            Some(Align::Center) => Self {
                leading: extra / 2,
                trailing: (extra + 1) / 2,
                fill: b' ',
            },
            _ => Self {
                leading: 0,
                trailing: extra,
                fill: b' ',
            },
        }
    }
}

/// Sign character for a value, if one is printed.
#[must_use]
pub fn sign_char(spec: &FormatSpec, negative: bool) -> Option<u8> {
    if negative {
        return Some(b'-');
    }
    match spec.sign {
        SignMode::Always => Some(b'+'),
        SignMode::Space => Some(b' '),
        SignMode::Default => None,
    }
}

/// Radix prefix printed by the alternate form.
#[must_use]
pub fn radix_prefix(spec: &FormatSpec) -> &'static [u8] {
    if !spec.alternate {
        return b"";
    }
    match (spec.presentation, spec.upper_case) {
        (Some(Presentation::Hex), false) => b"0x",
        (Some(Presentation::Hex), true) => b"0X",
        (Some(Presentation::Binary), false) => b"0b",
        (Some(Presentation::Binary), true) => b"0B",
        (Some(Presentation::Octal), _) => b"0",
        _ => b"",
    }
}

/// Emit one padded field. `body` writes the digits or text.
pub(crate) fn emit_field<'a, S: Sink<u8>>(
    ctx: &mut RenderContext<'a, S>,
    spec: &FormatSpec,
    len: usize,
    sign: Option<u8>,
    prefix: &[u8],
    honor_zero: bool,
    body: impl FnOnce(&mut RenderContext<'a, S>),
) {
    let padding = Padding::new(spec, len, honor_zero);

    if spec.zero_pad {
        emit_sign_and_prefix(ctx, sign, prefix);
    }
    ctx.put_repeat(padding.fill, padding.leading);
    if !spec.zero_pad {
        emit_sign_and_prefix(ctx, sign, prefix);
    }
    body(ctx);
    ctx.put_repeat(b' ', padding.trailing);
}

fn emit_sign_and_prefix<S: Sink<u8>>(ctx: &mut RenderContext<'_, S>, sign: Option<u8>, prefix: &[u8]) {
    if let Some(sign) = sign {
        ctx.put(sign);
    }
    ctx.put_bytes(prefix);
}

/// Render text (strings, booleans, characters, nan/inf) as one field.
///
/// Width is measured in characters, not bytes.
pub(crate) fn emit_text<S: Sink<u8>>(
    ctx: &mut RenderContext<'_, S>,
    spec: &FormatSpec,
    text: &str,
    negative: bool,
) {
    let sign = sign_char(spec, negative);
    let len = text.chars().count() + usize::from(sign.is_some());
    emit_field(ctx, spec, len, sign, b"", false, |ctx| {
        ctx.put_bytes(text.as_bytes());
    });
}
