//! Binds a parsed placeholder to its argument and picks the renderer.

use crate::arg::{Arg, ArgKind};
use crate::error::RenderError;
use crate::float;
use crate::int;
use crate::pad;
use crate::render::RenderContext;
use crate::sink::Sink;
use crate::spec::{Align, FormatSpec, Presentation};

/// Width a pointer gets when the placeholder does not set one: every hex
/// digit of a `usize` plus the `0x` prefix.
pub const POINTER_WIDTH: usize = 2 * core::mem::size_of::<usize>() + 2;

/// Whether the letter `presentation` may be used with an argument of
/// `kind`. A placeholder without a letter fits every kind.
///
/// Pointers accept any letter and always render as hex.
#[must_use]
pub fn presentation_allowed(kind: ArgKind, presentation: Presentation) -> bool {
    match kind {
        ArgKind::Float => presentation == Presentation::Float,
        ArgKind::Int | ArgKind::Uint | ArgKind::Char => matches!(
            presentation,
            Presentation::Binary
                | Presentation::Octal
                | Presentation::Decimal
                | Presentation::Hex
                | Presentation::Char
        ),
        ArgKind::Bool => matches!(
            presentation,
            Presentation::Binary
                | Presentation::Octal
                | Presentation::Decimal
                | Presentation::Hex
                | Presentation::Str
        ),
        ArgKind::Str => presentation == Presentation::Str,
        ArgKind::Ptr => true,
    }
}

/// Fill in the type-driven defaults for a spec bound to `kind`.
pub fn apply_defaults(spec: &mut FormatSpec, kind: ArgKind) {
    if spec.align.is_none() {
        spec.align = Some(if kind.is_numeric() {
            Align::Right
        } else {
            Align::Left
        });
    }
    match kind {
        ArgKind::Ptr => {
            spec.presentation = Some(Presentation::Hex);
            spec.zero_pad = true;
            spec.alternate = true;
            spec.width.get_or_insert(POINTER_WIDTH);
        }
        ArgKind::Float => {
            spec.precision.get_or_insert(float::DEFAULT_PRECISION);
        }
        _ => {}
    }
}

/// Render the argument `spec` refers to, or the one at `auto_index` when
/// the placeholder has no explicit index.
pub(crate) fn render_arg<S: Sink<u8>>(
    ctx: &mut RenderContext<'_, S>,
    mut spec: FormatSpec,
    auto_index: usize,
) -> Result<(), RenderError> {
    let args = ctx.args();
    let index = *spec.index.get_or_insert(auto_index);
    let arg = *args.get(index).ok_or(RenderError::IndexOutOfRange {
        index,
        count: args.len(),
    })?;

    let kind = arg.kind();
    if let Some(presentation) = spec.presentation
        && !presentation_allowed(kind, presentation)
    {
        return Err(RenderError::TypeMismatch { kind, presentation });
    }
    apply_defaults(&mut spec, kind);

    let as_char = spec.presentation == Some(Presentation::Char);
    match arg {
        Arg::Int(value) if as_char => render_char_code(ctx, &spec, i128::from(value))?,
        Arg::Int(value) => int::render_signed(ctx, &spec, value),
        Arg::Uint(value) if as_char => render_char_code(ctx, &spec, i128::from(value))?,
        Arg::Uint(value) => int::render_unsigned(ctx, &spec, value),
        Arg::Bool(value) => match spec.presentation {
            None | Some(Presentation::Str) => {
                pad::emit_text(ctx, &spec, if value { "true" } else { "false" }, false);
            }
            Some(_) => int::render_unsigned(ctx, &spec, u64::from(value)),
        },
        Arg::Char(value) => match spec.presentation {
            None | Some(Presentation::Char) => render_char(ctx, &spec, value),
            Some(_) => int::render_unsigned(ctx, &spec, u64::from(u32::from(value))),
        },
        Arg::Str(text) => pad::emit_text(ctx, &spec, truncate_chars(text, spec.precision), false),
        Arg::Ptr(address) => int::render_unsigned(ctx, &spec, address as u64),
        Arg::Float(value) => float::render_float(ctx, &spec, value),
    }
    Ok(())
}

fn render_char<S: Sink<u8>>(ctx: &mut RenderContext<'_, S>, spec: &FormatSpec, value: char) {
    let mut utf8 = [0u8; 4];
    pad::emit_text(ctx, spec, value.encode_utf8(&mut utf8), false);
}

/// An integer rendered with `c` is a Latin-1 code in 0..=255.
fn render_char_code<S: Sink<u8>>(
    ctx: &mut RenderContext<'_, S>,
    spec: &FormatSpec,
    value: i128,
) -> Result<(), RenderError> {
    let code = u8::try_from(value).map_err(|_| RenderError::CharOutOfRange { value })?;
    render_char(ctx, spec, char::from(code));
    Ok(())
}

/// At most `precision` characters of `text`.
fn truncate_chars(text: &str, precision: Option<usize>) -> &str {
    match precision.and_then(|p| text.char_indices().nth(p)) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::sink::FnSink;
    use crate::spec::SignMode;

    fn dispatch(spec: FormatSpec, args: &[Arg<'_>]) -> Result<String, RenderError> {
        let mut out = Vec::new();
        let mut ctx = RenderContext::new(
            FnSink(|b: u8| {
                out.push(b);
                true
            }),
            args,
        );
        let result = render_arg(&mut ctx, spec, 0);
        drop(ctx);
        result.map(|()| String::from_utf8(out).unwrap())
    }

    fn letter(presentation: Presentation) -> FormatSpec {
        FormatSpec::with_presentation(presentation)
    }

    #[test]
    fn presentation_table() {
        assert!(presentation_allowed(ArgKind::Float, Presentation::Float));
        assert!(!presentation_allowed(ArgKind::Float, Presentation::Hex));
        assert!(presentation_allowed(ArgKind::Char, Presentation::Decimal));
        assert!(!presentation_allowed(ArgKind::Int, Presentation::Str));
        assert!(presentation_allowed(ArgKind::Bool, Presentation::Str));
        assert!(!presentation_allowed(ArgKind::Bool, Presentation::Char));
        assert!(!presentation_allowed(ArgKind::Str, Presentation::Decimal));
        assert!(presentation_allowed(ArgKind::Ptr, Presentation::Float));
    }

    #[test]
    fn index_out_of_range() {
        let spec = FormatSpec {
            index: Some(2),
            ..FormatSpec::default()
        };
        assert_eq!(
            dispatch(spec, &args![1, 2]),
            Err(RenderError::IndexOutOfRange { index: 2, count: 2 })
        );
        assert_eq!(
            dispatch(FormatSpec::default(), &[]),
            Err(RenderError::IndexOutOfRange { index: 0, count: 0 })
        );
    }

    #[test]
    fn type_mismatch_names_kind_and_letter() {
        assert_eq!(
            dispatch(letter(Presentation::Hex), &args![1.5]),
            Err(RenderError::TypeMismatch {
                kind: ArgKind::Float,
                presentation: Presentation::Hex,
            })
        );
        assert!(dispatch(letter(Presentation::Char), &args![true]).is_err());
        assert!(dispatch(letter(Presentation::Decimal), &args!["s"]).is_err());
    }

    #[test]
    fn default_alignment_by_kind() {
        let width = FormatSpec {
            width: Some(4),
            ..FormatSpec::default()
        };
        assert_eq!(dispatch(width, &args![7]).unwrap(), "   7");
        assert_eq!(dispatch(width, &args!['a']).unwrap(), "a   ");
        assert_eq!(dispatch(width, &args![true]).unwrap(), "true");
        assert_eq!(dispatch(width, &args!["ab"]).unwrap(), "ab  ");
    }

    #[test]
    fn booleans_as_text_or_number() {
        assert_eq!(dispatch(FormatSpec::default(), &args![false]).unwrap(), "false");
        assert_eq!(dispatch(letter(Presentation::Str), &args![true]).unwrap(), "true");
        assert_eq!(dispatch(letter(Presentation::Decimal), &args![true]).unwrap(), "1");
        assert_eq!(dispatch(letter(Presentation::Binary), &args![false]).unwrap(), "0");
    }

    #[test]
    fn characters_as_text_or_code() {
        assert_eq!(dispatch(FormatSpec::default(), &args!['ж']).unwrap(), "ж");
        assert_eq!(dispatch(letter(Presentation::Decimal), &args!['A']).unwrap(), "65");
        assert_eq!(dispatch(letter(Presentation::Hex), &args!['ж']).unwrap(), "436");
    }

    #[test]
    fn integers_as_characters() {
        assert_eq!(dispatch(letter(Presentation::Char), &args![65]).unwrap(), "A");
        assert_eq!(dispatch(letter(Presentation::Char), &args![0xe9u8]).unwrap(), "é");
        assert_eq!(
            dispatch(letter(Presentation::Char), &args![-1]),
            Err(RenderError::CharOutOfRange { value: -1 })
        );
        assert_eq!(
            dispatch(letter(Presentation::Char), &args![256u32]),
            Err(RenderError::CharOutOfRange { value: 256 })
        );
    }

    #[test]
    fn string_precision_truncates_characters() {
        let spec = FormatSpec {
            precision: Some(2),
            width: Some(4),
            align: Some(Align::Right),
            ..FormatSpec::default()
        };
        assert_eq!(dispatch(spec, &args!["жук"]).unwrap(), "  жу");
        assert_eq!(truncate_chars("ab", Some(5)), "ab");
        assert_eq!(truncate_chars("ab", Some(0)), "");
        assert_eq!(truncate_chars("ab", None), "ab");
    }

    #[test]
    fn pointers_are_zero_padded_hex() {
        let out = dispatch(FormatSpec::default(), &[Arg::Ptr(0x1234)]).unwrap();
        assert_eq!(out.len(), POINTER_WIDTH);
        assert!(out.starts_with("0x"));
        assert!(out.ends_with("1234"));

        let spec = FormatSpec {
            width: Some(8),
            presentation: Some(Presentation::Decimal),
            ..FormatSpec::default()
        };
        assert_eq!(dispatch(spec, &[Arg::Ptr(0xab)]).unwrap(), "0x0000ab");
    }

    #[test]
    fn float_precision_defaults_to_six() {
        assert_eq!(dispatch(FormatSpec::default(), &args![2.5]).unwrap(), "2.500000");
        let spec = FormatSpec {
            sign: SignMode::Space,
            precision: Some(1),
            ..FormatSpec::default()
        };
        assert_eq!(dispatch(spec, &args![2.5]).unwrap(), " 2.5");
    }
}
