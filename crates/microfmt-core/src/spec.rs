//! Placeholder grammar.
//!
//! ```text
//! placeholder := '{' [index] [':' [align] [sign] ['#'] ['0'] [width] ['.' precision] [type]] '}'
//! align       := '<' | '^' | '>'
//! sign        := '+' | '-' | ' '
//! type        := 'b' | 'B' | 'd' | 'o' | 'x' | 'X' | 'c' | 'f' | 'F' | 's'
//! ```
//!
//! After the `:` the alignment, sign and `#` flags may come in any order,
//! but each at most once. A `0` that arrives while the width is still empty
//! is the zero-pad flag, not part of the width. The type letter, if present,
//! must be the last thing before `}`.

use core::fmt;

use crate::error::RenderError;

/// Largest width or precision a placeholder may ask for.
///
/// Bounds the padding and fractional digits a single placeholder can
/// produce; larger values are a grammar error.
pub const MAX_FIELD: usize = 4096;

/// Field alignment inside the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,   // '<'
    Right,  // '>'
    Center, // '^'
}

/// What to print in front of non-negative numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignMode {
    /// Only negative values get a sign ('-' or no flag).
    #[default]
    Default,
    /// '+'
    Always,
    /// ' '
    Space,
}

/// Presentation letter, normalized to lower case.
///
/// The case of `B`, `X` and `F` is kept in [`FormatSpec::upper_case`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Binary,
    Octal,
    Decimal,
    Hex,
    Char,
    Float,
    Str,
}

impl Presentation {
    /// Classify a type letter. Returns the presentation and whether the
    /// letter was upper case.
    #[must_use]
    pub fn from_letter(letter: u8) -> Option<(Self, bool)> {
        Some(match letter {
            b'b' => (Self::Binary, false),
            b'B' => (Self::Binary, true),
            b'o' => (Self::Octal, false),
            b'd' => (Self::Decimal, false),
            b'x' => (Self::Hex, false),
            b'X' => (Self::Hex, true),
            b'c' => (Self::Char, false),
            b'f' => (Self::Float, false),
            b'F' => (Self::Float, true),
            b's' => (Self::Str, false),
            _ => return None,
        })
    }

    /// The lower-case type letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Binary => 'b',
            Self::Octal => 'o',
            Self::Decimal => 'd',
            Self::Hex => 'x',
            Self::Char => 'c',
            Self::Float => 'f',
            Self::Str => 's',
        }
    }

    /// Radix used when this presentation renders an integer.
    #[must_use]
    pub const fn radix(self) -> u64 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Hex => 16,
            _ => 10,
        }
    }
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A parsed placeholder.
///
/// `None` fields are unset and get type-driven defaults when the
/// placeholder is bound to an argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatSpec {
    pub index: Option<usize>,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub align: Option<Align>,
    pub sign: SignMode,
    /// `#`: radix prefix (`0x`, `0b`, leading `0` for octal).
    pub alternate: bool,
    /// `0`: sign and prefix first, then zeros up to the width.
    pub zero_pad: bool,
    pub presentation: Option<Presentation>,
    pub upper_case: bool,
}

impl FormatSpec {
    /// An otherwise empty spec with the given presentation.
    #[must_use]
    pub fn with_presentation(presentation: Presentation) -> Self {
        Self {
            presentation: Some(presentation),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Before ':', only index digits allowed.
    Index,
    /// After ':'.
    Flags,
    /// After '.'.
    Precision,
    /// After the type letter, only '}' allowed.
    Typed,
}

/// Integer field currently receiving digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Index,
    Width,
    Precision,
    Closed,
}

/// Parse one placeholder.
///
/// `src` starts right after the opening `{`. On success returns the spec
/// and the number of bytes consumed, including the closing `}`. Any
/// violation, including running out of input, is [`RenderError::Grammar`].
pub fn parse_placeholder(src: &[u8]) -> Result<(FormatSpec, usize), RenderError> {
    let mut spec = FormatSpec::default();
    let mut state = State::Index;
    let mut slot = Slot::Index;
    let mut sign_seen = false;
    let mut pos = 0;

    loop {
        let &byte = src.get(pos).ok_or(RenderError::Grammar)?;
        pos += 1;

        if byte.is_ascii_digit() {
            let digit = usize::from(byte - b'0');
            match slot {
                Slot::Width if byte == b'0' && spec.width.is_none() => spec.zero_pad = true,
                Slot::Index => push_digit(&mut spec.index, digit, usize::MAX)?,
                Slot::Width => push_digit(&mut spec.width, digit, MAX_FIELD)?,
                Slot::Precision => push_digit(&mut spec.precision, digit, MAX_FIELD)?,
                Slot::Closed => return Err(RenderError::Grammar),
            }
            continue;
        }

        // A non-digit ends a number that has started.
        let slot_filled = match slot {
            Slot::Index => spec.index.is_some(),
            Slot::Width => spec.width.is_some(),
            Slot::Precision => spec.precision.is_some(),
            Slot::Closed => false,
        };
        if slot_filled {
            slot = Slot::Closed;
        }

        match (state, byte) {
            (_, b'}') => break,
            (State::Index, b':') => {
                state = State::Flags;
                slot = Slot::Width;
            }
            (State::Index | State::Typed, _) => return Err(RenderError::Grammar),
            (State::Flags, b'.') => {
                state = State::Precision;
                slot = Slot::Precision;
            }
            (_, b'<' | b'^' | b'>') => {
                if spec.align.is_some() {
                    return Err(RenderError::Grammar);
                }
                spec.align = Some(match byte {
                    b'<' => Align::Left,
                    b'^' => Align::Center,
                    _ => Align::Right,
                });
            }
            (_, b'+' | b'-' | b' ') => {
                if sign_seen {
                    return Err(RenderError::Grammar);
                }
                sign_seen = true;
                spec.sign = match byte {
                    b'+' => SignMode::Always,
                    b' ' => SignMode::Space,
                    _ => SignMode::Default,
                };
            }
            (_, b'#') => {
                if spec.alternate {
                    return Err(RenderError::Grammar);
                }
                spec.alternate = true;
            }
            (_, letter) => {
                let (presentation, upper_case) =
                    Presentation::from_letter(letter).ok_or(RenderError::Grammar)?;
                spec.presentation = Some(presentation);
                spec.upper_case = upper_case;
                state = State::Typed;
                slot = Slot::Closed;
            }
        }
    }

    Ok((spec, pos))
}

fn push_digit(field: &mut Option<usize>, digit: usize, max: usize) -> Result<(), RenderError> {
    let value = field
        .unwrap_or(0)
        .saturating_mul(10)
        .saturating_add(digit);
    if value > max {
        return Err(RenderError::Grammar);
    }
    *field = Some(value);
    Ok(())
}
