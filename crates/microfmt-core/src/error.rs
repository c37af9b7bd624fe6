//! Render failures.
//!
//! None of these ever leave a render call. Each one is turned into
//! [`ERROR_MARKER`] at the placeholder that caused it and the template
//! driver carries on with the rest of the template.

use crate::arg::ArgKind;
use crate::spec::Presentation;

/// Emitted in place of any placeholder that cannot be rendered.
pub const ERROR_MARKER: &str = "{{error}}";

/// Why a placeholder could not be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The placeholder text does not follow the grammar.
    #[error("malformed placeholder")]
    Grammar,
    /// The explicit or implicit argument index has no argument.
    #[error("argument index {index} out of range ({count} arguments)")]
    IndexOutOfRange { index: usize, count: usize },
    /// The presentation letter is not valid for the argument's kind.
    #[error("presentation `{presentation}` not valid for {kind} argument")]
    TypeMismatch {
        kind: ArgKind,
        presentation: Presentation,
    },
    /// A character rendering was requested for a value outside 0..=255.
    #[error("value {value} is not a character code")]
    CharOutOfRange { value: i128 },
}

impl RenderError {
    /// Whether the failed placeholder still used up its argument slot.
    ///
    /// Only a value that was bound and type-checked but could not be
    /// printed advances the automatic index.
    #[must_use]
    pub const fn consumes_argument(&self) -> bool {
        matches!(self, Self::CharOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = RenderError::IndexOutOfRange { index: 3, count: 1 };
        assert_eq!(err.to_string(), "argument index 3 out of range (1 arguments)");

        let err = RenderError::TypeMismatch {
            kind: ArgKind::Str,
            presentation: Presentation::Decimal,
        };
        assert_eq!(err.to_string(), "presentation `d` not valid for string argument");
    }

    #[test]
    fn only_char_range_consumes_argument() {
        assert!(RenderError::CharOutOfRange { value: 256 }.consumes_argument());
        assert!(!RenderError::Grammar.consumes_argument());
        assert!(!RenderError::IndexOutOfRange { index: 0, count: 0 }.consumes_argument());
    }
}
