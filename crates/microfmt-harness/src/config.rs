//! Render mode configuration.
//!
//! The entry point under test is chosen with `--mode`, or the
//! `MICROFMT_MODE` environment variable when the flag is absent:
//! - `stream`: `render` into a growable byte sink.
//! - `buffer`: `render_to_buffer` into a fixed slice; checks the terminator
//!   and the capacity bound.
//! - `codepoints`: `render_codepoints`; output is compared as characters.
//! - `all` (default): every mode above, one result per case and mode.

use std::fmt;
use std::sync::OnceLock;

/// Buffer size used in buffer mode when a case does not set `capacity`.
pub const DEFAULT_CAPACITY: usize = 256;

/// Environment variable consulted when no mode is given on the command line.
pub const MODE_ENV: &str = "MICROFMT_MODE";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    Stream,
    Buffer,
    Codepoints,
    #[default]
    All,
}

impl RenderMode {
    /// Parse from string (case-insensitive, with aliases).
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stream" | "sink" | "bytes" => Some(Self::Stream),
            "buffer" | "buf" | "fixed" => Some(Self::Buffer),
            "codepoints" | "codepoint" | "utf8" | "wide" => Some(Self::Codepoints),
            "all" | "both" | "every" | "" => Some(Self::All),
            _ => None,
        }
    }

    /// The concrete modes this selection runs.
    #[must_use]
    pub const fn expand(self) -> &'static [Self] {
        match self {
            Self::Stream => &[Self::Stream],
            Self::Buffer => &[Self::Buffer],
            Self::Codepoints => &[Self::Codepoints],
            Self::All => &[Self::Stream, Self::Buffer, Self::Codepoints],
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stream => "stream",
            Self::Buffer => "buffer",
            Self::Codepoints => "codepoints",
            Self::All => "all",
        }
    }

    /// Whether a fixture case tagged with `case_mode` runs under this
    /// concrete mode. Cases tagged `all` run everywhere.
    #[must_use]
    pub fn accepts_case(self, case_mode: &str) -> bool {
        match Self::from_str_loose(case_mode) {
            Some(Self::All) => true,
            Some(mode) => mode == self,
            None => false,
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static ENV_MODE: OnceLock<RenderMode> = OnceLock::new();

/// Mode from `MICROFMT_MODE` (read on first call, cached thereafter).
/// Unset or unrecognized values mean [`RenderMode::All`].
#[must_use]
pub fn env_mode() -> RenderMode {
    *ENV_MODE.get_or_init(|| match std::env::var(MODE_ENV) {
        Ok(value) => RenderMode::from_str_loose(&value).unwrap_or_else(|| {
            log::warn!("ignoring unrecognized {MODE_ENV}={value:?}");
            RenderMode::All
        }),
        Err(_) => RenderMode::All,
    })
}

/// Resolve the mode: command-line value first, then the environment.
pub fn resolve_mode(cli: Option<&str>) -> Result<RenderMode, crate::HarnessError> {
    match cli {
        Some(value) => RenderMode::from_str_loose(value)
            .ok_or_else(|| crate::HarnessError::UnknownMode(value.to_string())),
        None => Ok(env_mode()),
    }
}
