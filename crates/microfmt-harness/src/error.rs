//! Harness error type.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid fixture JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no fixture JSON files found in {0}")]
    NoFixtures(PathBuf),
    #[error("case `{0}` has neither `template` nor `template_bytes`")]
    MissingTemplate(String),
    #[error("unknown render mode `{0}` (expected stream, buffer, codepoints or all)")]
    UnknownMode(String),
    #[error("cannot parse argument `{0}`: expected kind:value")]
    BadArgument(String),
    #[error("{failed} of {total} cases failed")]
    VerificationFailed { failed: usize, total: usize },
}

impl HarnessError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
