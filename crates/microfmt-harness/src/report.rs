//! Report generation for conformance results.

use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::HarnessError;
use crate::verify::VerificationSummary;

/// SHA-256 of one fixture file that fed the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureDigest {
    pub path: String,
    pub sha256: String,
    /// Number of cases in the file.
    pub cases: usize,
}

impl FixtureDigest {
    /// Hash the file at `path`.
    pub fn from_file(path: &Path, cases: usize) -> Result<Self, HarnessError> {
        let data = std::fs::read(path).map_err(|e| HarnessError::io(path, e))?;
        Ok(Self::from_bytes(path.display().to_string(), &data, cases))
    }

    #[must_use]
    pub fn from_bytes(path: impl Into<String>, data: &[u8], cases: usize) -> Self {
        Self {
            path: path.into(),
            sha256: hex_lower(&Sha256::digest(data)),
            cases,
        }
    }
}

fn hex_lower(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}

/// A conformance report combining verification and fixture provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Render mode selection tested.
    pub mode: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    /// Fixture files and their digests.
    pub fixtures: Vec<FixtureDigest>,
    /// Verification summary.
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# {}\n", self.title);
        let _ = writeln!(out, "- Mode: {}", self.mode);
        let _ = writeln!(out, "- Timestamp: {}", self.timestamp);
        let _ = writeln!(out, "- Total: {}", self.summary.total);
        let _ = writeln!(out, "- Passed: {}", self.summary.passed);
        let _ = writeln!(out, "- Failed: {}\n", self.summary.failed);

        if !self.fixtures.is_empty() {
            out.push_str("## Fixtures\n\n");
            out.push_str("| File | Cases | SHA-256 |\n");
            out.push_str("|------|-------|---------|\n");
            for f in &self.fixtures {
                let _ = writeln!(out, "| {} | {} | `{}` |", f.path, f.cases, f.sha256);
            }
            out.push('\n');
        }

        out.push_str("## Results\n\n");
        out.push_str("| Case | Mode | Status |\n");
        out.push_str("|------|------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            let _ = writeln!(out, "| {} | {} | {} |", r.case_name, r.mode, status);
        }

        let mut failures = self.summary.failures().peekable();
        if failures.peek().is_some() {
            out.push_str("\n## Failures\n");
            for r in failures {
                let _ = writeln!(out, "\n### {} ({})\n", r.case_name, r.mode);
                out.push_str("```diff\n");
                out.push_str(r.diff.as_deref().unwrap_or_default());
                if !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str("```\n");
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}
