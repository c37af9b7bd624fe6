//! Fixture loading and management.

use std::path::Path;

use microfmt_core::Arg;
use serde::{Deserialize, Serialize};

use crate::HarnessError;

/// Float values JSON cannot carry as numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialFloat {
    Nan,
    Inf,
    NegInf,
}

impl SpecialFloat {
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Nan => f64::NAN,
            Self::Inf => f64::INFINITY,
            Self::NegInf => f64::NEG_INFINITY,
        }
    }
}

/// One argument of a fixture case, tagged by kind: `{"int": -5}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureArg {
    Int(i64),
    Uint(u64),
    Bool(bool),
    Char(char),
    Str(String),
    Ptr(usize),
    Float(f64),
    FloatSpecial(SpecialFloat),
}

impl FixtureArg {
    /// Borrow as an engine argument.
    #[must_use]
    pub fn to_arg(&self) -> Arg<'_> {
        match self {
            Self::Int(v) => Arg::Int(*v),
            Self::Uint(v) => Arg::Uint(*v),
            Self::Bool(v) => Arg::Bool(*v),
            Self::Char(v) => Arg::Char(*v),
            Self::Str(v) => Arg::Str(v),
            Self::Ptr(v) => Arg::Ptr(*v),
            Self::Float(v) => Arg::Float(*v),
            Self::FloatSpecial(v) => Arg::Float(v.value()),
        }
    }

    /// Parse the command-line form `kind:value`, e.g. `int:-5` or `str:abc`.
    /// `ptr` accepts a `0x` prefix; `float` accepts `nan`, `inf`, `-inf`.
    pub fn parse_cli(text: &str) -> Result<Self, HarnessError> {
        let bad = || HarnessError::BadArgument(text.to_string());
        let (kind, value) = text.split_once(':').ok_or_else(bad)?;
        let arg = match kind.to_ascii_lowercase().as_str() {
            "int" | "i" => Self::Int(value.parse().map_err(|_| bad())?),
            "uint" | "u" => Self::Uint(value.parse().map_err(|_| bad())?),
            "bool" | "b" => Self::Bool(value.parse().map_err(|_| bad())?),
            "char" | "c" => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => return Err(bad()),
                }
            }
            "str" | "s" => Self::Str(value.to_string()),
            "ptr" | "p" => {
                let digits = value
                    .strip_prefix("0x")
                    .or_else(|| value.strip_prefix("0X"));
                let addr = match digits {
                    Some(hex) => usize::from_str_radix(hex, 16),
                    None => value.parse(),
                };
                Self::Ptr(addr.map_err(|_| bad())?)
            }
            "float" | "f" => match value {
                "nan" => Self::FloatSpecial(SpecialFloat::Nan),
                "inf" => Self::FloatSpecial(SpecialFloat::Inf),
                "-inf" => Self::FloatSpecial(SpecialFloat::NegInf),
                _ => Self::Float(value.parse().map_err(|_| bad())?),
            },
            _ => return Err(bad()),
        };
        Ok(arg)
    }
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Template text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Raw template bytes, for templates that are not valid UTF-8.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_bytes: Option<Vec<u8>>,
    #[serde(default)]
    pub args: Vec<FixtureArg>,
    /// Buffer size for buffer mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
    /// Expected rendered text (before any buffer truncation).
    pub expected_output: String,
    /// Expected unit count, when it differs from the length of the output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_count: Option<usize>,
    /// Which render mode the case applies to: `stream`, `buffer`,
    /// `codepoints` or `all`.
    #[serde(default = "default_case_mode")]
    pub mode: String,
}

fn default_case_mode() -> String {
    String::from("all")
}

impl FixtureCase {
    /// The template as bytes; `template_bytes` wins when both are set.
    pub fn template_bytes(&self) -> Result<&[u8], HarnessError> {
        match (&self.template_bytes, &self.template) {
            (Some(bytes), _) => Ok(bytes),
            (None, Some(text)) => Ok(text.as_bytes()),
            (None, None) => Err(HarnessError::MissingTemplate(self.name.clone())),
        }
    }
}

/// A collection of fixture cases for one feature family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Feature family name.
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
        Ok(Self::from_json(&content)?)
    }
}

/// Every `*.json` file directly under `dir`, sorted by path.
pub fn fixture_files(dir: &Path) -> Result<Vec<std::path::PathBuf>, HarnessError> {
    let entries = std::fs::read_dir(dir).map_err(|e| HarnessError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| HarnessError::io(dir, e))?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    if files.is_empty() {
        return Err(HarnessError::NoFixtures(dir.to_path_buf()));
    }
    files.sort();
    Ok(files)
}
