//! Conformance harness for microfmt.
//!
//! This crate provides:
//! - Fixture loading: JSON cases with a template, arguments and expected output
//! - Fixture verify: run every case through the stream, buffer and code point
//!   entry points and compare
//! - Report generation: markdown + JSON conformance reports with fixture digests
//! - Structured logging: JSONL records per verified case

#![forbid(unsafe_code)]

pub mod config;
pub mod diff;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use config::RenderMode;
pub use error::HarnessError;
pub use fixtures::{FixtureArg, FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
