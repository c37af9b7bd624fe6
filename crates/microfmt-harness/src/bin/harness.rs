//! CLI entrypoint for the microfmt conformance harness.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use microfmt_core::Arg;
use microfmt_harness::config::{self, DEFAULT_CAPACITY};
use microfmt_harness::fixtures::{self, FixtureArg, FixtureSet};
use microfmt_harness::report::FixtureDigest;
use microfmt_harness::structured_log::{self, LogEmitter, LogEntry, LogLevel, Outcome};
use microfmt_harness::{ConformanceReport, HarnessError, TestRunner, VerificationSummary};

/// Conformance tooling for microfmt.
#[derive(Debug, Parser)]
#[command(name = "microfmt-harness")]
#[command(about = "Fixture-driven conformance harness for microfmt")]
struct Cli {
    /// Print engine diagnostics and per-case progress to stderr.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the engine against fixture files.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixture: PathBuf,
        /// Render mode: stream, buffer, codepoints or all
        /// (default: $MICROFMT_MODE, then all).
        #[arg(long)]
        mode: Option<String>,
        /// Output report path (markdown); JSON goes next to it.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log path.
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Render one template and print the result.
    Render {
        #[arg(long)]
        template: String,
        /// Argument as kind:value (int, uint, bool, char, str, ptr, float).
        #[arg(long = "arg")]
        args: Vec<String>,
        /// Render into a buffer of this many bytes instead of streaming.
        #[arg(long)]
        capacity: Option<usize>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    structured_log::init_logger(cli.verbose);

    match cli.command {
        Command::Verify {
            fixture,
            mode,
            report,
            log,
        } => verify(fixture, mode.as_deref(), report, log)?,
        Command::Render {
            template,
            args,
            capacity,
        } => render(&template, &args, capacity)?,
    }
    Ok(())
}

fn verify(
    fixture: PathBuf,
    mode: Option<&str>,
    report: Option<PathBuf>,
    log: Option<PathBuf>,
) -> Result<(), HarnessError> {
    let mode = config::resolve_mode(mode)?;
    eprintln!(
        "Verifying against fixtures in {} (mode {mode})",
        fixture.display()
    );

    let run_id = format!("verify-{}", std::process::id());
    let mut emitter = match &log {
        Some(path) => Some(LogEmitter::to_file(path, &run_id).map_err(|e| HarnessError::io(path, e))?),
        None => None,
    };
    if let Some(emitter) = emitter.as_mut() {
        emitter
            .emit_entry(
                LogEntry::new("", LogLevel::Info, "verify_start").with_mode(mode.name()),
            )
            .map_err(|e| HarnessError::io(&fixture, e))?;
    }

    let runner = TestRunner::new("fixture-verify", mode);
    let mut results = Vec::new();
    let mut digests = Vec::new();
    for path in fixtures::fixture_files(&fixture)? {
        let set = FixtureSet::from_file(&path)?;
        digests.push(FixtureDigest::from_file(&path, set.cases.len())?);
        let set_results = runner.run(&set);
        if let Some(emitter) = emitter.as_mut() {
            for r in &set_results {
                let outcome = if r.passed { Outcome::Pass } else { Outcome::Fail };
                let mut entry = LogEntry::new("", LogLevel::Info, "case_result")
                    .with_mode(r.mode.as_str())
                    .with_case(set.family.as_str(), r.case_name.as_str())
                    .with_outcome(outcome);
                if !r.passed {
                    entry = entry.with_details(serde_json::json!({
                        "expected": r.expected,
                        "actual": r.actual,
                    }));
                }
                emitter.emit_entry(entry).map_err(|e| HarnessError::io(&path, e))?;
            }
        }
        eprintln!(
            "  {}: {} results from {}",
            set.family,
            set_results.len(),
            path.display()
        );
        results.extend(set_results);
    }

    let summary = VerificationSummary::from_results(results);
    for r in summary.failures() {
        eprintln!("FAIL {} [{}]", r.case_name, r.mode);
        if let Some(diff) = &r.diff {
            eprintln!("{diff}");
        }
    }
    let report_doc = ConformanceReport {
        title: String::from("microfmt Conformance Report"),
        mode: mode.name().to_string(),
        timestamp: structured_log::now_utc(),
        fixtures: digests,
        summary,
    };

    eprintln!(
        "Verification complete: total={}, passed={}, failed={}",
        report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
    );

    if let Some(emitter) = emitter.as_mut() {
        emitter
            .emit_entry(
                LogEntry::new("", LogLevel::Info, "verify_end").with_details(serde_json::json!({
                    "total": report_doc.summary.total,
                    "passed": report_doc.summary.passed,
                    "failed": report_doc.summary.failed,
                })),
            )
            .and_then(|()| emitter.flush())
            .map_err(|e| HarnessError::io(&fixture, e))?;
    }

    if let Some(report_path) = report {
        eprintln!("Writing report to {}", report_path.display());
        std::fs::write(&report_path, report_doc.to_markdown())
            .map_err(|e| HarnessError::io(&report_path, e))?;
        let json_path = report_path.with_extension("json");
        std::fs::write(&json_path, report_doc.to_json()).map_err(|e| HarnessError::io(&json_path, e))?;
    }

    if !report_doc.summary.all_passed() {
        return Err(HarnessError::VerificationFailed {
            failed: report_doc.summary.failed,
            total: report_doc.summary.total,
        });
    }
    Ok(())
}

fn render(template: &str, raw_args: &[String], capacity: Option<usize>) -> Result<(), HarnessError> {
    let parsed = raw_args
        .iter()
        .map(|raw| FixtureArg::parse_cli(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let args: Vec<Arg<'_>> = parsed.iter().map(FixtureArg::to_arg).collect();

    let mut stdout = std::io::stdout().lock();
    let written = match capacity {
        Some(capacity) => {
            let mut buf = vec![0u8; capacity];
            let n = microfmt_core::render_to_buffer(&mut buf, template, &args);
            stdout.write_all(&buf[..n]).map_err(|e| HarnessError::io("<stdout>", e))?;
            n
        }
        None => {
            let mut out: Vec<u8> = Vec::with_capacity(DEFAULT_CAPACITY);
            let n = microfmt_core::render(&mut out, template, &args);
            stdout.write_all(&out).map_err(|e| HarnessError::io("<stdout>", e))?;
            n
        }
    };
    writeln!(stdout).map_err(|e| HarnessError::io("<stdout>", e))?;
    log::debug!("rendered {written} bytes from {} arguments", args.len());
    Ok(())
}
