//! Test execution engine.

use microfmt_core::{Arg, render, render_codepoints, render_to_buffer};

use crate::config::{DEFAULT_CAPACITY, RenderMode};
use crate::diff;
use crate::fixtures::{FixtureArg, FixtureCase, FixtureSet};
use crate::verify::VerificationResult;

/// Guard value written past the end of the buffer handed to the engine.
const GUARD: u8 = 0xa5;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    /// Mode selection being tested.
    pub mode: RenderMode,
    /// Buffer size for buffer-mode cases without their own `capacity`.
    pub default_capacity: usize,
}

/// What one render produced, before comparison.
struct Execution {
    actual: String,
    notes: Vec<String>,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>, mode: RenderMode) -> Self {
        Self {
            campaign: campaign.into(),
            mode,
            default_capacity: DEFAULT_CAPACITY,
        }
    }

    /// Run all matching cases in a set, once per concrete mode, and
    /// return results in case order.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        let mut results = Vec::new();
        for case in &fixture_set.cases {
            for &mode in self.mode.expand() {
                if !mode.accepts_case(&case.mode) {
                    continue;
                }
                let result = self.run_case(case, mode);
                log::debug!(
                    "{}/{}/{} [{mode}]: {}",
                    self.campaign,
                    fixture_set.family,
                    case.name,
                    if result.passed { "pass" } else { "fail" }
                );
                results.push(result);
            }
        }
        results
    }

    fn run_case(&self, case: &FixtureCase, mode: RenderMode) -> VerificationResult {
        let mut expected = case.expected_output.clone();
        let execution = match case.template_bytes() {
            Ok(template) => {
                let args: Vec<Arg<'_>> = case.args.iter().map(FixtureArg::to_arg).collect();
                match mode {
                    RenderMode::Buffer => {
                        let capacity = case.capacity.unwrap_or(self.default_capacity);
                        expected = truncated(&case.expected_output, capacity);
                        execute_buffer(template, &args, capacity, &case.expected_output)
                    }
                    RenderMode::Codepoints => execute_codepoints(template, &args, case),
                    RenderMode::Stream | RenderMode::All => execute_stream(template, &args, case),
                }
            }
            Err(err) => Execution {
                actual: String::new(),
                notes: vec![err.to_string()],
            },
        };

        let passed = execution.actual == expected && execution.notes.is_empty();
        let diff = if passed {
            None
        } else {
            let mut text = diff::render_diff(&expected, &execution.actual);
            for note in &execution.notes {
                text.push('\n');
                text.push_str(note);
            }
            Some(text)
        };
        VerificationResult {
            case_name: case.name.clone(),
            mode: mode.name().to_string(),
            passed,
            expected,
            actual: execution.actual,
            diff,
        }
    }
}

fn execute_stream(template: &[u8], args: &[Arg<'_>], case: &FixtureCase) -> Execution {
    let mut out: Vec<u8> = Vec::new();
    let count = render(&mut out, template, args);
    let mut notes = Vec::new();
    let want = case.expected_count.unwrap_or(case.expected_output.len());
    if count != want {
        notes.push(format!("count mismatch: expected {want}, got {count}"));
    }
    if count != out.len() {
        notes.push(format!("count {count} disagrees with {} bytes stored", out.len()));
    }
    Execution {
        actual: String::from_utf8_lossy(&out).into_owned(),
        notes,
    }
}

fn execute_buffer(
    template: &[u8],
    args: &[Arg<'_>],
    capacity: usize,
    expected_output: &str,
) -> Execution {
    let mut buf = vec![GUARD; capacity + 1];
    let count = render_to_buffer(&mut buf[..capacity], template, args);
    let mut notes = Vec::new();
    if buf[capacity] != GUARD {
        notes.push(format!("wrote past capacity {capacity}"));
    }
    let limit = capacity.saturating_sub(1);
    let want = expected_output.len().min(limit);
    if count != want {
        notes.push(format!("count mismatch: expected {want}, got {count}"));
    }
    if count > limit {
        notes.push(format!("count {count} exceeds capacity - 1 ({limit})"));
    }
    if capacity > 0 && buf.get(count.min(capacity - 1)) != Some(&0) {
        notes.push(format!("missing terminator at index {count}"));
    }
    let stored = &buf[..count.min(limit)];
    if stored != &expected_output.as_bytes()[..want] {
        notes.push(String::from("stored bytes differ from expected prefix"));
    }
    Execution {
        actual: String::from_utf8_lossy(stored).into_owned(),
        notes,
    }
}

fn execute_codepoints(template: &[u8], args: &[Arg<'_>], case: &FixtureCase) -> Execution {
    let mut out: Vec<u32> = Vec::new();
    let count = render_codepoints(&mut out, template, args);
    let mut notes = Vec::new();
    let want = case
        .expected_count
        .unwrap_or_else(|| case.expected_output.chars().count());
    if count != want {
        notes.push(format!("count mismatch: expected {want}, got {count}"));
    }
    let actual = out
        .iter()
        .map(|&c| char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    Execution { actual, notes }
}

/// Expected text after truncation to `capacity - 1` bytes, shown the way
/// the runner shows buffer contents.
fn truncated(expected: &str, capacity: usize) -> String {
    let keep = expected.len().min(capacity.saturating_sub(1));
    String::from_utf8_lossy(&expected.as_bytes()[..keep]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(json: &str) -> FixtureSet {
        FixtureSet::from_json(json).expect("valid fixture json")
    }

    #[test]
    fn all_mode_runs_each_case_three_times() {
        let set = fixture(
            r#"{"version":"v1","family":"ints","cases":[
                {"name":"hex","template":"{:#06x}","args":[{"uint":31}],"expected_output":"0x001f"}
            ]}"#,
        );
        let results = TestRunner::new("smoke", RenderMode::All).run(&set);
        let modes: Vec<_> = results.iter().map(|r| r.mode.as_str()).collect();
        assert_eq!(modes, ["stream", "buffer", "codepoints"]);
        assert!(results.iter().all(|r| r.passed), "{results:?}");
    }

    #[test]
    fn case_mode_filters() {
        let set = fixture(
            r#"{"version":"v1","family":"utf8","cases":[
                {"name":"bad_lead","template_bytes":[97,192,98],"expected_output":"a?b","mode":"codepoints"},
                {"name":"plain","template":"x","expected_output":"x","mode":"stream"}
            ]}"#,
        );
        let results = TestRunner::new("smoke", RenderMode::Codepoints).run(&set);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].case_name, "bad_lead");
        assert!(results[0].passed, "{:?}", results[0].diff);
    }

    #[test]
    fn buffer_mode_truncates_expectation() {
        let set = fixture(
            r#"{"version":"v1","family":"buffers","cases":[
                {"name":"short","template":"{}{}{}","args":[{"int":10},{"int":20},{"int":30}],
                 "capacity":4,"expected_output":"102030","mode":"buffer"},
                {"name":"zero","template":"abc","capacity":0,"expected_output":"abc","mode":"buffer"}
            ]}"#,
        );
        let results = TestRunner::new("smoke", RenderMode::Buffer).run(&set);
        assert_eq!(results[0].expected, "102");
        assert!(results[0].passed, "{:?}", results[0].diff);
        assert_eq!(results[1].expected, "");
        assert!(results[1].passed, "{:?}", results[1].diff);
    }

    #[test]
    fn mismatch_carries_diff() {
        let set = fixture(
            r#"{"version":"v1","family":"ints","cases":[
                {"name":"wrong","template":"{:4}","args":[{"int":7}],"expected_output":"7   ","mode":"stream"}
            ]}"#,
        );
        let results = TestRunner::new("smoke", RenderMode::All).run(&set);
        assert_eq!(results.len(), 1);
        assert!(!results[0].passed);
        assert_eq!(results[0].actual, "   7");
        let diff = results[0].diff.as_deref().unwrap();
        assert!(diff.contains("-\"7   \""));
        assert!(diff.contains("+\"   7\""));
    }

    #[test]
    fn stream_count_override_for_raw_bytes() {
        let set = fixture(
            r#"{"version":"v1","family":"utf8","cases":[
                {"name":"raw","template_bytes":[192,65],"expected_output":"�A",
                 "expected_count":2,"mode":"stream"}
            ]}"#,
        );
        let results = TestRunner::new("smoke", RenderMode::Stream).run(&set);
        assert!(results[0].passed, "{:?}", results[0].diff);
    }

    #[test]
    fn missing_template_fails_the_case() {
        let set = fixture(
            r#"{"version":"v1","family":"broken","cases":[
                {"name":"empty","expected_output":"","mode":"stream"}
            ]}"#,
        );
        let results = TestRunner::new("smoke", RenderMode::Stream).run(&set);
        assert!(!results[0].passed);
        assert!(results[0].diff.as_deref().unwrap().contains("neither"));
    }
}
