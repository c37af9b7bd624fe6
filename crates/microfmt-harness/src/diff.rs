//! Diff rendering for fixture comparison.

/// Render a line diff between expected and actual output.
///
/// Lines present on only one side are reported as removed or added.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");
    let expected_lines: Vec<&str> = expected.split('\n').collect();
    let actual_lines: Vec<&str> = actual.split('\n').collect();
    let rows = expected_lines.len().max(actual_lines.len());
    for i in 0..rows {
        let e = expected_lines.get(i);
        let a = actual_lines.get(i);
        if e == a {
            continue;
        }
        out.push_str(&format!("@@ line {} @@\n", i + 1));
        if let Some(e) = e {
            out.push_str(&format!("-{}\n", visible(e)));
        }
        if let Some(a) = a {
            out.push_str(&format!("+{}\n", visible(a)));
        }
    }
    out
}

/// Quote a line so trailing padding and control bytes show up.
fn visible(line: &str) -> String {
    format!("{line:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_text() {
        assert_eq!(render_diff("a", "a"), "[identical]");
    }

    #[test]
    fn shows_padding_difference() {
        let diff = render_diff("  42", " 42");
        assert_eq!(diff, "--- expected\n+++ actual\n@@ line 1 @@\n-\"  42\"\n+\" 42\"\n");
    }

    #[test]
    fn extra_lines_are_reported() {
        let diff = render_diff("a\nb", "a");
        assert!(diff.contains("@@ line 2 @@\n-\"b\"\n"));
        assert!(!diff.contains("@@ line 1 @@"));
    }
}
