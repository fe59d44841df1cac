//! Test utilities for code built with [`Emit`](crate::Emit).
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::process::{Command, Stdio};

use crate::GofmtConfig;

/// Check whether the configured gofmt binary can be run.
pub fn gofmt_available() -> bool {
    let config = GofmtConfig::from_env();
    let available = Command::new(&config.binary)
        .arg("-l")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success());
    if !available {
        tracing::warn!(binary = %config.binary.display(), "gofmt not available");
    }
    available
}

/// Assert that two strings are equal, with a nice diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.split_inclusive('\n').collect();
        let actual_lines: Vec<&str> = actual.split_inclusive('\n').collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {:?}\n", exp));
                diff.push_str(&format!("  actual:   {:?}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Panic unless gofmt can be run.
///
/// Tests calling this are marked `#[ignore = "requires gofmt"]` and run with
/// `cargo test -- --ignored` on machines with a Go toolchain.
pub fn require_gofmt() {
    assert!(
        gofmt_available(),
        "gofmt not found; install Go or set GOFRAG_GOFMT"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_content_eq_equal() {
        assert_content_eq("a\nb\n", "a\nb\n");
    }

    #[test]
    #[should_panic(expected = "Line 2")]
    fn test_assert_content_eq_reports_line() {
        assert_content_eq("a\nb\n", "a\nc\n");
    }

    #[test]
    #[should_panic(expected = "Line 2")]
    fn test_assert_content_eq_trailing_newline() {
        assert_content_eq("}\n\n", "}\n");
    }
}
