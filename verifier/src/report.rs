//! # Verification Report Module
//!
//! Defines the serializable result of a verification run. The report is the
//! verifier's only output: it classifies the run as pass/fail and carries
//! every diagnostic collected along the way, so a single run surfaces every
//! mismatching line at once.

use serde::Serialize;

/// Diagnostics for one mismatching line.
#[derive(Debug, Clone, Serialize)]
pub struct LineDiagnostic {
    /// 1-based position of the line in the expected/actual sequences.
    pub line_number: usize,
    /// The expected line text.
    pub expected: String,
    /// The actual line text.
    pub actual: String,
    /// Ordered error messages from the comparator for this line.
    pub errors: Vec<String>,
}

/// The final result of verifying one program run.
#[derive(Debug, Serialize)]
pub struct VerifyReport {
    /// True iff line counts match and every line comparison yielded zero
    /// errors.
    pub passed: bool,
    /// Number of expected lines.
    pub expected_line_count: usize,
    /// Number of actual lines.
    pub actual_line_count: usize,
    /// Set when the line counts differ; no per-line comparison is attempted
    /// in that case.
    pub length_mismatch: Option<String>,
    /// One entry per line that produced at least one error.
    pub lines: Vec<LineDiagnostic>,
    /// RFC 3339 timestamp of when the report was generated.
    pub created_at: String,
}

impl VerifyReport {
    /// Total number of error messages across all lines, counting a length
    /// mismatch as one.
    pub fn error_count(&self) -> usize {
        let line_errors: usize = self.lines.iter().map(|l| l.errors.len()).sum();
        line_errors + usize::from(self.length_mismatch.is_some())
    }
}
