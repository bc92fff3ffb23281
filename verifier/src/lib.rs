//! # Verifier Library
//!
//! This crate decides whether a program's captured output is an acceptable
//! rendering of an expected ("oracle") output under floating-point
//! tolerance. It compares the two line sequences pairwise with a pluggable
//! comparator strategy and produces a structured report that surfaces every
//! mismatching line at once.
//!
//! ## Key Concepts
//! - **VerificationJob**: the main struct representing one verification of a
//!   captured run against expected lines.
//! - **Comparators**: pluggable strategies for judging a single line
//!   (structural tolerance-based, exact).
//! - **Reports**: structured output classifying the run and carrying every
//!   per-line diagnostic.
//!
//! The verifier is synchronous and pure: it performs no I/O of its own and
//! holds no shared mutable state, so independent runs (or independent line
//! comparisons) may be evaluated in parallel by the caller.

pub mod comparators;
pub mod error;
pub mod report;
pub mod traits;
pub mod utilities;

use crate::comparators::structural_comparator::StructuralComparator;
use crate::error::VerifierError;
use crate::report::{LineDiagnostic, VerifyReport};
use crate::traits::comparator::LineComparator;

use chrono::Utc;
use tracing::{debug, warn};
use util::verify_config::VerifyConfig;

/// Represents one verification of captured program output against expected
/// output.
///
/// The expected lines come from an oracle; the actual lines are the
/// program's stdout after filtering (see
/// [`utilities::output_filter::clean_output_lines`]). The comparator
/// strategy defaults to the tolerance-based [`StructuralComparator`]
/// configured from [`VerifyConfig::tolerance`].
pub struct VerificationJob<'a> {
    expected_lines: Vec<String>,
    actual_lines: Vec<String>,
    comparator: Box<dyn LineComparator + 'a>,
    config: VerifyConfig,
}

impl<'a> VerificationJob<'a> {
    /// Create a verification job with the default structural comparator.
    ///
    /// # Arguments
    /// * `expected_lines` - The oracle's expected output lines, in order.
    /// * `actual_lines` - The filtered captured output lines, in order.
    /// * `config` - Verification configuration (tolerance etc.).
    pub fn new(expected_lines: Vec<String>, actual_lines: Vec<String>, config: VerifyConfig) -> Self {
        let comparator = Box::new(StructuralComparator::new(config.tolerance));
        Self {
            expected_lines,
            actual_lines,
            comparator,
            config,
        }
    }

    /// Create a verification job from a JSON configuration document.
    ///
    /// # Errors
    /// Returns [`VerifierError::InvalidConfig`] if the JSON is malformed or
    /// the tolerance is negative.
    pub fn from_config_json(
        expected_lines: Vec<String>,
        actual_lines: Vec<String>,
        config_json: &str,
    ) -> Result<Self, VerifierError> {
        let config = VerifyConfig::from_json(config_json)
            .map_err(|e| VerifierError::InvalidConfig(format!("Invalid config JSON: {e}")))?;
        if config.tolerance < 0.0 {
            return Err(VerifierError::InvalidConfig(format!(
                "Tolerance must be non-negative, got {}",
                config.tolerance
            )));
        }
        Ok(Self::new(expected_lines, actual_lines, config))
    }

    /// Set a custom line comparator strategy for this job.
    pub fn with_comparator<C: LineComparator + 'a>(mut self, comparator: C) -> Self {
        self.comparator = Box::new(comparator);
        self
    }

    /// The configuration this job runs with.
    pub fn config(&self) -> &VerifyConfig {
        &self.config
    }

    /// Run the verification and produce a report.
    ///
    /// If the line counts differ the run fails immediately with a
    /// length-mismatch diagnostic and no per-line comparison occurs; there
    /// is no re-alignment or fuzzy matching across shifted lines. Otherwise
    /// lines are compared pairwise by position and every mismatching line is
    /// reported, not just the first.
    pub fn run(self) -> VerifyReport {
        let expected_line_count = self.expected_lines.len();
        let actual_line_count = self.actual_lines.len();

        if expected_line_count != actual_line_count {
            let message =
                format!("Expected {expected_line_count} lines, got {actual_line_count}.");
            warn!("{message}");
            return VerifyReport {
                passed: false,
                expected_line_count,
                actual_line_count,
                length_mismatch: Some(message),
                lines: Vec::new(),
                created_at: Utc::now().to_rfc3339(),
            };
        }

        let mut lines = Vec::new();
        for (i, (expected, actual)) in self
            .expected_lines
            .iter()
            .zip(self.actual_lines.iter())
            .enumerate()
        {
            let errors = self.comparator.compare(expected, actual);
            if !errors.is_empty() {
                debug!("line {}: {} error(s)", i + 1, errors.len());
                lines.push(LineDiagnostic {
                    line_number: i + 1,
                    expected: expected.clone(),
                    actual: actual.clone(),
                    errors,
                });
            }
        }

        VerifyReport {
            passed: lines.is_empty(),
            expected_line_count,
            actual_line_count,
            length_mismatch: None,
            lines,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}
