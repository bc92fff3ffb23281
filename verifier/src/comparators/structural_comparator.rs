//! A comparator that tolerates floating-point drift in numeric output.
//!
//! The `StructuralComparator` splits both lines into alternating literal and
//! numeric segments, requires the literal segments to match exactly after
//! trimming, and accepts numeric segments whose absolute difference stays
//! within the configured tolerance. Every discrepancy found on a line is
//! reported; nothing is raised.

use crate::traits::comparator::LineComparator;
use crate::utilities::tokenize::{Segment, split_segments};
use util::format::format_2dp;

/// Slack added to the tolerance check so that two values formatted exactly
/// one tolerance apart are accepted even when their binary difference lands
/// a few ULPs above it (e.g. `1.1 - 1.0 > 0.1`). Far below the two-decimal
/// output precision.
const TOLERANCE_SLACK: f64 = 1e-9;

/// A comparator that accepts numeric drift up to an absolute tolerance.
///
/// Literal (non-numeric) segments must match exactly after trimming leading
/// and trailing whitespace. Numeric segments are parsed as floats and must
/// agree within `tolerance`. If the two lines do not decompose into the
/// same segment structure, a single structural-mismatch error is reported
/// and no segment comparison is attempted.
pub struct StructuralComparator {
    tolerance: f64,
}

impl StructuralComparator {
    /// Create a comparator with the given absolute tolerance per numeric
    /// token.
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl LineComparator for StructuralComparator {
    fn compare(&self, expected: &str, actual: &str) -> Vec<String> {
        let expected_parts = split_segments(expected);
        let actual_parts = split_segments(actual);
        let mut errors = Vec::new();

        // Quick structure check: same count and placement of numeric spans.
        if expected_parts.len() != actual_parts.len() {
            errors.push(format!(
                "Line structure mismatch.\nExpected parts: {expected_parts:?}\nGot: {actual_parts:?}"
            ));
            return errors;
        }

        for (exp, act) in expected_parts.iter().zip(actual_parts.iter()) {
            match (exp, act) {
                (Segment::Literal(e), Segment::Literal(a)) => {
                    if e.trim() != a.trim() {
                        errors.push(format!(
                            "Mismatch in text segment:\nExpected: '{}'\nGot: '{}'",
                            e.trim(),
                            a.trim()
                        ));
                    }
                }
                (Segment::Numeric(e), Segment::Numeric(a)) => {
                    let (Ok(exp_val), Ok(act_val)) = (e.parse::<f64>(), a.parse::<f64>()) else {
                        errors.push(format!("Error parsing numbers: Expected '{e}', Got '{a}'"));
                        continue;
                    };

                    let diff = (exp_val - act_val).abs();
                    if diff > self.tolerance + TOLERANCE_SLACK {
                        errors.push(format!(
                            "Mismatch in numeric value: expected {}, got {} (diff={} > {})",
                            format_2dp(exp_val),
                            format_2dp(act_val),
                            format_2dp(diff),
                            self.tolerance
                        ));
                    }
                }
                // Both decompositions alternate literal/numeric starting with
                // a literal, so equal lengths imply equal kinds.
                _ => unreachable!("segment kinds diverged despite equal structure"),
            }
        }

        errors
    }
}
