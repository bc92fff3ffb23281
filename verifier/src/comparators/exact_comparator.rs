//! A comparator that requires lines to match exactly after trimming.
//!
//! The `ExactLineComparator` applies no numeric tolerance: the whole line is
//! compared as text once leading and trailing whitespace is stripped. Useful
//! for output with no floating-point content, where any difference at all is
//! a failure.

use crate::traits::comparator::LineComparator;

/// A comparator that accepts a line only if it equals the expected line
/// after trimming leading and trailing whitespace on both sides.
pub struct ExactLineComparator;

impl LineComparator for ExactLineComparator {
    fn compare(&self, expected: &str, actual: &str) -> Vec<String> {
        if expected.trim() == actual.trim() {
            Vec::new()
        } else {
            vec![format!(
                "Line mismatch:\nExpected: '{}'\nGot: '{}'",
                expected.trim(),
                actual.trim()
            )]
        }
    }
}
