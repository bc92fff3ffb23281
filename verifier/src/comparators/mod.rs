//! Comparator strategies for judging output lines.
//!
//! Two strategies are provided:
//! - [`structural_comparator::StructuralComparator`]: tolerates numeric
//!   drift; the default for numeric report output.
//! - [`exact_comparator::ExactLineComparator`]: strict trimmed equality.

pub mod exact_comparator;
pub mod structural_comparator;
