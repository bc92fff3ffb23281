/// LineComparator is a strategy trait for judging a single output line.
/// Each implementation decides whether an actual line is an acceptable
/// rendering of the expected line and explains every discrepancy found.
pub trait LineComparator: Send + Sync {
    /// Compare one (expected, actual) line pair.
    ///
    /// Returns an ordered list of human-readable error strings; an empty
    /// list means the line is accepted. Implementations never panic on
    /// malformed input: malformed content is reported as an error string.
    /// Implementations are stateless, so independent line pairs may be
    /// compared concurrently.
    fn compare(&self, expected: &str, actual: &str) -> Vec<String>;
}
