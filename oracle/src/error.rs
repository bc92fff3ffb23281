//! Oracle Error Types
//!
//! This module defines the [`OracleError`] enum covering everything that can
//! go wrong while loading or parsing point-file input. Parsing errors are
//! fatal for the test case they belong to: the oracle never produces a
//! partial answer from malformed input.

/// Represents all error types that can occur while building an oracle answer.
#[derive(Debug)]
pub enum OracleError {
    /// The count line is missing or is not a non-negative integer.
    InvalidCount(String),
    /// A point line has unparseable coordinate fields.
    InvalidPoint(String),
    /// The declared count does not match the number of point lines consumed.
    CountMismatch(String),
    /// I/O error (file not found, unreadable, etc.).
    IoError(String),
}
