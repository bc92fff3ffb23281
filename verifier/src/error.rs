//! Verifier Error Types
//!
//! This module defines the [`VerifierError`] enum for failures that prevent
//! a verification run from producing a report at all. Per-line mismatches are
//! never errors: they are diagnostics carried inside the report.

/// Represents all error types that can occur in the verifier.
#[derive(Debug)]
pub enum VerifierError {
    /// Configuration is malformed (bad JSON, negative tolerance, etc.).
    InvalidConfig(String),
    /// I/O error (file not found, unreadable, etc.).
    IoError(String),
}
