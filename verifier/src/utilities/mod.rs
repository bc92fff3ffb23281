//! Shared helpers for the verifier: line tokenization and output filtering.

pub mod output_filter;
pub mod tokenize;
