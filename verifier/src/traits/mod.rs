//! Traits defining the pluggable seams of the verifier.

pub mod comparator;
