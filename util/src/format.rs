//! Number formatting helpers shared by the oracle and the verifier.
//!
//! All report output renders floating-point values to exactly two decimal
//! places, so both the oracle renderer and the verifier's diagnostic
//! messages go through the same helpers.

/// Format a float with exactly two decimal digits.
pub fn format_2dp(x: f64) -> String {
    format!("{x:.2}")
}
