//! Verification configuration.
//!
//! Holds the knobs that control how program output is judged: the absolute
//! numeric tolerance applied to every numeric token, and the prompt-line
//! prefixes the output filter drops before comparison. The struct is
//! deserializable from JSON with per-field defaults, so a partial config
//! document is always valid.

use serde::{Deserialize, Serialize};

fn default_tolerance() -> f64 {
    0.1
}

fn default_ignore_prefixes() -> Vec<String> {
    Vec::new()
}

/// Configuration for a verification run.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerifyConfig {
    /// Maximum absolute difference allowed per numeric token.
    ///
    /// Chosen to match two-decimal output precision; callers targeting a
    /// different precision should set this rather than rely on the default.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Lines starting with any of these prefixes are treated as prompts and
    /// dropped by the output filter before comparison.
    #[serde(default = "default_ignore_prefixes")]
    pub ignore_prefixes: Vec<String>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            ignore_prefixes: default_ignore_prefixes(),
        }
    }
}

impl VerifyConfig {
    /// Returns the default configuration.
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Parse a configuration from a JSON string. Missing fields fall back to
    /// their defaults.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
