//! # Output Filtering
//!
//! Prepares captured program stdout for comparison: lines are trimmed,
//! blank lines are dropped, and lines starting with a configured prompt
//! prefix are dropped. Order of the surviving lines is preserved.

use crate::error::VerifierError;
use std::fs;
use std::path::Path;
use tracing::error;

/// Clean raw captured stdout into the line sequence handed to verification.
pub fn clean_output_lines(raw: &str, ignore_prefixes: &[String]) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !ignore_prefixes.iter().any(|p| line.starts_with(p.as_str())))
        .map(str::to_string)
        .collect()
}

/// Read a captured-stdout file from disk and clean it.
///
/// # Errors
///
/// Returns [`VerifierError::IoError`] if the file cannot be read.
pub fn load_output_lines(
    path: &Path,
    ignore_prefixes: &[String],
) -> Result<Vec<String>, VerifierError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        error!("Failed to read output file {}: {e}", path.display());
        VerifierError::IoError(format!("Failed to read output file {}: {e}", path.display()))
    })?;
    Ok(clean_output_lines(&raw, ignore_prefixes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_blank_lines_and_trims() {
        let raw = "  first \n\n   \nsecond\n";
        assert_eq!(
            clean_output_lines(raw, &[]),
            vec!["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn test_drops_prompt_lines() {
        let raw = "Enter k: \nQuery 0: (1.00, 1.00)\nEnter next\n";
        let prefixes = vec!["Enter ".to_string()];
        assert_eq!(
            clean_output_lines(raw, &prefixes),
            vec!["Query 0: (1.00, 1.00)".to_string()]
        );
    }

    #[test]
    fn test_preserves_order() {
        let raw = "b\na\nc\n";
        assert_eq!(clean_output_lines(raw, &[]), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(clean_output_lines("", &[]).is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_output_lines(Path::new("does/not/exist.out"), &[]);
        assert!(matches!(result, Err(VerifierError::IoError(_))));
    }
}
