//! # Point-File Parser
//!
//! Parses the point-file text format shared by data and query files:
//!
//! ```text
//! <N>
//! <x1> <y1>
//! ...
//! <xN> <yN>
//! ```
//!
//! Whitespace-only lines are ignored. A non-empty line with fewer than two
//! whitespace-separated fields is skipped; any extra fields beyond the first
//! two are ignored. The declared count must match the number of points
//! actually parsed.
//!
//! # Error Handling
//!
//! Returns [`OracleError`] variants for a malformed count line, unparseable
//! coordinates, a count mismatch, or an unreadable file.

use crate::error::OracleError;
use crate::point::Point;
use std::fs;
use std::path::Path;
use tracing::error;

/// Parse point-file text into an ordered point set.
///
/// # Errors
///
/// - [`OracleError::InvalidCount`] if the first non-empty line is missing or
///   is not a non-negative integer.
/// - [`OracleError::InvalidPoint`] if a point line's first two fields do not
///   parse as floats.
/// - [`OracleError::CountMismatch`] if the declared count differs from the
///   number of point lines consumed.
pub fn parse_point_set(input: &str) -> Result<Vec<Point>, OracleError> {
    let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());

    let count_line = lines
        .next()
        .ok_or_else(|| OracleError::InvalidCount("input is empty".to_string()))?;
    let declared: usize = count_line.parse().map_err(|_| {
        OracleError::InvalidCount(format!(
            "count line is not a non-negative integer: '{count_line}'"
        ))
    })?;

    let mut points = Vec::with_capacity(declared);
    for line in lines {
        let mut fields = line.split_whitespace();
        let (Some(xs), Some(ys)) = (fields.next(), fields.next()) else {
            // Fewer than two fields: not a point line, skip it.
            continue;
        };
        let x: f64 = xs.parse().map_err(|_| {
            OracleError::InvalidPoint(format!("bad x coordinate '{xs}' in line '{line}'"))
        })?;
        let y: f64 = ys.parse().map_err(|_| {
            OracleError::InvalidPoint(format!("bad y coordinate '{ys}' in line '{line}'"))
        })?;
        points.push(Point::new(x, y));
    }

    if points.len() != declared {
        return Err(OracleError::CountMismatch(format!(
            "declared {declared} points, found {}",
            points.len()
        )));
    }

    Ok(points)
}

/// Read a point file from disk and parse it.
///
/// # Errors
///
/// Returns [`OracleError::IoError`] if the file cannot be read, otherwise
/// the same errors as [`parse_point_set`].
pub fn load_point_file(path: &Path) -> Result<Vec<Point>, OracleError> {
    let content = fs::read_to_string(path).map_err(|e| {
        error!("Failed to read point file {}: {e}", path.display());
        OracleError::IoError(format!("Failed to read point file {}: {e}", path.display()))
    })?;
    parse_point_set(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_input() {
        let points = parse_point_set("3\n0.00 0.00\n3.00 0.00\n0.00 4.00\n").unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[1], Point::new(3.0, 0.0));
    }

    #[test]
    fn test_parse_ignores_blank_lines() {
        let points = parse_point_set("2\n\n1.0 2.0\n   \n3.0 4.0\n\n").unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], Point::new(1.0, 2.0));
    }

    #[test]
    fn test_parse_negative_coordinates() {
        let points = parse_point_set("1\n-1.5 -2.25\n").unwrap();
        assert_eq!(points[0], Point::new(-1.5, -2.25));
    }

    #[test]
    fn test_parse_extra_fields_ignored() {
        let points = parse_point_set("1\n1.0 2.0 3.0 junk\n").unwrap();
        assert_eq!(points[0], Point::new(1.0, 2.0));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(
            parse_point_set(""),
            Err(OracleError::InvalidCount(_))
        ));
    }

    #[test]
    fn test_parse_bad_count_line() {
        assert!(matches!(
            parse_point_set("three\n1.0 2.0\n"),
            Err(OracleError::InvalidCount(_))
        ));
        assert!(matches!(
            parse_point_set("-1\n"),
            Err(OracleError::InvalidCount(_))
        ));
    }

    #[test]
    fn test_parse_bad_coordinate() {
        assert!(matches!(
            parse_point_set("1\n1.0 abc\n"),
            Err(OracleError::InvalidPoint(_))
        ));
    }

    #[test]
    fn test_parse_short_line_causes_count_mismatch() {
        // A one-field line is skipped, leaving fewer points than declared.
        assert!(matches!(
            parse_point_set("2\n1.0 2.0\n3.0\n"),
            Err(OracleError::CountMismatch(_))
        ));
    }

    #[test]
    fn test_parse_too_many_points() {
        assert!(matches!(
            parse_point_set("1\n1.0 2.0\n3.0 4.0\n"),
            Err(OracleError::CountMismatch(_))
        ));
    }

    #[test]
    fn test_parse_zero_points() {
        let points = parse_point_set("0\n").unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_point_file(Path::new("does/not/exist.txt"));
        assert!(matches!(result, Err(OracleError::IoError(_))));
    }
}
