//! # Line Tokenization
//!
//! Splits a line into alternating literal and numeric segments at the
//! boundaries of the numeric pattern `[-+]?[0-9]*\.?[0-9]+` (optional sign,
//! digits, optional decimal point, digits). The decomposition always starts
//! and ends with a literal segment, which may be empty, so two lines with
//! the same segment count automatically agree on the kind at every position.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches one numeric token, signed, with an optional decimal part.
static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-+]?[0-9]*\.?[0-9]+").expect("numeric token pattern is valid"));

/// One segment of a tokenized line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Non-numeric text between (or around) numeric tokens. May be empty.
    Literal(String),
    /// A maximal numeric token.
    Numeric(String),
}

/// Decompose a line into its alternating literal/numeric segments.
///
/// The result always has odd length: `literal, numeric, literal, ...,
/// literal`, with possibly empty leading and trailing literals. Both sides
/// of a comparison must be split by this same rule.
pub fn split_segments(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last_end = 0;
    for m in NUMBER_RE.find_iter(line) {
        segments.push(Segment::Literal(line[last_end..m.start()].to_string()));
        segments.push(Segment::Numeric(m.as_str().to_string()));
        last_end = m.end();
    }
    segments.push(Segment::Literal(line[last_end..].to_string()));
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Segment {
        Segment::Literal(s.to_string())
    }

    fn num(s: &str) -> Segment {
        Segment::Numeric(s.to_string())
    }

    #[test]
    fn test_split_no_numbers() {
        assert_eq!(split_segments("hello world"), vec![lit("hello world")]);
    }

    #[test]
    fn test_split_empty_line() {
        assert_eq!(split_segments(""), vec![lit("")]);
    }

    #[test]
    fn test_split_single_number() {
        assert_eq!(
            split_segments("x=1.50"),
            vec![lit("x="), num("1.50"), lit("")]
        );
    }

    #[test]
    fn test_split_alternates_and_has_odd_length() {
        let segments = split_segments("  kNN: (dist2=2.00, idx=0) (dist2=5.00, idx=1) ");
        assert_eq!(segments.len() % 2, 1);
        for (i, segment) in segments.iter().enumerate() {
            match segment {
                Segment::Literal(_) => assert_eq!(i % 2, 0),
                Segment::Numeric(_) => assert_eq!(i % 2, 1),
            }
        }
        assert_eq!(
            segments,
            vec![
                lit("  kNN: (dist"),
                num("2"),
                lit("="),
                num("2.00"),
                lit(", idx="),
                num("0"),
                lit(") (dist"),
                num("2"),
                lit("="),
                num("5.00"),
                lit(", idx="),
                num("1"),
                lit(") "),
            ]
        );
    }

    #[test]
    fn test_split_signed_and_bare_decimal() {
        assert_eq!(
            split_segments("a -3.5 b +.25 c"),
            vec![
                lit("a "),
                num("-3.5"),
                lit(" b "),
                num("+.25"),
                lit(" c"),
            ]
        );
    }

    #[test]
    fn test_split_number_at_line_start_and_end() {
        assert_eq!(
            split_segments("42 to 43"),
            vec![lit(""), num("42"), lit(" to "), num("43"), lit("")]
        );
    }
}
