//! # Report Rendering
//!
//! Renders oracle answers into the textual report format the verifier
//! expects: a header line per query followed by its neighbor list. All
//! values are formatted to two decimals.

use crate::knn::Neighbor;
use crate::point::Point;
use util::format::format_2dp;

/// Render the header line for the query at position `index`.
///
/// Format: `Query <index>: (<x>, <y>)` with both coordinates at two
/// decimals.
pub fn query_header(index: usize, query: Point) -> String {
    format!(
        "Query {}: ({}, {})",
        index,
        format_2dp(query.x),
        format_2dp(query.y)
    )
}

/// Render the neighbor list line for one query.
///
/// Format: `  kNN: ` followed by `(dist2=<d>, idx=<i>) ` per neighbor, in
/// order. Each entry carries a trailing space, matching the established
/// report format; the structural comparator trims literal segments, so the
/// trailing space never affects verification.
pub fn neighbor_line(neighbors: &[Neighbor]) -> String {
    let mut line = String::from("  kNN: ");
    for neighbor in neighbors {
        line.push_str(&format!(
            "(dist2={}, idx={}) ",
            format_2dp(neighbor.dist2),
            neighbor.index
        ));
    }
    line
}
