//! # Oracle Library
//!
//! This crate computes reference ("oracle") answers for the k-nearest-neighbor
//! reporting task, independently of whatever spatial index the program under
//! test uses. It parses the point-file text format, runs a deliberate
//! brute-force k-NN per query, and renders the answers into the exact report
//! format the verifier expects.
//!
//! ## Key Concepts
//! - **Point / point set**: immutable 2D points, parsed or generated, ordered
//!   so results can refer back to original indices.
//! - **k-NN computation**: O(n·m) brute force with a deterministic
//!   distance-then-index ordering. Correctness, not speed, is the contract.
//! - **Rendering**: two lines per query (header + neighbor list), every value
//!   formatted to two decimals.

pub mod error;
pub mod generate;
pub mod knn;
pub mod parse;
pub mod point;
pub mod render;

use crate::point::Point;

/// Compute the full reference output for a data set, a query set and `k`.
///
/// Emits two lines per query, in query order: the header line and the
/// neighbor list line. Pure function of its inputs; calling it twice with
/// identical inputs yields identical output.
pub fn reference_output(data: &[Point], queries: &[Point], k: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(queries.len() * 2);
    for (qi, query) in queries.iter().enumerate() {
        let neighbors = knn::k_nearest(data, *query, k);
        lines.push(render::query_header(qi, *query));
        lines.push(render::neighbor_line(&neighbors));
    }
    lines
}
