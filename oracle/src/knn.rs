//! # Brute-Force k-NN
//!
//! Computes the k nearest data points for a query by scanning every data
//! point. The O(n) scan per query is intentional: the oracle must not share
//! an algorithm (or a bug) with the spatial index under test, so it is never
//! replaced with an indexed structure.

use crate::point::Point;

/// One retained neighbor for a query: its squared distance and the data
/// point's original index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub dist2: f64,
    pub index: usize,
}

/// Return the `k` nearest data points to `query`, ordered by ascending
/// squared distance with ties broken by ascending original index.
///
/// The tie-break is enforced explicitly through the comparator rather than
/// relying on sort stability. If `k` exceeds the data-set size, every data
/// point is returned. The result never contains duplicate indices.
pub fn k_nearest(data: &[Point], query: Point, k: usize) -> Vec<Neighbor> {
    let mut candidates: Vec<Neighbor> = data
        .iter()
        .enumerate()
        .map(|(index, p)| Neighbor {
            dist2: query.squared_distance(p),
            index,
        })
        .collect();

    candidates.sort_by(|a, b| a.dist2.total_cmp(&b.dist2).then(a.index.cmp(&b.index)));
    candidates.truncate(k);
    candidates
}
