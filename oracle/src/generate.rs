//! # Point Generation
//!
//! Randomized point-set generation for large test cases. The random source
//! is passed in explicitly so generation is reproducible: seeding one
//! `StdRng` and threading it through every call replaces any process-wide
//! RNG state.

use crate::point::Point;
use rand::Rng;
use util::format::format_2dp;

/// Generate `n` uniform random points with both coordinates in
/// `[low, high]`.
pub fn generate_points<R: Rng>(rng: &mut R, n: usize, low: f64, high: f64) -> Vec<Point> {
    (0..n)
        .map(|_| {
            let x = rng.random_range(low..=high);
            let y = rng.random_range(low..=high);
            Point::new(x, y)
        })
        .collect()
}

/// Render a point set in the point-file text format: the count line followed
/// by one `<x> <y>` line per point, coordinates at two decimals.
///
/// Output from this function always parses back through
/// [`crate::parse::parse_point_set`].
pub fn render_point_file(points: &[Point]) -> String {
    let mut out = format!("{}\n", points.len());
    for p in points {
        out.push_str(&format!("{} {}\n", format_2dp(p.x), format_2dp(p.y)));
    }
    out
}
