//! # Point Module
//!
//! Defines the immutable 2D point used throughout the oracle. A point set is
//! an ordered `Vec<Point>`; order matters because query answers refer to
//! data points by their original position.

/// An immutable 2D point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    ///
    /// The square root is never taken anywhere in the oracle; distances are
    /// compared and reported as squares.
    pub fn squared_distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}
