//! # Capability traits
//!
//! Small independent contracts shared by the geometry types, so that generic
//! code (sampling a path, logging a trajectory) can be written once.

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// Types which can be interpolated between two values.
pub trait Interpolate {
    /// Value a fraction `t` of the way from `self` to `other`.
    ///
    /// Values of `t` at or outside `[0, 1]` give the nearest endpoint.
    fn interpolate(&self, other: &Self, t: f64) -> Self;
}

/// Types with a notion of distance between two values.
pub trait Distance {
    fn distance(&self, other: &Self) -> f64;
}

/// Types which render to a comma separated row.
pub trait Csv {
    fn to_csv(&self) -> String;
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Sample the path between `from` and `to` at each of the given fractions.
pub fn sample<T: Interpolate>(from: &T, to: &T, fractions: &[f64]) -> Vec<T> {
    fractions.iter().map(|t| from.interpolate(to, *t)).collect()
}

/// Total length of the path visiting each of `points` in turn.
pub fn path_length<T: Distance>(points: &[T]) -> f64 {
    points.windows(2).map(|w| w[0].distance(&w[1]).abs()).sum()
}
