//! # Planar geometry library
//!
//! Rigid motions in the plane: headings, positions, poses, the relative
//! transforms between poses, and twists. Poses and twists are linked by the
//! exponential and logarithm maps of SE(2), which let a pose be integrated
//! from a constant curvature motion and let two poses be interpolated along
//! the arc joining them.
//!
//! All types are immutable values. [`Rotation2d`] caches whichever of its
//! angle or `(cos, sin)` representations it was not built from on first use,
//! and is safe to share between threads.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod convert;
mod pose;
mod rotation;
mod transform;
mod translation;
mod twist;

/// Capability traits shared by the geometry types
pub mod traits;

// ---------------------------------------------------------------------------
// EXPORTS
// ---------------------------------------------------------------------------

pub use pose::Pose2d;
pub use rotation::Rotation2d;
pub use transform::Transform2d;
pub use translation::Translation2d;
pub use twist::Twist2d;

pub use traits::{Csv, Distance, Interpolate};

pub use util::maths::EPSILON;
