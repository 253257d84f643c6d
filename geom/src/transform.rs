//! # Transform
//!
//! The rigid motion mapping one pose onto another, expressed in the frame of
//! the initial pose.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

// Internal
use crate::traits::Csv;
use crate::{Pose2d, Rotation2d, Translation2d};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A relative transformation between two poses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform2d {
    translation: Translation2d,
    rotation: Rotation2d,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Transform2d {
    /// Create a transform from its translational and rotational components.
    pub fn new(translation: Translation2d, rotation: Rotation2d) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// The transform which maps a pose onto itself.
    pub fn identity() -> Self {
        Self::default()
    }

    /// The transform mapping `initial` onto `last`.
    ///
    /// The world frame displacement between the two poses is rotated into the
    /// frame of `initial`.
    pub fn between(initial: &Pose2d, last: &Pose2d) -> Self {
        let translation = (last.translation() - initial.translation())
            .rotate_by(&-initial.rotation());
        let rotation = last.rotation() - initial.rotation();

        Self {
            translation,
            rotation,
        }
    }

    pub fn translation(&self) -> Translation2d {
        self.translation
    }

    pub fn rotation(&self) -> &Rotation2d {
        &self.rotation
    }

    /// Scale the translation and rotation independently.
    ///
    /// This is only a linear approximation of scaling the motion, the exact
    /// scaling follows the arc through `Pose2d::exp(Pose2d::log(..) * k)`.
    /// Use it only for coarse extrapolation.
    pub fn times(&self, scalar: f64) -> Self {
        Self::new(self.translation * scalar, self.rotation.times(scalar))
    }

    /// Apply `other` after this transform.
    pub fn plus(&self, other: &Transform2d) -> Self {
        let identity = Pose2d::identity();

        Self::between(&identity, &identity.plus(self).plus(other))
    }

    /// The transform which undoes this one.
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();

        Self::new((-self.translation).rotate_by(&rotation), rotation)
    }
}

impl fmt::Display for Transform2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Translation: {}, Rotation: {}",
            self.translation, self.rotation
        )
    }
}

impl Csv for Transform2d {
    fn to_csv(&self) -> String {
        format!("{}, {}", self.translation.to_csv(), self.rotation.to_csv())
    }
}

impl<'a> Add<&'a Transform2d> for &Transform2d {
    type Output = Transform2d;

    fn add(self, other: &'a Transform2d) -> Transform2d {
        self.plus(other)
    }
}

impl Mul<f64> for &Transform2d {
    type Output = Transform2d;

    fn mul(self, scalar: f64) -> Transform2d {
        self.times(scalar)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_between() {
        let initial = Pose2d::from_xy(1.0, 1.0, Rotation2d::from_degrees(90.0));
        let last = Pose2d::from_xy(1.0, 3.0, Rotation2d::from_degrees(135.0));

        let delta = Transform2d::between(&initial, &last);

        // Straight ahead in the initial pose's frame
        assert_eq!(delta.translation(), Translation2d::new(2.0, 0.0));
        assert_abs_diff_eq!(delta.rotation().degrees(), 45.0, epsilon = 1e-9);

        // Applying the delta to the initial pose recovers the last pose
        assert_eq!(initial.plus(&delta), last);
    }

    #[test]
    fn test_plus() {
        let a = Transform2d::new(Translation2d::new(1.0, 0.0), Rotation2d::from_degrees(90.0));
        let b = Transform2d::new(Translation2d::new(1.0, 0.0), Rotation2d::from_degrees(90.0));

        let sum = &a + &b;
        assert_eq!(sum.translation(), Translation2d::new(1.0, 1.0));
        assert_abs_diff_eq!(sum.rotation().degrees(), 180.0, epsilon = 1e-9);

        assert_eq!(a.plus(&Transform2d::identity()), a);
    }

    #[test]
    fn test_times_is_linear() {
        let t = Transform2d::new(Translation2d::new(2.0, -1.0), Rotation2d::from_degrees(60.0));

        let half = &t * 0.5;
        assert_eq!(half.translation(), Translation2d::new(1.0, -0.5));
        assert_abs_diff_eq!(half.rotation().degrees(), 30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inverse() {
        let t = Transform2d::new(Translation2d::new(2.0, 1.0), Rotation2d::from_degrees(30.0));

        assert_eq!(t.plus(&t.inverse()), Transform2d::identity());
        assert_eq!(t.inverse().plus(&t), Transform2d::identity());
    }

    #[test]
    fn test_render() {
        let t = Transform2d::new(Translation2d::new(1.0, 2.0), Rotation2d::from_degrees(-90.0));

        assert_eq!(t.to_string(), "Translation: (1.000, 2.000), Rotation: (-90.000 deg)");
        assert_eq!(t.to_csv(), "1.000, 2.000, -90.000");
    }
}
