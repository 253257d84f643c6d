//! # nalgebra conversions
//!
//! Lossless conversions between the geometry types and their `nalgebra`
//! counterparts, for code that needs matrix maths on poses.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use nalgebra::{Isometry2, Point2, Translation2, UnitComplex, Vector2};

// Internal
use crate::{Pose2d, Rotation2d, Translation2d};

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl From<Vector2<f64>> for Translation2d {
    fn from(v: Vector2<f64>) -> Self {
        Translation2d::new(v.x, v.y)
    }
}

impl From<Translation2d> for Vector2<f64> {
    fn from(t: Translation2d) -> Self {
        Vector2::new(t.x, t.y)
    }
}

impl From<Point2<f64>> for Translation2d {
    fn from(p: Point2<f64>) -> Self {
        Translation2d::new(p.x, p.y)
    }
}

impl From<Translation2d> for Point2<f64> {
    fn from(t: Translation2d) -> Self {
        Point2::new(t.x, t.y)
    }
}

impl From<UnitComplex<f64>> for Rotation2d {
    fn from(q: UnitComplex<f64>) -> Self {
        Rotation2d::from_xy(q.cos_angle(), q.sin_angle(), false)
    }
}

impl From<&Rotation2d> for UnitComplex<f64> {
    fn from(r: &Rotation2d) -> Self {
        UnitComplex::from_cos_sin_unchecked(r.cos(), r.sin())
    }
}

impl From<Rotation2d> for UnitComplex<f64> {
    fn from(r: Rotation2d) -> Self {
        UnitComplex::from(&r)
    }
}

impl From<Isometry2<f64>> for Pose2d {
    fn from(iso: Isometry2<f64>) -> Self {
        Pose2d::new(
            Translation2d::from(iso.translation.vector),
            Rotation2d::from(iso.rotation),
        )
    }
}

impl From<&Pose2d> for Isometry2<f64> {
    fn from(pose: &Pose2d) -> Self {
        let t = pose.translation();

        Isometry2::from_parts(
            Translation2::new(t.x, t.y),
            UnitComplex::from(pose.rotation()),
        )
    }
}

impl From<Pose2d> for Isometry2<f64> {
    fn from(pose: Pose2d) -> Self {
        Isometry2::from(&pose)
    }
}
