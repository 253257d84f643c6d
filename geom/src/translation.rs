//! # Translation
//!
//! A shift in the `(x, y)` plane.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use util::maths::{clamp, epsilon_equals_with, EPSILON};

// Internal
use crate::traits::{Csv, Distance, Interpolate};
use crate::Rotation2d;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A 2D vector, used both as a position and as a displacement.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Translation2d {
    pub x: f64,
    pub y: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Translation2d {
    /// The zero translation.
    pub const IDENTITY: Translation2d = Translation2d { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// The displacement from `start` to `end`.
    pub fn between(start: &Translation2d, end: &Translation2d) -> Self {
        Self::new(end.x - start.x, end.y - start.y)
    }

    /// Build a vector of the given length pointing along `direction`.
    pub fn from_polar(direction: &Rotation2d, magnitude: f64) -> Self {
        Self::new(direction.cos() * magnitude, direction.sin() * magnitude)
    }

    /// The euclidean length, `sqrt(x^2 + y^2)`.
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// The squared length.
    pub fn norm2(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn translate_by(&self, other: &Translation2d) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// The vector pointing the opposite way.
    pub fn inverse(&self) -> Self {
        Self::new(-self.x, -self.y)
    }

    pub fn dot(&self, other: &Translation2d) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the 3D cross product.
    pub fn cross(&self, other: &Translation2d) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// The direction of this vector as a rotation.
    pub fn direction(&self) -> Rotation2d {
        Rotation2d::from_xy(self.x, self.y, true)
    }

    /// Apply a rotation to this vector.
    pub fn rotate_by(&self, rotation: &Rotation2d) -> Self {
        let (cos, sin) = (rotation.cos(), rotation.sin());

        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// The unsigned angle between two vectors.
    ///
    /// If either vector has zero length the angle is undefined and the
    /// identity rotation is returned.
    pub fn angle_between(a: &Translation2d, b: &Translation2d) -> Rotation2d {
        let cos_angle = a.dot(b) / (a.norm() * b.norm());

        if cos_angle.is_nan() {
            trace!("Angle between {} and {} is undefined", a, b);
            return Rotation2d::identity();
        }

        Rotation2d::from_radians(clamp(&cos_angle, &-1.0, &1.0).acos())
    }

    /// Linearly interpolate towards `other`, clamped to the segment between
    /// the two.
    pub fn interpolate(&self, other: &Translation2d, t: f64) -> Self {
        if t <= 0.0 {
            *self
        } else if t >= 1.0 {
            *other
        } else {
            self.extrapolate(other, t)
        }
    }

    /// Linearly interpolate towards `other` without clamping `t`.
    pub fn extrapolate(&self, other: &Translation2d, t: f64) -> Self {
        Self::new(
            t * (other.x - self.x) + self.x,
            t * (other.y - self.y) + self.y,
        )
    }

    /// Mirror about the vertical line `x = x_value`.
    pub fn mirror_about_x(&self, x_value: f64) -> Self {
        Self::new(2.0 * x_value - self.x, self.y)
    }

    /// Mirror about the horizontal line `y = y_value`.
    pub fn mirror_about_y(&self, y_value: f64) -> Self {
        Self::new(self.x, 2.0 * y_value - self.y)
    }

    /// The distance between the two points.
    pub fn distance(&self, other: &Translation2d) -> f64 {
        (*other - *self).norm()
    }

    pub fn epsilon_equals(&self, other: &Translation2d, epsilon: f64) -> bool {
        epsilon_equals_with(self.x, other.x, epsilon) && epsilon_equals_with(self.y, other.y, epsilon)
    }
}

impl PartialEq for Translation2d {
    fn eq(&self, other: &Self) -> bool {
        self.epsilon_equals(other, EPSILON)
    }
}

impl fmt::Display for Translation2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

impl Csv for Translation2d {
    fn to_csv(&self) -> String {
        format!("{:.3}, {:.3}", self.x, self.y)
    }
}

impl Interpolate for Translation2d {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Translation2d::interpolate(self, other, t)
    }
}

impl Distance for Translation2d {
    fn distance(&self, other: &Self) -> f64 {
        Translation2d::distance(self, other)
    }
}

impl Add for Translation2d {
    type Output = Translation2d;

    fn add(self, other: Translation2d) -> Translation2d {
        self.translate_by(&other)
    }
}

impl Sub for Translation2d {
    type Output = Translation2d;

    fn sub(self, other: Translation2d) -> Translation2d {
        Translation2d::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Translation2d {
    type Output = Translation2d;

    fn neg(self) -> Translation2d {
        self.inverse()
    }
}

impl Mul<f64> for Translation2d {
    type Output = Translation2d;

    fn mul(self, scalar: f64) -> Translation2d {
        self.scale(scalar)
    }
}
