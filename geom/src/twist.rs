//! # Twist
//!
//! A movement along an arc at constant curvature and velocity, expressed in
//! the local frame of the body moving along it.
//!
//! A twist can represent the difference between two poses, a velocity, an
//! acceleration and so on. Twists form a vector space, so unlike poses they
//! can be added, scaled and linearly interpolated directly. Convert to and
//! from poses with [`Pose2d::exp`](crate::Pose2d::exp) and
//! [`Pose2d::log`](crate::Pose2d::log).

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg};
use util::maths::{epsilon_equals_with, lin_interp, EPSILON};

// Internal
use crate::traits::{Csv, Interpolate};
use crate::Rotation2d;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Local frame displacement or velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Twist2d {
    /// Displacement along the local x (forward) axis
    pub dx: f64,

    /// Displacement along the local y (left) axis
    pub dy: f64,

    /// Change in heading in radians
    pub dtheta: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Twist2d {
    /// The zero twist.
    pub const IDENTITY: Twist2d = Twist2d {
        dx: 0.0,
        dy: 0.0,
        dtheta: 0.0,
    };

    pub const fn new(dx: f64, dy: f64, dtheta: f64) -> Self {
        Self { dx, dy, dtheta }
    }

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn scaled(&self, scale: f64) -> Self {
        Self::new(self.dx * scale, self.dy * scale, self.dtheta * scale)
    }

    /// Length of the translational part.
    pub fn norm(&self) -> f64 {
        // Common case of dy == 0
        if self.dy == 0.0 {
            self.dx.abs()
        } else {
            self.dx.hypot(self.dy)
        }
    }

    /// Squared length of the translational part.
    pub fn norm2(&self) -> f64 {
        self.dx * self.dx + self.dy * self.dy
    }

    pub fn has_translation(&self) -> bool {
        self.norm2() >= EPSILON
    }

    /// The direction of travel in the local frame.
    ///
    /// A pure rotation has no direction of travel, in which case `None` is
    /// returned.
    pub fn course(&self) -> Option<Rotation2d> {
        if self.has_translation() {
            Some(Rotation2d::from_xy(self.dx, self.dy, true))
        } else {
            None
        }
    }

    /// Curvature of the arc described by this twist, in 1/distance.
    ///
    /// A pure rotation has infinite curvature, signed by the direction of
    /// rotation. The zero twist has zero curvature.
    pub fn curvature(&self) -> f64 {
        let norm = self.norm();

        if norm < EPSILON {
            if self.dtheta.abs() < EPSILON {
                0.0
            } else {
                self.dtheta.signum() * std::f64::INFINITY
            }
        } else {
            self.dtheta / norm
        }
    }

    /// Mirror about the local x axis.
    pub fn mirror(&self) -> Self {
        Self::new(self.dx, -self.dy, -self.dtheta)
    }

    /// Mirror about a vertical line.
    pub fn mirror_about_x(&self) -> Self {
        Self::new(-self.dx, self.dy, -self.dtheta)
    }

    /// Mirror about a horizontal line.
    pub fn mirror_about_y(&self) -> Self {
        Self::new(self.dx, -self.dy, -self.dtheta)
    }

    /// Linear interpolation of each component, clamped to `[0, 1]`.
    pub fn interpolate(&self, other: &Twist2d, t: f64) -> Self {
        Self::new(
            lin_interp(self.dx, other.dx, t),
            lin_interp(self.dy, other.dy, t),
            lin_interp(self.dtheta, other.dtheta, t),
        )
    }

    pub fn epsilon_equals(&self, other: &Twist2d, epsilon: f64) -> bool {
        epsilon_equals_with(self.dx, other.dx, epsilon)
            && epsilon_equals_with(self.dy, other.dy, epsilon)
            && epsilon_equals_with(self.dtheta, other.dtheta, epsilon)
    }
}

impl fmt::Display for Twist2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.4}, {:.4}, {:.4})",
            self.dx,
            self.dy,
            self.dtheta.to_degrees()
        )
    }
}

impl Csv for Twist2d {
    fn to_csv(&self) -> String {
        format!(
            "{:.3}, {:.3}, {:.3}",
            self.dx,
            self.dy,
            self.dtheta.to_degrees()
        )
    }
}

impl Interpolate for Twist2d {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Twist2d::interpolate(self, other, t)
    }
}

impl Add for Twist2d {
    type Output = Twist2d;

    fn add(self, other: Twist2d) -> Twist2d {
        Twist2d::new(
            self.dx + other.dx,
            self.dy + other.dy,
            self.dtheta + other.dtheta,
        )
    }
}

impl Mul<f64> for Twist2d {
    type Output = Twist2d;

    fn mul(self, scale: f64) -> Twist2d {
        self.scaled(scale)
    }
}

impl Neg for Twist2d {
    type Output = Twist2d;

    fn neg(self) -> Twist2d {
        self.scaled(-1.0)
    }
}
