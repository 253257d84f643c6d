//! # Pose
//!
//! A rigid transform in the plane, the position and heading of a frame
//! relative to a fixed origin frame.
//!
//! Poses form the group SE(2). Composition is done with
//! [`Pose2d::transform_by`], and poses are moved to and from the tangent
//! space of twists with the exponential and logarithm maps, [`Pose2d::exp`]
//! and [`Pose2d::log`]. Interpolation and distance both go through the
//! logarithm, so they follow the constant curvature arc between two poses
//! rather than treating position and heading separately.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use util::maths::{epsilon_equals, epsilon_equals_with, wrap_pi, EPSILON};

// Internal
use crate::traits::{Csv, Distance, Interpolate};
use crate::{Rotation2d, Transform2d, Translation2d, Twist2d};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The position and heading of a frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pose2d {
    translation: Translation2d,
    rotation: Rotation2d,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Pose2d {
    pub fn new(translation: Translation2d, rotation: Rotation2d) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    pub fn from_xy(x: f64, y: f64, rotation: Rotation2d) -> Self {
        Self::new(Translation2d::new(x, y), rotation)
    }

    /// The origin frame.
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn from_translation(translation: Translation2d) -> Self {
        Self::new(translation, Rotation2d::identity())
    }

    pub fn from_rotation(rotation: Rotation2d) -> Self {
        Self::new(Translation2d::identity(), rotation)
    }

    pub fn translation(&self) -> Translation2d {
        self.translation
    }

    pub fn rotation(&self) -> &Rotation2d {
        &self.rotation
    }

    // ---- LIE GROUP MAPS ----

    /// Integrate a twist over unit time along a constant curvature arc,
    /// giving the pose reached from the origin.
    pub fn exp(delta: &Twist2d) -> Pose2d {
        let (sin_theta, cos_theta) = delta.dtheta.sin_cos();

        // sin(x)/x and (1 - cos(x))/x both tend to a finite limit as x -> 0,
        // use their Taylor expansions there
        let (s, c) = if delta.dtheta.abs() < EPSILON {
            trace!("Small angle exp branch for dtheta = {}", delta.dtheta);
            (
                1.0 - 1.0 / 6.0 * delta.dtheta * delta.dtheta,
                0.5 * delta.dtheta,
            )
        } else {
            (
                sin_theta / delta.dtheta,
                (1.0 - cos_theta) / delta.dtheta,
            )
        };

        Pose2d::new(
            Translation2d::new(
                delta.dx * s - delta.dy * c,
                delta.dx * c + delta.dy * s,
            ),
            Rotation2d::from_cached(wrap_pi(delta.dtheta), cos_theta, sin_theta),
        )
    }

    /// Inverse of [`Pose2d::exp`], the twist which takes the origin to
    /// `transform`.
    pub fn log(transform: &Pose2d) -> Twist2d {
        let dtheta = transform.rotation.radians();
        let half_dtheta = 0.5 * dtheta;
        let cos_minus_one = transform.rotation.cos() - 1.0;

        let half_theta_by_tan_half_theta = if cos_minus_one.abs() < EPSILON {
            trace!("Small angle log branch for dtheta = {}", dtheta);
            1.0 - 1.0 / 12.0 * dtheta * dtheta
        } else {
            -(half_dtheta * transform.rotation.sin()) / cos_minus_one
        };

        let translation_part = transform.translation.rotate_by(&Rotation2d::from_xy(
            half_theta_by_tan_half_theta,
            -half_dtheta,
            false,
        ));

        Twist2d::new(translation_part.x, translation_part.y, dtheta)
    }

    // ---- GROUP OPERATIONS ----

    /// Apply `other` as a motion in this pose's own frame.
    pub fn transform_by(&self, other: &Pose2d) -> Pose2d {
        Pose2d::new(
            self.translation
                .translate_by(&other.translation.rotate_by(&self.rotation)),
            self.rotation.rotate_by(&other.rotation),
        )
    }

    /// Apply a relative transform in this pose's own frame.
    pub fn plus(&self, other: &Transform2d) -> Pose2d {
        Pose2d::new(
            self.translation
                .translate_by(&other.translation().rotate_by(&self.rotation)),
            self.rotation.rotate_by(other.rotation()),
        )
    }

    /// Rotate this pose in place about its own origin.
    pub fn rotate_by(&self, rotation: &Rotation2d) -> Pose2d {
        self.transform_by(&Pose2d::from_rotation(rotation.clone()))
    }

    /// The pose which undoes this one, so that
    /// `pose.transform_by(&pose.inverse())` is the identity.
    pub fn inverse(&self) -> Pose2d {
        let rotation_inverted = self.rotation.inverse();

        Pose2d::new(
            self.translation.inverse().rotate_by(&rotation_inverted),
            rotation_inverted,
        )
    }

    /// The transform taking `other` to this pose, in `other`'s frame.
    pub fn minus(&self, other: &Pose2d) -> Transform2d {
        Transform2d::between(other, self)
    }

    /// This pose expressed in the frame of `other`.
    pub fn relative_to(&self, other: &Pose2d) -> Pose2d {
        let transform = Transform2d::between(other, self);

        Pose2d::new(transform.translation(), transform.rotation().clone())
    }

    /// The same position, with the heading turned by a clockwise quarter
    /// turn.
    pub fn normal(&self) -> Pose2d {
        Pose2d::new(self.translation, self.rotation.normal())
    }

    // ---- GEODESICS ----

    /// Interpolate along the constant curvature arc from this pose to
    /// `other`.
    ///
    /// `t` at or outside the ends of `[0, 1]` returns an exact copy of the
    /// nearest endpoint.
    pub fn interpolate(&self, other: &Pose2d, t: f64) -> Pose2d {
        if t <= 0.0 {
            return self.clone();
        } else if t >= 1.0 {
            return other.clone();
        }

        let twist = Pose2d::log(&self.inverse().transform_by(other));

        self.transform_by(&Pose2d::exp(&twist.scaled(t)))
    }

    /// Length of the twist taking this pose to `other`.
    pub fn distance(&self, other: &Pose2d) -> f64 {
        Pose2d::log(&self.inverse().transform_by(other)).norm()
    }

    // ---- HEADING LINES ----

    /// The point at which the heading line of this pose crosses the heading
    /// line of `other`.
    ///
    /// Returns `(+inf, +inf)` if the headings are parallel, as there is no
    /// unique intersection.
    pub fn intersection(&self, other: &Pose2d) -> Translation2d {
        if self.rotation.is_parallel(&other.rotation) {
            trace!("Headings are parallel, no intersection");
            return no_intersection();
        }

        // Solve along the more vertical line, so the tangent of the other is
        // finite
        if self.rotation.cos().abs() < other.rotation.cos().abs() {
            intersection_internal(self, other)
        } else {
            intersection_internal(other, self)
        }
    }

    /// True if `other` lies on the heading line of this pose, and points
    /// along the same line.
    pub fn is_collinear(&self, other: &Pose2d) -> bool {
        if !self.rotation.is_parallel(&other.rotation) {
            return false;
        }

        let twist = Pose2d::log(&self.inverse().transform_by(other));

        epsilon_equals(twist.dy, 0.0) && epsilon_equals(twist.dtheta, 0.0)
    }

    // ---- MIRRORING ----

    /// Mirror about the x axis.
    pub fn mirror(&self) -> Pose2d {
        Pose2d::new(
            Translation2d::new(self.translation.x, -self.translation.y),
            self.rotation.inverse(),
        )
    }

    /// Mirror about the vertical line `x = x_value`.
    pub fn mirror_about_x(&self, x_value: f64) -> Pose2d {
        Pose2d::new(
            self.translation.mirror_about_x(x_value),
            self.rotation.mirror_about_x(),
        )
    }

    /// Mirror about the horizontal line `y = y_value`.
    pub fn mirror_about_y(&self, y_value: f64) -> Pose2d {
        Pose2d::new(
            self.translation.mirror_about_y(y_value),
            self.rotation.mirror_about_y(),
        )
    }

    /// Opposite headings are not equal, the rotations must agree in direction.
    pub fn epsilon_equals(&self, other: &Pose2d, epsilon: f64) -> bool {
        self.translation.epsilon_equals(&other.translation, epsilon)
            && epsilon_equals_with(self.rotation.distance(&other.rotation), 0.0, epsilon)
    }
}

impl PartialEq for Pose2d {
    fn eq(&self, other: &Self) -> bool {
        self.epsilon_equals(other, EPSILON)
    }
}

impl fmt::Display for Pose2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Translation: {}, Rotation: {}",
            self.translation, self.rotation
        )
    }
}

impl Csv for Pose2d {
    fn to_csv(&self) -> String {
        format!("{}, {}", self.translation.to_csv(), self.rotation.to_csv())
    }
}

impl Interpolate for Pose2d {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Pose2d::interpolate(self, other, t)
    }
}

impl Distance for Pose2d {
    fn distance(&self, other: &Self) -> f64 {
        Pose2d::distance(self, other)
    }
}

impl<'a> Add<&'a Transform2d> for &Pose2d {
    type Output = Pose2d;

    fn add(self, other: &'a Transform2d) -> Pose2d {
        self.plus(other)
    }
}

impl<'a> Sub<&'a Pose2d> for &Pose2d {
    type Output = Transform2d;

    fn sub(self, other: &'a Pose2d) -> Transform2d {
        self.minus(other)
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn no_intersection() -> Translation2d {
    Translation2d::new(std::f64::INFINITY, std::f64::INFINITY)
}

/// Intersect the heading lines of `a` and `b`, where `a` is the more
/// vertical of the two.
fn intersection_internal(a: &Pose2d, b: &Pose2d) -> Translation2d {
    let a_r = &a.rotation;
    let b_r = &b.rotation;
    let a_t = a.translation;
    let b_t = b.translation;

    let tan_b = b_r.tan();
    let t = ((a_t.x - b_t.x) * tan_b + b_t.y - a_t.y) / (a_r.sin() - a_r.cos() * tan_b);

    if t.is_nan() {
        trace!("Intersection parameter is NaN, no intersection");
        return no_intersection();
    }

    a_t.translate_by(&a_r.to_translation().scale(t))
}
