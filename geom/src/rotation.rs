//! # Rotation
//!
//! A heading in the plane, represented as a point on the unit circle.
//!
//! A rotation is seeded from either an angle in radians or a `(cos, sin)`
//! pair. The other representation is computed the first time it is read and
//! cached for the life of the value, so composition can stay in whichever
//! representation is already available and avoid transcendental calls.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use conquer_once::OnceCell;
use log::trace;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::ops::{Add, Neg, Sub};
use util::maths::{epsilon_equals, wrap_pi, EPSILON};

// Internal
use crate::traits::{Csv, Distance, Interpolate};
use crate::Translation2d;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A rotation in a 2D coordinate frame.
///
/// Equality is angular: two rotations are equal if the angle between them is
/// less than [`EPSILON`](util::maths::EPSILON).
#[derive(Serialize, Deserialize)]
#[serde(into = "SerdeRotation", from = "SerdeRotation")]
pub struct Rotation2d {
    repr: Repr,
}

/// Cosine and sine of an angle, always stored and filled together.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Trig {
    cos: f64,
    sin: f64,
}

/// Serialised form of a rotation.
#[derive(Serialize, Deserialize)]
struct SerdeRotation {
    radians: f64,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// The representation a rotation was built from, along with the lazily
/// filled cache of the other one.
enum Repr {
    Radians { radians: f64, trig: OnceCell<Trig> },
    Trig { trig: Trig, radians: OnceCell<f64> },
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Rotation2d {
    /// The identity rotation, pointing along the positive x axis.
    pub fn identity() -> Self {
        Self::from_cached(0.0, 1.0, 0.0)
    }

    /// A rotation of pi radians.
    pub fn pi() -> Self {
        Self::from_cached(PI, -1.0, 0.0)
    }

    /// A rotation of pi/2 radians.
    pub fn half_pi() -> Self {
        Self::from_cached(FRAC_PI_2, 0.0, 1.0)
    }

    /// Create a rotation from an angle in radians, wrapping it into
    /// `(-pi, pi]`.
    pub fn from_radians(radians: f64) -> Self {
        Self::with_radians(radians, true)
    }

    /// Create a rotation from an angle in degrees, wrapping it into
    /// `(-180, 180]`.
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// Create a rotation from an angle in radians, optionally wrapping it into
    /// `(-pi, pi]`.
    pub fn with_radians(radians: f64, wrap: bool) -> Self {
        let radians = if wrap { wrap_pi(radians) } else { radians };

        Self {
            repr: Repr::Radians {
                radians,
                trig: OnceCell::uninit(),
            },
        }
    }

    /// Create a rotation pointing along the vector `(x, y)`.
    ///
    /// When `normalize` is set the pair is scaled onto the unit circle. A
    /// vector too short to normalise gives the identity rotation. Without
    /// normalisation the pair is stored as given, which is only meaningful if
    /// the caller knows it is already unit length or only needs it as a 2x2
    /// rotation-scale matrix.
    pub fn from_xy(x: f64, y: f64, normalize: bool) -> Self {
        if !normalize {
            return Self::from_trig(x, y);
        }

        let magnitude = x.hypot(y);
        if magnitude > EPSILON {
            Self::from_trig(x / magnitude, y / magnitude)
        } else {
            trace!(
                "Direction ({}, {}) is too short to normalise, using identity",
                x,
                y
            );
            Self::identity()
        }
    }

    /// Create a rotation pointing along the given direction vector.
    pub fn from_direction(direction: &Translation2d, normalize: bool) -> Self {
        Self::from_xy(direction.x, direction.y, normalize)
    }

    /// Build a rotation where both representations are already known.
    ///
    /// The caller is responsible for `radians`, `cos` and `sin` agreeing.
    pub(crate) fn from_cached(radians: f64, cos: f64, sin: f64) -> Self {
        let cache = OnceCell::uninit();
        cache.init_once(|| radians);

        Self {
            repr: Repr::Trig {
                trig: Trig { cos, sin },
                radians: cache,
            },
        }
    }

    fn from_trig(cos: f64, sin: f64) -> Self {
        Self {
            repr: Repr::Trig {
                trig: Trig { cos, sin },
                radians: OnceCell::uninit(),
            },
        }
    }

    // ---- ACCESSORS ----

    pub fn cos(&self) -> f64 {
        self.trig().cos
    }

    pub fn sin(&self) -> f64 {
        self.trig().sin
    }

    /// Tangent of the angle.
    ///
    /// Vertical rotations give positive or negative infinity, by the sign of
    /// the sine, rather than `NaN`.
    pub fn tan(&self) -> f64 {
        let trig = self.trig();

        if trig.cos.abs() < EPSILON {
            if trig.sin >= 0.0 {
                std::f64::INFINITY
            } else {
                std::f64::NEG_INFINITY
            }
        } else {
            trig.sin / trig.cos
        }
    }

    /// The angle in radians.
    ///
    /// Rotations seeded from a `(cos, sin)` pair report an angle in
    /// `(-pi, pi]`.
    pub fn radians(&self) -> f64 {
        match &self.repr {
            Repr::Radians { radians, .. } => *radians,
            Repr::Trig { trig, radians } => fill(radians, || trig.sin.atan2(trig.cos)),
        }
    }

    pub fn degrees(&self) -> f64 {
        self.radians().to_degrees()
    }

    /// Unit vector pointing along this rotation.
    pub fn to_translation(&self) -> Translation2d {
        let trig = self.trig();
        Translation2d::new(trig.cos, trig.sin)
    }

    // ---- GROUP OPERATIONS ----

    /// Rotate this rotation by another, i.e. add the two angles.
    pub fn rotate_by(&self, other: &Rotation2d) -> Rotation2d {
        match (self.cached_trig(), other.cached_trig()) {
            (Some(a), Some(b)) => Rotation2d::from_xy(
                a.cos * b.cos - a.sin * b.sin,
                a.cos * b.sin + a.sin * b.cos,
                true,
            ),
            _ => Rotation2d::from_radians(self.radians() + other.radians()),
        }
    }

    /// The rotation which undoes this one.
    pub fn inverse(&self) -> Rotation2d {
        match self.cached_trig() {
            Some(trig) => Rotation2d::from_trig(trig.cos, -trig.sin),
            None => Rotation2d::from_radians(-self.radians()),
        }
    }

    /// Subtract `other` from this rotation.
    pub fn minus(&self, other: &Rotation2d) -> Rotation2d {
        self.rotate_by(&other.inverse())
    }

    /// The rotation pointing in the opposite direction.
    pub fn flip(&self) -> Rotation2d {
        match self.cached_trig() {
            Some(trig) => Rotation2d::from_trig(-trig.cos, -trig.sin),
            None => Rotation2d::from_radians(self.radians() + PI),
        }
    }

    /// This rotation turned clockwise by a quarter turn.
    pub fn normal(&self) -> Rotation2d {
        match self.cached_trig() {
            Some(trig) => Rotation2d::from_trig(trig.sin, -trig.cos),
            None => Rotation2d::from_radians(self.radians() - FRAC_PI_2),
        }
    }

    /// Scale the angle of this rotation.
    pub fn times(&self, scalar: f64) -> Rotation2d {
        Rotation2d::from_radians(self.radians() * scalar)
    }

    /// The axis-aligned rotation nearest to this one.
    pub fn nearest_pole(&self) -> Rotation2d {
        let trig = self.trig();

        if trig.cos.abs() > trig.sin.abs() {
            Rotation2d::from_trig(trig.cos.signum(), 0.0)
        } else {
            Rotation2d::from_trig(0.0, trig.sin.signum())
        }
    }

    /// True if the two rotations point along the same line, in either
    /// direction.
    pub fn is_parallel(&self, other: &Rotation2d) -> bool {
        if let (Some(a), Some(b)) = (self.cached_radians(), other.cached_radians()) {
            return radians_parallel(a, b);
        }

        match (self.cached_trig(), other.cached_trig()) {
            (Some(a), Some(b)) => {
                let a = a.normalized();
                let b = b.normalized();

                // Sine of the angle between the two, zero at both 0 and pi
                epsilon_equals(a.cos * b.sin - a.sin * b.cos, 0.0)
            }
            _ => radians_parallel(self.radians(), other.radians()),
        }
    }

    /// Interpolate along the shortest arc between this rotation and `other`.
    pub fn interpolate(&self, other: &Rotation2d, t: f64) -> Rotation2d {
        if t <= 0.0 {
            return self.clone();
        } else if t >= 1.0 {
            return other.clone();
        }

        let angle_diff = self.inverse().rotate_by(other).radians();

        self.rotate_by(&Rotation2d::from_radians(angle_diff * t))
    }

    /// Signed angle in radians from this rotation to `other`, in `(-pi, pi]`.
    pub fn distance(&self, other: &Rotation2d) -> f64 {
        self.inverse().rotate_by(other).radians()
    }

    // ---- MIRRORING ----

    /// Mirror about the x axis, negating the heading.
    pub fn mirror(&self) -> Rotation2d {
        self.inverse()
    }

    /// Mirror about a vertical line, so the heading `a` becomes `pi - a`.
    pub fn mirror_about_x(&self) -> Rotation2d {
        let trig = self.trig();
        Rotation2d::from_trig(-trig.cos, trig.sin)
    }

    /// Mirror about a horizontal line, so the heading `a` becomes `-a`.
    pub fn mirror_about_y(&self) -> Rotation2d {
        let trig = self.trig();
        Rotation2d::from_trig(trig.cos, -trig.sin)
    }

    // ---- CACHE ----

    fn trig(&self) -> Trig {
        match &self.repr {
            Repr::Trig { trig, .. } => *trig,
            Repr::Radians { radians, trig } => fill(trig, || {
                let (sin, cos) = radians.sin_cos();
                Trig { cos, sin }
            }),
        }
    }

    fn cached_trig(&self) -> Option<Trig> {
        match &self.repr {
            Repr::Trig { trig, .. } => Some(*trig),
            Repr::Radians { trig, .. } => trig.get().copied(),
        }
    }

    fn cached_radians(&self) -> Option<f64> {
        match &self.repr {
            Repr::Radians { radians, .. } => Some(*radians),
            Repr::Trig { radians, .. } => radians.get().copied(),
        }
    }
}

impl Trig {
    fn normalized(self) -> Trig {
        let magnitude = self.cos.hypot(self.sin);

        if magnitude > EPSILON {
            Trig {
                cos: self.cos / magnitude,
                sin: self.sin / magnitude,
            }
        } else {
            Trig { cos: 1.0, sin: 0.0 }
        }
    }
}

impl Default for Rotation2d {
    fn default() -> Self {
        Self::identity()
    }
}

impl Clone for Rotation2d {
    fn clone(&self) -> Self {
        let repr = match &self.repr {
            Repr::Radians { radians, trig } => Repr::Radians {
                radians: *radians,
                trig: copy_cell(trig),
            },
            Repr::Trig { trig, radians } => Repr::Trig {
                trig: *trig,
                radians: copy_cell(radians),
            },
        };

        Self { repr }
    }
}

impl PartialEq for Rotation2d {
    fn eq(&self, other: &Self) -> bool {
        self.distance(other).abs() < EPSILON
    }
}

impl fmt::Debug for Rotation2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trig = self.cached_trig();

        f.debug_struct("Rotation2d")
            .field("radians", &self.cached_radians())
            .field("cos", &trig.map(|t| t.cos))
            .field("sin", &trig.map(|t| t.sin))
            .finish()
    }
}

impl fmt::Display for Rotation2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3} deg)", self.degrees())
    }
}

impl Csv for Rotation2d {
    fn to_csv(&self) -> String {
        format!("{:.3}", self.degrees())
    }
}

impl Interpolate for Rotation2d {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Rotation2d::interpolate(self, other, t)
    }
}

impl Distance for Rotation2d {
    fn distance(&self, other: &Self) -> f64 {
        Rotation2d::distance(self, other)
    }
}

impl<'a> Add<&'a Rotation2d> for &Rotation2d {
    type Output = Rotation2d;

    fn add(self, other: &'a Rotation2d) -> Rotation2d {
        self.rotate_by(other)
    }
}

impl Add for Rotation2d {
    type Output = Rotation2d;

    fn add(self, other: Rotation2d) -> Rotation2d {
        self.rotate_by(&other)
    }
}

impl<'a> Sub<&'a Rotation2d> for &Rotation2d {
    type Output = Rotation2d;

    fn sub(self, other: &'a Rotation2d) -> Rotation2d {
        self.minus(other)
    }
}

impl Sub for Rotation2d {
    type Output = Rotation2d;

    fn sub(self, other: Rotation2d) -> Rotation2d {
        self.minus(&other)
    }
}

impl Neg for &Rotation2d {
    type Output = Rotation2d;

    fn neg(self) -> Rotation2d {
        self.inverse()
    }
}

impl Neg for Rotation2d {
    type Output = Rotation2d;

    fn neg(self) -> Rotation2d {
        self.inverse()
    }
}

impl From<Rotation2d> for SerdeRotation {
    fn from(rotation: Rotation2d) -> Self {
        Self {
            radians: rotation.radians(),
        }
    }
}

impl From<SerdeRotation> for Rotation2d {
    fn from(rotation: SerdeRotation) -> Self {
        Rotation2d::with_radians(rotation.radians, false)
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Read a cache cell, computing and storing the value if it is empty.
///
/// Racing fills compute the same value, so whichever wins the cell is
/// indistinguishable from the one returned here.
fn fill<T: Copy>(cell: &OnceCell<T>, compute: impl FnOnce() -> T) -> T {
    match cell.get() {
        Some(value) => *value,
        None => {
            let value = compute();
            cell.init_once(|| value);
            value
        }
    }
}

fn copy_cell<T: Copy>(cell: &OnceCell<T>) -> OnceCell<T> {
    let copy = OnceCell::uninit();
    if let Some(value) = cell.get() {
        let value = *value;
        copy.init_once(|| value);
    }
    copy
}

fn radians_parallel(a: f64, b: f64) -> bool {
    let diff = wrap_pi(b - a);
    epsilon_equals(diff, 0.0) || epsilon_equals(diff.abs(), PI)
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_degrees_round_trip() {
        let rot = Rotation2d::from_degrees(90.0);
        assert_abs_diff_eq!(rot.degrees(), 90.0, epsilon = 1e-6);
        assert_abs_diff_eq!(rot.cos(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rot.sin(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_wrapping() {
        assert_abs_diff_eq!(Rotation2d::from_degrees(270.0).degrees(), -90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Rotation2d::from_radians(-PI).radians(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(
            Rotation2d::with_radians(3.0 * PI, false).radians(),
            3.0 * PI,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_from_xy() {
        let rot = Rotation2d::from_xy(2.0, 2.0, true);
        assert_abs_diff_eq!(rot.degrees(), 45.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rot.cos().hypot(rot.sin()), 1.0, epsilon = 1e-12);

        // Too short to normalise falls back to identity
        let tiny = Rotation2d::from_xy(1e-12, -1e-12, true);
        assert_eq!(tiny.cos(), 1.0);
        assert_eq!(tiny.sin(), 0.0);

        // Unnormalised pairs are kept verbatim
        let raw = Rotation2d::from_xy(3.0, 4.0, false);
        assert_eq!(raw.cos(), 3.0);
        assert_eq!(raw.sin(), 4.0);
    }

    #[test]
    fn test_tan() {
        assert_abs_diff_eq!(Rotation2d::from_degrees(45.0).tan(), 1.0, epsilon = 1e-9);
        assert_eq!(Rotation2d::half_pi().tan(), std::f64::INFINITY);
        assert_eq!(Rotation2d::from_degrees(-90.0).tan(), std::f64::NEG_INFINITY);
    }

    #[test]
    fn test_lazy_fill() {
        let from_angle = Rotation2d::from_radians(0.5);
        assert!(from_angle.cached_trig().is_none());
        assert_abs_diff_eq!(from_angle.sin(), 0.5f64.sin(), epsilon = 1e-15);
        assert!(from_angle.cached_trig().is_some());

        let from_trig = Rotation2d::from_xy(0.0, 1.0, false);
        assert!(from_trig.cached_radians().is_none());
        assert_abs_diff_eq!(from_trig.radians(), FRAC_PI_2, epsilon = 1e-15);
        assert_eq!(from_trig.cached_radians(), Some(FRAC_PI_2));
    }

    #[test]
    fn test_clone_keeps_cache() {
        let rot = Rotation2d::from_radians(1.0);
        let _ = rot.cos();

        let copy = rot.clone();
        assert_eq!(copy.cached_radians(), Some(1.0));
        assert_eq!(copy.cached_trig(), rot.cached_trig());
    }

    #[test]
    fn test_rotate_by() {
        // Trig path
        let a = Rotation2d::from_xy(1.0, 1.0, true);
        let b = Rotation2d::from_xy(0.0, 1.0, true);
        assert_abs_diff_eq!(a.rotate_by(&b).degrees(), 135.0, epsilon = 1e-9);

        // Radians path, including wrapping
        let c = Rotation2d::from_degrees(170.0);
        let d = Rotation2d::from_degrees(20.0);
        assert_abs_diff_eq!(c.rotate_by(&d).degrees(), -170.0, epsilon = 1e-9);

        // Mixed
        assert_abs_diff_eq!((&a + &c).degrees(), -145.0, epsilon = 1e-9);
    }

    #[test]
    fn test_composition_independent_of_cache() {
        let angles = [0.3, -2.5, 3.0, 1.2, -0.01];

        for a in angles.iter() {
            for b in angles.iter() {
                let by_angle = Rotation2d::from_radians(*a).rotate_by(&Rotation2d::from_radians(*b));
                let by_trig = Rotation2d::from_xy(a.cos(), a.sin(), false)
                    .rotate_by(&Rotation2d::from_xy(b.cos(), b.sin(), false));

                // Fill the trig cache of one operand first
                let warm = Rotation2d::from_radians(*a);
                let _ = warm.sin();
                let mixed = warm.rotate_by(&Rotation2d::from_xy(b.cos(), b.sin(), false));

                assert_eq!(by_angle, by_trig);
                assert_eq!(by_angle, mixed);
            }
        }
    }

    #[test]
    fn test_inverse_flip_normal() {
        for rot in vec![Rotation2d::from_degrees(30.0), Rotation2d::from_xy(3f64.sqrt(), 1.0, true)] {
            assert_abs_diff_eq!(rot.inverse().degrees(), -30.0, epsilon = 1e-9);
            assert_abs_diff_eq!((-&rot).degrees(), -30.0, epsilon = 1e-9);
            assert_abs_diff_eq!(rot.flip().degrees(), -150.0, epsilon = 1e-9);
            assert_abs_diff_eq!(rot.normal().degrees(), -60.0, epsilon = 1e-9);
            assert_eq!(rot.rotate_by(&rot.inverse()), Rotation2d::identity());
        }
    }

    #[test]
    fn test_minus_and_times() {
        let a = Rotation2d::from_degrees(10.0);
        let b = Rotation2d::from_degrees(40.0);

        assert_abs_diff_eq!((&a - &b).degrees(), -30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.times(0.5).degrees(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_is_parallel() {
        let a = Rotation2d::from_degrees(10.0);
        let b = Rotation2d::from_degrees(190.0);
        let c = Rotation2d::from_degrees(11.0);

        assert!(a.is_parallel(&b));
        assert!(!a.is_parallel(&c));

        // Same answers through the trig path
        let at = Rotation2d::from_xy(a.cos(), a.sin(), false);
        let bt = Rotation2d::from_xy(b.cos(), b.sin(), false);
        let ct = Rotation2d::from_xy(c.cos(), c.sin(), false);
        assert!(at.is_parallel(&bt));
        assert!(!at.is_parallel(&ct));

        // Wrap around at +-pi
        assert!(Rotation2d::with_radians(PI, false).is_parallel(&Rotation2d::with_radians(-PI, false)));
        assert!(Rotation2d::pi().is_parallel(&Rotation2d::identity()));
    }

    #[test]
    fn test_is_parallel_tolerance_matches_across_paths() {
        let base = 45f64.to_radians();

        for delta in [0.8e-9, 1.2e-9, -1.2e-9, PI + 0.8e-9, PI + 1.2e-9].iter() {
            let by_angle = Rotation2d::from_radians(base)
                .is_parallel(&Rotation2d::from_radians(base + delta));

            let by_trig = Rotation2d::from_xy(base.cos(), base.sin(), false).is_parallel(
                &Rotation2d::from_xy((base + delta).cos(), (base + delta).sin(), false),
            );

            assert_eq!(by_angle, by_trig, "paths disagree for delta = {}", delta);
        }

        let a = Rotation2d::from_radians(base);
        assert!(a.is_parallel(&Rotation2d::from_radians(base + 0.8e-9)));
        assert!(!a.is_parallel(&Rotation2d::from_radians(base + 1.2e-9)));
    }

    #[test]
    fn test_interpolate() {
        let a = Rotation2d::from_degrees(170.0);
        let b = Rotation2d::from_degrees(-170.0);

        // Goes the short way round, through 180
        assert_abs_diff_eq!(a.interpolate(&b, 0.5).degrees().abs(), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(a.interpolate(&b, 0.25).degrees(), 175.0, epsilon = 1e-9);

        assert_eq!(a.interpolate(&b, 0.0).radians(), a.radians());
        assert_eq!(a.interpolate(&b, -1.0).radians(), a.radians());
        assert_eq!(a.interpolate(&b, 1.0).radians(), b.radians());
    }

    #[test]
    fn test_equality() {
        assert_eq!(Rotation2d::from_degrees(360.0), Rotation2d::identity());
        assert_ne!(Rotation2d::from_degrees(1.0), Rotation2d::identity());
        assert_abs_diff_eq!(
            Rotation2d::from_degrees(10.0).distance(&Rotation2d::from_degrees(-20.0)),
            -30f64.to_radians(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_mirror_and_pole() {
        let rot = Rotation2d::from_degrees(30.0);

        assert_abs_diff_eq!(rot.mirror().degrees(), -30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rot.mirror_about_x().degrees(), 150.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rot.mirror_about_y().degrees(), -30.0, epsilon = 1e-9);

        assert_eq!(rot.nearest_pole(), Rotation2d::identity());
        assert_eq!(Rotation2d::from_degrees(100.0).nearest_pole(), Rotation2d::half_pi());
        assert_eq!(Rotation2d::from_degrees(-170.0).nearest_pole(), Rotation2d::pi());
    }

    #[test]
    fn test_render() {
        let rot = Rotation2d::from_degrees(90.0);
        assert_eq!(rot.to_string(), "(90.000 deg)");
        assert_eq!(rot.to_csv(), "90.000");
    }

    #[test]
    fn test_serde() {
        let rot = Rotation2d::from_degrees(-45.0);
        let json = serde_json::to_string(&rot).unwrap();
        let back: Rotation2d = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rot);

        let parsed: Rotation2d = serde_json::from_str("{\"radians\": 1.5}").unwrap();
        assert_eq!(parsed.radians(), 1.5);
    }

    #[test]
    fn test_concurrent_fill() {
        let rot = Arc::new(Rotation2d::from_xy(-1.0, 1.0, true));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let rot = rot.clone();
                thread::spawn(move || (rot.radians(), rot.cos(), rot.sin()))
            })
            .collect();

        for h in handles {
            let (radians, cos, sin) = h.join().unwrap();
            assert_abs_diff_eq!(radians, 0.75 * PI, epsilon = 1e-12);
            assert_eq!(cos, rot.cos());
            assert_eq!(sin, rot.sin());
        }
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Rotation2d>();
    }
}
