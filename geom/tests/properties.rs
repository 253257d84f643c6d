//! Property tests for the geometry types.

use geom::{Pose2d, Rotation2d, Translation2d, Twist2d};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// STRATEGIES
// ---------------------------------------------------------------------------

fn pose(max_heading_deg: f64) -> impl Strategy<Value = Pose2d> {
    (-10.0..10.0f64, -10.0..10.0f64, -max_heading_deg..max_heading_deg)
        .prop_map(|(x, y, deg)| Pose2d::from_xy(x, y, Rotation2d::from_degrees(deg)))
}

fn twist() -> impl Strategy<Value = Twist2d> {
    (-10.0..10.0f64, -10.0..10.0f64, -3.0..3.0f64)
        .prop_map(|(dx, dy, dtheta)| Twist2d::new(dx, dy, dtheta))
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

proptest! {
    /// log is the inverse of exp away from a half turn
    #[test]
    fn log_exp_round_trip(t in twist()) {
        let back = Pose2d::log(&Pose2d::exp(&t));
        prop_assert!(back.epsilon_equals(&t, 1e-8), "{} != {}", back, t);
    }

    /// exp is the inverse of log
    #[test]
    fn exp_log_round_trip(p in pose(179.0)) {
        let back = Pose2d::exp(&Pose2d::log(&p));
        prop_assert!(back.epsilon_equals(&p, 1e-8), "{} != {}", back, p);
    }

    /// Composing with the identity changes nothing
    #[test]
    fn identity_law(p in pose(180.0)) {
        prop_assert_eq!(p.transform_by(&Pose2d::identity()), p.clone());
        prop_assert_eq!(Pose2d::identity().transform_by(&p), p);
    }

    /// Composing with the inverse gives the identity
    #[test]
    fn inverse_law(p in pose(180.0)) {
        prop_assert_eq!(p.transform_by(&p.inverse()), Pose2d::identity());
        prop_assert_eq!(p.inverse().transform_by(&p), Pose2d::identity());
    }

    /// Composition is associative
    #[test]
    fn associativity(a in pose(180.0), b in pose(180.0), c in pose(180.0)) {
        let left = a.transform_by(&b).transform_by(&c);
        let right = a.transform_by(&b.transform_by(&c));
        prop_assert!(left.epsilon_equals(&right, 1e-9), "{} != {}", left, right);
    }

    /// Applying the delta between two poses to the first recovers the second
    #[test]
    fn delta_round_trip(a in pose(180.0), b in pose(180.0)) {
        let back = a.plus(&b.minus(&a));
        prop_assert!(back.epsilon_equals(&b, 1e-9), "{} != {}", back, b);
    }

    /// Interpolation returns the exact endpoints at the ends of the range
    #[test]
    fn interpolate_endpoints(a in pose(180.0), b in pose(180.0), under in -5.0..=0.0f64, over in 1.0..5.0f64) {
        let start = a.interpolate(&b, under);
        let end = a.interpolate(&b, over);

        prop_assert_eq!(start.translation().x, a.translation().x);
        prop_assert_eq!(start.translation().y, a.translation().y);
        prop_assert_eq!(start.rotation().radians(), a.rotation().radians());
        prop_assert_eq!(end.translation().x, b.translation().x);
        prop_assert_eq!(end.translation().y, b.translation().y);
        prop_assert_eq!(end.rotation().radians(), b.rotation().radians());
    }

    /// The interpolated midpoint lies halfway along the arc
    #[test]
    fn interpolate_midpoint(a in pose(80.0), b in pose(80.0)) {
        let mid = a.interpolate(&b, 0.5);
        let total = a.distance(&b);

        prop_assert!((a.distance(&mid) - 0.5 * total).abs() < 1e-6);
        prop_assert!((mid.distance(&b) - 0.5 * total).abs() < 1e-6);
    }

    /// Pose distance does not depend on direction
    #[test]
    fn distance_symmetric(a in pose(80.0), b in pose(80.0)) {
        prop_assert!((a.distance(&b) - b.distance(&a)).abs() < 1e-6);
    }

    /// Composing rotations gives the same answer whichever representation
    /// the operands were built from
    #[test]
    fn rotation_cache_independence(a in -10.0..10.0f64, b in -10.0..10.0f64) {
        let by_angle = Rotation2d::from_radians(a).rotate_by(&Rotation2d::from_radians(b));
        let by_trig = Rotation2d::from_xy(a.cos(), a.sin(), false)
            .rotate_by(&Rotation2d::from_xy(b.cos(), b.sin(), false));
        let mixed = Rotation2d::from_radians(a)
            .rotate_by(&Rotation2d::from_xy(b.cos(), b.sin(), false));

        prop_assert_eq!(&by_angle, &by_trig);
        prop_assert_eq!(&by_angle, &mixed);
        prop_assert!((by_angle.cos() - by_trig.cos()).abs() < 1e-9);
        prop_assert!((by_angle.sin() - by_trig.sin()).abs() < 1e-9);
    }

    /// Both representations of a rotation agree once filled
    #[test]
    fn rotation_representations_agree(x in -10.0..10.0f64, y in -10.0..10.0f64) {
        prop_assume!(x.hypot(y) > 1e-3);

        let from_trig = Rotation2d::from_xy(x, y, true);
        let from_angle = Rotation2d::from_radians(from_trig.radians());

        prop_assert!((from_trig.cos() - from_angle.cos()).abs() < 1e-12);
        prop_assert!((from_trig.sin() - from_angle.sin()).abs() < 1e-12);
        prop_assert!(from_trig.radians() > -std::f64::consts::PI);
        prop_assert!(from_trig.radians() <= std::f64::consts::PI);
    }

    /// Rotating a vector preserves its length
    #[test]
    fn rotation_preserves_norm(x in -10.0..10.0f64, y in -10.0..10.0f64, deg in -360.0..360.0f64) {
        let t = Translation2d::new(x, y);
        let rotated = t.rotate_by(&Rotation2d::from_degrees(deg));

        prop_assert!((t.norm() - rotated.norm()).abs() < 1e-9);
    }
}
