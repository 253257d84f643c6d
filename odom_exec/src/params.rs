//! # Odometry Executable Parameters

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use geom::{Pose2d, Rotation2d, Twist2d};
use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct OdomExecParams {
    /// Pose the trajectory starts from
    pub start: StartParams,

    /// Fractions along the start to end geodesic at which to sample poses
    #[serde(default)]
    pub interp_fractions: Vec<f64>,

    /// Body frame motions to integrate, in order
    pub twists: Vec<TwistParams>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StartParams {
    pub x: f64,
    pub y: f64,
    pub heading_deg: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TwistParams {
    pub dx: f64,
    pub dy: f64,
    pub dtheta_deg: f64,
}

// ------------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// ------------------------------------------------------------------------------------------------

impl StartParams {
    pub fn to_pose(&self) -> Pose2d {
        Pose2d::from_xy(self.x, self.y, Rotation2d::from_degrees(self.heading_deg))
    }
}

impl TwistParams {
    pub fn to_twist(&self) -> Twist2d {
        Twist2d::new(self.dx, self.dy, self.dtheta_deg.to_radians())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse() {
        let params: OdomExecParams = util::params::from_str(
            r#"
            start = { x = 1.0, y = -2.0, heading_deg = 90.0 }

            [[twists]]
            dx = 1.0
            dy = 0.0
            dtheta_deg = 180.0
            "#,
        )
        .unwrap();

        assert!(params.interp_fractions.is_empty());
        assert_eq!(params.twists.len(), 1);
        assert_eq!(
            params.start.to_pose(),
            Pose2d::from_xy(1.0, -2.0, Rotation2d::half_pi())
        );
        assert!(params.twists[0]
            .to_twist()
            .epsilon_equals(&Twist2d::new(1.0, 0.0, std::f64::consts::PI), 1e-12));
    }

    #[test]
    fn test_parse_missing_twists() {
        let result: Result<OdomExecParams, _> =
            util::params::from_str("start = { x = 0.0, y = 0.0, heading_deg = 0.0 }");

        assert!(result.is_err());
    }
}
