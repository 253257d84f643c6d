//! # Trajectory
//!
//! Dead reckoning of a pose from a sequence of body frame twists.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use geom::{traits, Pose2d, Twist2d};
use serde::Serialize;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// The poses visited while integrating a sequence of twists.
#[derive(Debug, Clone)]
pub struct Trajectory {
    poses: Vec<Pose2d>,
}

/// One archived row of a trajectory.
#[derive(Debug, Serialize)]
pub struct PoseRecord {
    pub step: usize,
    pub x_m: f64,
    pub y_m: f64,
    pub heading_deg: f64,
}

// ------------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// ------------------------------------------------------------------------------------------------

impl Trajectory {
    /// Integrate `twists` in turn from `start`.
    ///
    /// Each twist is applied in the body frame of the pose reached by the
    /// previous one.
    pub fn integrate(start: Pose2d, twists: &[Twist2d]) -> Self {
        let mut poses = Vec::with_capacity(twists.len() + 1);
        poses.push(start);

        for twist in twists {
            let next = match poses.last() {
                Some(prev) => prev.transform_by(&Pose2d::exp(twist)),
                None => Pose2d::exp(twist),
            };
            poses.push(next);
        }

        Self { poses }
    }

    pub fn poses(&self) -> &[Pose2d] {
        &self.poses
    }

    pub fn start(&self) -> Option<&Pose2d> {
        self.poses.first()
    }

    pub fn end(&self) -> Option<&Pose2d> {
        self.poses.last()
    }

    /// Recover the twist between each pair of consecutive poses.
    pub fn twists(&self) -> Vec<Twist2d> {
        self.poses
            .windows(2)
            .map(|w| Pose2d::log(&w[0].inverse().transform_by(&w[1])))
            .collect()
    }

    /// Arc length of the whole trajectory.
    pub fn length(&self) -> f64 {
        traits::path_length(&self.poses)
    }

    /// Rows for the archive, one per pose.
    pub fn records(&self) -> impl Iterator<Item = PoseRecord> + '_ {
        self.poses.iter().enumerate().map(|(step, pose)| PoseRecord {
            step,
            x_m: pose.translation().x,
            y_m: pose.translation().y,
            heading_deg: pose.rotation().degrees(),
        })
    }
}
