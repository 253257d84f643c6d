//! # Odometry Executable
//!
//! Dead reckons a trajectory from a start pose and a list of body frame
//! twists given in `params/odom_exec.toml`. Each pose is logged and archived
//! to `trajectory.csv` in the session archive, and the geodesic between the
//! start and end pose is sampled and reported.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Parameters for the odometry executable.
mod params;

/// Integration of twists into a trajectory.
mod trajectory;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

// External
use color_eyre::{eyre::eyre, eyre::WrapErr, Result};
use geom::{traits, Csv, Pose2d, Twist2d};
use log::{debug, info, warn};

// Internal
use params::OdomExecParams;
use trajectory::Trajectory;
use util::{
    archive::Archiver,
    logger::{logger_init, LevelFilter, LogLevels},
    session::Session,
};

// ------------------------------------------------------------------------------------------------
// MAIN
// ------------------------------------------------------------------------------------------------

fn main() -> Result<()> {
    color_eyre::install()?;

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new("odom_exec", "sessions")
        .wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LogLevels::new(LevelFilter::Debug), &session)
        .wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Odometry Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let params: OdomExecParams = util::params::load("odom_exec.toml")
        .wrap_err("Could not load odom_exec params")?;

    info!("Parameters loaded");

    // ---- INTEGRATION ----

    let start = params.start.to_pose();
    let twists: Vec<Twist2d> = params.twists.iter().map(|t| t.to_twist()).collect();

    info!("Integrating {} twists from {}", twists.len(), start);

    let traj = Trajectory::integrate(start, &twists);

    let mut arch = Archiver::from_path(&session, "trajectory.csv")
        .wrap_err("Failed to create the trajectory archive")?;

    for (record, pose) in traj.records().zip(traj.poses()) {
        debug!("{:3}: {}", record.step, pose.to_csv());

        arch.serialise(record)
            .wrap_err("Failed to archive trajectory pose")?;
    }

    // Check the twists survive the round trip through the pose chain
    for (i, (recovered, twist)) in traj.twists().iter().zip(twists.iter()).enumerate() {
        if !recovered.epsilon_equals(twist, 1e-6) {
            warn!(
                "Twist {} recovered as {}, expected {}",
                i, recovered, twist
            );
        }
    }

    // ---- SUMMARY ----

    let start = traj
        .start()
        .ok_or_else(|| eyre!("Trajectory has no start pose"))?;
    let end = traj
        .end()
        .ok_or_else(|| eyre!("Trajectory has no end pose"))?;

    info!("End pose: {}", end);
    info!("Net motion: {}", end - start);
    info!("Path length: {:.3} m", traj.length());
    info!("Geodesic distance start to end: {:.3} m", start.distance(end));
    info!("Equivalent single twist: {}", Pose2d::log(&end.relative_to(start)));

    let crossing = start.intersection(end);
    if crossing.x.is_finite() {
        info!("Start and end headings cross at {}", crossing);
    } else {
        info!("Start and end headings are parallel");
    }

    if !params.interp_fractions.is_empty() {
        info!("Geodesic samples:");
        for (t, pose) in params
            .interp_fractions
            .iter()
            .zip(traits::sample(start, end, &params.interp_fractions))
        {
            info!("    {:.3}: {}", t, pose.to_csv());
        }
    }

    info!("Trajectory archived to {:?}", session.arch_root.join("trajectory.csv"));

    Ok(())
}
