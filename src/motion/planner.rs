//! Move planning: configuration-space targets to an executable plan.
//!
//! Promotes the S-curve constants the motion core needs (`accel_time`,
//! `ω`, `A/2`, `A/ω²`, phase boundaries) from per-move arithmetic into a
//! [`MovePlan`] the orchestrator can arm directly.

use heapless::Vec;
use libm::sqrtf;

use crate::config::{MillimetersPerSec, MillimetersPerSecSquared, SystemConfig};
use crate::error::{ConfigError, Error, MotionError, Result};
use crate::pulse::MAX_AXES;

use super::{Coords, KinematicModel, KinematicParams, LinearMove, MovePath, MoveProfile};

/// Everything the orchestrator needs to execute one move.
#[derive(Debug, Clone)]
pub struct MovePlan {
    /// Time-to-distance velocity profile, in path-mm and ms.
    pub profile: MoveProfile,

    /// Distance-to-coordinates path geometry, in mm.
    pub path: MovePath,

    /// Coordinates-to-step-targets transform.
    pub kinematics: KinematicParams,
}

impl MovePlan {
    /// Number of axes this plan drives.
    pub fn axis_count(&self) -> usize {
        self.kinematics.axis_count()
    }
}

/// Plan a straight-line move between two absolute positions.
///
/// `start_mm` and `target_mm` are path-space positions per axis;
/// `steps_per_mm` carries each axis's scale into the kinematic stage.
///
/// # Errors
///
/// - [`ConfigError::TooManyAxes`] past the 16-axis queue capacity.
/// - [`MotionError::AxisCountMismatch`] for ragged input vectors.
/// - [`MotionError::ZeroLengthMove`] when start equals target.
/// - [`MotionError::MoveTooShort`] when the distance cannot contain both
///   S-curve ramps.
pub fn plan_linear(
    start_mm: &[f32],
    target_mm: &[f32],
    steps_per_mm: &[f32],
    velocity: MillimetersPerSec,
    acceleration: MillimetersPerSecSquared,
) -> Result<MovePlan> {
    let n = start_mm.len();
    if n > MAX_AXES {
        return Err(Error::Config(ConfigError::TooManyAxes(n)));
    }
    if target_mm.len() != n || steps_per_mm.len() != n {
        return Err(Error::Motion(MotionError::AxisCountMismatch {
            expected: n,
            actual: target_mm.len().min(steps_per_mm.len()),
        }));
    }

    let mut path_len_sq = 0.0_f32;
    for i in 0..n {
        let delta = target_mm[i] - start_mm[i];
        path_len_sq += delta * delta;
    }
    let path_len = sqrtf(path_len_sq);
    if path_len <= 0.0 {
        return Err(Error::Motion(MotionError::ZeroLengthMove));
    }

    let mut start: Coords = Vec::new();
    let mut unit: Coords = Vec::new();
    let mut factors: Vec<f32, MAX_AXES> = Vec::new();
    for i in 0..n {
        let _ = start.push(start_mm[i]);
        let _ = unit.push((target_mm[i] - start_mm[i]) / path_len);
        let _ = factors.push(steps_per_mm[i]);
    }

    let profile = MoveProfile::s_curve(path_len, velocity.per_ms(), acceleration.per_ms2())?;
    let path = MovePath::Linear(LinearMove::new(start, unit)?);
    let kinematics = KinematicParams::new(n, KinematicModel::AxisScale(factors))?;

    Ok(MovePlan {
        profile,
        path,
        kinematics,
    })
}

/// Plan a named move from configuration.
///
/// `start_mm` is the current path-space position per configured axis, in
/// declaration order. Velocity and acceleration fall back to the `[motion]`
/// defaults when the move does not override them.
pub fn plan_named_move(
    config: &SystemConfig,
    name: &str,
    start_mm: &[f32],
) -> Result<MovePlan> {
    let mv = config.move_named(name).ok_or_else(|| {
        Error::Config(ConfigError::MoveNotFound(
            heapless::String::try_from(name).unwrap_or_default(),
        ))
    })?;

    if start_mm.len() != config.axis_count() {
        return Err(Error::Config(ConfigError::AxisCountMismatch {
            axes: config.axis_count(),
            targets: start_mm.len(),
        }));
    }
    if mv.target_mm.len() != config.axis_count() {
        return Err(Error::Config(ConfigError::AxisCountMismatch {
            axes: config.axis_count(),
            targets: mv.target_mm.len(),
        }));
    }

    let mut target_mm: Vec<f32, MAX_AXES> = Vec::new();
    let mut steps_per_mm: Vec<f32, MAX_AXES> = Vec::new();
    for (i, (_, axis)) in config.axes.iter().enumerate() {
        let _ = target_mm.push(mv.target_mm[i].value());
        let _ = steps_per_mm.push(axis.steps_per_mm.value());
    }

    plan_linear(
        start_mm,
        &target_mm,
        &steps_per_mm,
        mv.velocity_or(config.motion.default_velocity),
        mv.acceleration_or(config.motion.default_acceleration),
    )
}
