//! Motion pipeline stages: velocity profiling, pathing, and kinematics.
//!
//! Each calculation tick runs the chain
//! [`MoveProfile`] → [`MovePath`] → [`KinematicParams`]: elapsed time becomes
//! a distance along the path, the distance becomes path-space coordinates,
//! and the coordinates become per-axis step targets for the pulse generator.

mod kinematics;
mod pather;
mod planner;
mod profiler;

pub use kinematics::{KinematicModel, KinematicParams};
pub use pather::{LinearMove, MovePath};
pub use planner::{plan_linear, plan_named_move, MovePlan};
pub use profiler::MoveProfile;

use crate::pulse::MAX_AXES;

/// A path-space or step-space coordinate vector, one entry per axis.
pub type Coords = heapless::Vec<f32, MAX_AXES>;
