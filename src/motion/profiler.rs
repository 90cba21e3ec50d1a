//! Three-phase S-curve velocity profile.
//!
//! Maps elapsed time within a move to distance along the path. The phase is
//! derived from elapsed time against two precomputed boundaries on every
//! call; there is no phase state to get out of sync.

use core::f32::consts::PI;

use crate::error::MotionError;
use crate::trig;

/// Number of trig-table entries per turn, baked into `omega_scaled`.
const LUT_TURN: f32 = trig::ANGLE_STEPS as f32;

/// A planned move's velocity profile plus its in-flight accumulators.
///
/// Distances are in path units (the planner uses millimeters), times in
/// milliseconds. One instance exists per in-flight move and is owned by the
/// caller, so independent moves never share state.
#[derive(Debug, Clone)]
pub struct MoveProfile {
    /// Total distance along the path.
    total_distance: f32,

    /// Total duration of the move in ms.
    total_time: f32,

    /// Elapsed time at which acceleration completes.
    accel_finish_t: f32,

    /// Elapsed time at which deceleration begins.
    decel_start_t: f32,

    /// Cruise velocity in path units per ms.
    cruise_velocity: f32,

    /// Half the average ramp acceleration, `A / 2`.
    a_over_2: f32,

    /// Jerk-smoothing coefficient, `A / ω²`.
    a_over_w2: f32,

    /// `ω` rescaled so `omega_scaled * t` indexes the 4096-entry trig table.
    omega_scaled: f32,

    /// Elapsed time accumulator, advanced every calculation tick.
    elapsed_time: f32,

    /// Distance accumulator, only written by the cruise phase.
    path_distance: f32,
}

impl MoveProfile {
    /// Plan a symmetric S-curve profile.
    ///
    /// `cruise_velocity` is in path units per ms, `acceleration` is the
    /// average ramp acceleration in path units per ms². The ramp follows a
    /// cosine-smoothed jerk law, so velocity is C¹ at both phase boundaries.
    ///
    /// # Errors
    ///
    /// - [`MotionError::ZeroLengthMove`] if `total_distance` is not positive.
    /// - [`MotionError::MoveTooShort`] if the distance cannot contain both
    ///   ramps at the requested velocity and acceleration.
    pub fn s_curve(
        total_distance: f32,
        cruise_velocity: f32,
        acceleration: f32,
    ) -> Result<Self, MotionError> {
        if total_distance <= 0.0 {
            return Err(MotionError::ZeroLengthMove);
        }

        let accel_time = cruise_velocity / acceleration;
        let omega = 2.0 * PI / accel_time;
        let omega_scaled = LUT_TURN / accel_time;
        let a_over_2 = acceleration / 2.0;
        let a_over_w2 = acceleration / (omega * omega);

        // The cosine term completes a full turn over the ramp, so ramp
        // distance reduces to the quadratic term alone.
        let accel_distance = a_over_2 * accel_time * accel_time;
        let minimum = 2.0 * accel_distance;
        if minimum > total_distance {
            return Err(MotionError::MoveTooShort {
                distance: total_distance,
                minimum,
            });
        }

        let cruise_time = (total_distance - minimum) / cruise_velocity;
        let total_time = 2.0 * accel_time + cruise_time;

        Ok(Self {
            total_distance,
            total_time,
            accel_finish_t: accel_time,
            decel_start_t: total_time - accel_time,
            cruise_velocity,
            a_over_2,
            a_over_w2,
            omega_scaled,
            elapsed_time: 0.0,
            path_distance: 0.0,
        })
    }

    /// Advance elapsed time by one tick and return the distance along the
    /// path.
    ///
    /// The ramp phases are evaluated in closed form (integration error would
    /// accumulate); the cruise phase integrates, which is exact up to
    /// quantization for a constant velocity.
    pub fn distance_along_path(&mut self, tick_inc_ms: f32) -> f32 {
        self.elapsed_time += tick_inc_ms;
        let t = self.elapsed_time;

        if t < self.accel_finish_t {
            // Accelerating
            self.path_distance = self.a_over_2 * t * t
                + self.a_over_w2 * trig::cos_minus_one((self.omega_scaled * t) as u16);
        } else if t > self.decel_start_t {
            // Decelerating: run the acceleration law backward from the end of
            // the move so the endpoint lands exactly on the total distance.
            let negative_t = self.total_time - t;
            self.path_distance = self.total_distance
                - self.a_over_2 * negative_t * negative_t
                - self.a_over_w2
                    * trig::cos_minus_one((self.omega_scaled * negative_t) as u16);
        } else {
            // Cruising
            self.path_distance += tick_inc_ms * self.cruise_velocity;
        }

        self.path_distance
    }

    /// Whether elapsed time has passed the end of the move.
    #[inline]
    pub fn move_completed(&self) -> bool {
        self.elapsed_time > self.total_time
    }

    /// Total distance along the path.
    #[inline]
    pub fn total_distance(&self) -> f32 {
        self.total_distance
    }

    /// Total duration of the move in ms.
    #[inline]
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Elapsed time within the move in ms.
    #[inline]
    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    /// Distance along the path as of the last tick.
    #[inline]
    pub fn path_distance(&self) -> f32 {
        self.path_distance
    }
}
