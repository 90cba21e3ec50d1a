//! # pulse-motion
//!
//! Interrupt-driven multi-axis stepper motion pipeline with sub-tick pulse
//! smoothing and embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Interrupt-cascade scheduling**: one oversampled pulse timer fans out
//!   to calculation and staging lanes below its priority, no OS required
//! - **Sub-tick pulse smoothing**: step edges spread across each window at
//!   the instant the continuous target crosses its half-step boundary
//! - **S-curve profiles**: cosine-smoothed jerk, evaluated from a lookup
//!   table so the math stays interrupt-safe
//! - **Kinematic transforms**: passthrough, per-axis scaling, and 3×3
//!   spatial correction between path space and step space
//! - **embedded-hal 1.0**: axes own `OutputPin` STEP/DIR/EN pins
//! - **no_std compatible**: the whole pipeline runs without the standard
//!   library
//! - **Configuration-driven**: axes and moves defined in TOML files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pulse_motion::{Axis, MotionCore, plan_named_move};
//!
//! // Load configuration from TOML
//! let config = pulse_motion::load_config("motion.toml")?;
//!
//! // Wire the core to the platform pulse timer and the axis pins
//! let mut core = MotionCore::new(pulse_timer, &config.motion)?;
//! core.add_axis(Axis::from_config(config.axis("x").unwrap(), step, dir, en))?;
//!
//! // Arm a named move and start the timer; the timer ISR drives the rest
//! core.begin_move(plan_named_move(&config, "home", &[0.0])?)?;
//! core.enable();
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod axis;
pub mod config;
pub mod control;
pub mod error;
pub mod motion;
pub mod pulse;
pub mod sched;
pub mod trig;

// Re-exports for ergonomic API
pub use axis::{Axis, AxisControl, Direction};
pub use config::{validate_config, AxisConfig, MotionConfig, MoveConfig, SystemConfig};
pub use control::MotionCore;
pub use error::{Error, Result};
pub use motion::{
    plan_linear, plan_named_move, Coords, KinematicModel, KinematicParams, LinearMove,
    MovePath, MovePlan, MoveProfile,
};
pub use pulse::{Pulser, SmoothingRatio, MAX_AXES};
pub use sched::{IrqHandle, Priority, PulseTimer, SoftIrqController};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Millimeters, MillimetersPerSec, MillimetersPerSecSquared, StepsPerMm};
