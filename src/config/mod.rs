//! Configuration module for pulse-motion.
//!
//! Provides types for loading and validating axis, motion-engine, and move
//! configurations from TOML files (with `std` feature) or pre-parsed data.

mod axis;
#[cfg(feature = "std")]
mod loader;
mod motion;
mod moves;
mod system;
pub mod units;
mod validation;

pub use axis::AxisConfig;
pub use motion::MotionConfig;
pub use moves::MoveConfig;
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Millimeters, MillimetersPerSec, MillimetersPerSecSquared, StepsPerMm};
