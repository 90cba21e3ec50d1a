//! Error types for the pulse-motion library.
//!
//! Provides unified error handling across configuration, move planning, and
//! scheduler setup. The real-time paths (pulse service, axis edge functions,
//! the deferred interrupts) never return errors; everything fallible is
//! resolved before a move is armed.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all pulse-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Move planning or pathing error
    Motion(MotionError),
    /// Deferred-interrupt registry error
    Sched(SchedError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid smoothing ratio (must be 2, 4, or 8)
    InvalidSmoothingRatio(u8),
    /// Axis name not found in configuration
    AxisNotFound(heapless::String<32>),
    /// Move name not found in configuration
    MoveNotFound(heapless::String<32>),
    /// Invalid steps-per-mm value (must be > 0)
    InvalidStepsPerMm(f32),
    /// Invalid velocity (must be > 0)
    InvalidVelocity(f32),
    /// Invalid acceleration (must be > 0)
    InvalidAcceleration(f32),
    /// Timer clock and divider pair yields no usable tick rate
    InvalidTimerDivision {
        /// Timer input clock in Hz
        clock_hz: u32,
        /// Prescaler register value
        prescaler: u16,
        /// Auto-reload register value
        reload: u16,
    },
    /// A move's target list does not match the configured axis count
    AxisCountMismatch {
        /// Number of configured axes
        axes: usize,
        /// Number of targets in the move
        targets: usize,
    },
    /// More axes configured than the pulse queues can address
    TooManyAxes(usize),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Move planning and pathing errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionError {
    /// Move type has no implemented geometry (arc moves)
    UnsupportedMoveType,
    /// Commanded distance cannot contain both S-curve ramps
    MoveTooShort {
        /// Commanded path distance
        distance: f32,
        /// Minimum distance for the requested velocity and acceleration
        minimum: f32,
    },
    /// Start and target positions are identical
    ZeroLengthMove,
    /// Coordinate vector length does not match the axis count
    AxisCountMismatch {
        /// Expected axis count
        expected: usize,
        /// Actual vector length
        actual: usize,
    },
}

/// Deferred-interrupt registry errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SchedError {
    /// All deferred-interrupt channels are already registered
    ChannelsExhausted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motion(e) => write!(f, "Motion error: {}", e),
            Error::Sched(e) => write!(f, "Scheduler error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidSmoothingRatio(v) => {
                write!(f, "Invalid smoothing ratio: {}. Valid values: 2, 4, 8", v)
            }
            ConfigError::AxisNotFound(name) => write!(f, "Axis '{}' not found", name),
            ConfigError::MoveNotFound(name) => write!(f, "Move '{}' not found", name),
            ConfigError::InvalidStepsPerMm(v) => {
                write!(f, "Invalid steps per mm: {}. Must be > 0", v)
            }
            ConfigError::InvalidVelocity(v) => write!(f, "Invalid velocity: {}. Must be > 0", v),
            ConfigError::InvalidAcceleration(v) => {
                write!(f, "Invalid acceleration: {}. Must be > 0", v)
            }
            ConfigError::InvalidTimerDivision {
                clock_hz,
                prescaler,
                reload,
            } => write!(
                f,
                "Timer clock {} Hz with prescaler {} and reload {} yields no usable tick rate",
                clock_hz, prescaler, reload
            ),
            ConfigError::AxisCountMismatch { axes, targets } => write!(
                f,
                "Move has {} targets but {} axes are configured",
                targets, axes
            ),
            ConfigError::TooManyAxes(n) => {
                write!(f, "{} axes configured, pulse queues address at most 16", n)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::UnsupportedMoveType => write!(f, "Unsupported move type"),
            MotionError::MoveTooShort { distance, minimum } => {
                write!(
                    f,
                    "Move of {} too short for S-curve ramps, minimum is {}",
                    distance, minimum
                )
            }
            MotionError::ZeroLengthMove => write!(f, "Start and target positions are identical"),
            MotionError::AxisCountMismatch { expected, actual } => {
                write!(f, "Expected {} coordinates, got {}", expected, actual)
            }
        }
    }
}

impl fmt::Display for SchedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedError::ChannelsExhausted => {
                write!(f, "No free deferred-interrupt channels")
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Error::Motion(e)
    }
}

impl From<SchedError> for Error {
    fn from(e: SchedError) -> Self {
        Error::Sched(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotionError {}

#[cfg(feature = "std")]
impl std::error::Error for SchedError {}
