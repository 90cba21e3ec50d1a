//! Motion engine configuration from TOML.

use serde::Deserialize;

use crate::pulse::SmoothingRatio;

use super::units::{MillimetersPerSec, MillimetersPerSecSquared};

/// The `[motion]` section: pulse-timer division and profile defaults.
///
/// The pulse timer runs at the oversampled rate
/// `timer_clock_hz / ((pulse_prescaler + 1) * (pulse_reload + 1))`; the
/// calculation/staging window runs [`SmoothingRatio`] times slower.
#[derive(Debug, Clone, Deserialize)]
pub struct MotionConfig {
    /// Pulse-smoothing oversampling ratio (2, 4, or 8).
    #[serde(default)]
    pub smoothing_ratio: SmoothingRatio,

    /// Input clock of the pulse timer in Hz.
    pub timer_clock_hz: u32,

    /// Pulse timer prescaler register value (divides by `prescaler + 1`).
    pub pulse_prescaler: u16,

    /// Pulse timer auto-reload register value (divides by `reload + 1`).
    pub pulse_reload: u16,

    /// Cruise velocity used when a move does not override it.
    #[serde(rename = "default_velocity_mm_per_sec")]
    pub default_velocity: MillimetersPerSec,

    /// Average ramp acceleration used when a move does not override it.
    #[serde(rename = "default_acceleration_mm_per_sec2")]
    pub default_acceleration: MillimetersPerSecSquared,
}

impl MotionConfig {
    /// Oversampled pulse-service tick rate in Hz.
    pub fn pulse_rate_hz(&self) -> f32 {
        let division = (self.pulse_prescaler as u32 + 1) * (self.pulse_reload as u32 + 1);
        self.timer_clock_hz as f32 / division as f32
    }

    /// Duration of one calculation/staging window in milliseconds.
    ///
    /// This is the tick increment fed to the profiler each calculation
    /// interrupt.
    pub fn window_ms(&self) -> f32 {
        self.smoothing_ratio.value() as f32 / self.pulse_rate_hz() * 1000.0
    }
}
