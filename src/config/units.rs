//! Unit types for physical quantities.
//!
//! Provides type-safe representations of distances, velocities, accelerations,
//! and steps-per-mm scale factors to prevent unit confusion at compile time.
//! The motion pipeline itself works in path-millimeters and milliseconds;
//! these types live at the configuration boundary.

use core::ops::{Add, Mul, Sub};

use serde::Deserialize;

/// Linear position or distance in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f32);

impl Millimeters {
    /// Create a new Millimeters value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Add for Millimeters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Millimeters {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Linear velocity in millimeters per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct MillimetersPerSec(pub f32);

impl MillimetersPerSec {
    /// Create a new MillimetersPerSec value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to millimeters per millisecond, the profiler's time base.
    #[inline]
    pub fn per_ms(self) -> f32 {
        self.0 * 1e-3
    }
}

impl Mul<f32> for MillimetersPerSec {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self(self.0 * rhs)
    }
}

/// Linear acceleration in millimeters per second squared.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct MillimetersPerSecSquared(pub f32);

impl MillimetersPerSecSquared {
    /// Create a new MillimetersPerSecSquared value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to millimeters per millisecond squared, the profiler's time base.
    #[inline]
    pub fn per_ms2(self) -> f32 {
        self.0 * 1e-6
    }
}

impl Mul<f32> for MillimetersPerSecSquared {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self(self.0 * rhs)
    }
}

/// Steps of axis travel per millimeter of path-space travel.
///
/// Carries the leadscrew/belt reduction and microstepping into the kinematic
/// stage; validated positive by [`validate_config`](super::validate_config).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct StepsPerMm(pub f32);

impl StepsPerMm {
    /// Create a new StepsPerMm value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert a path-space position in mm to axis steps.
    #[inline]
    pub fn to_steps(self, mm: Millimeters) -> f32 {
        mm.0 * self.0
    }

    /// Convert axis steps back to path-space millimeters.
    #[inline]
    pub fn to_mm(self, steps: f32) -> Millimeters {
        Millimeters(steps / self.0)
    }
}

impl Default for StepsPerMm {
    fn default() -> Self {
        Self(1.0)
    }
}
