//! Lookup-table trigonometry for interrupt-context math.
//!
//! One turn is divided into 4096 entries (a 12-bit angle index), the
//! resolution the motion profiler's `omega_scaled` coefficient is derived
//! against. The tables are generated at build time (see `build.rs`), so a
//! lookup is a masked array index: no branches, no floating-point trig.

include!(concat!(env!("OUT_DIR"), "/trig_lut.rs"));

/// Number of table entries covering one full turn.
pub const ANGLE_STEPS: usize = 4096;

/// Mask keeping any `u16` angle index inside the table.
const INDEX_MASK: u16 = (ANGLE_STEPS - 1) as u16;

/// Sine of `angle * 2π / 4096`.
#[inline(always)]
pub fn sin(angle: u16) -> f32 {
    SINE_LUT[(angle & INDEX_MASK) as usize]
}

/// Cosine of `angle * 2π / 4096`.
#[inline(always)]
pub fn cos(angle: u16) -> f32 {
    COSINE_LUT[(angle & INDEX_MASK) as usize]
}

/// Cosine of `angle * 2π / 4096`, minus one.
///
/// Pre-baked into its own table so the profiler's position law avoids a
/// subtraction per call.
#[inline(always)]
pub fn cos_minus_one(angle: u16) -> f32 {
    COS_MINUS_ONE_LUT[(angle & INDEX_MASK) as usize]
}
