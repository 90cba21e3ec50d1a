//! Sub-tick pulse smoothing and synchronized multi-axis step-edge queuing.
//!
//! The pulse-service routine runs at an oversampled rate: `R` ticks (the
//! smoothing ratio) per calculation window. Step edges computed for a window
//! are not all fired at the window boundary; each is queued at the sub-tick
//! offset that best approximates when the continuous target actually crosses
//! its half-step boundary, spreading multi-axis steps across the window:
//!
//! ```text
//!            pulse ticks:  == [3] ==== [0] ==== [1] ==== [2] ==== [3] ==== [0] ==
//!  calculation + staging:  ===========|=================================|========
//! ```
//!
//! The staging pass computes edges for the *next* window while the pulse
//! ticks of the current one are still firing. The slot counter therefore runs
//! over `2R` slots, split into two R-slot epochs: writers always land in the
//! epoch the drain pointer is not in, which is what lets the lower-priority
//! staging interrupt share the queues with the pulse-service interrupt
//! without a lock.

use core::fmt::Write as _;

use heapless::Vec;
use serde::Deserialize;

use crate::axis::{AxisControl, Direction};
use crate::error::ConfigError;

/// Hard ceiling on simultaneously driven axes, fixed at compile time.
pub const MAX_AXES: usize = 16;

/// Queue slots per edge direction: two epochs of the largest smoothing ratio.
const SLOT_COUNT: usize = 16;

/// Pulse-smoothing oversampling ratio.
///
/// The number of pulse-service ticks per calculation/staging window.
/// Validated at construction to one of the supported powers of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SmoothingRatio {
    /// Two pulse ticks per window.
    X2 = 2,
    /// Four pulse ticks per window.
    X4 = 4,
    /// Eight pulse ticks per window.
    X8 = 8,
}

impl SmoothingRatio {
    /// Create a new SmoothingRatio with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSmoothingRatio` unless the value is 2, 4,
    /// or 8.
    pub fn new(value: u8) -> Result<Self, ConfigError> {
        match value {
            2 => Ok(Self::X2),
            4 => Ok(Self::X4),
            8 => Ok(Self::X8),
            other => Err(ConfigError::InvalidSmoothingRatio(other)),
        }
    }

    /// Get the raw ratio value.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Mask selecting the epoch bit of the slot counter.
    #[inline]
    pub(crate) const fn epoch_mask(self) -> u8 {
        self.value()
    }

    /// Mask wrapping the slot counter over the full `2R` cycle.
    #[inline]
    pub(crate) const fn rollover_mask(self) -> u8 {
        self.value() * 2 - 1
    }

    /// Mask reducing the slot counter to the phase within one window.
    #[inline]
    pub(crate) const fn count_mask(self) -> u8 {
        self.value() - 1
    }

    /// Falling-edge delay giving a 50%-duty step pulse.
    #[inline]
    pub(crate) const fn half(self) -> u8 {
        self.value() / 2
    }

    /// Highest phase value within a window, `R - 1`.
    #[inline]
    pub const fn max_pulse_count(self) -> u8 {
        self.value() - 1
    }
}

impl Default for SmoothingRatio {
    fn default() -> Self {
        Self::X4
    }
}

impl TryFrom<u8> for SmoothingRatio {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for SmoothingRatio {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        SmoothingRatio::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}

/// One queue slot: the axes due for an edge at that slot's tick.
type PulseSlot = Vec<u8, MAX_AXES>;

/// Multi-axis step-edge generator with sub-tick smoothing.
///
/// Single producer, single consumer: [`compute_pulse`](Pulser::compute_pulse)
/// (staging priority) fills future slots,
/// [`service_pulse_timer`](Pulser::service_pulse_timer) (realtime priority)
/// drains the current slot.
/// The epoch offset applied at enqueue time keeps the two from ever touching
/// the same slot, so no lock exists anywhere on this path.
pub struct Pulser {
    ratio: SmoothingRatio,

    /// Rolling slot counter over `0..2R`.
    pulse_counter: u8,

    /// Axes participating in the active move.
    num_axes: usize,

    /// Target positions from the previous calculation tick.
    last_target: [f32; MAX_AXES],

    /// Per-axis upper crossing threshold, `target + 0.5`.
    threshold_plus: [f32; MAX_AXES],

    /// Per-axis lower crossing threshold, `target - 0.5`.
    threshold_minus: [f32; MAX_AXES],

    /// Per-axis target movement over the last calculation tick.
    step_delta: [f32; MAX_AXES],

    rising_edges: [PulseSlot; SLOT_COUNT],
    falling_edges: [PulseSlot; SLOT_COUNT],
}

impl Pulser {
    /// Create a pulser for the given smoothing ratio.
    pub fn new(ratio: SmoothingRatio) -> Self {
        Self {
            ratio,
            pulse_counter: 0,
            num_axes: 0,
            last_target: [0.0; MAX_AXES],
            threshold_plus: [0.0; MAX_AXES],
            threshold_minus: [0.0; MAX_AXES],
            step_delta: [0.0; MAX_AXES],
            rising_edges: core::array::from_fn(|_| Vec::new()),
            falling_edges: core::array::from_fn(|_| Vec::new()),
        }
    }

    /// Get the configured smoothing ratio.
    #[inline]
    pub fn ratio(&self) -> SmoothingRatio {
        self.ratio
    }

    /// Highest phase value returned by
    /// [`service_pulse_timer`](Pulser::service_pulse_timer), used to schedule
    /// staging.
    #[inline]
    pub fn max_pulse_count(&self) -> u8 {
        self.ratio.max_pulse_count()
    }

    /// Seed the previous-target state at the start of a move.
    ///
    /// Must be called while no pulses are in flight. Deltas come out zero, so
    /// the first window after priming stages nothing.
    pub fn prime(&mut self, targets: &[f32]) {
        let n = targets.len().min(MAX_AXES);
        self.num_axes = n;
        for i in 0..n {
            self.last_target[i] = targets[i];
            self.threshold_plus[i] = targets[i] + 0.5;
            self.threshold_minus[i] = targets[i] - 0.5;
            self.step_delta[i] = 0.0;
        }
        for slot in self.rising_edges.iter_mut() {
            slot.clear();
        }
        for slot in self.falling_edges.iter_mut() {
            slot.clear();
        }
    }

    /// First half of the staging computation, run once per calculation tick.
    ///
    /// Derives the crossing thresholds and the per-axis delta from the new
    /// target positions, and records the targets for the next tick.
    pub fn compute_step(&mut self, targets: &[f32]) {
        let n = targets.len().min(MAX_AXES);
        self.num_axes = n;
        for i in 0..n {
            self.threshold_plus[i] = targets[i] + 0.5;
            self.threshold_minus[i] = targets[i] - 0.5;
            self.step_delta[i] = targets[i] - self.last_target[i];
            self.last_target[i] = targets[i];
        }
    }

    /// Second half of the staging computation: decide which axes are due a
    /// step this window and queue their edges.
    ///
    /// The commanded direction follows the sign of the target delta; the
    /// step decision compares the *realized* position against the thresholds
    /// so a missed window is made up rather than dropped.
    pub fn compute_pulse<A: AxisControl>(&mut self, axes: &mut [A]) {
        let n = self.num_axes.min(axes.len());
        for i in 0..n {
            let delta = self.step_delta[i];
            axes[i].set_direction(Direction::from_delta(delta));

            let realized = axes[i].position();
            if self.threshold_minus[i] > realized {
                // Moving positive: realized position is a half step behind.
                let ratio_from_end = (self.threshold_minus[i] - realized) / delta;
                self.queue_step_pulse(i as u8, self.sub_tick_offset(ratio_from_end));
            } else if self.threshold_plus[i] < realized {
                // Moving negative: ratio comes out positive since delta is
                // negative too.
                let ratio_from_end = (self.threshold_plus[i] - realized) / delta;
                self.queue_step_pulse(i as u8, self.sub_tick_offset(ratio_from_end));
            }
        }
    }

    /// Interrupt service routine for the pulse timer.
    ///
    /// Advances the slot counter, drains the due rising- and falling-edge
    /// slots, and returns the phase within the current window. The caller
    /// triggers calculation at phase 0 and staging at phase `R - 1`.
    pub fn service_pulse_timer<A: AxisControl>(&mut self, axes: &mut [A]) -> u8 {
        self.pulse_counter = (self.pulse_counter + 1) & self.ratio.rollover_mask();
        let slot = self.pulse_counter as usize;

        for &axis_index in self.rising_edges[slot].iter() {
            if let Some(axis) = axes.get_mut(axis_index as usize) {
                axis.step_high();
            }
        }
        self.rising_edges[slot].clear();

        for &axis_index in self.falling_edges[slot].iter() {
            if let Some(axis) = axes.get_mut(axis_index as usize) {
                axis.step_low();
            }
        }
        self.falling_edges[slot].clear();

        self.pulse_counter & self.ratio.count_mask()
    }

    /// Map a crossing ratio to a sub-tick offset in `[0, R)`.
    ///
    /// `ratio_from_end` is the fraction of the window's travel still ahead of
    /// the crossing; a crossing early in the window yields a small offset.
    #[inline]
    fn sub_tick_offset(&self, ratio_from_end: f32) -> u8 {
        let offset = self.ratio.value() as f32 * (1.0 - ratio_from_end);
        // The saturating cast plus mask pins degenerate ratios to the window.
        (offset as u8) & self.ratio.count_mask()
    }

    /// Queue a 50%-duty step pulse for one axis at the given sub-tick offset.
    ///
    /// Writers must never touch the epoch currently being drained: while the
    /// counter is in epoch 0 the offset is pushed into epoch 1, and vice
    /// versa the untranslated offset already lands in epoch 0.
    fn queue_step_pulse(&mut self, axis_index: u8, pulse_to_go_high: u8) {
        let mut rise = pulse_to_go_high;
        if self.pulse_counter & self.ratio.epoch_mask() == 0 {
            rise += self.ratio.epoch_mask();
        }
        let fall = (rise + self.ratio.half()) & self.ratio.rollover_mask();

        // Slot capacity equals the axis count; exceeding it is a caller
        // precondition violation, not a runtime error.
        debug_assert!(self.rising_edges[rise as usize].len() < self.num_axes.max(1));
        let _ = self.rising_edges[rise as usize].push(axis_index);
        let _ = self.falling_edges[fall as usize].push(axis_index);
    }
}
