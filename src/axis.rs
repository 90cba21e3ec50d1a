//! Single-axis pin ownership and realized-position tracking.
//!
//! An [`Axis`] exclusively owns its STEP, DIR, and EN output pins and tracks
//! the position the motor has *actually* been driven to: the floating
//! position advances only on a STEP rising edge, never when a target is
//! merely commanded. The pulse generator drives axes through the
//! [`AxisControl`] trait so it can be exercised against mock axes in tests.

use embedded_hal::digital::OutputPin;

/// Commanded direction of axis travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Travel toward increasing step positions.
    Forward,
    /// Travel toward decreasing step positions.
    Reverse,
}

impl Direction {
    /// Direction implied by a target-position delta.
    #[inline]
    pub fn from_delta(delta: f32) -> Self {
        if delta > 0.0 {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }

    /// Signed per-step position increment.
    #[inline]
    pub fn increment(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }
}

/// Interface the pulse generator uses to drive an axis.
///
/// Implemented by [`Axis`] over real pins; tests implement it with recording
/// stubs. All methods run inside the pulse-service or staging interrupts and
/// must not block or fail.
pub trait AxisControl {
    /// Realized position in steps, as driven via STEP edges.
    fn position(&self) -> f32;

    /// Drive the STEP pin high and advance the realized position by the
    /// current signed increment.
    fn step_high(&mut self);

    /// Drive the STEP pin low.
    fn step_low(&mut self);

    /// Drive the DIR pin and latch the increment sign for subsequent steps.
    fn set_direction(&mut self, direction: Direction);
}

/// A single motion axis owning its stepper-driver pins.
///
/// Generic over the embedded-hal 1.0 `OutputPin` types for STEP, DIR, and EN.
/// Pin writes are treated as infallible: the pins are dedicated push-pull
/// outputs with exactly one owner.
pub struct Axis<STEP, DIR, EN>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
{
    /// STEP pin (rising edge moves the motor).
    step_pin: STEP,

    /// DIR pin (level selects travel direction).
    dir_pin: DIR,

    /// EN pin (active-low driver enable).
    enable_pin: EN,

    /// Single-letter alias, the G-code word for this axis.
    alias: char,

    /// Whether DIR pin logic is inverted for this axis.
    invert_direction: bool,

    /// Realized position in steps. Written only by the pulse-service path.
    position: f32,

    /// Realized position as a whole-step counter.
    step_count: i32,

    /// +1.0 or -1.0, latched by the last commanded direction.
    increment: f32,
}

impl<STEP, DIR, EN> Axis<STEP, DIR, EN>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
{
    /// Create an axis from its pins.
    pub fn new(
        step_pin: STEP,
        dir_pin: DIR,
        enable_pin: EN,
        invert_direction: bool,
        alias: char,
    ) -> Self {
        Self {
            step_pin,
            dir_pin,
            enable_pin,
            alias,
            invert_direction,
            position: 0.0,
            step_count: 0,
            increment: 1.0,
        }
    }

    /// Create an axis from configuration plus its pins.
    pub fn from_config(
        config: &crate::config::AxisConfig,
        step_pin: STEP,
        dir_pin: DIR,
        enable_pin: EN,
    ) -> Self {
        Self::new(
            step_pin,
            dir_pin,
            enable_pin,
            config.invert_direction,
            config.alias,
        )
    }

    /// Get the axis alias letter.
    #[inline]
    pub fn alias(&self) -> char {
        self.alias
    }

    /// Overwrite the realized position, e.g. after homing.
    pub fn set_position(&mut self, steps: i32) {
        self.position = steps as f32;
        self.step_count = steps;
    }

    /// Realized position as a whole-step counter.
    #[inline]
    pub fn step_count(&self) -> i32 {
        self.step_count
    }

    /// Energize the stepper driver (EN is active low).
    pub fn enable(&mut self) {
        let _ = self.enable_pin.set_low();
    }

    /// De-energize the stepper driver.
    pub fn disable(&mut self) {
        let _ = self.enable_pin.set_high();
    }

    /// Consume the axis and return its pins.
    pub fn free(self) -> (STEP, DIR, EN) {
        (self.step_pin, self.dir_pin, self.enable_pin)
    }
}

impl<STEP, DIR, EN> AxisControl for Axis<STEP, DIR, EN>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
{
    #[inline]
    fn position(&self) -> f32 {
        self.position
    }

    #[inline]
    fn step_high(&mut self) {
        let _ = self.step_pin.set_high();
        // Position tracks realized edges only, counted on the rising edge.
        self.position += self.increment;
        self.step_count += self.increment as i32;
    }

    #[inline]
    fn step_low(&mut self) {
        let _ = self.step_pin.set_low();
    }

    #[inline]
    fn set_direction(&mut self, direction: Direction) {
        let forward = direction == Direction::Forward;
        if forward != self.invert_direction {
            let _ = self.dir_pin.set_high();
        } else {
            let _ = self.dir_pin.set_low();
        }
        self.increment = direction.increment();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };

    fn no_ops() -> PinMock {
        PinMock::new(&[])
    }

    #[test]
    fn test_step_high_advances_realized_position() {
        let step = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ]);
        let dir = PinMock::new(&[PinTransaction::set(PinState::High)]);
        let en = no_ops();

        let mut axis = Axis::new(step, dir, en, false, 'X');
        axis.set_direction(Direction::Forward);
        axis.step_high();
        axis.step_low();

        assert_eq!(axis.position(), 1.0);
        assert_eq!(axis.step_count(), 1);

        let (mut step, mut dir, mut en) = axis.free();
        step.done();
        dir.done();
        en.done();
    }

    #[test]
    fn test_reverse_steps_decrement() {
        let step = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::High),
        ]);
        let dir = PinMock::new(&[PinTransaction::set(PinState::Low)]);
        let en = no_ops();

        let mut axis = Axis::new(step, dir, en, false, 'Y');
        axis.set_direction(Direction::Reverse);
        axis.step_high();
        axis.step_high();

        assert_eq!(axis.position(), -2.0);
        assert_eq!(axis.step_count(), -2);

        let (mut step, mut dir, mut en) = axis.free();
        step.done();
        dir.done();
        en.done();
    }

    #[test]
    fn test_invert_direction_flips_dir_pin() {
        let step = PinMock::new(&[PinTransaction::set(PinState::High)]);
        let dir = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);
        let en = no_ops();

        let mut axis = Axis::new(step, dir, en, true, 'Z');
        axis.set_direction(Direction::Forward);
        axis.set_direction(Direction::Reverse);

        // Increment sign still follows the commanded direction, not the pin.
        assert_eq!(axis.position(), 0.0);
        axis.step_high();
        assert_eq!(axis.position(), -1.0);

        let (mut step, mut dir, mut en) = axis.free();
        step.done();
        dir.done();
        en.done();
    }

    #[test]
    fn test_enable_is_active_low() {
        let step = no_ops();
        let dir = no_ops();
        let en = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);

        let mut axis = Axis::new(step, dir, en, false, 'X');
        axis.enable();
        axis.disable();

        let (mut step, mut dir, mut en) = axis.free();
        step.done();
        dir.done();
        en.done();
    }

    #[test]
    fn test_set_position_overwrites_both_counters() {
        let mut axis = Axis::new(no_ops(), no_ops(), no_ops(), false, 'X');
        axis.set_position(-250);

        assert_eq!(axis.position(), -250.0);
        assert_eq!(axis.step_count(), -250);

        let (mut step, mut dir, mut en) = axis.free();
        step.done();
        dir.done();
        en.done();
    }
}
