//! Motion control orchestration.
//!
//! [`MotionCore`] owns the axes, the pulse generator, and the deferred
//! channel registry, and sequences one window of work per `R` pulse ticks:
//! the due edge slots drain on every tick, calculation (profiler → pather →
//! kinematics → `compute_step`) is triggered at window phase 0, and staging
//! (`compute_pulse`) at phase `R - 1`, each running below the pulse timer's
//! priority.

use heapless::Vec;

use crate::axis::AxisControl;
use crate::config::MotionConfig;
use crate::error::{ConfigError, Error, MotionError, Result};
use crate::motion::MovePlan;
use crate::pulse::{Pulser, MAX_AXES};
use crate::sched::{IrqHandle, Priority, PulseTimer, SoftIrqController};

/// Deferred lanes the core registers: calculation and staging.
const DEFERRED_CHANNELS: usize = 2;

/// The motion-control core: timer fan-out plus move lifecycle.
///
/// Generic over the platform timer and the axis implementation so the whole
/// pipeline runs against mocks on the host.
pub struct MotionCore<TIM, A>
where
    TIM: PulseTimer,
    A: AxisControl,
{
    timer: TIM,
    axes: Vec<A, MAX_AXES>,
    pulser: Pulser,
    irqs: SoftIrqController<DEFERRED_CHANNELS>,
    calc_channel: IrqHandle,
    stage_channel: IrqHandle,
    active: Option<MovePlan>,
    window_ms: f32,
}

impl<TIM, A> MotionCore<TIM, A>
where
    TIM: PulseTimer,
    A: AxisControl,
{
    /// Wire up the core: configure the pulse timer and register the
    /// calculation and staging channels below its priority.
    ///
    /// The timer is left disabled; call [`enable`](MotionCore::enable) to
    /// start the pipeline.
    pub fn new(mut timer: TIM, config: &MotionConfig) -> Result<Self> {
        let mut irqs = SoftIrqController::new();
        let calc_channel = irqs.register(Priority::Med)?;
        let stage_channel = irqs.register(Priority::Med)?;

        timer.init();
        timer.set_frequency(config.pulse_prescaler, config.pulse_reload);
        timer.set_phase(0.0);
        timer.set_priority(Priority::Realtime);

        Ok(Self {
            timer,
            axes: Vec::new(),
            pulser: Pulser::new(config.smoothing_ratio),
            irqs,
            calc_channel,
            stage_channel,
            active: None,
            window_ms: config.window_ms(),
        })
    }

    /// Register an axis with the core, returning its index.
    ///
    /// Indices are the identities the pulse queues carry, so registration
    /// order is load-bearing: it must match the order used for planning.
    pub fn add_axis(&mut self, axis: A) -> Result<usize> {
        let index = self.axes.len();
        self.axes
            .push(axis)
            .map_err(|_| Error::Config(ConfigError::TooManyAxes(MAX_AXES + 1)))?;
        Ok(index)
    }

    /// Number of registered axes.
    #[inline]
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    /// Borrow a registered axis.
    #[inline]
    pub fn axis(&self, index: usize) -> Option<&A> {
        self.axes.get(index)
    }

    /// Mutably borrow a registered axis, e.g. to zero it after homing.
    #[inline]
    pub fn axis_mut(&mut self, index: usize) -> Option<&mut A> {
        self.axes.get_mut(index)
    }

    /// Arm a planned move.
    ///
    /// Validates the plan against the registered axes and primes the pulse
    /// generator so the first window stages nothing.
    ///
    /// # Errors
    ///
    /// - [`MotionError::UnsupportedMoveType`] for arc plans.
    /// - [`MotionError::AxisCountMismatch`] when the plan does not span the
    ///   registered axes.
    pub fn begin_move(&mut self, plan: MovePlan) -> Result<()> {
        if !plan.path.is_supported() {
            return Err(Error::Motion(MotionError::UnsupportedMoveType));
        }
        if plan.axis_count() != self.axes.len() {
            return Err(Error::Motion(MotionError::AxisCountMismatch {
                expected: self.axes.len(),
                actual: plan.axis_count(),
            }));
        }

        let start = plan.path.coords_at(0.0)?;
        let targets = plan.kinematics.transform(start.as_slice());
        self.pulser.prime(targets.as_slice());

        self.active = Some(plan);
        Ok(())
    }

    /// Whether a move is currently in flight.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.active.is_some()
    }

    /// Start the pulse timer and its interrupt.
    pub fn enable(&mut self) {
        self.timer.enable_interrupt();
        self.timer.enable_counter();
    }

    /// Stop the pulse timer and its interrupt.
    pub fn disable(&mut self) {
        self.timer.disable_counter();
        self.timer.disable_interrupt();
    }

    /// The pulse timer's periodic callback. Call from the timer ISR at the
    /// oversampled tick rate.
    ///
    /// Emits due edges, then pends the calculation lane at the start of a
    /// window and the staging lane after the window's last pulse slot.
    pub fn on_pulse_tick(&mut self) {
        let phase = self.pulser.service_pulse_timer(&mut self.axes);

        if phase == 0 {
            self.irqs.trigger(self.calc_channel);
        } else if phase == self.pulser.max_pulse_count() {
            self.irqs.trigger(self.stage_channel);
        }
    }

    /// Run pending deferred channels in priority order.
    ///
    /// On hardware this is invoked from the deferred-interrupt context after
    /// the pulse ISR returns; hosts and tests call [`tick`](MotionCore::tick)
    /// instead.
    pub fn service_deferred(&mut self) {
        while let Some(channel) = self.irqs.take_next() {
            if channel == self.calc_channel {
                self.calc_interrupt();
            } else if channel == self.stage_channel {
                self.stage_interrupt();
            }
        }
    }

    /// One full tick: pulse service plus deferred-channel arbitration.
    pub fn tick(&mut self) {
        self.on_pulse_tick();
        self.service_deferred();
    }

    /// Calculation lane: advance the profile one window and hand the new
    /// step targets to the pulse generator.
    fn calc_interrupt(&mut self) {
        let Some(mut plan) = self.active.take() else {
            return;
        };

        if plan.profile.move_completed() {
            // The final window's edges were staged on the previous pass;
            // retiring the plan here lets them drain while the core idles.
            return;
        }

        let distance = plan.profile.distance_along_path(self.window_ms);
        if let Ok(coords) = plan.path.coords_at(distance) {
            let targets = plan.kinematics.transform(coords.as_slice());
            self.pulser.compute_step(targets.as_slice());
        }

        self.active = Some(plan);
    }

    /// Staging lane: queue the coming window's edges from the realized
    /// positions.
    fn stage_interrupt(&mut self) {
        if self.active.is_some() {
            self.pulser.compute_pulse(&mut self.axes);
        }
    }

    /// Tear the core down, returning the timer and axes.
    pub fn free(self) -> (TIM, Vec<A, MAX_AXES>) {
        (self.timer, self.axes)
    }
}
