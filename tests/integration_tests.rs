//! Integration tests for the pulse-motion library.
//!
//! These tests verify the complete workflow from TOML parsing through move
//! planning to realized step edges on the axes.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};

use pulse_motion::{
    plan_named_move, Axis, AxisControl, Error, MotionCore, Priority, PulseTimer, SystemConfig,
};

// =============================================================================
// Test configuration data
// =============================================================================

const SINGLE_AXIS_CONFIG: &str = r#"
[axes.x]
name = "X Axis"
alias = "X"
steps_per_mm = 1.0

[motion]
smoothing_ratio = 4
timer_clock_hz = 84000000
pulse_prescaler = 20
pulse_reload = 19
default_velocity_mm_per_sec = 500.0
default_acceleration_mm_per_sec2 = 30000.0

[moves.out]
target_mm = [100.0]

[moves.home]
target_mm = [0.0]
"#;

const TWO_AXIS_CONFIG: &str = r#"
[axes.x]
name = "X Axis"
alias = "X"
steps_per_mm = 1.0

[axes.y]
name = "Y Axis"
alias = "Y"
steps_per_mm = 1.0
invert_direction = true

[motion]
smoothing_ratio = 4
timer_clock_hz = 84000000
pulse_prescaler = 20
pulse_reload = 19
default_velocity_mm_per_sec = 500.0
default_acceleration_mm_per_sec2 = 30000.0

[moves.diagonal]
target_mm = [30.0, 40.0]
"#;

// With the 200 kHz divider above, one pulse tick is 0.005 ms.
const TICK_MS: f32 = 0.005;

// =============================================================================
// Host doubles for the hardware seams
// =============================================================================

/// Push-pull output stand-in; the axis tracks realized position itself.
#[derive(Default)]
struct TestPin {
    level: bool,
}

impl ErrorType for TestPin {
    type Error = Infallible;
}

impl OutputPin for TestPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level = true;
        Ok(())
    }
}

#[derive(Default)]
struct TestTimer {
    initialized: bool,
    interrupt_enabled: bool,
    counter_enabled: bool,
    priority: Option<Priority>,
}

impl PulseTimer for TestTimer {
    fn init(&mut self) {
        self.initialized = true;
    }

    fn set_frequency(&mut self, _prescaler: u16, _reload: u16) {}

    fn set_phase(&mut self, _fraction: f32) {}

    fn set_priority(&mut self, priority: Priority) {
        self.priority = Some(priority);
    }

    fn enable_interrupt(&mut self) {
        self.interrupt_enabled = true;
    }

    fn disable_interrupt(&mut self) {
        self.interrupt_enabled = false;
    }

    fn enable_counter(&mut self) {
        self.counter_enabled = true;
    }

    fn disable_counter(&mut self) {
        self.counter_enabled = false;
    }
}

type TestAxis = Axis<TestPin, TestPin, TestPin>;

fn build_core(config: &SystemConfig) -> MotionCore<TestTimer, TestAxis> {
    let mut core = MotionCore::new(TestTimer::default(), &config.motion).unwrap();
    for name in config.axis_names().collect::<Vec<_>>() {
        let axis_config = config.axis(name).unwrap();
        let axis = Axis::from_config(
            axis_config,
            TestPin::default(),
            TestPin::default(),
            TestPin::default(),
        );
        core.add_axis(axis).unwrap();
    }
    core
}

/// Drive the core for the whole move plus a few windows of drain time.
fn run_move(core: &mut MotionCore<TestTimer, TestAxis>, total_time_ms: f32) {
    let ticks = (total_time_ms / TICK_MS) as usize + 64;
    for _ in 0..ticks {
        core.tick();
    }
}

// =============================================================================
// Configuration round trips
// =============================================================================

#[test]
fn test_parse_and_validate_two_axis_config() {
    let config: SystemConfig = pulse_motion::parse_config(TWO_AXIS_CONFIG).unwrap();

    assert_eq!(config.axis_count(), 2);
    assert_eq!(config.axis_index("x"), Some(0));
    assert_eq!(config.axis_index("y"), Some(1));
    assert_eq!(config.axis("y").unwrap().alias, 'Y');
    assert!(config.axis("y").unwrap().invert_direction);
    assert!(config.move_named("diagonal").is_some());
    assert!(config.move_named("missing").is_none());

    // 84 MHz / (21 * 20) = 200 kHz
    assert!((config.motion.pulse_rate_hz() - 200_000.0).abs() < 1.0);
}

#[test]
fn test_unknown_move_is_an_error() {
    let config: SystemConfig = pulse_motion::parse_config(SINGLE_AXIS_CONFIG).unwrap();
    let result = plan_named_move(&config, "warp", &[0.0]);
    assert!(matches!(
        result,
        Err(Error::Config(
            pulse_motion::error::ConfigError::MoveNotFound(_)
        ))
    ));
}

// =============================================================================
// End-to-end moves
// =============================================================================

#[test]
fn test_single_axis_move_realizes_every_step() {
    let config = pulse_motion::parse_config(SINGLE_AXIS_CONFIG).unwrap();
    let mut core = build_core(&config);

    let plan = plan_named_move(&config, "out", &[0.0]).unwrap();
    let total_time = plan.profile.total_time();

    core.begin_move(plan).unwrap();
    core.enable();
    run_move(&mut core, total_time);

    // 100 mm at 1 step/mm must realize exactly 100 rising edges.
    assert!(!core.is_moving());
    let axis = core.axis(0).unwrap();
    assert_eq!(axis.step_count(), 100);
    assert_eq!(axis.position(), 100.0);
}

#[test]
fn test_reverse_move_returns_to_origin() {
    let config = pulse_motion::parse_config(SINGLE_AXIS_CONFIG).unwrap();
    let mut core = build_core(&config);

    // Pretend the axis was left at 80 steps by a previous move.
    core.axis_mut(0).unwrap().set_position(80);

    let plan = plan_named_move(&config, "home", &[80.0]).unwrap();
    let total_time = plan.profile.total_time();

    core.begin_move(plan).unwrap();
    core.enable();
    run_move(&mut core, total_time);

    assert!(!core.is_moving());
    let axis = core.axis(0).unwrap();
    assert_eq!(axis.step_count(), 0);
    assert_eq!(axis.position(), 0.0);
}

#[test]
fn test_two_axis_diagonal_lands_on_target() {
    let config = pulse_motion::parse_config(TWO_AXIS_CONFIG).unwrap();
    let mut core = build_core(&config);

    let plan = plan_named_move(&config, "diagonal", &[0.0, 0.0]).unwrap();
    let total_time = plan.profile.total_time();

    core.begin_move(plan).unwrap();
    core.enable();
    run_move(&mut core, total_time);

    assert!(!core.is_moving());
    assert_eq!(core.axis(0).unwrap().step_count(), 30);
    assert_eq!(core.axis(1).unwrap().step_count(), 40);
}

#[test]
fn test_move_sequencing_reuses_the_core() {
    let config = pulse_motion::parse_config(SINGLE_AXIS_CONFIG).unwrap();
    let mut core = build_core(&config);
    core.enable();

    let out = plan_named_move(&config, "out", &[0.0]).unwrap();
    let out_time = out.profile.total_time();
    core.begin_move(out).unwrap();
    run_move(&mut core, out_time);
    assert_eq!(core.axis(0).unwrap().step_count(), 100);

    let home = plan_named_move(&config, "home", &[100.0]).unwrap();
    let home_time = home.profile.total_time();
    core.begin_move(home).unwrap();
    run_move(&mut core, home_time);

    assert!(!core.is_moving());
    assert_eq!(core.axis(0).unwrap().step_count(), 0);
}
