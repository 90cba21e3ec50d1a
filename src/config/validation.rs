//! Configuration validation.

use crate::error::{ConfigError, Error, Result};
use crate::pulse::MAX_AXES;

use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - Axis count fits the pulse-queue capacity
/// - Steps-per-mm values are positive
/// - The pulse timer division yields a usable tick rate
/// - Default and per-move velocities/accelerations are positive
/// - Each move carries one target per configured axis
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    if config.axes.len() > MAX_AXES {
        return Err(Error::Config(ConfigError::TooManyAxes(config.axes.len())));
    }

    for (name, axis) in config.axes.iter() {
        validate_axis(name.as_str(), axis)?;
    }

    validate_motion(&config.motion)?;

    for (name, mv) in config.moves.iter() {
        validate_move(name.as_str(), mv, config)?;
    }

    Ok(())
}

fn validate_axis(_name: &str, config: &super::AxisConfig) -> Result<()> {
    if config.steps_per_mm.value() <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerMm(
            config.steps_per_mm.value(),
        )));
    }

    Ok(())
}

fn validate_motion(config: &super::MotionConfig) -> Result<()> {
    if config.timer_clock_hz == 0 {
        return Err(Error::Config(ConfigError::InvalidTimerDivision {
            clock_hz: config.timer_clock_hz,
            prescaler: config.pulse_prescaler,
            reload: config.pulse_reload,
        }));
    }

    if config.default_velocity.value() <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidVelocity(
            config.default_velocity.value(),
        )));
    }

    if config.default_acceleration.value() <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidAcceleration(
            config.default_acceleration.value(),
        )));
    }

    Ok(())
}

fn validate_move(_name: &str, mv: &super::MoveConfig, config: &SystemConfig) -> Result<()> {
    if mv.target_mm.len() != config.axes.len() {
        return Err(Error::Config(ConfigError::AxisCountMismatch {
            axes: config.axes.len(),
            targets: mv.target_mm.len(),
        }));
    }

    if let Some(v) = mv.velocity_mm_per_sec {
        if v.value() <= 0.0 {
            return Err(Error::Config(ConfigError::InvalidVelocity(v.value())));
        }
    }

    if let Some(a) = mv.acceleration_mm_per_sec2 {
        if a.value() <= 0.0 {
            return Err(Error::Config(ConfigError::InvalidAcceleration(a.value())));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> SystemConfig {
        toml::from_str(
            r#"
[axes.x]
name = "X Axis"
alias = "X"
steps_per_mm = 160.0

[axes.y]
name = "Y Axis"
alias = "Y"
steps_per_mm = 160.0

[motion]
timer_clock_hz = 84000000
pulse_prescaler = 20
pulse_reload = 19
default_velocity_mm_per_sec = 500.0
default_acceleration_mm_per_sec2 = 300.0
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&base_config()).is_ok());
    }

    #[test]
    fn test_negative_steps_per_mm_rejected() {
        let mut config = base_config();
        for (_, axis) in config.axes.iter_mut() {
            axis.steps_per_mm = crate::config::units::StepsPerMm::new(-1.0);
        }

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidStepsPerMm(_)))
        ));
    }

    #[test]
    fn test_move_target_count_mismatch_rejected() {
        let config: SystemConfig = toml::from_str(
            r#"
[axes.x]
name = "X Axis"
alias = "X"
steps_per_mm = 160.0

[motion]
timer_clock_hz = 84000000
pulse_prescaler = 20
pulse_reload = 19
default_velocity_mm_per_sec = 500.0
default_acceleration_mm_per_sec2 = 300.0

[moves.diag]
target_mm = [100.0, 100.0]
"#,
        )
        .unwrap();

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::AxisCountMismatch { .. }))
        ));
    }
}
