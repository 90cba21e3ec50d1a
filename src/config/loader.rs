//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use pulse_motion::load_config;
///
/// let config = load_config("motion.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[axes.x]
name = "X-Axis"
alias = "X"
steps_per_mm = 160.0

[motion]
timer_clock_hz = 84000000
pulse_prescaler = 20
pulse_reload = 19
default_velocity_mm_per_sec = 500.0
default_acceleration_mm_per_sec2 = 300.0
"#;

        let config = parse_config(toml).unwrap();
        assert!(config.axis("x").is_some());
        assert_eq!(config.axis_count(), 1);
    }

    #[test]
    fn test_parse_with_move() {
        let toml = r#"
[axes.x]
name = "X-Axis"
alias = "X"
steps_per_mm = 160.0

[motion]
timer_clock_hz = 84000000
pulse_prescaler = 20
pulse_reload = 19
default_velocity_mm_per_sec = 500.0
default_acceleration_mm_per_sec2 = 300.0

[moves.home]
target_mm = [0.0]
velocity_mm_per_sec = 100.0
"#;

        let config = parse_config(toml).unwrap();
        assert!(config.move_named("home").is_some());
    }

    #[test]
    fn test_parse_bad_smoothing_ratio() {
        let toml = r#"
[axes.x]
name = "X-Axis"
alias = "X"
steps_per_mm = 160.0

[motion]
smoothing_ratio = 3
timer_clock_hz = 84000000
pulse_prescaler = 20
pulse_reload = 19
default_velocity_mm_per_sec = 500.0
default_acceleration_mm_per_sec2 = 300.0
"#;

        assert!(parse_config(toml).is_err());
    }
}
