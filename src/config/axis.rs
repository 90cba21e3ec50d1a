//! Per-axis configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::units::StepsPerMm;

/// Complete axis configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Single-letter alias, the G-code word for this axis (e.g. 'X').
    pub alias: char,

    /// Steps of motor travel per millimeter of axis travel.
    pub steps_per_mm: StepsPerMm,

    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_config_defaults() {
        let config: AxisConfig = toml::from_str(
            r#"
name = "X Axis"
alias = "X"
steps_per_mm = 160.0
"#,
        )
        .unwrap();

        assert_eq!(config.alias, 'X');
        assert!(!config.invert_direction);
        assert!((config.steps_per_mm.value() - 160.0).abs() < 1e-6);
    }
}
