//! Named move configuration from TOML.

use heapless::Vec;
use serde::Deserialize;

use super::units::{Millimeters, MillimetersPerSec, MillimetersPerSecSquared};
use crate::pulse::MAX_AXES;

/// A named linear move: one absolute target per configured axis, with
/// optional velocity/acceleration overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveConfig {
    /// Absolute target position per axis, in configuration order.
    pub target_mm: Vec<Millimeters, MAX_AXES>,

    /// Cruise velocity override.
    #[serde(default)]
    pub velocity_mm_per_sec: Option<MillimetersPerSec>,

    /// Ramp acceleration override.
    #[serde(default)]
    pub acceleration_mm_per_sec2: Option<MillimetersPerSecSquared>,
}

impl MoveConfig {
    /// Cruise velocity for this move, falling back to the system default.
    pub fn velocity_or(&self, default: MillimetersPerSec) -> MillimetersPerSec {
        self.velocity_mm_per_sec.unwrap_or(default)
    }

    /// Ramp acceleration for this move, falling back to the system default.
    pub fn acceleration_or(
        &self,
        default: MillimetersPerSecSquared,
    ) -> MillimetersPerSecSquared {
        self.acceleration_mm_per_sec2.unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_fall_back() {
        let config: MoveConfig = toml::from_str(
            r#"
target_mm = [400.0, 380.0]
velocity_mm_per_sec = 250.0
"#,
        )
        .unwrap();

        assert_eq!(config.target_mm.len(), 2);
        let v = config.velocity_or(MillimetersPerSec::new(500.0));
        assert!((v.value() - 250.0).abs() < 1e-6);
        let a = config.acceleration_or(MillimetersPerSecSquared::new(300.0));
        assert!((a.value() - 300.0).abs() < 1e-6);
    }
}
