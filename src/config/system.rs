//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::axis::AxisConfig;
use super::motion::MotionConfig;
use super::moves::MoveConfig;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Named axis configurations, in declaration order.
    pub axes: FnvIndexMap<String<32>, AxisConfig, 16>,

    /// Motion engine settings.
    pub motion: MotionConfig,

    /// Named move configurations.
    #[serde(default)]
    pub moves: FnvIndexMap<String<32>, MoveConfig, 32>,
}

impl SystemConfig {
    /// Get an axis configuration by name.
    pub fn axis(&self, name: &str) -> Option<&AxisConfig> {
        self.axes
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Get the declaration-order index of an axis by name.
    ///
    /// Move target vectors are ordered by this index.
    pub fn axis_index(&self, name: &str) -> Option<usize> {
        self.axes.iter().position(|(k, _)| k.as_str() == name)
    }

    /// Get a move configuration by name.
    pub fn move_named(&self, name: &str) -> Option<&MoveConfig> {
        self.moves
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all axis names in declaration order.
    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.keys().map(|s| s.as_str())
    }

    /// List all move names.
    pub fn move_names(&self) -> impl Iterator<Item = &str> {
        self.moves.keys().map(|s| s.as_str())
    }

    /// Number of configured axes.
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }
}
