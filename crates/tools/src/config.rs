//! Simulator settings loaded from TOML.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use wumpus_core::GRID_SIZE;

/// Knobs for generated caves and episode length.
///
/// Every key is optional in the file; anything left out keeps its default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Smallest cave side length, clamped to the agent's grid.
    pub min_size: i32,
    /// Largest cave side length, clamped to the agent's grid.
    pub max_size: i32,
    /// Chance that any non-entrance cell holds a pit.
    pub pit_probability: f64,
    /// Actions an episode may take before it is declared stalled.
    pub max_actions: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { min_size: 4, max_size: GRID_SIZE as i32, pit_probability: 0.2, max_actions: 1000 }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(io::Error),
    #[error("invalid simulator config: {0}")]
    Parse(toml::de::Error),
}

impl SimConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Inclusive side-length range after clamping both ends to `1..=GRID_SIZE`.
    pub fn size_bounds(&self) -> (i32, i32) {
        let clamp = |v: i32| v.clamp(1, GRID_SIZE as i32);
        let (lo, hi) = (clamp(self.min_size), clamp(self.max_size));
        (lo.min(hi), lo.max(hi))
    }

    pub fn pit_chance(&self) -> f64 {
        self.pit_probability.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = SimConfig::from_toml("pit_probability = 0.0\n").expect("valid toml");
        assert_eq!(config, SimConfig { pit_probability: 0.0, ..SimConfig::default() });
    }

    #[test]
    fn size_bounds_are_clamped_and_ordered() {
        let config = SimConfig { min_size: 12, max_size: -3, ..SimConfig::default() };
        assert_eq!(config.size_bounds(), (1, 7));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let err = SimConfig::from_toml("max_actions = \"many\"").expect_err("wrong type");
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid simulator config: "));
    }
}
