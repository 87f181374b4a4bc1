use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::constants::core::RENDER_DISTANCE;
use crate::constants::time_constants::DAY_LENGTH_SECONDS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Startup configuration, fixed for the lifetime of the process.
///
/// Everything not listed here is a compile-time constant in
/// `src/constants.rs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// World seed; all terrain derives from it
    pub seed: u32,
    /// Streaming window radius in chunks
    pub render_distance: i32,
    /// Real seconds for one full day cycle
    pub day_length: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 1337,
            render_distance: RENDER_DISTANCE,
            day_length: DAY_LENGTH_SECONDS,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.render_distance, RENDER_DISTANCE);
        assert_eq!(config.day_length, DAY_LENGTH_SECONDS);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = EngineConfig::from_toml_str("seed = 99\nrender_distance = 2\n").unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.render_distance, 2);
        assert_eq!(config.day_length, DAY_LENGTH_SECONDS);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(matches!(
            EngineConfig::from_toml_str("render_distance = \"wide\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
