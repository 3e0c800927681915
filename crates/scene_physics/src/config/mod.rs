//! Configuration system
//!
//! Simulation parameters are loaded from TOML or RON files chosen by
//! extension, with sensible defaults for every field.

use crate::foundation::math::Vec3;
use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Simulation parameters
///
/// Gravity is applied only while the gravity switch is on (Play/Test
/// mode); the world floor is a hard lower bound on the player's
/// vertical position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Gravity acceleration applied to the player each tick
    #[serde(default = "default_gravity")]
    pub gravity: Vec3,

    /// World floor height; the player is clamped to this plane
    #[serde(default = "default_floor_height")]
    pub world_floor_height: f32,

    /// Whether gravity starts enabled (Play mode) or disabled (Edit mode)
    #[serde(default = "default_gravity_enabled")]
    pub gravity_enabled: bool,
}

fn default_gravity() -> Vec3 {
    Vec3::new(0.0, -9.81, 0.0)
}

fn default_floor_height() -> f32 {
    0.0
}

fn default_gravity_enabled() -> bool {
    true
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: default_gravity(),
            world_floor_height: default_floor_height(),
            gravity_enabled: default_gravity_enabled(),
        }
    }
}

impl Config for SimulationConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_relative_eq!(config.gravity.y, -9.81);
        assert_relative_eq!(config.world_floor_height, 0.0);
        assert!(config.gravity_enabled);
    }

    #[test]
    fn test_toml_round_trip() {
        let path = std::env::temp_dir().join("scene_physics_config_test.toml");
        let path = path.to_str().unwrap().to_string();

        let mut config = SimulationConfig::default();
        config.gravity = Vec3::new(0.0, -10.0, 0.0);
        config.world_floor_height = -5.0;
        config.save_to_file(&path).unwrap();

        let loaded = SimulationConfig::load_from_file(&path).unwrap();
        assert_relative_eq!(loaded.gravity.y, -10.0);
        assert_relative_eq!(loaded.world_floor_height, -5.0);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_ron_round_trip() {
        let path = std::env::temp_dir().join("scene_physics_config_test.ron");
        let path = path.to_str().unwrap().to_string();

        let mut config = SimulationConfig::default();
        config.gravity_enabled = false;
        config.save_to_file(&path).unwrap();

        let loaded = SimulationConfig::load_from_file(&path).unwrap();
        assert!(!loaded.gravity_enabled);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unsupported_format() {
        let result = SimulationConfig::load_from_file("config.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: SimulationConfig = toml::from_str("world_floor_height = -2.0").unwrap();
        assert_relative_eq!(loaded.world_floor_height, -2.0);
        assert_relative_eq!(loaded.gravity.y, -9.81);
        assert!(loaded.gravity_enabled);
    }
}
