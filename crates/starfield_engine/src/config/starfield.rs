//! Starfield configuration
//!
//! Process-wide constants for the shooting star lifecycle, fixed at startup.

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};
use crate::ecs::components::FadeTiming;

/// Lifecycle and spawn settings for transient objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Total time an object exists, fade included
    pub lifetime_ms: u64,
    /// Trailing window of the lifetime during which opacity decays to zero
    pub fade_duration_ms: u64,
    /// Wall-clock interval between spawn attempts
    pub spawn_interval_ms: u64,
    /// Edge length of the spawn cube centered on the origin
    pub spawn_spread: f32,
    /// Model loaded for every spawn
    pub model_path: String,
    /// Glow colour applied to spawned nodes (linear RGB)
    pub glow_color: [f32; 3],
    /// Frame driver settings
    pub engine: EngineConfig,
}

/// Frame driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Refresh rate the frame scheduler paces itself to
    pub target_fps: u32,
    /// How often frame statistics are logged
    pub stats_interval_ms: u64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: 10_000,
            fade_duration_ms: 2_000,
            spawn_interval_ms: 2_000,
            spawn_spread: 100.0,
            model_path: "assets/shooting_star.glb".to_string(),
            // #ffd700
            glow_color: [1.0, 215.0 / 255.0, 0.0],
            engine: EngineConfig::default(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            stats_interval_ms: 5_000,
        }
    }
}

impl Config for StarfieldConfig {}

impl StarfieldConfig {
    /// Check the constraints between the timing constants
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fade_timing()?;

        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::Invalid("spawn_interval_ms must be positive".to_string()));
        }
        if !self.spawn_spread.is_finite() || self.spawn_spread < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "spawn_spread must be a non-negative finite number, got {}",
                self.spawn_spread
            )));
        }
        if self.engine.target_fps == 0 {
            return Err(ConfigError::Invalid("engine.target_fps must be positive".to_string()));
        }
        Ok(())
    }

    /// Lifetime/fade pair used by the lifecycle pass
    pub fn fade_timing(&self) -> Result<FadeTiming, ConfigError> {
        FadeTiming::new(self.lifetime_ms, self.fade_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("starfield_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = StarfieldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.lifetime_ms, 10_000);
        assert_eq!(config.fade_duration_ms, 2_000);
        assert_eq!(config.spawn_interval_ms, 2_000);
    }

    #[test]
    fn test_fade_must_be_shorter_than_lifetime() {
        let config = StarfieldConfig {
            lifetime_ms: 2_000,
            fade_duration_ms: 2_000,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_spawn_interval_rejected() {
        let config = StarfieldConfig {
            spawn_interval_ms: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: StarfieldConfig = toml::from_str("lifetime_ms = 5000\n[engine]\ntarget_fps = 30\n")
            .expect("partial config parses");
        assert_eq!(config.lifetime_ms, 5_000);
        assert_eq!(config.fade_duration_ms, 2_000);
        assert_eq!(config.engine.target_fps, 30);
        assert_eq!(config.engine.stats_interval_ms, 5_000);
    }

    #[test]
    fn test_save_and_load_toml() {
        let path = temp_path("config.toml");
        let config = StarfieldConfig {
            spawn_interval_ms: 750,
            ..Default::default()
        };
        config.save_to_file(&path).expect("save");
        let loaded = StarfieldConfig::load_from_file(&path).expect("load");
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_ron() {
        let path = temp_path("config.ron");
        std::fs::write(&path, "(fade_duration_ms: 500, spawn_spread: 20.0)").expect("write");
        let loaded = StarfieldConfig::load_from_file(&path).expect("load");
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.fade_duration_ms, 500);
        assert_eq!(loaded.spawn_spread, 20.0);
        assert_eq!(loaded.lifetime_ms, 10_000);
    }

    #[test]
    fn test_unsupported_extension() {
        let path = temp_path("config.json");
        std::fs::write(&path, "{}").expect("write");
        let result = StarfieldConfig::load_from_file(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = StarfieldConfig::load_or_default(temp_path("missing.toml")).expect("defaults");
        assert_eq!(config, StarfieldConfig::default());
    }
}
