//! Configuration management for the zoom tester
//!
//! Provides loading, saving, and validation for the tuning knobs: zoom
//! step sizes, the pinch gesture multiplier, and the preview size
//! selection tolerance.

use crate::errors::CameraError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoomCheckConfig {
    pub zoom: ZoomStepConfig,
    pub gesture: GestureConfig,
    pub preview: PreviewConfig,
}

/// Button-driven zoom stepping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoomStepConfig {
    /// Zoom levels added per zoom-in press
    pub increment_step: i32,
    /// Zoom levels added per zoom-out press (negative)
    pub decrement_step: i32,
}

/// Pinch gesture mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Multiplier applied to the natural log of a pinch scale factor
    pub scale_multiplier: f64,
}

/// Preview size negotiation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// How far a size's height/width ratio may drift from the target's
    /// before the first selection pass excludes it
    pub aspect_tolerance: f64,
}

impl Default for ZoomStepConfig {
    fn default() -> Self {
        Self {
            increment_step: 2,
            decrement_step: -2,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            scale_multiplier: 100.0,
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            aspect_tolerance: 0.1,
        }
    }
}

impl Default for ZoomCheckConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomStepConfig::default(),
            gesture: GestureConfig::default(),
            preview: PreviewConfig::default(),
        }
    }
}

impl ZoomCheckConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CameraError> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| CameraError::ConfigError(format!("Failed to read config file: {}", e)))?;

        let config: ZoomCheckConfig = toml::from_str(&contents)
            .map_err(|e| CameraError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CameraError> {
        let path = path.as_ref();

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CameraError::ConfigError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| CameraError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, toml_string)
            .map_err(|e| CameraError::ConfigError(format!("Failed to write config file: {}", e)))?;

        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Get default config file path
    pub fn default_path() -> PathBuf {
        PathBuf::from("zoomcheck.toml")
    }

    /// Load from default location or create with defaults
    pub fn load_or_default() -> Self {
        Self::load_from_file(Self::default_path()).unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.zoom.increment_step <= 0 {
            return Err("Zoom increment step must be positive".to_string());
        }
        if self.zoom.decrement_step >= 0 {
            return Err("Zoom decrement step must be negative".to_string());
        }

        if !self.gesture.scale_multiplier.is_finite() || self.gesture.scale_multiplier <= 0.0 {
            return Err("Gesture scale multiplier must be positive and finite".to_string());
        }

        if !self.preview.aspect_tolerance.is_finite() || self.preview.aspect_tolerance <= 0.0 {
            return Err("Aspect tolerance must be positive and finite".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ZoomCheckConfig::default();
        assert_eq!(config.zoom.increment_step, 2);
        assert_eq!(config.zoom.decrement_step, -2);
        assert_eq!(config.gesture.scale_multiplier, 100.0);
        assert_eq!(config.preview.aspect_tolerance, 0.1);
    }

    #[test]
    fn test_config_validation() {
        let config = ZoomCheckConfig::default();
        assert!(config.validate().is_ok());

        let mut bad_step = config.clone();
        bad_step.zoom.increment_step = 0;
        assert!(bad_step.validate().is_err());

        let mut bad_decrement = ZoomCheckConfig::default();
        bad_decrement.zoom.decrement_step = 2;
        assert!(bad_decrement.validate().is_err());

        let mut bad_multiplier = ZoomCheckConfig::default();
        bad_multiplier.gesture.scale_multiplier = f64::NAN;
        assert!(bad_multiplier.validate().is_err());

        let mut bad_tolerance = ZoomCheckConfig::default();
        bad_tolerance.preview.aspect_tolerance = -0.1;
        assert!(bad_tolerance.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("test_zoomcheck.toml");

        let mut config = ZoomCheckConfig::default();
        config.zoom.increment_step = 5;
        config.zoom.decrement_step = -5;
        assert!(config.save_to_file(&config_path).is_ok());

        let loaded = ZoomCheckConfig::load_from_file(&config_path).unwrap();
        assert_eq!(loaded.zoom.increment_step, 5);
        assert_eq!(loaded.zoom.decrement_step, -5);
        assert_eq!(loaded.gesture.scale_multiplier, config.gesture.scale_multiplier);
    }

    #[test]
    fn test_config_toml_format() {
        let config = ZoomCheckConfig::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        // Verify TOML contains expected sections
        assert!(toml_string.contains("[zoom]"));
        assert!(toml_string.contains("[gesture]"));
        assert!(toml_string.contains("[preview]"));
        assert!(toml_string.contains("increment_step"));
        assert!(toml_string.contains("scale_multiplier"));
        assert!(toml_string.contains("aspect_tolerance"));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ZoomCheckConfig::load_from_file("nonexistent_file.toml");
        assert!(result.is_ok()); // Should return default
        assert_eq!(result.unwrap().zoom.increment_step, 2);
    }
}
