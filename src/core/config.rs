//! Session configuration loading

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::brush::BrushParameters;
use crate::core::error::Error;
use crate::core::types::Result;

/// Configuration for a paint session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Buffer stroke points until pointer release instead of painting on every move
    pub delayed_paint: bool,
    /// Initial brush parameters
    pub brush: BrushParameters,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            delayed_paint: true,
            brush: BrushParameters::default(),
        }
    }
}

impl SessionConfig {
    /// Parse a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Serialize the config to a JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load a config from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded session config from: {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert!(config.delayed_paint);
        assert!(!config.brush.pixel_mode);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = SessionConfig::default();
        config.delayed_paint = false;
        config.brush.radius = 7.5;

        let json = config.to_json().unwrap();
        let parsed = SessionConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed = SessionConfig::from_json(r#"{"delayed_paint": false}"#).unwrap();
        assert!(!parsed.delayed_paint);
        assert_eq!(parsed.brush, BrushParameters::default());
    }

    #[test]
    fn test_invalid_json() {
        assert!(SessionConfig::from_json("not json").is_err());
    }
}
