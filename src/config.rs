/// User settings
///
/// Read once at start-up from the platform config directory:
/// - Linux: ~/.config/creative-portfolio/config.json
/// - macOS: ~/Library/Application Support/creative-portfolio/config.json
/// - Windows: %APPDATA%\creative-portfolio\config.json
///
/// A missing file means defaults. Missing fields take their defaults too.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::ConfigError;

/// Color scheme for the whole window
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Violet,
    Dark,
}

/// Entrance motion settings
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct MotionSettings {
    /// When false, everything renders in its final state immediately
    pub enabled: bool,
    /// Delay added per card position
    pub card_stagger_ms: u64,
    /// Fade-in length of a single card
    pub card_duration_ms: u64,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            card_stagger_ms: 100,
            card_duration_ms: 500,
        }
    }
}

impl MotionSettings {
    pub fn card_stagger(&self) -> Duration {
        Duration::from_millis(self.card_stagger_ms)
    }

    pub fn card_duration(&self) -> Duration {
        Duration::from_millis(self.card_duration_ms)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeChoice,
    pub motion: MotionSettings,
    /// Replaces the embedded site content when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_path: Option<PathBuf>,
}

impl AppConfig {
    /// Where the config file is expected, if a config directory exists
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("creative-portfolio");
        path.push("config.json");
        Some(path)
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            debug!("no config directory, using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(Some(config)) => {
                info!(path = %path.display(), "loaded settings");
                config
            }
            Ok(None) => {
                debug!(path = %path.display(), "no config file, using default settings");
                Self::default()
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring config file");
                Self::default()
            }
        }
    }

    /// Read a config file; `Ok(None)` when it does not exist
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Some(Self::from_json(&json)?))
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.theme, ThemeChoice::Violet);
        assert!(config.motion.enabled);
        assert_eq!(config.motion.card_stagger(), Duration::from_millis(100));
        assert_eq!(config.motion.card_duration(), Duration::from_millis(500));
        assert_eq!(config.content_path, None);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = AppConfig::from_json(r#"{ "theme": "dark", "motion": { "enabled": false } }"#).unwrap();
        assert_eq!(config.theme, ThemeChoice::Dark);
        assert!(!config.motion.enabled);
        assert_eq!(config.motion.card_stagger_ms, 100);
    }

    #[test]
    fn test_serialization() {
        let mut config = AppConfig::default();
        config.motion.card_stagger_ms = 40;
        config.content_path = Some(PathBuf::from("/tmp/site.json"));

        let json = serde_json::to_string_pretty(&config).unwrap();
        let restored = AppConfig::from_json(&json).unwrap();

        assert_eq!(config, restored);
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let result = AppConfig::load_from(Path::new("/nonexistent/creative-portfolio/config.json"));
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_unknown_theme_rejected() {
        assert!(AppConfig::from_json(r#"{ "theme": "neon" }"#).is_err());
    }
}
