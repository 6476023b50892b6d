//! TOML-based application configuration.
//!
//! Stores the remote store endpoint plus local preferences:
//! - Project URL and anon key of the hosted backend
//! - Daily hydration and step goals
//! - Default breathing pattern
//!
//! Configuration is stored at `~/.config/dearself/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

use super::data_dir;
use crate::error::{ConfigError, Result};

/// Remote store endpoint configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`.
    #[serde(default)]
    pub url: String,
    /// Public anon key; per-user access still requires a signed-in session.
    #[serde(default)]
    pub anon_key: String,
}

impl StoreConfig {
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// Parsed base URL, or `StoreNotConfigured`/`ParseFailed`.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::StoreNotConfigured);
        }
        Url::parse(&self.url).map_err(|e| ConfigError::ParseFailed(format!("store url: {e}")))
    }
}

/// Daily wellness goals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalsConfig {
    #[serde(default = "default_hydration_ml")]
    pub hydration_ml: i64,
    #[serde(default = "default_steps")]
    pub steps: i64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/dearself/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub goals: GoalsConfig,
    /// Catalog pattern preselected on the breathe screen.
    #[serde(default = "default_pattern")]
    pub default_pattern: String,
}

fn default_hydration_ml() -> i64 {
    2000
}

fn default_steps() -> i64 {
    10_000
}

fn default_pattern() -> String {
    "4-7-8 Relaxation".to_string()
}

impl Default for GoalsConfig {
    fn default() -> Self {
        Self {
            hydration_ml: default_hydration_ml(),
            steps: default_steps(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            goals: GoalsConfig::default(),
            default_pattern: default_pattern(),
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let config = toml::from_str(&raw).map_err(|e| ConfigError::LoadFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.goals.hydration_ml, 2000);
        assert_eq!(config.goals.steps, 10_000);
        assert!(!config.store.is_configured());
    }

    #[test]
    fn empty_toml_fills_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.goals.steps, 10_000);
        assert_eq!(config.default_pattern, "4-7-8 Relaxation");
    }

    #[test]
    fn round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.store.url = "https://example.supabase.co".to_string();
        config.store.anon_key = "anon".to_string();
        config.goals.hydration_ml = 2500;
        config.save_to(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let loaded: Config = toml::from_str(&raw).unwrap();
        assert_eq!(loaded.store.url, "https://example.supabase.co");
        assert_eq!(loaded.goals.hydration_ml, 2500);
        assert!(loaded.store.is_configured());
        assert!(loaded.store.base_url().is_ok());
    }

    #[test]
    fn unconfigured_store_refuses_base_url() {
        let config = Config::default();
        assert!(matches!(
            config.store.base_url(),
            Err(ConfigError::StoreNotConfigured)
        ));
    }
}
