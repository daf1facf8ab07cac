//! # Dashboard Configuration
//!
//! Optional YAML settings read once at startup from the platform config
//! directory (`dashboard.yaml`). Every field has a built-in default, so a
//! missing or partial file is fine.
//!
//! ```yaml
//! defaults:
//!   balance: 5000.0
//!   savings_goal: 2500.0
//! window:
//!   width: 900.0
//!   height: 650.0
//! sample_seed: 42
//! # or replay fixed chart samples instead of random ones:
//! # sample_sequence: [20, 45, 80, 60]
//! ```

use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use shared::InputDefaults;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "dashboard.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Initial window size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 650.0,
        }
    }
}

/// Top-level dashboard settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Values used when an input field is left blank
    pub defaults: InputDefaults,
    pub window: WindowConfig,
    /// Fixed seed for the chart sample generator; random when absent
    pub sample_seed: Option<u64>,
    /// Chart samples replayed in order (wrapping) instead of random values
    pub sample_sequence: Option<Vec<u32>>,
}

impl DashboardConfig {
    /// Location of `dashboard.yaml` in the platform config directory
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "FinanceDashboard", "finance-dashboard")
            .ok_or_else(|| anyhow!("Could not determine a home directory for config lookup"))?;
        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, or built-in defaults if no file exists
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Ok(Self::load_from_path(&path)?)
    }

    /// Load from `path`; a missing file yields built-in defaults
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("⚙️ No config file at {:?}, using built-in defaults", path);
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: DashboardConfig =
            serde_yaml::from_str(&yaml_content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        info!("⚙️ Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load from the default location, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("⚠️ Ignoring dashboard config: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = DashboardConfig::load_from_path(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();

        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.defaults.balance, 5000.0);
        assert_eq!(config.window.width, 900.0);
        assert_eq!(config.sample_seed, None);
    }

    #[test]
    fn test_partial_file_overrides_named_fields_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "defaults:\n  savings_goal: 2500.0\nsample_seed: 42\n").unwrap();

        let config = DashboardConfig::load_from_path(&path).unwrap();

        assert_eq!(config.defaults.savings_goal, 2500.0);
        assert_eq!(config.defaults.balance, 5000.0);
        assert_eq!(config.defaults.income, 3000.0);
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.sample_seed, Some(42));
        assert_eq!(config.sample_sequence, None);
    }

    #[test]
    fn test_sample_sequence_and_window() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "window:\n  width: 1024\nsample_sequence: [20, 45, 80]\n").unwrap();

        let config = DashboardConfig::load_from_path(&path).unwrap();

        assert_eq!(config.window.width, 1024.0);
        assert_eq!(config.window.height, 650.0);
        assert_eq!(config.sample_sequence, Some(vec![20, 45, 80]));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "defaults: [not, a, mapping]\n").unwrap();

        let result = DashboardConfig::load_from_path(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_directory_in_place_of_file_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::create_dir(&path).unwrap();

        let result = DashboardConfig::load_from_path(&path);
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
