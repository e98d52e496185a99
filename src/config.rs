//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory resolution.
//! All values are optional defaults; command-line arguments override them.

use crate::constants::APP_NAME;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Keymap source file (e.g. `keymaps/default/keymap.c`)
    pub keymap: Option<PathBuf>,
    /// KLE diagram template file (e.g. `assets/layouts/source/Qwerty.js`)
    pub diagram_template: Option<PathBuf>,
    /// Directory the rendered per-layer diagrams are written to
    pub output_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system locations
    #[serde(default)]
    pub paths: PathConfig,
}

impl Config {
    /// Gets the platform-specific configuration directory.
    ///
    /// - Linux: `~/.config/LayerSmith/`
    /// - macOS: `~/Library/Application Support/LayerSmith/`
    /// - Windows: `%APPDATA%\LayerSmith\`
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_NAME))
            .context("Could not determine platform config directory")
    }

    /// Gets the configuration file path.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Checks whether a configuration file exists.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path().is_ok_and(|path| path.exists())
    }

    /// Loads the configuration from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Saves the configuration to the default location, creating the config
    /// directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;
        self.save_to(&path)
    }

    /// Saves the configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_has_no_paths() {
        let config = Config::default();
        assert_eq!(config.paths.keymap, None);
        assert_eq!(config.paths.diagram_template, None);
        assert_eq!(config.paths.output_dir, None);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        let config = Config {
            paths: PathConfig {
                keymap: Some(PathBuf::from("keymaps/default/keymap.c")),
                diagram_template: Some(PathBuf::from("assets/Qwerty.js")),
                output_dir: Some(PathBuf::from("out")),
            },
        };

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[paths]\nkeymap = \"keymap.c\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.paths.keymap, Some(PathBuf::from("keymap.c")));
        assert_eq!(config.paths.output_dir, None);
    }

    #[test]
    fn test_load_empty_file_is_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "paths = not valid").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
