//! User configuration file handling
//!
//! Reads settings from ~/.config/fluent-theme/settings.json. The file is
//! never written by this crate.

use crate::ui::theme_system::ThemeVariant;
use bevy::log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration from ~/.config/fluent-theme/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Default theme to use ("dark" or "light")
    pub default_theme: Option<String>,
}

impl ConfigFile {
    /// Get the path to the fluent-theme config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("fluent-theme")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`
    ///
    /// A missing file is not an error. Unreadable or malformed files are
    /// logged and treated as absent.
    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", path, e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read {:?}: {}", path, e);
                None
            }
        }
    }

    /// The configured theme variant, if it names a known one
    pub fn theme_variant(&self) -> Option<ThemeVariant> {
        let name = self.default_theme.as_deref()?;
        let variant = ThemeVariant::parse(name);
        if variant.is_none() {
            warn!(
                "Ignoring unknown default_theme '{}' in settings (available: {})",
                name,
                ThemeVariant::all_names().join(", ")
            );
        }
        variant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(ConfigFile::load_from(&dir.path().join("settings.json")), None);
    }

    #[test]
    fn reads_default_theme() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "default_theme": "light" }}"#).unwrap();

        let config = ConfigFile::load_from(file.path()).unwrap();
        assert_eq!(config.default_theme.as_deref(), Some("light"));
        assert_eq!(config.theme_variant(), Some(ThemeVariant::Light));
    }

    #[test]
    fn malformed_file_is_ignored() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert_eq!(ConfigFile::load_from(file.path()), None);
    }

    #[test]
    fn unknown_theme_name_is_ignored() {
        let config = ConfigFile {
            default_theme: Some("campfire".to_string()),
        };
        assert_eq!(config.theme_variant(), None);
        assert_eq!(ConfigFile::default().theme_variant(), None);
    }
}
