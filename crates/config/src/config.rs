//! Configuration management
//!
//! This module handles loading propex configuration and turning it into the
//! prototype namespace.
//!
//! ```toml
//! [general]
//! color = false
//!
//! # Default attribute values for built-in properties
//! [defaults."Misc.count"]
//! sep = ";"
//!
//! [defaults."Misc.replace.string"]
//! new = "_"
//! ```

use crate::Result;
use indexmap::IndexMap;
use propex_core::Error;
use propex_engine::PropertyMaps;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "PROPEX_CONFIG";

/// General configuration section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable colored output
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

/// Propex configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// General configuration section
    #[serde(default)]
    pub general: GeneralConfig,

    /// Attribute defaults keyed by `"<Category>.<name>"`
    #[serde(default)]
    pub defaults: IndexMap<String, IndexMap<String, String>>,
}

impl Config {
    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or TOML parsing fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        tracing::debug!("Loaded config from {}", path.display());
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse config file {}: {e}", path.display()))
        })
    }

    /// Load configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns error if TOML parsing fails
    pub fn from_toml_str(toml_content: &str) -> Result<Self> {
        toml::from_str(toml_content)
            .map_err(|e| Error::Config(format!("Failed to parse config TOML: {e}")))
    }

    /// Path of the config file to read, if any
    ///
    /// An explicit path wins, then [`CONFIG_ENV`], then the XDG default.
    /// The XDG default is only returned when the file exists.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(path));
        }
        crate::dirs::default_config_file().filter(|path| path.exists())
    }

    /// Load the located config file, or defaults when there is none
    ///
    /// # Errors
    ///
    /// Returns error if a located file cannot be read or parsed. A missing
    /// explicit or `PROPEX_CONFIG` file is an error; a missing XDG default
    /// is not.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        match Self::locate(explicit) {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Configured defaults as `(category, name, attribute, value)`
    ///
    /// Keys split at the first `.`, so `"Misc.replace.string"` names
    /// property `replace.string` in category `Misc`.
    ///
    /// # Errors
    ///
    /// Returns error for a key without a `.` or with an empty side.
    pub fn default_overrides(&self) -> Result<Vec<(&str, &str, &str, &str)>> {
        let mut overrides = Vec::new();
        for (key, attributes) in &self.defaults {
            let (category, name) = key
                .split_once('.')
                .filter(|(category, name)| !category.is_empty() && !name.is_empty())
                .ok_or_else(|| {
                    Error::Config(format!(
                        "Invalid defaults key '{key}', expected '<Category>.<name>'"
                    ))
                })?;
            for (attribute, value) in attributes {
                overrides.push((category, name, attribute.as_str(), value.as_str()));
            }
        }
        Ok(overrides)
    }

    /// Build the prototype namespace with configured defaults applied
    ///
    /// # Errors
    ///
    /// Returns error for malformed keys, unknown properties, or attributes
    /// outside a property's schema.
    pub fn build_namespace(&self) -> Result<PropertyMaps> {
        if self.defaults.is_empty() {
            return Ok(PropertyMaps::template().duplicate());
        }

        self.default_overrides()?
            .into_iter()
            .fold(PropertyMaps::builder(), |builder, (category, name, attribute, value)| {
                builder.with_default(category, name, attribute, value)
            })
            .build()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    // Helper function to create a test directory with a config file
    fn create_test_config(toml_content: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, toml_content).unwrap();
        (temp_dir, config_path)
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.general.color);
        assert!(config.defaults.is_empty());
    }

    #[test]
    fn test_load_empty_config() {
        let (_temp_dir, config_path) = create_test_config("");
        assert_eq!(Config::load(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_config_with_sections() {
        let toml = r#"
[general]
color = false

[defaults."Misc.count"]
sep = ";"

[defaults."Misc.replace.string"]
old = "-"
new = "_"
"#;
        let (_temp_dir, config_path) = create_test_config(toml);
        let config = Config::load(&config_path).unwrap();

        assert!(!config.general.color);
        assert_eq!(config.defaults["Misc.count"]["sep"], ";");
        assert_eq!(
            config.default_overrides().unwrap(),
            vec![
                ("Misc", "count", "sep", ";"),
                ("Misc", "replace.string", "old", "-"),
                ("Misc", "replace.string", "new", "_"),
            ]
        );
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let err = Config::load(temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(Config::from_toml_str("[general\ncolor = 1").is_err());
        assert!(Config::from_toml_str("[defaults.Misc.count]\nsep = \";\"").is_err());
    }

    #[test]
    fn test_malformed_defaults_key() {
        for key in ["count", ".count", "Misc."] {
            let config =
                Config::from_toml_str(&format!("[defaults.\"{key}\"]\nsep = \",\"")).unwrap();
            assert!(config.default_overrides().is_err(), "key {key:?}");
            assert!(config.build_namespace().is_err(), "key {key:?}");
        }
    }

    #[test]
    fn test_build_namespace_applies_defaults() {
        let config = Config::from_toml_str("[defaults.\"Misc.count\"]\nsep = \",\"").unwrap();
        let mut pm = config.build_namespace().unwrap();

        pm.property_mut("Misc", "count").unwrap().set_attribute("list", "a,b,c");
        assert_eq!(pm.current("Misc", "count").unwrap(), "3");
    }

    #[test]
    fn test_build_namespace_rejects_unknown_targets() {
        let config = Config::from_toml_str("[defaults.\"Misc.pow\"]\nop1 = \"1\"").unwrap();
        assert!(matches!(
            config.build_namespace(),
            Err(Error::PropertyNotFound { .. })
        ));

        let config = Config::from_toml_str("[defaults.\"Misc.add\"]\nop3 = \"1\"").unwrap();
        assert!(matches!(config.build_namespace(), Err(Error::Config(_))));
    }

    #[test]
    #[serial]
    fn test_locate_prefers_explicit_path() {
        let explicit = PathBuf::from("/explicit/config.toml");
        temp_env::with_var(CONFIG_ENV, Some("/from/env.toml"), || {
            assert_eq!(Config::locate(Some(explicit.as_path())), Some(explicit.clone()));
            assert_eq!(Config::locate(None), Some(PathBuf::from("/from/env.toml")));
        });
    }

    #[test]
    #[serial]
    fn test_missing_default_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        temp_env::with_vars(
            [
                (CONFIG_ENV, None),
                ("XDG_CONFIG_HOME", Some(temp.path().as_os_str())),
            ],
            || {
                assert_eq!(Config::locate(None), None);
                assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
            },
        );
    }

    #[test]
    #[serial]
    fn test_missing_env_file_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml");
        temp_env::with_var(CONFIG_ENV, Some(&missing), || {
            assert!(Config::load_or_default(None).is_err());
        });
    }
}
