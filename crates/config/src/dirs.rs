//! XDG directory utilities
//!
//! Configuration lives under `$XDG_CONFIG_HOME/propex` (usually
//! `~/.config/propex`), resolved with the `xdg` crate.

use std::path::PathBuf;
use xdg::BaseDirectories;

/// Get the propex config directory
///
/// Returns `$XDG_CONFIG_HOME/propex` or `~/.config/propex`
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    BaseDirectories::with_prefix("propex").get_config_home()
}

/// Get the default config file path
///
/// Returns `$XDG_CONFIG_HOME/propex/config.toml` or `~/.config/propex/config.toml`
#[must_use]
pub fn default_config_file() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_dir_follows_xdg_config_home() {
        let temp = tempfile::TempDir::new().unwrap();
        temp_env::with_var("XDG_CONFIG_HOME", Some(temp.path()), || {
            let dir = config_dir().unwrap();
            assert!(dir.starts_with(temp.path()), "{dir:?}");
            assert!(dir.ends_with("propex"), "{dir:?}");
        });
    }

    #[test]
    #[serial]
    fn test_default_config_file_is_child_of_config_dir() {
        let config = default_config_file();
        let dir = config_dir();

        if let (Some(file), Some(dir)) = (config, dir) {
            assert!(file.starts_with(&dir));
            assert_eq!(file.file_name().and_then(|n| n.to_str()), Some("config.toml"));
        }
    }
}
