//! Platform detection and separator constants
//!
//! Provides OS and architecture information using standard Unix conventions:
//! - macOS → `"darwin"` (kernel name)
//! - Linux → `"linux"`
//! - Windows → `"windows"`
//!
//! The separators are the ones a spawned process on this platform expects,
//! so list-valued properties default to them.

use std::sync::LazyLock;

/// Separator between entries of a search path (`PATH`, class paths)
#[cfg(windows)]
pub const PATH_SEPARATOR: &str = ";";
/// Separator between entries of a search path (`PATH`, class paths)
#[cfg(not(windows))]
pub const PATH_SEPARATOR: &str = ":";

/// Separator between components of a file path
pub const FILE_SEPARATOR: &str = std::path::MAIN_SEPARATOR_STR;

/// Line terminator used by text files on this platform
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Line terminator used by text files on this platform
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Current platform information (cached)
///
/// # Example
/// ```
/// use propex_core::platform::CURRENT_PLATFORM;
///
/// let label = format!("{}-{}", CURRENT_PLATFORM.os, CURRENT_PLATFORM.arch);
/// assert!(!label.is_empty());
/// ```
pub static CURRENT_PLATFORM: LazyLock<Platform> = LazyLock::new(Platform::detect);

/// Platform information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    /// OS: "darwin" (macOS), "linux", "windows", "unknown"
    pub os: &'static str,
    /// CPU architecture: "x86_64", "aarch64", etc.
    pub arch: &'static str,
}

impl Platform {
    /// Detect the platform this binary was compiled for
    pub fn detect() -> Self {
        Self {
            os: Self::detect_os(),
            arch: std::env::consts::ARCH,
        }
    }

    const fn detect_os() -> &'static str {
        #[cfg(target_os = "macos")]
        {
            "darwin"
        }

        #[cfg(target_os = "linux")]
        {
            "linux"
        }

        #[cfg(target_os = "windows")]
        {
            "windows"
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            "unknown"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_separator_is_single_char() {
        assert_eq!(PATH_SEPARATOR.chars().count(), 1);
        assert_ne!(PATH_SEPARATOR, FILE_SEPARATOR);
    }

    #[test]
    fn test_detect_matches_cached() {
        assert_eq!(Platform::detect(), *CURRENT_PLATFORM);
        #[cfg(target_os = "linux")]
        assert_eq!(CURRENT_PLATFORM.os, "linux");
    }
}
