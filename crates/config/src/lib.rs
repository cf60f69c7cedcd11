//! Configuration management for propex
//!
//! This crate handles:
//! - Configuration loading and validation
//! - XDG directory management
//! - Building the prototype namespace from configured defaults
//! - Logging initialization

pub mod config;
pub mod dirs;
pub mod logging;

// Re-export error types from core
pub use propex_core::{Error, Result};

// Re-export main types
pub use config::{CONFIG_ENV, Config, GeneralConfig};
pub use dirs::{config_dir, default_config_file};
