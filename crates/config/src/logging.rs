//! Logging configuration for the propex CLI
//!
//! Diagnostics go to stderr so evaluated values on stdout stay clean.
//! An optional log file receives everything at debug level.

use crate::{Error, Result};
use std::path::Path;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Crates whose events pass the default filter
const TARGETS: &[&str] = &["propex", "propex_engine", "propex_config"];

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable debug level logging with timestamps
/// * `log_file` - Optional path to append logs to
///
/// `RUST_LOG` overrides the level derived from `verbose`.
///
/// # Examples
/// ```ignore
/// // Basic usage with info level
/// init(false, None)?;
///
/// // Write logs to file
/// init(true, Some(Path::new("propex.log")))?;
/// ```
///
/// # Errors
///
/// Returns error if the log file cannot be opened, a filter is invalid,
/// or a global subscriber is already installed.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(&default_directives(level))?,
    };

    let stderr_layer: Box<dyn Layer<Registry> + Send + Sync> = if verbose {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .with_filter(env_filter)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .compact()
            .with_filter(env_filter)
            .boxed()
    };

    let file_layer = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            Some(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .with_filter(parse_filter("debug")?),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to initialize logging: {e}")))
}

fn default_directives(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .map_err(|e| Error::Config(format!("Invalid log filter '{directives}': {e}")))
}
