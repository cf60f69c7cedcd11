//! Propex CLI library
//!
//! This library contains all the CLI logic for propex, making it reusable
//! for testing and integration with other tools.

pub mod cmd;
pub mod command;
pub mod common;
pub mod error;
pub mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use command::Command;
use common::RuntimeContext;

/// Propex - evaluate property macros
#[derive(Parser)]
#[command(name = "propex")]
#[command(about = "Evaluate built-in property macros")]
#[command(version)]
#[command(long_about = "Evaluate built-in property macros

Properties are named computations grouped in categories. Each one reads
string attributes and evaluates to a string. Malformed input never aborts
an evaluation; it yields a value of the form \"(<name> Error: <reason>)\".

Examples:
  • propex eval Misc add op1=30 op2=1.23
      → 31.23

  • propex eval Misc count list='a b c' sep=' '
      → 3

  • propex list --category Misc")]
pub struct Cli {
    /// Path to the config file
    #[arg(long, env = "PROPEX_CONFIG", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "PROPEX_LOG_FILE", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for propex CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate one property
    Eval(cmd::eval::EvalCommand),

    /// List properties and their attributes
    List(cmd::list::ListCommand),
}

/// Execute the command based on the command type
fn execute_command(command: &Commands, context: &RuntimeContext) -> Result<()> {
    match command {
        Commands::Eval(eval_cmd) => eval_cmd.execute(context)?,
        Commands::List(list_cmd) => list_cmd.execute(context)?,
    }
    Ok(())
}

/// Main entry point for the CLI logic
///
/// # Errors
///
/// Returns an error if:
/// - Logging initialization fails
/// - Configuration loading fails
/// - Command execution fails
pub fn run(cli: Cli) -> Result<()> {
    propex_config::logging::init(cli.verbose, cli.log_file.as_deref())?;

    let config = propex_config::Config::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let context = RuntimeContext::new(config).context("Invalid property defaults in config")?;

    execute_command(&cli.command, &context)
}
