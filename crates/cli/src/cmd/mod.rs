//! CLI command implementations
//!
//! This module contains all command implementations for the propex CLI.

pub mod eval;
pub mod list;
