//! Core types and utilities for propex
//!
//! This is the foundation crate that all other propex crates depend on.
//! It provides:
//! - Base error types
//! - Platform detection and separator constants
//!
//! This crate has no dependencies on other propex crates.

pub mod error;
pub mod platform;

pub use error::{Error, Result};
