//! # Propex Engine
//!
//! Property evaluation engine for propex.
//!
//! This crate provides the pieces used to build dynamic command strings:
//!
//! - **Namespaces**: Registries of properties keyed by category and name,
//!   duplicated per evaluation context
//! - **Properties**: Attribute-configurable computation nodes evaluating to text
//! - **Operators**: The built-in catalog (arithmetic, comparison, boolean,
//!   string and delimited-list operators)
//! - **Numeric coercion**: Exact integer/decimal operands and their formatting
//!
//! Malformed input never fails an evaluation. It produces a string of the form
//! `"(<operator> Error: <reason>)"` that callers can detect by prefix.

pub mod attr;
pub mod error;
pub mod list;
pub mod maps;
pub mod numeric;
pub mod operator;
pub mod property;

// Re-export error types from core
pub use propex_core::{Error, Result};

// Re-export commonly used types
pub use attr::{AttrSpec, Attributes};
pub use error::EvalError;
pub use maps::{PropertyMaps, PropertyMapsBuilder};
pub use numeric::Number;
pub use operator::Operator;
pub use property::Property;
