//! Property attributes
//!
//! Every property carries a bag of named string attributes. Each operator
//! declares a schema of [`AttrSpec`] entries; an entry without a default is
//! required. Values are stored as text and only interpreted at evaluation
//! time, so setting an attribute never fails.
//!
//! # Resolution
//!
//! An attribute resolves to its override if one was set, otherwise to its
//! default. Resetting drops every override.
//!
//! ```
//! use propex_engine::attr::{AttrSpec, Attributes};
//!
//! const SCHEMA: &[AttrSpec] = &[AttrSpec::required("list"), AttrSpec::optional("sep", ",")];
//!
//! let mut attrs = Attributes::from_schema(SCHEMA);
//! assert_eq!(attrs.missing(SCHEMA), vec!["list"]);
//!
//! attrs.set("list", "a,b");
//! attrs.set("sep", ";");
//! assert_eq!(attrs.get("sep"), Some(";"));
//!
//! attrs.reset();
//! assert_eq!(attrs.get("sep"), Some(","));
//! assert_eq!(attrs.get("list"), None);
//! ```

use crate::error::EvalError;
use indexmap::IndexMap;

/// One entry of an operator's attribute schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttrSpec {
    /// Attribute name
    pub name: &'static str,
    /// Declared default, `None` for required attributes
    pub default: Option<&'static str>,
}

impl AttrSpec {
    /// An attribute that must be set before evaluation succeeds
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            default: None,
        }
    }

    /// An attribute that falls back to `default`
    pub const fn optional(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            default: Some(default),
        }
    }
}

/// Defaults plus overrides for one property
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    defaults: IndexMap<String, String>,
    overrides: IndexMap<String, String>,
}

impl Attributes {
    /// Create attributes holding the schema's declared defaults
    pub fn from_schema(schema: &[AttrSpec]) -> Self {
        let defaults = schema
            .iter()
            .filter_map(|spec| spec.default.map(|value| (spec.name.to_string(), value.to_string())))
            .collect();

        Self {
            defaults,
            overrides: IndexMap::new(),
        }
    }

    /// Store `value` under `name`, replacing any default or earlier override
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.overrides.insert(name.into(), value.into());
    }

    /// Drop every override
    pub fn reset(&mut self) {
        self.overrides.clear();
    }

    /// Current value: the override if set, otherwise the default
    pub fn get(&self, name: &str) -> Option<&str> {
        self.overrides
            .get(name)
            .or_else(|| self.defaults.get(name))
            .map(String::as_str)
    }

    /// Default value of `name`, ignoring overrides
    pub fn default_of(&self, name: &str) -> Option<&str> {
        self.defaults.get(name).map(String::as_str)
    }

    /// Current value of a required attribute
    pub fn require(&self, name: &str) -> Result<&str, EvalError> {
        self.get(name)
            .ok_or_else(|| EvalError::MissingAttributes(vec![name.to_string()]))
    }

    /// Schema attributes that currently resolve to nothing
    pub fn missing(&self, schema: &[AttrSpec]) -> Vec<&'static str> {
        schema
            .iter()
            .filter(|spec| self.get(spec.name).is_none())
            .map(|spec| spec.name)
            .collect()
    }

    /// Explicitly set attributes, in the order they were first set
    pub fn overrides(&self) -> impl Iterator<Item = (&str, &str)> {
        self.overrides
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Replace the default of `name`
    ///
    /// Only used while a namespace prototype is being built; once a
    /// property is handed out its defaults are fixed.
    pub(crate) fn set_default(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.defaults.insert(name.into(), value.into());
    }
}
