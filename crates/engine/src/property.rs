//! Property nodes
//!
//! A [`Property`] binds one [`Operator`] to its own attribute state. It is
//! either complete (every schema attribute resolves) or incomplete, and that
//! is decided from scratch on every evaluation.
//!
//! ```
//! use propex_engine::{Operator, Property};
//!
//! let mut add = Property::new(Operator::Add);
//! assert!(add.current().starts_with("(add Error"));
//!
//! add.set_attribute("op1", "30");
//! add.set_attribute("op2", "1.23");
//! assert_eq!(add.current(), "31.23");
//!
//! add.reset_attributes();
//! assert!(!add.is_complete());
//! ```

use crate::attr::{AttrSpec, Attributes};
use crate::error::EvalError;
use crate::operator::Operator;

/// One named, attribute-configurable unit of computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    operator: Operator,
    attributes: Attributes,
}

impl Property {
    /// Create a property with the operator's declared defaults
    pub fn new(operator: Operator) -> Self {
        Self {
            operator,
            attributes: Attributes::from_schema(operator.schema()),
        }
    }

    /// Bound operator
    #[inline]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Registration category
    #[inline]
    pub fn category(&self) -> &'static str {
        self.operator.category()
    }

    /// Registration name
    #[inline]
    pub fn name(&self) -> &'static str {
        self.operator.name()
    }

    /// Declared attribute schema
    #[inline]
    pub fn schema(&self) -> &'static [AttrSpec] {
        self.operator.schema()
    }

    /// Attribute state
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Current value of an attribute, override or default
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Store an attribute value
    ///
    /// Nothing is validated here. Names outside the schema are kept but
    /// never read by evaluation.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.set(name, value);
    }

    /// Restore every attribute to its default
    pub fn reset_attributes(&mut self) {
        self.attributes.reset();
    }

    /// Schema attributes with no default, regardless of current overrides
    pub fn required(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.schema()
            .iter()
            .filter(|spec| self.attributes.default_of(spec.name).is_none())
            .map(|spec| spec.name)
    }

    /// Whether every schema attribute currently resolves
    pub fn is_complete(&self) -> bool {
        self.attributes.missing(self.schema()).is_empty()
    }

    /// Evaluate to a value or a structured reason
    pub fn evaluate(&self) -> Result<String, EvalError> {
        let missing = self.attributes.missing(self.schema());
        if !missing.is_empty() {
            return Err(EvalError::MissingAttributes(
                missing.into_iter().map(str::to_string).collect(),
            ));
        }
        self.operator.evaluate(&self.attributes)
    }

    /// Evaluate to text, rendering failures as `"(<name> Error: <reason>)"`
    ///
    /// Never mutates attribute state, so repeated calls agree.
    pub fn current(&self) -> String {
        self.evaluate().unwrap_or_else(|err| {
            tracing::debug!(
                category = self.category(),
                property = self.name(),
                "evaluation failed: {}",
                err
            );
            err.render(self.name())
        })
    }

    pub(crate) fn set_default(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.set_default(name, value);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_missing_reason_names_attributes() {
        let mut div = Property::new(Operator::Div);
        assert_eq!(
            div.current(),
            "(div Error: missing required attribute(s): op1, op2)"
        );
        div.set_attribute("op2", "2");
        assert_eq!(div.current(), "(div Error: missing required attribute(s): op1)");
    }

    #[test]
    fn test_current_is_stable() {
        let mut mul = Property::new(Operator::Mul);
        mul.set_attribute("op1", "30.2");
        mul.set_attribute("op2", "3");
        let first = mul.current();
        assert_eq!(first, "90.6");
        assert_eq!(mul.current(), first);
        assert_eq!(mul.attribute("op1"), Some("30.2"));
    }

    #[test]
    fn test_reset_matches_fresh_node() {
        let mut sub = Property::new(Operator::Sub);
        sub.set_attribute("op1", "x");
        sub.set_attribute("extra", "ignored");
        sub.reset_attributes();
        assert_eq!(sub, Property::new(Operator::Sub));

        sub.set_attribute("op1", "30");
        sub.set_attribute("op2", "2");
        let mut fresh = Property::new(Operator::Sub);
        fresh.set_attribute("op1", "30");
        fresh.set_attribute("op2", "2");
        assert_eq!(sub.current(), fresh.current());
    }

    #[test]
    fn test_required_ignores_overrides() {
        let mut count = Property::new(Operator::Count);
        count.set_attribute("list", "a");
        assert_eq!(count.required().collect::<Vec<_>>(), vec!["list"]);
        assert!(count.is_complete());
    }

    #[test]
    fn test_error_uses_operator_name() {
        let mut replace = Property::new(Operator::ReplaceString);
        replace.set_attribute("text", "abc");
        assert!(replace.current().starts_with("(replace.string Error"));
    }
}
