//! Evaluation error reasons
//!
//! Evaluation never fails hard. An operator returns one of these reasons and
//! the property renders it as `"(<name> Error: <reason>)"`, so a bad
//! sub-expression still yields an inspectable string.

use thiserror::Error;

/// Why a property could not produce a value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Required attributes with neither an override nor a default
    #[error("missing required attribute(s): {}", .0.join(", "))]
    MissingAttributes(Vec<String>),

    /// An attribute is present but outside the operator's domain
    #[error("invalid value '{value}' for attribute '{attribute}', expected {expected}")]
    InvalidOperand {
        /// Attribute name
        attribute: String,
        /// Offending text
        value: String,
        /// What the operator accepts
        expected: &'static str,
    },

    /// Numeric division with a zero divisor
    #[error("division by zero")]
    DivisionByZero,
}

impl EvalError {
    /// Create an `InvalidOperand` error
    pub fn invalid(attribute: &str, value: &str, expected: &'static str) -> Self {
        Self::InvalidOperand {
            attribute: attribute.to_string(),
            value: value.to_string(),
            expected,
        }
    }

    /// Render the reason the way callers pattern-match on it
    ///
    /// ```
    /// use propex_engine::EvalError;
    ///
    /// let err = EvalError::DivisionByZero;
    /// assert_eq!(err.render("div"), "(div Error: division by zero)");
    /// ```
    pub fn render(&self, operator: &str) -> String {
        format!("({operator} Error: {self})")
    }
}
