//! Eval command implementation
//!
//! Evaluate one property with attribute values from the command line.

use clap::Args;
use indexmap::IndexMap;
use owo_colors::OwoColorize;
use propex_engine::PropertyMaps;
use serde::Serialize;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::{CommandError, Result};

/// Eval command arguments
#[derive(Debug, Args)]
pub struct EvalCommand {
    /// Property category (e.g. Misc)
    pub category: String,

    /// Property name (e.g. add)
    pub name: String,

    /// Attribute values, each as ATTR=VALUE
    #[arg(value_name = "ATTR=VALUE", value_parser = parse_assignment)]
    pub attributes: Vec<(String, String)>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Exit with an error when the result is an error value
    #[arg(long)]
    pub strict: bool,
}

/// Outcome of one evaluation
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    category: String,
    name: String,
    /// Effective schema attributes, `null` when unset
    attributes: IndexMap<String, Option<String>>,
    /// Property value, or the rendered error value
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Evaluation {
    /// Property value, or the rendered error value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Failure reason, if the value is an error value
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Command for EvalCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let evaluation = self.evaluate(context.namespace())?;

        if self.strict
            && let Some(reason) = evaluation.error()
        {
            return Err(CommandError::EvaluationFailed {
                category: self.category.clone(),
                name: self.name.clone(),
                reason: reason.to_string(),
            });
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&evaluation)?);
        } else if evaluation.error.is_some() {
            println!("{}", evaluation.value.style(context.theme().error));
        } else {
            println!("{}", evaluation.value);
        }

        Ok(())
    }
}

impl EvalCommand {
    /// Evaluate against a duplicate of `namespace`
    ///
    /// # Errors
    ///
    /// Returns error if no property is registered under the requested key.
    /// Evaluation failures are reported inside the [`Evaluation`].
    pub fn evaluate(&self, namespace: &PropertyMaps) -> Result<Evaluation> {
        let mut namespace = namespace.duplicate();
        let property = namespace.property_mut(&self.category, &self.name)?;

        for (attribute, value) in &self.attributes {
            if !property
                .schema()
                .iter()
                .any(|spec| spec.name == attribute.as_str())
            {
                tracing::warn!(
                    "{}.{} has no attribute '{}', it will be ignored",
                    self.category,
                    self.name,
                    attribute
                );
            }
            property.set_attribute(attribute.as_str(), value.as_str());
        }

        let attributes = property
            .schema()
            .iter()
            .map(|spec| {
                (
                    spec.name.to_string(),
                    property.attribute(spec.name).map(str::to_string),
                )
            })
            .collect();

        let (value, error) = match property.evaluate() {
            Ok(value) => (value, None),
            Err(err) => {
                tracing::debug!("{}.{} evaluated to an error: {}", self.category, self.name, err);
                (err.render(property.name()), Some(err.to_string()))
            }
        };

        Ok(Evaluation {
            category: self.category.clone(),
            name: self.name.clone(),
            attributes,
            value,
            error,
        })
    }
}

/// Parse an `ATTR=VALUE` argument
///
/// The value may be empty and may itself contain `=`.
fn parse_assignment(arg: &str) -> Result<(String, String)> {
    match arg.split_once('=') {
        Some((attribute, value)) if !attribute.is_empty() => {
            Ok((attribute.to_string(), value.to_string()))
        }
        _ => Err(CommandError::InvalidAssignment(arg.to_string())),
    }
}
