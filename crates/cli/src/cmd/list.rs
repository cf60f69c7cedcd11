//! List command implementation
//!
//! Display the registered properties and their attribute schemas.

use clap::Args;
use owo_colors::OwoColorize;
use propex_engine::{Property, PropertyMaps};
use serde::Serialize;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::{CommandError, Result};
use crate::ui::Theme;

/// List command arguments
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only list properties of this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Listing entry for one property
#[derive(Debug, Serialize)]
pub struct PropertyInfo {
    category: &'static str,
    name: &'static str,
    attributes: Vec<AttributeInfo>,
}

/// Listing entry for one schema attribute
#[derive(Debug, Serialize)]
struct AttributeInfo {
    name: &'static str,
    required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<String>,
}

impl From<&Property> for PropertyInfo {
    fn from(property: &Property) -> Self {
        let attributes = property
            .schema()
            .iter()
            .map(|spec| {
                let default = property
                    .attributes()
                    .default_of(spec.name)
                    .map(str::to_string);
                AttributeInfo {
                    name: spec.name,
                    required: default.is_none(),
                    default,
                }
            })
            .collect();

        Self {
            category: property.category(),
            name: property.name(),
            attributes,
        }
    }
}

impl Command for ListCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let properties = self.collect(context.namespace())?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&properties)?);
        } else {
            output_pretty(&properties, context.theme());
        }

        Ok(())
    }
}

impl ListCommand {
    /// Gather listing entries, in registration order
    ///
    /// # Errors
    ///
    /// Returns error if a category filter matches no property.
    pub fn collect(&self, namespace: &PropertyMaps) -> Result<Vec<PropertyInfo>> {
        let properties: Vec<PropertyInfo> = match &self.category {
            Some(category) => namespace
                .properties_in(category)
                .map(PropertyInfo::from)
                .collect(),
            None => namespace.properties().map(PropertyInfo::from).collect(),
        };

        if let Some(category) = &self.category
            && properties.is_empty()
        {
            return Err(CommandError::UnknownCategory(category.clone()));
        }

        Ok(properties)
    }
}

/// Output grouped by category with aligned names
fn output_pretty(properties: &[PropertyInfo], theme: &Theme) {
    let width = properties.iter().map(|p| p.name.len()).max().unwrap_or(0);

    let mut current = None;
    for property in properties {
        if current != Some(property.category) {
            current = Some(property.category);
            println!("\n{}", format!("{}:", property.category).style(theme.title));
            println!("{}", "─".repeat(60).style(theme.border));
        }

        let attributes = property
            .attributes
            .iter()
            .map(|attr| describe(attr, theme))
            .collect::<Vec<_>>()
            .join(", ");

        println!(
            "  {:<width$} {}",
            property.name.style(theme.key),
            attributes,
            width = width
        );
    }

    println!();
}

/// `name` for required attributes, `name="default"` otherwise
fn describe(attr: &AttributeInfo, theme: &Theme) -> String {
    match &attr.default {
        None => attr.name.style(theme.required).to_string(),
        Some(default) => format!("{}={}", attr.name, format!("{default:?}").style(theme.value)),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use propex_core::platform::PATH_SEPARATOR;

    fn list(category: Option<&str>) -> Result<Vec<PropertyInfo>> {
        ListCommand {
            category: category.map(str::to_string),
            json: false,
        }
        .collect(PropertyMaps::template())
    }

    #[test]
    fn test_lists_every_property() {
        let properties = list(None).unwrap();
        assert_eq!(properties.len(), PropertyMaps::template().len());
        assert_eq!(properties[0].name, "add");
    }

    #[test]
    fn test_category_filter() {
        let properties = list(Some("System")).unwrap();
        assert!(properties.iter().all(|p| p.category == "System"));
        assert!(properties.iter().any(|p| p.name == "os.name"));
    }

    #[test]
    fn test_unknown_category() {
        assert!(matches!(
            list(Some("Tools")),
            Err(CommandError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_schema_reports_defaults() {
        let properties = list(Some("Misc")).unwrap();
        let count = properties.iter().find(|p| p.name == "count").unwrap();

        assert_eq!(count.attributes[0].name, "list");
        assert!(count.attributes[0].required);
        assert_eq!(count.attributes[1].name, "sep");
        assert!(!count.attributes[1].required);
        assert_eq!(count.attributes[1].default.as_deref(), Some(PATH_SEPARATOR));
    }

    #[test]
    fn test_describe_plain() {
        let theme = Theme::plain();
        let required = AttributeInfo {
            name: "op1",
            required: true,
            default: None,
        };
        let optional = AttributeInfo {
            name: "sep",
            required: false,
            default: Some(" ".to_string()),
        };
        assert_eq!(describe(&required, &theme), "op1");
        assert_eq!(describe(&optional, &theme), "sep=\" \"");
    }
}
