//! Property namespaces
//!
//! A [`PropertyMaps`] groups properties by `(category, name)`. The shared
//! prototype returned by [`PropertyMaps::template`] is never handed out
//! mutably; callers work on a [`duplicate`](PropertyMaps::duplicate), which
//! copies every property and its attribute state by value.
//!
//! ```
//! use propex_engine::PropertyMaps;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pm = PropertyMaps::template().duplicate();
//!
//! let count = pm.property_mut("Misc", "count")?;
//! count.set_attribute("list", "a b c");
//! count.set_attribute("sep", " ");
//! assert_eq!(pm.current("Misc", "count")?, "3");
//!
//! // The prototype is untouched
//! assert_eq!(PropertyMaps::template().property("Misc", "count")?.attribute("list"), None);
//! # Ok(())
//! # }
//! ```
//!
//! # Sharing
//!
//! Namespaces are plain values (`Clone + Send + Sync`). To give another
//! thread its own evaluation context, duplicate and move the copy; do not
//! share one namespace and mutate it from several places.

use crate::operator::Operator;
use crate::property::Property;
use indexmap::IndexMap;
use propex_core::{Error, Result};
use std::sync::LazyLock;

/// Prototype namespace holding every built-in property with its defaults
pub static TEMPLATE: LazyLock<PropertyMaps> = LazyLock::new(PropertyMaps::builtin);

/// Registry of properties keyed by category and name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMaps {
    categories: IndexMap<String, IndexMap<String, Property>>,
}

impl PropertyMaps {
    /// Build a fresh namespace from the operator catalog
    pub fn builtin() -> Self {
        let mut maps = Self::default();
        for op in Operator::ALL {
            maps.insert(Property::new(*op));
        }
        maps
    }

    /// Shared prototype namespace
    pub fn template() -> &'static Self {
        &TEMPLATE
    }

    /// Start a prototype with overridden defaults
    pub fn builder() -> PropertyMapsBuilder {
        PropertyMapsBuilder::default()
    }

    /// Independent copy of every property and its attribute state
    #[must_use]
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    fn insert(&mut self, property: Property) {
        self.categories
            .entry(property.category().to_string())
            .or_default()
            .insert(property.name().to_string(), property);
    }

    /// Look a property up
    ///
    /// # Errors
    ///
    /// Returns [`Error::PropertyNotFound`] if nothing is registered under
    /// `(category, name)`.
    pub fn property(&self, category: &str, name: &str) -> Result<&Property> {
        self.categories
            .get(category)
            .and_then(|properties| properties.get(name))
            .ok_or_else(|| {
                tracing::debug!("Property lookup failed: {}.{}", category, name);
                Error::not_found(category, name)
            })
    }

    /// Look a property up for attribute changes
    ///
    /// # Errors
    ///
    /// Returns [`Error::PropertyNotFound`] if nothing is registered under
    /// `(category, name)`.
    pub fn property_mut(&mut self, category: &str, name: &str) -> Result<&mut Property> {
        self.categories
            .get_mut(category)
            .and_then(|properties| properties.get_mut(name))
            .ok_or_else(|| {
                tracing::debug!("Property lookup failed: {}.{}", category, name);
                Error::not_found(category, name)
            })
    }

    /// Evaluate a property in this namespace
    ///
    /// Data errors come back inside the `Ok` string; only an unknown key
    /// is an `Err`.
    pub fn current(&self, category: &str, name: &str) -> Result<String> {
        self.property(category, name).map(Property::current)
    }

    /// Registered categories, in registration order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Properties of one category, empty if the category is unknown
    pub fn properties_in<'a>(
        &'a self,
        category: &str,
    ) -> impl Iterator<Item = &'a Property> + use<'a> {
        self.categories
            .get(category)
            .into_iter()
            .flat_map(|properties| properties.values())
    }

    /// Every property, grouped by category
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.categories
            .values()
            .flat_map(|properties| properties.values())
    }

    /// Restore every property to its defaults
    pub fn reset_all(&mut self) {
        for property in self
            .categories
            .values_mut()
            .flat_map(|properties| properties.values_mut())
        {
            property.reset_attributes();
        }
    }

    /// Number of registered properties
    pub fn len(&self) -> usize {
        self.categories.values().map(IndexMap::len).sum()
    }

    /// Whether no property is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds a prototype namespace whose defaults differ from the catalog's
///
/// Defaults can only be changed here; once built, a property's defaults
/// stay fixed for its lifetime and every duplicate.
///
/// ```
/// use propex_engine::PropertyMaps;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pm = PropertyMaps::builder()
///     .with_default("Misc", "count", "sep", ",")
///     .build()?;
///
/// let mut pm = pm.duplicate();
/// pm.property_mut("Misc", "count")?.set_attribute("list", "a,b");
/// assert_eq!(pm.current("Misc", "count")?, "2");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyMapsBuilder {
    defaults: Vec<DefaultOverride>,
}

#[derive(Debug, Clone)]
struct DefaultOverride {
    category: String,
    name: String,
    attribute: String,
    value: String,
}

impl PropertyMapsBuilder {
    /// Override the default of one attribute
    #[must_use]
    pub fn with_default(
        mut self,
        category: impl Into<String>,
        name: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.defaults.push(DefaultOverride {
            category: category.into(),
            name: name.into(),
            attribute: attribute.into(),
            value: value.into(),
        });
        self
    }

    /// Build the prototype
    ///
    /// # Errors
    ///
    /// Returns [`Error::PropertyNotFound`] for an unknown property and
    /// [`Error::Config`] for an attribute outside the property's schema.
    pub fn build(self) -> Result<PropertyMaps> {
        let mut maps = PropertyMaps::builtin();

        for DefaultOverride {
            category,
            name,
            attribute,
            value,
        } in self.defaults
        {
            let property = maps.property_mut(&category, &name)?;
            if !property.schema().iter().any(|spec| spec.name == attribute) {
                return Err(Error::Config(format!(
                    "{category}.{name} has no attribute '{attribute}'"
                )));
            }
            tracing::debug!(
                "Default of {}.{} attribute '{}' set to {:?}",
                category,
                name,
                attribute,
                value
            );
            property.set_default(attribute, value);
        }

        Ok(maps)
    }
}
