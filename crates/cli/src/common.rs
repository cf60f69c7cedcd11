//! Common types shared across CLI commands

use crate::ui::Theme;
use propex_config::Config;
use propex_engine::PropertyMaps;
use std::sync::Arc;

/// Runtime context for CLI commands
///
/// Holds the configuration and the prototype namespace built from it.
/// Commands never mutate the prototype; they evaluate on a duplicate.
#[derive(Debug, Clone)]
pub struct RuntimeContext {
    /// Shared configuration
    pub config: Arc<Config>,
    namespace: PropertyMaps,
    theme: Theme,
}

impl RuntimeContext {
    /// Create a new runtime context
    ///
    /// # Errors
    ///
    /// Returns an error if the configured defaults do not match the
    /// built-in properties.
    pub fn new(config: Config) -> propex_core::Result<Self> {
        let namespace = config.build_namespace()?;
        let theme = Theme::new(config.general.color);
        Ok(Self {
            config: Arc::new(config),
            namespace,
            theme,
        })
    }

    /// Prototype namespace with configured defaults
    #[inline]
    pub fn namespace(&self) -> &PropertyMaps {
        &self.namespace
    }

    /// Output styles
    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}
