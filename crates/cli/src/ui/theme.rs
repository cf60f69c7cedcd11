//! Theme and color definitions for terminal output

use owo_colors::Style;

/// Output theme with predefined styles
///
/// A theme built with color disabled uses plain styles everywhere.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Section headings
    pub title: Style,
    /// Separator rules under headings
    pub border: Style,
    /// Property names
    pub key: Style,
    /// Evaluated values and defaults
    pub value: Style,
    /// Required attribute names
    pub required: Style,
    /// Error values
    pub error: Style,
}

impl Theme {
    /// Create a theme, colored or plain
    pub fn new(color: bool) -> Self {
        if !color {
            return Self::plain();
        }
        Self {
            title: Style::new().bright_cyan().bold(),
            border: Style::new().dimmed(),
            key: Style::new().bright_yellow(),
            value: Style::new().bright_white(),
            required: Style::new().bold(),
            error: Style::new().red(),
        }
    }

    /// Theme without any styling
    pub fn plain() -> Self {
        Self {
            title: Style::new(),
            border: Style::new(),
            key: Style::new(),
            value: Style::new(),
            required: Style::new(),
            error: Style::new(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(true)
    }
}
