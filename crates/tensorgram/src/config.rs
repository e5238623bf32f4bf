//! Configuration types for Tensorgram rendering.
//!
//! All types implement [`serde::Deserialize`] with defaults for every field,
//! so configuration can be loaded from external sources (the CLI loads
//! TOML) or constructed in code.

use serde::Deserialize;

use tensorgram_core::color::{Color, ColorScheme};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style configuration.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Default background [`Color`] for diagrams, as a color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Color scheme overriding the diagram's default palette.
    #[serde(default)]
    color_scheme: Option<ColorScheme>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the configured color scheme override, if any.
    pub fn color_scheme(&self) -> Option<ColorScheme> {
        self.color_scheme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.style().background_color().unwrap().is_none());
        assert!(config.style().color_scheme().is_none());
    }

    #[test]
    fn test_background_color_validation() {
        let style = StyleConfig {
            background_color: Some("white".to_string()),
            color_scheme: None,
        };
        assert!(AppConfig::new(style).style().background_color().is_ok());

        let bad = StyleConfig {
            background_color: Some("no-such-color".to_string()),
            color_scheme: None,
        };
        assert!(bad.background_color().is_err());
    }
}
