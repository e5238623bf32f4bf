//! Color handling and name-to-color resolution.
//!
//! [`Color`] wraps the `color` crate's `DynamicColor` and accepts any CSS
//! color string. [`ColorScale`] is an ordinal scale assigning colors to
//! tensor names: names preset in its domain get their preset color, and
//! unknown names are appended to the domain and pick up the next color from
//! the range, cycling. [`ColorScheme`] supplies the predefined palettes a
//! scale can append to its range.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;
use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Wrapper around the `DynamicColor` type from the color crate.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string.
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)",
    /// "red", etc.
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Color { color }),
            Err(err) => Err(format!("Invalid color '{color_str}': {err}")),
        }
    }

    /// Returns the alpha component of this color in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").unwrap()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        svg::node::Value::from(color.to_string())
    }
}

/// A predefined palette appended to a [`ColorScale`]'s range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    /// No appended colors.
    None,
    /// Four-color palette common in tensor network figures.
    TensorNetwork,
    /// The d3 `category10` categorical palette.
    #[default]
    D3Category10,
    /// The classic Google Charts 10-color palette.
    Google10,
}

impl ColorScheme {
    /// Returns the hex color strings of this scheme, in order.
    pub fn palette(self) -> &'static [&'static str] {
        match self {
            Self::None => &[],
            Self::TensorNetwork => &["#763E9B", "#00882B", "#C82505", "#0165C0"],
            Self::Google10 => &[
                "#3366cc", "#dc3912", "#ff9900", "#109618", "#990099", "#0099c6", "#dd4477",
                "#66aa00", "#b82e2e", "#316395",
            ],
            Self::D3Category10 => &[
                "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2",
                "#7f7f7f", "#bcbd22", "#17becf",
            ],
        }
    }

    /// Returns the parsed palette colors.
    pub fn colors(self) -> Vec<Color> {
        self.palette()
            .iter()
            .map(|hex| Color::new(hex).unwrap())
            .collect()
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::TensorNetwork => "tensor-network",
            Self::D3Category10 => "d3-category10",
            Self::Google10 => "google10",
        };
        write!(f, "{s}")
    }
}

/// Error returned when parsing an unrecognized color scheme name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color scheme `{0}`, valid values: none, tensor-network, d3-category10, google10")]
pub struct InvalidColorScheme(pub String);

impl FromStr for ColorScheme {
    type Err = InvalidColorScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "tensor-network" => Ok(Self::TensorNetwork),
            "d3-category10" => Ok(Self::D3Category10),
            "google10" => Ok(Self::Google10),
            _ => Err(InvalidColorScheme(s.to_string())),
        }
    }
}

/// An ordinal name-to-color scale.
///
/// Resolution follows ordinal-scale semantics: the first time a name is
/// looked up it is appended to the domain, and its color is the range entry
/// at the name's domain position, cycling through the range when there are
/// more names than colors. Resolving the same names in the same order always
/// produces the same assignment.
#[derive(Debug, Clone, Default)]
pub struct ColorScale {
    domain: Vec<String>,
    range: Vec<Color>,
}

impl ColorScale {
    /// Creates an empty scale. Every resolved name falls back to the default
    /// color until a range is configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the scale: `names` seed the domain, `colors` seed the
    /// range, and the scheme's palette is appended after them.
    pub fn configure(&mut self, names: &[&str], colors: Vec<Color>, scheme: ColorScheme) {
        self.domain = names.iter().map(|name| name.to_string()).collect();
        self.range = colors;
        self.range.extend(scheme.colors());
    }

    /// Resolves a name to its color, extending the domain if the name is new.
    pub fn resolve(&mut self, name: &str) -> Color {
        let position = match self.domain.iter().position(|entry| entry == name) {
            Some(position) => position,
            None => {
                debug!(name; "Assigning scale color to new tensor name");
                self.domain.push(name.to_string());
                self.domain.len() - 1
            }
        };

        if self.range.is_empty() {
            return Color::default();
        }
        self.range[position % self.range.len()]
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn scale_resolution_is_deterministic(names in prop::collection::vec("[a-z]{1,4}", 1..12)) {
            let mut first = ColorScale::new();
            first.configure(&[], Vec::new(), ColorScheme::D3Category10);
            let mut second = first.clone();

            let a: Vec<Color> = names.iter().map(|n| first.resolve(n)).collect();
            let b: Vec<Color> = names.iter().map(|n| second.resolve(n)).collect();
            prop_assert_eq!(a, b);
        }
    }
}
