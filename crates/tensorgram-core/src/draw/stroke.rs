//! Stroke and line-style definitions.
//!
//! A trimmed, SVG/CSS-aligned stroke model: [`StrokeDefinition`] carries
//! color, width, and pattern; the [`apply_stroke!`](crate::apply_stroke!)
//! macro applies all stroke attributes to an SVG element at once.

use crate::color::Color;

/// Defines the visual style of a stroke, including dash patterns.
///
/// Each variant maps to an SVG `stroke-dasharray` value: `Solid` emits no
/// dasharray attribute, `Dashed` emits `"5,5"`, and `Custom` emits the
/// provided pattern string verbatim.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line with equal dash and gap lengths (5px dash, 5px gap)
    Dashed,
    /// Custom SVG dasharray pattern, e.g. `"10,5,2,5"`
    Custom(String),
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines.
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5".to_string()),
            Self::Custom(pattern) => Some(pattern.clone()),
        }
    }
}

/// A stroke definition for rendering lines and outlines.
#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a dashed stroke (convenience constructor).
    pub fn dashed(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dashed);
        stroke
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Sets the stroke style.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            style: StrokeStyle::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets stroke color, opacity, width, and the dash pattern when the style
/// is not solid.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_stroke_constructors() {
        let color = Color::new("red").unwrap();

        let solid = StrokeDefinition::new(color, 2.0);
        assert_eq!(solid.width(), 2.0);
        assert_eq!(*solid.style(), StrokeStyle::Solid);

        let dashed = StrokeDefinition::dashed(color, 1.5);
        assert_eq!(*dashed.style(), StrokeStyle::Dashed);
    }

    #[test]
    fn test_stroke_style_dasharray() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed.to_svg_value(), Some("5,5".to_string()));
        assert_eq!(
            StrokeStyle::Custom("10,5,2,5".to_string()).to_svg_value(),
            Some("10,5,2,5".to_string())
        );
    }

    #[test]
    fn test_apply_stroke_macro() {
        use svg::node::element as svg_element;

        let stroke = StrokeDefinition::dashed(Color::new("blue").unwrap(), 2.0);
        let line = svg_element::Line::new();
        let line = apply_stroke!(line, &stroke);

        let rendered = line.to_string();
        assert!(rendered.contains("stroke-width=\"2\""));
        assert!(rendered.contains("stroke-dasharray=\"5,5\""));
    }
}
