//! Text rendering definitions for diagram labels.
//!
//! Labels in a tensor diagram are anchored, not boxed: each one is a short
//! glyph run centered on a layout-computed anchor point, so no text
//! measurement is involved. [`TextDefinition`] carries the reusable style,
//! [`Text`] pairs it with content.

use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{color::Color, draw::SvgNode, geometry::Point};

/// Defines the visual style for text elements in diagrams.
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family for the text.
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the text color. `None` leaves the SVG default (or CSS) in charge.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    fn font_size(&self) -> u16 {
        self.font_size
    }

    fn font_family(&self) -> &str {
        &self.font_family
    }

    fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 15,
            color: None,
        }
    }
}

/// A renderable text element combining content with styling.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    /// Creates a new text element with the given definition and content.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        self.content
    }

    /// Renders this text as an SVG `<text>` node centered on `anchor`.
    pub fn render_to_svg(&self, anchor: Point, class: &str) -> SvgNode {
        let mut node = svg_element::Text::new("")
            .set("class", class)
            .set("x", anchor.x())
            .set("y", anchor.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if let Some(color) = self.definition.color() {
            node = node
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        Box::new(node.add(SvgText::new(self.content)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_renders_content_and_anchor() {
        let def = TextDefinition::new();
        let text = Text::new(&def, "ijk");
        let node = text.render_to_svg(Point::new(40.0, 25.0), "contraction-label").to_string();

        assert!(node.contains("ijk"));
        assert!(node.contains("</text>"));
        assert!(node.contains("x=\"40\""));
        assert!(node.contains("y=\"25\""));
        assert!(node.contains("text-anchor=\"middle\""));
        assert!(node.contains("class=\"contraction-label\""));
    }

    #[test]
    fn test_text_color_is_optional() {
        let mut def = TextDefinition::new();
        let plain = Text::new(&def, "A").render_to_svg(Point::default(), "t").to_string();
        assert!(!plain.contains("fill="));

        def.set_color(Some(Color::new("navy").unwrap()));
        let colored = Text::new(&def, "A").render_to_svg(Point::default(), "t").to_string();
        assert!(colored.contains("fill="));
    }

    #[test]
    fn test_definition_setters() {
        let mut def = TextDefinition::new();
        def.set_font_family("monospace");
        def.set_font_size(11);

        let node = Text::new(&def, "x").render_to_svg(Point::default(), "t").to_string();
        assert!(node.contains("font-family=\"monospace\""));
        assert!(node.contains("font-size=\"11\""));
    }

    #[test]
    fn test_content_accessor() {
        let def = TextDefinition::new();
        assert_eq!(Text::new(&def, "label").content(), "label");
    }
}
