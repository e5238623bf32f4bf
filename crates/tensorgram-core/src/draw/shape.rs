//! Tensor node shapes and their SVG rendering.
//!
//! The shape set is closed, so rendering dispatches through an exhaustive
//! match: adding a variant without a rendering arm is a compile error. Every
//! shape fits a `size` x `size` box centered on the tensor position, except
//! the rectangle whose height is supplied by the layout engine.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use svg::node::element as svg_element;
use thiserror::Error;

use crate::{draw::SvgNode, geometry::Point};

/// The visual shape of a tensor node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    #[default]
    Circle,
    /// A circle at half radius, used for summation anchors.
    Dot,
    /// A four-stroke star.
    Asterisk,
    Square,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
    /// A rounded rectangle whose height grows with the index count.
    Rectangle,
}

impl Shape {
    /// Returns true for the rectangle shape, whose height is derived from
    /// its indices rather than fixed by `size`.
    pub fn is_rectangle(self) -> bool {
        matches!(self, Self::Rectangle)
    }

    /// Renders this shape to an SVG node.
    ///
    /// # Arguments
    ///
    /// * `center` - The center position of the shape, in pixels.
    /// * `size` - The bounding box edge length, in pixels.
    /// * `rect_height` - The rectangle height in pixels; ignored by every
    ///   other shape.
    /// * `fill` - The resolved fill color string.
    /// * `class` - The CSS class list attached to the node.
    pub fn render_to_svg(
        self,
        center: Point,
        size: f32,
        rect_height: f32,
        fill: &str,
        class: &str,
    ) -> SvgNode {
        let radius = size / 2.0;
        // projection of the radius on the diagonal at pi/4, used for the
        // asterisk arms and the rectangle corner rounding
        let diagonal_radius = (std::f32::consts::FRAC_PI_4.cos() * radius).floor();
        let (cx, cy) = (center.x(), center.y());

        match self {
            Self::Circle | Self::Dot => {
                let r = if self == Self::Dot { radius / 2.0 } else { radius };
                Box::new(
                    svg_element::Circle::new()
                        .set("class", class)
                        .set("r", r)
                        .set("cx", cx)
                        .set("cy", cy)
                        .set("fill", fill),
                )
            }
            Self::Asterisk => {
                let dr = diagonal_radius;
                let d = format!(
                    "M {} {} L {} {} M {} {} L {} {} M {} {} L {} {} M {} {} L {} {}",
                    cx - dr,
                    cy - dr,
                    cx + dr,
                    cy + dr,
                    cx + dr,
                    cy - dr,
                    cx - dr,
                    cy + dr,
                    cx,
                    cy - radius,
                    cx,
                    cy + radius,
                    cx + radius,
                    cy,
                    cx - radius,
                    cy,
                );
                // an asterisk is pure strokes, so the color goes on the stroke
                Box::new(
                    svg_element::Path::new()
                        .set("class", class)
                        .set("d", d)
                        .set("fill", "none")
                        .set("stroke", fill)
                        .set("stroke-width", 2.0),
                )
            }
            Self::Square => Box::new(
                svg_element::Rectangle::new()
                    .set("class", class)
                    .set("width", size)
                    .set("height", size)
                    .set("x", cx - radius)
                    .set("y", cy - radius)
                    .set("fill", fill),
            ),
            Self::TriangleUp => {
                let (sx, sy) = (cx - radius, cy + radius);
                let d = format!(
                    "M {sx} {sy} L {} {sy} L {} {} Z",
                    sx + size,
                    sx + radius,
                    sy - size,
                );
                Box::new(
                    svg_element::Path::new()
                        .set("class", class)
                        .set("d", d)
                        .set("fill", fill),
                )
            }
            Self::TriangleDown => {
                let (sx, sy) = (cx - radius, cy - radius);
                let d = format!(
                    "M {sx} {sy} L {} {sy} L {} {} Z",
                    sx + size,
                    sx + radius,
                    sy + size,
                );
                Box::new(
                    svg_element::Path::new()
                        .set("class", class)
                        .set("d", d)
                        .set("fill", fill),
                )
            }
            Self::TriangleLeft => {
                let (sx, sy) = (cx - radius, cy);
                let d = format!(
                    "M {sx} {sy} L {} {} L {} {} Z",
                    sx + size,
                    sy + radius,
                    sx + size,
                    sy - radius,
                );
                Box::new(
                    svg_element::Path::new()
                        .set("class", class)
                        .set("d", d)
                        .set("fill", fill),
                )
            }
            Self::TriangleRight => {
                let (sx, sy) = (cx - radius, cy - radius);
                let d = format!(
                    "M {sx} {sy} L {sx} {} L {} {} Z",
                    sy + size,
                    sx + size,
                    sy + radius,
                );
                Box::new(
                    svg_element::Path::new()
                        .set("class", class)
                        .set("d", d)
                        .set("fill", fill),
                )
            }
            Self::Rectangle => Box::new(
                svg_element::Rectangle::new()
                    .set("class", class)
                    .set("width", size)
                    .set("height", rect_height)
                    .set("x", cx - radius)
                    .set("y", cy - radius)
                    .set("rx", diagonal_radius)
                    .set("ry", diagonal_radius)
                    .set("fill", fill),
            ),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Circle => "circle",
            Self::Dot => "dot",
            Self::Asterisk => "asterisk",
            Self::Square => "square",
            Self::TriangleUp => "triangle-up",
            Self::TriangleDown => "triangle-down",
            Self::TriangleLeft => "triangle-left",
            Self::TriangleRight => "triangle-right",
            Self::Rectangle => "rectangle",
        };
        write!(f, "{s}")
    }
}

/// Error returned when parsing an unrecognized shape name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid shape `{0}`")]
pub struct InvalidShape(pub String);

impl FromStr for Shape {
    type Err = InvalidShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(Self::Circle),
            "dot" => Ok(Self::Dot),
            "asterisk" => Ok(Self::Asterisk),
            "square" => Ok(Self::Square),
            "triangle-up" => Ok(Self::TriangleUp),
            "triangle-down" => Ok(Self::TriangleDown),
            "triangle-left" => Ok(Self::TriangleLeft),
            "triangle-right" => Ok(Self::TriangleRight),
            "rectangle" => Ok(Self::Rectangle),
            _ => Err(InvalidShape(s.to_string())),
        }
    }
}
