//! Layout engine: derives drawable pixel-space geometry from a frozen
//! diagram.
//!
//! The engine is a pure function of the model. It owns the grid-to-pixel
//! scales and produces a [`Layout`] holding everything a renderer needs:
//! tensor centers and heights, loose index stubs with label anchors,
//! classified contraction paths, and scaled decoration lines. Calculating a
//! layout twice for the same diagram yields identical output.

mod indices;
mod paths;

use tensorgram_core::{
    draw::Shape,
    geometry::{GridScale, Point, Size},
};

pub use indices::LooseIndex;
pub use paths::ContractionPath;

use crate::diagram::{Diagram, TensorId};

/// Calculates diagram layouts with configurable grid scales.
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    x_scale: GridScale,
    y_scale: GridScale,
}

impl Engine {
    /// Creates an engine with the default scales (an 8-unit grid inside a
    /// 500px canvas).
    pub fn new() -> Self {
        Self {
            x_scale: GridScale::default_x(),
            y_scale: GridScale::default_y(),
        }
    }

    /// Replaces the horizontal grid scale.
    pub fn with_x_scale(mut self, scale: GridScale) -> Self {
        self.x_scale = scale;
        self
    }

    /// Replaces the vertical grid scale.
    pub fn with_y_scale(mut self, scale: GridScale) -> Self {
        self.y_scale = scale;
        self
    }

    /// Maps a grid point to pixels.
    pub(crate) fn project(&self, point: Point) -> Point {
        Point::new(self.x_scale.map(point.x()), self.y_scale.map(point.y()))
    }

    /// Pixel length of one vertical grid unit.
    pub(crate) fn y_step(&self) -> f32 {
        self.y_scale.step()
    }

    /// Derives the full drawable geometry for a diagram.
    pub fn calculate(&self, diagram: &Diagram) -> Layout {
        let tensors = diagram
            .tensors()
            .iter()
            .enumerate()
            .map(|(index, tensor)| {
                let label = tensor.show_label().then(|| TensorLabel {
                    anchor: self
                        .project(tensor.position().add_point(tensor.label_position().offset())),
                    content: tensor.name().to_string(),
                });
                TensorLayout {
                    id: TensorId::new(index),
                    shape: tensor.shape(),
                    center: self.project(tensor.position()),
                    size: tensor.size(),
                    rect_height: self.rectangle_height(tensor.rect_height(), tensor.size()),
                    label,
                }
            })
            .collect();

        let lines = diagram
            .lines()
            .iter()
            .map(|line| (self.project(line.start()), self.project(line.end())))
            .collect();

        Layout {
            size: Size::new(diagram.width(), diagram.height()),
            tensors,
            loose_indices: indices::loose_indices(diagram, self),
            contractions: paths::contraction_paths(diagram, self),
            lines,
        }
    }

    /// Rectangle pixel height: one bounding box plus one grid step per
    /// additional stacked index row.
    fn rectangle_height(&self, rect_height: u32, size: f32) -> f32 {
        (rect_height.max(1) - 1) as f32 * self.y_step() + size
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Drawable geometry for one tensor.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorLayout {
    pub id: TensorId,
    pub shape: Shape,
    /// Center position in pixels.
    pub center: Point,
    /// Bounding box edge length in pixels.
    pub size: f32,
    /// Rectangle height in pixels; equals `size` for single-row rectangles
    /// and is ignored by other shapes.
    pub rect_height: f32,
    pub label: Option<TensorLabel>,
}

/// A tensor name label with its resolved anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorLabel {
    pub anchor: Point,
    pub content: String,
}

/// All derived geometry for a diagram, in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Output canvas extent.
    pub size: Size,
    pub tensors: Vec<TensorLayout>,
    pub loose_indices: Vec<LooseIndex>,
    pub contractions: Vec<ContractionPath>,
    /// Free-standing decoration lines, scaled.
    pub lines: Vec<(Point, Point)>,
}
