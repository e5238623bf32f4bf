//! Renderer-facing contracts and the mechanical paint walk.
//!
//! The geometry work is done by the time rendering starts: [`render`] only
//! walks the model and its [`Layout`](crate::layout::Layout), translating
//! each primitive into a call on the [`Canvas`] capability trait. Concrete
//! surfaces implement `Canvas`; [`svg::SvgCanvas`] is the built-in one.

pub mod svg;

use thiserror::Error;

use tensorgram_core::{
    color::Color,
    draw::{RenderLayer, Shape},
    geometry::{Point, Size},
};

use crate::{diagram::Diagram, layout::Layout};

/// Errors surfaced while writing rendered output.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The drawing capabilities a rendering surface must provide.
///
/// Hover association works through `hover_key`: every element drawn with the
/// same key belongs to one tensor, and [`Canvas::on_hover`] asks the surface
/// to highlight all of them together while any one is hovered.
pub trait Canvas {
    /// Sets the output surface extent in pixels.
    fn set_size(&mut self, size: Size);

    /// Appends style rules (CSS for SVG surfaces) to the output.
    fn set_style(&mut self, rules: &str);

    /// Draws a straight stroked line on the given layer.
    fn draw_line(&mut self, layer: RenderLayer, from: Point, to: Point, class: &str);

    /// Draws a bundle curve through the given control points.
    fn draw_curve(&mut self, points: &[Point], class: &str);

    /// Draws a tensor node shape filled with the resolved color.
    fn draw_shape(
        &mut self,
        shape: Shape,
        center: Point,
        size: f32,
        rect_height: f32,
        fill: Color,
        class: &str,
    );

    /// Draws a text label centered on `anchor`.
    fn draw_text(&mut self, anchor: Point, content: &str, class: &str);

    /// Registers hover highlighting for every element drawn with
    /// `hover_key`.
    fn on_hover(&mut self, hover_key: &str);
}

/// Base style shared by all renders: smooth the hover highlight and keep
/// labels from being selected while hovering.
const BASE_STYLE: &str = "\
.tensor { transition: stroke 120ms ease-in; }\n\
.tensor-label, .contraction-label { user-select: none; }";

/// Paints a laid-out diagram onto a canvas.
///
/// Elements are emitted bottom-up: decoration lines, contraction paths,
/// loose index stubs and labels, then tensor shapes and labels. Tensor fill
/// colors resolve through a clone of the diagram's color scale, in tensor
/// order, so repeated renders assign identical colors.
pub fn render(diagram: &Diagram, layout: &Layout, canvas: &mut impl Canvas) {
    canvas.set_size(layout.size);
    canvas.set_style(BASE_STYLE);

    for (from, to) in &layout.lines {
        canvas.draw_line(RenderLayer::Line, *from, *to, "contraction");
    }

    for path in &layout.contractions {
        match path {
            crate::layout::ContractionPath::Straight { from, to } => {
                canvas.draw_line(RenderLayer::Contraction, *from, *to, "contraction");
            }
            crate::layout::ContractionPath::Curved { points } => {
                canvas.draw_curve(points, "contraction");
            }
        }
    }

    for loose in &layout.loose_indices {
        canvas.draw_line(
            RenderLayer::Contraction,
            loose.line.0,
            loose.line.1,
            "contraction",
        );
        if let Some(anchor) = loose.label {
            canvas.draw_text(anchor, &loose.name.to_string(), "contraction-label");
        }
    }

    let mut scale = diagram.color_scale().clone();
    for tensor_layout in &layout.tensors {
        let tensor = diagram
            .tensor(tensor_layout.id)
            .expect("layout tensors mirror the diagram arena");
        let name = tensor.name().to_string();
        let fill = tensor
            .color()
            .copied()
            .unwrap_or_else(|| scale.resolve(&name));

        canvas.draw_shape(
            tensor_layout.shape,
            tensor_layout.center,
            tensor_layout.size,
            tensor_layout.rect_height,
            fill,
            &format!("tensor tensor-eq-{name}"),
        );
        if let Some(label) = &tensor_layout.label {
            canvas.draw_text(
                label.anchor,
                &label.content,
                &format!("tensor-label tensor-eq-{name}"),
            );
        }
        canvas.on_hover(&name);
    }
}
