//! SVG rendering surface.
//!
//! [`SvgCanvas`] implements [`Canvas`](super::Canvas) on an in-memory
//! `svg::Document`. Curves arrive as bundle control points and are flattened
//! to cubic segments here: the control points are straightened toward the
//! endpoint chord by the bundle factor, then emitted through the uniform
//! B-spline basis construction, matching the curve family the layout
//! geometry was designed against.

use std::fmt::Write;

use svg::node::element as svg_element;

use tensorgram_core::{
    apply_stroke,
    color::Color,
    draw::{LayeredOutput, RenderLayer, Shape, StrokeDefinition, Text, TextDefinition},
    geometry::{Point, Size},
};

use super::Canvas;

/// Straightening factor for bundle curves.
const BUNDLE_BETA: f32 = 0.85;

/// Builds SVG path data for a straight segment.
pub(crate) fn straight_path_data(from: Point, to: Point) -> String {
    format!("M {} {} L {} {}", from.x(), from.y(), to.x(), to.y())
}

/// Pulls each control point toward the chord between the endpoints by
/// `1 - beta`, which is what turns a basis spline into a bundle curve.
fn bundle_points(points: &[Point], beta: f32) -> Vec<Point> {
    let count = points.len();
    if count < 3 {
        return points.to_vec();
    }

    let first = points[0];
    let span = points[count - 1].sub_point(first);
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let t = index as f32 / (count - 1) as f32;
            let chord = first.add_point(span.scale(t));
            point.scale(beta).add_point(chord.scale(1.0 - beta))
        })
        .collect()
}

fn push_basis_segment(data: &mut String, a: Point, b: Point, c: Point) {
    write!(
        data,
        " C {} {}, {} {}, {} {}",
        (2.0 * a.x() + b.x()) / 3.0,
        (2.0 * a.y() + b.y()) / 3.0,
        (a.x() + 2.0 * b.x()) / 3.0,
        (a.y() + 2.0 * b.y()) / 3.0,
        (a.x() + 4.0 * b.x() + c.x()) / 6.0,
        (a.y() + 4.0 * b.y() + c.y()) / 6.0,
    )
    .expect("writing to a String is infallible");
}

/// Emits a uniform B-spline basis path through the given control points.
fn basis_path_data(points: &[Point]) -> String {
    match points {
        [] => String::new(),
        [only] => format!("M {} {}", only.x(), only.y()),
        [from, to] => straight_path_data(*from, *to),
        _ => {
            let count = points.len();
            let mut data = format!("M {} {}", points[0].x(), points[0].y());
            write!(
                data,
                " L {} {}",
                (5.0 * points[0].x() + points[1].x()) / 6.0,
                (5.0 * points[0].y() + points[1].y()) / 6.0,
            )
            .expect("writing to a String is infallible");

            for window in points.windows(3) {
                push_basis_segment(&mut data, window[0], window[1], window[2]);
            }
            // close out the spline on the final point
            push_basis_segment(
                &mut data,
                points[count - 2],
                points[count - 1],
                points[count - 1],
            );
            write!(
                data,
                " L {} {}",
                points[count - 1].x(),
                points[count - 1].y()
            )
            .expect("writing to a String is infallible");
            data
        }
    }
}

/// Builds SVG path data for a bundle curve through the control points.
pub(crate) fn bundle_path_data(points: &[Point], beta: f32) -> String {
    basis_path_data(&bundle_points(points, beta))
}

/// A [`Canvas`](super::Canvas) that renders into an in-memory SVG document.
#[derive(Debug)]
pub struct SvgCanvas {
    size: Size,
    background: Option<Color>,
    stroke: StrokeDefinition,
    text: TextDefinition,
    styles: Vec<String>,
    layers: LayeredOutput,
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self {
            size: Size::new(300.0, 300.0),
            background: None,
            stroke: StrokeDefinition::new(Color::new("#767676").unwrap(), 1.5),
            text: TextDefinition::default(),
            styles: Vec::new(),
            layers: LayeredOutput::new(),
        }
    }

    /// Sets the document background fill.
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Replaces the stroke used for contraction and decoration lines.
    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = stroke;
        self
    }

    /// Replaces the text style used for labels.
    pub fn with_text(mut self, text: TextDefinition) -> Self {
        self.text = text;
        self
    }

    /// Assembles the final SVG document, consuming the canvas.
    pub fn into_document(self) -> svg::Document {
        let mut document = svg::Document::new()
            .set("width", self.size.width())
            .set("height", self.size.height());

        if !self.styles.is_empty() {
            document = document.add(svg_element::Style::new(self.styles.join("\n")));
        }

        if let Some(background) = self.background {
            document = document.add(
                svg_element::Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", background.to_string()),
            );
        }

        for node in self.layers.render() {
            document = document.add(node);
        }

        document
    }

    fn add_path(&mut self, layer: RenderLayer, data: String, class: &str) {
        let path = svg_element::Path::new()
            .set("class", class)
            .set("d", data)
            .set("fill", "none");
        let path = apply_stroke!(path, &self.stroke);
        self.layers.add_to_layer(layer, Box::new(path));
    }
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for SvgCanvas {
    fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    fn set_style(&mut self, rules: &str) {
        self.styles.push(rules.to_string());
    }

    fn draw_line(&mut self, layer: RenderLayer, from: Point, to: Point, class: &str) {
        self.add_path(layer, straight_path_data(from, to), class);
    }

    fn draw_curve(&mut self, points: &[Point], class: &str) {
        self.add_path(
            RenderLayer::Contraction,
            bundle_path_data(points, BUNDLE_BETA),
            class,
        );
    }

    fn draw_shape(
        &mut self,
        shape: Shape,
        center: Point,
        size: f32,
        rect_height: f32,
        fill: Color,
        class: &str,
    ) {
        let node = shape.render_to_svg(center, size, rect_height, &fill.to_string(), class);
        self.layers.add_to_layer(RenderLayer::Tensor, node);
    }

    fn draw_text(&mut self, anchor: Point, content: &str, class: &str) {
        let node = Text::new(&self.text, content).render_to_svg(anchor, class);
        self.layers.add_to_layer(RenderLayer::Text, node);
    }

    fn on_hover(&mut self, hover_key: &str) {
        self.styles.push(format!(
            "svg:has(.tensor-eq-{hover_key}:hover) .tensor-eq-{hover_key} \
             {{ stroke: #1a1a1a; stroke-width: 2; }}"
        ));
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_straight_path_data() {
        let data = straight_path_data(Point::new(20.0, 60.0), Point::new(80.0, 60.0));
        assert_eq!(data, "M 20 60 L 80 60");
    }

    #[test]
    fn test_bundle_keeps_endpoints() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, -20.0),
            Point::new(40.0, -20.0),
            Point::new(50.0, 0.0),
        ];
        let straightened = bundle_points(&points, 0.85);
        assert_eq!(straightened[0], points[0]);
        assert_eq!(straightened[3], points[3]);
        // interior points move toward the chord
        assert!(straightened[1].y() > points[1].y());
        assert_approx_eq!(f32, straightened[1].y(), -17.0);
    }

    #[test]
    fn test_basis_path_shape() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(30.0, -30.0),
            Point::new(60.0, 0.0),
        ];
        let data = basis_path_data(&points);
        assert!(data.starts_with("M 0 0 L 5 -5"));
        // two bezier segments (one per triple, plus the closing repeat)
        assert_eq!(data.matches(" C ").count(), 2);
        assert!(data.ends_with("L 60 0"));
    }

    #[test]
    fn test_basis_degenerate_inputs() {
        assert_eq!(basis_path_data(&[]), "");
        assert_eq!(basis_path_data(&[Point::new(1.0, 2.0)]), "M 1 2");
        assert_eq!(
            basis_path_data(&[Point::new(0.0, 0.0), Point::new(4.0, 0.0)]),
            "M 0 0 L 4 0"
        );
    }

    #[test]
    fn test_canvas_renders_a_document() {
        let mut canvas = SvgCanvas::new();
        canvas.set_size(Size::new(400.0, 200.0));
        canvas.draw_line(
            RenderLayer::Contraction,
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            "contraction",
        );
        canvas.draw_shape(
            Shape::Circle,
            Point::new(50.0, 50.0),
            20.0,
            0.0,
            Color::default(),
            "tensor tensor-eq-A",
        );
        canvas.draw_text(Point::new(50.0, 30.0), "A", "tensor-label tensor-eq-A");
        canvas.on_hover("A");

        let rendered = canvas.into_document().to_string();
        assert!(rendered.contains("<svg"));
        assert!(rendered.contains("width=\"400\""));
        assert!(rendered.contains("class=\"contraction\""));
        assert!(rendered.contains("tensor-eq-A"));
        assert!(rendered.contains(":hover"));
        assert!(rendered.contains("data-layer=\"tensor\""));
    }

    #[test]
    fn test_background_rectangle() {
        let canvas = SvgCanvas::new().with_background(Some(Color::new("white").unwrap()));
        let rendered = canvas.into_document().to_string();
        assert!(rendered.contains("height=\"100%\""));
    }
}
