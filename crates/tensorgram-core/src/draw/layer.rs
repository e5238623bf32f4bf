//! Layer-based rendering system for SVG output.
//!
//! Drawable elements specify which z-order layer their SVG nodes belong to;
//! [`LayeredOutput`] collects nodes and emits them grouped bottom-to-top, so
//! tensors always paint over contraction lines and labels paint over
//! everything, regardless of the order draw calls were made in.

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in declaration order; the `Ord`
/// derive uses declaration order, so the first variant renders first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Background fill - renders first
    Background,
    /// Free-standing decoration lines
    Line,
    /// Contraction paths and loose index stubs
    Contraction,
    /// Tensor node shapes
    Tensor,
    /// Tensor and index labels - renders last
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Line => "line",
            Self::Contraction => "contraction",
            Self::Tensor => "tensor",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
///
/// When rendered, each non-empty layer becomes an SVG `<g>` element with a
/// `data-layer` attribute, emitted in layer order.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Nodes keep their insertion order within a layer; layers sort by
    /// declaration order (stable sort).
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
