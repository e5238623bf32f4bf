//! Tensorgram - tensor network diagram rendering.
//!
//! A diagram is built through a chainable construction API ([`Diagram`]),
//! laid out by a pure geometry engine ([`layout::Engine`]), and rendered to
//! SVG through the [`export::Canvas`] contract. Einsum and LaTeX formulas
//! are derived from the same frozen model.

pub mod config;
pub mod export;
pub mod layout;

mod diagram;
mod error;
mod formula;

pub use tensorgram_core::{color, draw, geometry, identifier};

pub use diagram::{
    Contraction, Diagram, Index, Line, Placement, Tensor, TensorId, TensorOptions,
};
pub use error::{DiagramError, TensorgramError};

use log::{debug, info};

use config::AppConfig;

/// Renders diagrams to SVG with a fixed configuration.
///
/// # Examples
///
/// ```
/// use tensorgram::{Diagram, DiagramRenderer, Placement, TensorId};
///
/// let mut diagram = Diagram::new();
/// diagram
///     .add_tensor("A", Placement::Start, &[], &["i"], &[], &[])?
///     .add_tensor("B", Placement::Right, &["i"], &[], &[], &[])?
///     .add_contraction(TensorId::new(0), TensorId::new(1), "i")?;
///
/// let svg = DiagramRenderer::default().render_svg(&diagram)?;
/// assert!(svg.contains("<svg"));
/// # Ok::<(), tensorgram::TensorgramError>(())
/// ```
#[derive(Default)]
pub struct DiagramRenderer {
    config: AppConfig,
}

impl DiagramRenderer {
    /// Creates a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Renders a frozen diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `TensorgramError::Config` when the configuration carries an
    /// unparseable color.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, TensorgramError> {
        info!("Calculating diagram layout");
        let engine = layout::Engine::new();
        let layout = engine.calculate(diagram);
        debug!(
            tensors_len = layout.tensors.len(),
            paths_len = layout.contractions.len(),
            loose_len = layout.loose_indices.len();
            "Layout calculated",
        );

        let background = self
            .config
            .style()
            .background_color()
            .map_err(TensorgramError::Config)?;

        let mut canvas = export::svg::SvgCanvas::new().with_background(background);
        export::render(diagram, &layout, &mut canvas);

        info!("SVG rendered successfully");
        Ok(canvas.into_document().to_string())
    }
}
