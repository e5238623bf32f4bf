//! CLI logic for the Tensorgram diagram tool.
//!
//! Reads a TOML diagram document, builds the model through the construction
//! API, renders SVG, and optionally prints the derived formulas.

pub mod document;

mod args;
mod config;

pub use args::Args;

use std::{fs, io};

use log::info;
use thiserror::Error;

use tensorgram::{DiagramError, DiagramRenderer, TensorgramError};

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Tensorgram(#[from] TensorgramError),

    #[error(transparent)]
    Diagram(#[from] DiagramError),

    #[error("document error: {0}")]
    Document(String),

    #[error("config error: {0}")]
    Config(String),
}

/// Run the Tensorgram CLI application
///
/// Processes the input document through the model, layout, and rendering
/// pipeline, and writes the resulting SVG to the output file.
///
/// # Errors
///
/// Returns `CliError` for file I/O errors, configuration loading errors,
/// document errors, and rendering errors.
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read and build the diagram document
    let source = fs::read_to_string(&args.input)?;
    let document = document::Document::parse(&source)?;
    let mut diagram = document.build()?;

    // A configured color scheme replaces the default palette
    if let Some(scheme) = app_config.style().color_scheme() {
        diagram.set_color_scheme(&["dot", "conv"], &["black", "black"], scheme)?;
    }

    // Render through the DiagramRenderer API
    let renderer = DiagramRenderer::new(app_config);
    let svg = renderer.render_svg(&diagram)?;

    // Write output file
    fs::write(&args.output, svg)?;

    if args.einsum {
        println!("{}", diagram.to_einsum_formula());
    }
    if args.latex {
        println!("{}", diagram.to_latex_formula());
    }

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
