//! Command-line argument definitions for the Tensorgram CLI.
//!
//! Arguments control input/output paths, configuration file selection,
//! formula printing, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Tensorgram diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram document (TOML)
    #[arg(help = "Path to the input diagram document")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the einsum formula to stdout
    #[arg(long)]
    pub einsum: bool,

    /// Print the LaTeX formula to stdout
    #[arg(long)]
    pub latex: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
