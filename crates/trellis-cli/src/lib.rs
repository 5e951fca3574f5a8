//! CLI logic for the Trellis diagram converter.
//!
//! Reads a diagram as Diagram JSON or GraphML, validates it, and writes it
//! back out in the format the output path asks for.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;
pub use config::ConfigSource;

use std::{env, fs, path::Path};

use log::{debug, info};

use trellis::{Editor, TrellisError, Warning};

/// On-disk diagram formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    GraphMl,
}

impl Format {
    /// Picks the format from the file extension, falling back to `default`.
    pub fn from_path(path: impl AsRef<Path>, default: Format) -> Format {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("graphml" | "xml") => Format::GraphMl,
            Some("json") => Format::Json,
            _ => default,
        }
    }
}

/// What a successful run leaves for the caller to report.
#[derive(Debug)]
pub struct Outcome {
    /// GraphML decode warnings, in encounter order. Always empty for JSON input.
    pub warnings: Vec<Warning>,
    /// The input text the warning spans point into.
    pub source: String,
    /// The configuration file the run used.
    pub config_source: ConfigSource,
}

/// Run the Trellis CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `TrellisError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed JSON or GraphML input
/// - Documents that fail validation
pub fn run(args: &Args) -> Result<Outcome, TrellisError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Converting diagram"
    );

    let explicit = args.config.as_deref().map(Path::new);
    let config_source = ConfigSource::locate(explicit, &env::current_dir()?);
    let mut app_config = config::load_config(&config_source)?;
    if args.omit_default_shape {
        app_config.graphml_mut().set_omit_default_shape(true);
    }

    let source = fs::read_to_string(&args.input)?;
    let mut editor = Editor::new(app_config);

    let input_format = Format::from_path(&args.input, Format::Json);
    debug!(format:? = input_format; "Reading input");
    let warnings = match input_format {
        Format::GraphMl => editor.import_graphml(&source)?,
        Format::Json => {
            editor.import_json(&source)?;
            Vec::new()
        }
    };

    let output_format = Format::from_path(&args.output, Format::GraphMl);
    let output = match output_format {
        Format::GraphMl => editor.export_graphml(),
        Format::Json => editor.export_json()?,
    };
    fs::write(&args.output, output)?;

    info!(
        output_file = args.output,
        nodes = editor.state().nodes.len(),
        edges = editor.state().edges.len();
        "Diagram written"
    );

    Ok(Outcome {
        warnings,
        source,
        config_source,
    })
}
