//! Command-line argument definitions for the Trellis CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, GraphML writer options, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Trellis diagram converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram (`.json`, `.graphml` or `.xml`)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file; the extension picks the format
    #[arg(short, long, default_value = "out.graphml")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Leave out the shape of `rect` nodes when writing GraphML
    #[arg(long)]
    pub omit_default_shape: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
