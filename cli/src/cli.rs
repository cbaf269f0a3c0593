//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Parsed command line.
#[derive(Debug, Parser)]
#[command(name = "portfolio-cli", version, about = "Portfolio content tooling")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse and validate the content file, optionally checking assets.
    Validate {
        /// Content JSON. Defaults to the content compiled into the site.
        #[arg(long)]
        content: Option<PathBuf>,
        /// Site root that asset paths are resolved against
        /// (e.g. `frontend`).
        #[arg(long)]
        assets: Option<PathBuf>,
        /// Fail when a referenced asset is missing instead of warning.
        #[arg(long)]
        strict: bool,
    },
    /// Print the validated content as JSON.
    Export {
        /// Content JSON. Defaults to the content compiled into the site.
        #[arg(long)]
        content: Option<PathBuf>,
        /// Pretty-print the output.
        #[arg(long)]
        pretty: bool,
    },
    /// Print the nav bar's label → anchor table.
    Sections {
        /// Resolve a single label instead of printing the table.
        #[arg(long)]
        label: Option<String>,
    },
}
