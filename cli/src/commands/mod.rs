//! Subcommand implementations.

pub mod export;
pub mod sections;
pub mod validate;

use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use portfolio_shared::Portfolio;

use crate::cli::{Cli, Commands};

/// Dispatch `cli`, writing command output to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Validate {
            content,
            assets,
            strict,
        } => {
            let report = validate::run(content.as_deref(), assets.as_deref(), strict)?;
            writeln!(out, "{report}")?;
            Ok(())
        },
        Commands::Export {
            content,
            pretty,
        } => export::run(content.as_deref(), pretty, out),
        Commands::Sections {
            label,
        } => sections::run(label.as_deref(), out),
    }
}

/// Load content from `path`, or the embedded content when `None`.
pub fn load_content(path: Option<&Path>) -> Result<Portfolio> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Portfolio::from_json(&raw)
                .with_context(|| format!("invalid content in {}", path.display()))
        },
        None => Portfolio::embedded().context("embedded content is invalid"),
    }
}
