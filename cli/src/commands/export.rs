//! `export` subcommand.

use std::{io::Write, path::Path};

use anyhow::Result;

use super::load_content;

/// Write the validated content to `out` as JSON.
pub fn run(content: Option<&Path>, pretty: bool, out: &mut impl Write) -> Result<()> {
    let portfolio = load_content(content)?;
    if pretty {
        serde_json::to_writer_pretty(&mut *out, &portfolio)?;
    } else {
        serde_json::to_writer(&mut *out, &portfolio)?;
    }
    writeln!(out)?;
    Ok(())
}
