//! `sections` subcommand.

use std::io::Write;

use anyhow::{anyhow, Result};
use portfolio_shared::{Section, NAV_OFFSET_PX};

/// Write the nav table and the scroll offset reserved for the nav bar, or
/// just the anchor for `label` when given.
pub fn run(label: Option<&str>, out: &mut impl Write) -> Result<()> {
    if let Some(label) = label {
        let section =
            Section::from_label(label).ok_or_else(|| anyhow!("unknown section `{label}`"))?;
        writeln!(out, "{}", section.href())?;
        return Ok(());
    }

    for section in Section::NAV {
        writeln!(out, "{:<12} {}", section.label(), section.href())?;
    }
    writeln!(out, "nav offset: {NAV_OFFSET_PX}px")?;
    Ok(())
}
