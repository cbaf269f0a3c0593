//! `validate` subcommand.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use anyhow::{bail, Result};

use super::load_content;

/// Outcome of a successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of carousel panels.
    pub projects: usize,
    /// Number of timeline entries.
    pub experience: usize,
    /// Assets that were checked and found.
    pub assets_found: usize,
    /// Assets referenced but absent under the asset root.
    pub missing_assets: Vec<PathBuf>,
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "content ok: {} projects, {} experience entries, {} assets found, {} missing",
            self.projects,
            self.experience,
            self.assets_found,
            self.missing_assets.len()
        )
    }
}

/// Validate content and, when `assets` is given, check every referenced
/// asset exists under it. Missing assets fail only in `strict` mode.
pub fn run(content: Option<&Path>, assets: Option<&Path>, strict: bool) -> Result<ValidationReport> {
    let portfolio = load_content(content)?;

    let mut report = ValidationReport {
        projects: portfolio.projects.len(),
        experience: portfolio.experience.len(),
        assets_found: 0,
        missing_assets: Vec::new(),
    };

    if let Some(root) = assets {
        for asset in portfolio.asset_paths() {
            // Remote thumbnails are not ours to check.
            if asset.starts_with("http://") || asset.starts_with("https://") {
                continue;
            }
            let path = root.join(asset.trim_start_matches('/'));
            if path.is_file() {
                report.assets_found += 1;
            } else {
                tracing::warn!(path = %path.display(), "referenced asset is missing");
                report.missing_assets.push(path);
            }
        }
    }

    if strict && !report.missing_assets.is_empty() {
        bail!("{} referenced asset(s) missing", report.missing_assets.len());
    }

    tracing::info!(projects = report.projects, "content validated");
    Ok(report)
}
