//! Main stamp workflow
//!
//! Holds the straight-line stamping sequence so it can be driven from `main`
//! or programmatically without depending on clap.

use std::path::PathBuf;

use crate::boundary::StampWarning;
use crate::config::Config;
use crate::error::Result;
use crate::manifest::{read_manifest, stamp_content, write_manifest};
use crate::source::VersionSource;
use crate::version::normalize;

/// Arguments for the stamp workflow that are not part of [`Config`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StampWorkflowArgs {
    /// Compute the stamped manifest but do not write it
    pub dry_run: bool,
}

/// Result of a successful stamp workflow
#[derive(Debug, Clone, PartialEq)]
pub struct StampResult {
    /// The manifest that was stamped
    pub manifest: PathBuf,

    /// The normalized version written into the manifest
    pub version: String,

    /// Number of placeholder occurrences replaced
    pub replacements: usize,

    /// Whether the manifest was written back
    pub written: bool,

    /// Non-fatal conditions met along the way
    pub warnings: Vec<StampWarning>,
}

/// Stamps the configured manifest with the version from `source`.
///
/// 1. Read the raw version (fails before any file access if missing)
/// 2. Strip the leading `v`
/// 3. Read the manifest
/// 4. Replace every placeholder occurrence
/// 5. Overwrite the manifest unless `dry_run` is set
///
/// A manifest without the placeholder is still rewritten, unchanged.
pub fn run_stamp_workflow<S>(
    source: &S,
    config: &Config,
    args: &StampWorkflowArgs,
) -> Result<StampResult>
where
    S: VersionSource + ?Sized,
{
    let mut warnings = Vec::new();

    let raw = source.raw_version(&config.env_var)?;
    let version = normalize(&raw).to_string();
    if version.is_empty() {
        warnings.push(StampWarning::EmptyVersion {
            var: config.env_var.clone(),
            raw: raw.clone(),
        });
    }

    let content = read_manifest(&config.manifest)?;
    let outcome = stamp_content(&content, &config.placeholder, &version);
    if !outcome.changed() {
        warnings.push(StampWarning::PlaceholderNotFound {
            manifest: config.manifest.clone(),
            placeholder: config.placeholder.clone(),
        });
    }

    if !args.dry_run {
        write_manifest(&config.manifest, &outcome.content)?;
    }

    Ok(StampResult {
        manifest: config.manifest.clone(),
        version,
        replacements: outcome.replacements,
        written: !args.dry_run,
        warnings,
    })
}
