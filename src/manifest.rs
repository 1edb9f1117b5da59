//! Manifest reading, placeholder substitution and writing.
//!
//! [`stamp_content`] is pure and works on injected strings; [`read_manifest`]
//! and [`write_manifest`] are the thin file-system shell around it.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, StampError};

/// Placeholder version the manifest carries until a release build stamps it.
pub const DEFAULT_PLACEHOLDER: &str = "0.0.1-dirty";

/// Manifest stamped when nothing else is configured.
pub const DEFAULT_MANIFEST: &str = "Cargo.toml";

/// Result of substituting the placeholder in manifest text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampOutcome {
    /// Manifest text after substitution
    pub content: String,
    /// Number of placeholder occurrences that were replaced
    pub replacements: usize,
}

impl StampOutcome {
    /// True when the placeholder was found at least once.
    pub fn changed(&self) -> bool {
        self.replacements > 0
    }
}

/// Replaces every literal occurrence of `placeholder` in `content` with `version`.
///
/// This is plain substring replacement with no knowledge of the manifest
/// format. Content without the placeholder comes back unchanged with zero
/// replacements. An empty placeholder matches nothing.
pub fn stamp_content(content: &str, placeholder: &str, version: &str) -> StampOutcome {
    if placeholder.is_empty() {
        return StampOutcome {
            content: content.to_string(),
            replacements: 0,
        };
    }

    StampOutcome {
        content: content.replace(placeholder, version),
        replacements: content.matches(placeholder).count(),
    }
}

/// Reads the full manifest text.
///
/// # Returns
/// * `Ok(String)` - Non-empty manifest content
/// * `Err(StampError::ExpectedContent)` - If the file is missing, unreadable or empty
pub fn read_manifest(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| {
        let reason = match e.kind() {
            ErrorKind::NotFound => "file not found".to_string(),
            _ => e.to_string(),
        };
        StampError::expected_content(path, reason)
    })?;

    if content.is_empty() {
        return Err(StampError::expected_content(path, "file is empty"));
    }

    Ok(content)
}

/// Overwrites the manifest with `content` in full.
pub fn write_manifest(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
