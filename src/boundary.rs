use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions met while stamping a manifest.
/// These are reported to the user but do not stop the run.
#[derive(Debug, Clone, PartialEq)]
pub enum StampWarning {
    /// The manifest does not contain the placeholder; it is rewritten unchanged
    PlaceholderNotFound { manifest: PathBuf, placeholder: String },
    /// The version variable is set but normalizes to an empty string
    EmptyVersion { var: String, raw: String },
}

impl fmt::Display for StampWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StampWarning::PlaceholderNotFound {
                manifest,
                placeholder,
            } => write!(
                f,
                "Placeholder '{}' not found in {}; file left unchanged",
                placeholder,
                manifest.display()
            ),
            StampWarning::EmptyVersion { var, raw } => {
                if raw.is_empty() {
                    write!(f, "Environment variable '{}' is empty", var)
                } else {
                    write!(
                        f,
                        "Version '{}' from '{}' is empty after removing the prefix",
                        raw, var
                    )
                }
            }
        }
    }
}
