use std::env::{self, VarError};

use crate::error::{Result, StampError};
use crate::source::VersionSource;

/// Reads versions from the real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VersionSource for ProcessEnv {
    fn raw_version(&self, var: &str) -> Result<String> {
        match env::var(var) {
            Ok(value) => Ok(value),
            Err(VarError::NotPresent) => Err(StampError::missing_version(var)),
            Err(VarError::NotUnicode(_)) => Err(StampError::InvalidVersionEncoding {
                var: var.to_string(),
            }),
        }
    }
}
