//! Version source abstraction layer
//!
//! The stamp workflow never reads the process environment directly. It asks a
//! [VersionSource] for the raw value, which keeps the workflow testable
//! without mutating global process state.
//!
//! - [process::ProcessEnv]: reads real environment variables
//! - [mock::MockEnv]: in-memory variables for tests

pub mod mock;
pub mod process;

pub use mock::MockEnv;
pub use process::ProcessEnv;

use crate::error::Result;

/// Environment variable carrying the version when nothing else is configured.
pub const DEFAULT_VERSION_VAR: &str = "VERSION";

/// Provides the raw (un-normalized) version identifier.
pub trait VersionSource {
    /// Look up the raw version stored under `var`.
    ///
    /// # Returns
    /// * `Ok(String)` - The value, possibly empty
    /// * `Err(StampError::MissingVersion)` - If `var` is not set
    /// * `Err(StampError::InvalidVersionEncoding)` - If the value is not valid UTF-8
    fn raw_version(&self, var: &str) -> Result<String>;
}
