use std::collections::HashMap;

use crate::error::{Result, StampError};
use crate::source::VersionSource;

/// Mock environment for testing without touching process state
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    /// Create an empty mock environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, builder style
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Set a variable
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl VersionSource for MockEnv {
    fn raw_version(&self, var: &str) -> Result<String> {
        self.vars
            .get(var)
            .cloned()
            .ok_or_else(|| StampError::missing_version(var))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_returns_value() {
        let env = MockEnv::new().with_var("VERSION", "v0.9.0");
        assert_eq!(env.raw_version("VERSION").unwrap(), "v0.9.0");
    }

    #[test]
    fn test_mock_missing_value() {
        let mut env = MockEnv::new();
        env.set_var("OTHER", "1.0.0");
        assert!(matches!(
            env.raw_version("VERSION"),
            Err(StampError::MissingVersion { .. })
        ));
    }
}
