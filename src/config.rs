use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StampError};
use crate::manifest::{DEFAULT_MANIFEST, DEFAULT_PLACEHOLDER};
use crate::source::DEFAULT_VERSION_VAR;

/// Name of the project-local configuration file.
pub const CONFIG_FILE_NAME: &str = "versionstamp.toml";

/// Represents the complete configuration for version-stamp.
///
/// Every key is optional; missing keys fall back to the conventional
/// `VERSION` / `Cargo.toml` / `0.0.1-dirty` setup.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    #[serde(default = "default_env_var")]
    pub env_var: String,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_manifest() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST)
}

fn default_env_var() -> String {
    DEFAULT_VERSION_VAR.to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifest: default_manifest(),
            env_var: default_env_var(),
            placeholder: default_placeholder(),
        }
    }
}

/// Command-line values that take precedence over the configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub manifest: Option<PathBuf>,
    pub env_var: Option<String>,
    pub placeholder: Option<String>,
}

impl Config {
    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(manifest) = overrides.manifest {
            self.manifest = manifest;
        }
        if let Some(env_var) = overrides.env_var {
            self.env_var = env_var;
        }
        if let Some(placeholder) = overrides.placeholder {
            self.placeholder = placeholder;
        }
        self
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versionstamp.toml` in current directory
/// 3. `.versionstamp.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err(StampError::Config)` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if user_path.exists() {
            user_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path)
        .map_err(|e| StampError::config(format!("cannot read {}: {}", path.display(), e)))?;
    toml::from_str(&config_str)
        .map_err(|e| StampError::config(format!("cannot parse {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.manifest, PathBuf::from("Cargo.toml"));
        assert_eq!(config.env_var, "VERSION");
        assert_eq!(config.placeholder, "0.0.1-dirty");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("env_var = \"RELEASE_TAG\"\n").unwrap();
        assert_eq!(config.env_var, "RELEASE_TAG");
        assert_eq!(config.manifest, PathBuf::from("Cargo.toml"));
        assert_eq!(config.placeholder, "0.0.1-dirty");
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = Config {
            manifest: PathBuf::from("crates/core/Cargo.toml"),
            env_var: "RELEASE_TAG".to_string(),
            placeholder: "0.0.0".to_string(),
        }
        .with_overrides(ConfigOverrides {
            env_var: Some("TAG".to_string()),
            ..ConfigOverrides::default()
        });

        assert_eq!(config.env_var, "TAG");
        assert_eq!(config.manifest, PathBuf::from("crates/core/Cargo.toml"));
        assert_eq!(config.placeholder, "0.0.0");
    }
}
