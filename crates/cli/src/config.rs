//! Configuration loading for the `greypot` binary.
//!
//! Values are resolved in three layers, later ones winning:
//!
//! 1. Built-in defaults ([`DEFAULT_API_URL`], no timeout).
//! 2. The TOML config file (`greypot.toml` unless `--config` names another).
//! 3. Command-line flags and their environment variables
//!    (`GREYPOT_API_URL`, `GREYPOT_TIMEOUT_SECS`).
//!
//! ```toml
//! api_url = "https://greypot-studio.fly.dev"
//! timeout_secs = 30
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use studio_client::StudioClientConfig;
use tracing::debug;

use crate::error::CliError;

/// Config file read when `--config` is not given. Its absence is not an error.
pub const DEFAULT_CONFIG_FILE: &str = "greypot.toml";

/// Public Greypot Studio instance used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://greypot-studio.fly.dev";

/// Contents of the TOML config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Parses config file contents; `path` is only used for error context.
    pub fn parse(content: &str, path: &Path) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the config file.
    ///
    /// With `explicit` set the file must exist. Otherwise [`DEFAULT_CONFIG_FILE`]
    /// is tried and silently skipped when missing.
    #[tracing::instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => {
                debug!(path = %path.display(), "Loaded config file");
                Self::parse(&content, &path)
            }
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(CliError::ConfigRead { path, source }),
        }
    }
}

/// Fully resolved client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub api_url: String,
    pub timeout: Option<Duration>,
}

impl CliConfig {
    /// Layers command-line overrides on top of the file config and defaults.
    pub fn resolve(file: FileConfig, api_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        Self {
            api_url: api_url
                .or(file.api_url)
                .unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
            timeout: timeout_secs.or(file.timeout_secs).map(Duration::from_secs),
        }
    }

    /// Builds the client configuration.
    pub fn client_config(&self) -> StudioClientConfig {
        let config = StudioClientConfig::new(self.api_url.clone());
        match self.timeout {
            Some(timeout) => config.with_timeout(timeout),
            None => config,
        }
    }
}
