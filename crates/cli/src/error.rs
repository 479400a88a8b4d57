//! Errors raised by the command-line layer.
//!
//! Local collaborator failures (config, template, data, and output files) get
//! their own variants so they stay distinguishable from failures of the
//! generation exchange itself, which arrive wrapped in
//! [`CliError::Generation`].

use std::path::PathBuf;

use document::GreypotError;
use thiserror::Error;

/// Errors that end a `greypot` run.
#[derive(Debug, Error)]
pub enum CliError {
    /// The config file exists but could not be read, or an explicitly named
    /// config file is missing.
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        /// Config file that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or contains unknown keys.
    #[error("Failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        /// Config file that was being parsed.
        path: PathBuf,
        /// Underlying TOML failure.
        #[source]
        source: toml::de::Error,
    },

    /// The template file could not be read. Raised before any network call.
    #[error("Error reading template file {}: {source}", path.display())]
    TemplateRead {
        /// Template file that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The template file was read but is not UTF-8 text. Raised before any
    /// network call.
    #[error("Template file {} is not valid UTF-8: {source}", path.display())]
    TemplateEncoding {
        /// Template file with the offending bytes.
        path: PathBuf,
        /// Position of the first invalid byte sequence.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The explicit `--name`, or the template's file name, is not a usable
    /// template identifier.
    #[error("Invalid template name '{value}': must be a non-empty URL path segment")]
    InvalidTemplateName {
        /// The rejected name.
        value: String,
    },

    /// The data file could not be read.
    #[error("Error reading data file {}: {source}", path.display())]
    DataRead {
        /// Data file that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The data file is not valid JSON.
    #[error("Data file {} is not valid JSON: {source}", path.display())]
    DataParse {
        /// Data file that was being parsed.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },

    /// The artifact was generated but could not be saved. The remote call is
    /// not undone.
    #[error("Error saving PDF to {}: {source}", path.display())]
    OutputWrite {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The tracing subscriber or OTLP exporter could not be installed.
    #[error("Failed to initialise telemetry: {message}")]
    Telemetry {
        /// Description of the failure.
        message: String,
    },

    /// The generation exchange or artifact decoding failed.
    #[error(transparent)]
    Generation(#[from] GreypotError),
}
