//! Error types for the dashboard edges (config, terminal, file attach).
//!
//! The scenario generator itself has no error pathway; everything here
//! belongs to the surrounding application.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Top-level error returned from the application run loop.
#[derive(Error, Debug, Diagnostic)]
pub enum DashboardError {
    /// Terminal setup, drawing, or input failed.
    #[error("Terminal I/O error: {0}")]
    #[diagnostic(
        code("HOSPITALITY::TERMINAL"),
        help("Run inside an interactive terminal that supports raw mode")
    )]
    Terminal(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration file problems. The loader logs these and falls back to
/// defaults; they only surface when a caller asks for strict loading.
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("Failed to read config at {path}: {source}")]
    #[diagnostic(code("HOSPITALITY::CONFIG_READ"))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {source}")]
    #[diagnostic(
        code("HOSPITALITY::CONFIG_PARSE"),
        help("Check the TOML syntax; unknown languages must be one of en, el, zh")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Why a feedback file could not be attached.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("No file path given")]
    EmptyPath,

    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("Only CSV files are accepted: {0}")]
    NotCsv(PathBuf),

    #[error("Cannot access {path}: {reason}")]
    Inaccessible { path: PathBuf, reason: String },
}
