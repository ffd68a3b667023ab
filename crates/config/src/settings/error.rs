//! Error types for settings sources.
//!
//! Invariants:
//! - Errors name the file or key involved, never secure file contents.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while populating a settings snapshot.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read settings file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file at {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported value for setting '{key}': {message}")]
    UnsupportedValue { key: String, message: String },
}
