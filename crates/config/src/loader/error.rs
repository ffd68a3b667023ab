//! Error types for client settings resolution.
//!
//! Responsibilities:
//! - Define error variants for all resolution failures.
//! - Provide conversion from settings source errors.
//!
//! Invariants:
//! - All error variants name the setting key or client involved.
//! - Errors never include secure file contents or key material.

use thiserror::Error;

use crate::settings::SourceError;
use crate::types::{CredentialError, TimeValueParseError};

/// Errors that can occur while resolving client settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Invalid time value '{value}' for setting '{key}': {source}")]
    InvalidTimeValue {
        key: String,
        value: String,
        #[source]
        source: TimeValueParseError,
    },

    #[error("Failed to load credentials for client '{client}': {source}")]
    Credential {
        client: String,
        #[source]
        source: CredentialError,
    },

    #[error("Setting '{key}' is secure and must be provided as a secure file")]
    InsecureSetting { key: String },

    #[error(transparent)]
    Source(#[from] SourceError),
}
