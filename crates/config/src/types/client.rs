//! Per-client settings record.
//!
//! Responsibilities:
//! - Define `ClientSettings`, the resolved configuration of one named client.
//! - Provide the built-in defaults for a client with no configuration.
//!
//! Does NOT handle:
//! - Reading values from a settings store (see `loader::resolver`).
//! - Opening connections with these settings.
//!
//! Invariants:
//! - Values are immutable once built; accessors only borrow.
//! - `ClientSettings::with_defaults(name)` uses exactly the constants in `constants.rs`.

use crate::constants::{
    DEFAULT_APPLICATION_NAME, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_ENDPOINT,
    DEFAULT_READ_TIMEOUT_SECS,
};
use crate::types::credential::ServiceAccountCredential;
use crate::types::time_value::TimeValue;

/// Default connect timeout.
pub fn default_connect_timeout() -> TimeValue {
    TimeValue::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)
}

/// Default read timeout.
pub fn default_read_timeout() -> TimeValue {
    TimeValue::from_secs(DEFAULT_READ_TIMEOUT_SECS)
}

/// Resolved configuration for one named storage client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    name: String,
    credential: Option<ServiceAccountCredential>,
    endpoint: String,
    connect_timeout: TimeValue,
    read_timeout: TimeValue,
    application_name: String,
}

impl ClientSettings {
    pub fn new(
        name: impl Into<String>,
        credential: Option<ServiceAccountCredential>,
        endpoint: impl Into<String>,
        connect_timeout: TimeValue,
        read_timeout: TimeValue,
        application_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            credential,
            endpoint: endpoint.into(),
            connect_timeout,
            read_timeout,
            application_name: application_name.into(),
        }
    }

    /// Settings for a client that has nothing configured.
    pub fn with_defaults(name: impl Into<String>) -> Self {
        Self::new(
            name,
            None,
            DEFAULT_ENDPOINT,
            default_connect_timeout(),
            default_read_timeout(),
            DEFAULT_APPLICATION_NAME,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The service-account credential, if a credentials file was configured.
    pub fn credential(&self) -> Option<&ServiceAccountCredential> {
        self.credential.as_ref()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn connect_timeout(&self) -> TimeValue {
        self.connect_timeout
    }

    pub fn read_timeout(&self) -> TimeValue {
        self.read_timeout
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_defaults() {
        let settings = ClientSettings::with_defaults("default");
        assert_eq!(settings.name(), "default");
        assert!(settings.credential().is_none());
        assert_eq!(settings.endpoint(), "https://www.googleapis.com/");
        assert_eq!(settings.connect_timeout(), TimeValue::from_secs(20));
        assert_eq!(settings.read_timeout(), TimeValue::from_secs(20));
        assert_eq!(settings.application_name(), "repository-gcs");
    }

    #[test]
    fn test_defaults_differ_from_sentinels() {
        let settings = ClientSettings::with_defaults("default");
        assert_ne!(settings.connect_timeout(), TimeValue::MINUS_ONE);
        assert_ne!(settings.connect_timeout(), TimeValue::ZERO);
    }
}
