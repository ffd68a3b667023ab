//! Registry of per-client setting fields and client name discovery.
//!
//! Invariants:
//! - A client name is a non-empty run of ASCII alphanumerics, `_` or `-`.
//! - Only keys ending in a registered field contribute a client name.

use std::collections::BTreeSet;

use crate::constants::CLIENT_SETTINGS_PREFIX;
use crate::settings::SettingsSource;

/// A setting recognized under `gcs.client.<name>.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientField {
    CredentialsFile,
    Endpoint,
    ConnectTimeout,
    ReadTimeout,
    ApplicationName,
}

impl ClientField {
    pub const ALL: [ClientField; 5] = [
        ClientField::CredentialsFile,
        ClientField::Endpoint,
        ClientField::ConnectTimeout,
        ClientField::ReadTimeout,
        ClientField::ApplicationName,
    ];

    /// Last segment of the setting key.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::CredentialsFile => "credentials_file",
            Self::Endpoint => "endpoint",
            Self::ConnectTimeout => "connect_timeout",
            Self::ReadTimeout => "read_timeout",
            Self::ApplicationName => "application_name",
        }
    }

    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.suffix() == suffix)
    }

    /// Full setting key of this field for `client`.
    pub fn key(self, client: &str) -> String {
        format!("{CLIENT_SETTINGS_PREFIX}{client}.{}", self.suffix())
    }

    /// Whether this field is read from secure files rather than plain values.
    pub fn is_secure(self) -> bool {
        matches!(self, Self::CredentialsFile)
    }
}

fn is_valid_client_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Extract the client name from `gcs.client.<name>.<field>`.
pub(crate) fn parse_client_key(key: &str) -> Option<(&str, ClientField)> {
    let rest = key.strip_prefix(CLIENT_SETTINGS_PREFIX)?;
    let (name, suffix) = rest.split_once('.')?;
    let field = ClientField::from_suffix(suffix)?;
    is_valid_client_name(name).then_some((name, field))
}

/// Distinct client names configured in `store`, in sorted order.
pub fn client_names(store: &dyn SettingsSource) -> BTreeSet<String> {
    store
        .keys()
        .into_iter()
        .filter(|key| key.starts_with(CLIENT_SETTINGS_PREFIX))
        .filter_map(|key| {
            let parsed = parse_client_key(key);
            if parsed.is_none() {
                tracing::trace!(key, "Ignoring unrecognized client setting");
            }
            parsed
        })
        .map(|(name, _)| name.to_string())
        .collect()
}
