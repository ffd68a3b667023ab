//! Credential loading from secure settings.
//!
//! Responsibilities:
//! - Look up the `credentials_file` secure setting of a client.
//! - Parse it into a `ServiceAccountCredential`.
//!
//! Invariants:
//! - A missing secure file is `Ok(None)`, not an error.
//! - A present but unusable file is always an error; there is no fallback.
//! - A `credentials_file` given as a plain setting is an error.

use super::error::SettingsError;
use super::field::ClientField;
use crate::settings::SettingsSource;
use crate::types::ServiceAccountCredential;

/// Load the service-account credential configured for `client`, if any.
pub fn load_credential(
    store: &dyn SettingsSource,
    client: &str,
) -> Result<Option<ServiceAccountCredential>, SettingsError> {
    let key = ClientField::CredentialsFile.key(client);
    if store.get(&key).is_some() {
        return Err(SettingsError::InsecureSetting { key });
    }
    let Some(contents) = store.get_secure_file(&key) else {
        return Ok(None);
    };

    let credential =
        ServiceAccountCredential::from_json_bytes(contents).map_err(|source| {
            SettingsError::Credential {
                client: client.to_string(),
                source,
            }
        })?;

    tracing::debug!(
        client,
        account = credential.client_email(),
        project_id = credential.project_id(),
        "Loaded service account credential"
    );
    Ok(Some(credential))
}
