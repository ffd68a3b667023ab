//! Resolution of named clients into `ClientSettings`.
//!
//! Responsibilities:
//! - Resolve one client's fields independently, applying defaults (`client_settings`).
//! - Resolve every configured client plus `"default"` (`load`).
//!
//! Does NOT handle:
//! - Credential parsing (delegated to credential.rs).
//! - Name discovery rules (delegated to field.rs).
//!
//! Invariants:
//! - Unset fields take exactly the built-in default.
//! - Set fields are used verbatim (strings) or parsed strictly (timeouts).

use std::collections::BTreeMap;

use super::credential::load_credential;
use super::error::SettingsError;
use super::field::{ClientField, client_names};
use crate::constants::{DEFAULT_APPLICATION_NAME, DEFAULT_CLIENT_NAME, DEFAULT_ENDPOINT};
use crate::settings::SettingsSource;
use crate::types::{ClientSettings, TimeValue, default_connect_timeout, default_read_timeout};

/// Resolve every client configured in `store`.
///
/// The result always contains [`DEFAULT_CLIENT_NAME`]; when it is not
/// configured it is built entirely from defaults.
pub fn load(store: &dyn SettingsSource) -> Result<BTreeMap<String, ClientSettings>, SettingsError> {
    let mut names = client_names(store);
    names.insert(DEFAULT_CLIENT_NAME.to_string());

    let clients = names
        .into_iter()
        .map(|name| {
            let settings = client_settings(store, &name)?;
            Ok((name, settings))
        })
        .collect::<Result<BTreeMap<_, _>, SettingsError>>()?;

    tracing::debug!(
        count = clients.len(),
        clients = ?clients.keys().collect::<Vec<_>>(),
        "Resolved GCS client settings"
    );
    Ok(clients)
}

/// Resolve the settings of a single client.
pub fn client_settings(
    store: &dyn SettingsSource,
    client: &str,
) -> Result<ClientSettings, SettingsError> {
    let credential = load_credential(store, client)?;
    let endpoint = string_setting(store, client, ClientField::Endpoint, DEFAULT_ENDPOINT);
    let connect_timeout = time_setting(
        store,
        client,
        ClientField::ConnectTimeout,
        default_connect_timeout(),
    )?;
    let read_timeout =
        time_setting(store, client, ClientField::ReadTimeout, default_read_timeout())?;
    let application_name = string_setting(
        store,
        client,
        ClientField::ApplicationName,
        DEFAULT_APPLICATION_NAME,
    );

    Ok(ClientSettings::new(
        client,
        credential,
        endpoint,
        connect_timeout,
        read_timeout,
        application_name,
    ))
}

fn string_setting(
    store: &dyn SettingsSource,
    client: &str,
    field: ClientField,
    default: &str,
) -> String {
    store
        .get(&field.key(client))
        .unwrap_or(default)
        .to_string()
}

fn time_setting(
    store: &dyn SettingsSource,
    client: &str,
    field: ClientField,
    default: TimeValue,
) -> Result<TimeValue, SettingsError> {
    let key = field.key(client);
    match store.get(&key) {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|source| SettingsError::InvalidTimeValue {
                key,
                value: raw.to_string(),
                source,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::test_util::{FIXTURE_KEYS, service_account_json};
    use crate::types::TimeValueParseError;

    #[test]
    fn test_load_with_empty_settings() {
        let clients = load(&Settings::empty()).unwrap();

        assert_eq!(clients.len(), 1);
        assert_eq!(
            clients.get("default"),
            Some(&ClientSettings::with_defaults("default"))
        );
    }

    #[test]
    fn test_client_settings_applies_defaults_per_field() {
        let settings = Settings::builder()
            .put("gcs.client.backup.endpoint", "http://localhost:4443")
            .put("gcs.client.backup.read_timeout", "-1")
            .build();

        let client = client_settings(&settings, "backup").unwrap();

        assert_eq!(client.name(), "backup");
        assert!(client.credential().is_none());
        assert_eq!(client.endpoint(), "http://localhost:4443");
        assert_eq!(client.connect_timeout(), default_connect_timeout());
        assert_eq!(client.read_timeout(), TimeValue::MINUS_ONE);
        assert_eq!(client.application_name(), DEFAULT_APPLICATION_NAME);
    }

    #[test]
    fn test_timeout_sentinels_are_preserved() {
        let settings = Settings::builder()
            .put("gcs.client.a.connect_timeout", "-1")
            .put("gcs.client.a.read_timeout", "0")
            .build();

        let client = client_settings(&settings, "a").unwrap();

        assert_eq!(client.connect_timeout(), TimeValue::MINUS_ONE);
        assert!(client.connect_timeout().is_infinite());
        assert_eq!(client.read_timeout(), TimeValue::ZERO);
    }

    #[test]
    fn test_explicit_default_overrides_builtins() {
        let (pem, _) = FIXTURE_KEYS[1];
        let settings = Settings::builder()
            .put("gcs.client.default.endpoint", "http://override")
            .put("gcs.client.default.connect_timeout", "5s")
            .put("gcs.client.default.application_name", "my-app")
            .set_secure_file(
                "gcs.client.default.credentials_file",
                service_account_json("default", pem),
            )
            .build();

        let clients = load(&settings).unwrap();

        assert_eq!(clients.len(), 1);
        let default = &clients["default"];
        assert_eq!(default.endpoint(), "http://override");
        assert_eq!(default.connect_timeout(), TimeValue::from_secs(5));
        assert_eq!(default.read_timeout(), default_read_timeout());
        assert_eq!(default.application_name(), "my-app");
        assert_eq!(default.credential().unwrap().client_email(), "default");
    }

    #[test]
    fn test_invalid_timeout_aborts_load() {
        let settings = Settings::builder()
            .put("gcs.client.good.endpoint", "http://good")
            .put("gcs.client.bad.connect_timeout", "soon")
            .build();

        let err = load(&settings).unwrap_err();

        match err {
            SettingsError::InvalidTimeValue { key, value, source } => {
                assert_eq!(key, "gcs.client.bad.connect_timeout");
                assert_eq!(value, "soon");
                assert_eq!(source, TimeValueParseError::MissingUnit);
            }
            other => panic!("expected InvalidTimeValue, got {other:?}"),
        }
    }

    #[test]
    fn test_broken_credential_aborts_load() {
        let settings = Settings::builder()
            .put("gcs.client.good.endpoint", "http://good")
            .set_secure_file("gcs.client.bad.credentials_file", b"{}".to_vec())
            .build();

        let err = load(&settings).unwrap_err();

        assert!(matches!(err, SettingsError::Credential { ref client, .. } if client == "bad"));
    }

    #[test]
    fn test_load_is_deterministic() {
        let (pem, _) = FIXTURE_KEYS[2];
        let settings = Settings::builder()
            .put("gcs.client.a.endpoint", "http://a")
            .put("gcs.client.b.read_timeout", "30s")
            .set_secure_file("gcs.client.c.credentials_file", service_account_json("c", pem))
            .build();

        let first = load(&settings).unwrap();
        let second = load(&settings).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["a", "b", "c", "default"]
        );
    }
}
