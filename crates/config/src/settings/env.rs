//! Environment variable mapping for client settings.
//!
//! Responsibilities:
//! - Map `GCS_CLIENT_<NAME>_<FIELD>` variables onto `gcs.client.<name>.<field>` keys.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Reading credential files (the builder does that for `SecureFile` entries).
//! - Validating values; the resolver parses them like any other setting.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Client names are lower-cased; variables with an empty name or an unknown field are skipped.
//! - Entries are produced in sorted variable-name order.

use std::path::PathBuf;

use crate::constants::ENV_PREFIX;
use crate::loader::ClientField;

/// Read an environment variable as a trimmed value; blank or unset is `None`.
pub fn env_var_or_none(key: &str) -> Option<String> {
    let value = std::env::var(key).ok()?;
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// A setting derived from one environment variable.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum EnvEntry {
    Plain { key: String, value: String },
    SecureFile { key: String, path: PathBuf },
}

/// Collect every client setting present in the environment.
pub(super) fn client_env_entries() -> Vec<EnvEntry> {
    let mut names: Vec<String> = std::env::vars_os()
        .filter_map(|(name, _)| name.into_string().ok())
        .filter(|name| name.starts_with(ENV_PREFIX))
        .collect();
    names.sort();

    names
        .into_iter()
        .filter_map(|var| {
            let Some((client, field)) = split_env_var(&var) else {
                tracing::warn!(var = %var, "Ignoring environment variable with no client name or unknown field");
                return None;
            };
            let value = env_var_or_none(&var)?;
            let key = field.key(&client);
            Some(if field.is_secure() {
                EnvEntry::SecureFile {
                    key,
                    path: PathBuf::from(value),
                }
            } else {
                EnvEntry::Plain { key, value }
            })
        })
        .collect()
}

/// Split `GCS_CLIENT_<NAME>_<FIELD>` into the lower-cased name and the field.
fn split_env_var(var: &str) -> Option<(String, ClientField)> {
    let rest = var.strip_prefix(ENV_PREFIX)?;
    ClientField::ALL.iter().find_map(|field| {
        let suffix = format!("_{}", field.suffix().to_ascii_uppercase());
        rest.strip_suffix(&suffix)
            .filter(|name| !name.is_empty())
            .map(|name| (name.to_ascii_lowercase(), *field))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_treats_blank_values_as_unset() {
        let endpoint = "GCS_CLIENT_BLANKCHECK_ENDPOINT";
        assert_eq!(env_var_or_none(endpoint), None);

        for blank in ["", " ", "\t\n"] {
            temp_env::with_var(endpoint, Some(blank), || {
                assert_eq!(env_var_or_none(endpoint), None, "blank value {blank:?}");
            });
        }

        temp_env::with_var(endpoint, Some("  http://localhost:4443 "), || {
            assert_eq!(
                env_var_or_none(endpoint).as_deref(),
                Some("http://localhost:4443")
            );
        });
    }

    #[test]
    fn test_split_env_var() {
        assert_eq!(
            split_env_var("GCS_CLIENT_DEFAULT_ENDPOINT"),
            Some(("default".to_string(), ClientField::Endpoint))
        );
        assert_eq!(
            split_env_var("GCS_CLIENT_MY_BACKUP_CONNECT_TIMEOUT"),
            Some(("my_backup".to_string(), ClientField::ConnectTimeout))
        );
        assert_eq!(
            split_env_var("GCS_CLIENT_X_READ_TIMEOUT"),
            Some(("x".to_string(), ClientField::ReadTimeout))
        );
        assert_eq!(
            split_env_var("GCS_CLIENT_PROD_CREDENTIALS_FILE"),
            Some(("prod".to_string(), ClientField::CredentialsFile))
        );
        assert_eq!(split_env_var("GCS_CLIENT__ENDPOINT"), None);
        assert_eq!(split_env_var("GCS_CLIENT_PROD_PROXY_HOST"), None);
        assert_eq!(split_env_var("OTHER_ENDPOINT"), None);
    }

    #[test]
    #[serial]
    fn test_client_env_entries() {
        temp_env::with_vars(
            [
                ("GCS_CLIENT_BACKUP_ENDPOINT", Some("http://localhost:4443")),
                ("GCS_CLIENT_BACKUP_CREDENTIALS_FILE", Some("/etc/gcs/backup.json")),
                ("GCS_CLIENT_BACKUP_READ_TIMEOUT", Some("   ")),
                ("GCS_CLIENT_BACKUP_UNKNOWN", Some("ignored")),
            ],
            || {
                let entries = client_env_entries();
                assert_eq!(
                    entries,
                    vec![
                        EnvEntry::SecureFile {
                            key: "gcs.client.backup.credentials_file".to_string(),
                            path: PathBuf::from("/etc/gcs/backup.json"),
                        },
                        EnvEntry::Plain {
                            key: "gcs.client.backup.endpoint".to_string(),
                            value: "http://localhost:4443".to_string(),
                        },
                    ]
                );
            },
        );
    }
}
