//! Per-client settings for Google Cloud Storage repositories.
//!
//! This crate resolves named GCS client profiles (`gcs.client.<name>.*`) from a
//! settings snapshot into typed `ClientSettings`, including service-account
//! credentials read from secure files.

pub mod constants;
mod loader;
pub mod settings;
pub mod types;

pub use loader::{ClientField, SettingsError, client_names, client_settings, load, load_credential};
pub use settings::{Settings, SettingsBuilder, SettingsSource, SourceError, env_var_or_none};
pub use types::{
    ClientSettings, CredentialError, PrivateKey, ServiceAccountCredential, TimeUnit, TimeValue,
    TimeValueParseError,
};
