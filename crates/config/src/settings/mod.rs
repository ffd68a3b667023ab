//! Settings stores consumed by the client settings resolver.
//!
//! Responsibilities:
//! - Define the `SettingsSource` trait (plain values, secure files, key enumeration).
//! - Provide `Settings`, an immutable in-memory snapshot, and its `SettingsBuilder`.
//! - Populate a builder from JSON documents, key files, and environment variables.
//!
//! Does NOT handle:
//! - Interpreting client keys (see `loader` module).
//! - Watching sources for changes; a `Settings` value is a snapshot.
//!
//! Invariants:
//! - The store is flat: later writes to the same key replace earlier ones.
//! - Secure files are held in `secrecy` containers and never appear in `Debug` output.
//! - `keys()` lists plain and secure keys in sorted order without duplicates.

mod env;
mod error;
mod json;

use secrecy::{ExposeSecret, SecretBox};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

pub use env::env_var_or_none;
pub use error::SourceError;

/// Read access to a flattened settings snapshot.
pub trait SettingsSource {
    /// Plain string value stored at `key`.
    fn get(&self, key: &str) -> Option<&str>;

    /// Secure file contents stored at `key`.
    fn get_secure_file(&self, key: &str) -> Option<&[u8]>;

    /// Every key present in the store, plain and secure.
    fn keys(&self) -> Vec<&str>;
}

/// Immutable in-memory settings snapshot.
#[derive(Debug, Default)]
pub struct Settings {
    values: BTreeMap<String, String>,
    secure_files: BTreeMap<String, SecretBox<[u8]>>,
}

impl Settings {
    /// A snapshot with nothing configured.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.secure_files.is_empty()
    }
}

impl SettingsSource for Settings {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn get_secure_file(&self, key: &str) -> Option<&[u8]> {
        self.secure_files.get(key).map(|file| file.expose_secret())
    }

    fn keys(&self) -> Vec<&str> {
        self.values
            .keys()
            .chain(self.secure_files.keys())
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Builder for [`Settings`].
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    settings: Settings,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a plain value.
    pub fn put(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.values.insert(key.into(), value.into());
        self
    }

    /// Set a secure file from its contents.
    pub fn set_secure_file(mut self, key: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        let contents: Vec<u8> = contents.into();
        self.settings
            .secure_files
            .insert(key.into(), SecretBox::new(contents.into_boxed_slice()));
        self
    }

    /// Set a secure file by reading it from disk.
    pub fn set_secure_file_from_path(
        self,
        key: impl Into<String>,
        path: &Path,
    ) -> Result<Self, SourceError> {
        let contents = std::fs::read(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.set_secure_file(key, contents))
    }

    /// Set plain values from a JSON object, flattening nested objects into dotted keys.
    ///
    /// `{"gcs": {"client": {"default": {"endpoint": "http://localhost"}}}}` sets
    /// `gcs.client.default.endpoint`. Dotted keys inside the document are kept as-is.
    pub fn put_json(mut self, document: &serde_json::Value) -> Result<Self, SourceError> {
        for (key, value) in json::flatten(document)? {
            self.settings.values.insert(key, value);
        }
        Ok(self)
    }

    /// Set plain values from a JSON file (see [`SettingsBuilder::put_json`]).
    pub fn load_json_file(self, path: &Path) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| SourceError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        self.put_json(&document)
    }

    /// Set client values from `GCS_CLIENT_<NAME>_<FIELD>` environment variables.
    ///
    /// `GCS_CLIENT_<NAME>_CREDENTIALS_FILE` names a file whose contents become
    /// the secure credentials file of that client.
    pub fn load_env(mut self) -> Result<Self, SourceError> {
        for entry in env::client_env_entries() {
            self = match entry {
                env::EnvEntry::Plain { key, value } => self.put(key, value),
                env::EnvEntry::SecureFile { key, path } => {
                    self.set_secure_file_from_path(key, &path)?
                }
            };
        }
        Ok(self)
    }

    pub fn build(self) -> Settings {
        self.settings
    }
}
