//! Service-account credential types.
//!
//! Responsibilities:
//! - Parse a service-account JSON document into a `ServiceAccountCredential`.
//! - Decode the embedded PEM private key and validate it as an RSA signing key.
//!
//! Does NOT handle:
//! - Looking up the document in a settings store (see `loader::credential`).
//! - Exchanging the credential for an access token.
//!
//! Invariants:
//! - A credential is either fully populated or not constructed at all.
//! - Key material never appears in `Debug` output or error messages.
//! - Scopes are always exactly `{DEVSTORAGE_FULL_CONTROL_SCOPE}`.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use jsonwebtoken::EncodingKey;
use secrecy::{ExposeSecret, SecretBox};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::constants::{DEVSTORAGE_FULL_CONTROL_SCOPE, SERVICE_ACCOUNT_TYPE};

/// Errors raised while materializing a credential from a secure blob.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("service account file is not valid UTF-8")]
    InvalidUtf8,

    /// SAFETY: only the serde position is kept, never the document text.
    #[error("service account file is not valid JSON (line {line}, column {column})")]
    InvalidJson { line: usize, column: usize },

    #[error("service account file is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("unsupported credential type '{0}', expected 'service_account'")]
    UnsupportedType(String),

    #[error("private key is not a valid PEM block: {0}")]
    InvalidPem(String),

    #[error("private key could not be decoded as an RSA key: {0}")]
    InvalidPrivateKey(String),
}

/// Raw service-account document, as written by the Google Cloud console.
#[derive(Deserialize)]
struct ServiceAccountFile {
    #[serde(rename = "type")]
    kind: Option<String>,
    project_id: Option<String>,
    private_key_id: Option<String>,
    private_key: Option<String>,
    client_email: Option<String>,
    client_id: Option<String>,
    auth_uri: Option<String>,
    token_uri: Option<String>,
}

/// A private key decoded from its PEM form.
///
/// Equality compares the DER bytes.
#[derive(Clone)]
pub struct PrivateKey {
    der: Arc<SecretBox<[u8]>>,
    signing_key: EncodingKey,
}

impl PrivateKey {
    /// Decode a PEM encoded RSA private key (`PRIVATE KEY` or `RSA PRIVATE KEY`).
    pub fn from_pem(pem: &str) -> Result<Self, CredentialError> {
        let der = decode_pem_body(pem)?;
        let signing_key = EncodingKey::from_rsa_pem(pem.as_bytes())
            .map_err(|e| CredentialError::InvalidPrivateKey(e.to_string()))?;

        Ok(Self {
            der: Arc::new(SecretBox::new(der.into_boxed_slice())),
            signing_key,
        })
    }

    /// DER encoding of the key, as found in the PEM body.
    pub fn der(&self) -> &[u8] {
        self.der.expose_secret()
    }

    /// RSA key suitable for signing token requests.
    pub fn signing_key(&self) -> &EncodingKey {
        &self.signing_key
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.der() == other.der()
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

const PEM_BEGIN: &str = "-----BEGIN ";
const PEM_END: &str = "-----END ";
const ACCEPTED_LABELS: [&str; 2] = ["PRIVATE KEY", "RSA PRIVATE KEY"];

fn decode_pem_body(pem: &str) -> Result<Vec<u8>, CredentialError> {
    let mut lines = pem.lines().map(str::trim).filter(|l| !l.is_empty());

    let label = lines
        .next()
        .and_then(|l| l.strip_prefix(PEM_BEGIN))
        .and_then(|l| l.strip_suffix("-----"))
        .ok_or_else(|| CredentialError::InvalidPem("missing BEGIN line".to_string()))?;
    if !ACCEPTED_LABELS.contains(&label) {
        return Err(CredentialError::InvalidPem(format!(
            "unexpected block type '{label}'"
        )));
    }

    let mut body = String::new();
    let mut terminated = false;
    for line in lines {
        if let Some(end) = line.strip_prefix(PEM_END) {
            if end.strip_suffix("-----") != Some(label) {
                return Err(CredentialError::InvalidPem(
                    "END line does not match BEGIN line".to_string(),
                ));
            }
            terminated = true;
            break;
        }
        body.push_str(line);
    }
    if !terminated {
        return Err(CredentialError::InvalidPem("missing END line".to_string()));
    }

    STANDARD
        .decode(body.as_bytes())
        .map_err(|e| CredentialError::InvalidPem(e.to_string()))
}

/// Credential derived from a service-account document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAccountCredential {
    client_email: String,
    project_id: String,
    scopes: BTreeSet<String>,
    private_key: PrivateKey,
    private_key_id: String,
    client_id: Option<String>,
    auth_uri: Option<String>,
    token_uri: Option<String>,
}

impl ServiceAccountCredential {
    /// Parse a service-account JSON document.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, CredentialError> {
        let text = std::str::from_utf8(bytes).map_err(|_| CredentialError::InvalidUtf8)?;
        let file: ServiceAccountFile =
            serde_json::from_str(text).map_err(|e| CredentialError::InvalidJson {
                line: e.line(),
                column: e.column(),
            })?;

        let kind = file.kind.ok_or(CredentialError::MissingField("type"))?;
        if kind != SERVICE_ACCOUNT_TYPE {
            return Err(CredentialError::UnsupportedType(kind));
        }

        let project_id = required(file.project_id, "project_id")?;
        let private_key_id = required(file.private_key_id, "private_key_id")?;
        let client_email = required(file.client_email, "client_email")?;
        let private_key = PrivateKey::from_pem(&required(file.private_key, "private_key")?)?;

        Ok(Self {
            client_email,
            project_id,
            scopes: BTreeSet::from([DEVSTORAGE_FULL_CONTROL_SCOPE.to_string()]),
            private_key,
            private_key_id,
            client_id: file.client_id,
            auth_uri: file.auth_uri,
            token_uri: file.token_uri,
        })
    }

    /// Service account identity (the `client_email` of the document).
    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn scopes(&self) -> &BTreeSet<String> {
        &self.scopes
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn private_key_id(&self) -> &str {
        &self.private_key_id
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn auth_uri(&self) -> Option<&str> {
        self.auth_uri.as_deref()
    }

    pub fn token_uri(&self) -> Option<&str> {
        self.token_uri.as_deref()
    }

    /// RSA key used to sign token requests for this account.
    pub fn signing_key(&self) -> &EncodingKey {
        self.private_key.signing_key()
    }
}

/// Empty strings count as missing.
fn required(value: Option<String>, field: &'static str) -> Result<String, CredentialError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(CredentialError::MissingField(field))
}
