//! Centralized constants for GCS client settings.
//!
//! This module contains the setting key layout and the built-in defaults
//! applied when a client profile leaves a field unset.

// =============================================================================
// Setting Key Layout
// =============================================================================

/// Prefix shared by every per-client setting (`gcs.client.<name>.<field>`).
pub const CLIENT_SETTINGS_PREFIX: &str = "gcs.client.";

/// Name of the client profile that always exists.
pub const DEFAULT_CLIENT_NAME: &str = "default";

/// Prefix of environment variables mapped onto client settings
/// (`GCS_CLIENT_<NAME>_<FIELD>`).
pub const ENV_PREFIX: &str = "GCS_CLIENT_";

// =============================================================================
// Client Defaults
// =============================================================================

/// Default Google Cloud Storage endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/";

/// Default application name reported to the storage service.
pub const DEFAULT_APPLICATION_NAME: &str = "repository-gcs";

/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u32 = 20;

/// Default read timeout in seconds.
pub const DEFAULT_READ_TIMEOUT_SECS: u32 = 20;

// =============================================================================
// Service Accounts
// =============================================================================

/// Expected value of the `type` field in a service-account document.
pub const SERVICE_ACCOUNT_TYPE: &str = "service_account";

/// Scope granted to every loaded credential (full read/write control).
pub const DEVSTORAGE_FULL_CONTROL_SCOPE: &str =
    "https://www.googleapis.com/auth/devstorage.full_control";
