//! Configuration type definitions for GCS clients.
//!
//! Responsibilities:
//! - Define the resolved per-client record (`ClientSettings`).
//! - Define service-account credentials and their private keys.
//! - Define `TimeValue`, the textual timeout representation used by settings.
//!
//! Does NOT handle:
//! - Reading settings from a store (see `loader` module).
//! - Settings store implementations (see `settings` module).
//!
//! Invariants:
//! - Secret bytes are held in `secrecy` containers and redacted from `Debug`.
//! - All types are immutable value objects and are `Send + Sync`.

mod client;
mod credential;
mod time_value;

pub use client::{ClientSettings, default_connect_timeout, default_read_timeout};
pub use credential::{CredentialError, PrivateKey, ServiceAccountCredential};
pub use time_value::{TimeUnit, TimeValue, TimeValueParseError};
