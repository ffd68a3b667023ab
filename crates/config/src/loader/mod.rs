//! Client settings resolution.
//!
//! Responsibilities:
//! - Discover client names from the keys of a `SettingsSource`.
//! - Resolve each name into a fully populated `ClientSettings`, applying defaults.
//! - Materialize service-account credentials from secure files.
//!
//! Does NOT handle:
//! - Building settings snapshots (see `settings` module).
//! - Creating storage clients from the resolved settings.
//!
//! Invariants / Assumptions:
//! - The result of `load()` always contains the `"default"` client.
//! - Any parse failure aborts the whole `load()`; no partial map is returned.
//! - Resolution is a pure function of the snapshot.

mod credential;
mod error;
mod field;
mod resolver;

pub use credential::load_credential;
pub use error::SettingsError;
pub use field::{ClientField, client_names};
pub use resolver::{client_settings, load};
