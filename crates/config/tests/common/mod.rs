//! Shared fixtures for integration tests.

#![allow(dead_code)]

include!("fixtures.rs");
