//! Helpers shared by the storefront Functions.
//!
//! Both Functions receive merchant or widget configuration as JSON strings
//! (a metafield value or a cart attribute) and must never fail because of it.
//! This crate decodes that JSON into typed values and forwards `tracing`
//! events to the Function run logs.
//!
//! # Modules
//!
//! - [`config`] - JSON decoding for configuration blobs
//! - [`error`] - Configuration error type
//! - [`telemetry`] - Log subscriber setup

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::decode;
pub use error::ConfigError;
