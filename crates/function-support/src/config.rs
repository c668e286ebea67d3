//! JSON decoding for configuration blobs.

use serde::de::DeserializeOwned;

use crate::error::ConfigError;

/// Decode a JSON configuration blob into `T`.
///
/// Leading and trailing whitespace is ignored. An empty blob is reported as
/// [`ConfigError::Malformed`], the same as any other invalid JSON.
///
/// # Errors
///
/// Returns [`ConfigError::Malformed`] when `raw` is not valid JSON for `T`.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, ConfigError> {
    Ok(serde_json::from_str(raw.trim())?)
}
