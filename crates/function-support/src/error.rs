//! Configuration errors.

use thiserror::Error;

/// Errors raised while reading a Function's configuration.
///
/// None of these are fatal: callers log them and fall back to a result that
/// changes nothing in the cart.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The blob is empty or not valid JSON for the expected shape.
    #[error("malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A required field is absent (or zero, which the storefront treats the same).
    #[error("configuration field `{field}` is missing")]
    Missing { field: &'static str },

    /// A field is present but outside its allowed range.
    #[error("configuration field `{field}` is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    /// Name of the offending field, if the error concerns a single field.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Malformed(_) => None,
            Self::Missing { field } | Self::Invalid { field, .. } => Some(*field),
        }
    }
}
