//! Volume discount configuration stored in the discount's metafield.

use function_support::{decode, ConfigError};
use serde::Deserialize;

// Largest threshold that converts to i64 exactly.
const MAX_QUANTITY: f64 = 9_007_199_254_740_992.0;

/// Wire shape of the metafield. Both fields are optional so that a partial
/// configuration is reported field by field rather than as a parse error.
#[derive(Debug, Deserialize)]
struct RawConfig {
    /// Read as a number so that `2.0`, as the admin's JSON editor may write it,
    /// still means a threshold of 2.
    quantity: Option<f64>,
    percentage: Option<f64>,
}

/// Validated configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiscountConfig {
    /// Minimum line quantity for a line to receive the discount.
    pub quantity: i64,
    /// Percentage off, in `(0, 100]`.
    pub percentage: f64,
}

impl DiscountConfig {
    /// Parse and validate a metafield value.
    ///
    /// A zero `quantity` or `percentage` counts as missing, matching how the
    /// merchant admin clears a field.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = decode(raw)?;

        let quantity = match raw.quantity {
            None => return Err(ConfigError::Missing { field: "quantity" }),
            Some(q) if q == 0.0 => return Err(ConfigError::Missing { field: "quantity" }),
            Some(q) if !q.is_finite() || q < 1.0 || q.fract() != 0.0 || q > MAX_QUANTITY => {
                return Err(ConfigError::Invalid {
                    field: "quantity",
                    reason: format!("{q} is not a positive whole count"),
                })
            }
            #[allow(clippy::cast_possible_truncation)]
            Some(q) => q as i64,
        };

        let percentage = match raw.percentage {
            None => return Err(ConfigError::Missing { field: "percentage" }),
            Some(p) if p == 0.0 => return Err(ConfigError::Missing { field: "percentage" }),
            Some(p) if !p.is_finite() || p < 0.0 || p > 100.0 => {
                return Err(ConfigError::Invalid {
                    field: "percentage",
                    reason: format!("{p} is outside 0..=100"),
                })
            }
            Some(p) => p,
        };

        Ok(Self {
            quantity,
            percentage,
        })
    }
}
