//! Bundle rule errors.

use thiserror::Error;

/// Reasons a bundle rule cannot be applied. The rule is skipped; the rest of
/// the bundle is still evaluated.
#[derive(Debug, Error, PartialEq)]
pub enum BundleError {
    #[error("rule has no items")]
    EmptyRule,

    #[error("item {variant_id} has quantity {quantity}, expected at least 1")]
    InvalidQuantity { variant_id: String, quantity: i32 },

    #[error("discount type `{0}` is not supported")]
    UnsupportedDiscount(String),

    #[error("discount value {0} is outside 0..=100")]
    DiscountOutOfRange(f64),
}
