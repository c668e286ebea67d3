//! Bundle definitions written to the cart by the storefront bundle widget.
//!
//! The widget stores every bundle offered on the page as a JSON array in the
//! `_bundles` cart attribute:
//!
//! ```json
//! [{
//!     "id": 1,
//!     "rules": [{
//!         "parent_product_id": "gid://shopify/ProductVariant/42539430871198",
//!         "title": "All products: -50%",
//!         "items": [
//!             { "id": "gid://shopify/ProductVariant/40799008719006", "quantity": 1 },
//!             { "id": "gid://shopify/ProductVariant/41707097620638", "quantity": 2 }
//!         ],
//!         "discount": { "value": 50, "discount_type": "percentage" }
//!     }]
//! }]
//! ```

use function_support::{decode, ConfigError};
use serde::Deserialize;

use crate::error::BundleError;

const PERCENTAGE: &str = "percentage";

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Bundle {
    pub id: u64,
    #[serde(default)]
    pub rules: Vec<BundleRule>,
}

/// A set of variants that, bought together, merge into one discounted line.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BundleRule {
    /// Variant shown in the cart in place of the merged lines.
    #[serde(rename = "parent_product_id")]
    pub parent_variant_id: String,
    pub title: Option<String>,
    pub items: Vec<BundleItem>,
    pub discount: BundleDiscount,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BundleItem {
    /// Variant id.
    pub id: String,
    pub quantity: i32,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BundleDiscount {
    pub value: f64,
    pub discount_type: String,
}

impl BundleRule {
    /// Check that the rule can be turned into a merge operation.
    pub fn validate(&self) -> Result<(), BundleError> {
        if self.items.is_empty() {
            return Err(BundleError::EmptyRule);
        }

        if let Some(item) = self.items.iter().find(|item| item.quantity < 1) {
            return Err(BundleError::InvalidQuantity {
                variant_id: item.id.clone(),
                quantity: item.quantity,
            });
        }

        if self.discount.discount_type != PERCENTAGE {
            return Err(BundleError::UnsupportedDiscount(
                self.discount.discount_type.clone(),
            ));
        }

        let value = self.discount.value;
        if !value.is_finite() || value < 0.0 || value > 100.0 {
            return Err(BundleError::DiscountOutOfRange(value));
        }

        Ok(())
    }
}

/// Decode the `_bundles` cart attribute.
pub fn parse_bundles(raw: &str) -> Result<Vec<Bundle>, ConfigError> {
    decode(raw)
}

#[cfg(test)]
pub(crate) fn rule(parent: &str, items: &[(&str, i32)], value: f64) -> BundleRule {
    BundleRule {
        parent_variant_id: parent.to_string(),
        title: None,
        items: items
            .iter()
            .map(|&(id, quantity)| BundleItem {
                id: id.to_string(),
                quantity,
            })
            .collect(),
        discount: BundleDiscount {
            value,
            discount_type: PERCENTAGE.to_string(),
        },
    }
}
