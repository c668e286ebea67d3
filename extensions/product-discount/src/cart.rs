//! Cart snapshot as seen by the discount evaluator.

/// What a cart line is buying.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Merchandise {
    /// A catalog product variant, identified by its global id.
    ProductVariant { id: String },
    /// Anything else (custom products and future merchandise kinds).
    Other,
}

impl Merchandise {
    /// The variant id when this is a product variant.
    pub fn variant_id(&self) -> Option<&str> {
        match self {
            Self::ProductVariant { id } => Some(id),
            Self::Other => None,
        }
    }
}

/// One line of the cart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartLine {
    pub merchandise: Merchandise,
    pub quantity: i64,
}

impl CartLine {
    pub fn variant(id: impl Into<String>, quantity: i64) -> Self {
        Self {
            merchandise: Merchandise::ProductVariant { id: id.into() },
            quantity,
        }
    }

    pub const fn other(quantity: i64) -> Self {
        Self {
            merchandise: Merchandise::Other,
            quantity,
        }
    }

    /// Variant id of this line if it buys a product variant at least `threshold` times.
    pub fn qualifying_variant(&self, threshold: i64) -> Option<&str> {
        if self.quantity >= threshold {
            self.merchandise.variant_id()
        } else {
            None
        }
    }
}
