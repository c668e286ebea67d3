//! Cart lines as seen by the bundle matcher.

/// One cart line, reduced to what bundle matching needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BundleLine {
    pub id: String,
    /// Product variant bought by the line, `None` for other merchandise.
    pub variant_id: Option<String>,
    pub quantity: i64,
    /// Bundle the widget added this line for, from the `_bundle_id` attribute.
    pub bundle_id: Option<u64>,
}

impl BundleLine {
    /// Whether the line can satisfy a bundle item for `variant_id` x `quantity`.
    pub fn satisfies(&self, variant_id: &str, quantity: i32) -> bool {
        self.variant_id.as_deref() == Some(variant_id) && self.quantity >= i64::from(quantity)
    }
}

/// Parse a `_bundle_id` attribute value. Anything but a bundle number is ignored.
pub fn parse_bundle_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

#[cfg(test)]
pub(crate) fn line(id: &str, variant_id: &str, quantity: i64, bundle_id: u64) -> BundleLine {
    BundleLine {
        id: id.to_string(),
        variant_id: Some(variant_id.to_string()),
        quantity,
        bundle_id: Some(bundle_id),
    }
}
