//! Bundle cart transform.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::bundle::{parse_bundles, BundleRule};
use crate::cart::BundleLine;
use crate::matcher::match_rules;
use crate::merge::{merge_operation, no_changes};
use crate::schema;

/// Turn the `_bundles` attribute and the cart lines into merge operations.
///
/// Never fails: a missing or malformed attribute, or a cart where no rule is
/// complete, leaves the cart unchanged.
pub fn transform(raw_bundles: Option<&str>, lines: &[BundleLine]) -> schema::FunctionRunResult {
    let Some(raw_bundles) = raw_bundles else {
        debug!("cart has no bundles attribute");
        return no_changes();
    };

    let bundles = match parse_bundles(raw_bundles) {
        Ok(bundles) => bundles,
        Err(error) => {
            warn!(%error, field = error.field(), "ignoring bundles attribute");
            return no_changes();
        }
    };

    let mut seen = HashSet::new();
    let mut operations = vec![];

    for bundle in &bundles {
        if !seen.insert(bundle.id) {
            warn!(bundle = bundle.id, "duplicate bundle id, keeping the first");
            continue;
        }

        let pool: Vec<&BundleLine> = lines
            .iter()
            .filter(|line| line.bundle_id == Some(bundle.id))
            .collect();
        if pool.is_empty() {
            continue;
        }

        let rules: Vec<&BundleRule> = bundle
            .rules
            .iter()
            .filter(|rule| match rule.validate() {
                Ok(()) => true,
                Err(error) => {
                    warn!(
                        bundle = bundle.id,
                        parent = %rule.parent_variant_id,
                        %error,
                        "skipping bundle rule"
                    );
                    false
                }
            })
            .collect();

        let matches = match_rules(pool, &rules);
        debug!(bundle = bundle.id, matches = matches.len(), "matched bundle rules");
        operations.extend(matches.iter().map(merge_operation));
    }

    if operations.is_empty() {
        info!("no bundle rules are complete in the cart");
    }

    schema::FunctionRunResult { operations }
}
