//! Cart operations for matched bundles.

use shopify_function::prelude::*;

use crate::bundle::BundleRule;
use crate::matcher::RuleMatch;
use crate::schema;

pub fn no_changes() -> schema::FunctionRunResult {
    schema::FunctionRunResult { operations: vec![] }
}

/// Merge the matched lines into the rule's parent variant at the rule's discount.
pub fn merge_operation(matched: &RuleMatch<'_>) -> schema::CartOperation {
    let rule = matched.rule;

    schema::CartOperation::Merge(schema::MergeOperation {
        parent_variant_id: rule.parent_variant_id.clone(),
        title: Some(bundle_title(rule)),
        cart_lines: matched
            .lines
            .iter()
            .map(|line| schema::CartLineInput {
                cart_line_id: line.cart_line_id.clone(),
                quantity: line.quantity.into(),
            })
            .collect(),
        price: Some(schema::PriceAdjustment {
            percentage_decrease: Some(schema::PriceAdjustmentValue {
                value: Decimal(rule.discount.value),
            }),
        }),
    })
}

/// The merchant's title, or a generated one such as `My custom bundle: 2 items (-20% off)`.
fn bundle_title(rule: &BundleRule) -> String {
    if let Some(title) = rule.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        return title.to_owned();
    }

    let items = match rule.items.len() {
        1 => "1 item".to_owned(),
        n => format!("{n} items"),
    };
    format!("My custom bundle: {items} (-{}% off)", rule.discount.value)
}
