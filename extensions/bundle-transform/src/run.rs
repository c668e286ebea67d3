use shopify_function::prelude::*;
use shopify_function::Result;

use crate::cart::{parse_bundle_id, BundleLine};
use crate::schema;
use crate::schema::run::input::cart::lines::Merchandise;
use crate::transform::transform;

#[shopify_function]
fn run(input: schema::run::Input) -> Result<schema::FunctionRunResult> {
    function_support::telemetry::init();

    let cart = input.cart();
    let lines: Vec<BundleLine> = cart
        .lines()
        .iter()
        .map(|line| BundleLine {
            id: line.id().clone(),
            variant_id: match line.merchandise() {
                Merchandise::ProductVariant(variant) => Some(variant.id().clone()),
                _ => None,
            },
            quantity: i64::from(*line.quantity()),
            bundle_id: line
                .bundle_id()
                .and_then(|attribute| attribute.value())
                .and_then(|value| parse_bundle_id(value)),
        })
        .collect();

    let raw_bundles = cart
        .bundles()
        .and_then(|attribute| attribute.value())
        .map(|value| value.as_str());

    Ok(transform(raw_bundles, &lines))
}
