use shopify_function::prelude::*;
use shopify_function::Result;

use crate::cart::CartLine;
use crate::evaluator::evaluate;
use crate::schema;
use crate::schema::run::input::cart::lines::Merchandise as InputMerchandise;

#[shopify_function]
fn run(input: schema::run::Input) -> Result<schema::FunctionRunResult> {
    function_support::telemetry::init();

    let lines: Vec<CartLine> = input
        .cart()
        .lines()
        .iter()
        .map(|line| {
            let quantity = i64::from(*line.quantity());
            match line.merchandise() {
                InputMerchandise::ProductVariant(variant) => {
                    CartLine::variant(variant.id().clone(), quantity)
                }
                _ => CartLine::other(quantity),
            }
        })
        .collect();

    let raw_config = input
        .discount_node()
        .metafield()
        .map(|metafield| metafield.value().as_str());

    Ok(evaluate(&lines, raw_config))
}
