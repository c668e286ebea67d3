//! Builders for the Function's output types.

use shopify_function::prelude::*;

use crate::schema;

/// The result that leaves the cart untouched.
pub fn no_discount() -> schema::FunctionRunResult {
    schema::FunctionRunResult {
        discount_application_strategy: schema::DiscountApplicationStrategy::First,
        discounts: vec![],
    }
}

/// Target a product variant as a whole; the quantity is left to the platform.
pub fn variant_target(id: &str) -> schema::Target {
    schema::Target::ProductVariant(schema::ProductVariantTarget {
        id: id.to_owned(),
        quantity: None,
    })
}

/// A percentage-off discount shown to the buyer as `-{percentage}% off`.
pub fn percentage_discount(percentage: f64, targets: Vec<schema::Target>) -> schema::Discount {
    schema::Discount {
        message: Some(percentage_message(percentage)),
        targets,
        value: schema::Value::Percentage(schema::Percentage {
            value: Decimal(percentage),
        }),
    }
}

// f64's Display already drops a zero fraction: 10.0 -> "10", 12.5 -> "12.5".
fn percentage_message(percentage: f64) -> String {
    format!("-{percentage}% off")
}
