//! Volume discount evaluation.
//!
//! A line earns the discount when it buys a product variant at least the
//! configured number of times. All qualifying variants share a single
//! percentage discount: with the `FIRST` strategy the platform only honours
//! one discount per run, and mixing a fixed-amount discount with a
//! percentage one in the same result does not take effect.

use tracing::{debug, info, warn};

use crate::cart::CartLine;
use crate::config::DiscountConfig;
use crate::discount::{no_discount, percentage_discount, variant_target};
use crate::schema;

/// Compute the discounts for `lines` under the metafield value `raw_config`.
///
/// Never fails: missing or unusable configuration and carts without a
/// qualifying line both produce [`no_discount`].
pub fn evaluate(lines: &[CartLine], raw_config: Option<&str>) -> schema::FunctionRunResult {
    let Some(raw_config) = raw_config else {
        debug!("discount has no configuration metafield");
        return no_discount();
    };

    let config = match DiscountConfig::parse(raw_config) {
        Ok(config) => config,
        Err(error) => {
            warn!(%error, field = error.field(), "ignoring discount configuration");
            return no_discount();
        }
    };

    let targets: Vec<schema::Target> = lines
        .iter()
        .filter_map(|line| line.qualifying_variant(config.quantity))
        .map(variant_target)
        .collect();

    if targets.is_empty() {
        info!(
            threshold = config.quantity,
            lines = lines.len(),
            "no cart lines qualify for volume discount"
        );
        return no_discount();
    }

    debug!(
        targets = targets.len(),
        percentage = config.percentage,
        "applying volume discount"
    );

    schema::FunctionRunResult {
        discount_application_strategy: schema::DiscountApplicationStrategy::First,
        discounts: vec![percentage_discount(config.percentage, targets)],
    }
}

#[cfg(test)]
mod tests {
    use shopify_function::prelude::*;

    use super::*;

    const VARIANT_A: &str = "gid://shopify/ProductVariant/1";
    const VARIANT_B: &str = "gid://shopify/ProductVariant/2";
    const VARIANT_C: &str = "gid://shopify/ProductVariant/3";

    fn target(id: &str) -> schema::Target {
        schema::Target::ProductVariant(schema::ProductVariantTarget {
            id: id.to_string(),
            quantity: None,
        })
    }

    #[test]
    fn discounts_lines_meeting_the_threshold() {
        let lines = [CartLine::variant(VARIANT_A, 3), CartLine::variant(VARIANT_B, 1)];

        let result = evaluate(&lines, Some(r#"{"quantity": 2, "percentage": 10}"#));

        let expected = schema::FunctionRunResult {
            discount_application_strategy: schema::DiscountApplicationStrategy::First,
            discounts: vec![schema::Discount {
                message: Some("-10% off".to_string()),
                targets: vec![target(VARIANT_A)],
                value: schema::Value::Percentage(schema::Percentage {
                    value: Decimal(10.0),
                }),
            }],
        };
        assert_eq!(result, expected);
    }

    #[test]
    fn empty_config_gives_no_discount() {
        let lines = [CartLine::variant(VARIANT_A, 10)];
        assert_eq!(evaluate(&lines, Some("{}")), no_discount());
    }

    #[test]
    fn absent_or_malformed_config_gives_no_discount() {
        let lines = [CartLine::variant(VARIANT_A, 10)];
        for raw in [None, Some(""), Some("{"), Some("null"), Some(r#"{"quantity": 2}"#)] {
            assert_eq!(evaluate(&lines, raw), no_discount(), "config {raw:?}");
        }
    }

    #[test]
    fn no_line_meeting_threshold_gives_no_discount() {
        let lines = [
            CartLine::variant(VARIANT_A, 4),
            CartLine::variant(VARIANT_B, 1),
            CartLine::other(9),
        ];
        let result = evaluate(&lines, Some(r#"{"quantity": 5, "percentage": 20}"#));
        assert!(result.discounts.is_empty());
        assert_eq!(
            result.discount_application_strategy,
            schema::DiscountApplicationStrategy::First
        );
    }

    #[test]
    fn empty_cart_gives_no_discount() {
        assert_eq!(
            evaluate(&[], Some(r#"{"quantity": 1, "percentage": 5}"#)),
            no_discount()
        );
    }

    #[test]
    fn non_variant_lines_are_skipped() {
        let lines = [CartLine::other(5), CartLine::variant(VARIANT_B, 5)];
        let result = evaluate(&lines, Some(r#"{"quantity": 2, "percentage": 15}"#));

        assert_eq!(result.discounts.len(), 1);
        assert_eq!(result.discounts[0].targets, vec![target(VARIANT_B)]);
    }

    #[test]
    fn targets_follow_cart_order_in_a_single_discount() {
        let lines = [
            CartLine::variant(VARIANT_C, 2),
            CartLine::variant(VARIANT_A, 1),
            CartLine::variant(VARIANT_B, 7),
            CartLine::variant(VARIANT_A, 3),
        ];
        let result = evaluate(&lines, Some(r#"{"quantity": 2, "percentage": 25}"#));

        assert_eq!(result.discounts.len(), 1);
        assert_eq!(
            result.discounts[0].targets,
            vec![target(VARIANT_C), target(VARIANT_B), target(VARIANT_A)]
        );
        assert_eq!(result.discounts[0].message.as_deref(), Some("-25% off"));
    }

    #[test]
    fn whole_float_threshold_behaves_like_an_integer() {
        let lines = [CartLine::variant(VARIANT_A, 3), CartLine::variant(VARIANT_B, 1)];
        let result = evaluate(&lines, Some(r#"{"quantity": 2.0, "percentage": 10}"#));

        assert_eq!(result.discounts.len(), 1);
        assert_eq!(result.discounts[0].targets, vec![target(VARIANT_A)]);
    }

    #[test]
    fn fractional_percentage_message() {
        let lines = [CartLine::variant(VARIANT_A, 2)];
        let result = evaluate(&lines, Some(r#"{"quantity": 2, "percentage": 12.5}"#));
        assert_eq!(result.discounts[0].message.as_deref(), Some("-12.5% off"));
    }

    #[test]
    fn evaluation_is_repeatable() {
        let lines = [CartLine::variant(VARIANT_A, 3), CartLine::other(3)];
        let config = Some(r#"{"quantity": 3, "percentage": 30}"#);
        assert_eq!(evaluate(&lines, config), evaluate(&lines, config));
    }
}
