//! Greedy assignment of cart lines to bundle rules.
//!
//! Rules with more items are tried first so that a cart holding a full set
//! gets the full-set discount rather than several smaller ones. A line is
//! consumed by the first rule that uses it.

use std::cmp::Reverse;

use crate::bundle::BundleRule;
use crate::cart::BundleLine;

/// A cart line taken into a bundle, with the quantity the rule asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchedLine {
    pub cart_line_id: String,
    pub quantity: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RuleMatch<'r> {
    pub rule: &'r BundleRule,
    /// One entry per rule item, in item order.
    pub lines: Vec<MatchedLine>,
}

/// Match `rules` against the lines of one bundle.
///
/// Ties in item count keep the widget's rule order.
pub fn match_rules<'r>(
    mut pool: Vec<&BundleLine>,
    rules: &[&'r BundleRule],
) -> Vec<RuleMatch<'r>> {
    let mut ordered = rules.to_vec();
    ordered.sort_by_key(|rule| Reverse(rule.items.len()));

    let mut matches = Vec::new();
    for rule in ordered {
        if pool.is_empty() {
            break;
        }

        let Some(lines) = assign(&pool, rule) else {
            continue;
        };

        pool.retain(|line| {
            !lines
                .iter()
                .any(|matched| matched.cart_line_id == line.id)
        });
        matches.push(RuleMatch { rule, lines });
    }

    matches
}

/// Find a distinct line for every item of `rule`, or `None` if any item is unmet.
fn assign(pool: &[&BundleLine], rule: &BundleRule) -> Option<Vec<MatchedLine>> {
    let mut taken: Vec<usize> = Vec::with_capacity(rule.items.len());
    let mut lines = Vec::with_capacity(rule.items.len());

    for item in &rule.items {
        let (index, line) = pool.iter().enumerate().find(|(index, line)| {
            !taken.contains(index) && line.satisfies(&item.id, item.quantity)
        })?;

        taken.push(index);
        lines.push(MatchedLine {
            cart_line_id: line.id.clone(),
            quantity: item.quantity,
        });
    }

    Some(lines)
}
