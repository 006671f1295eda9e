//! Human-readable summary lines for rule clauses.

use crate::{Operator, Rule, RuleType, Sense};

/// Shown in place of a summary when the set has no rules.
pub const NO_RULES: &str = "No eligibility rules defined";

/// Shown for a clause whose type or operator tag is not recognized.
pub const UNKNOWN_RULE: &str = "Unknown rule";

const UNSPECIFIED: &str = "unspecified";
const NONE: &str = "None";

/// One summary line for a rule.
#[must_use]
pub fn describe(rule: &Rule) -> String {
    describe_clause(rule.rule_type, rule.operator, &rule.values)
}

/// One summary line per rule, in the order given. An empty slice yields the
/// single [`NO_RULES`] line.
#[must_use]
pub fn describe_all(rules: &[Rule]) -> Vec<String> {
    if rules.is_empty() {
        return vec![NO_RULES.to_owned()];
    }
    rules.iter().map(describe).collect()
}

/// Summarize a clause given as raw tags, e.g. a snapshot received from a host
/// UI. Unrecognized tags render as [`UNKNOWN_RULE`].
#[must_use]
pub fn describe_raw(rule_type: &str, operator: &str, values: &[String]) -> String {
    match (rule_type.parse::<RuleType>(), operator.parse::<Operator>()) {
        (Ok(rule_type), Ok(operator)) => describe_clause(rule_type, operator, values),
        _ => UNKNOWN_RULE.to_owned(),
    }
}

pub(crate) fn describe_clause(rule_type: RuleType, operator: Operator, values: &[String]) -> String {
    let joined = join_values(values);
    match rule_type {
        RuleType::SpecificCollections => inclusion(
            rule_type,
            operator,
            values,
            format!("{joined} included"),
            format!("{joined} excluded"),
        ),
        RuleType::ProductTags => inclusion(
            rule_type,
            operator,
            values,
            format!("Include products with tags: {joined}"),
            format!("Exclude products with tags: {joined}"),
        ),
        RuleType::ProductVendors => inclusion(
            rule_type,
            operator,
            values,
            format!("Include products from vendors: {joined}"),
            format!("Exclude products from vendors: {joined}"),
        ),
        RuleType::SpecificProducts => inclusion(
            rule_type,
            operator,
            values,
            format!("Include products: {joined}"),
            format!("Exclude products: {joined}"),
        ),
        RuleType::SpecificCountries => inclusion(
            rule_type,
            operator,
            values,
            format!("Include countries: {joined}"),
            format!("Exclude countries: {joined}"),
        ),
        RuleType::SpecificLocales => inclusion(
            rule_type,
            operator,
            values,
            format!("Include locales: {joined}"),
            format!("Exclude locales: {joined}"),
        ),
        RuleType::ProductSubscribed => {
            if operator == Operator::Yes {
                "Subscribed to product updates".to_owned()
            } else {
                "Not subscribed to product updates".to_owned()
            }
        }
        RuleType::SpecificDiscountCodes => format!("Discount codes: {joined}"),
        RuleType::CustomerTag => format!("Customer tags: {joined}"),
        RuleType::PastOrderCount => comparison(rule_type, operator, values),
        RuleType::CartValueRange
        | RuleType::CountOfItemsInCart
        | RuleType::IndividualProductCountInCart => {
            if operator == Operator::Between {
                format!(
                    "{} between: {} and {}",
                    rule_type.label(),
                    bound(values, 0),
                    bound(values, 1),
                )
            } else {
                comparison(rule_type, operator, values)
            }
        }
    }
}

fn inclusion(
    rule_type: RuleType,
    operator: Operator,
    values: &[String],
    included: String,
    excluded: String,
) -> String {
    if values.is_empty() {
        return format!("No {}", rule_type.label().to_lowercase());
    }
    match operator.sense() {
        Sense::Exclusion => excluded,
        Sense::Inclusion => included,
    }
}

fn comparison(rule_type: RuleType, operator: Operator, values: &[String]) -> String {
    let value = values.first().map_or(NONE, String::as_str);
    format!(
        "{} {} {value}",
        rule_type.label(),
        operator.comparison_symbol()
    )
}

fn bound(values: &[String], slot: usize) -> &str {
    match values.get(slot) {
        Some(v) if !v.trim().is_empty() => v.as_str(),
        _ => UNSPECIFIED,
    }
}

fn join_values(values: &[String]) -> String {
    if values.is_empty() {
        NONE.to_owned()
    } else {
        values.join(", ")
    }
}
