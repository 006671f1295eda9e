use thiserror::Error;

use super::operator::{Operator, Sense};
use super::rule_type::RuleType;

/// A string tag that names no known rule type or operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownTag {
    #[error("unknown rule type '{tag}'")]
    RuleType { tag: String },

    #[error("unknown operator '{tag}'")]
    Operator { tag: String },
}

/// Violations found while loading a rule set from its text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("operator '{operator}' is not allowed for rule type '{rule_type}'")]
    IllegalOperator {
        rule_type: RuleType,
        operator: Operator,
    },

    #[error("rule type '{rule_type}' appears more than once")]
    DuplicateRuleType { rule_type: RuleType },

    #[error("'{first}' and '{second}' must not both {}", sense_verb(.operator))]
    SameSenseExclusivePair {
        first: RuleType,
        second: RuleType,
        operator: Operator,
    },
}

fn sense_verb(operator: &Operator) -> &'static str {
    match operator.sense() {
        Sense::Inclusion => "include",
        Sense::Exclusion => "exclude",
    }
}
