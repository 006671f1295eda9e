use crate::{Operator, RuleType};

/// One clause as written in the text form, before any rule-set checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClause {
    pub rule_type: RuleType,
    pub operator: Operator,
    pub values: Vec<String>,
}

/// The result of parsing a rule-set text.
#[derive(Debug, Default)]
pub struct ParsedRuleSet {
    pub clauses: Vec<ParsedClause>,
}
