//! Text form of a rule set.
//!
//! One clause per line: rule type, operator, then an optional bracketed
//! value list. `#` starts a comment.
//!
//! ```text
//! specific_collections contains_any ["Summer Collection", "Clearance"]
//! cart_value_range between [10, 50]
//! product_subscribed yes
//! ```

mod error;
mod grammar;
mod parser;
mod writer;

pub use error::ParseError;
pub use parser::{ParsedClause, ParsedRuleSet};
pub(crate) use writer::write_rules;

/// Parse rule-set text into its clauses.
///
/// Only syntax and tag names are checked here; uniqueness and operator
/// legality are enforced when the clauses are loaded into a
/// [`RuleSetEngine`](crate::RuleSetEngine).
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not valid rule-set text.
pub fn parse(input: &str) -> Result<ParsedRuleSet, ParseError> {
    use winnow::Parser;
    grammar::parse_rule_set
        .parse(input)
        .map_err(|e| ParseError::new(e.to_string()))
}
