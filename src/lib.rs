//! Compose conjunctive eligibility rules for an offer and render them as a
//! readable summary.
//!
//! [`RuleSetEngine`] owns the rule clauses and keeps them consistent,
//! [`catalog`] describes which rule types and operators exist,
//! [`options`] supplies pick-list values, and [`describe_all`] produces the
//! summary lines.

pub mod catalog;
mod engine;
mod error;
mod import;
pub mod options;
pub mod parse;
mod render;
mod types;

pub use engine::RuleSetEngine;
pub use error::EligoError;
pub use options::{selection_label, StaticOptions, ValueOptions};
pub use render::{describe, describe_all, describe_raw, NO_RULES, UNKNOWN_RULE};
pub use types::{
    ImportError, InputKind, Operator, RangeBound, Rule, RuleId, RuleType, RuleUpdate, Sense,
    UnknownTag,
};
