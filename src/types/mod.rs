mod error;
mod operator;
mod rule;
mod rule_type;

pub use error::{ImportError, UnknownTag};
pub use operator::{Operator, Sense};
pub use rule::{RangeBound, Rule, RuleId, RuleUpdate};
pub use rule_type::{InputKind, RuleType};
