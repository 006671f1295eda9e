use std::fmt;

use super::operator::Operator;
use super::rule_type::RuleType;

/// Opaque handle to a rule inside one [`RuleSetEngine`](crate::RuleSetEngine).
///
/// Ids are never reused within an engine, so a stale id held by a UI row
/// simply stops matching once its rule is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RuleId(pub(crate) u64);

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule-{}", self.0)
    }
}

/// One eligibility clause: a rule type, an operator legal for that type, and
/// the values it applies to.
///
/// Rules are created and mutated only by the engine; the accessors here give
/// the presentation layer a read-only view of the current snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rule {
    pub(crate) id: RuleId,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub(crate) rule_type: RuleType,
    pub(crate) operator: Operator,
    pub(crate) values: Vec<String>,
}

impl Rule {
    #[must_use]
    pub fn id(&self) -> RuleId {
        self.id
    }

    #[must_use]
    pub fn rule_type(&self) -> RuleType {
        self.rule_type
    }

    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Whether the values are positional `[min, max]` bounds rather than a set.
    pub(crate) fn takes_range_bounds(&self) -> bool {
        self.rule_type.is_range_capable() && self.operator == Operator::Between
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::describe(self))
    }
}

/// A partial change to a rule. Unset fields are left as they are.
///
/// ```
/// use eligo::{Operator, RuleUpdate};
///
/// let update = RuleUpdate::new()
///     .operator(Operator::Between)
///     .values(["10", "50"]);
/// assert_eq!(update.operator, Some(Operator::Between));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleUpdate {
    pub rule_type: Option<RuleType>,
    pub operator: Option<Operator>,
    pub values: Option<Vec<String>>,
}

impl RuleUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rule_type(mut self, rule_type: RuleType) -> Self {
        self.rule_type = Some(rule_type);
        self
    }

    #[must_use]
    pub fn operator(mut self, operator: Operator) -> Self {
        self.operator = Some(operator);
        self
    }

    #[must_use]
    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

/// Which end of a `Between` range to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    Min,
    Max,
}

impl RangeBound {
    pub(crate) const fn slot(self) -> usize {
        match self {
            RangeBound::Min => 0,
            RangeBound::Max => 1,
        }
    }
}
