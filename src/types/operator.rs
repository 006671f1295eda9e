use std::fmt;
use std::str::FromStr;

use super::error::UnknownTag;

/// Operators a rule clause can apply to its values.
///
/// Which operators are legal depends on the rule type; see
/// [`operators_for`](crate::catalog::operators_for).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operator {
    ContainsAny,
    IsNot,
    EqualsAnything,
    Yes,
    No,
    GreaterThanEqual,
    Between,
    LessThan,
}

/// Whether an operator means "must match" or "must not match".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Inclusion,
    Exclusion,
}

impl Operator {
    pub const ALL: [Operator; 8] = [
        Operator::ContainsAny,
        Operator::IsNot,
        Operator::EqualsAnything,
        Operator::Yes,
        Operator::No,
        Operator::GreaterThanEqual,
        Operator::Between,
        Operator::LessThan,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::ContainsAny => "contains_any",
            Operator::IsNot => "is_not",
            Operator::EqualsAnything => "equals_anything",
            Operator::Yes => "yes",
            Operator::No => "no",
            Operator::GreaterThanEqual => "greater_than_equal",
            Operator::Between => "between",
            Operator::LessThan => "less_than",
        }
    }

    /// Label shown in the operator selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Operator::ContainsAny => "contains any",
            Operator::IsNot => "is not",
            Operator::EqualsAnything => "equals anything",
            Operator::Yes => "yes",
            Operator::No => "no",
            Operator::GreaterThanEqual => "greater than or equal",
            Operator::Between => "between",
            Operator::LessThan => "less than",
        }
    }

    #[must_use]
    pub const fn sense(self) -> Sense {
        match self {
            Operator::IsNot | Operator::No => Sense::Exclusion,
            Operator::ContainsAny
            | Operator::EqualsAnything
            | Operator::Yes
            | Operator::GreaterThanEqual
            | Operator::Between
            | Operator::LessThan => Sense::Inclusion,
        }
    }

    /// Comparison symbol used by the summary. Only `GreaterThanEqual` reads
    /// as `>=`; every other operator falls through to `<`.
    #[must_use]
    pub const fn comparison_symbol(self) -> &'static str {
        match self {
            Operator::GreaterThanEqual => ">=",
            _ => "<",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownTag::Operator { tag: s.to_owned() })
    }
}
