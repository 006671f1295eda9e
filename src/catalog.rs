//! Static rule catalog: legal operators, category grouping, priority ranks and
//! exclusivity pairs.
//!
//! Everything here is read-only and computed at compile time. The priority
//! table is produced by flattening [`categories()`] in order, so reordering a
//! category changes both the type selector and the order rules are listed in.

use crate::{Operator, RuleType};

/// A named group of rule types, as shown in the type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleCategory {
    name: &'static str,
    members: &'static [RuleType],
}

impl RuleCategory {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn members(&self) -> &'static [RuleType] {
        self.members
    }
}

const CATEGORIES: &[RuleCategory] = &[
    RuleCategory {
        name: "Product based",
        members: &[
            RuleType::SpecificCollections,
            RuleType::ProductTags,
            RuleType::ProductVendors,
            RuleType::SpecificProducts,
            RuleType::ProductSubscribed,
        ],
    },
    RuleCategory {
        name: "Discount code",
        members: &[RuleType::SpecificDiscountCodes],
    },
    RuleCategory {
        name: "Customer specific",
        members: &[RuleType::CustomerTag, RuleType::PastOrderCount],
    },
    RuleCategory {
        name: "Location based",
        members: &[RuleType::SpecificCountries],
    },
    RuleCategory {
        name: "Language based",
        members: &[RuleType::SpecificLocales],
    },
    RuleCategory {
        name: "Cart based",
        members: &[
            RuleType::CartValueRange,
            RuleType::CountOfItemsInCart,
            RuleType::IndividualProductCountInCart,
        ],
    },
];

const UNRANKED: usize = usize::MAX;

/// `PRIORITY_RANK[ty as usize]` is the position of `ty` in the flattened
/// category list.
const PRIORITY_RANK: [usize; RuleType::COUNT] = {
    let mut ranks = [UNRANKED; RuleType::COUNT];
    let mut rank = 0;
    let mut c = 0;
    while c < CATEGORIES.len() {
        let members = CATEGORIES[c].members;
        let mut m = 0;
        while m < members.len() {
            let slot = members[m] as usize;
            assert!(ranks[slot] == UNRANKED, "rule type listed in two categories");
            ranks[slot] = rank;
            rank += 1;
            m += 1;
        }
        c += 1;
    }
    assert!(rank == RuleType::COUNT, "every rule type needs a category");
    ranks
};

/// Rule types in priority order.
const PRIORITY_ORDER: [RuleType; RuleType::COUNT] = {
    let mut order = [RuleType::SpecificCollections; RuleType::COUNT];
    let mut i = 0;
    while i < RuleType::COUNT {
        let ty = RuleType::ALL[i];
        order[PRIORITY_RANK[ty as usize]] = ty;
        i += 1;
    }
    order
};

const INCLUDE_OR_EXCLUDE: &[Operator] = &[Operator::ContainsAny, Operator::IsNot];
const COMPARISON: &[Operator] = &[Operator::GreaterThanEqual, Operator::LessThan];
const RANGE: &[Operator] = &[
    Operator::GreaterThanEqual,
    Operator::Between,
    Operator::LessThan,
];

/// Legal operators for a rule type. Never empty; the first entry is the
/// operator a fresh rule of this type starts with.
#[must_use]
pub const fn operators_for(rule_type: RuleType) -> &'static [Operator] {
    match rule_type {
        RuleType::SpecificCollections
        | RuleType::ProductTags
        | RuleType::ProductVendors
        | RuleType::SpecificProducts
        | RuleType::CustomerTag
        | RuleType::SpecificCountries
        | RuleType::SpecificLocales => INCLUDE_OR_EXCLUDE,
        RuleType::ProductSubscribed => &[Operator::Yes, Operator::No],
        RuleType::SpecificDiscountCodes => &[Operator::ContainsAny],
        RuleType::PastOrderCount => COMPARISON,
        RuleType::CartValueRange
        | RuleType::CountOfItemsInCart
        | RuleType::IndividualProductCountInCart => RANGE,
    }
}

#[must_use]
pub const fn default_operator(rule_type: RuleType) -> Operator {
    operators_for(rule_type)[0]
}

#[must_use]
pub fn is_legal(rule_type: RuleType, operator: Operator) -> bool {
    operators_for(rule_type).contains(&operator)
}

#[must_use]
pub const fn categories() -> &'static [RuleCategory] {
    CATEGORIES
}

/// Rank of a rule type in the global ordering; lower sorts first.
///
/// # Panics
///
/// Panics if `rule_type` is missing from the category table. The const
/// assertions on the table make this unreachable unless the table and the
/// enum drift apart.
#[must_use]
pub fn priority_of(rule_type: RuleType) -> usize {
    let rank = PRIORITY_RANK[rule_type as usize];
    assert!(rank != UNRANKED, "rule type {rule_type} has no priority");
    rank
}

#[must_use]
pub fn priority_order() -> &'static [RuleType] {
    &PRIORITY_ORDER
}

/// The other half of a mutually exclusive pair, if `rule_type` belongs to one.
#[must_use]
pub const fn mutually_exclusive_partner(rule_type: RuleType) -> Option<RuleType> {
    match rule_type {
        RuleType::SpecificCollections => Some(RuleType::SpecificProducts),
        RuleType::SpecificProducts => Some(RuleType::SpecificCollections),
        _ => None,
    }
}

/// The first legal operator of `rule_type` whose sense differs from
/// `operator`'s.
#[must_use]
pub fn opposite_operator(rule_type: RuleType, operator: Operator) -> Option<Operator> {
    operators_for(rule_type)
        .iter()
        .copied()
        .find(|candidate| candidate.sense() != operator.sense())
}
