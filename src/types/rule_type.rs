use std::fmt;
use std::str::FromStr;

use super::error::UnknownTag;
use super::operator::Operator;

/// The closed set of eligibility conditions a merchant can attach to an offer.
///
/// Variants are declared in catalog order, but ordering decisions always go
/// through [`priority_of`](crate::catalog::priority_of) rather than the
/// discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RuleType {
    SpecificCollections,
    ProductTags,
    ProductVendors,
    SpecificProducts,
    ProductSubscribed,
    SpecificDiscountCodes,
    CustomerTag,
    PastOrderCount,
    SpecificCountries,
    SpecificLocales,
    CartValueRange,
    CountOfItemsInCart,
    IndividualProductCountInCart,
}

/// Which value editor a rule clause needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Search-filtered pick list over a vocabulary.
    MultiSelect,
    /// Two numeric fields, min and max.
    Range,
    /// A single numeric field.
    Number,
    /// A single free-text field.
    Text,
    /// No value input; the operator alone carries the meaning.
    None,
}

impl RuleType {
    pub const COUNT: usize = 13;

    pub const ALL: [RuleType; Self::COUNT] = [
        RuleType::SpecificCollections,
        RuleType::ProductTags,
        RuleType::ProductVendors,
        RuleType::SpecificProducts,
        RuleType::ProductSubscribed,
        RuleType::SpecificDiscountCodes,
        RuleType::CustomerTag,
        RuleType::PastOrderCount,
        RuleType::SpecificCountries,
        RuleType::SpecificLocales,
        RuleType::CartValueRange,
        RuleType::CountOfItemsInCart,
        RuleType::IndividualProductCountInCart,
    ];

    /// Canonical snake_case tag, as used in the text form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleType::SpecificCollections => "specific_collections",
            RuleType::ProductTags => "product_tags",
            RuleType::ProductVendors => "product_vendors",
            RuleType::SpecificProducts => "specific_products",
            RuleType::ProductSubscribed => "product_subscribed",
            RuleType::SpecificDiscountCodes => "specific_discount_codes",
            RuleType::CustomerTag => "customer_tag",
            RuleType::PastOrderCount => "past_order_count",
            RuleType::SpecificCountries => "specific_countries",
            RuleType::SpecificLocales => "specific_locales",
            RuleType::CartValueRange => "cart_value_range",
            RuleType::CountOfItemsInCart => "count_of_items_in_cart",
            RuleType::IndividualProductCountInCart => "individual_product_count_in_cart",
        }
    }

    /// Human-readable label shown in the type selector and summary.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            RuleType::SpecificCollections => "Specific collections",
            RuleType::ProductTags => "Product tags",
            RuleType::ProductVendors => "Product vendors",
            RuleType::SpecificProducts => "Specific products",
            RuleType::ProductSubscribed => "Product subscribed",
            RuleType::SpecificDiscountCodes => "Specific discount codes",
            RuleType::CustomerTag => "Customer tag",
            RuleType::PastOrderCount => "Past order count",
            RuleType::SpecificCountries => "Specific countries",
            RuleType::SpecificLocales => "Specific locales",
            RuleType::CartValueRange => "Cart value",
            RuleType::CountOfItemsInCart => "Count of items in cart",
            RuleType::IndividualProductCountInCart => "Individual product count in cart",
        }
    }

    /// Whether the type accepts the `Between` operator and stores its values
    /// as positional `[min, max]` bounds.
    #[must_use]
    pub const fn is_range_capable(self) -> bool {
        matches!(
            self,
            RuleType::CartValueRange
                | RuleType::CountOfItemsInCart
                | RuleType::IndividualProductCountInCart
        )
    }

    /// The value editor this type needs under the given operator.
    #[must_use]
    pub const fn input_kind(self, operator: Operator) -> InputKind {
        match self {
            RuleType::SpecificCollections
            | RuleType::ProductTags
            | RuleType::ProductVendors
            | RuleType::SpecificProducts => InputKind::MultiSelect,
            RuleType::ProductSubscribed => InputKind::None,
            RuleType::SpecificDiscountCodes
            | RuleType::CustomerTag
            | RuleType::SpecificCountries
            | RuleType::SpecificLocales => InputKind::Text,
            RuleType::PastOrderCount => InputKind::Number,
            RuleType::CartValueRange
            | RuleType::CountOfItemsInCart
            | RuleType::IndividualProductCountInCart => {
                if matches!(operator, Operator::Between) {
                    InputKind::Range
                } else {
                    InputKind::Number
                }
            }
        }
    }

    /// Whether the presentation shows an operator selector for this type.
    #[must_use]
    pub const fn offers_operator_choice(self) -> bool {
        !matches!(
            self,
            RuleType::SpecificDiscountCodes | RuleType::CustomerTag
        )
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleType {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTag::RuleType { tag: s.to_owned() })
    }
}
