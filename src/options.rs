//! Candidate values offered by the pick-list editor.
//!
//! [`StaticOptions`] carries a fixed mock vocabulary. Anything that can answer
//! [`ValueOptions::options_for`] (a catalog service client, a test fixture)
//! can stand in for it.

use std::collections::HashMap;

use crate::RuleType;

/// Source of selectable values for a rule type.
pub trait ValueOptions {
    /// All candidate values for `rule_type`, in display order. Types that take
    /// free text or numbers return an empty slice.
    fn options_for(&self, rule_type: RuleType) -> &[String];

    /// Candidates whose text contains `search`, ignoring case. An empty search
    /// matches everything.
    fn filter_options<'a>(&'a self, rule_type: RuleType, search: &str) -> FilteredOptions<'a> {
        FilteredOptions {
            options: self.options_for(rule_type).iter(),
            needle: search.to_lowercase(),
        }
    }
}

/// Lazy iterator returned by [`ValueOptions::filter_options`].
#[derive(Debug, Clone)]
pub struct FilteredOptions<'a> {
    options: std::slice::Iter<'a, String>,
    needle: String,
}

impl<'a> Iterator for FilteredOptions<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = &self.needle;
        self.options
            .by_ref()
            .find(|option| needle.is_empty() || option.to_lowercase().contains(needle.as_str()))
            .map(String::as_str)
    }
}

const COLLECTIONS: &[&str] = &[
    "Summer Collection",
    "Winter Collection",
    "Holiday Special",
    "Clearance",
    "New Arrivals",
];

const PRODUCT_TAGS: &[&str] = &[
    "Premium",
    "Sale",
    "New",
    "Limited Edition",
    "Archived",
    "Accessory",
    "Snow",
    "Snowboard",
];

const VENDORS: &[&str] = &["Nike", "Adidas", "Puma", "Under Armour", "Reebok"];

const PRODUCTS: &[&str] = &[
    "Running Shoes",
    "Cotton T-Shirt",
    "Denim Jeans",
    "Leather Jacket",
    "Winter Coat",
];

/// In-memory vocabulary keyed by rule type.
#[derive(Debug, Clone)]
pub struct StaticOptions {
    vocabularies: HashMap<RuleType, Vec<String>>,
}

impl StaticOptions {
    /// The built-in mock vocabulary: collections, product tags, vendors and
    /// products.
    #[must_use]
    pub fn new() -> Self {
        Self::empty()
            .with_options(RuleType::SpecificCollections, COLLECTIONS.iter().copied())
            .with_options(RuleType::ProductTags, PRODUCT_TAGS.iter().copied())
            .with_options(RuleType::ProductVendors, VENDORS.iter().copied())
            .with_options(RuleType::SpecificProducts, PRODUCTS.iter().copied())
    }

    /// A provider with no vocabulary for any type.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            vocabularies: HashMap::new(),
        }
    }

    /// Replace the vocabulary for one rule type.
    #[must_use]
    pub fn with_options<I, S>(mut self, rule_type: RuleType, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabularies
            .insert(rule_type, options.into_iter().map(Into::into).collect());
        self
    }
}

impl Default for StaticOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueOptions for StaticOptions {
    fn options_for(&self, rule_type: RuleType) -> &[String] {
        self.vocabularies
            .get(&rule_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Counter shown beside a pick list, e.g. `"2/5"`. Empty when nothing is
/// selected.
#[must_use]
pub fn selection_label(selected: usize, total: usize) -> String {
    if selected == 0 {
        String::new()
    } else {
        format!("{selected}/{total}")
    }
}

/// Placeholder text for a type's search box.
#[must_use]
pub fn search_prompt(rule_type: RuleType) -> String {
    format!("Search {}...", rule_type.label().to_lowercase())
}
