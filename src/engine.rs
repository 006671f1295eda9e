use std::fmt;

use tracing::{debug, trace};

use crate::catalog;
use crate::{EligoError, Operator, RangeBound, Rule, RuleId, RuleType, RuleUpdate};

/// The editable set of eligibility rules for one offer.
///
/// Every operation leaves the set in a consistent state: at most one rule per
/// [`RuleType`], each operator legal for its type, rules ordered by
/// [`priority_of`](catalog::priority_of), and the two halves of a mutually
/// exclusive pair always carrying opposite inclusion senses.
///
/// Operations that target an id no longer in the set are no-ops and report
/// `false` / `None` rather than failing.
///
/// # Example
///
/// ```
/// use eligo::{RuleSetEngine, RuleType, RuleUpdate};
///
/// let mut engine = RuleSetEngine::new();
/// let collections = engine.add_next_available_rule().unwrap();
/// engine.add_value_to_rule(collections, "Summer Collection");
///
/// let cart = engine.add_next_available_rule().unwrap();
/// engine.update_rule(
///     cart,
///     RuleUpdate::new().rule_type(RuleType::CartValueRange),
///     true,
/// );
/// engine.update_rule(cart, RuleUpdate::new().values(["100"]), false);
///
/// assert_eq!(
///     eligo::describe_all(engine.rules()),
///     ["Summer Collection included", "Cart value >= 100"],
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSetEngine {
    rules: Vec<Rule>,
    next_id: u64,
}

impl RuleSetEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot, in priority order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    #[must_use]
    pub fn get(&self, id: RuleId) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether some rule already uses `rule_type`. The type selector greys
    /// these out.
    #[must_use]
    pub fn type_in_use(&self, rule_type: RuleType) -> bool {
        self.find_type(rule_type).is_some()
    }

    /// True once every rule type has a rule; gates the "add rule" action.
    #[must_use]
    pub fn all_types_used(&self) -> bool {
        RuleType::ALL.iter().all(|ty| self.type_in_use(*ty))
    }

    /// Add a rule of the highest-priority type not yet in the set.
    ///
    /// The new rule starts with the type's default operator and no values,
    /// unless its exclusivity partner is present, in which case it takes the
    /// operator opposite to the partner's. Returns `None` without changing
    /// anything when every type is already used.
    pub fn add_next_available_rule(&mut self) -> Option<RuleId> {
        let Some(rule_type) = catalog::priority_order()
            .iter()
            .copied()
            .find(|ty| !self.type_in_use(*ty))
        else {
            debug!("every rule type is in use; nothing to add");
            return None;
        };

        let mut operator = catalog::default_operator(rule_type);
        if let Some(partner) = catalog::mutually_exclusive_partner(rule_type)
            .and_then(|partner_type| self.find_type(partner_type))
        {
            if let Some(opposite) = catalog::opposite_operator(rule_type, partner.operator) {
                operator = opposite;
            }
        }

        let id = self.fresh_id();
        self.rules.push(Rule {
            id,
            rule_type,
            operator,
            values: Vec::new(),
        });
        self.sort_by_priority();
        debug!(rule = %id, %rule_type, %operator, "added rule");
        Some(id)
    }

    /// Remove a rule, returning it. Unknown ids are ignored.
    pub fn remove_rule(&mut self, id: RuleId) -> Option<Rule> {
        let index = self.position(id)?;
        let removed = self.rules.remove(index);
        debug!(rule = %id, rule_type = %removed.rule_type, "removed rule");
        Some(removed)
    }

    /// Apply a partial update to a rule.
    ///
    /// When the update changes the rule type and `reset_operator_on_type_change`
    /// is set, the operator resets to the new type's default and the previous
    /// values are dropped; values carried by the update itself still apply.
    /// Afterwards the exclusivity partner, if present, is flipped to the
    /// opposite sense of this rule's operator.
    ///
    /// Returns `false` and changes nothing if the id is unknown, the new type is
    /// already held by another rule, or the update names an operator that is
    /// not legal for the resulting type.
    pub fn update_rule(
        &mut self,
        id: RuleId,
        update: RuleUpdate,
        reset_operator_on_type_change: bool,
    ) -> bool {
        let Some(index) = self.position(id) else {
            debug!(rule = %id, "update ignored; rule not found");
            return false;
        };

        let current = &self.rules[index];
        let rule_type = update.rule_type.unwrap_or(current.rule_type);
        let type_changed = rule_type != current.rule_type;

        if type_changed && self.type_in_use(rule_type) {
            debug!(rule = %id, %rule_type, "update rejected; type already in use");
            return false;
        }

        let reset = type_changed && reset_operator_on_type_change;
        let operator = if reset {
            catalog::default_operator(rule_type)
        } else {
            match update.operator {
                Some(op) if !catalog::is_legal(rule_type, op) => {
                    debug!(rule = %id, %rule_type, operator = %op, "update rejected; illegal operator");
                    return false;
                }
                Some(op) => op,
                None if catalog::is_legal(rule_type, current.operator) => current.operator,
                None => catalog::default_operator(rule_type),
            }
        };

        let rule = &mut self.rules[index];
        if reset {
            rule.values.clear();
        }
        rule.rule_type = rule_type;
        rule.operator = operator;
        if let Some(values) = update.values {
            rule.values = values;
        }
        normalize_values(rule);
        debug!(rule = %id, %rule_type, %operator, values = rule.values.len(), "updated rule");

        self.sync_exclusive_partner(rule_type, operator);
        self.sort_by_priority();
        true
    }

    /// Append `value` to a rule unless it is already there.
    ///
    /// Returns whether the rule changed.
    pub fn add_value_to_rule(&mut self, id: RuleId, value: &str) -> bool {
        let Some(rule) = self.rule_mut(id) else {
            return false;
        };
        if rule.values.iter().any(|v| v == value) {
            trace!(rule = %id, value, "value already selected");
            return false;
        }
        rule.values.push(value.to_owned());
        debug!(rule = %id, value, "added value");
        true
    }

    /// Remove `value` from a rule. Returns whether the rule changed.
    pub fn remove_value_from_rule(&mut self, id: RuleId, value: &str) -> bool {
        let Some(rule) = self.rule_mut(id) else {
            return false;
        };
        let Some(pos) = rule.values.iter().position(|v| v == value) else {
            return false;
        };
        rule.values.remove(pos);
        debug!(rule = %id, value, "removed value");
        true
    }

    /// Write one end of a `Between` rule's range. The other end is kept, or
    /// left blank if it was never set.
    ///
    /// Returns `false` for unknown ids and for rules that are not currently
    /// ranges.
    pub fn set_range_bound(&mut self, id: RuleId, bound: RangeBound, value: &str) -> bool {
        let Some(rule) = self.rule_mut(id) else {
            return false;
        };
        if !rule.takes_range_bounds() {
            debug!(rule = %id, "range bound ignored; rule is not a range");
            return false;
        }
        rule.values.resize(2, String::new());
        value.clone_into(&mut rule.values[bound.slot()]);
        debug!(rule = %id, ?bound, value, "set range bound");
        true
    }

    /// Whether the operator selector should grey out `operator` for a rule of
    /// `rule_type`: only when the type's exclusivity partner is present and
    /// already uses an operator of the same sense.
    #[must_use]
    pub fn operator_disabled(&self, rule_type: RuleType, operator: Operator) -> bool {
        catalog::mutually_exclusive_partner(rule_type)
            .and_then(|partner_type| self.find_type(partner_type))
            .is_some_and(|partner| partner.operator.sense() == operator.sense())
    }

    /// Parse rule-set text and load it into a new engine.
    ///
    /// The loaded set satisfies the same invariants as one built through the
    /// engine's operations; text that would violate them is rejected rather
    /// than repaired.
    ///
    /// # Errors
    ///
    /// Returns [`EligoError`] on a syntax error or an [`ImportError`] for
    /// duplicate types, illegal operators, or an exclusive pair sharing the
    /// same sense.
    ///
    /// [`ImportError`]: crate::ImportError
    pub fn from_dsl(input: &str) -> Result<Self, EligoError> {
        let parsed = crate::parse::parse(input)?;
        let engine = crate::import::build(parsed)?;
        Ok(engine)
    }

    /// Read a rule-set file and load it into a new engine.
    ///
    /// # Errors
    ///
    /// Returns [`EligoError`] on I/O, parse, or import failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, EligoError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_dsl(&input)
    }

    /// The canonical text form of the current rules, readable by
    /// [`from_dsl`](Self::from_dsl).
    #[must_use]
    pub fn to_dsl(&self) -> String {
        crate::parse::write_rules(&self.rules)
    }

    /// Push a fully-formed clause during import. The caller has already
    /// checked uniqueness and operator legality.
    pub(crate) fn insert_clause(
        &mut self,
        rule_type: RuleType,
        operator: Operator,
        values: Vec<String>,
    ) -> RuleId {
        let id = self.fresh_id();
        let mut rule = Rule {
            id,
            rule_type,
            operator,
            values,
        };
        normalize_values(&mut rule);
        self.rules.push(rule);
        self.sort_by_priority();
        id
    }

    fn fresh_id(&mut self) -> RuleId {
        self.next_id += 1;
        RuleId(self.next_id)
    }

    fn position(&self, id: RuleId) -> Option<usize> {
        self.rules.iter().position(|r| r.id == id)
    }

    fn rule_mut(&mut self, id: RuleId) -> Option<&mut Rule> {
        let found = self.rules.iter_mut().find(|r| r.id == id);
        if found.is_none() {
            debug!(rule = %id, "rule not found");
        }
        found
    }

    fn find_type(&self, rule_type: RuleType) -> Option<&Rule> {
        self.rules.iter().find(|r| r.rule_type == rule_type)
    }

    /// Flip the partner of `rule_type` so its sense is opposite to `operator`.
    fn sync_exclusive_partner(&mut self, rule_type: RuleType, operator: Operator) {
        let Some(partner_type) = catalog::mutually_exclusive_partner(rule_type) else {
            return;
        };
        let Some(partner) = self.rules.iter_mut().find(|r| r.rule_type == partner_type) else {
            return;
        };
        if partner.operator.sense() != operator.sense() {
            return;
        }
        if let Some(opposite) = catalog::opposite_operator(partner_type, operator) {
            trace!(rule = %partner.id, from = %partner.operator, to = %opposite, "flipped exclusive partner");
            partner.operator = opposite;
        }
    }

    fn sort_by_priority(&mut self) {
        self.rules
            .sort_by_key(|r| catalog::priority_of(r.rule_type));
    }
}

/// Drop repeated values, keeping first occurrences. Range bounds are
/// positional and may legitimately repeat.
fn normalize_values(rule: &mut Rule) {
    if rule.takes_range_bounds() {
        return;
    }
    let mut seen = Vec::with_capacity(rule.values.len());
    rule.values.retain(|v| {
        if seen.contains(v) {
            false
        } else {
            seen.push(v.clone());
            true
        }
    });
}

impl<'a> IntoIterator for &'a RuleSetEngine {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl fmt::Display for RuleSetEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RuleSetEngine({} of {} rule types)",
            self.rules.len(),
            RuleType::COUNT,
        )
    }
}
