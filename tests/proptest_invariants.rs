
use std::collections::HashSet;

use eligo::{catalog, describe_all, Operator, RuleSetEngine, RuleType};
use proptest::prelude::*;
use strategies::{arb_ops, replay};

/// Check every structural invariant of the rule set.
fn check_invariants(engine: &RuleSetEngine) -> Result<(), TestCaseError> {
    let rules = engine.rules();

    // at most one rule per type
    let types: HashSet<RuleType> = rules.iter().map(|r| r.rule_type()).collect();
    prop_assert_eq!(types.len(), rules.len(), "duplicate rule type in {:?}", rules);

    // priority order
    for pair in rules.windows(2) {
        prop_assert!(
            catalog::priority_of(pair[0].rule_type()) <= catalog::priority_of(pair[1].rule_type()),
            "{} listed before {}",
            pair[0].rule_type(),
            pair[1].rule_type(),
        );
    }

    // operator legality
    for rule in rules {
        prop_assert!(
            catalog::operators_for(rule.rule_type()).contains(&rule.operator()),
            "operator {} not legal for {}",
            rule.operator(),
            rule.rule_type(),
        );
    }

    // exclusive pair senses differ
    let collections = rules
        .iter()
        .find(|r| r.rule_type() == RuleType::SpecificCollections);
    let products = rules
        .iter()
        .find(|r| r.rule_type() == RuleType::SpecificProducts);
    if let (Some(c), Some(p)) = (collections, products) {
        prop_assert_ne!(
            c.operator().sense(),
            p.operator().sense(),
            "exclusive pair share a sense: {} / {}",
            c.operator(),
            p.operator(),
        );
    }

    // no repeated values outside positional range bounds
    for rule in rules {
        let is_range = rule.rule_type().is_range_capable() && rule.operator() == Operator::Between;
        if !is_range {
            let distinct: HashSet<&String> = rule.values().iter().collect();
            prop_assert_eq!(distinct.len(), rule.values().len(), "repeated value in {:?}", rule);
        }
    }

    // ids unique
    let ids: HashSet<_> = rules.iter().map(|r| r.id()).collect();
    prop_assert_eq!(ids.len(), rules.len());

    Ok(())
}

// ---------------------------------------------------------------------------
// Invariant 1: structural consistency after any interaction sequence
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn invariants_hold_after_every_step(ops in arb_ops()) {
        let mut engine = RuleSetEngine::new();
        for op in &ops {
            strategies::apply(&mut engine, op);
            check_invariants(&engine)?;
        }
    }

    #[test]
    fn all_types_used_matches_rule_count(ops in arb_ops()) {
        let engine = replay(&ops);
        prop_assert_eq!(engine.all_types_used(), engine.len() == RuleType::COUNT);
    }
}

// ---------------------------------------------------------------------------
// Invariant 2: value editing
//
// Adding a value twice is the same as adding it once, and adding a fresh value
// then removing it restores the previous list exactly.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn add_value_is_idempotent(ops in arb_ops(), pick in any::<usize>(), value in "[a-z]{1,8}") {
        let mut engine = replay(&ops);
        prop_assume!(!engine.is_empty());
        let id = engine.rules()[pick % engine.len()].id();

        engine.add_value_to_rule(id, &value);
        let once = engine.get(id).unwrap().values().to_vec();
        let changed = engine.add_value_to_rule(id, &value);
        prop_assert!(!changed);
        prop_assert_eq!(engine.get(id).unwrap().values(), once.as_slice());
    }

    #[test]
    fn add_then_remove_restores_values(ops in arb_ops(), pick in any::<usize>()) {
        let mut engine = replay(&ops);
        prop_assume!(!engine.is_empty());
        let id = engine.rules()[pick % engine.len()].id();
        let before = engine.get(id).unwrap().values().to_vec();

        // never produced by the strategies, so it is not already present
        let fresh = "proptest-only value";
        prop_assert!(engine.add_value_to_rule(id, fresh));
        prop_assert!(engine.remove_value_from_rule(id, fresh));
        prop_assert_eq!(engine.get(id).unwrap().values(), before.as_slice());
    }
}

// ---------------------------------------------------------------------------
// Invariant 3: rendering is total
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn one_summary_line_per_rule(ops in arb_ops()) {
        let engine = replay(&ops);
        let lines = describe_all(engine.rules());
        prop_assert_eq!(lines.len(), engine.len().max(1));
        for line in &lines {
            prop_assert!(!line.is_empty());
        }
    }

    #[test]
    fn text_form_round_trips(ops in arb_ops()) {
        let engine = replay(&ops);
        let reloaded = RuleSetEngine::from_dsl(&engine.to_dsl()).unwrap();
        prop_assert_eq!(reloaded.len(), engine.len());
        for (a, b) in engine.iter().zip(reloaded.iter()) {
            prop_assert_eq!(a.rule_type(), b.rule_type());
            prop_assert_eq!(a.operator(), b.operator());
            prop_assert_eq!(a.values(), b.values());
        }
    }
}
