use eligo::{describe, describe_all, Operator, RuleSetEngine, RuleType, RuleUpdate};

/// Add a rule and retype it, resetting operator and values.
fn add_typed(engine: &mut RuleSetEngine, rule_type: RuleType) -> eligo::RuleId {
    let id = engine.add_next_available_rule().unwrap();
    assert!(engine.update_rule(id, RuleUpdate::new().rule_type(rule_type), true));
    id
}

#[test]
fn first_rule_defaults_to_specific_collections() {
    let mut engine = RuleSetEngine::new();
    let id = engine.add_next_available_rule().unwrap();

    let rule = engine.get(id).unwrap();
    assert_eq!(rule.rule_type(), RuleType::SpecificCollections);
    assert_eq!(rule.operator(), Operator::ContainsAny);
    assert!(rule.values().is_empty());
}

#[test]
fn new_exclusive_partner_takes_opposite_operator() {
    let mut engine = RuleSetEngine::new();
    let collections = engine.add_next_available_rule().unwrap();
    engine.update_rule(
        collections,
        RuleUpdate::new().operator(Operator::ContainsAny),
        false,
    );

    // tags, vendors, then products
    engine.add_next_available_rule().unwrap();
    engine.add_next_available_rule().unwrap();
    let products = engine.add_next_available_rule().unwrap();

    let rule = engine.get(products).unwrap();
    assert_eq!(rule.rule_type(), RuleType::SpecificProducts);
    assert_eq!(rule.operator(), Operator::IsNot);
}

#[test]
fn new_partner_of_excluding_collections_includes() {
    let mut engine = RuleSetEngine::new();
    let collections = engine.add_next_available_rule().unwrap();
    engine.update_rule(collections, RuleUpdate::new().operator(Operator::IsNot), false);
    for _ in 0..3 {
        engine.add_next_available_rule().unwrap();
    }
    let products = engine
        .iter()
        .find(|r| r.rule_type() == RuleType::SpecificProducts)
        .unwrap();
    assert_eq!(products.operator(), Operator::ContainsAny);
}

#[test]
fn past_order_count_summary() {
    let mut engine = RuleSetEngine::new();
    let id = add_typed(&mut engine, RuleType::PastOrderCount);
    engine.update_rule(id, RuleUpdate::new().values(["5"]), false);

    let rule = engine.get(id).unwrap();
    assert_eq!(rule.operator(), Operator::GreaterThanEqual);
    assert_eq!(describe(rule), "Past order count >= 5");
}

#[test]
fn cart_value_between_summary() {
    let mut engine = RuleSetEngine::new();
    let id = add_typed(&mut engine, RuleType::CartValueRange);
    engine.update_rule(
        id,
        RuleUpdate::new().operator(Operator::Between).values(["10", "50"]),
        false,
    );
    assert_eq!(
        describe(engine.get(id).unwrap()),
        "Cart value between: 10 and 50"
    );

    engine.update_rule(id, RuleUpdate::new().values(["10"]), false);
    assert_eq!(
        describe(engine.get(id).unwrap()),
        "Cart value between: 10 and unspecified"
    );
}

#[test]
fn adding_past_exhaustion_is_noop() {
    let mut engine = RuleSetEngine::new();
    for _ in 0..RuleType::COUNT {
        assert!(engine.add_next_available_rule().is_some());
    }
    assert!(engine.all_types_used());

    let before = engine.rules().to_vec();
    assert!(engine.add_next_available_rule().is_none());
    assert!(engine.all_types_used());
    assert_eq!(engine.rules(), before.as_slice());
}

#[test]
fn exhausting_the_catalog_lists_every_type_in_priority_order() {
    let mut engine = RuleSetEngine::new();
    while engine.add_next_available_rule().is_some() {}
    let types: Vec<RuleType> = engine.iter().map(|r| r.rule_type()).collect();
    assert_eq!(types, eligo::catalog::priority_order());
}

#[test]
fn type_change_with_reset_clears_values_and_operator() {
    let mut engine = RuleSetEngine::new();
    let id = engine.add_next_available_rule().unwrap();
    engine.update_rule(id, RuleUpdate::new().operator(Operator::IsNot), false);
    engine.add_value_to_rule(id, "Clearance");

    assert!(engine.update_rule(
        id,
        RuleUpdate::new().rule_type(RuleType::CountOfItemsInCart),
        true,
    ));

    let rule = engine.get(id).unwrap();
    assert_eq!(rule.rule_type(), RuleType::CountOfItemsInCart);
    assert_eq!(rule.operator(), Operator::GreaterThanEqual);
    assert!(rule.values().is_empty());
}

#[test]
fn type_change_resorts_the_set() {
    let mut engine = RuleSetEngine::new();
    let first = engine.add_next_available_rule().unwrap();
    let second = engine.add_next_available_rule().unwrap();

    engine.update_rule(first, RuleUpdate::new().rule_type(RuleType::SpecificLocales), true);

    let ids: Vec<_> = engine.iter().map(|r| r.id()).collect();
    assert_eq!(ids, [second, first]);
}

#[test]
fn flipping_one_partner_flips_the_other() {
    let mut engine = RuleSetEngine::new();
    let collections = engine.add_next_available_rule().unwrap();
    let tags = engine.add_next_available_rule().unwrap();
    // retyping tags into products picks the default, which flips collections
    engine.update_rule(tags, RuleUpdate::new().rule_type(RuleType::SpecificProducts), true);
    assert_eq!(engine.get(tags).unwrap().operator(), Operator::ContainsAny);
    assert_eq!(engine.get(collections).unwrap().operator(), Operator::IsNot);

    engine.update_rule(collections, RuleUpdate::new().operator(Operator::ContainsAny), false);
    assert_eq!(engine.get(tags).unwrap().operator(), Operator::IsNot);

    assert!(engine.operator_disabled(RuleType::SpecificProducts, Operator::ContainsAny));
    assert!(!engine.operator_disabled(RuleType::SpecificProducts, Operator::IsNot));
}

#[test]
fn summary_follows_priority_order() {
    let mut engine = RuleSetEngine::new();
    let cart = add_typed(&mut engine, RuleType::CartValueRange);
    engine.update_rule(cart, RuleUpdate::new().values(["100"]), false);
    let customer = add_typed(&mut engine, RuleType::CustomerTag);
    engine.add_value_to_rule(customer, "vip");

    assert_eq!(
        describe_all(engine.rules()),
        ["Customer tags: vip", "Cart value >= 100"]
    );
}

#[test]
fn empty_engine_summary() {
    let engine = RuleSetEngine::new();
    assert_eq!(describe_all(engine.rules()), [eligo::NO_RULES]);
}
