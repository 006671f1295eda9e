//! Compose a small offer and print the summary a merchant would see.
//!
//! Run with `RUST_LOG=eligo=debug cargo run --example summary` to watch the
//! engine's decisions.

use eligo::{
    describe_all, selection_label, Operator, RangeBound, RuleSetEngine, RuleType, RuleUpdate,
    StaticOptions, ValueOptions,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eligo::EligoError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = StaticOptions::new();
    let mut engine = RuleSetEngine::new();

    // Pick two collections from a search.
    let collections = engine
        .add_next_available_rule()
        .ok_or_else(|| std::io::Error::other("no rule type left"))?;
    let hits: Vec<String> = options
        .filter_options(RuleType::SpecificCollections, "collection")
        .map(str::to_owned)
        .collect();
    for hit in &hits {
        engine.add_value_to_rule(collections, hit);
    }
    println!(
        "collections selected: {}",
        selection_label(
            hits.len(),
            options.options_for(RuleType::SpecificCollections).len()
        )
    );

    // Cart value between 25 and 200.
    let cart = engine
        .add_next_available_rule()
        .ok_or_else(|| std::io::Error::other("no rule type left"))?;
    engine.update_rule(
        cart,
        RuleUpdate::new()
            .rule_type(RuleType::CartValueRange)
            .operator(Operator::Between),
        false,
    );
    engine.set_range_bound(cart, RangeBound::Min, "25");
    engine.set_range_bound(cart, RangeBound::Max, "200");

    // Exclude a product. Collections stay inclusive.
    let products = engine
        .add_next_available_rule()
        .ok_or_else(|| std::io::Error::other("no rule type left"))?;
    engine.update_rule(
        products,
        RuleUpdate::new()
            .rule_type(RuleType::SpecificProducts)
            .operator(Operator::IsNot),
        false,
    );
    engine.add_value_to_rule(products, "Winter Coat");

    println!("\n{engine}");
    for line in describe_all(engine.rules()) {
        println!("  - {line}");
    }

    let text = engine.to_dsl();
    println!("\n{text}");
    let reloaded = RuleSetEngine::from_dsl(&text)?;
    assert_eq!(describe_all(reloaded.rules()), describe_all(engine.rules()));

    Ok(())
}
