use reality_seed::core::model::{NodeCategory, NodeSpec, NodeType};
use reality_seed::core::store::{NodeStore, SqliteNodeStore};
use reality_seed::core::upsert::upsert_node;
use reality_seed::core::verify::{fingerprint, verify_tree};
use reality_seed::plugins::pareto::{MAX_DEPTH_LIMIT, PARETO_WIDTH, ParetoExample, generate};

fn store_with_frameworks() -> SqliteNodeStore {
    let store = SqliteNodeStore::open_in_memory().unwrap();
    upsert_node(
        &store,
        NodeSpec::new("reality-root", "REALITY", NodeType::Root).immutable(true),
    )
    .unwrap();
    upsert_node(
        &store,
        NodeSpec::new("frameworks-node", "FRAMEWORKS", NodeType::Category)
            .parent("reality-root")
            .immutable(true),
    )
    .unwrap();
    store
}

fn examples(n: usize) -> Vec<ParetoExample> {
    (1..=n)
        .map(|i| ParetoExample {
            title: format!("TECHNIQUE_{}", i),
            description: Some(format!("Technique {}", i)),
            category: Some(NodeCategory::Strategic),
        })
        .collect()
}

#[test]
fn width_is_capped_at_five() {
    let store = store_with_frameworks();
    let report = generate(&store, "frameworks-node", 1, &examples(8), NodeType::Framework, 2).unwrap();
    assert_eq!(report.node_ids.len(), PARETO_WIDTH);
    assert_eq!(store.children("frameworks-node").unwrap().len(), PARETO_WIDTH);
    assert!(store.find_by_id("frameworks-node-technique-6-1").unwrap().is_none());
}

#[test]
fn depth_budget_bounds_the_subtree() {
    let store = store_with_frameworks();
    let report = generate(&store, "frameworks-node", 1, &examples(2), NodeType::Framework, 3).unwrap();
    // 2 at level 1, 5 under each at level 2; level 3 reaches max_depth
    assert_eq!(report.node_ids.len(), 2 + 2 * 5);
    assert_eq!(report.deepest_level, Some(2));
    assert_eq!(report.tally.created, 12);

    let first = store
        .find_by_id("frameworks-node-technique-1-1")
        .unwrap()
        .unwrap();
    assert!(first.immutable);
    assert_eq!(first.order_index, 1);
    let m = first.metadata.unwrap();
    assert_eq!(m["level"], 1);
    assert_eq!(m["paretoRank"], 1);

    let grandchild = store
        .find_by_id("frameworks-node-technique-1-1-technique-1-example-3-2")
        .unwrap()
        .expect("synthetic grandchild");
    assert_eq!(grandchild.title, "TECHNIQUE_1_EXAMPLE_3");
    assert_eq!(grandchild.category, Some(NodeCategory::Strategic));
    assert!(grandchild.immutable);
    assert!(verify_tree(&store).unwrap().is_healthy());
}

#[test]
fn levels_past_two_are_mutable() {
    let store = store_with_frameworks();
    generate(&store, "frameworks-node", 3, &examples(1), NodeType::Framework, 4).unwrap();
    let node = store
        .find_by_id("frameworks-node-technique-1-3")
        .unwrap()
        .unwrap();
    assert!(!node.immutable);
}

#[test]
fn level_at_budget_does_nothing() {
    let store = store_with_frameworks();
    let report = generate(&store, "frameworks-node", 4, &examples(3), NodeType::Framework, 4).unwrap();
    assert!(report.node_ids.is_empty());
    assert!(!report.refused);
}

#[test]
fn refuses_to_generate_under_the_root() {
    let store = store_with_frameworks();
    let report = generate(&store, "reality-root", 1, &examples(3), NodeType::Framework, 3).unwrap();
    assert!(report.refused);
    assert!(report.node_ids.is_empty());
    assert_eq!(store.children("reality-root").unwrap().len(), 1);
}

#[test]
fn missing_parent_is_not_found() {
    let store = store_with_frameworks();
    let err = generate(&store, "nope", 1, &examples(1), NodeType::Framework, 3).unwrap_err();
    assert_eq!(err.kind(), "not_found");
}

#[test]
fn regeneration_is_deterministic() {
    let store = store_with_frameworks();
    generate(&store, "frameworks-node", 1, &examples(3), NodeType::Framework, 3).unwrap();
    let before = fingerprint(&store).unwrap();

    let again = generate(&store, "frameworks-node", 1, &examples(3), NodeType::Framework, 3).unwrap();
    assert_eq!(again.tally.created, 0);
    assert_eq!(again.tally.unchanged, again.node_ids.len());
    assert_eq!(fingerprint(&store).unwrap(), before);
}

#[test]
fn generation_from_level_zero_stays_below_depth_four() {
    let store = store_with_frameworks();
    let report = generate(&store, "frameworks-node", 0, &examples(2), NodeType::Framework, 4).unwrap();
    // 2 at level 0, then 5 per node for levels 1..=3
    assert_eq!(report.node_ids.len(), 2 + 10 + 50 + 250);
    assert_eq!(report.deepest_level, Some(3));

    let levels: Vec<i64> = store
        .nodes_by_type(NodeType::Framework)
        .unwrap()
        .iter()
        .map(|n| n.metadata.as_ref().unwrap()["level"].as_i64().unwrap())
        .collect();
    assert_eq!(levels.len(), report.node_ids.len());
    assert!(levels.iter().all(|&l| l < 4));
    assert!(verify_tree(&store).unwrap().is_healthy());
}

#[test]
fn depth_budget_past_the_limit_is_rejected() {
    let store = store_with_frameworks();
    let err = generate(
        &store,
        "frameworks-node",
        0,
        &examples(1),
        NodeType::Framework,
        MAX_DEPTH_LIMIT + 3,
    )
    .unwrap_err();
    assert_eq!(err.kind(), "validation");
    assert!(store.children("frameworks-node").unwrap().is_empty());
}
