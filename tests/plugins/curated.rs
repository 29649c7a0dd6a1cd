use reality_seed::core::model::{NodeCategory, NodeType};
use reality_seed::core::store::{NodeStore, SqliteNodeStore};
use reality_seed::core::verify::{fingerprint, verify_tree};
use reality_seed::plugins::curated::{
    AGENTS_ID, FINANCE_ID, LAWS_ID, PRINCIPLES_ID, REALITY_ID, SYSTEMS_ID, seed_curated,
};
use reality_seed::plugins::templates::{TEMPLATE_VERSION, check_versions};

fn seeded() -> SqliteNodeStore {
    let store = SqliteNodeStore::open_in_memory().unwrap();
    let tally = seed_curated(&store).unwrap();
    assert!(tally.created > 0);
    assert_eq!(tally.updated + tally.rekeyed, 0);
    store
}

fn child_titles(store: &SqliteNodeStore, parent: &str) -> Vec<String> {
    store
        .children(parent)
        .unwrap()
        .into_iter()
        .map(|n| n.title)
        .collect()
}

#[test]
fn builds_a_single_rooted_healthy_tree() {
    let store = seeded();
    let report = verify_tree(&store).unwrap();
    assert!(report.is_healthy(), "{:?}", report.problems);
    assert_eq!(report.root_id.as_deref(), Some(REALITY_ID));
    assert_eq!(report.max_depth, 7);

    assert_eq!(
        child_titles(&store, REALITY_ID),
        vec![
            "CONSTRAINTS_OF_REALITY",
            "AGENTS",
            "ENVIRONMENTS",
            "RESOURCES",
            "VALUE",
            "SYSTEMS"
        ]
    );
    let root = store.find_by_id(REALITY_ID).unwrap().unwrap();
    assert_eq!(root.node_type, NodeType::Root);
    assert!(root.immutable);
}

#[test]
fn laws_and_principles_carry_template_metadata() {
    let store = seeded();
    let law = store
        .find_by_id("laws-node-fundamental-law-of-compounding")
        .unwrap()
        .expect("compounding law");
    assert_eq!(law.parent_id.as_deref(), Some(LAWS_ID));
    assert_eq!(law.category, Some(NodeCategory::Fundamental));
    let m = law.metadata.unwrap();
    assert_eq!(m["_version"], TEMPLATE_VERSION);
    assert_eq!(m["_templateType"], "law");
    assert!(m["statement"].as_str().unwrap().starts_with("Effects multiply"));

    assert_eq!(store.children(PRINCIPLES_ID).unwrap().len(), 14);
    let trust = store
        .find_by_id("principles-node-cross-system-trust")
        .unwrap()
        .expect("trust principle");
    assert_eq!(trust.order_index, 11);
    let m = trust.metadata.unwrap();
    assert_eq!(m["modifierType"], "GLOBAL");
    assert_eq!(m["isCrossSystemModifier"], true);
    assert!(m["applicationRules"]["costMultiplier"].is_string());

    assert!(check_versions(&store).unwrap().is_empty());
    assert_eq!(store.nodes_by_type(NodeType::Framework).unwrap().len(), 5);
}

#[test]
fn agent_branch_locks_only_the_first_level() {
    let store = seeded();
    let human = store.find_by_id("agents-node-human").unwrap().unwrap();
    assert_eq!(human.parent_id.as_deref(), Some(AGENTS_ID));
    assert_eq!(human.node_type, NodeType::Agent);
    assert!(human.immutable);

    let cognitive = store
        .find_by_id("agents-node-human-cognitive-abilities")
        .unwrap()
        .unwrap();
    assert!(!cognitive.immutable);
    assert_eq!(
        child_titles(&store, &cognitive.id).len(),
        5,
        "great-grandchildren seeded"
    );
}

#[test]
fn finance_concept_and_categories_share_a_parent_without_collisions() {
    let store = seeded();
    let titles = child_titles(&store, FINANCE_ID);
    assert!(titles.contains(&"MONEY".to_string()));
    assert!(titles.contains(&"CURRENCY".to_string()));
    assert_eq!(titles.len(), 6);

    let sp500 = store
        .find_by_id("finance-system-universal-concept-investment-equity-markets-s&p-500")
        .unwrap()
        .expect("S&P 500 pathway");
    assert!(sp500.immutable);
    assert_eq!(sp500.metadata.unwrap()["isPathway"], true);
}

#[test]
fn systems_are_capped_per_tier() {
    let store = seeded();
    let tiers = child_titles(&store, SYSTEMS_ID);
    assert!(!tiers.contains(&"LEVERAGE_TIER".to_string()));
    assert_eq!(tiers.len(), 5);

    let cross = child_titles(&store, "systems-node-cross-system-states");
    assert_eq!(cross, vec!["TRUST", "REPUTATION", "OPTIONALITY"]);

    let education = "systems-node-growth-tier-education";
    let titles = child_titles(&store, education);
    assert!(titles.contains(&"LEARNING".to_string()));
    assert!(titles.contains(&"LEARNING_METHODS".to_string()));
    let sub = store
        .find_by_id(&format!("{}-learning-methods", education))
        .unwrap()
        .unwrap();
    assert!(!sub.immutable);
    assert_eq!(sub.metadata.unwrap()["parentSystem"], "education");
}

#[test]
fn second_run_changes_nothing() {
    let store = seeded();
    let before = fingerprint(&store).unwrap();
    let total = store.all_nodes().unwrap().len();

    let tally = seed_curated(&store).unwrap();
    assert_eq!(tally.created, 0);
    assert_eq!(tally.updated, 0);
    assert_eq!(tally.rekeyed, 0);
    assert_eq!(tally.unchanged, total);
    assert_eq!(fingerprint(&store).unwrap(), before);
}

#[test]
fn legacy_ids_are_rekeyed_with_their_subtree() {
    let store = seeded();
    let before = fingerprint(&store).unwrap();
    store
        .rename("systems-node-survival-tier", "systems-node-survival_tier")
        .unwrap();

    let tally = seed_curated(&store).unwrap();
    assert_eq!(tally.rekeyed, 1);
    assert_eq!(tally.created, 0);
    assert!(store.find_by_id("systems-node-survival_tier").unwrap().is_none());
    let health = store
        .find_by_id("systems-node-survival-tier-health")
        .unwrap()
        .unwrap();
    assert_eq!(health.parent_id.as_deref(), Some("systems-node-survival-tier"));
    assert!(verify_tree(&store).unwrap().is_healthy());
    assert_eq!(fingerprint(&store).unwrap(), before);
}
