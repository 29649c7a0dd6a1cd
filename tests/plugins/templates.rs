use reality_seed::core::model::{NodeSpec, NodeType, metadata};
use reality_seed::core::store::{NodeStore, SqliteNodeStore};
use reality_seed::core::upsert::upsert_node;
use reality_seed::plugins::templates::{
    MigrationAction, TEMPLATE_VERSION, check_versions, migrate_templates,
};
use serde_json::json;

fn store_with_templates() -> SqliteNodeStore {
    let store = SqliteNodeStore::open_in_memory().unwrap();
    upsert_node(
        &store,
        NodeSpec::new("reality-root", "REALITY", NodeType::Root).immutable(true),
    )
    .unwrap();
    upsert_node(
        &store,
        NodeSpec::new("old-law", "LAW_OF_TIME", NodeType::Law)
            .parent("reality-root")
            .description("Time flows one way.")
            .metadata(metadata(json!({"derivedFrom": ["Constraints of Reality"]}))),
    )
    .unwrap();
    upsert_node(
        &store,
        NodeSpec::new("current-framework", "DECISION_MATRIX", NodeType::Framework)
            .parent("reality-root")
            .metadata(metadata(json!({"_version": TEMPLATE_VERSION, "purpose": "Choose."}))),
    )
    .unwrap();
    upsert_node(
        &store,
        NodeSpec::new("future-principle", "LEVERAGE", NodeType::Principle)
            .parent("reality-root")
            .metadata(metadata(json!({"_version": "3.1.0"}))),
    )
    .unwrap();
    store
}

#[test]
fn check_lists_outdated_and_newer_nodes() {
    let store = store_with_templates();
    let mismatches = check_versions(&store).unwrap();
    let ids: Vec<&str> = mismatches.iter().map(|m| m.node_id.as_str()).collect();
    assert_eq!(ids, vec!["old-law", "future-principle"]);
    assert_eq!(mismatches[0].current_version, None);
    assert_eq!(mismatches[1].current_version.as_deref(), Some("3.1.0"));
}

#[test]
fn dry_run_reports_without_writing() {
    let store = store_with_templates();
    let report = migrate_templates(&store, true).unwrap();
    assert!(report.dry_run);
    assert_eq!(report.updated, 1);
    assert_eq!(report.skipped, 2);
    assert_eq!(report.errors, 0);

    let law = store.find_by_id("old-law").unwrap().unwrap();
    assert!(!law.metadata.unwrap().contains_key("_version"));
}

#[test]
fn migration_fills_fields_and_never_downgrades() {
    let store = store_with_templates();
    let report = migrate_templates(&store, false).unwrap();
    assert_eq!(report.updated, 1);
    let newer = report
        .details
        .iter()
        .find(|d| d.node_id == "future-principle")
        .unwrap();
    assert_eq!(newer.action, MigrationAction::Skipped);
    assert!(newer.reason.as_deref().unwrap().contains("newer"));

    let law = store.find_by_id("old-law").unwrap().unwrap();
    let m = law.metadata.unwrap();
    assert_eq!(m["_version"], TEMPLATE_VERSION);
    assert_eq!(m["_templateType"], "law");
    assert_eq!(m["statement"], "Time flows one way.");
    assert_eq!(m["derivedFrom"], json!(["Constraints of Reality"]));
    assert_eq!(m["recursiveBehavior"], "");
    assert!(m.contains_key("_lastMigrated"));

    let principle = store.find_by_id("future-principle").unwrap().unwrap();
    assert_eq!(principle.metadata.unwrap()["_version"], "3.1.0");

    // the newer node is still reported; everything else is current
    assert_eq!(check_versions(&store).unwrap().len(), 1);
    assert_eq!(migrate_templates(&store, false).unwrap().updated, 0);
}
