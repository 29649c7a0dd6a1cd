use reality_seed::core::broker::BrokerEvent;
use reality_seed::core::model::{DomainRecord, NodeCategory, NodeSpec, NodeType, metadata};
use reality_seed::core::store::{DomainRecordSource, NodeStore, SqliteNodeStore};
use reality_seed::core::upsert::{UpsertOutcome, upsert_node};
use reality_seed::core::verify::{fingerprint, stats, verify_tree};
use serde_json::json;
use std::fs;
use tempfile::tempdir;

fn store() -> SqliteNodeStore {
    SqliteNodeStore::open_in_memory().expect("in-memory store")
}

fn seed_root(store: &SqliteNodeStore) {
    upsert_node(
        store,
        NodeSpec::new("reality-root", "REALITY", NodeType::Root)
            .category(NodeCategory::Foundational)
            .immutable(true),
    )
    .expect("root");
}

fn category(id: &str, title: &str, parent: &str) -> NodeSpec {
    NodeSpec::new(id, title, NodeType::Category).parent(parent)
}

#[test]
fn upsert_creates_then_reports_unchanged() {
    let store = store();
    seed_root(&store);

    let spec = category("laws-node", "LAWS", "reality-root")
        .description("Immutable laws")
        .metadata(metadata(json!({"kind": "laws", "_seededAt": "1Z"})));
    let first = upsert_node(&store, spec.clone()).unwrap();
    assert_eq!(first.outcome, UpsertOutcome::Created);

    // only the reserved stamp differs
    let again = spec.metadata(metadata(json!({"kind": "laws", "_seededAt": "2Z"})));
    let second = upsert_node(&store, again).unwrap();
    assert_eq!(second.outcome, UpsertOutcome::Unchanged);

    let stored = store.find_by_id("laws-node").unwrap().unwrap();
    assert_eq!(stored.metadata.unwrap()["_seededAt"], "2Z");
}

#[test]
fn upsert_rekeys_historical_id_and_moves_children() {
    let store = store();
    seed_root(&store);
    upsert_node(&store, category("old-laws", "LAWS", "reality-root")).unwrap();
    upsert_node(&store, category("old-laws-power", "POWER", "old-laws")).unwrap();
    upsert_node(&store, category("old-laws-biblical", "BIBLICAL", "old-laws")).unwrap();

    let result = upsert_node(&store, category("laws-node", "LAWS", "reality-root")).unwrap();
    assert_eq!(
        result.outcome,
        UpsertOutcome::Rekeyed {
            from: "old-laws".into()
        }
    );

    assert!(store.find_by_id("old-laws").unwrap().is_none());
    let children = store.children("laws-node").unwrap();
    let titles: Vec<&str> = children.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["BIBLICAL", "POWER"]);
    assert!(verify_tree(&store).unwrap().is_healthy());
}

#[test]
fn rename_onto_taken_id_is_a_conflict() {
    let store = store();
    seed_root(&store);
    upsert_node(&store, category("a", "A", "reality-root")).unwrap();
    upsert_node(&store, category("b", "B", "reality-root")).unwrap();

    let err = store.rename("a", "b").unwrap_err();
    assert_eq!(err.kind(), "unique_conflict");
    let err = store.rename("missing", "c").unwrap_err();
    assert_eq!(err.kind(), "not_found");
    // the failed rename left both nodes in place
    assert!(store.find_by_id("a").unwrap().is_some());
}

#[test]
fn second_root_is_rejected() {
    let store = store();
    seed_root(&store);
    let err = upsert_node(&store, NodeSpec::new("other-root", "OTHER", NodeType::Root)).unwrap_err();
    assert_eq!(err.kind(), "unique_conflict");
    assert_eq!(store.roots().unwrap().len(), 1);
}

#[test]
fn missing_parent_is_not_found() {
    let store = store();
    seed_root(&store);
    let err = upsert_node(&store, category("orphan", "ORPHAN", "nowhere")).unwrap_err();
    assert_eq!(err.kind(), "not_found");
    assert!(store.find_by_id("orphan").unwrap().is_none());
}

#[test]
fn self_parent_and_cycles_are_rejected() {
    let store = store();
    seed_root(&store);
    let err = upsert_node(&store, category("loop", "LOOP", "loop")).unwrap_err();
    assert_eq!(err.kind(), "validation");

    upsert_node(&store, category("a", "A", "reality-root")).unwrap();
    upsert_node(&store, category("b", "B", "a")).unwrap();
    let err = upsert_node(&store, category("a", "A", "b")).unwrap_err();
    assert_eq!(err.kind(), "validation");
    let a = store.find_by_id("a").unwrap().unwrap();
    assert_eq!(a.parent_id.as_deref(), Some("reality-root"));
}

#[test]
fn immutable_node_keeps_its_structure() {
    let store = store();
    seed_root(&store);
    upsert_node(
        &store,
        category("laws-node", "LAWS", "reality-root")
            .category(NodeCategory::Foundational)
            .immutable(true)
            .order(1),
    )
    .unwrap();
    upsert_node(&store, category("elsewhere", "ELSEWHERE", "reality-root")).unwrap();

    let result = upsert_node(
        &store,
        category("laws-node", "RULES", "elsewhere")
            .category(NodeCategory::Power)
            .order(3),
    )
    .unwrap();
    assert_eq!(result.outcome, UpsertOutcome::Updated);

    let stored = store.find_by_id("laws-node").unwrap().unwrap();
    assert_eq!(stored.title, "LAWS");
    assert_eq!(stored.parent_id.as_deref(), Some("reality-root"));
    assert_eq!(stored.category, Some(NodeCategory::Foundational));
    assert!(stored.immutable);
    assert_eq!(stored.order_index, 3);
}

#[test]
fn metadata_merge_keeps_fields_missing_from_partial_update() {
    let store = store();
    seed_root(&store);
    upsert_node(
        &store,
        category("n", "N", "reality-root").metadata(metadata(json!({
            "statement": "kept",
            "derivedFrom": ["x"],
            "_version": "1.0.0"
        }))),
    )
    .unwrap();

    upsert_node(
        &store,
        category("n", "N", "reality-root").metadata(metadata(json!({
            "statement": "",
            "extra": null,
            "fresh": 3,
            "_version": "2.0.0"
        }))),
    )
    .unwrap();

    let stored = store.find_by_id("n").unwrap().unwrap().metadata.unwrap();
    assert_eq!(stored["statement"], "kept");
    assert_eq!(stored["derivedFrom"], json!(["x"]));
    assert_eq!(stored["fresh"], 3);
    assert_eq!(stored["_version"], "2.0.0");
    assert!(!stored.contains_key("extra"));
}

#[test]
fn children_are_ordered_by_order_index_then_title() {
    let store = store();
    seed_root(&store);
    upsert_node(&store, category("c", "C", "reality-root").order(1)).unwrap();
    upsert_node(&store, category("b", "B", "reality-root").order(2)).unwrap();
    upsert_node(&store, category("a", "A", "reality-root").order(2)).unwrap();
    let ids: Vec<String> = store
        .children("reality-root")
        .unwrap()
        .into_iter()
        .map(|n| n.id)
        .collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[test]
fn verify_reports_depth_and_counts() {
    let store = store();
    seed_root(&store);
    upsert_node(&store, category("a", "A", "reality-root")).unwrap();
    upsert_node(&store, category("a-b", "B", "a")).unwrap();
    upsert_node(&store, NodeSpec::new("a-b-law", "L", NodeType::Law).parent("a-b")).unwrap();

    let report = verify_tree(&store).unwrap();
    assert!(report.is_healthy(), "{:?}", report.problems);
    assert_eq!(report.node_count, 4);
    assert_eq!(report.max_depth, 3);
    assert_eq!(report.root_id.as_deref(), Some("reality-root"));

    let counts = stats(&store).unwrap();
    assert_eq!(counts[&NodeType::Category], 2);
    assert_eq!(counts[&NodeType::Law], 1);
    assert_eq!(counts[&NodeType::Root], 1);
}

#[test]
fn fingerprint_ignores_reserved_keys_only() {
    let store = store();
    seed_root(&store);
    upsert_node(
        &store,
        category("a", "A", "reality-root").metadata(metadata(json!({"_seededAt": "1Z"}))),
    )
    .unwrap();
    let before = fingerprint(&store).unwrap();

    upsert_node(
        &store,
        category("a", "A", "reality-root").metadata(metadata(json!({"_seededAt": "9Z"}))),
    )
    .unwrap();
    assert_eq!(fingerprint(&store).unwrap(), before);

    upsert_node(&store, category("a", "A", "reality-root").description("changed")).unwrap();
    assert_ne!(fingerprint(&store).unwrap(), before);
}

#[test]
fn domain_records_come_back_sorted_and_replace_on_key() {
    let store = store();
    let rec = |domain: &str, n: i64, title: &str| DomainRecord {
        id: format!("{}-{}", domain, n),
        domain: domain.into(),
        law_number: n,
        title: title.into(),
        canonical_text: None,
        category: None,
        reference: None,
    };
    store.put_domain_record("power", &rec("MONEY", 2, "Two")).unwrap();
    store.put_domain_record("power", &rec("CAREER", 1, "One")).unwrap();
    store.put_domain_record("power", &rec("MONEY", 1, "First")).unwrap();
    store.put_domain_record("power", &rec("MONEY", 1, "First again")).unwrap();
    store.put_domain_record("biblical", &rec("WISDOM", 1, "W")).unwrap();

    let rows = store.domain_records("power").unwrap();
    let keys: Vec<(String, i64)> = rows.iter().map(|r| (r.domain.clone(), r.law_number)).collect();
    assert_eq!(
        keys,
        vec![
            ("CAREER".to_string(), 1),
            ("MONEY".to_string(), 1),
            ("MONEY".to_string(), 2)
        ]
    );
    assert_eq!(rows[1].title, "First again");
    assert_eq!(store.domain_records("biblical").unwrap().len(), 1);
}

#[test]
fn file_store_persists_across_connections_and_audits() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("nested").join("reality.db");
    let audit = dir.path().join("broker.events.jsonl");

    let store = SqliteNodeStore::open(&db_path).unwrap().with_audit_log(&audit);
    seed_root(&store);
    store.close().unwrap();

    let reopened = SqliteNodeStore::open(&db_path).unwrap();
    let root = reopened.find_by_id("reality-root").unwrap().unwrap();
    assert_eq!(root.title, "REALITY");
    assert!(root.immutable);
    reopened.close().unwrap();

    let lines = fs::read_to_string(&audit).unwrap();
    let events: Vec<BrokerEvent> = lines
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert!(!events.is_empty());
    assert!(events.iter().any(|e| e.op == "node.write" && e.status == "success"));
    assert!(events.iter().all(|e| e.actor == "reality-seed"));
}

#[test]
fn audit_log_failure_does_not_fail_the_write() {
    let dir = tempdir().unwrap();
    // a directory cannot be opened for append
    let store = SqliteNodeStore::open(&dir.path().join("reality.db"))
        .unwrap()
        .with_audit_log(dir.path());

    let upserted = upsert_node(
        &store,
        NodeSpec::new("reality-root", "REALITY", NodeType::Root).immutable(true),
    )
    .unwrap();
    assert_eq!(upserted.outcome, UpsertOutcome::Created);
    assert!(store.find_by_id("reality-root").unwrap().is_some());
    store.close().unwrap();
}
