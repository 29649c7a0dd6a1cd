use reality_seed::core::model::{DomainRecord, NodeCategory, NodeSpec, NodeType};
use reality_seed::core::store::{DomainRecordSource, NodeStore, SqliteNodeStore};
use reality_seed::core::upsert::upsert_node;
use reality_seed::plugins::linker::{link, link_from_source};
use reality_seed::plugins::records::{RecordSet, import_records};
use std::fs;
use tempfile::tempdir;

fn store_with_laws(store: &SqliteNodeStore) {
    upsert_node(
        store,
        NodeSpec::new("reality-root", "REALITY", NodeType::Root).immutable(true),
    )
    .unwrap();
    upsert_node(
        store,
        NodeSpec::new("laws-node", "LAWS", NodeType::Category)
            .parent("reality-root")
            .immutable(true),
    )
    .unwrap();
}

fn power(domain: &str, n: i64, title: &str) -> DomainRecord {
    DomainRecord {
        id: format!("pl-{}-{}", domain.to_lowercase(), n),
        domain: domain.into(),
        law_number: n,
        title: title.into(),
        canonical_text: Some(format!("Canonical text of {}", title)),
        category: Some("STRATEGY".into()),
        reference: None,
    }
}

#[test]
fn groups_records_into_domains_and_leaves() {
    let store = SqliteNodeStore::open_in_memory().unwrap();
    store_with_laws(&store);
    let records = vec![
        power("MONEY", 2, "Conceal Your Intentions"),
        power("CAREER", 1, "Never Outshine the Master"),
        power("MONEY", 1, "Guard Your Reputation"),
    ];

    let report = link(&store, &records, RecordSet::Power, "laws-node").unwrap();
    assert_eq!(report.category_id, "laws-node-power");
    assert_eq!(report.domains.len(), 2);
    assert_eq!(report.leaf_count(), 3);
    assert_eq!(report.tally.created, 1 + 2 + 3);

    let category = store.find_by_id("laws-node-power").unwrap().unwrap();
    assert_eq!(category.title, "POWER");
    assert_eq!(category.order_index, 100);
    assert!(category.immutable);

    let domains = store.children("laws-node-power").unwrap();
    let titles: Vec<&str> = domains.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["MONEY", "CAREER"]);
    assert_eq!(domains[0].metadata.as_ref().unwrap()["lawCount"], 2);

    let leaves = store.children("laws-node-power-money").unwrap();
    let numbers: Vec<i64> = leaves.iter().map(|l| l.order_index).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert_eq!(leaves[0].id, "laws-node-power-money-law-1");
    assert_eq!(leaves[0].title, "Law 1: Guard Your Reputation");
    assert_eq!(leaves[0].node_type, NodeType::Law);
    assert_eq!(leaves[0].category, Some(NodeCategory::Power));
    assert_eq!(
        leaves[0].description.as_deref(),
        Some("Canonical text of Guard Your Reputation")
    );
    let m = leaves[0].metadata.as_ref().unwrap();
    assert_eq!(m["sourceRecordId"], "pl-money-1");
    assert_eq!(m["sourceCategory"], "STRATEGY");
}

#[test]
fn relinking_is_idempotent() {
    let store = SqliteNodeStore::open_in_memory().unwrap();
    store_with_laws(&store);
    let records = vec![power("MONEY", 1, "A"), power("MONEY", 2, "B")];
    link(&store, &records, RecordSet::Power, "laws-node").unwrap();
    let again = link(&store, &records, RecordSet::Power, "laws-node").unwrap();
    assert_eq!(again.tally.created, 0);
    assert_eq!(again.tally.updated, 0);
    assert_eq!(again.tally.unchanged, 4);
}

#[test]
fn empty_domain_is_rejected_before_any_write() {
    let store = SqliteNodeStore::open_in_memory().unwrap();
    store_with_laws(&store);
    let records = vec![power("MONEY", 1, "A"), power(" ", 2, "B")];
    let err = link(&store, &records, RecordSet::Power, "laws-node").unwrap_err();
    assert_eq!(err.kind(), "validation");
    assert!(store.find_by_id("laws-node-power").unwrap().is_none());
}

#[test]
fn colliding_leaf_titles_are_rejected_before_any_write() {
    let store = SqliteNodeStore::open_in_memory().unwrap();
    store_with_laws(&store);
    let give = |n: i64| DomainRecord {
        id: format!("bl-money-{}", n),
        domain: "MONEY".into(),
        law_number: n,
        title: "Give Generously".into(),
        canonical_text: None,
        category: None,
        reference: None,
    };

    let err = link(&store, &[give(1), give(2)], RecordSet::Biblical, "laws-node").unwrap_err();
    assert_eq!(err.kind(), "validation");
    assert!(err.to_string().contains("Give Generously"));
    assert!(store.find_by_id("laws-node-biblical").unwrap().is_none());

    // distinct references keep the titles apart
    let mut first = give(1);
    first.reference = Some("Proverbs 11:25".into());
    let mut second = give(2);
    second.reference = Some("Luke 6:38".into());
    let report = link(&store, &[first, second], RecordSet::Biblical, "laws-node").unwrap();
    assert_eq!(store.children("laws-node-biblical-money").unwrap().len(), 2);
    assert_eq!(report.tally.rekeyed, 0);
}

#[test]
fn repeated_law_number_in_a_domain_is_rejected() {
    let store = SqliteNodeStore::open_in_memory().unwrap();
    store_with_laws(&store);
    let records = vec![power("MONEY", 1, "A"), power("MONEY", 1, "B")];
    let err = link(&store, &records, RecordSet::Power, "laws-node").unwrap_err();
    assert_eq!(err.kind(), "validation");
    assert!(store.find_by_id("laws-node-power").unwrap().is_none());
}

#[test]
fn domains_differing_only_in_case_are_rejected() {
    let store = SqliteNodeStore::open_in_memory().unwrap();
    store_with_laws(&store);
    let records = vec![power("MONEY", 1, "A"), power("Money", 2, "B")];
    let err = link(&store, &records, RecordSet::Power, "laws-node").unwrap_err();
    assert_eq!(err.kind(), "validation");
}

#[test]
fn missing_laws_parent_is_not_found() {
    let store = SqliteNodeStore::open_in_memory().unwrap();
    let err = link(&store, &[power("MONEY", 1, "A")], RecordSet::Power, "laws-node").unwrap_err();
    assert_eq!(err.kind(), "not_found");
}

#[test]
fn imports_biblical_records_from_file_and_links_them() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("biblical.json");
    fs::write(
        &file,
        r#"[
            {"id": "bl-1", "domain": "WISDOM", "lawNumber": 1, "title": "Fear of the Lord", "reference": "Proverbs 9:10"},
            {"id": "bl-2", "domain": "WISDOM", "lawNumber": 2, "title": "Guard Your Heart", "reference": "Proverbs 4:23"},
            {"id": "bl-3", "domain": "WORK", "lawNumber": 1, "title": "Diligence"}
        ]"#,
    )
    .unwrap();

    let store = SqliteNodeStore::open(&dir.path().join("reality.db")).unwrap();
    store_with_laws(&store);
    assert_eq!(import_records(&store, RecordSet::Biblical, &file).unwrap(), 3);
    assert_eq!(store.domain_records("biblical").unwrap().len(), 3);

    let report = link_from_source(&store, &store, RecordSet::Biblical, "laws-node").unwrap();
    assert_eq!(report.category_id, "laws-node-biblical");
    assert_eq!(report.leaf_count(), 3);

    let leaf = store
        .find_by_id("laws-node-biblical-wisdom-law-1")
        .unwrap()
        .unwrap();
    assert_eq!(leaf.title, "Fear of the Lord (Proverbs 9:10)");
    assert_eq!(leaf.metadata.unwrap()["reference"], "Proverbs 9:10");
    let work = store
        .find_by_id("laws-node-biblical-work-law-1")
        .unwrap()
        .unwrap();
    assert_eq!(work.title, "Diligence");
    assert_eq!(
        store.find_by_id("laws-node-biblical").unwrap().unwrap().order_index,
        200
    );
    store.close().unwrap();
}
