//! Cross-domain linker.
//!
//! Grafts a flat record set under the LAWS branch as
//! `LAWS -> {SET} -> {DOMAIN} -> leaf`. Domains keep the order in which they
//! first appear in the input; leaves are ordered by law number.

use crate::core::error::SeedError;
use crate::core::model::{DomainRecord, NodeSpec, NodeType, metadata};
use crate::core::slug::{child_id, slugify};
use crate::core::store::{DomainRecordSource, NodeStore};
use crate::core::upsert::{UpsertTally, upsert_counted};
use crate::plugins::records::RecordSet;
use rustc_hash::FxHashMap;
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, Serialize)]
pub struct DomainSummary {
    pub domain: String,
    pub node_id: String,
    pub law_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkReport {
    pub set: RecordSet,
    pub category_id: String,
    pub domains: Vec<DomainSummary>,
    pub tally: UpsertTally,
}

impl LinkReport {
    pub fn leaf_count(&self) -> usize {
        self.domains.iter().map(|d| d.law_count).sum()
    }
}

/// Group records by domain, preserving first-occurrence order of domains.
pub fn group_by_domain(records: &[DomainRecord]) -> Vec<(&str, Vec<&DomainRecord>)> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut groups: Vec<(&str, Vec<&DomainRecord>)> = Vec::new();
    for record in records {
        let domain = record.domain.as_str();
        match index.get(domain) {
            Some(&i) => groups[i].1.push(record),
            None => {
                index.insert(domain, groups.len());
                groups.push((domain, vec![record]));
            }
        }
    }
    for (_, members) in &mut groups {
        members.sort_by_key(|r| r.law_number);
    }
    groups
}

pub fn category_node_id(laws_parent_id: &str, set: RecordSet) -> String {
    child_id(laws_parent_id, set.title())
}

/// Link `records` of `set` under `laws_parent_id`. The first failing upsert
/// aborts the call; everything written before it stays.
pub fn link(
    store: &dyn NodeStore,
    records: &[DomainRecord],
    set: RecordSet,
    laws_parent_id: &str,
) -> Result<LinkReport, SeedError> {
    check_records(set, records)?;

    let mut tally = UpsertTally::default();
    let category_id = category_node_id(laws_parent_id, set);
    upsert_counted(
        store,
        NodeSpec::new(&category_id, set.title(), NodeType::Category)
            .parent(laws_parent_id)
            .description(set.description())
            .category(set.category())
            .immutable(true)
            .order(set.order_index()),
        &mut tally,
    )?;

    let mut domains = Vec::new();
    for (position, (domain, members)) in group_by_domain(records).into_iter().enumerate() {
        let domain_id = child_id(&category_id, domain);
        upsert_counted(
            store,
            NodeSpec::new(&domain_id, domain, NodeType::Category)
                .parent(&category_id)
                .description(set.domain_description(domain))
                .category(set.category())
                .order(position as i64 + 1)
                .metadata(metadata(json!({
                    "domain": domain,
                    "lawCount": members.len(),
                }))),
            &mut tally,
        )?;

        for record in &members {
            upsert_counted(store, leaf_spec(set, &domain_id, record), &mut tally)?;
        }
        tracing::debug!(set = %set, domain, laws = members.len(), "linked domain");

        domains.push(DomainSummary {
            domain: domain.to_string(),
            node_id: domain_id,
            law_count: members.len(),
        });
    }

    let report = LinkReport {
        set,
        category_id,
        domains,
        tally,
    };
    tracing::info!(
        set = %set,
        domains = report.domains.len(),
        laws = report.leaf_count(),
        "linked record set"
    );
    Ok(report)
}

/// Reject input that would make two leaves share an id or a (title, parent)
/// pair. Runs before any write.
fn check_records(set: RecordSet, records: &[DomainRecord]) -> Result<(), SeedError> {
    if let Some(bad) = records.iter().find(|r| r.domain.trim().is_empty()) {
        return Err(SeedError::ValidationError(format!(
            "record '{}' has an empty domain",
            bad.id
        )));
    }
    let mut slugs: FxHashMap<String, &str> = FxHashMap::default();
    for (domain, members) in group_by_domain(records) {
        if let Some(first) = slugs.insert(slugify(domain), domain) {
            return Err(SeedError::ValidationError(format!(
                "domains '{}' and '{}' map to the same node id",
                first, domain
            )));
        }
        let mut numbers: FxHashMap<i64, &str> = FxHashMap::default();
        let mut titles: FxHashMap<String, &str> = FxHashMap::default();
        for record in members {
            if let Some(first) = numbers.insert(record.law_number, &record.id) {
                return Err(SeedError::ValidationError(format!(
                    "records '{}' and '{}' share law number {} in domain {}",
                    first, record.id, record.law_number, domain
                )));
            }
            let title = set.leaf_title(record);
            if let Some(first) = titles.insert(title.clone(), &record.id) {
                return Err(SeedError::ValidationError(format!(
                    "records '{}' and '{}' resolve to the same title '{}' in domain {}",
                    first, record.id, title, domain
                )));
            }
        }
    }
    Ok(())
}

fn leaf_spec(set: RecordSet, domain_id: &str, record: &DomainRecord) -> NodeSpec {
    let mut fields = metadata(json!({
        "lawNumber": record.law_number,
        "domain": record.domain,
        "sourceRecordId": record.id,
    }));
    if let Some(category) = &record.category {
        fields.insert("sourceCategory".into(), Value::String(category.clone()));
    }
    if let Some(reference) = &record.reference {
        fields.insert("reference".into(), Value::String(reference.clone()));
    }

    let mut spec = NodeSpec::new(
        format!("{}-law-{}", domain_id, record.law_number),
        set.leaf_title(record),
        NodeType::Law,
    )
    .parent(domain_id)
    .category(set.category())
    .order(record.law_number)
    .metadata(fields);
    if let Some(text) = record.canonical_text.as_deref().filter(|t| !t.is_empty()) {
        spec = spec.description(text);
    }
    spec
}

/// Read `set` from `source` and link it.
pub fn link_from_source(
    store: &dyn NodeStore,
    source: &dyn DomainRecordSource,
    set: RecordSet,
    laws_parent_id: &str,
) -> Result<LinkReport, SeedError> {
    let records = source.domain_records(set.as_str())?;
    link(store, &records, set, laws_parent_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(domain: &str, n: i64) -> DomainRecord {
        DomainRecord {
            id: format!("{}-{}", domain, n),
            domain: domain.into(),
            law_number: n,
            title: format!("T{}", n),
            canonical_text: None,
            category: None,
            reference: None,
        }
    }

    #[test]
    fn groups_in_first_occurrence_order() {
        let records = vec![rec("MONEY", 2), rec("CAREER", 1), rec("MONEY", 1)];
        let groups = group_by_domain(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "MONEY");
        assert_eq!(groups[1].0, "CAREER");
        let numbers: Vec<i64> = groups[0].1.iter().map(|r| r.law_number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn category_ids_hang_off_laws_parent() {
        assert_eq!(
            category_node_id("laws-node", RecordSet::Biblical),
            "laws-node-biblical"
        );
    }
}
