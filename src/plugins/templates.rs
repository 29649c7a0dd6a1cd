//! Template versioning for LAW, PRINCIPLE and FRAMEWORK metadata.
//!
//! Curated nodes carry `_version` and `_templateType`. Nodes written by an
//! older seeder are brought up to the current template in place, filling
//! missing template fields without touching the ones already recorded.

use crate::core::error::SeedError;
use crate::core::merge::{carries_content, merge_metadata};
use crate::core::model::{HierarchyNode, Metadata, NodeType};
use crate::core::store::NodeStore;
use crate::core::time;
use serde::Serialize;
use serde_json::{Value, json};
use std::cmp::Ordering;

pub const TEMPLATE_VERSION: &str = "2.0.0";
/// Assumed for nodes that predate version tracking.
pub const UNVERSIONED: &str = "1.0.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TemplateKind {
    Law,
    Principle,
    Framework,
}

enum FieldDefault {
    EmptyList,
    EmptyText,
    Description,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::Law,
        TemplateKind::Principle,
        TemplateKind::Framework,
    ];

    pub fn node_type(&self) -> NodeType {
        match self {
            TemplateKind::Law => NodeType::Law,
            TemplateKind::Principle => NodeType::Principle,
            TemplateKind::Framework => NodeType::Framework,
        }
    }

    pub fn template_type(&self) -> &'static str {
        match self {
            TemplateKind::Law => "law",
            TemplateKind::Principle => "principle",
            TemplateKind::Framework => "framework",
        }
    }

    fn fields(&self) -> &'static [(&'static str, FieldDefault)] {
        use FieldDefault::*;
        match self {
            TemplateKind::Law => &[
                ("derivedFrom", EmptyList),
                ("statement", Description),
                ("recursiveBehavior", EmptyText),
                ("violationOutcome", EmptyText),
                ("whyThisLawPersists", EmptyText),
            ],
            TemplateKind::Principle => &[
                ("alignedWith", EmptyList),
                ("principle", Description),
                ("whyItWorks", EmptyText),
                ("violationPattern", EmptyText),
                ("predictableResult", EmptyText),
            ],
            TemplateKind::Framework => &[
                ("basedOn", EmptyList),
                ("purpose", Description),
                ("structure", EmptyText),
                ("whenToUse", EmptyText),
                ("whenNotToUse", EmptyText),
            ],
        }
    }
}

/// Reserved bookkeeping keys written alongside curated template content.
pub fn template_stamp(kind: TemplateKind, stamp: &str) -> Metadata {
    let mut m = Metadata::new();
    m.insert("_version".into(), json!(TEMPLATE_VERSION));
    m.insert("_templateType".into(), json!(kind.template_type()));
    m.insert("_lastSynced".into(), json!(stamp));
    m
}

/// Numeric dotted-version comparison; non-numeric parts are ignored.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let parse_version =
        |v: &str| -> Vec<u32> { v.split('.').filter_map(|s| s.parse::<u32>().ok()).collect() };

    let a_parts = parse_version(a);
    let b_parts = parse_version(b);

    for (a_part, b_part) in a_parts.iter().zip(b_parts.iter()) {
        match a_part.cmp(b_part) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    a_parts.len().cmp(&b_parts.len())
}

fn node_version(node: &HierarchyNode) -> Option<&str> {
    node.metadata
        .as_ref()
        .and_then(|m| m.get("_version"))
        .and_then(Value::as_str)
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VersionMismatch {
    pub node_id: String,
    pub title: String,
    pub node_type: NodeType,
    pub current_version: Option<String>,
    pub expected_version: String,
}

/// Template nodes whose `_version` is not the current template version.
pub fn check_versions(store: &dyn NodeStore) -> Result<Vec<VersionMismatch>, SeedError> {
    let mut mismatches = Vec::new();
    for kind in TemplateKind::ALL {
        for node in store.nodes_by_type(kind.node_type())? {
            let current = node_version(&node);
            if current != Some(TEMPLATE_VERSION) {
                mismatches.push(VersionMismatch {
                    current_version: current.map(String::from),
                    node_id: node.id,
                    title: node.title,
                    node_type: kind.node_type(),
                    expected_version: TEMPLATE_VERSION.to_string(),
                });
            }
        }
    }
    Ok(mismatches)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MigrationAction {
    Updated,
    Skipped,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct MigrationDetail {
    pub node_id: String,
    pub title: String,
    pub action: MigrationAction,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MigrationReport {
    pub dry_run: bool,
    pub updated: usize,
    pub skipped: usize,
    pub errors: usize,
    pub details: Vec<MigrationDetail>,
}

impl MigrationReport {
    fn push(&mut self, node: &HierarchyNode, action: MigrationAction, reason: Option<String>) {
        match action {
            MigrationAction::Updated => self.updated += 1,
            MigrationAction::Skipped => self.skipped += 1,
            MigrationAction::Error => self.errors += 1,
        }
        self.details.push(MigrationDetail {
            node_id: node.id.clone(),
            title: node.title.clone(),
            action,
            reason,
        });
    }
}

/// Metadata for `node` upgraded to the current template.
pub fn upgraded_metadata(node: &HierarchyNode, kind: TemplateKind, stamp: &str) -> Metadata {
    let existing = node.metadata.clone().unwrap_or_default();
    let mut fields = Metadata::new();
    for (key, default) in kind.fields() {
        let recorded = existing.get(*key).filter(|v| carries_content(v)).or_else(|| {
            // principles used to record their sources under the law key
            (kind == TemplateKind::Principle && *key == "alignedWith")
                .then(|| existing.get("derivedFrom"))
                .flatten()
                .filter(|v| carries_content(v))
        });
        let value = match (recorded, default) {
            (Some(v), _) => v.clone(),
            (None, FieldDefault::EmptyList) => json!([]),
            (None, FieldDefault::EmptyText) => json!(""),
            (None, FieldDefault::Description) => json!(node.description.clone().unwrap_or_default()),
        };
        fields.insert((*key).to_string(), value);
    }
    fields.insert("_version".into(), json!(TEMPLATE_VERSION));
    fields.insert("_templateType".into(), json!(kind.template_type()));
    fields.insert("_lastMigrated".into(), json!(stamp));
    merge_metadata(Some(&existing), &fields)
}

/// Upgrade every outdated template node. Newer versions are never downgraded.
/// A failed write is recorded and the pass continues.
pub fn migrate_templates(store: &dyn NodeStore, dry_run: bool) -> Result<MigrationReport, SeedError> {
    let stamp = time::seed_stamp();
    let mut report = MigrationReport {
        dry_run,
        ..MigrationReport::default()
    };

    for kind in TemplateKind::ALL {
        for node in store.nodes_by_type(kind.node_type())? {
            let current = node_version(&node).unwrap_or(UNVERSIONED);
            match compare_versions(current, TEMPLATE_VERSION) {
                Ordering::Equal => {
                    report.push(&node, MigrationAction::Skipped, None);
                    continue;
                }
                Ordering::Greater => {
                    report.push(
                        &node,
                        MigrationAction::Skipped,
                        Some(format!("version {} is newer than {}", current, TEMPLATE_VERSION)),
                    );
                    continue;
                }
                Ordering::Less => {}
            }

            let mut upgraded = node.clone();
            upgraded.metadata = Some(upgraded_metadata(&node, kind, &stamp));
            if dry_run {
                report.push(&node, MigrationAction::Updated, Some(format!("from {}", current)));
                continue;
            }
            match store.write(&upgraded) {
                Ok(()) => {
                    report.push(&node, MigrationAction::Updated, Some(format!("from {}", current)))
                }
                Err(e) => {
                    tracing::error!(id = %node.id, error = %e, "template migration failed");
                    report.push(&node, MigrationAction::Error, Some(e.to_string()));
                }
            }
        }
    }

    tracing::info!(
        updated = report.updated,
        skipped = report.skipped,
        errors = report.errors,
        dry_run,
        "template migration finished"
    );
    Ok(report)
}
