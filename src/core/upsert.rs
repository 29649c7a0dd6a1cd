//! Find-or-create-or-migrate for a single hierarchy node.

use crate::core::error::SeedError;
use crate::core::merge::{merge_metadata, without_reserved};
use crate::core::model::{HierarchyNode, Metadata, NodeSpec};
use crate::core::store::NodeStore;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
    /// Only reserved metadata keys (if anything) changed.
    Unchanged,
    /// Found under a historical id and re-keyed before the write.
    Rekeyed { from: String },
}

#[derive(Debug, Clone)]
pub struct Upserted {
    pub node: HierarchyNode,
    pub outcome: UpsertOutcome,
}

/// Per-outcome counts aggregated by a seeding phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UpsertTally {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub rekeyed: usize,
}

impl UpsertTally {
    pub fn record(&mut self, outcome: &UpsertOutcome) {
        match outcome {
            UpsertOutcome::Created => self.created += 1,
            UpsertOutcome::Updated => self.updated += 1,
            UpsertOutcome::Unchanged => self.unchanged += 1,
            UpsertOutcome::Rekeyed { .. } => self.rekeyed += 1,
        }
    }

    pub fn absorb(&mut self, other: UpsertTally) {
        self.created += other.created;
        self.updated += other.updated;
        self.unchanged += other.unchanged;
        self.rekeyed += other.rekeyed;
    }
}

impl std::fmt::Display for UpsertTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} created, {} updated, {} unchanged, {} re-keyed",
            self.created, self.updated, self.unchanged, self.rekeyed
        )
    }
}

/// Upsert and count the outcome.
pub fn upsert_counted(
    store: &dyn NodeStore,
    spec: NodeSpec,
    tally: &mut UpsertTally,
) -> Result<HierarchyNode, SeedError> {
    let upserted = upsert_node(store, spec)?;
    tally.record(&upserted.outcome);
    Ok(upserted.node)
}

/// Persist `spec` at key `spec.id`.
///
/// Lookup is by id first, then by (title, parent). A hit on the secondary key
/// is re-keyed to `spec.id` (children follow) before metadata is merged, so the
/// merge source is always the prior state. Nothing is retried.
pub fn upsert_node(store: &dyn NodeStore, spec: NodeSpec) -> Result<Upserted, SeedError> {
    check_placement(store, &spec)?;

    let mut rekeyed_from = None;
    let mut existing = store.find_by_id(&spec.id)?;
    if existing.is_none() {
        if let Some(old) = store.find_by_title_parent(&spec.title, spec.parent_id.as_deref())? {
            let moved = store.rename(&old.id, &spec.id)?;
            debug!(from = %old.id, to = %spec.id, children = moved, "re-keyed node");
            rekeyed_from = Some(old.id);
            existing = store.find_by_id(&spec.id)?;
        }
    }

    let node = match &existing {
        None => spec.into_node(),
        Some(current) => {
            let node = reconcile(current, spec);
            if node.parent_id != current.parent_id {
                check_no_cycle(store, &node)?;
            }
            node
        }
    };

    store.write(&node)?;

    let outcome = match (rekeyed_from, &existing) {
        (Some(from), _) => UpsertOutcome::Rekeyed { from },
        (None, None) => UpsertOutcome::Created,
        (None, Some(current)) if same_content(current, &node) => UpsertOutcome::Unchanged,
        (None, Some(_)) => UpsertOutcome::Updated,
    };
    debug!(id = %node.id, outcome = ?outcome, "upsert");
    Ok(Upserted { node, outcome })
}

/// Merge a new definition into the stored node.
///
/// Immutable nodes keep title, parent, type and category; description,
/// order and metadata always follow the new definition.
pub fn reconcile(current: &HierarchyNode, spec: NodeSpec) -> HierarchyNode {
    let metadata = merge_metadata(current.metadata.as_ref(), &spec.metadata);
    let description = spec.description.or_else(|| current.description.clone());

    if current.immutable {
        let category_changed = spec.category.is_some() && spec.category != current.category;
        if spec.title != current.title
            || spec.parent_id != current.parent_id
            || spec.node_type != current.node_type
            || category_changed
        {
            warn!(id = %current.id, "immutable node: structural change ignored");
        }
        return HierarchyNode {
            id: spec.id,
            title: current.title.clone(),
            description,
            parent_id: current.parent_id.clone(),
            node_type: current.node_type,
            category: current.category,
            immutable: true,
            order_index: spec.order_index,
            metadata: Some(metadata),
        };
    }

    HierarchyNode {
        id: spec.id,
        title: spec.title,
        description,
        parent_id: spec.parent_id,
        node_type: spec.node_type,
        category: spec.category.or(current.category),
        immutable: spec.immutable,
        order_index: spec.order_index,
        metadata: Some(metadata),
    }
}

fn check_placement(store: &dyn NodeStore, spec: &NodeSpec) -> Result<(), SeedError> {
    match spec.parent_id.as_deref() {
        Some(parent) if parent == spec.id => Err(SeedError::ValidationError(format!(
            "node '{}' cannot be its own parent",
            spec.id
        ))),
        Some(parent) => {
            if store.find_by_id(parent)?.is_none() {
                return Err(SeedError::NotFound(format!(
                    "parent '{}' of node '{}'",
                    parent, spec.id
                )));
            }
            Ok(())
        }
        None => {
            let roots = store.roots()?;
            if let Some(other) = roots
                .iter()
                .find(|r| r.id != spec.id && r.title != spec.title)
            {
                return Err(SeedError::UniqueConstraintConflict(format!(
                    "root already exists as '{}'; refusing second root '{}'",
                    other.id, spec.id
                )));
            }
            Ok(())
        }
    }
}

/// Walk up from the new parent; reaching the node itself means a cycle.
fn check_no_cycle(store: &dyn NodeStore, node: &HierarchyNode) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    let mut cursor = node.parent_id.clone();
    while let Some(id) = cursor {
        if id == node.id {
            return Err(SeedError::ValidationError(format!(
                "moving '{}' under '{}' would create a cycle",
                node.id,
                node.parent_id.as_deref().unwrap_or_default()
            )));
        }
        if !seen.insert(id.clone()) {
            break;
        }
        cursor = store.find_by_id(&id)?.and_then(|n| n.parent_id);
    }
    Ok(())
}

fn same_content(a: &HierarchyNode, b: &HierarchyNode) -> bool {
    let strip = |m: &Option<Metadata>| m.as_ref().map(without_reserved).unwrap_or_default();
    a.title == b.title
        && a.description == b.description
        && a.parent_id == b.parent_id
        && a.node_type == b.node_type
        && a.category == b.category
        && a.immutable == b.immutable
        && a.order_index == b.order_index
        && strip(&a.metadata) == strip(&b.metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{NodeCategory, NodeType, metadata};
    use serde_json::json;

    fn stored(immutable: bool) -> HierarchyNode {
        NodeSpec::new("laws-node", "LAWS", NodeType::Category)
            .parent("constraints-of-reality")
            .description("old")
            .category(NodeCategory::Foundational)
            .immutable(immutable)
            .order(1)
            .metadata(metadata(json!({"a": 1, "_seededAt": "1Z"})))
            .into_node()
    }

    #[test]
    fn immutable_keeps_structure_but_takes_order_and_metadata() {
        let spec = NodeSpec::new("laws-node", "LAWS_RENAMED", NodeType::Law)
            .parent("elsewhere")
            .category(NodeCategory::Power)
            .order(7)
            .metadata(metadata(json!({"b": 2})));
        let node = reconcile(&stored(true), spec);
        assert_eq!(node.title, "LAWS");
        assert_eq!(node.parent_id.as_deref(), Some("constraints-of-reality"));
        assert_eq!(node.node_type, NodeType::Category);
        assert_eq!(node.category, Some(NodeCategory::Foundational));
        assert!(node.immutable);
        assert_eq!(node.order_index, 7);
        assert_eq!(node.description.as_deref(), Some("old"));
        assert_eq!(
            node.metadata,
            Some(metadata(json!({"a": 1, "b": 2, "_seededAt": "1Z"})))
        );
    }

    #[test]
    fn mutable_takes_new_structure() {
        let spec = NodeSpec::new("laws-node", "LAWS_RENAMED", NodeType::Category)
            .parent("elsewhere")
            .description("new");
        let node = reconcile(&stored(false), spec);
        assert_eq!(node.title, "LAWS_RENAMED");
        assert_eq!(node.parent_id.as_deref(), Some("elsewhere"));
        assert_eq!(node.description.as_deref(), Some("new"));
        // absent category keeps the stored one
        assert_eq!(node.category, Some(NodeCategory::Foundational));
    }

    #[test]
    fn reserved_only_difference_is_same_content() {
        let a = stored(true);
        let mut b = a.clone();
        b.metadata = Some(metadata(json!({"a": 1, "_seededAt": "2Z"})));
        assert!(same_content(&a, &b));
        b.order_index = 2;
        assert!(!same_content(&a, &b));
    }
}
