//! Whole-tree checks and summaries.

use crate::core::error::SeedError;
use crate::core::merge::without_reserved;
use crate::core::model::{HierarchyNode, NodeType};
use crate::core::store::NodeStore;
use rustc_hash::FxHashMap;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TreeReport {
    pub node_count: usize,
    pub root_id: Option<String>,
    pub max_depth: usize,
    pub problems: Vec<String>,
}

impl TreeReport {
    pub fn is_healthy(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Check that there is exactly one root, that every parent exists, and that
/// every node reaches the root without a cycle. Depth of the root is 0.
pub fn verify_tree(store: &dyn NodeStore) -> Result<TreeReport, SeedError> {
    let nodes = store.all_nodes()?;
    let by_id: FxHashMap<&str, &HierarchyNode> =
        nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    let mut problems = Vec::new();
    let roots: Vec<&HierarchyNode> = nodes.iter().filter(|n| n.parent_id.is_none()).collect();
    match roots.len() {
        0 if !nodes.is_empty() => problems.push("no root node".to_string()),
        0 | 1 => {}
        n => problems.push(format!(
            "{} root nodes: {}",
            n,
            roots.iter().map(|r| r.id.as_str()).collect::<Vec<_>>().join(", ")
        )),
    }
    let root_id = roots.first().map(|r| r.id.clone());

    let mut depths: FxHashMap<&str, usize> = FxHashMap::default();
    for node in &nodes {
        let mut chain: Vec<&str> = vec![node.id.as_str()];
        let mut cursor = node;
        let depth = loop {
            if let Some(d) = depths.get(cursor.id.as_str()) {
                break Some(*d + chain.len() - 1);
            }
            let Some(parent_id) = cursor.parent_id.as_deref() else {
                break Some(chain.len() - 1);
            };
            let Some(&parent) = by_id.get(parent_id) else {
                problems.push(format!(
                    "node '{}' has dangling parent '{}'",
                    cursor.id, parent_id
                ));
                break None;
            };
            if chain.contains(&parent_id) {
                problems.push(format!("cycle through node '{}'", parent_id));
                break None;
            }
            chain.push(parent_id);
            cursor = parent;
        };
        if let Some(depth) = depth {
            for (i, id) in chain.iter().enumerate() {
                depths.entry(*id).or_insert(depth - i);
            }
        }
    }

    problems.sort();
    problems.dedup();
    Ok(TreeReport {
        node_count: nodes.len(),
        root_id,
        max_depth: depths.values().copied().max().unwrap_or(0),
        problems,
    })
}

/// Node counts keyed by node type name, in type order.
pub fn stats(store: &dyn NodeStore) -> Result<BTreeMap<NodeType, usize>, SeedError> {
    let mut counts = BTreeMap::new();
    for node in store.all_nodes()? {
        *counts.entry(node.node_type).or_insert(0) += 1;
    }
    Ok(counts)
}

/// SHA-256 over every row ordered by id, with reserved metadata keys removed.
///
/// Two runs that differ only in seed timestamps produce the same value.
pub fn fingerprint(store: &dyn NodeStore) -> Result<String, SeedError> {
    let mut hasher = Sha256::new();
    for mut node in store.all_nodes()? {
        node.metadata = node.metadata.as_ref().map(without_reserved);
        hasher.update(serde_json::to_vec(&node)?);
        hasher.update(b"\n");
    }
    Ok(format!("{:x}", hasher.finalize()))
}
