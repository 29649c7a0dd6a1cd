//! Pareto recursive generator.
//!
//! Seeds at most five ranked children per parent and recurses with synthetic
//! examples until the depth budget runs out. For a fixed
//! `(parent, examples, max_depth)` the generated subtree is identical on every
//! run.

use crate::core::config::ParetoExampleConfig;
use crate::core::error::SeedError;
use crate::core::model::{NodeCategory, NodeSpec, NodeType, metadata};
use crate::core::slug::pareto_child_id;
use crate::core::store::NodeStore;
use crate::core::time;
use crate::core::upsert::{UpsertTally, upsert_counted};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Children seeded per generation call.
pub const PARETO_WIDTH: usize = 5;
pub const DEFAULT_MAX_DEPTH: u32 = 4;
/// Largest depth budget a generation call accepts.
pub const MAX_DEPTH_LIMIT: u32 = 4;
/// Levels up to and including this one are immutable once created.
pub const IMMUTABLE_THROUGH_LEVEL: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoExample {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<NodeCategory>,
}

impl ParetoExample {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            category: None,
        }
    }
}

impl From<&ParetoExampleConfig> for ParetoExample {
    fn from(cfg: &ParetoExampleConfig) -> Self {
        Self {
            title: cfg.title.clone(),
            description: cfg.description.clone(),
            category: cfg.category,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    /// Ids written, in creation order.
    pub node_ids: Vec<String>,
    pub deepest_level: Option<u32>,
    /// Set when the parent was the root and nothing was generated.
    pub refused: bool,
    pub tally: UpsertTally,
}

/// The five synthetic examples used below a generated node.
pub fn pareto_examples(
    parent_title: &str,
    level: u32,
    category: Option<NodeCategory>,
) -> Vec<ParetoExample> {
    (1..=PARETO_WIDTH)
        .map(|i| ParetoExample {
            title: format!("{}_EXAMPLE_{}", parent_title, i),
            description: Some(format!(
                "Pareto-selected example {} of {} at level {}. This represents one of the top 20% most impactful instances.",
                i, parent_title, level
            )),
            category,
        })
        .collect()
}

/// Seed `examples` under `parent_id` at `level`, recursing to `max_depth`.
///
/// Does nothing when `level >= max_depth` and refuses to attach under the
/// root. A missing parent is `NotFound`; a `max_depth` above
/// [`MAX_DEPTH_LIMIT`] is a `ValidationError` and writes nothing.
pub fn generate(
    store: &dyn NodeStore,
    parent_id: &str,
    level: u32,
    examples: &[ParetoExample],
    node_type: NodeType,
    max_depth: u32,
) -> Result<GenerationReport, SeedError> {
    if max_depth > MAX_DEPTH_LIMIT {
        return Err(SeedError::ValidationError(format!(
            "pareto max_depth {} exceeds the limit of {}",
            max_depth, MAX_DEPTH_LIMIT
        )));
    }
    let mut report = GenerationReport::default();
    let stamp = time::seed_stamp();
    generate_level(
        store,
        parent_id,
        level,
        examples,
        node_type,
        max_depth,
        &stamp,
        &mut report,
    )?;
    tracing::info!(
        parent = parent_id,
        nodes = report.node_ids.len(),
        refused = report.refused,
        "pareto generation finished"
    );
    Ok(report)
}

#[allow(clippy::too_many_arguments)]
fn generate_level(
    store: &dyn NodeStore,
    parent_id: &str,
    level: u32,
    examples: &[ParetoExample],
    node_type: NodeType,
    max_depth: u32,
    stamp: &str,
    report: &mut GenerationReport,
) -> Result<(), SeedError> {
    if level >= max_depth {
        return Ok(());
    }

    let parent = store
        .find_by_id(parent_id)?
        .ok_or_else(|| SeedError::NotFound(format!("pareto parent '{}'", parent_id)))?;
    if parent.parent_id.is_none() || parent.node_type == NodeType::Root {
        tracing::warn!(parent = parent_id, "refusing to generate directly under the root");
        report.refused = true;
        return Ok(());
    }

    for (i, example) in examples.iter().take(PARETO_WIDTH).enumerate() {
        let rank = i as i64 + 1;
        let mut spec = NodeSpec::new(
            pareto_child_id(parent_id, &example.title, level),
            &example.title,
            node_type,
        )
        .parent(parent_id)
        .maybe_category(example.category)
        .immutable(level <= IMMUTABLE_THROUGH_LEVEL)
        .order(rank)
        .metadata(metadata(json!({
            "level": level,
            "paretoRank": rank,
            "_seededAt": stamp,
        })));
        if let Some(description) = &example.description {
            spec = spec.description(description);
        }

        let child = upsert_counted(store, spec, &mut report.tally)?;
        report.node_ids.push(child.id.clone());
        report.deepest_level = report.deepest_level.max(Some(level));

        if level + 1 < max_depth {
            let grandchildren = pareto_examples(&example.title, level + 1, example.category);
            generate_level(
                store,
                &child.id,
                level + 1,
                &grandchildren,
                node_type,
                max_depth,
                stamp,
                report,
            )?;
        }
    }
    Ok(())
}
