//! Curated backbone of the Reality Hierarchy.
//!
//! Builds the single REALITY root, its six foundations and every hand-authored
//! branch below them. Each node goes through `upsert_node`, so a second run
//! over the same store only refreshes reserved bookkeeping keys.

use crate::core::error::SeedError;
use crate::core::model::{HierarchyNode, Metadata, NodeCategory, NodeSpec, NodeType, metadata};
use crate::core::slug::child_id;
use crate::core::store::NodeStore;
use crate::core::time;
use crate::core::upsert::{UpsertTally, upsert_counted};
use crate::plugins::curated_data::*;
use crate::plugins::templates::{TemplateKind, template_stamp};
use serde_json::{Value, json};

pub const REALITY_ID: &str = "reality-root";
pub const CONSTRAINTS_ID: &str = "constraints-of-reality";
pub const AGENTS_ID: &str = "agents-node";
pub const ENVIRONMENTS_ID: &str = "environments-node";
pub const RESOURCES_ID: &str = "resources-node";
pub const VALUE_ID: &str = "value-root";
pub const SYSTEMS_ID: &str = "systems-node";

pub const LAWS_ID: &str = "laws-node";
pub const PRINCIPLES_ID: &str = "principles-node";
pub const FRAMEWORKS_ID: &str = "frameworks-node";
pub const DERIVED_CONDITIONS_ID: &str = "constraints-of-reality-derived-conditions";
pub const ENGINES_ID: &str = "engines-node";
pub const FINANCE_ID: &str = "finance-system";

/// How deep below its anchor a curated subtree stays immutable.
#[derive(Debug, Clone, Copy)]
enum Lock {
    /// Every level.
    All,
    /// Only the first level below the anchor.
    FirstLevel,
}

impl Lock {
    fn at(self, depth: u32) -> bool {
        match self {
            Lock::All => true,
            Lock::FirstLevel => depth == 0,
        }
    }
}

struct Builder<'a> {
    store: &'a dyn NodeStore,
    stamp: String,
    tally: UpsertTally,
}

impl<'a> Builder<'a> {
    fn put(&mut self, spec: NodeSpec) -> Result<HierarchyNode, SeedError> {
        upsert_counted(self.store, spec, &mut self.tally)
    }

    /// Metadata with the reserved seed stamp added.
    fn stamped(&self, mut fields: Metadata) -> Metadata {
        fields.insert("_seededAt".into(), json!(self.stamp));
        fields
    }

    fn foundation(
        &mut self,
        id: &str,
        title: &str,
        description: &str,
        order: i64,
        extra: Value,
    ) -> Result<(), SeedError> {
        let fields = self.stamped(metadata(extra));
        self.put(
            NodeSpec::new(id, title, NodeType::Foundation)
                .parent(REALITY_ID)
                .description(description)
                .category(NodeCategory::Foundational)
                .immutable(true)
                .order(order)
                .metadata(fields),
        )?;
        Ok(())
    }

    fn seed_root_and_foundations(&mut self) -> Result<(), SeedError> {
        let fields = self.stamped(metadata(json!({"isRoot": true})));
        self.put(
            NodeSpec::new(REALITY_ID, "REALITY", NodeType::Root)
                .description("The root of all existence. Everything flows from reality.")
                .category(NodeCategory::Foundational)
                .immutable(true)
                .order(0)
                .metadata(fields),
        )?;

        self.foundation(
            CONSTRAINTS_ID,
            "CONSTRAINTS_OF_REALITY",
            "The fundamental constraints that govern all of reality: laws, principles, and frameworks that cannot be broken.",
            1,
            json!({}),
        )?;
        self.foundation(
            AGENTS_ID,
            "AGENTS",
            "Entities that act within reality: humans, collectives, artificial systems, and hybrids.",
            2,
            json!({}),
        )?;
        self.foundation(
            ENVIRONMENTS_ID,
            "ENVIRONMENTS",
            "The contexts in which agents act: physical, economic, digital, social, and biological.",
            3,
            json!({}),
        )?;
        self.foundation(
            RESOURCES_ID,
            "RESOURCES",
            "The inputs agents convert into outcomes: time, energy, capital, and the engines that generate them.",
            4,
            json!({}),
        )?;
        self.foundation(
            VALUE_ID,
            "VALUE",
            "What agents pursue and exchange. The root invariant that every system is measured against.",
            5,
            json!({"isRootInvariant": true, "isSystem": false}),
        )?;
        self.foundation(
            SYSTEMS_ID,
            "SYSTEMS",
            "Practical life systems organised by tier, from survival to expression.",
            6,
            json!({}),
        )?;
        Ok(())
    }

    fn constraint_category(
        &mut self,
        id: &str,
        title: &str,
        description: &str,
        order: i64,
    ) -> Result<(), SeedError> {
        let fields = self.stamped(Metadata::new());
        self.put(
            NodeSpec::new(id, title, NodeType::Category)
                .parent(CONSTRAINTS_ID)
                .description(description)
                .category(NodeCategory::Foundational)
                .immutable(true)
                .order(order)
                .metadata(fields),
        )?;
        Ok(())
    }

    fn seed_constraints(&mut self) -> Result<(), SeedError> {
        self.constraint_category(
            LAWS_ID,
            "LAWS",
            "Immutable laws that govern reality. These are fundamental truths that cannot be broken.",
            1,
        )?;
        self.constraint_category(
            PRINCIPLES_ID,
            "PRINCIPLES",
            "Strategic and systemic principles that guide effective action within the constraints of reality.",
            2,
        )?;
        self.constraint_category(
            FRAMEWORKS_ID,
            "FRAMEWORKS",
            "Structured approaches that turn laws and principles into repeatable decisions.",
            3,
        )?;
        self.constraint_category(
            DERIVED_CONDITIONS_ID,
            "DERIVED_CONDITIONS",
            "Conditions that follow from the constraints of reality: scarcity, trade-offs, opportunity cost, irreversibility, and degrees of freedom.",
            4,
        )?;

        self.seed_laws()?;
        self.seed_principles()?;
        self.seed_frameworks()?;
        self.seed_entries(
            DERIVED_CONDITIONS_ID,
            DERIVED_CONDITIONS,
            NodeType::Category,
            NodeCategory::Foundational,
            Lock::All,
            &Metadata::new(),
            0,
        )?;
        Ok(())
    }

    fn seed_laws(&mut self) -> Result<(), SeedError> {
        let fundamental = NodeCategory::Fundamental;
        for (i, law) in FUNDAMENTAL_LAWS.iter().enumerate() {
            let mut fields = template_stamp(TemplateKind::Law, &self.stamp);
            fields.extend(metadata(json!({
                "derivedFrom": law.derived_from,
                "statement": law.statement,
                "recursiveBehavior": law.recursive_behavior,
                "violationOutcome": law.violation_outcome,
                "whyThisLawPersists": law.why_this_law_persists,
            })));
            let id = child_id(&child_id(LAWS_ID, fundamental.as_str()), law.title);
            self.put(
                NodeSpec::new(id, law.title, NodeType::Law)
                    .parent(LAWS_ID)
                    .description(law.description)
                    .category(fundamental)
                    .immutable(true)
                    .order(i as i64 + 1)
                    .metadata(fields),
            )?;
        }
        Ok(())
    }

    fn seed_principles(&mut self) -> Result<(), SeedError> {
        let groups = [
            (STRATEGIC_PRINCIPLES, 0),
            (SYSTEMIC_PRINCIPLES, STRATEGIC_PRINCIPLES.len()),
            (
                CROSS_SYSTEM_PRINCIPLES,
                STRATEGIC_PRINCIPLES.len() + SYSTEMIC_PRINCIPLES.len(),
            ),
        ];
        for (principles, offset) in groups {
            for (i, p) in principles.iter().enumerate() {
                let mut fields = template_stamp(TemplateKind::Principle, &self.stamp);
                fields.extend(metadata(json!({
                    "alignedWith": p.aligned_with,
                    "principle": p.principle,
                    "whyItWorks": p.why_it_works,
                    "violationPattern": p.violation_pattern,
                    "predictableResult": p.predictable_result,
                })));
                if let Some(modifier) = &p.modifier {
                    fields.insert("isCrossSystemModifier".into(), json!(true));
                    fields.insert("modifierType".into(), json!(modifier.modifier_type));
                    fields.insert("affectsAllSystems".into(), json!(true));
                    if !modifier.calculation_basis.is_empty() {
                        fields.insert("calculationBasis".into(), json!(modifier.calculation_basis));
                    }
                    if !modifier.application_rules.is_empty() {
                        let rules: serde_json::Map<String, Value> = modifier
                            .application_rules
                            .iter()
                            .map(|(k, v)| ((*k).to_string(), json!(v)))
                            .collect();
                        fields.insert("applicationRules".into(), Value::Object(rules));
                    }
                }

                let id = child_id(&child_id(PRINCIPLES_ID, p.category.as_str()), p.title);
                self.put(
                    NodeSpec::new(id, p.title, NodeType::Principle)
                        .parent(PRINCIPLES_ID)
                        .description(p.description)
                        .category(p.category)
                        .immutable(true)
                        .order((offset + i) as i64 + 1)
                        .metadata(fields),
                )?;
            }
        }
        Ok(())
    }

    fn seed_frameworks(&mut self) -> Result<(), SeedError> {
        for (i, f) in FRAMEWORKS.iter().enumerate() {
            let mut fields = template_stamp(TemplateKind::Framework, &self.stamp);
            fields.extend(metadata(json!({
                "basedOn": f.based_on,
                "purpose": f.purpose,
                "structure": f.structure,
                "whenToUse": f.when_to_use,
                "whenNotToUse": f.when_not_to_use,
            })));
            self.put(
                NodeSpec::new(child_id(FRAMEWORKS_ID, f.title), f.title, NodeType::Framework)
                    .parent(FRAMEWORKS_ID)
                    .description(f.description)
                    .category(NodeCategory::Strategic)
                    .immutable(true)
                    .order(i as i64 + 1)
                    .metadata(fields),
            )?;
        }
        Ok(())
    }

    /// Seed `entries` under `parent_id`, recursing into nested entries.
    #[allow(clippy::too_many_arguments)]
    fn seed_entries(
        &mut self,
        parent_id: &str,
        entries: &[EntryDef],
        node_type: NodeType,
        category: NodeCategory,
        lock: Lock,
        extra: &Metadata,
        depth: u32,
    ) -> Result<(), SeedError> {
        for (i, entry) in entries.iter().enumerate() {
            let id = child_id(parent_id, entry.title);
            let fields = self.stamped(extra.clone());
            self.put(
                NodeSpec::new(&id, entry.title, node_type)
                    .parent(parent_id)
                    .description(entry.description)
                    .category(entry.category.unwrap_or(category))
                    .immutable(lock.at(depth))
                    .order(i as i64 + 1)
                    .metadata(fields),
            )?;
            if !entry.children.is_empty() {
                self.seed_entries(
                    &id,
                    entry.children,
                    node_type,
                    category,
                    lock,
                    extra,
                    depth + 1,
                )?;
            }
        }
        Ok(())
    }

    fn seed_agents_and_environments(&mut self) -> Result<(), SeedError> {
        self.seed_entries(
            AGENTS_ID,
            AGENT_TYPES,
            NodeType::Agent,
            NodeCategory::Human,
            Lock::FirstLevel,
            &Metadata::new(),
            0,
        )?;
        self.seed_entries(
            ENVIRONMENTS_ID,
            ENVIRONMENT_TYPES,
            NodeType::Environment,
            NodeCategory::Physical,
            Lock::FirstLevel,
            &Metadata::new(),
            0,
        )
    }

    fn seed_resources(&mut self) -> Result<(), SeedError> {
        let fields = self.stamped(metadata(json!({"resourceType": "ENGINES"})));
        self.put(
            NodeSpec::new(ENGINES_ID, "ENGINES", NodeType::Category)
                .parent(RESOURCES_ID)
                .description("Income-generating engines that convert time, energy, and capital into cash flow.")
                .category(NodeCategory::Economic)
                .immutable(true)
                .order(1)
                .metadata(fields),
        )?;
        for (i, engine) in ENGINE_TYPES.iter().enumerate() {
            let fields = self.stamped(metadata(json!({
                "engineType": engine.engine_type,
                "resourceType": "ENGINE",
            })));
            self.put(
                NodeSpec::new(child_id(ENGINES_ID, engine.title), engine.title, NodeType::Category)
                    .parent(ENGINES_ID)
                    .description(engine.description)
                    .category(NodeCategory::Economic)
                    .immutable(true)
                    .order(i as i64 + 1)
                    .metadata(fields),
            )?;
        }
        Ok(())
    }

    fn seed_value(&mut self) -> Result<(), SeedError> {
        let fields = self.stamped(metadata(json!({
            "isSystem": true,
            "systemType": "FINANCE",
            "systemName": "Finance",
        })));
        self.put(
            NodeSpec::new(FINANCE_ID, "FINANCE", NodeType::Category)
                .parent(VALUE_ID)
                .description("The finance system: how value is stored, grown, protected, and exchanged.")
                .category(NodeCategory::Economic)
                .immutable(true)
                .order(1)
                .metadata(fields),
        )?;

        self.seed_universal_concept(FINANCE_ID, "finance", "MONEY")?;

        self.seed_entries(
            FINANCE_ID,
            FINANCE_CATEGORIES,
            NodeType::Category,
            NodeCategory::Economic,
            Lock::FirstLevel,
            &Metadata::new(),
            0,
        )?;
        Ok(())
    }

    /// The `{system}-universal-concept` node and its pathway subtree.
    fn seed_universal_concept(
        &mut self,
        system_node_id: &str,
        system_id: &str,
        title: &str,
    ) -> Result<(), SeedError> {
        let concept_id = format!("{}-universal-concept", system_node_id);
        let fields = self.stamped(metadata(json!({
            "isUniversalConcept": true,
            "systemId": system_id,
        })));
        self.put(
            NodeSpec::new(&concept_id, title, NodeType::Category)
                .parent(system_node_id)
                .description(format!(
                    "The universal concept underlying the {} system.",
                    system_id
                ))
                .category(NodeCategory::Foundational)
                .immutable(true)
                .order(1)
                .metadata(fields),
        )?;

        if !SYSTEMS_WITHOUT_GENERIC_CONCEPTS.contains(&system_id) {
            let fields = self.stamped(Metadata::new());
            self.put(
                NodeSpec::new(child_id(&concept_id, "CONCEPTS"), "CONCEPTS", NodeType::Category)
                    .parent(&concept_id)
                    .description(format!("Core concepts of {}.", title))
                    .category(NodeCategory::Foundational)
                    .immutable(true)
                    .order(1)
                    .metadata(fields),
            )?;
        }

        if let Some((pathways, category)) = pathways_for(system_id) {
            let extra = metadata(json!({"isPathway": true, "systemId": system_id}));
            self.seed_entries(
                &concept_id,
                pathways,
                NodeType::Category,
                category,
                Lock::All,
                &extra,
                0,
            )?;
        }
        Ok(())
    }

    fn seed_systems(&mut self) -> Result<(), SeedError> {
        for tier in SYSTEM_TIERS {
            if tier.systems.is_empty() {
                continue;
            }
            let tier_id = child_id(SYSTEMS_ID, tier.name);
            let fields = self.stamped(metadata(json!({"systemTier": tier.name})));
            self.put(
                NodeSpec::new(&tier_id, tier.name, NodeType::Category)
                    .parent(SYSTEMS_ID)
                    .description(format!("Systems in the {} tier.", tier.name))
                    .category(NodeCategory::SystemTier)
                    .immutable(true)
                    .order(tier.order_index)
                    .metadata(fields),
            )?;

            for system in tier.systems.iter().take(MAX_PER_TIER) {
                self.seed_system(&tier_id, tier.name, system)?;
            }
        }
        Ok(())
    }

    fn seed_system(
        &mut self,
        tier_id: &str,
        tier_name: &str,
        system: &SystemDef,
    ) -> Result<(), SeedError> {
        let system_node_id = format!("{}-{}", tier_id, system.id);
        let sub_names: Vec<&str> = system
            .sub_systems
            .iter()
            .take(MAX_PER_TIER)
            .map(|(name, _)| *name)
            .collect();
        let fields = self.stamped(metadata(json!({
            "isSystem": true,
            "systemId": system.id,
            "systemMantra": system.mantra,
            "systemRoute": system.route,
            "systemTier": tier_name,
            "subSystems": sub_names,
        })));
        self.put(
            NodeSpec::new(&system_node_id, system.name, NodeType::Category)
                .parent(tier_id)
                .description(system.description)
                .category(NodeCategory::System)
                .immutable(true)
                .order(system.order_index)
                .metadata(fields),
        )?;

        let concept_system_id = match system.id {
            "money" => "finance",
            other => other,
        };
        self.seed_universal_concept(
            &system_node_id,
            concept_system_id,
            universal_concept_title(system.id),
        )?;

        for (i, (name, description)) in system.sub_systems.iter().take(MAX_PER_TIER).enumerate() {
            let fields = self.stamped(metadata(json!({
                "isSubSystem": true,
                "parentSystem": system.id,
            })));
            self.put(
                NodeSpec::new(child_id(&system_node_id, name), *name, NodeType::Category)
                    .parent(&system_node_id)
                    .description(*description)
                    .category(NodeCategory::System)
                    .order(i as i64 + 2)
                    .metadata(fields),
            )?;
        }
        Ok(())
    }
}

/// Seed the whole curated tree. The first failing upsert aborts the pass.
pub fn seed_curated(store: &dyn NodeStore) -> Result<UpsertTally, SeedError> {
    let mut builder = Builder {
        store,
        stamp: time::seed_stamp(),
        tally: UpsertTally::default(),
    };
    builder.seed_root_and_foundations()?;
    builder.seed_constraints()?;
    builder.seed_agents_and_environments()?;
    builder.seed_resources()?;
    builder.seed_value()?;
    builder.seed_systems()?;
    tracing::info!(tally = %builder.tally, "curated hierarchy seeded");
    Ok(builder.tally)
}
