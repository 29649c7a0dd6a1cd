//! Seeding run orchestration.
//!
//! Phases run in a fixed order: curated, the configured Pareto fillers, then
//! the two record-set links. Everything after `curated` hangs off nodes it
//! creates, so a curated failure skips the rest. Later phases are independent
//! of each other and a failure in one does not stop its siblings.

use crate::core::config::SeedConfig;
use crate::core::error::SeedError;
use crate::core::store::{DomainRecordSource, NodeStore};
use crate::core::upsert::UpsertTally;
use crate::plugins::curated::seed_curated;
use crate::plugins::linker::link;
use crate::plugins::pareto::{ParetoExample, generate};
use crate::plugins::records::RecordSet;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum PhaseOutcome {
    Succeeded(UpsertTally),
    Failed(String),
    Skipped(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct PhaseReport {
    pub name: String,
    pub outcome: PhaseOutcome,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub phases: Vec<PhaseReport>,
}

impl RunReport {
    pub fn has_failures(&self) -> bool {
        self.phases
            .iter()
            .any(|p| matches!(p.outcome, PhaseOutcome::Failed(_)))
    }

    /// Combined counts of every successful phase.
    pub fn tally(&self) -> UpsertTally {
        let mut total = UpsertTally::default();
        for phase in &self.phases {
            if let PhaseOutcome::Succeeded(t) = &phase.outcome {
                total.absorb(*t);
            }
        }
        total
    }

    pub fn phase(&self, name: &str) -> Option<&PhaseReport> {
        self.phases.iter().find(|p| p.name == name)
    }

    fn push(&mut self, name: impl Into<String>, outcome: PhaseOutcome) {
        let name = name.into();
        match &outcome {
            PhaseOutcome::Succeeded(t) => tracing::info!(phase = %name, tally = %t, "phase succeeded"),
            PhaseOutcome::Failed(e) => tracing::error!(phase = %name, error = %e, "phase failed"),
            PhaseOutcome::Skipped(r) => tracing::info!(phase = %name, reason = %r, "phase skipped"),
        }
        self.phases.push(PhaseReport { name, outcome });
    }

    fn record(&mut self, name: impl Into<String>, result: Result<UpsertTally, SeedError>) {
        let outcome = match result {
            Ok(t) => PhaseOutcome::Succeeded(t),
            Err(e) => PhaseOutcome::Failed(format!("{}: {}", e.kind(), e)),
        };
        self.push(name, outcome);
    }
}

pub fn pareto_phase_name(parent: &str) -> String {
    format!("pareto:{}", parent)
}

pub fn link_phase_name(set: RecordSet) -> String {
    format!("link:{}", set)
}

/// Run every phase against `store`. Never returns early; the report carries
/// each phase's outcome.
pub fn run_seed(
    store: &dyn NodeStore,
    records: &dyn DomainRecordSource,
    config: &SeedConfig,
) -> RunReport {
    let mut report = RunReport::default();

    let curated = seed_curated(store);
    let curated_ok = curated.is_ok();
    report.record("curated", curated);

    if !curated_ok {
        let reason = "curated phase failed".to_string();
        for target in &config.pareto {
            report.push(pareto_phase_name(&target.parent), PhaseOutcome::Skipped(reason.clone()));
        }
        for set in RecordSet::ALL {
            report.push(link_phase_name(set), PhaseOutcome::Skipped(reason.clone()));
        }
        return report;
    }

    for target in &config.pareto {
        let name = pareto_phase_name(&target.parent);
        if target.examples.is_empty() {
            report.push(name, PhaseOutcome::Skipped("no examples configured".into()));
            continue;
        }
        let examples: Vec<ParetoExample> = target.examples.iter().map(ParetoExample::from).collect();
        match generate(
            store,
            &target.parent,
            target.level,
            &examples,
            target.node_type,
            target.max_depth,
        ) {
            Ok(generated) if generated.refused => report.push(
                name,
                PhaseOutcome::Skipped("refusing to generate directly under the root".into()),
            ),
            Ok(generated) => report.push(name, PhaseOutcome::Succeeded(generated.tally)),
            Err(e) => report.record(name, Err(e)),
        }
    }

    for set in RecordSet::ALL {
        let name = link_phase_name(set);
        let enabled = match set {
            RecordSet::Power => config.link.power,
            RecordSet::Biblical => config.link.biblical,
        };
        if !enabled {
            report.push(name, PhaseOutcome::Skipped("disabled in config".into()));
            continue;
        }
        match records.domain_records(set.as_str()) {
            Ok(rows) if rows.is_empty() => report.push(
                name,
                PhaseOutcome::Skipped(format!("no {} records imported", set)),
            ),
            Ok(rows) => {
                let result = link(store, &rows, set, &config.link.laws_parent).map(|r| r.tally);
                report.record(name, result);
            }
            Err(e) => report.record(name, Err(e)),
        }
    }

    report
}
