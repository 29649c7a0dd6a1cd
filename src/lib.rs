//! reality-seed: builds and maintains the Reality Hierarchy.
//!
//! The Reality Hierarchy is a single-rooted tree of laws, principles,
//! frameworks, agents, environments and life systems persisted in SQLite.
//! Every write goes through an idempotent upsert, so the full seed can be
//! re-run at any time and converges on the same tree.
//!
//! # Phases
//!
//! 1. `curated`: the hand-authored backbone under REALITY
//! 2. `pareto:*`: depth-limited filler branches declared in `reality-seed.toml`
//! 3. `link:power` / `link:biblical`: imported record sets grafted under LAWS
//!
//! # Examples
//!
//! ```bash
//! reality-seed records import --set power --file power-laws.json
//! reality-seed seed
//! reality-seed verify
//! reality-seed fingerprint
//! ```
//!
//! # Crate Structure
//!
//! - [`core`]: store, model, upsert/merge primitives, config and tree checks
//! - [`plugins`]: curated builder, Pareto generator, linker, templates
//! - [`phases`]: run orchestration

pub mod core;
pub mod phases;
pub mod plugins;

use crate::core::config::{self, SeedConfig};
use crate::core::model::{HierarchyNode, NodeType};
use crate::core::store::{NodeStore, SqliteNodeStore};
use crate::core::time::command_envelope;
use crate::core::verify;
use crate::phases::{PhaseOutcome, RunReport};
use crate::plugins::linker;
use crate::plugins::pareto::{self, ParetoExample};
use crate::plugins::records::{self, RecordSet};
use crate::plugins::templates;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "reality-seed",
    version = env!("CARGO_PKG_VERSION"),
    about = "Seed and maintain the Reality Hierarchy"
)]
struct Cli {
    /// Config file (defaults to ./reality-seed.toml when present).
    #[clap(long, global = true)]
    config: Option<PathBuf>,
    /// Database path; overrides `[store].path`.
    #[clap(long, global = true)]
    db: Option<PathBuf>,
    /// Output format.
    #[clap(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,
    #[clap(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every seeding phase.
    Seed,
    /// Generate a Pareto branch under an existing node.
    Generate {
        /// Parent node id.
        #[clap(long)]
        parent: String,
        /// Node type of generated nodes (LAW, PRINCIPLE, FRAMEWORK, ...).
        #[clap(long = "type", default_value = "FRAMEWORK")]
        node_type: NodeType,
        #[clap(long, default_value_t = 1)]
        level: u32,
        #[clap(
            long,
            default_value_t = pareto::DEFAULT_MAX_DEPTH,
            value_parser = clap::value_parser!(u32).range(1..=pareto::MAX_DEPTH_LIMIT as i64)
        )]
        max_depth: u32,
        /// Example title; repeat for up to five. Synthesized from the parent when omitted.
        #[clap(long = "example")]
        examples: Vec<String>,
    },
    /// Link imported record sets under LAWS.
    Link {
        /// Only this set (power or biblical).
        #[clap(long)]
        set: Option<RecordSet>,
    },
    /// Manage domain record sets.
    Records {
        #[clap(subcommand)]
        command: RecordsCommand,
    },
    /// Check tree integrity.
    Verify,
    /// Upgrade LAW/PRINCIPLE/FRAMEWORK metadata to the current template.
    Migrate {
        #[clap(subcommand)]
        command: Option<MigrateCommand>,
        /// Report what would change without writing.
        #[clap(long)]
        dry_run: bool,
    },
    /// Show one node and its children.
    Show { id: String },
    /// List nodes, optionally filtered.
    List {
        #[clap(long = "type")]
        node_type: Option<NodeType>,
        #[clap(long)]
        parent: Option<String>,
    },
    /// Node counts by type.
    Stats,
    /// Content hash of the tree, ignoring reserved metadata.
    Fingerprint,
}

#[derive(Subcommand, Debug)]
enum RecordsCommand {
    /// Import a JSON array of records.
    Import {
        #[clap(long)]
        set: RecordSet,
        #[clap(long)]
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum MigrateCommand {
    /// List nodes whose template version is outdated.
    Check,
}

fn open_store(cfg: &SeedConfig, db_override: Option<PathBuf>) -> anyhow::Result<SqliteNodeStore> {
    let db_path = db_override.unwrap_or_else(|| cfg.store.path.clone());
    let store = SqliteNodeStore::open(&db_path)
        .with_context(|| format!("opening {}", db_path.display()))?;
    Ok(match &cfg.store.audit_log {
        Some(path) => store.with_audit_log(path),
        None => store,
    })
}

fn emit(format: Format, cmd: &str, status: &str, payload: serde_json::Value) -> anyhow::Result<bool> {
    if format == Format::Json {
        let envelope = command_envelope(cmd, status, payload);
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(true);
    }
    Ok(false)
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let cfg = config::load_config(cli.config.as_deref(), &cwd)?;
    let store = open_store(&cfg, cli.db)?;
    let format = cli.format;

    let result = dispatch(&store, &cfg, format, cli.command);
    store.close()?;
    result
}

fn dispatch(
    store: &SqliteNodeStore,
    cfg: &SeedConfig,
    format: Format,
    command: Command,
) -> anyhow::Result<()> {
    match command {
        Command::Seed => {
            let report = phases::run_seed(store, store, cfg);
            let status = if report.has_failures() { "error" } else { "ok" };
            if !emit(format, "seed", status, json!({ "phases": report.phases }))? {
                print_run_report(&report);
            }
            if report.has_failures() {
                bail!("one or more seeding phases failed");
            }
        }
        Command::Generate {
            parent,
            node_type,
            level,
            max_depth,
            examples,
        } => {
            let examples = if examples.is_empty() {
                let parent_node = store
                    .find_by_id(&parent)?
                    .with_context(|| format!("parent '{}' not found", parent))?;
                pareto::pareto_examples(&parent_node.title, level, parent_node.category)
            } else {
                examples.into_iter().map(ParetoExample::new).collect()
            };
            let report = pareto::generate(store, &parent, level, &examples, node_type, max_depth)?;
            if !emit(format, "generate", "ok", json!({ "report": report }))? {
                if report.refused {
                    println!("{} refusing to generate directly under the root", "!".yellow().bold());
                } else {
                    println!(
                        "{} {} nodes under {} (deepest level {}): {}",
                        "✓".green().bold(),
                        report.node_ids.len(),
                        parent.bright_white(),
                        report.deepest_level.unwrap_or(0),
                        report.tally
                    );
                }
            }
        }
        Command::Link { set } => {
            let sets: Vec<RecordSet> = match set {
                Some(s) => vec![s],
                None => RecordSet::ALL.to_vec(),
            };
            let mut reports = Vec::new();
            for set in sets {
                reports.push(linker::link_from_source(store, store, set, &cfg.link.laws_parent)?);
            }
            if !emit(format, "link", "ok", json!({ "reports": reports }))? {
                for r in &reports {
                    println!(
                        "{} {}: {} domains, {} laws ({})",
                        "✓".green().bold(),
                        r.set.title().bright_white(),
                        r.domains.len(),
                        r.leaf_count(),
                        r.tally
                    );
                }
            }
        }
        Command::Records {
            command: RecordsCommand::Import { set, file },
        } => {
            let count = records::import_records(store, set, &file)
                .with_context(|| format!("importing {}", file.display()))?;
            if !emit(format, "records.import", "ok", json!({ "set": set, "count": count }))? {
                println!("{} imported {} {} records", "✓".green().bold(), count, set);
            }
        }
        Command::Verify => {
            let report = verify::verify_tree(store)?;
            let status = if report.is_healthy() { "ok" } else { "error" };
            if !emit(format, "verify", status, json!({ "report": report }))? {
                if report.is_healthy() {
                    println!(
                        "{} {} nodes, max depth {}, root {}",
                        "✓".green().bold(),
                        report.node_count,
                        report.max_depth,
                        report.root_id.as_deref().unwrap_or("-")
                    );
                } else {
                    for p in &report.problems {
                        println!("{} {}", "✗".red().bold(), p);
                    }
                }
            }
            if !report.is_healthy() {
                bail!("{} integrity problem(s) found", report.problems.len());
            }
        }
        Command::Migrate {
            command: Some(MigrateCommand::Check),
            ..
        } => {
            let mismatches = templates::check_versions(store)?;
            if !emit(format, "migrate.check", "ok", json!({ "mismatches": mismatches }))? {
                if mismatches.is_empty() {
                    println!(
                        "{} all templates at {}",
                        "✓".green().bold(),
                        templates::TEMPLATE_VERSION
                    );
                }
                for m in &mismatches {
                    println!(
                        "{} {} ({}) at {}, expected {}",
                        "•".yellow(),
                        m.node_id,
                        m.node_type,
                        m.current_version.as_deref().unwrap_or("unversioned"),
                        m.expected_version
                    );
                }
            }
        }
        Command::Migrate {
            command: None,
            dry_run,
        } => {
            let report = templates::migrate_templates(store, dry_run)?;
            let status = if report.errors > 0 { "error" } else { "ok" };
            if !emit(format, "migrate", status, json!({ "report": report }))? {
                let prefix = if dry_run { "(dry run) " } else { "" };
                println!(
                    "{}{} updated, {} skipped, {} errors",
                    prefix, report.updated, report.skipped, report.errors
                );
            }
            if report.errors > 0 {
                bail!("{} template migration(s) failed", report.errors);
            }
        }
        Command::Show { id } => {
            let node = store
                .find_by_id(&id)?
                .with_context(|| format!("node '{}' not found", id))?;
            let children = store.children(&id)?;
            if !emit(format, "show", "ok", json!({ "node": node, "children": children }))? {
                print_node(&node);
                for child in &children {
                    println!("  {} {} ({})", "└".dimmed(), child.title, child.id.dimmed());
                }
            }
        }
        Command::List { node_type, parent } => {
            let nodes: Vec<HierarchyNode> = match (&parent, node_type) {
                (Some(p), _) => store.children(p)?,
                (None, Some(t)) => store.nodes_by_type(t)?,
                (None, None) => store.all_nodes()?,
            };
            let nodes: Vec<HierarchyNode> = nodes
                .into_iter()
                .filter(|n| node_type.is_none_or(|t| n.node_type == t))
                .collect();
            if !emit(format, "list", "ok", json!({ "nodes": nodes }))? {
                for n in &nodes {
                    println!("{:<12} {} {}", n.node_type.as_str(), n.title, n.id.dimmed());
                }
            }
        }
        Command::Stats => {
            let counts = verify::stats(store)?;
            if !emit(format, "stats", "ok", json!({ "counts": counts }))? {
                let total: usize = counts.values().sum();
                for (t, c) in &counts {
                    println!("{:<12} {}", t.as_str(), c);
                }
                println!("{:<12} {}", "TOTAL".bold(), total);
            }
        }
        Command::Fingerprint => {
            let digest = verify::fingerprint(store)?;
            if !emit(format, "fingerprint", "ok", json!({ "sha256": digest }))? {
                println!("{}", digest);
            }
        }
    }
    Ok(())
}

fn print_run_report(report: &RunReport) {
    for phase in &report.phases {
        match &phase.outcome {
            PhaseOutcome::Succeeded(t) => {
                println!("{} {:<24} {}", "✓".green().bold(), phase.name, t)
            }
            PhaseOutcome::Failed(e) => {
                println!("{} {:<24} {}", "✗".red().bold(), phase.name, e.red())
            }
            PhaseOutcome::Skipped(r) => {
                println!("{} {:<24} {}", "-".dimmed(), phase.name, r.dimmed())
            }
        }
    }
    println!("{} {}", "total:".bold(), report.tally());
}

fn print_node(node: &HierarchyNode) {
    println!("{} {}", node.title.bright_white().bold(), node.id.dimmed());
    println!("  type:      {}", node.node_type);
    if let Some(c) = node.category {
        println!("  category:  {}", c);
    }
    println!("  parent:    {}", node.parent_id.as_deref().unwrap_or("-"));
    println!("  order:     {}", node.order_index);
    if node.immutable {
        println!("  {}", "immutable".cyan());
    }
    if let Some(d) = &node.description {
        println!("  {}", d);
    }
}
