//! `reality-seed.toml` loading.

use crate::core::error::SeedError;
use crate::core::model::{NodeCategory, NodeType};
use crate::core::schemas::HIERARCHY_DB_NAME;
use crate::plugins::pareto::MAX_DEPTH_LIMIT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "reality-seed.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SeedConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub link: LinkConfig,
    #[serde(default)]
    pub pareto: Vec<ParetoTarget>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
    #[serde(default)]
    pub audit_log: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            audit_log: None,
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from(HIERARCHY_DB_NAME)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkConfig {
    #[serde(default = "default_laws_parent")]
    pub laws_parent: String,
    #[serde(default = "default_true")]
    pub power: bool,
    #[serde(default = "default_true")]
    pub biblical: bool,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            laws_parent: default_laws_parent(),
            power: true,
            biblical: true,
        }
    }
}

fn default_laws_parent() -> String {
    "laws-node".to_string()
}

fn default_true() -> bool {
    true
}

/// One Pareto filler branch seeded after the curated tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParetoTarget {
    pub parent: String,
    pub node_type: NodeType,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    #[serde(default)]
    pub examples: Vec<ParetoExampleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParetoExampleConfig {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<NodeCategory>,
}

fn default_level() -> u32 {
    1
}

fn default_max_depth() -> u32 {
    4
}

/// Load an explicit config file, or `reality-seed.toml` from `cwd` if present.
///
/// A missing default file yields the defaults; a missing explicit file is an error.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<SeedConfig, SeedError> {
    let config_path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(SeedError::ConfigError(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let path = cwd.join(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                return Ok(SeedConfig::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&config_path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<SeedConfig, SeedError> {
    let config: SeedConfig =
        toml::from_str(content).map_err(|e| SeedError::ConfigError(e.to_string()))?;
    for target in &config.pareto {
        if target.max_depth == 0 || target.max_depth > MAX_DEPTH_LIMIT {
            return Err(SeedError::ConfigError(format!(
                "pareto target '{}': max_depth must be between 1 and {}",
                target.parent, MAX_DEPTH_LIMIT
            )));
        }
    }
    Ok(config)
}
