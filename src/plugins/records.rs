//! The two externally-seeded record sets grafted under LAWS.

use crate::core::error::SeedError;
use crate::core::model::{DomainRecord, NodeCategory};
use crate::core::store::DomainRecordSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordSet {
    Power,
    Biblical,
}

impl RecordSet {
    pub const ALL: [RecordSet; 2] = [RecordSet::Power, RecordSet::Biblical];

    /// Key under which the set's rows are stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordSet::Power => "power",
            RecordSet::Biblical => "biblical",
        }
    }

    /// Title of the category node under LAWS.
    pub fn title(&self) -> &'static str {
        match self {
            RecordSet::Power => "POWER",
            RecordSet::Biblical => "BIBLICAL",
        }
    }

    pub fn category(&self) -> NodeCategory {
        match self {
            RecordSet::Power => NodeCategory::Power,
            RecordSet::Biblical => NodeCategory::Biblical,
        }
    }

    pub fn order_index(&self) -> i64 {
        match self {
            RecordSet::Power => 100,
            RecordSet::Biblical => 200,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RecordSet::Power => {
                "48 Laws of Power applied across different domains (Money, Energy, Career, Business, Relationships, Leadership, Negotiation)"
            }
            RecordSet::Biblical => {
                "Biblical principles and teachings applied across different domains (Money, Investment, Career, Business, Relationships, Leadership, Spiritual Growth, Stewardship, Generosity, Energy)"
            }
        }
    }

    pub fn domain_description(&self, domain: &str) -> String {
        match self {
            RecordSet::Power => format!("48 Laws of Power applied to {} domain", domain),
            RecordSet::Biblical => format!("Biblical principles applied to {} domain", domain),
        }
    }

    pub fn leaf_title(&self, record: &DomainRecord) -> String {
        match (self, record.reference.as_deref()) {
            (RecordSet::Power, _) => format!("Law {}: {}", record.law_number, record.title),
            (RecordSet::Biblical, Some(reference)) if !reference.is_empty() => {
                format!("{} ({})", record.title, reference)
            }
            (RecordSet::Biblical, _) => record.title.clone(),
        }
    }
}

impl fmt::Display for RecordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordSet {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "power" => Ok(RecordSet::Power),
            "biblical" | "bible" => Ok(RecordSet::Biblical),
            other => Err(SeedError::ValidationError(format!(
                "unknown record set '{}'",
                other
            ))),
        }
    }
}

/// Load a JSON array of records from `path` into the store under `set`.
/// Returns the number of rows written.
pub fn import_records(
    source: &dyn DomainRecordSource,
    set: RecordSet,
    path: &Path,
) -> Result<usize, SeedError> {
    let content = fs::read_to_string(path)?;
    let records: Vec<DomainRecord> = serde_json::from_str(&content)?;
    for record in &records {
        validate_record(record)?;
    }
    for record in &records {
        source.put_domain_record(set.as_str(), record)?;
    }
    tracing::info!(set = %set, count = records.len(), "imported domain records");
    Ok(records.len())
}

fn validate_record(record: &DomainRecord) -> Result<(), SeedError> {
    if record.domain.trim().is_empty() {
        return Err(SeedError::ValidationError(format!(
            "record '{}' has an empty domain",
            record.id
        )));
    }
    if record.law_number < 1 {
        return Err(SeedError::ValidationError(format!(
            "record '{}' has law number {}",
            record.id, record.law_number
        )));
    }
    Ok(())
}
