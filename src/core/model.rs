//! Hierarchy node model.
//!
//! `nodeType` classifies a node's role in the tree, `category` groups it for
//! presentation. Both are stored as their SCREAMING_SNAKE_CASE names.

use crate::core::error::SeedError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Open key/value bag whose shape depends on the node type.
pub type Metadata = Map<String, Value>;

/// Turn a `json!({...})` literal into a metadata map. Non-objects yield an empty map.
pub fn metadata(value: Value) -> Metadata {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

macro_rules! text_enum {
    ($(#[$doc:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SeedError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_uppercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    other => Err(SeedError::ValidationError(format!(
                        "unknown {} '{}'",
                        stringify!($name),
                        other
                    ))),
                }
            }
        }
    };
}

text_enum!(
    /// Role of a node in the tree, independent of depth.
    NodeType {
        Root => "ROOT",
        Foundation => "FOUNDATION",
        Category => "CATEGORY",
        Law => "LAW",
        Principle => "PRINCIPLE",
        Framework => "FRAMEWORK",
        Agent => "AGENT",
        Environment => "ENVIRONMENT",
    }
);

text_enum!(
    /// Presentation grouping, orthogonal to `NodeType`.
    NodeCategory {
        Foundational => "FOUNDATIONAL",
        Fundamental => "FUNDAMENTAL",
        Strategic => "STRATEGIC",
        Systemic => "SYSTEMIC",
        CrossSystem => "CROSS_SYSTEM",
        Economic => "ECONOMIC",
        Power => "POWER",
        Biblical => "BIBLICAL",
        Human => "HUMAN",
        Collective => "COLLECTIVE",
        Artificial => "ARTIFICIAL",
        Organisational => "ORGANISATIONAL",
        Hybrid => "HYBRID",
        Physical => "PHYSICAL",
        Digital => "DIGITAL",
        Social => "SOCIAL",
        Biological => "BIOLOGICAL",
        SystemTier => "SYSTEM_TIER",
        System => "SYSTEM",
    }
);

/// One persisted entry of the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyNode {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub parent_id: Option<String>,
    pub node_type: NodeType,
    pub category: Option<NodeCategory>,
    pub immutable: bool,
    pub order_index: i64,
    pub metadata: Option<Metadata>,
}

/// Desired state handed to `upsert_node`.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub parent_id: Option<String>,
    pub node_type: NodeType,
    pub category: Option<NodeCategory>,
    pub immutable: bool,
    pub order_index: i64,
    pub metadata: Metadata,
}

impl NodeSpec {
    pub fn new(id: impl Into<String>, title: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            parent_id: None,
            node_type,
            category: None,
            immutable: false,
            order_index: 0,
            metadata: Metadata::new(),
        }
    }

    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: NodeCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn maybe_category(mut self, category: Option<NodeCategory>) -> Self {
        self.category = category;
        self
    }

    pub fn immutable(mut self, immutable: bool) -> Self {
        self.immutable = immutable;
        self
    }

    pub fn order(mut self, order_index: i64) -> Self {
        self.order_index = order_index;
        self
    }

    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn into_node(self) -> HierarchyNode {
        HierarchyNode {
            id: self.id,
            title: self.title,
            description: self.description,
            parent_id: self.parent_id,
            node_type: self.node_type,
            category: self.category,
            immutable: self.immutable,
            order_index: self.order_index,
            metadata: Some(self.metadata),
        }
    }
}

/// One row of an externally-seeded record set (power laws, biblical laws).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    pub id: String,
    pub domain: String,
    pub law_number: i64,
    pub title: String,
    #[serde(default)]
    pub canonical_text: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
}
