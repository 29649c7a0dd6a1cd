//! Database schema for the hierarchy store.
//!
//! One SQLite file holds the node tree and the externally-seeded record sets
//! that the linker grafts into it.

pub const HIERARCHY_DB_NAME: &str = "reality.db";
pub const HIERARCHY_SCHEMA_VERSION: u32 = 1;

pub const HIERARCHY_DB_SCHEMA_META: &str = "
    CREATE TABLE IF NOT EXISTS meta (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    )
";

// parent_id is checked at commit so a rename can move a node and its children
// in one transaction.
pub const HIERARCHY_DB_SCHEMA_NODES: &str = "
    CREATE TABLE IF NOT EXISTS hierarchy_nodes (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT,
        parent_id TEXT REFERENCES hierarchy_nodes(id) DEFERRABLE INITIALLY DEFERRED,
        node_type TEXT NOT NULL,
        category TEXT,
        immutable INTEGER NOT NULL DEFAULT 0,
        order_index INTEGER NOT NULL DEFAULT 0,
        metadata TEXT -- JSON object
    )
";

/// Per-parent title uniqueness. IFNULL folds the root's NULL parent into one
/// key so parentless titles collide too.
pub const HIERARCHY_DB_INDEX_TITLE_PARENT: &str = "CREATE UNIQUE INDEX IF NOT EXISTS idx_hierarchy_title_parent ON hierarchy_nodes(title, IFNULL(parent_id, ''))";
pub const HIERARCHY_DB_INDEX_PARENT: &str =
    "CREATE INDEX IF NOT EXISTS idx_hierarchy_parent ON hierarchy_nodes(parent_id)";
pub const HIERARCHY_DB_INDEX_TYPE: &str =
    "CREATE INDEX IF NOT EXISTS idx_hierarchy_type ON hierarchy_nodes(node_type)";

pub const HIERARCHY_DB_SCHEMA_DOMAIN_RECORDS: &str = "
    CREATE TABLE IF NOT EXISTS domain_records (
        record_set TEXT NOT NULL,
        id TEXT NOT NULL,
        domain TEXT NOT NULL,
        law_number INTEGER NOT NULL,
        title TEXT NOT NULL,
        canonical_text TEXT,
        category TEXT,
        reference TEXT,
        PRIMARY KEY(record_set, domain, law_number)
    )
";

pub const HIERARCHY_DB_SCHEMA_ALL: &[&str] = &[
    HIERARCHY_DB_SCHEMA_META,
    HIERARCHY_DB_SCHEMA_NODES,
    HIERARCHY_DB_INDEX_TITLE_PARENT,
    HIERARCHY_DB_INDEX_PARENT,
    HIERARCHY_DB_INDEX_TYPE,
    HIERARCHY_DB_SCHEMA_DOMAIN_RECORDS,
];
