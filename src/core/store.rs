//! Store abstraction for the hierarchy.
//!
//! The seeding engine never reaches for a global client: every component is
//! handed a `&dyn NodeStore` (and, for the linker, a `&dyn DomainRecordSource`).
//! `SqliteNodeStore` is the production implementation; it owns one connection
//! for the lifetime of a run and is released with `close()`.

use crate::core::broker::DbBroker;
use crate::core::db;
use crate::core::error::SeedError;
use crate::core::model::{DomainRecord, HierarchyNode, Metadata, NodeCategory, NodeType};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;

/// Read/write surface over the HierarchyNode set.
pub trait NodeStore {
    fn find_by_id(&self, id: &str) -> Result<Option<HierarchyNode>, SeedError>;

    /// Secondary key lookup; `None` parent matches parentless nodes.
    fn find_by_title_parent(
        &self,
        title: &str,
        parent_id: Option<&str>,
    ) -> Result<Option<HierarchyNode>, SeedError>;

    /// All parentless nodes, ordered by id. A healthy tree has exactly one.
    fn roots(&self) -> Result<Vec<HierarchyNode>, SeedError>;

    /// Insert-or-update keyed by `node.id`.
    fn write(&self, node: &HierarchyNode) -> Result<(), SeedError>;

    /// Re-key `from_id` to `to_id` and repoint its children, atomically.
    /// Returns the number of children moved.
    fn rename(&self, from_id: &str, to_id: &str) -> Result<usize, SeedError>;

    /// Children ordered by `order_index`, then title.
    fn children(&self, parent_id: &str) -> Result<Vec<HierarchyNode>, SeedError>;

    fn nodes_by_type(&self, node_type: NodeType) -> Result<Vec<HierarchyNode>, SeedError>;

    /// Every node, ordered by id.
    fn all_nodes(&self) -> Result<Vec<HierarchyNode>, SeedError>;
}

/// The externally-seeded flat record sets the linker consumes.
pub trait DomainRecordSource {
    /// Records of one set, sorted by (domain, law_number).
    fn domain_records(&self, record_set: &str) -> Result<Vec<DomainRecord>, SeedError>;

    fn put_domain_record(&self, record_set: &str, record: &DomainRecord) -> Result<(), SeedError>;
}

pub struct SqliteNodeStore {
    broker: DbBroker,
}

const NODE_COLUMNS: &str =
    "id, title, description, parent_id, node_type, category, immutable, order_index, metadata";

type NodeRow = (
    String,
    String,
    Option<String>,
    Option<String>,
    String,
    Option<String>,
    bool,
    i64,
    Option<String>,
);

fn read_row(row: &Row<'_>) -> rusqlite::Result<NodeRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
        row.get(8)?,
    ))
}

fn into_node(row: NodeRow) -> Result<HierarchyNode, SeedError> {
    let (id, title, description, parent_id, node_type, category, immutable, order_index, metadata) =
        row;
    let metadata = match metadata {
        Some(text) => Some(serde_json::from_str::<Metadata>(&text)?),
        None => None,
    };
    Ok(HierarchyNode {
        id,
        title,
        description,
        parent_id,
        node_type: node_type.parse::<NodeType>()?,
        category: category.map(|c| c.parse::<NodeCategory>()).transpose()?,
        immutable,
        order_index,
        metadata,
    })
}

fn query_nodes<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Vec<HierarchyNode>, SeedError> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, read_row)?;
    let mut results = Vec::new();
    for r in rows {
        results.push(into_node(r?)?);
    }
    Ok(results)
}

fn query_node<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Option<HierarchyNode>, SeedError> {
    conn.query_row(sql, params, read_row)
        .optional()?
        .map(into_node)
        .transpose()
}

impl SqliteNodeStore {
    /// Open (and initialize) a file-backed store.
    pub fn open(db_path: &Path) -> Result<Self, SeedError> {
        let conn = db::db_connect(db_path)?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, SeedError> {
        let conn = db::db_connect_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, SeedError> {
        db::initialize_hierarchy_db(&conn)?;
        Ok(Self {
            broker: DbBroker::new(conn, "reality-seed"),
        })
    }

    pub fn with_audit_log(self, path: &Path) -> Self {
        Self {
            broker: self.broker.with_audit_log(path),
        }
    }

    pub fn close(self) -> Result<(), SeedError> {
        self.broker.close()
    }
}

impl NodeStore for SqliteNodeStore {
    fn find_by_id(&self, id: &str) -> Result<Option<HierarchyNode>, SeedError> {
        self.broker.with_conn("node.get", |conn| {
            query_node(
                conn,
                &format!("SELECT {NODE_COLUMNS} FROM hierarchy_nodes WHERE id = ?1"),
                params![id],
            )
        })
    }

    fn find_by_title_parent(
        &self,
        title: &str,
        parent_id: Option<&str>,
    ) -> Result<Option<HierarchyNode>, SeedError> {
        self.broker.with_conn("node.get_by_title", |conn| {
            query_node(
                conn,
                &format!(
                    "SELECT {NODE_COLUMNS} FROM hierarchy_nodes
                     WHERE title = ?1 AND IFNULL(parent_id, '') = IFNULL(?2, '')"
                ),
                params![title, parent_id],
            )
        })
    }

    fn roots(&self) -> Result<Vec<HierarchyNode>, SeedError> {
        self.broker.with_conn("node.roots", |conn| {
            query_nodes(
                conn,
                &format!(
                    "SELECT {NODE_COLUMNS} FROM hierarchy_nodes WHERE parent_id IS NULL ORDER BY id"
                ),
                [],
            )
        })
    }

    fn write(&self, node: &HierarchyNode) -> Result<(), SeedError> {
        let metadata = node
            .metadata
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        self.broker.with_conn("node.write", |conn| {
            conn.execute(
                "INSERT INTO hierarchy_nodes(id, title, description, parent_id, node_type, category, immutable, order_index, metadata)
                 VALUES(?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                 ON CONFLICT(id) DO UPDATE SET
                    title = excluded.title,
                    description = excluded.description,
                    parent_id = excluded.parent_id,
                    node_type = excluded.node_type,
                    category = excluded.category,
                    immutable = excluded.immutable,
                    order_index = excluded.order_index,
                    metadata = excluded.metadata",
                params![
                    node.id,
                    node.title,
                    node.description,
                    node.parent_id,
                    node.node_type.as_str(),
                    node.category.map(|c| c.as_str()),
                    node.immutable,
                    node.order_index,
                    metadata
                ],
            )?;
            Ok(())
        })
    }

    fn rename(&self, from_id: &str, to_id: &str) -> Result<usize, SeedError> {
        self.broker.with_tx("node.rename", |tx| {
            let exists = |id: &str| -> Result<bool, SeedError> {
                Ok(tx
                    .query_row(
                        "SELECT 1 FROM hierarchy_nodes WHERE id = ?1",
                        params![id],
                        |_| Ok(()),
                    )
                    .optional()?
                    .is_some())
            };
            if !exists(from_id)? {
                return Err(SeedError::NotFound(format!("node '{}'", from_id)));
            }
            if exists(to_id)? {
                return Err(SeedError::UniqueConstraintConflict(format!(
                    "cannot rename '{}' to '{}': id already taken",
                    from_id, to_id
                )));
            }
            tx.execute(
                "UPDATE hierarchy_nodes SET id = ?2 WHERE id = ?1",
                params![from_id, to_id],
            )?;
            let moved = tx.execute(
                "UPDATE hierarchy_nodes SET parent_id = ?2 WHERE parent_id = ?1",
                params![from_id, to_id],
            )?;
            Ok(moved)
        })
    }

    fn children(&self, parent_id: &str) -> Result<Vec<HierarchyNode>, SeedError> {
        self.broker.with_conn("node.children", |conn| {
            query_nodes(
                conn,
                &format!(
                    "SELECT {NODE_COLUMNS} FROM hierarchy_nodes WHERE parent_id = ?1
                     ORDER BY order_index, title"
                ),
                params![parent_id],
            )
        })
    }

    fn nodes_by_type(&self, node_type: NodeType) -> Result<Vec<HierarchyNode>, SeedError> {
        self.broker.with_conn("node.by_type", |conn| {
            query_nodes(
                conn,
                &format!("SELECT {NODE_COLUMNS} FROM hierarchy_nodes WHERE node_type = ?1 ORDER BY id"),
                params![node_type.as_str()],
            )
        })
    }

    fn all_nodes(&self) -> Result<Vec<HierarchyNode>, SeedError> {
        self.broker.with_conn("node.all", |conn| {
            query_nodes(
                conn,
                &format!("SELECT {NODE_COLUMNS} FROM hierarchy_nodes ORDER BY id"),
                [],
            )
        })
    }
}

impl DomainRecordSource for SqliteNodeStore {
    fn domain_records(&self, record_set: &str) -> Result<Vec<DomainRecord>, SeedError> {
        self.broker.with_conn("records.list", |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, domain, law_number, title, canonical_text, category, reference
                 FROM domain_records WHERE record_set = ?1
                 ORDER BY domain, law_number",
            )?;
            let rows = stmt.query_map(params![record_set], |row| {
                Ok(DomainRecord {
                    id: row.get(0)?,
                    domain: row.get(1)?,
                    law_number: row.get(2)?,
                    title: row.get(3)?,
                    canonical_text: row.get(4)?,
                    category: row.get(5)?,
                    reference: row.get(6)?,
                })
            })?;
            let mut results = Vec::new();
            for r in rows {
                results.push(r?);
            }
            Ok(results)
        })
    }

    fn put_domain_record(&self, record_set: &str, record: &DomainRecord) -> Result<(), SeedError> {
        self.broker.with_conn("records.put", |conn| {
            conn.execute(
                "INSERT INTO domain_records(record_set, id, domain, law_number, title, canonical_text, category, reference)
                 VALUES(?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                 ON CONFLICT(record_set, domain, law_number) DO UPDATE SET
                    id = excluded.id,
                    title = excluded.title,
                    canonical_text = excluded.canonical_text,
                    category = excluded.category,
                    reference = excluded.reference",
                params![
                    record_set,
                    record.id,
                    record.domain,
                    record.law_number,
                    record.title,
                    record.canonical_text,
                    record.category,
                    record.reference
                ],
            )?;
            Ok(())
        })
    }
}
