use crate::core::error::SeedError;
use crate::core::schemas;
use rusqlite::{Connection, params};
use std::fs;
use std::path::Path;

const BUSY_TIMEOUT_SECS: u64 = 5;

pub fn db_connect(db_path: &Path) -> Result<Connection, SeedError> {
    if let Some(parent_dir) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent_dir)?;
    }
    let conn = Connection::open(db_path)?;
    configure(&conn)?;
    Ok(conn)
}

pub fn db_connect_in_memory() -> Result<Connection, SeedError> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    Ok(conn)
}

fn configure(conn: &Connection) -> Result<(), SeedError> {
    conn.busy_timeout(std::time::Duration::from_secs(BUSY_TIMEOUT_SECS))?;
    // In-memory databases answer "memory" here; the row is read and ignored.
    conn.query_row("PRAGMA journal_mode=WAL;", [], |_| Ok(()))?;
    conn.execute("PRAGMA foreign_keys=ON;", [])?;
    Ok(())
}

pub fn initialize_hierarchy_db(conn: &Connection) -> Result<(), SeedError> {
    for stmt in schemas::HIERARCHY_DB_SCHEMA_ALL {
        conn.execute(stmt, [])?;
    }
    conn.execute(
        "INSERT INTO meta(key, value) VALUES('schema_version', ?1)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![schemas::HIERARCHY_SCHEMA_VERSION.to_string()],
    )?;
    Ok(())
}
