use crate::core::error::SeedError;
use crate::core::time;
use rusqlite::{Connection, Transaction};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The DB Broker is the single path to the hierarchy database.
///
/// It owns the run's one connection, names every operation, traces it, and
/// optionally appends an audit line per operation to a JSONL file.
pub struct DbBroker {
    conn: Connection,
    actor: String,
    audit_log_path: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BrokerEvent {
    pub ts: String,
    pub event_id: String,
    pub actor: String,
    pub op: String,
    pub status: String,
}

impl DbBroker {
    pub fn new(conn: Connection, actor: &str) -> Self {
        Self {
            conn,
            actor: actor.to_string(),
            audit_log_path: None,
        }
    }

    pub fn with_audit_log(mut self, path: &Path) -> Self {
        self.audit_log_path = Some(path.to_path_buf());
        self
    }

    /// Execute a closure against the broker's connection.
    pub fn with_conn<F, R>(&self, op_name: &str, f: F) -> Result<R, SeedError>
    where
        F: FnOnce(&Connection) -> Result<R, SeedError>,
    {
        let result = f(&self.conn);
        self.record(op_name, &result);
        result
    }

    /// Execute a closure inside a transaction; commits only if it returns Ok.
    pub fn with_tx<F, R>(&self, op_name: &str, f: F) -> Result<R, SeedError>
    where
        F: FnOnce(&Transaction<'_>) -> Result<R, SeedError>,
    {
        let result = (|| {
            let tx = self.conn.unchecked_transaction()?;
            let value = f(&tx)?;
            tx.commit()?;
            Ok(value)
        })();
        self.record(op_name, &result);
        result
    }

    /// Release the connection at the end of a run.
    pub fn close(self) -> Result<(), SeedError> {
        self.conn.close().map_err(|(_, e)| SeedError::from(e))
    }

    /// Trace `op` and append its audit line. An audit failure is logged and
    /// never replaces the operation's own result.
    fn record<R>(&self, op: &str, result: &Result<R, SeedError>) {
        let status = match result {
            Ok(_) => "success",
            Err(e) => e.kind(),
        };
        tracing::trace!(actor = %self.actor, op, status, "store op");

        let Some(path) = &self.audit_log_path else {
            return;
        };
        let ev = BrokerEvent {
            ts: time::seed_stamp(),
            event_id: time::new_event_id(),
            actor: self.actor.clone(),
            op: op.to_string(),
            status: status.to_string(),
        };
        if let Err(e) = append_event(path, &ev) {
            tracing::warn!(path = %path.display(), op, error = %e, "audit log write failed");
        }
    }
}

fn append_event(path: &Path, ev: &BrokerEvent) -> Result<(), SeedError> {
    let mut f = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(f, "{}", serde_json::to_string(ev)?)?;
    Ok(())
}
