//! Seed stamps, event ids and the CLI JSON envelope.

use serde_json::{Map, Value, json};
use std::time::{SystemTime, UNIX_EPOCH};
use ulid::Ulid;

/// Stamp for reserved bookkeeping keys (`_seededAt`, `_lastSynced`, ...).
pub fn seed_stamp() -> String {
    stamp_at(SystemTime::now())
}

/// Unix-epoch seconds with a `Z` suffix, e.g. `1771220592Z`. Times before the
/// epoch clamp to `0Z`.
pub fn stamp_at(at: SystemTime) -> String {
    let secs = at.duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
    format!("{}Z", secs)
}

pub fn new_event_id() -> String {
    Ulid::new().to_string()
}

/// `--format json` response: fixed header fields, then the keys of `payload`.
/// Header fields win over payload keys of the same name.
pub fn command_envelope(cmd: &str, status: &str, payload: Value) -> Value {
    let mut out = match payload {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            let mut m = Map::new();
            m.insert("result".into(), other);
            m
        }
    };
    let header = json!({
        "envelope_version": "1.0.0",
        "tool": env!("CARGO_PKG_NAME"),
        "ts": seed_stamp(),
        "event_id": new_event_id(),
        "cmd": cmd,
        "status": status,
    });
    if let Value::Object(header) = header {
        out.extend(header);
    }
    Value::Object(out)
}
