//! Partial-update merge for node metadata.
//!
//! Curated content is edited a few fields at a time, so a later seeding pass
//! that supplies only a subset of fields must not erase what is already stored.

use crate::core::model::Metadata;
use serde_json::Value;

/// Keys with this prefix carry version/sync bookkeeping and always take the incoming value.
pub const RESERVED_PREFIX: &str = "_";

pub fn is_reserved_key(key: &str) -> bool {
    key.starts_with(RESERVED_PREFIX)
}

/// Merge `incoming` into `existing`.
///
/// - no existing metadata: `incoming` verbatim
/// - reserved keys: always overwritten
/// - other keys: overwritten only by a value that is not null and not `""`
/// - keys only in `existing`: kept
pub fn merge_metadata(existing: Option<&Metadata>, incoming: &Metadata) -> Metadata {
    let Some(existing) = existing else {
        return incoming.clone();
    };

    let mut merged = existing.clone();
    for (key, value) in incoming {
        if is_reserved_key(key) || carries_content(value) {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Not null and not the empty string.
pub fn carries_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Copy of `metadata` with reserved keys dropped; used for change detection and fingerprints.
pub fn without_reserved(metadata: &Metadata) -> Metadata {
    metadata
        .iter()
        .filter(|(k, _)| !is_reserved_key(k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
