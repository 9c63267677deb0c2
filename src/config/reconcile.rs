//! Default-schema reconciliation
//!
//! Pure merge over two explicit mappings, independent of any persistence
//! mechanism, so it can be tested without touching the filesystem.

use serde_json::{Map, Value};

/// Merge a persisted record against the default schema.
///
/// Keys unknown to the schema are dropped, keys missing from the record are
/// filled with their defaults, and overlapping keys keep the persisted value.
pub fn reconcile(mut record: Map<String, Value>, defaults: &Map<String, Value>) -> Map<String, Value> {
    record.retain(|key, _| defaults.contains_key(key));
    for (key, fallback) in defaults {
        if !record.contains_key(key) {
            record.insert(key.clone(), fallback.clone());
        }
    }
    record
}
