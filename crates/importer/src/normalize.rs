//! Field normalization shared by every importer.
//!
//! Responsibilities:
//! - Strip the backend's bookkeeping fields.
//! - Join list values into the comma-separated form the engine reads.
//!
//! Does NOT handle:
//! - Resolving relations; lists are expected to hold names already.
//!
//! Invariants:
//! - The order of the remaining fields is the backend's order.
//! - Nested mappings are kept unchanged and reported at `warn`.

use serde_json::Value;
use tracing::warn;

use crate::kind::ResourceKind;
use crate::record::FlatRecord;

/// Backend bookkeeping fields the monitoring engine does not understand.
pub const BOOKKEEPING_FIELDS: [&str; 7] = ["_links", "_updated", "_created", "_etag", "_id", "name", "ui"];

/// Remove every bookkeeping field, keeping the order of the others.
pub fn strip_bookkeeping(record: &mut FlatRecord) {
    for field in BOOKKEEPING_FIELDS {
        record.shift_remove(field);
    }
}

/// Replace every list value with its comma-joined elements.
///
/// Elements are written the way the monitoring engine's own configuration
/// files spell them: strings as-is, booleans as `True`/`False`, null as
/// `None`, nested lists and mappings in their bracketed form. Mapping
/// values cannot be expressed in the flat format; they are kept and
/// reported.
pub fn join_sequences(record: &mut FlatRecord, kind: ResourceKind) {
    for (field, value) in record.iter_mut() {
        match value {
            Value::Array(items) => {
                let joined = items.iter().map(element_text).collect::<Vec<_>>().join(",");
                *value = Value::String(joined);
            }
            Value::Object(_) => {
                warn!(%kind, field = %field, "Nested mapping left in flattened record");
            }
            _ => {}
        }
    }
}

fn element_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => nested_text(other),
    }
}

fn nested_text(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(nested_text).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Object(map) => {
            let inner: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("'{}': {}", k, nested_text(v)))
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
    }
}
