//! Per-kind collection importers.
//!
//! Every importer turns the raw documents of one collection into flattened
//! records using the lookup tables of the collections imported before it.
//!
//! Responsibilities:
//! - Tag records with `imported_from` and copy the name into the kind's
//!   name field.
//! - Apply each kind's field policy, then normalize.
//! - Build the lookup table of every referenceable kind.
//!
//! Does NOT handle:
//! - Fetching documents or ordering the run (see `session`).
//!
//! Invariants:
//! - Records come out in the order the backend returned them.

pub(crate) mod commands;
pub(crate) mod contactgroups;
pub(crate) mod contacts;
pub(crate) mod hostgroups;
pub(crate) mod hosts;
pub(crate) mod servicegroups;
pub(crate) mod services;
pub(crate) mod timeperiods;

use alignak_backend_config::constants::IMPORTED_FROM;
use serde_json::Value;

use crate::error::Result;
use crate::kind::ResourceKind;
use crate::lookup::LookupTable;
use crate::normalize::{join_sequences, strip_bookkeeping};
use crate::record::{FlatRecord, RawRecord};

/// Output of a referenceable collection's importer.
#[derive(Debug)]
pub(crate) struct Imported {
    pub(crate) table: LookupTable,
    pub(crate) records: Vec<FlatRecord>,
}

/// Tag the record with its origin and copy its name into the kind's name
/// field.
pub(crate) fn begin(raw: RawRecord) -> Result<FlatRecord> {
    let kind = raw.kind();
    let name = raw.name()?.to_string();
    let mut record = raw.into_document();
    record.insert(
        "imported_from".to_string(),
        Value::String(IMPORTED_FROM.to_string()),
    );
    record.insert(kind.name_field().to_string(), Value::String(name));
    Ok(record)
}

/// Strip bookkeeping and join sequences.
pub(crate) fn finish(mut record: FlatRecord, kind: ResourceKind) -> FlatRecord {
    strip_bookkeeping(&mut record);
    join_sequences(&mut record, kind);
    record
}

/// Set a field to `""`, keeping its position when it already exists.
pub(crate) fn blank(record: &mut FlatRecord, field: &str) {
    record.insert(field.to_string(), Value::String(String::new()));
}

/// Remove `field` when `predicate` holds for its value.
pub(crate) fn drop_if(record: &mut FlatRecord, field: &str, predicate: impl Fn(&Value) -> bool) {
    if record.get(field).is_some_and(predicate) {
        record.shift_remove(field);
    }
}

pub(crate) fn is_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(str::is_empty)
}

/// Text of a `check_command_args` value. Null is empty.
pub(crate) fn args_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
