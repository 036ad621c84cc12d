//! Relation flattening: identifiers in, names out.
//!
//! Responsibilities:
//! - Replace single-valued relations with the referenced record's name.
//! - Replace list-valued relations with the comma-joined names.
//!
//! Does NOT handle:
//! - Building the lookup tables (see `lookup`).
//! - Per-kind defaults for relations that did not resolve (see `importers`).
//!
//! Invariants:
//! - Absent fields are never added.
//! - Embedded documents never resolve; they are logged at `debug`.

use serde_json::Value;
use tracing::debug;

use crate::lookup::LookupTable;
use crate::record::{FlatRecord, RelationValue};

/// Replace a single-valued relation with the referenced name.
///
/// Absent and null fields are left alone, and so is a value the table does
/// not know, including an embedded document.
pub fn resolve_single(record: &mut FlatRecord, field: &str, table: &LookupTable) {
    let Some(value) = record.get_mut(field) else {
        return;
    };
    match RelationValue::from_value(value) {
        RelationValue::Identifier(id) => match table.resolve(&id) {
            Some(name) => *value = Value::String(name.to_string()),
            None => debug!(field, id = %id, "Unknown relation identifier"),
        },
        RelationValue::Embedded(_) => debug!(field, "Embedded relation left unresolved"),
        _ => {}
    }
}

/// Replace a list-valued relation with the comma-joined referenced names.
///
/// Unknown identifiers and embedded documents are dropped. A bare
/// identifier is treated as a one element list and null becomes `""`.
/// Absent fields are left alone.
pub fn resolve_multi(record: &mut FlatRecord, field: &str, table: &LookupTable) {
    let Some(value) = record.get_mut(field) else {
        return;
    };
    let relation = RelationValue::from_value(value);
    let names: Vec<&str> = relation
        .identifiers()
        .into_iter()
        .filter_map(|id| {
            let name = table.resolve(id);
            if name.is_none() {
                debug!(field, id, "Unknown relation identifier");
            }
            name
        })
        .collect();
    *value = Value::String(names.join(","));
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn flat(value: Value) -> FlatRecord {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    fn timeperiods() -> LookupTable {
        [("id1", "admin"), ("id2", "24x7")].into_iter().collect()
    }

    #[test]
    fn test_single_known_identifier() {
        let mut record = flat(json!({"host_notification_period": "id1"}));
        resolve_single(&mut record, "host_notification_period", &timeperiods());
        assert_eq!(record, flat(json!({"host_notification_period": "admin"})));
    }

    #[test]
    fn test_single_unknown_identifier_is_untouched() {
        let mut record = flat(json!({"check_period": "idX"}));
        resolve_single(&mut record, "check_period", &timeperiods());
        assert_eq!(record["check_period"], "idX");
    }

    #[test]
    fn test_single_null_and_absent_are_untouched() {
        let mut record = flat(json!({"check_period": null}));
        resolve_single(&mut record, "check_period", &timeperiods());
        resolve_single(&mut record, "notification_period", &timeperiods());
        assert_eq!(record, flat(json!({"check_period": null})));
    }

    #[test]
    fn test_single_embedded_document_is_left_unresolved() {
        let embedded = json!({"_id": "id1", "name": "admin"});
        let mut record = flat(json!({"check_period": embedded.clone()}));
        resolve_single(&mut record, "check_period", &timeperiods());
        assert_eq!(record["check_period"], embedded);
    }

    #[test]
    fn test_multi_joins_known_names_in_order() {
        let mut record = flat(json!({"contacts": ["id2", "idX", "id1"]}));
        resolve_multi(&mut record, "contacts", &timeperiods());
        assert_eq!(record["contacts"], "24x7,admin");
    }

    #[test]
    fn test_multi_drops_embedded_documents() {
        let mut record = flat(json!({"contacts": [{"_id": "id1", "name": "admin"}, "id2"]}));
        resolve_multi(&mut record, "contacts", &timeperiods());
        assert_eq!(record["contacts"], "24x7");
    }

    #[test]
    fn test_multi_bare_identifier_and_null() {
        let mut record = flat(json!({"contacts": "id1", "contact_groups": null}));
        resolve_multi(&mut record, "contacts", &timeperiods());
        resolve_multi(&mut record, "contact_groups", &timeperiods());
        assert_eq!(record, flat(json!({"contacts": "admin", "contact_groups": ""})));
    }

    #[test]
    fn test_multi_absent_field_is_not_added() {
        let mut record = flat(json!({}));
        resolve_multi(&mut record, "contacts", &timeperiods());
        assert!(record.is_empty());
    }

    proptest! {
        #[test]
        fn prop_multi_keeps_exactly_the_known_ids(
            known in proptest::collection::btree_map("[a-f0-9]{8}", "[a-z]{1,10}", 0..8),
            unknown in proptest::collection::vec("[g-z]{8}", 0..8),
        ) {
            let table: LookupTable = known.clone().into_iter().collect();
            let ids: Vec<String> = known.keys().cloned().chain(unknown).collect();
            let mut record = flat(json!({"members": ids}));

            resolve_multi(&mut record, "members", &table);

            let expected: Vec<&str> = known.values().map(String::as_str).collect();
            let joined = expected.join(",");
            prop_assert_eq!(record["members"].as_str(), Some(joined.as_str()));
        }

        #[test]
        fn prop_single_never_changes_unknown_values(id in "[g-z]{1,12}") {
            let mut record = flat(json!({"host_name": id.clone()}));
            resolve_single(&mut record, "host_name", &timeperiods());
            prop_assert_eq!(record["host_name"].as_str(), Some(id.as_str()));
        }
    }
}
