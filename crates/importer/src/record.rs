//! Raw backend documents, relation values and flattened records.

use alignak_backend_client::Document;
use serde_json::{Map, Value};

use crate::error::{ImportError, Result};
use crate::kind::ResourceKind;

/// A record ready for the monitoring engine: bookkeeping stripped, relations
/// resolved to names, sequences joined. Keys keep the backend order.
pub type FlatRecord = Map<String, Value>;

/// A document as the backend returned it, tagged with its kind.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    kind: ResourceKind,
    document: Document,
}

impl RawRecord {
    pub fn new(kind: ResourceKind, document: Document) -> Self {
        Self { kind, document }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The backend identifier (`_id`).
    pub fn id(&self) -> Result<&str> {
        self.string_field("_id")
    }

    /// The display name (`name`).
    pub fn name(&self) -> Result<&str> {
        self.string_field("name")
    }

    /// Both identity fields, cloned.
    pub fn identity(&self) -> Result<(String, String)> {
        Ok((self.id()?.to_string(), self.name()?.to_string()))
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    fn string_field(&self, field: &'static str) -> Result<&str> {
        self.document
            .get(field)
            .and_then(Value::as_str)
            .ok_or(ImportError::MissingField {
                kind: self.kind,
                field,
            })
    }
}

/// The value of a relation field.
///
/// The backend sends a bare identifier, the full related document when the
/// request asked for it to be embedded, a list of either, or null.
#[derive(Debug, Clone, PartialEq)]
pub enum RelationValue {
    Identifier(String),
    Embedded(Map<String, Value>),
    List(Vec<RelationValue>),
    Null,
}

impl RelationValue {
    /// Classify a raw field value. Numbers and booleans are kept as their
    /// JSON text, which never matches a backend identifier.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::String(id) => Self::Identifier(id.clone()),
            Value::Object(map) => Self::Embedded(map.clone()),
            Value::Array(items) => Self::List(items.iter().map(Self::from_value).collect()),
            other => Self::Identifier(other.to_string()),
        }
    }

    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier(id) => Some(id),
            _ => None,
        }
    }

    /// Identifiers in source order. A bare identifier counts as a one
    /// element list; embedded documents and nested lists yield nothing.
    pub fn identifiers(&self) -> Vec<&str> {
        match self {
            Self::Identifier(id) => vec![id.as_str()],
            Self::List(items) => items.iter().filter_map(Self::as_identifier).collect(),
            Self::Embedded(_) | Self::Null => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_identity_fields() {
        let record = RawRecord::new(
            ResourceKind::Host,
            document(json!({"_id": "5a1", "name": "srv01"})),
        );
        assert_eq!(
            record.identity().unwrap(),
            ("5a1".to_string(), "srv01".to_string())
        );
    }

    #[test]
    fn test_missing_name_is_reported_with_kind() {
        let record = RawRecord::new(ResourceKind::Contact, document(json!({"_id": "5a1"})));
        match record.identity() {
            Err(ImportError::MissingField { kind, field }) => {
                assert_eq!(kind, ResourceKind::Contact);
                assert_eq!(field, "name");
            }
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_non_string_id_is_missing() {
        let record = RawRecord::new(
            ResourceKind::Command,
            document(json!({"_id": 12, "name": "check_ping"})),
        );
        assert!(matches!(
            record.id(),
            Err(ImportError::MissingField { field: "_id", .. })
        ));
    }

    #[test]
    fn test_relation_value_classification() {
        assert_eq!(RelationValue::from_value(&Value::Null), RelationValue::Null);
        assert_eq!(
            RelationValue::from_value(&json!("id1")),
            RelationValue::Identifier("id1".to_string())
        );
        assert!(matches!(
            RelationValue::from_value(&json!({"_id": "id1", "name": "admin"})),
            RelationValue::Embedded(_)
        ));

        let list = RelationValue::from_value(&json!(["id1", {"_id": "id2"}, "id3"]));
        assert_eq!(list.identifiers(), ["id1", "id3"]);
    }

    #[test]
    fn test_bare_identifier_is_one_element_list() {
        let value = RelationValue::from_value(&json!("id1"));
        assert_eq!(value.identifiers(), ["id1"]);
        assert!(RelationValue::Null.identifiers().is_empty());
    }
}
