//! Error types for the import pipeline.

use alignak_backend_client::ClientError;
use thiserror::Error;

use crate::kind::ResourceKind;

/// Result type alias for import operations.
pub type Result<T> = std::result::Result<T, ImportError>;

/// Errors that abort an import run.
///
/// Unresolvable references are not errors; they are dropped or left as-is
/// by the flattener.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Fetching a collection from the backend failed.
    #[error("Failed to fetch {kind} from the backend")]
    Fetch {
        kind: ResourceKind,
        #[source]
        source: ClientError,
    },

    /// A document lacks its identity field.
    #[error("{kind} document has no string `{field}` field")]
    MissingField {
        kind: ResourceKind,
        field: &'static str,
    },

    /// A contact needs a default notification period but no timeperiod exists.
    #[error("Contact '{contact}' has no {field} and no timeperiod was imported to default to")]
    NoDefaultTimeperiod { contact: String, field: &'static str },

    /// A document has a shape the importer cannot reshape.
    #[error("Invalid {kind} document '{name}': {reason}")]
    InvalidRecord {
        kind: ResourceKind,
        name: String,
        reason: String,
    },
}

impl ImportError {
    /// The client error behind a failed fetch, if any.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Fetch { source, .. } => Some(source),
            _ => None,
        }
    }
}
