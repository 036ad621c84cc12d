//! Data models for backend API responses.
//!
//! The backend speaks the Eve REST dialect: collections come back as
//! `_items` pages with `_links` and `_meta`, and errors carry `_status`
//! and `_error`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A backend document, with keys in the order the backend sent them.
pub type Document = Map<String, Value>;

/// One page of a resource collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemsPage {
    #[serde(rename = "_items", default)]
    pub items: Vec<Document>,
    #[serde(rename = "_links", default)]
    pub links: Links,
    #[serde(rename = "_meta", default)]
    pub meta: Option<PageMeta>,
}

impl ItemsPage {
    /// Whether the backend advertises a following page.
    pub fn has_next(&self) -> bool {
        self.links.next.is_some()
    }
}

/// Navigation links of a collection page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub next: Option<Link>,
    #[serde(default)]
    pub last: Option<Link>,
    #[serde(default)]
    pub parent: Option<Link>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Pagination counters.
///
/// Every counter is optional: a backend tuned for pagination speed leaves
/// `total` out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub max_results: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
}

impl ItemsPage {
    /// Total documents in the collection, when the backend counts them.
    pub fn total(&self) -> Option<u64> {
        self.meta.as_ref().and_then(|m| m.total)
    }
}

/// Body returned by `POST /login`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Eve error envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct EveError {
    #[serde(rename = "_status")]
    pub status: String,
    #[serde(rename = "_error", default)]
    pub error: Option<EveErrorDetail>,
}

impl EveError {
    pub fn is_error(&self) -> bool {
        self.status == "ERR"
    }

    /// The human readable message, falling back to the status string.
    pub fn message(&self) -> String {
        self.error
            .as_ref()
            .map(|e| e.message.clone())
            .unwrap_or_else(|| self.status.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EveErrorDetail {
    #[serde(default)]
    pub code: Option<u16>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_items_page_keeps_document_key_order() {
        let body = json!({
            "_items": [{"_id": "5a1", "name": "check_ping", "command_line": "$USER1$/check_ping"}],
            "_links": {"next": {"href": "command?page=2", "title": "next page"}},
            "_meta": {"max_results": 1, "total": 2, "page": 1}
        });

        let page: ItemsPage = serde_json::from_value(body).unwrap();
        assert!(page.has_next());
        assert_eq!(page.total(), Some(2));

        let keys: Vec<&String> = page.items[0].keys().collect();
        assert_eq!(keys, ["_id", "name", "command_line"]);
    }

    #[test]
    fn test_items_page_without_links_is_last() {
        let page: ItemsPage = serde_json::from_value(json!({"_items": []})).unwrap();
        assert!(!page.has_next());
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_meta_without_total() {
        let page: ItemsPage = serde_json::from_value(json!({
            "_items": [{"_id": "5a1", "name": "check_ping"}],
            "_links": {"self": {"href": "command", "title": "command"}},
            "_meta": {"max_results": 50, "page": 1}
        }))
        .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total(), None);
        assert_eq!(page.meta.and_then(|m| m.page), Some(1));
    }

    #[test]
    fn test_eve_error_message() {
        let err: EveError = serde_json::from_value(json!({
            "_status": "ERR",
            "_error": {"code": 401, "message": "Please provide proper credentials"}
        }))
        .unwrap();
        assert!(err.is_error());
        assert_eq!(err.message(), "Please provide proper credentials");
    }
}
