//! Where raw collections come from.

use std::collections::HashMap;
use std::future::Future;

use alignak_backend_client::{BackendClient, ClientError, Document};

use crate::kind::ResourceKind;

/// A provider of whole backend collections.
///
/// The import session asks for one kind at a time, in import order, and
/// waits for each answer before asking for the next.
pub trait ResourceSource {
    /// Fetch every document of `kind`, in backend order.
    fn fetch_all(
        &mut self,
        kind: ResourceKind,
    ) -> impl Future<Output = Result<Vec<Document>, ClientError>> + Send;
}

impl ResourceSource for BackendClient {
    async fn fetch_all(&mut self, kind: ResourceKind) -> Result<Vec<Document>, ClientError> {
        self.get_all(kind.endpoint(), kind.fetch_params()).await
    }
}

/// Collections held in memory, for embedding and tests.
///
/// Kinds without documents yield an empty collection. Every request is
/// recorded so callers can check the fetch order.
#[derive(Debug, Default)]
pub struct MemorySource {
    collections: HashMap<ResourceKind, Vec<Document>>,
    failures: HashMap<ResourceKind, u16>,
    requested: Vec<ResourceKind>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `documents` for `kind`.
    pub fn with(mut self, kind: ResourceKind, documents: Vec<Document>) -> Self {
        self.collections.insert(kind, documents);
        self
    }

    /// Answer requests for `kind` with an API error of the given status.
    pub fn with_failure(mut self, kind: ResourceKind, status: u16) -> Self {
        self.failures.insert(kind, status);
        self
    }

    /// Kinds requested so far, in request order.
    pub fn requested(&self) -> &[ResourceKind] {
        &self.requested
    }
}

impl ResourceSource for MemorySource {
    async fn fetch_all(&mut self, kind: ResourceKind) -> Result<Vec<Document>, ClientError> {
        self.requested.push(kind);
        if let Some(&status) = self.failures.get(&kind) {
            return Err(ClientError::ApiError {
                status,
                url: format!("memory://{}", kind.endpoint()),
                message: format!("{} unavailable", kind.endpoint()),
            });
        }
        Ok(self.collections.get(&kind).cloned().unwrap_or_default())
    }
}
