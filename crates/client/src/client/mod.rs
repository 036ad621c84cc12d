//! Main backend REST API client.
//!
//! This module provides [`BackendClient`], which authenticates against the
//! backend and walks its paginated resource collections.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Login and token handling (private module)
//! - `resources`: Resource collection fetches (private module)
//!
//! # Invariants
//! - A 401 on a resource fetch triggers exactly one re-login and retry, and
//!   only for the login strategy; pre-obtained tokens fail with
//!   [`crate::ClientError::Unauthorized`].

pub mod builder;
mod resources;
mod session;

use crate::auth::TokenManager;

/// Backend REST API client.
#[derive(Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    token_manager: TokenManager,
    max_retries: usize,
    page_size: u32,
}

impl BackendClient {
    /// Create a new client builder.
    pub fn builder() -> builder::BackendClientBuilder {
        builder::BackendClientBuilder::new()
    }

    /// Get the base URL of the backend API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of documents requested per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Retries applied to transient HTTP failures.
    pub fn max_retries(&self) -> usize {
        self.max_retries
    }
}
