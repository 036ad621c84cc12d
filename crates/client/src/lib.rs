//! Alignak backend REST API client.
//!
//! This crate provides an async client for the Eve-based Alignak backend.
//! It supports pre-obtained tokens and username/password login with
//! optional token generation, and walks paginated resource collections.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::{AuthStrategy, TokenManager};
pub use client::BackendClient;
pub use client::builder::BackendClientBuilder;
pub use error::{ClientError, Result};
pub use models::{Document, EveError, ItemsPage, LoginResponse};
