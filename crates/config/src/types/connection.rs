//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout, retries, paging).
//! - Define the main `ModuleConfig` structure combining connection and auth.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `loader` module).

use crate::types::auth::AuthConfig;
use std::time::Duration;

/// Connection configuration for the Alignak backend.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the backend API (e.g., http://localhost:5000)
    pub api_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retries for 429/502/503/504 responses
    pub max_retries: usize,
    /// Number of items requested per page
    pub page_size: u32,
}

/// Main configuration structure for the import module.
#[derive(Debug, Clone)]
pub struct ModuleConfig {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}
