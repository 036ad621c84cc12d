//! Centralized constants for the backend import workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Backend Defaults
// =============================================================================

/// Default backend API URL used when `api_url` is not configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Marker written into the `imported_from` field of every imported object.
pub const IMPORTED_FROM: &str = "alignakbackend";

/// Prefix shared by all environment variables read by the loader.
pub const ENV_PREFIX: &str = "ALIGNAK_BACKEND_";

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default maximum number of retries for rate-limited or unavailable responses.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Default number of items requested per page (`max_results`).
pub const DEFAULT_PAGE_SIZE: u32 = 50;

// =============================================================================
// Configuration Bounds
// =============================================================================

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Maximum allowed retry count.
pub const MAX_MAX_RETRIES: usize = 10;

/// Maximum page size accepted by the backend.
pub const MAX_PAGE_SIZE: u32 = 1000;
