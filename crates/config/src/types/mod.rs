//! Configuration type definitions for the backend import module.
//!
//! Responsibilities:
//! - Define the authentication strategies accepted by the backend.
//! - Define connection settings and the top-level `ModuleConfig`.
//!
//! Does NOT handle:
//! - Loading from option maps or environment variables (see `loader` module).
//! - Actual network connections or the login handshake (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

mod auth;
mod connection;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{ConnectionConfig, ModuleConfig};
