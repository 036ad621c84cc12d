//! Authentication types for the backend import configuration.
//!
//! Responsibilities:
//! - Define authentication strategies (pre-obtained token, login).
//!
//! Does NOT handle:
//! - The login handshake itself (see client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.

use secrecy::SecretString;

/// Strategy for authenticating with the Alignak backend.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// A token obtained beforehand; no login round-trip is needed.
    Token { token: SecretString },
    /// Username and password exchanged for a token at startup.
    Login {
        username: String,
        password: SecretString,
        /// Ask the backend to generate a token when the user has none yet.
        allow_generate_token: bool,
    },
}

/// Authentication configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    pub strategy: AuthStrategy,
}
