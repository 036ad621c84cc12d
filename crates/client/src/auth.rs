//! Authentication strategies and token management.

use secrecy::{ExposeSecret, SecretString};

/// Strategy for authenticating with the backend.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// A token obtained beforehand; used as-is for every request.
    Token { token: SecretString },
    /// Username and password exchanged for a token through `/login`.
    Login {
        username: String,
        password: SecretString,
        allow_generate_token: bool,
    },
}

/// Holds the active backend token for the configured strategy.
#[derive(Debug)]
pub struct TokenManager {
    auth_strategy: AuthStrategy,
    token: Option<SecretString>,
}

impl TokenManager {
    /// Create a new token manager with the given auth strategy.
    pub fn new(strategy: AuthStrategy) -> Self {
        let token = match &strategy {
            AuthStrategy::Token { token } => Some(token.clone()),
            AuthStrategy::Login { .. } => None,
        };
        Self {
            auth_strategy: strategy,
            token,
        }
    }

    /// Get the current auth strategy.
    pub fn strategy(&self) -> &AuthStrategy {
        &self.auth_strategy
    }

    /// Check if we're using a pre-obtained token (no login needed).
    pub fn is_static_token(&self) -> bool {
        matches!(self.auth_strategy, AuthStrategy::Token { .. })
    }

    /// The token sent with backend requests, if one is available.
    pub fn token(&self) -> Option<&str> {
        self.token.as_ref().map(|t| t.expose_secret())
    }

    /// Store the token returned by a successful login.
    pub fn set_token(&mut self, token: String) {
        self.token = Some(SecretString::new(token.into()));
    }

    /// Forget a login token so the next request logs in again.
    ///
    /// Static tokens are kept; there is nothing to refresh them from.
    pub fn clear_token(&mut self) {
        if !self.is_static_token() {
            self.token = None;
        }
    }
}
