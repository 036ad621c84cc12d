//! Client builder for constructing [`BackendClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, auth_strategy)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # Invariants
//! - `base_url` and `auth_strategy` must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use alignak_backend_config::{
    AuthStrategy as ConfigAuthStrategy, ModuleConfig,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_RETRIES, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS},
};

use crate::auth::{AuthStrategy, TokenManager};
use crate::client::BackendClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`BackendClient`].
///
/// # Example
///
/// ```rust,ignore
/// use alignak_backend_client::{AuthStrategy, BackendClient};
/// use secrecy::SecretString;
///
/// let client = BackendClient::builder()
///     .base_url("http://localhost:5000".to_string())
///     .auth_strategy(AuthStrategy::Token {
///         token: SecretString::new("my-token".to_string().into()),
///     })
///     .page_size(100)
///     .build()?;
/// ```
pub struct BackendClientBuilder {
    base_url: Option<String>,
    auth_strategy: Option<AuthStrategy>,
    skip_verify: bool,
    timeout: Duration,
    max_retries: usize,
    page_size: u32,
}

impl Default for BackendClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_strategy: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl BackendClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the backend API, e.g. `http://localhost:5000`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the authentication strategy.
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against backends with self-signed certificates you
    /// control.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of retries for transient failures. `0` disables retries.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the number of documents requested per page.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Create a client builder from the module configuration.
    pub fn from_config(mut self, config: &ModuleConfig) -> Self {
        let auth_strategy = match &config.auth.strategy {
            ConfigAuthStrategy::Token { token } => AuthStrategy::Token {
                token: token.clone(),
            },
            ConfigAuthStrategy::Login {
                username,
                password,
                allow_generate_token,
            } => AuthStrategy::Login {
                username: username.clone(),
                password: password.clone(),
                allow_generate_token: *allow_generate_token,
            },
        };

        self.base_url = Some(config.connection.api_url.clone());
        self.auth_strategy = Some(auth_strategy);
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries;
        self.page_size = config.connection.page_size;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`BackendClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::AuthFailed`] if `auth_strategy` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<BackendClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let auth_strategy = self
            .auth_strategy
            .ok_or_else(|| ClientError::AuthFailed("auth_strategy is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(BackendClient {
            http,
            base_url,
            token_manager: TokenManager::new(auth_strategy),
            max_retries: self.max_retries,
            page_size: self.page_size,
        })
    }
}
