//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Support loading from module options, environment variables and direct builder methods.
//! - Validate and build the final `ModuleConfig`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Module option parsing logic (delegated to options.rs).
//!
//! Invariants / Assumptions:
//! - Each source only overrides values it actually provides.
//! - A non-empty token always wins over login credentials.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::options::apply_options;
use crate::constants::{
    DEFAULT_API_URL, DEFAULT_MAX_RETRIES, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS, MAX_MAX_RETRIES,
    MAX_PAGE_SIZE, MAX_TIMEOUT_SECS,
};
use crate::types::{AuthConfig, AuthStrategy, ConnectionConfig, ModuleConfig};

/// Configuration loader that builds config from module options and the environment.
#[derive(Default)]
pub struct ConfigLoader {
    api_url: Option<String>,
    token: Option<SecretString>,
    username: Option<String>,
    password: Option<SecretString>,
    allow_generate_token: Option<bool>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
    page_size: Option<u32>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from the module's option map.
    pub fn from_module_options(
        mut self,
        options: &HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        apply_options(&mut self, options)?;
        Ok(self)
    }

    /// Read configuration from `ALIGNAK_BACKEND_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the backend API URL.
    pub fn with_api_url(mut self, url: String) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Set a pre-obtained token.
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(SecretString::new(token.into()));
        self
    }

    /// Set the login username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the login password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Allow the backend to generate a token for the login user.
    pub fn with_allow_generate_token(mut self, allow: bool) -> Self {
        self.allow_generate_token = Some(allow);
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Set the page size used when listing resources.
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<ModuleConfig, ConfigError> {
        let api_url = validate_and_normalize_api_url(
            self.api_url.as_deref().unwrap_or(DEFAULT_API_URL),
        )?;

        let token = self.token.filter(|t| !t.expose_secret().trim().is_empty());
        let strategy = match token {
            Some(token) => AuthStrategy::Token { token },
            None => {
                let username = self
                    .username
                    .filter(|u| !u.trim().is_empty())
                    .ok_or(ConfigError::MissingAuth)?;
                AuthStrategy::Login {
                    username,
                    password: self
                        .password
                        .unwrap_or_else(|| SecretString::new(String::new().into())),
                    allow_generate_token: self.allow_generate_token.unwrap_or(false),
                }
            }
        };

        let connection = ConnectionConfig {
            api_url,
            skip_verify: self.skip_verify.unwrap_or(false),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        };

        Self::validate_connection(&connection)?;

        Ok(ModuleConfig {
            connection,
            auth: AuthConfig { strategy },
        })
    }

    /// Validates transport bounds: timeout, retry count and page size.
    fn validate_connection(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }
        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        if connection.max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!(
                    "must be between 0 and {} (got {})",
                    MAX_MAX_RETRIES, connection.max_retries
                ),
            });
        }

        if connection.page_size == 0 || connection.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidPageSize {
                message: format!(
                    "must be between 1 and {} (got {})",
                    MAX_PAGE_SIZE, connection.page_size
                ),
            });
        }

        Ok(())
    }

    // Internal setters for use by other loader modules

    pub(crate) fn set_api_url(&mut self, url: Option<String>) {
        self.api_url = url;
    }

    pub(crate) fn set_token(&mut self, token: Option<SecretString>) {
        self.token = token;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_allow_generate_token(&mut self, allow: Option<bool>) {
        self.allow_generate_token = allow;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_max_retries(&mut self, retries: Option<usize>) {
        self.max_retries = retries;
    }

    pub(crate) fn set_page_size(&mut self, size: Option<u32>) {
        self.page_size = size;
    }
}

/// Validates and normalizes the backend API URL.
///
/// Validation rules:
/// - Trim surrounding whitespace; blank is `MissingApiUrl`
/// - Parse as an absolute URL with an http or https scheme and a host
/// - Normalize by stripping trailing slashes
fn validate_and_normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingApiUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "api_url".into(),
        message: format!("must be an absolute http(s) URL (e.g. http://localhost:5000): {e}"),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "api_url".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "api_url".into(),
            message: "host is required (e.g. http://localhost:5000)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
