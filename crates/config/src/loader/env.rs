//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `ALIGNAK_BACKEND_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use super::options::parse_flag;
use crate::constants::ENV_PREFIX;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn prefixed(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(&prefixed("API_URL")) {
        loader.set_api_url(Some(url));
    }
    if let Some(token) = env_var_or_none(&prefixed("TOKEN")) {
        loader.set_token(Some(SecretString::new(token.into())));
    }
    if let Some(username) = env_var_or_none(&prefixed("USERNAME")) {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none(&prefixed("PASSWORD")) {
        loader.set_password(Some(SecretString::new(password.into())));
    }

    let var = prefixed("ALLOW_GENERATE_TOKEN");
    if let Some(raw) = env_var_or_none(&var) {
        let value = parse_flag(&raw).ok_or_else(|| ConfigError::invalid(&var, "must be true or false"))?;
        loader.set_allow_generate_token(Some(value));
    }

    let var = prefixed("SKIP_VERIFY");
    if let Some(raw) = env_var_or_none(&var) {
        let value = parse_flag(&raw).ok_or_else(|| ConfigError::invalid(&var, "must be true or false"))?;
        loader.set_skip_verify(Some(value));
    }

    let var = prefixed("TIMEOUT");
    if let Some(raw) = env_var_or_none(&var) {
        let secs: u64 = raw
            .parse()
            .map_err(|_| ConfigError::invalid(&var, "must be a number"))?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }

    let var = prefixed("MAX_RETRIES");
    if let Some(raw) = env_var_or_none(&var) {
        let retries: usize = raw
            .parse()
            .map_err(|_| ConfigError::invalid(&var, "must be a non-negative integer"))?;
        loader.set_max_retries(Some(retries));
    }

    let var = prefixed("PAGE_SIZE");
    if let Some(raw) = env_var_or_none(&var) {
        let size: u32 = raw
            .parse()
            .map_err(|_| ConfigError::invalid(&var, "must be a positive integer"))?;
        loader.set_page_size(Some(size));
    }

    Ok(())
}
