//! Module option parsing.
//!
//! The arbiter hands each module a flat set of named options taken from its
//! `define module { ... }` block. Only the keys below are meaningful here;
//! everything else (`module_name`, `module_type`, ...) is ignored.

use secrecy::SecretString;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

use super::builder::ConfigLoader;
use super::error::ConfigError;

const OPTION_KEYS: &[&str] = &[
    "api_url",
    "token",
    "username",
    "password",
    "allowgeneratetoken",
    "skip_verify",
    "timeout",
    "max_retries",
    "page_size",
];

/// Parse a boolean option the way module configuration files spell them.
pub(crate) fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn non_blank(options: &HashMap<String, String>, key: &str) -> Option<String> {
    options
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Apply a module options map to the loader.
///
/// Blank values are treated as unset, so an empty `token` falls through to
/// the login credentials.
pub fn apply_options(
    loader: &mut ConfigLoader,
    options: &HashMap<String, String>,
) -> Result<(), ConfigError> {
    for key in options.keys() {
        if !OPTION_KEYS.contains(&key.as_str()) {
            debug!(option = %key, "Ignoring module option not used by the backend import");
        }
    }

    if let Some(url) = non_blank(options, "api_url") {
        loader.set_api_url(Some(url));
    }
    if let Some(token) = non_blank(options, "token") {
        loader.set_token(Some(SecretString::new(token.into())));
    }
    if let Some(username) = non_blank(options, "username") {
        loader.set_username(Some(username));
    }
    // Passwords are taken verbatim, an empty one is still a password.
    if let Some(password) = options.get("password") {
        loader.set_password(Some(SecretString::new(password.clone().into())));
    }
    if let Some(raw) = non_blank(options, "allowgeneratetoken") {
        let value = parse_flag(&raw)
            .ok_or_else(|| ConfigError::invalid("allowgeneratetoken", "must be a boolean"))?;
        loader.set_allow_generate_token(Some(value));
    }
    if let Some(raw) = non_blank(options, "skip_verify") {
        let value =
            parse_flag(&raw).ok_or_else(|| ConfigError::invalid("skip_verify", "must be a boolean"))?;
        loader.set_skip_verify(Some(value));
    }
    if let Some(raw) = non_blank(options, "timeout") {
        let secs: u64 = raw
            .parse()
            .map_err(|_| ConfigError::invalid("timeout", "must be a number of seconds"))?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(raw) = non_blank(options, "max_retries") {
        let retries: usize = raw
            .parse()
            .map_err(|_| ConfigError::invalid("max_retries", "must be a non-negative integer"))?;
        loader.set_max_retries(Some(retries));
    }
    if let Some(raw) = non_blank(options, "page_size") {
        let size: u32 = raw
            .parse()
            .map_err(|_| ConfigError::invalid("page_size", "must be a positive integer"))?;
        loader.set_page_size(Some(size));
    }

    Ok(())
}
