//! Configuration management for the Alignak backend import module.
//!
//! This crate provides the module option types and the loader that merges
//! them from a plugin options map, environment variables, `.env` files and
//! explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, AuthStrategy, ConnectionConfig, ModuleConfig};
