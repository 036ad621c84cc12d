//! Configuration loader for module options, environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load configuration from a plugin options map, `.env` files and environment variables.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Talking to the backend (see client crate).
//!
//! Invariants / Assumptions:
//! - Sources are applied in call order; later sources override earlier ones.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;
mod options;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
