//! Alignak backend import - fetch the monitoring configuration from an
//! Alignak backend and write it as JSON, YAML or object definitions.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build the module configuration and an authenticated backend client.
//! - Run the import and hand the result to a formatter.
//!
//! Does NOT handle:
//! - REST calls or pagination (see `crates/client`).
//! - Relation flattening (see `crates/importer`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values are visible
//!   to the config loader.
//! - Logs go to stderr; stdout only carries the configuration.

mod args;
mod error;
mod formatters;

use std::time::Duration;

use alignak_backend_client::BackendClient;
use alignak_backend_config::{ConfigLoader, ModuleConfig};
use alignak_backend_import::import_configuration;
use anyhow::{Context, Result};
use args::{Cli, LogFormat};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();
    init_tracing(cli.log_format);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;

    let mut client = BackendClient::builder()
        .from_config(&config)
        .build()
        .context("Failed to create backend client")?;
    client
        .authenticate()
        .await
        .context("Failed to authenticate with the backend")?;

    let imported = import_configuration(&mut client)
        .await
        .context("Failed to import configuration")?;
    if imported.is_empty() {
        tracing::warn!(api_url = %config.connection.api_url, "Backend holds no configuration objects");
    }

    let formatter = formatters::get_formatter(cli.format);
    let output = formatter.format_config(&imported)?;
    formatters::output_result(&output, cli.output.as_deref())
}

/// Module options first, then environment variables, then flags.
fn build_config(cli: &Cli) -> Result<ModuleConfig> {
    let mut loader = ConfigLoader::new()
        .from_module_options(&cli.module_options())
        .context("Invalid module option")?
        .from_env()
        .context("Failed to load configuration from environment")?;

    if let Some(ref url) = cli.api_url {
        loader = loader.with_api_url(url.clone());
    }
    if let Some(ref token) = cli.token {
        loader = loader.with_token(token.clone());
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(password.clone());
    }
    if cli.allow_generate_token {
        loader = loader.with_allow_generate_token(true);
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if let Some(retries) = cli.max_retries {
        loader = loader.with_max_retries(retries);
    }
    if let Some(size) = cli.page_size {
        loader = loader.with_page_size(size);
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    loader.build().context("Failed to build configuration")
}
