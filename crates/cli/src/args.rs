//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Turn `--option KEY=VALUE` pairs into a module option map.
//!
//! Non-responsibilities:
//! - Does not load configuration (see `main`); environment variables are
//!   read by the config loader, so flags here always win over them.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "alignak-backend-import")]
#[command(
    about = "Import the monitoring configuration from an Alignak backend",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  alignak-backend-import --api-url http://backend:5000 --token $TOKEN\n  alignak-backend-import -u admin -p admin --allow-generate-token --format cfg -o alignak.cfg\n  alignak-backend-import --option api_url=http://backend:5000 --option token=$TOKEN --format yaml\n"
)]
pub struct Cli {
    /// Base URL of the backend API (e.g., http://localhost:5000)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Backend token; when empty, username and password are used to log in
    #[arg(short, long)]
    pub token: Option<String>,

    /// Username for login
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password for login
    #[arg(short, long)]
    pub password: Option<String>,

    /// Ask the backend to generate a token if the user has none
    #[arg(long)]
    pub allow_generate_token: bool,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Maximum number of retries for transient failures
    #[arg(long)]
    pub max_retries: Option<usize>,

    /// Number of documents requested per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long)]
    pub skip_verify: bool,

    /// Module option as KEY=VALUE, as found in the arbiter module definition.
    ///
    /// May be repeated. Environment variables and the flags above override
    /// these.
    #[arg(long = "option", value_name = "KEY=VALUE", value_parser = parse_option)]
    pub options: Vec<(String, String)>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write the configuration to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Log line format (logs always go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    /// The `--option` pairs as a map; later pairs win.
    pub fn module_options(&self) -> HashMap<String, String> {
        self.options.iter().cloned().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    /// Monitoring engine object definitions
    Cfg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

fn parse_option(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty option name in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["alignak-backend-import"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.log_format, LogFormat::Text);
        assert!(cli.output.is_none());
        assert!(!cli.allow_generate_token);
    }

    #[test]
    fn test_module_options() {
        let cli = Cli::try_parse_from([
            "alignak-backend-import",
            "--option",
            "api_url=http://backend:5000",
            "--option",
            "token=a=b",
            "--option",
            "token=c",
        ])
        .unwrap();

        let options = cli.module_options();
        assert_eq!(options["api_url"], "http://backend:5000");
        assert_eq!(options["token"], "c");
    }

    #[test]
    fn test_option_requires_equals() {
        assert!(parse_option("token").is_err());
        assert!(parse_option("=value").is_err());
        assert_eq!(
            parse_option("password=").unwrap(),
            ("password".to_string(), String::new())
        );
    }

    #[test]
    fn test_format_values() {
        let cli = Cli::try_parse_from(["alignak-backend-import", "--format", "cfg"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Cfg);
        assert!(Cli::try_parse_from(["alignak-backend-import", "--format", "xml"]).is_err());
    }
}
