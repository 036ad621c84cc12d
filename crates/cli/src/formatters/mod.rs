//! Output formatters for the imported configuration.
//!
//! Responsibilities:
//! - Render a [`ConfigSet`] as JSON, YAML or monitoring engine object
//!   definitions.
//! - Write the rendered text to a file or stdout.
//!
//! Invariants:
//! - Collections and fields keep the order the backend returned them in.

use std::io::Write;
use std::path::Path;

use alignak_backend_import::ConfigSet;
use anyhow::{Context, Result};

use crate::args::OutputFormat;

mod cfg;
mod json;
mod yaml;

pub use cfg::CfgFormatter;
pub use json::JsonFormatter;
pub use yaml::YamlFormatter;

/// Formatter trait for the output formats.
pub trait Formatter {
    fn format_config(&self, config: &ConfigSet) -> Result<String>;
}

/// Get a formatter for the given output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
        OutputFormat::Cfg => Box::new(CfgFormatter),
    }
}

/// Write `content` to `path`, or to stdout when no path is given.
pub fn output_result(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            tracing::info!(path = %path.display(), "Configuration written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .context("Failed to write output to stdout")?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
