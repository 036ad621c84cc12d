//! YAML formatter implementation.

use alignak_backend_import::ConfigSet;
use anyhow::Result;

use crate::formatters::Formatter;

/// YAML formatter.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format_config(&self, config: &ConfigSet) -> Result<String> {
        Ok(serde_yaml::to_string(config)?)
    }
}
