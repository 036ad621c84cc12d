//! JSON formatter implementation.

use alignak_backend_import::ConfigSet;
use anyhow::Result;

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_config(&self, config: &ConfigSet) -> Result<String> {
        Ok(serde_json::to_string_pretty(config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::tests::sample_config;

    #[test]
    fn test_json_round_trips_config() {
        let config = sample_config();
        let output = JsonFormatter.format_config(&config).unwrap();
        let parsed: ConfigSet = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_keeps_field_order() {
        let output = JsonFormatter.format_config(&sample_config()).unwrap();
        let line = output.find("\"command_line\"").unwrap();
        let name = output.find("\"command_name\"").unwrap();
        assert!(line < name);
    }
}
