//! Monitoring engine object definition formatter.
//!
//! Each record becomes a `define <kind> { ... }` block with one
//! `key value` line per field. Null and empty values are left out since the
//! engine treats an absent property the same way.

use std::fmt::Write;

use alignak_backend_import::{ConfigSet, FlatRecord, ResourceKind};
use anyhow::Result;
use serde_json::Value;

use crate::formatters::Formatter;

/// Object definition formatter.
pub struct CfgFormatter;

impl Formatter for CfgFormatter {
    fn format_config(&self, config: &ConfigSet) -> Result<String> {
        let mut output = String::new();
        for kind in ResourceKind::ALL {
            let records = config.records(kind);
            if records.is_empty() {
                continue;
            }
            writeln!(output, "# {} ({})", kind, records.len())?;
            for record in records {
                write_definition(&mut output, kind, record)?;
            }
        }
        Ok(output)
    }
}

fn write_definition(output: &mut String, kind: ResourceKind, record: &FlatRecord) -> Result<()> {
    let fields: Vec<(&String, String)> = record
        .iter()
        .filter_map(|(key, value)| property_text(value).map(|text| (key, text)))
        .collect();
    let width = fields.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

    writeln!(output, "define {} {{", kind.endpoint())?;
    for (key, text) in fields {
        writeln!(output, "    {key:<width$}    {text}")?;
    }
    writeln!(output, "}}")?;
    writeln!(output)?;
    Ok(())
}

fn property_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::tests::sample_config;

    #[test]
    fn test_cfg_definitions() {
        let output = CfgFormatter.format_config(&sample_config()).unwrap();

        assert!(output.contains("# commands (1)\ndefine command {\n"));
        assert!(output.contains("    command_name     check_ping\n"));
        assert!(output.contains("define host {\n"));
        assert!(output.contains("active_checks_enabled    1\n"));
        assert!(output.contains("max_check_attempts       3\n"));
        assert!(!output.contains("parents"));
        assert!(!output.contains("realm"));
        assert!(!output.contains("define service "));
    }

    #[test]
    fn test_cfg_empty_config() {
        let output = CfgFormatter.format_config(&ConfigSet::default()).unwrap();
        assert!(output.is_empty());
    }
}
