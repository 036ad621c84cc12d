//! Services: check command, host, periods, groups and contacts.
//!
//! Services are never referenced, so no lookup table is built for them.

use serde_json::Value;

use super::{args_text, begin, blank, drop_if, finish, is_empty_string};
use crate::error::Result;
use crate::flatten::{resolve_multi, resolve_single};
use crate::kind::ResourceKind;
use crate::lookup::{LookupTable, LookupTables};
use crate::record::{FlatRecord, RawRecord, RelationValue};

pub(crate) fn import(records: Vec<RawRecord>, tables: &LookupTables) -> Result<Vec<FlatRecord>> {
    records
        .into_iter()
        .map(|raw| {
            raw.id()?;
            flatten(raw, tables)
        })
        .collect()
}

fn flatten(raw: RawRecord, tables: &LookupTables) -> Result<FlatRecord> {
    let mut record = begin(raw)?;

    resolve_check_command(&mut record, &tables.commands);
    resolve_single(&mut record, "host_name", &tables.hosts);
    resolve_single(&mut record, "check_period", &tables.timeperiods);
    resolve_single(&mut record, "notification_period", &tables.timeperiods);
    resolve_single(&mut record, "maintenance_period", &tables.timeperiods);
    resolve_multi(&mut record, "servicegroups", &tables.servicegroups);
    resolve_multi(&mut record, "contacts", &tables.contacts);
    resolve_multi(&mut record, "contact_groups", &tables.contactgroups);

    drop_if(&mut record, "escalation", is_empty_string);
    blank(&mut record, "service_dependencies");
    drop_if(&mut record, "alias", is_empty_string);

    Ok(finish(record, ResourceKind::Service))
}

/// A service's check command is removed when null or unknown. When
/// arguments are present they are always appended: after a `!` if a
/// command resolved, on their own otherwise.
fn resolve_check_command(record: &mut FlatRecord, commands: &LookupTable) {
    let resolved = record.get("check_command").map(|value| {
        RelationValue::from_value(value)
            .as_identifier()
            .and_then(|id| commands.resolve(id))
            .map(str::to_string)
    });
    match resolved {
        Some(Some(name)) => {
            record.insert("check_command".to_string(), Value::String(name));
        }
        Some(None) => {
            record.shift_remove("check_command");
        }
        None => {}
    }

    let Some(args) = record.shift_remove("check_command_args") else {
        return;
    };
    let args = args_text(&args);
    if let Some(Value::String(command)) = record.get_mut("check_command") {
        command.push('!');
        command.push_str(&args);
    } else {
        record.insert("check_command".to_string(), Value::String(args));
    }
}
