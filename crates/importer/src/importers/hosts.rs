//! Hosts: check command, periods, groups and contacts.

use serde_json::Value;

use super::{Imported, args_text, begin, blank, drop_if, finish, is_empty_string};
use crate::error::Result;
use crate::flatten::{resolve_multi, resolve_single};
use crate::kind::ResourceKind;
use crate::lookup::{LookupTable, LookupTables};
use crate::record::{FlatRecord, RawRecord, RelationValue};

pub(crate) fn import(records: Vec<RawRecord>, tables: &LookupTables) -> Result<Imported> {
    let table = LookupTable::build(&records)?;
    let records = records
        .into_iter()
        .map(|raw| flatten(raw, tables))
        .collect::<Result<Vec<_>>>()?;
    Ok(Imported { table, records })
}

fn flatten(raw: RawRecord, tables: &LookupTables) -> Result<FlatRecord> {
    let mut record = begin(raw)?;

    resolve_check_command(&mut record, &tables.commands);
    resolve_single(&mut record, "check_period", &tables.timeperiods);
    resolve_single(&mut record, "notification_period", &tables.timeperiods);
    blank(&mut record, "parents");
    resolve_multi(&mut record, "hostgroups", &tables.hostgroups);
    resolve_multi(&mut record, "contacts", &tables.contacts);
    resolve_multi(&mut record, "contact_groups", &tables.contactgroups);

    drop_if(&mut record, "escalation", is_empty_string);
    drop_if(&mut record, "alias", is_empty_string);
    drop_if(&mut record, "realm", Value::is_null);

    Ok(finish(record, ResourceKind::Host))
}

/// A host's check command is always a string once present: unknown or null
/// commands become `""`. Non-empty arguments are appended after a `!`.
fn resolve_check_command(record: &mut FlatRecord, commands: &LookupTable) {
    if let Some(value) = record.get_mut("check_command") {
        let name = RelationValue::from_value(value)
            .as_identifier()
            .and_then(|id| commands.resolve(id))
            .unwrap_or_default()
            .to_string();
        *value = Value::String(name);
    }

    let Some(args) = record.shift_remove("check_command_args") else {
        return;
    };
    match record.get_mut("check_command") {
        None => blank(record, "check_command"),
        Some(Value::String(command)) => {
            let args = args_text(&args);
            if !args.is_empty() {
                command.push('!');
                command.push_str(&args);
            }
        }
        Some(_) => {}
    }
}
