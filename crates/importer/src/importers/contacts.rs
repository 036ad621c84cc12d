//! Contacts: notification periods, commands and groups.

use serde_json::Value;

use super::{Imported, begin, blank, finish};
use crate::error::{ImportError, Result};
use crate::flatten::{resolve_multi, resolve_single};
use crate::kind::ResourceKind;
use crate::lookup::{LookupTable, LookupTables};
use crate::record::{FlatRecord, RawRecord};

/// Notification period field and the flag disabled when it is defaulted.
const PERIODS: [(&str, &str); 2] = [
    ("host_notification_period", "host_notifications_enabled"),
    ("service_notification_period", "service_notifications_enabled"),
];

const COMMANDS: [&str; 2] = ["host_notification_commands", "service_notification_commands"];

/// `default_period` is the name of the first imported timeperiod.
pub(crate) fn import(
    records: Vec<RawRecord>,
    tables: &LookupTables,
    default_period: Option<&str>,
) -> Result<Imported> {
    let table = LookupTable::build(&records)?;
    let records = records
        .into_iter()
        .map(|raw| flatten(raw, tables, default_period))
        .collect::<Result<Vec<_>>>()?;
    Ok(Imported { table, records })
}

fn flatten(
    raw: RawRecord,
    tables: &LookupTables,
    default_period: Option<&str>,
) -> Result<FlatRecord> {
    let name = raw.name()?.to_string();
    let mut record = begin(raw)?;

    for (period, _) in PERIODS {
        resolve_single(&mut record, period, &tables.timeperiods);
    }
    for commands in COMMANDS {
        resolve_multi(&mut record, commands, &tables.commands);
    }
    resolve_multi(&mut record, "contactgroups", &tables.contactgroups);

    for commands in COMMANDS {
        if !record.contains_key(commands) {
            blank(&mut record, commands);
        }
    }
    for (period, enabled) in PERIODS {
        if record.contains_key(period) {
            continue;
        }
        let default = default_period.ok_or_else(|| ImportError::NoDefaultTimeperiod {
            contact: name.clone(),
            field: period,
        })?;
        record.insert(period.to_string(), Value::String(default.to_string()));
        record.insert(enabled.to_string(), Value::Bool(false));
    }

    Ok(finish(record, ResourceKind::Contact))
}
