//! Timeperiods: date ranges are merged into the record.

use serde_json::Value;

use super::{Imported, begin, finish};
use crate::error::{ImportError, Result};
use crate::kind::ResourceKind;
use crate::lookup::LookupTable;
use crate::record::{FlatRecord, RawRecord};

const KIND: ResourceKind = ResourceKind::Timeperiod;

pub(crate) fn import(records: Vec<RawRecord>) -> Result<Imported> {
    let table = LookupTable::build(&records)?;
    let records = records
        .into_iter()
        .map(flatten)
        .collect::<Result<Vec<_>>>()?;
    Ok(Imported { table, records })
}

fn flatten(raw: RawRecord) -> Result<FlatRecord> {
    let name = raw.name()?.to_string();
    let mut record = begin(raw)?;
    merge_dateranges(&mut record, &name)?;
    Ok(finish(record, KIND))
}

/// Lift every date range entry to the top level, later entries winning.
fn merge_dateranges(record: &mut FlatRecord, name: &str) -> Result<()> {
    let ranges = match record.shift_remove("dateranges") {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::Array(ranges)) => ranges,
        Some(_) => return Err(invalid(name, "`dateranges` is not a list")),
    };

    for range in ranges {
        let Value::Object(entries) = range else {
            return Err(invalid(name, "`dateranges` entry is not a mapping"));
        };
        for (key, value) in entries {
            record.insert(key, value);
        }
    }
    Ok(())
}

fn invalid(name: &str, reason: &str) -> ImportError {
    ImportError::InvalidRecord {
        kind: KIND,
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
