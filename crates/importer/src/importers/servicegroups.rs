//! Service groups: membership is left to the services.

use serde_json::Value;

use super::{Imported, begin, blank, drop_if, finish};
use crate::error::Result;
use crate::kind::ResourceKind;
use crate::lookup::LookupTable;
use crate::record::RawRecord;

pub(crate) fn import(records: Vec<RawRecord>) -> Result<Imported> {
    let table = LookupTable::build(&records)?;
    let records = records
        .into_iter()
        .map(|raw| {
            let mut record = begin(raw)?;
            blank(&mut record, "members");
            blank(&mut record, "servicegroup_members");
            drop_if(&mut record, "realm", Value::is_null);
            Ok(finish(record, ResourceKind::Servicegroup))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Imported { table, records })
}
