//! Commands: no relations.

use super::{Imported, begin, finish};
use crate::error::Result;
use crate::kind::ResourceKind;
use crate::lookup::LookupTable;
use crate::record::RawRecord;

pub(crate) fn import(records: Vec<RawRecord>) -> Result<Imported> {
    let table = LookupTable::build(&records)?;
    let records = records
        .into_iter()
        .map(|raw| Ok(finish(begin(raw)?, ResourceKind::Command)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Imported { table, records })
}
