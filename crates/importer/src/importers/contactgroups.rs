//! Contact groups: no relations are resolved.

use super::{Imported, begin, finish};
use crate::error::Result;
use crate::kind::ResourceKind;
use crate::lookup::LookupTable;
use crate::record::RawRecord;

pub(crate) fn import(records: Vec<RawRecord>) -> Result<Imported> {
    let table = LookupTable::build(&records)?;
    let records = records
        .into_iter()
        .map(|raw| Ok(finish(begin(raw)?, ResourceKind::Contactgroup)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Imported { table, records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importers::test_support::raw;
    use serde_json::json;

    #[test]
    fn test_member_lists_are_joined_raw() {
        let imported = import(vec![raw(
            ResourceKind::Contactgroup,
            json!({
                "_id": "g1",
                "name": "admins",
                "members": ["u1", "u2"],
                "contactgroup_members": []
            }),
        )])
        .unwrap();

        let group = &imported.records[0];
        assert_eq!(group["contactgroup_name"], "admins");
        assert_eq!(group["members"], "u1,u2");
        assert_eq!(group["contactgroup_members"], "");
    }
}
