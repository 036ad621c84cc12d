//! Host groups: membership is left to the hosts.

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
            blank(&mut record, "hostgroup_members");
            drop_if(&mut record, "realm", Value::is_null);
            Ok(finish(record, ResourceKind::Hostgroup))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Imported { table, records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importers::test_support::raw;
    use serde_json::json;

    #[test]
    fn test_members_are_blanked_and_null_realm_dropped() {
        let imported = import(vec![
            raw(
                ResourceKind::Hostgroup,
                json!({
                    "_id": "hg1",
                    "name": "linux",
                    "members": ["h1", "h2"],
                    "hostgroup_members": ["hg2"],
                    "realm": null
                }),
            ),
            raw(
                ResourceKind::Hostgroup,
                json!({"_id": "hg2", "name": "web", "realm": "r1"}),
            ),
        ])
        .unwrap();

        let linux = &imported.records[0];
        assert_eq!(linux["members"], "");
        assert_eq!(linux["hostgroup_members"], "");
        assert!(!linux.contains_key("realm"));
        assert_eq!(linux["hostgroup_name"], "linux");

        let web = &imported.records[1];
        assert_eq!(web["members"], "");
        assert_eq!(web["realm"], "r1");
        assert_eq!(imported.table.resolve("hg2"), Some("web"));
    }
}
