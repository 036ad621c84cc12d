//! Identifier to name lookup tables.

use std::collections::HashMap;

use crate::error::Result;
use crate::record::RawRecord;

/// Backend identifier to display name, for one resource kind.
///
/// Built once from a fetched collection and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupTable {
    names: HashMap<String, String>,
}

impl LookupTable {
    /// Build the table from every record of a collection.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ImportError::MissingField`] for a record without a
    /// string `_id` or `name`.
    pub fn build(records: &[RawRecord]) -> Result<Self> {
        let names = records
            .iter()
            .map(RawRecord::identity)
            .collect::<Result<HashMap<_, _>>>()?;
        Ok(Self { names })
    }

    /// Name of the record with identifier `id`.
    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LookupTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        Self {
            names: pairs
                .into_iter()
                .map(|(id, name)| (id.into(), name.into()))
                .collect(),
        }
    }
}

/// The tables of one import run, filled in import order.
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    pub commands: LookupTable,
    pub timeperiods: LookupTable,
    pub contactgroups: LookupTable,
    pub contacts: LookupTable,
    pub hostgroups: LookupTable,
    pub hosts: LookupTable,
    pub servicegroups: LookupTable,
}
