//! The assembled configuration.

use serde::{Deserialize, Serialize};

use crate::kind::ResourceKind;
use crate::record::FlatRecord;

/// Flattened records grouped by kind, each in backend order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigSet {
    pub commands: Vec<FlatRecord>,
    pub timeperiods: Vec<FlatRecord>,
    pub contactgroups: Vec<FlatRecord>,
    pub contacts: Vec<FlatRecord>,
    pub hostgroups: Vec<FlatRecord>,
    pub hosts: Vec<FlatRecord>,
    pub servicegroups: Vec<FlatRecord>,
    pub services: Vec<FlatRecord>,
}

impl ConfigSet {
    /// Records of one kind.
    pub fn records(&self, kind: ResourceKind) -> &[FlatRecord] {
        match kind {
            ResourceKind::Command => &self.commands,
            ResourceKind::Timeperiod => &self.timeperiods,
            ResourceKind::Contactgroup => &self.contactgroups,
            ResourceKind::Contact => &self.contacts,
            ResourceKind::Hostgroup => &self.hostgroups,
            ResourceKind::Host => &self.hosts,
            ResourceKind::Servicegroup => &self.servicegroups,
            ResourceKind::Service => &self.services,
        }
    }

    pub(crate) fn records_mut(&mut self, kind: ResourceKind) -> &mut Vec<FlatRecord> {
        match kind {
            ResourceKind::Command => &mut self.commands,
            ResourceKind::Timeperiod => &mut self.timeperiods,
            ResourceKind::Contactgroup => &mut self.contactgroups,
            ResourceKind::Contact => &mut self.contacts,
            ResourceKind::Hostgroup => &mut self.hostgroups,
            ResourceKind::Host => &mut self.hosts,
            ResourceKind::Servicegroup => &mut self.servicegroups,
            ResourceKind::Service => &mut self.services,
        }
    }

    /// Record count per kind, in import order.
    pub fn counts(&self) -> Vec<(ResourceKind, usize)> {
        ResourceKind::ALL
            .into_iter()
            .map(|kind| (kind, self.records(kind).len()))
            .collect()
    }

    pub fn total(&self) -> usize {
        self.counts().iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Name of the first imported timeperiod, used as the default
    /// notification period of contacts.
    pub fn first_timeperiod_name(&self) -> Option<&str> {
        self.timeperiods
            .first()
            .and_then(|tp| tp.get(ResourceKind::Timeperiod.name_field()))
            .and_then(|name| name.as_str())
    }
}
