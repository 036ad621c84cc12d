//! Backend resource kinds and their per-kind constants.

use std::fmt;

/// A backend configuration collection.
///
/// Variants are declared in import order: every kind only references kinds
/// declared before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Command,
    Timeperiod,
    Contactgroup,
    Contact,
    Hostgroup,
    Host,
    Servicegroup,
    Service,
}

impl ResourceKind {
    /// Every kind, in import order.
    pub const ALL: [ResourceKind; 8] = [
        Self::Command,
        Self::Timeperiod,
        Self::Contactgroup,
        Self::Contact,
        Self::Hostgroup,
        Self::Host,
        Self::Servicegroup,
        Self::Service,
    ];

    /// Backend endpoint the collection is served from.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Timeperiod => "timeperiod",
            Self::Contactgroup => "contactgroup",
            Self::Contact => "contact",
            Self::Hostgroup => "hostgroup",
            Self::Host => "host",
            Self::Servicegroup => "servicegroup",
            Self::Service => "service",
        }
    }

    /// Key of this kind in the configuration set.
    pub fn config_key(self) -> &'static str {
        match self {
            Self::Command => "commands",
            Self::Timeperiod => "timeperiods",
            Self::Contactgroup => "contactgroups",
            Self::Contact => "contacts",
            Self::Hostgroup => "hostgroups",
            Self::Host => "hosts",
            Self::Servicegroup => "servicegroups",
            Self::Service => "services",
        }
    }

    /// Field that receives the display name in a flattened record.
    pub fn name_field(self) -> &'static str {
        match self {
            Self::Command => "command_name",
            Self::Timeperiod => "timeperiod_name",
            Self::Contactgroup => "contactgroup_name",
            Self::Contact => "contact_name",
            Self::Hostgroup => "hostgroup_name",
            Self::Host => "host_name",
            Self::Servicegroup => "servicegroup_name",
            Self::Service => "service_description",
        }
    }

    /// Extra query parameters sent when fetching the collection.
    pub fn fetch_params(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Service => &[("embedded", r#"{"escalations":1,"service_dependencies":1}"#)],
            _ => &[],
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}
