//! Shared backend documents for import tests.

use alignak_backend_client::Document;
use alignak_backend_import::{MemorySource, ResourceKind};
use serde_json::{Value, json};

#[allow(dead_code)]
pub fn docs(values: Vec<Value>) -> Vec<Document> {
    values
        .into_iter()
        .map(|value| match value {
            Value::Object(map) => map,
            other => panic!("document must be an object, got {other}"),
        })
        .collect()
}

/// A small but complete backend: every collection, with cross references.
pub fn backend_documents() -> Vec<(ResourceKind, Vec<Value>)> {
    vec![
        (
            ResourceKind::Command,
            vec![
                json!({"_id": "c1", "_etag": "e", "name": "check_ping", "command_line": "check_ping -H $HOSTADDRESS$"}),
                json!({"_id": "c2", "_etag": "e", "name": "notify-by-email", "command_line": "mail"}),
            ],
        ),
        (
            ResourceKind::Timeperiod,
            vec![
                json!({"_id": "t1", "name": "24x7", "dateranges": [{"monday": "00:00-24:00"}, {"sunday": "00:00-24:00"}]}),
                json!({"_id": "t2", "name": "workhours", "dateranges": [{"monday": "09:00-17:00"}]}),
            ],
        ),
        (
            ResourceKind::Contactgroup,
            vec![json!({"_id": "g1", "name": "admins", "members": ["u1"]})],
        ),
        (
            ResourceKind::Contact,
            vec![
                json!({
                    "_id": "u1",
                    "name": "admin",
                    "host_notification_period": "t2",
                    "service_notification_period": "t2",
                    "host_notification_commands": ["c2"],
                    "service_notification_commands": ["c2"],
                    "contactgroups": ["g1"]
                }),
                json!({"_id": "u2", "name": "guest", "host_notifications_enabled": true}),
            ],
        ),
        (
            ResourceKind::Hostgroup,
            vec![json!({"_id": "hg1", "name": "linux", "members": ["h1"], "realm": null})],
        ),
        (
            ResourceKind::Host,
            vec![json!({
                "_id": "h1",
                "_links": {"self": {"href": "host/h1"}},
                "name": "srv01",
                "address": "10.0.0.1",
                "check_command": "c1",
                "check_command_args": "-w 100",
                "check_period": "t1",
                "hostgroups": ["hg1"],
                "contacts": ["u1", "u404"],
                "contact_groups": ["g1"],
                "parents": ["h0"],
                "alias": "",
                "realm": null
            })],
        ),
        (
            ResourceKind::Servicegroup,
            vec![json!({"_id": "sg1", "name": "pings", "realm": "r1"})],
        ),
        (
            ResourceKind::Service,
            vec![json!({
                "_id": "s1",
                "name": "ping",
                "host_name": "h1",
                "check_command": "c1",
                "check_command_args": "",
                "servicegroups": ["sg1"],
                "contacts": ["u2"],
                "escalations": [],
                "service_dependencies": []
            })],
        ),
    ]
}

#[allow(dead_code)]
pub fn memory_backend() -> MemorySource {
    backend_documents()
        .into_iter()
        .fold(MemorySource::new(), |source, (kind, values)| {
            source.with(kind, docs(values))
        })
}
