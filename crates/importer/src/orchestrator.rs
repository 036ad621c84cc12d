//! Runs a complete import.

use std::time::Instant;

use tracing::info;

use crate::config_set::ConfigSet;
use crate::error::Result;
use crate::session::ImportSession;
use crate::source::ResourceSource;

/// Import every collection from `source` and return the assembled
/// configuration.
///
/// Collections are fetched one after the other in dependency order. The
/// first failure aborts the run; no partial configuration is returned.
pub async fn import_configuration<R: ResourceSource>(source: &mut R) -> Result<ConfigSet> {
    let start = Instant::now();

    let config = ImportSession::new()
        .import_commands(source)
        .await?
        .import_timeperiods(source)
        .await?
        .import_contactgroups(source)
        .await?
        .import_contacts(source)
        .await?
        .import_hostgroups(source)
        .await?
        .import_hosts(source)
        .await?
        .import_servicegroups(source)
        .await?
        .import_services(source)
        .await?
        .finish();

    info!(
        elapsed_secs = start.elapsed().as_secs_f64(),
        total = config.total(),
        commands = config.commands.len(),
        timeperiods = config.timeperiods.len(),
        contactgroups = config.contactgroups.len(),
        contacts = config.contacts.len(),
        hostgroups = config.hostgroups.len(),
        hosts = config.hosts.len(),
        servicegroups = config.servicegroups.len(),
        services = config.services.len(),
        "Loaded configuration from the backend"
    );

    Ok(config)
}
