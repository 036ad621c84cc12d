//! The import run as a typestate.
//!
//! Responsibilities:
//! - Fetch each collection from a [`ResourceSource`] and hand it to its importer.
//! - Keep the lookup tables and the assembled configuration between stages.
//!
//! Does NOT handle:
//! - HTTP, authentication or retries (see the client crate).
//!
//! Invariants:
//! - Each collection can only be imported once the collections it references
//!   are in, so every `import_*` method exists only on the stage its
//!   predecessor returns:
//!
//! commands → timeperiods → contactgroups → contacts → hostgroups → hosts →
//! servicegroups → services
//!
//! ```rust,ignore
//! let config = ImportSession::new()
//!     .import_commands(&mut source).await?
//!     .import_timeperiods(&mut source).await?
//!     // ...
//!     .import_services(&mut source).await?
//!     .finish();
//! ```

use std::marker::PhantomData;

use tracing::{debug, info};

use crate::config_set::ConfigSet;
use crate::error::{ImportError, Result};
use crate::importers::{self, Imported};
use crate::kind::ResourceKind;
use crate::lookup::LookupTables;
use crate::record::RawRecord;
use crate::source::ResourceSource;

/// Stage markers.
pub mod stage {
    /// Nothing imported yet.
    #[derive(Debug)]
    pub struct Empty;
    #[derive(Debug)]
    pub struct Commands;
    #[derive(Debug)]
    pub struct Timeperiods;
    #[derive(Debug)]
    pub struct Contactgroups;
    #[derive(Debug)]
    pub struct Contacts;
    #[derive(Debug)]
    pub struct Hostgroups;
    #[derive(Debug)]
    pub struct Hosts;
    #[derive(Debug)]
    pub struct Servicegroups;
    /// Every collection imported.
    #[derive(Debug)]
    pub struct Complete;
}

/// State of one import run: the lookup tables filled so far and the
/// configuration assembled so far. `S` names the last imported collection.
#[derive(Debug)]
pub struct ImportSession<S> {
    tables: LookupTables,
    config: ConfigSet,
    _stage: PhantomData<S>,
}

impl Default for ImportSession<stage::Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportSession<stage::Empty> {
    pub fn new() -> Self {
        Self {
            tables: LookupTables::default(),
            config: ConfigSet::default(),
            _stage: PhantomData,
        }
    }

    pub async fn import_commands<R: ResourceSource>(
        self,
        source: &mut R,
    ) -> Result<ImportSession<stage::Commands>> {
        let records = fetch(source, ResourceKind::Command).await?;
        let imported = importers::commands::import(records)?;
        Ok(self.store(ResourceKind::Command, imported))
    }
}

impl ImportSession<stage::Commands> {
    pub async fn import_timeperiods<R: ResourceSource>(
        self,
        source: &mut R,
    ) -> Result<ImportSession<stage::Timeperiods>> {
        let records = fetch(source, ResourceKind::Timeperiod).await?;
        let imported = importers::timeperiods::import(records)?;
        Ok(self.store(ResourceKind::Timeperiod, imported))
    }
}

impl ImportSession<stage::Timeperiods> {
    pub async fn import_contactgroups<R: ResourceSource>(
        self,
        source: &mut R,
    ) -> Result<ImportSession<stage::Contactgroups>> {
        let records = fetch(source, ResourceKind::Contactgroup).await?;
        let imported = importers::contactgroups::import(records)?;
        Ok(self.store(ResourceKind::Contactgroup, imported))
    }
}

impl ImportSession<stage::Contactgroups> {
    pub async fn import_contacts<R: ResourceSource>(
        self,
        source: &mut R,
    ) -> Result<ImportSession<stage::Contacts>> {
        let records = fetch(source, ResourceKind::Contact).await?;
        let imported = importers::contacts::import(
            records,
            &self.tables,
            self.config.first_timeperiod_name(),
        )?;
        Ok(self.store(ResourceKind::Contact, imported))
    }
}

impl ImportSession<stage::Contacts> {
    pub async fn import_hostgroups<R: ResourceSource>(
        self,
        source: &mut R,
    ) -> Result<ImportSession<stage::Hostgroups>> {
        let records = fetch(source, ResourceKind::Hostgroup).await?;
        let imported = importers::hostgroups::import(records)?;
        Ok(self.store(ResourceKind::Hostgroup, imported))
    }
}

impl ImportSession<stage::Hostgroups> {
    pub async fn import_hosts<R: ResourceSource>(
        self,
        source: &mut R,
    ) -> Result<ImportSession<stage::Hosts>> {
        let records = fetch(source, ResourceKind::Host).await?;
        let imported = importers::hosts::import(records, &self.tables)?;
        Ok(self.store(ResourceKind::Host, imported))
    }
}

impl ImportSession<stage::Hosts> {
    pub async fn import_servicegroups<R: ResourceSource>(
        self,
        source: &mut R,
    ) -> Result<ImportSession<stage::Servicegroups>> {
        let records = fetch(source, ResourceKind::Servicegroup).await?;
        let imported = importers::servicegroups::import(records)?;
        Ok(self.store(ResourceKind::Servicegroup, imported))
    }
}

impl ImportSession<stage::Servicegroups> {
    pub async fn import_services<R: ResourceSource>(
        mut self,
        source: &mut R,
    ) -> Result<ImportSession<stage::Complete>> {
        let records = fetch(source, ResourceKind::Service).await?;
        self.config.services = importers::services::import(records, &self.tables)?;
        Ok(self.advance())
    }
}

impl ImportSession<stage::Complete> {
    /// Hand over the assembled configuration, dropping the lookup tables.
    pub fn finish(self) -> ConfigSet {
        self.config
    }
}

impl<S> ImportSession<S> {
    /// The configuration assembled so far.
    pub fn config(&self) -> &ConfigSet {
        &self.config
    }

    /// The lookup tables filled so far.
    pub fn tables(&self) -> &LookupTables {
        &self.tables
    }

    fn store<N>(mut self, kind: ResourceKind, imported: Imported) -> ImportSession<N> {
        let table = match kind {
            ResourceKind::Command => &mut self.tables.commands,
            ResourceKind::Timeperiod => &mut self.tables.timeperiods,
            ResourceKind::Contactgroup => &mut self.tables.contactgroups,
            ResourceKind::Contact => &mut self.tables.contacts,
            ResourceKind::Hostgroup => &mut self.tables.hostgroups,
            ResourceKind::Host => &mut self.tables.hosts,
            ResourceKind::Servicegroup => &mut self.tables.servicegroups,
            ResourceKind::Service => {
                self.config.services = imported.records;
                return self.advance();
            }
        };
        debug!(%kind, entries = imported.table.len(), "Lookup table built");
        *table = imported.table;
        *self.config.records_mut(kind) = imported.records;
        self.advance()
    }

    fn advance<N>(self) -> ImportSession<N> {
        ImportSession {
            tables: self.tables,
            config: self.config,
            _stage: PhantomData,
        }
    }
}

async fn fetch<R: ResourceSource>(source: &mut R, kind: ResourceKind) -> Result<Vec<RawRecord>> {
    let documents = source
        .fetch_all(kind)
        .await
        .map_err(|source| ImportError::Fetch { kind, source })?;
    info!(%kind, count = documents.len(), "Fetched collection from the backend");
    Ok(documents
        .into_iter()
        .map(|document| RawRecord::new(kind, document))
        .collect())
}
