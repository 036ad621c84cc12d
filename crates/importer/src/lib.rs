//! Configuration import from the Alignak backend.
//!
//! Backend documents reference each other by identifier. This crate fetches
//! every configuration collection in dependency order, resolves those
//! references into names and reshapes each document into the flat record
//! format the monitoring engine loads.
//!
//! The entry point is [`import_configuration`], which drives an
//! [`ImportSession`] through its stages and returns a [`ConfigSet`].

mod config_set;
mod error;
mod flatten;
mod importers;
mod kind;
mod lookup;
mod normalize;
mod orchestrator;
mod record;
pub mod session;
mod source;

pub use config_set::ConfigSet;
pub use error::{ImportError, Result};
pub use flatten::{resolve_multi, resolve_single};
pub use kind::ResourceKind;
pub use lookup::{LookupTable, LookupTables};
pub use normalize::{BOOKKEEPING_FIELDS, join_sequences, strip_bookkeeping};
pub use orchestrator::import_configuration;
pub use record::{FlatRecord, RawRecord, RelationValue};
pub use session::ImportSession;
pub use source::{MemorySource, ResourceSource};
