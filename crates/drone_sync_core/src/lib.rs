//! Synchronization of Drone repository settings.
//!
//! [`load_config`] turns a settings file into a [`config_manager::Config`];
//! [`Synchronizer`] exports the server state into the declarative model and
//! imports resolved settings back into the server.

pub mod errors;
pub mod loader;
pub mod mapping;
pub mod synchronizer;

pub use errors::{SyncError, SyncResult};
pub use loader::{load_config, parse_document};
pub use synchronizer::{ImportSummary, Synchronizer};
