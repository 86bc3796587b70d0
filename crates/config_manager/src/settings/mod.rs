//! Per-repository setting groups.
//!
//! Every scalar in these types is an `Option`: `None` means "not declared at
//! this level, inherit from the layer below", never `false`.

pub mod hooks;
pub mod repository;
pub mod secret;

pub use hooks::Hooks;
pub use repository::Settings;
pub use secret::{Event, Secret};
