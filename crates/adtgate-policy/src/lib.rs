//! Capability gating for tool-exposing servers.
//!
//! A [`ToolGate`] sits between configuration and the dispatch layer: it
//! holds the set of disabled operation names and answers, for any name,
//! whether that operation may be listed or invoked. Absence means
//! enabled; the empty set enables everything.

pub mod catalog;
pub mod error;
pub mod gate;
pub mod presets;
pub mod store;

pub use error::PolicyError;
pub use gate::ToolGate;
pub use store::PolicyStore;
