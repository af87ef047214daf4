//! Symbol hierarchy module — the structural backbone of strata.
//!
//! Provides the symbol data model, the petgraph-backed store, and
//! flat-record ingest for building the containment tree.

pub mod store;
pub mod types;

pub use store::{StoreStats, SymbolId, SymbolStore};
pub use types::{SymbolData, SymbolKind, SymbolRecord};
