//! Materialized member payloads.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, StrataError};
use crate::symbol::{SymbolId, SymbolKind, SymbolStore};

/// The materialized record for one member: everything a consumer needs to
/// report or act on the member without going back to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberData {
    /// The member's declared name.
    pub name: String,
    /// The fully qualified path ("crate::net::Listener::accept").
    pub qualified_name: String,
    /// What kind of symbol the member is.
    pub kind: SymbolKind,
    /// File the member is declared in.
    pub file_path: PathBuf,
    /// Starting line (1-indexed; 0 when unknown).
    pub line_start: usize,
    /// Ending line (1-indexed; 0 when unknown).
    pub line_end: usize,
}

impl MemberData {
    /// Build the payload for `id` from the store.
    ///
    /// Fails with `PayloadConstruction` when the identity is dangling.
    pub(crate) fn from_store(store: &SymbolStore, id: SymbolId) -> Result<Self> {
        let symbol = store
            .symbol(id)
            .ok_or(StrataError::PayloadConstruction { id })?;
        let qualified_name = store
            .qualified_name(id)
            .ok_or(StrataError::PayloadConstruction { id })?;
        Ok(Self {
            name: symbol.name.clone(),
            qualified_name,
            kind: symbol.kind,
            file_path: symbol.file_path.clone(),
            line_start: symbol.line_start,
            line_end: symbol.line_end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::SymbolData;

    #[test]
    fn test_from_store_carries_location() {
        let mut store = SymbolStore::new();
        let root = store.add_symbol(None, SymbolData::new("crate", SymbolKind::Module));
        let id = store.add_symbol(
            Some(root),
            SymbolData::new("accept", SymbolKind::Function).located("src/net.rs", 10, 25),
        );

        let data = MemberData::from_store(&store, id).expect("payload builds");
        assert_eq!(data.name, "accept");
        assert_eq!(data.qualified_name, "crate::accept");
        assert_eq!(data.kind, SymbolKind::Function);
        assert_eq!(data.file_path, PathBuf::from("src/net.rs"));
        assert_eq!((data.line_start, data.line_end), (10, 25));
    }

    #[test]
    fn test_from_store_dangling() {
        let store = SymbolStore::new();
        let err = MemberData::from_store(&store, SymbolId::from_raw(3))
            .expect_err("dangling id must fail");
        assert!(matches!(err, StrataError::PayloadConstruction { .. }));
    }
}
