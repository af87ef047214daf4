//! Member handles — symbol identity plus a lazily materialized payload.

use std::cell::OnceCell;

use crate::error::Result;
use crate::member::data::MemberData;
use crate::symbol::{SymbolId, SymbolStore};

/// A reference to a hierarchy element.
///
/// A handle always carries an identity; the member payload is built from
/// the store on first access and cached for the handle's lifetime.
/// Distinct handles may reference the same underlying identity, each with
/// its own payload cache.
#[derive(Debug, Clone)]
pub struct MemberHandle {
    id: SymbolId,
    data: OnceCell<MemberData>,
}

impl MemberHandle {
    /// A handle over a bare identity; the payload resolves lazily.
    pub fn new(id: SymbolId) -> Self {
        Self {
            id,
            data: OnceCell::new(),
        }
    }

    /// A handle that already owns its materialized payload.
    pub fn with_data(id: SymbolId, data: MemberData) -> Self {
        Self {
            id,
            data: OnceCell::from(data),
        }
    }

    /// The symbol identity. Never changes after construction.
    pub fn id(&self) -> SymbolId {
        self.id
    }

    /// Whether the payload has been materialized yet.
    pub fn is_materialized(&self) -> bool {
        self.data.get().is_some()
    }

    /// The member payload, materializing it from the store on first access.
    ///
    /// Construction is memoized per handle: repeat calls return the cached
    /// payload without touching the store. Fails with
    /// `PayloadConstruction` when the identity is not in the store.
    pub fn data(&self, store: &SymbolStore) -> Result<&MemberData> {
        if let Some(data) = self.data.get() {
            return Ok(data);
        }
        let built = MemberData::from_store(store, self.id)?;
        Ok(self.data.get_or_init(|| built))
    }
}
