//! Type member resolution.

use crate::container::{LevelView, LeveledContainer};
use crate::error::Result;
use crate::member::depth::MemberDepth;
use crate::member::handle::MemberHandle;
use crate::symbol::{SymbolId, SymbolStore};

/// Leveled member queries rooted at a type or trait.
///
/// Three depths: direct members, members of directly nested types, and
/// all transitively contained members. Only type-like members are
/// descended into; methods are members but their bodies stay opaque.
pub struct TypeMembers<'s> {
    store: &'s SymbolStore,
    container: LeveledContainer<'s>,
}

impl<'s> TypeMembers<'s> {
    pub fn new(store: &'s SymbolStore, root: SymbolId) -> Result<Self> {
        let mut container = LeveledContainer::new(MemberHandle::new(root), false);
        container.set_skip(move |handle| {
            !store
                .symbol(handle.id())
                .map(|data| data.kind.is_type_like())
                .unwrap_or(false)
        });
        container.register_level(move |handle| direct_members(store, handle))?;
        container.register_level(move |handle| direct_members(store, handle))?;
        container.register_level(move |handle| {
            store
                .descendants_filtered(handle.id(), |kind| kind.is_type_like())
                .into_iter()
                .map(MemberHandle::new)
                .collect()
        })?;
        container.seal();
        Ok(Self { store, container })
    }

    /// The type the queries are rooted at.
    pub fn root(&self) -> SymbolId {
        self.container.root().id()
    }

    pub fn store(&self) -> &'s SymbolStore {
        self.store
    }

    /// Read access to the underlying container.
    pub fn container(&self) -> &LeveledContainer<'s> {
        &self.container
    }

    /// Resolve the members reaching down to `depth`.
    pub fn resolve(&mut self, depth: MemberDepth) -> Result<LevelView<'_>> {
        self.container.resolve_level(depth.level())
    }

    /// Toggle the reported order of every view.
    pub fn reverse(&mut self) -> &mut Self {
        self.container.reverse();
        self
    }
}

fn direct_members(store: &SymbolStore, handle: &MemberHandle) -> Vec<MemberHandle> {
    store
        .children(handle.id())
        .into_iter()
        .map(MemberHandle::new)
        .collect()
}
