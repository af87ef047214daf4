//! Module member resolution.

use crate::container::{LevelView, LeveledContainer};
use crate::error::Result;
use crate::member::depth::MemberDepth;
use crate::member::handle::MemberHandle;
use crate::symbol::{SymbolId, SymbolKind, SymbolStore};

/// Whether a member of this kind can itself declare members visible to a
/// module query. Function bodies are opaque here: a function is a member
/// but its locals are not.
fn declares_members(kind: SymbolKind) -> bool {
    matches!(kind, SymbolKind::Module | SymbolKind::Type | SymbolKind::Trait)
}

/// Leveled member queries rooted at a module.
///
/// Three depths: direct members, members of directly nested scopes, and
/// all transitively contained members. The registry is sealed at
/// construction; deeper custom levels go through the raw container API on
/// a hand-built container instead.
pub struct ModuleMembers<'s> {
    store: &'s SymbolStore,
    container: LeveledContainer<'s>,
}

impl<'s> ModuleMembers<'s> {
    pub fn new(store: &'s SymbolStore, root: SymbolId) -> Result<Self> {
        let mut container = LeveledContainer::new(MemberHandle::new(root), false);
        container.set_skip(move |handle| {
            !store
                .symbol(handle.id())
                .map(|data| declares_members(data.kind))
                .unwrap_or(false)
        });
        container.register_level(move |handle| direct_members(store, handle))?;
        container.register_level(move |handle| direct_members(store, handle))?;
        container.register_level(move |handle| {
            store
                .descendants_filtered(handle.id(), declares_members)
                .into_iter()
                .map(MemberHandle::new)
                .collect()
        })?;
        container.seal();
        Ok(Self { store, container })
    }

    /// The module the queries are rooted at.
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
