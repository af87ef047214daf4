//! Local-function resolution for function bodies.

use crate::container::{LevelView, LeveledContainer};
use crate::error::Result;
use crate::member::depth::FunctionDepth;
use crate::member::handle::MemberHandle;
use crate::symbol::{SymbolId, SymbolKind, SymbolStore};

/// Leveled local-function queries rooted at a function.
///
/// Two depths: the function's direct local functions, and every local
/// function transitively nested below it. Non-function children
/// (variables, constants) never enter the views.
pub struct FunctionMembers<'s> {
    store: &'s SymbolStore,
    container: LeveledContainer<'s>,
}

impl<'s> FunctionMembers<'s> {
    pub fn new(store: &'s SymbolStore, root: SymbolId) -> Result<Self> {
        let mut container = LeveledContainer::new(MemberHandle::new(root), false);
        container.register_level(move |handle| direct_locals(store, handle.id()))?;
        container.register_level(move |handle| nested_locals(store, handle.id()))?;
        container.seal();
        Ok(Self { store, container })
    }

    /// The function the queries are rooted at.
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

    /// Resolve the local functions reaching down to `depth`.
    pub fn resolve(&mut self, depth: FunctionDepth) -> Result<LevelView<'_>> {
        self.container.resolve_level(depth.level())
    }

    /// Toggle the reported order of every view.
    pub fn reverse(&mut self) -> &mut Self {
        self.container.reverse();
        self
    }
}

fn direct_locals(store: &SymbolStore, id: SymbolId) -> Vec<MemberHandle> {
    store
        .children(id)
        .into_iter()
        .filter(|&child| {
            store
                .symbol(child)
                .map(|data| data.kind == SymbolKind::Function)
                .unwrap_or(false)
        })
        .map(MemberHandle::new)
        .collect()
}

/// Every local function transitively nested below `id`, declaration
/// order, parents before their own locals.
fn nested_locals(store: &SymbolStore, id: SymbolId) -> Vec<MemberHandle> {
    let mut out = Vec::new();
    for local in direct_locals(store, id) {
        let child = local.id();
        out.push(local);
        out.extend(nested_locals(store, child));
    }
    out
}
