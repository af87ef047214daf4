//! The leveled, lazily-expanding container.
//!
//! Given a root handle and a sequence of registered expansion functions
//! (one per depth level), the container materializes children
//! breadth-level-by-breadth-level into one shared buffer, memoizes each
//! computed level's range, and reverses enumeration order without
//! re-materializing anything. Repeated queries at increasing depth only
//! ever pay for the delta.

use tracing::debug;

use crate::container::buffer::ExpansionBuffer;
use crate::container::order::TraversalOrder;
use crate::container::registry::{LevelRegistry, RegisteredLevel};
use crate::container::view::LevelView;
use crate::error::{Result, StrataError};
use crate::member::MemberHandle;

/// The incremental graph-expansion cache.
///
/// A container is bound to one root handle at construction and driven by
/// a single logical owner: levels are registered, then resolved in any
/// order; the first resolution seals the registry. Expansion only grows
/// the buffer, so every previously returned range stays valid.
pub struct LeveledContainer<'s> {
    root: MemberHandle,
    registry: LevelRegistry<'s>,
    buffer: ExpansionBuffer,
    order: TraversalOrder,
    skip: Option<Box<dyn Fn(&MemberHandle) -> bool + 's>>,
}

impl<'s> LeveledContainer<'s> {
    /// Create a container rooted at `root`.
    ///
    /// With `include_root`, the root itself is pre-seeded into the buffer
    /// ahead of level 0, so it appears as element 0 of every resolved
    /// view.
    pub fn new(root: MemberHandle, include_root: bool) -> Self {
        let mut buffer = ExpansionBuffer::new();
        if include_root {
            buffer.seed(root.clone());
        }
        Self {
            root,
            registry: LevelRegistry::new(),
            buffer,
            order: TraversalOrder::RootToLeaf,
            skip: None,
        }
    }

    /// The root handle the container is bound to.
    pub fn root(&self) -> &MemberHandle {
        &self.root
    }

    /// Number of registered levels.
    pub fn num_levels(&self) -> usize {
        self.registry.len()
    }

    /// How many levels have been resolved so far.
    pub fn resolved_levels(&self) -> usize {
        self.buffer.resolved_levels()
    }

    pub fn is_sealed(&self) -> bool {
        self.registry.is_sealed()
    }

    /// The container's current canonical order.
    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    // ─── Mutation ───────────────────────────────────────────────

    /// Register `expand` as the next level, emitting root-to-leaf.
    pub fn register_level(
        &mut self,
        expand: impl Fn(&MemberHandle) -> Vec<MemberHandle> + 's,
    ) -> Result<usize> {
        self.registry.register(TraversalOrder::RootToLeaf, expand)
    }

    /// Register `expand` as the next level, declaring the order its
    /// output is naturally produced in. Output tagged leaf-to-root is
    /// normalized to canonical order at append time.
    pub fn register_level_with_order(
        &mut self,
        emission: TraversalOrder,
        expand: impl Fn(&MemberHandle) -> Vec<MemberHandle> + 's,
    ) -> Result<usize> {
        self.registry.register(emission, expand)
    }

    /// Permanently prevent further level registration. Idempotent;
    /// returns whether this call performed the transition.
    pub fn seal(&mut self) -> bool {
        self.registry.seal()
    }

    /// Install a predicate that excludes matching nodes from expansion.
    ///
    /// A skipped node stays in the level that introduced it but
    /// contributes no children to deeper levels.
    pub fn set_skip(&mut self, skip: impl Fn(&MemberHandle) -> bool + 's) {
        self.skip = Some(Box::new(skip));
    }

    /// Toggle the canonical order. Already materialized views are
    /// reported through the inverse index transform; unresolved levels
    /// observe the new convention on first resolution. Self-inverse.
    pub fn reverse(&mut self) -> &mut Self {
        self.order = self.order.reversed();
        self
    }

    // ─── Resolution ─────────────────────────────────────────────

    /// Resolve everything discovered up through `level`.
    ///
    /// An already resolved level returns its memoized range in O(1) with
    /// no re-expansion; otherwise every unresolved level up to `level` is
    /// expanded, appending only newly discovered nodes. The first call
    /// seals the registry. Fails with `LevelOutOfRange` for
    /// `level >= num_levels`.
    pub fn resolve_level(&mut self, level: usize) -> Result<LevelView<'_>> {
        let count = self.registry.len();
        if level >= count {
            return Err(StrataError::LevelOutOfRange { level, count });
        }
        self.registry.seal();
        while self.buffer.resolved_levels() <= level {
            self.expand_next();
        }
        if level + 1 == count {
            // Deepest level reached; no further growth is expected.
            self.buffer.trim();
        }
        Ok(self.view_of(level))
    }

    /// A view over everything resolved so far.
    ///
    /// Empty for a fresh container (or one sealed with no levels), unless
    /// the root was seeded with `include_root`.
    pub fn resolved_view(&self) -> LevelView<'_> {
        LevelView::new(
            self.buffer.nodes_up_to(self.buffer.len()),
            self.order,
            self.buffer.resolved_levels().saturating_sub(1),
        )
    }

    fn view_of(&self, level: usize) -> LevelView<'_> {
        let end = match self.buffer.bounds_of(level) {
            Some(bounds) => bounds.end,
            None => self.buffer.len(),
        };
        LevelView::new(self.buffer.nodes_up_to(end), self.order, level)
    }

    /// Expand the next unresolved level: run its expansion function over
    /// the previous level's newly-added range (the root, for level 0) and
    /// record the discovered range. The boundary is published only after
    /// the level expands completely, so a memoized view is never observed
    /// half-built.
    fn expand_next(&mut self) {
        let level = self.buffer.resolved_levels();
        let registered = match self.registry.get(level) {
            Some(registered) => registered,
            None => return,
        };
        let skip = self.skip.as_deref();

        let mut discovered: Vec<MemberHandle> = Vec::new();
        if level == 0 {
            expand_parent(&self.root, registered, skip, &mut discovered);
        } else if let Some(parents) = self.buffer.bounds_of(level - 1) {
            for index in parents.start..parents.end {
                expand_parent(self.buffer.node(index), registered, skip, &mut discovered);
            }
        }

        let bounds = self.buffer.record_level(discovered);
        debug!(
            level,
            added = bounds.end - bounds.start,
            total = self.buffer.len(),
            "expanded level"
        );
    }
}

/// Run one parent through a level's expansion function, normalizing the
/// output to canonical root-to-leaf order.
fn expand_parent(
    parent: &MemberHandle,
    level: &RegisteredLevel<'_>,
    skip: Option<&(dyn Fn(&MemberHandle) -> bool + '_)>,
    out: &mut Vec<MemberHandle>,
) {
    if let Some(skip) = skip {
        if skip(parent) {
            return;
        }
    }
    let mut children = (level.expand)(parent);
    if level.emission == TraversalOrder::LeafToRoot {
        children.reverse();
    }
    out.append(&mut children);
}
