//! Level views — immutable windows over the shared expansion buffer.

use crate::container::order::TraversalOrder;
use crate::error::{Result, StrataError};
use crate::member::{MemberData, MemberHandle};
use crate::symbol::{SymbolId, SymbolStore};

/// Everything discovered up through one resolved level.
///
/// A view is a read-only borrow of the container's buffer: it never
/// triggers expansion, and the borrow checker keeps it from overlapping a
/// structural mutation of the container. Reversed views read the same
/// buffer through an index transform; nothing is copied.
#[derive(Clone, Copy, Debug)]
pub struct LevelView<'c> {
    nodes: &'c [MemberHandle],
    order: TraversalOrder,
    level: usize,
}

impl<'c> LevelView<'c> {
    pub(crate) fn new(nodes: &'c [MemberHandle], order: TraversalOrder, level: usize) -> Self {
        Self { nodes, order, level }
    }

    /// The level this view resolves.
    pub fn level(&self) -> usize {
        self.level
    }

    /// The order the view currently reports its elements in.
    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The handles in the view, in its current order.
    pub fn handles(&self) -> impl Iterator<Item = &'c MemberHandle> {
        let nodes = self.nodes;
        let order = self.order;
        let count = nodes.len();
        (0..count).map(move |i| match order {
            TraversalOrder::RootToLeaf => &nodes[i],
            TraversalOrder::LeafToRoot => &nodes[count - 1 - i],
        })
    }

    /// The symbol identities in the view, in its current order.
    pub fn ids(&self) -> Vec<SymbolId> {
        self.handles().map(MemberHandle::id).collect()
    }

    /// The display names of the members, in the view's current order.
    ///
    /// Names are read from the store without materializing payloads; a
    /// dangling identity fails with `PayloadConstruction`.
    pub fn names(&self, store: &SymbolStore) -> Result<Vec<String>> {
        self.handles()
            .map(|handle| {
                store
                    .display_name(handle.id())
                    .map(str::to_string)
                    .ok_or(StrataError::PayloadConstruction { id: handle.id() })
            })
            .collect()
    }

    /// The materialized payloads of the members, in the view's current
    /// order.
    ///
    /// Triggers on-demand construction for any not-yet-materialized
    /// handle; construction is memoized per handle, independent of the
    /// container. Errors from construction propagate unchanged.
    pub fn payloads(&self, store: &SymbolStore) -> Result<Vec<&'c MemberData>> {
        self.handles().map(|handle| handle.data(store)).collect()
    }

    /// The first handle under the view's current order.
    pub fn first(&self) -> Result<&'c MemberHandle> {
        self.handles()
            .next()
            .ok_or(StrataError::EmptyView { level: self.level })
    }

    /// The last handle under the view's current order.
    pub fn last(&self) -> Result<&'c MemberHandle> {
        self.handles()
            .last()
            .ok_or(StrataError::EmptyView { level: self.level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handles(ids: &[usize]) -> Vec<MemberHandle> {
        ids.iter().map(|&i| MemberHandle::new(SymbolId::from_raw(i))).collect()
    }

    fn ids_of(view: &LevelView<'_>) -> Vec<usize> {
        view.ids().into_iter().map(SymbolId::raw).collect()
    }

    #[test]
    fn test_canonical_order_reads_forward() {
        let nodes = handles(&[0, 1, 2]);
        let view = LevelView::new(&nodes, TraversalOrder::RootToLeaf, 0);
        assert_eq!(ids_of(&view), vec![0, 1, 2]);
        assert_eq!(view.first().expect("non-empty").id(), SymbolId::from_raw(0));
        assert_eq!(view.last().expect("non-empty").id(), SymbolId::from_raw(2));
    }

    #[test]
    fn test_reversed_order_is_an_index_transform() {
        let nodes = handles(&[0, 1, 2]);
        let view = LevelView::new(&nodes, TraversalOrder::LeafToRoot, 0);
        assert_eq!(ids_of(&view), vec![2, 1, 0]);
        assert_eq!(view.first().expect("non-empty").id(), SymbolId::from_raw(2));
        assert_eq!(view.last().expect("non-empty").id(), SymbolId::from_raw(0));
    }

    #[test]
    fn test_empty_view_errors_on_first_and_last() {
        let nodes: Vec<MemberHandle> = Vec::new();
        let view = LevelView::new(&nodes, TraversalOrder::RootToLeaf, 0);
        assert!(view.is_empty());
        assert!(matches!(view.first(), Err(StrataError::EmptyView { level: 0 })));
        assert!(matches!(view.last(), Err(StrataError::EmptyView { level: 0 })));
    }

    #[test]
    fn test_names_error_on_dangling_identity() {
        let store = SymbolStore::new();
        let nodes = handles(&[5]);
        let view = LevelView::new(&nodes, TraversalOrder::RootToLeaf, 0);
        assert!(matches!(
            view.names(&store),
            Err(StrataError::PayloadConstruction { .. })
        ));
    }
}
