//! Traversal order — the two-state order machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The direction a sequence of discovered members is reported in.
///
/// Used both as the container's canonical order flag and as the declared
/// emission order of an expansion function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// Parents before their children; discovery order.
    RootToLeaf,
    /// Children before their parents; reversed discovery order.
    LeafToRoot,
}

impl TraversalOrder {
    /// The opposite order. Self-inverse: reversing twice is the identity.
    pub fn reversed(self) -> Self {
        match self {
            TraversalOrder::RootToLeaf => TraversalOrder::LeafToRoot,
            TraversalOrder::LeafToRoot => TraversalOrder::RootToLeaf,
        }
    }
}

impl Default for TraversalOrder {
    fn default() -> Self {
        TraversalOrder::RootToLeaf
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalOrder::RootToLeaf => write!(f, "root_to_leaf"),
            TraversalOrder::LeafToRoot => write!(f, "leaf_to_root"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_is_self_inverse() {
        assert_eq!(TraversalOrder::RootToLeaf.reversed(), TraversalOrder::LeafToRoot);
        assert_eq!(
            TraversalOrder::RootToLeaf.reversed().reversed(),
            TraversalOrder::RootToLeaf
        );
    }

    #[test]
    fn test_default_is_root_to_leaf() {
        assert_eq!(TraversalOrder::default(), TraversalOrder::RootToLeaf);
    }
}
