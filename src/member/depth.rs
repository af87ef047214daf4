//! Semantic depth enums mapped onto raw container levels.
//!
//! The raw integer API (`LeveledContainer::resolve_level`) is the single
//! validation path; these closed enums are a convenience layer so call
//! sites needn't know raw indices.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How deep a member query reaches for containers with the standard
/// three-level shape (modules, types).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberDepth {
    /// Direct members only.
    Direct,
    /// Direct members plus the members of directly nested scopes.
    Inner,
    /// All transitively contained members.
    All,
}

impl MemberDepth {
    /// The raw container level this depth maps to.
    pub fn level(self) -> usize {
        match self {
            MemberDepth::Direct => 0,
            MemberDepth::Inner => 1,
            MemberDepth::All => 2,
        }
    }
}

impl fmt::Display for MemberDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberDepth::Direct => write!(f, "direct"),
            MemberDepth::Inner => write!(f, "inner"),
            MemberDepth::All => write!(f, "all"),
        }
    }
}

/// Depth for function-member queries, which have two levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionDepth {
    /// Direct local functions only.
    Direct,
    /// All transitively nested local functions.
    All,
}

impl FunctionDepth {
    /// The raw container level this depth maps to.
    pub fn level(self) -> usize {
        match self {
            FunctionDepth::Direct => 0,
            FunctionDepth::All => 1,
        }
    }
}

impl fmt::Display for FunctionDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionDepth::Direct => write!(f, "direct"),
            FunctionDepth::All => write!(f, "all"),
        }
    }
}
