//! Error types for strata.

use thiserror::Error;

use crate::symbol::SymbolId;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, StrataError>;

/// Everything that can go wrong while registering, resolving, or reading
/// a leveled container.
///
/// All variants are programming-contract violations: they are detected
/// eagerly, surfaced immediately, and never retried internally.
#[derive(Debug, Error)]
pub enum StrataError {
    /// A level was registered after the registry was sealed, or after any
    /// level had already been resolved.
    #[error("container is sealed; levels can no longer be registered")]
    Sealed,

    /// `resolve_level` was called with an index outside `[0, count)`.
    #[error("level {level} is out of range ({count} levels registered)")]
    LevelOutOfRange { level: usize, count: usize },

    /// `first`/`last` was called on a view with zero elements.
    #[error("view over level {level} has no elements")]
    EmptyView { level: usize },

    /// Member data could not be materialized because the symbol identity
    /// is not present in the store.
    #[error("cannot materialize member data: symbol {id:?} is not in the store")]
    PayloadConstruction { id: SymbolId },
}
