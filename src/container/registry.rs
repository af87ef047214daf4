//! The level registry — ordered expansion functions behind a one-way seal.

use crate::container::order::TraversalOrder;
use crate::error::{Result, StrataError};
use crate::member::MemberHandle;

/// A registered "expand one node into its children" function.
pub type ExpansionFn<'s> = Box<dyn Fn(&MemberHandle) -> Vec<MemberHandle> + 's>;

pub(crate) struct RegisteredLevel<'s> {
    pub(crate) expand: ExpansionFn<'s>,
    /// The order the function's own output is naturally produced in; the
    /// container normalizes it to canonical buffer order at append time.
    pub(crate) emission: TraversalOrder,
}

/// Whether the registry still accepts registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RegistryState {
    Open,
    Sealed,
}

/// An ordered list of expansion functions, one per depth level.
///
/// Registration is only possible while the registry is open; sealing is a
/// one-way transition. The owning container seals the registry on its
/// first resolution, so levels can never be inserted under an
/// already-computed result.
pub struct LevelRegistry<'s> {
    levels: Vec<RegisteredLevel<'s>>,
    state: RegistryState,
}

impl<'s> LevelRegistry<'s> {
    pub fn new() -> Self {
        Self {
            levels: Vec::new(),
            state: RegistryState::Open,
        }
    }

    /// Append `expand` as the next level and return its index.
    ///
    /// Fails with `Sealed` once the registry has been sealed.
    pub fn register(
        &mut self,
        emission: TraversalOrder,
        expand: impl Fn(&MemberHandle) -> Vec<MemberHandle> + 's,
    ) -> Result<usize> {
        if self.state == RegistryState::Sealed {
            return Err(StrataError::Sealed);
        }
        let index = self.levels.len();
        self.levels.push(RegisteredLevel {
            expand: Box::new(expand),
            emission,
        });
        Ok(index)
    }

    /// Permanently close the registry. Idempotent; returns whether this
    /// call performed the transition.
    pub fn seal(&mut self) -> bool {
        let sealed_now = self.state == RegistryState::Open;
        self.state = RegistryState::Sealed;
        sealed_now
    }

    pub fn is_sealed(&self) -> bool {
        self.state == RegistryState::Sealed
    }

    /// Number of registered levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub(crate) fn get(&self, level: usize) -> Option<&RegisteredLevel<'s>> {
        self.levels.get(level)
    }
}

impl Default for LevelRegistry<'_> {
    fn default() -> Self {
        Self::new()
    }
}
