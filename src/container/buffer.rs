//! The shared expansion buffer.
//!
//! One growable, append-only sequence holds every node discovered across
//! all resolved levels; each resolved level owns a contiguous range of it.

use crate::member::MemberHandle;

/// The buffer range owned by one resolved level's newly discovered nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LevelBounds {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

/// Append-only node storage plus the recorded range of each resolved
/// level. Ranges are contiguous and non-overlapping: a node discovered at
/// level K sits strictly after every node of levels < K.
#[derive(Default)]
pub(crate) struct ExpansionBuffer {
    nodes: Vec<MemberHandle>,
    bounds: Vec<LevelBounds>,
}

impl ExpansionBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a node (the root) ahead of level 0's range.
    ///
    /// Only valid before any level has been recorded.
    pub(crate) fn seed(&mut self, handle: MemberHandle) {
        debug_assert!(self.bounds.is_empty(), "seed must precede expansion");
        self.nodes.push(handle);
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node(&self, index: usize) -> &MemberHandle {
        &self.nodes[index]
    }

    /// The prefix `[0, end)` of the buffer.
    pub(crate) fn nodes_up_to(&self, end: usize) -> &[MemberHandle] {
        &self.nodes[..end]
    }

    /// How many levels have been recorded so far.
    pub(crate) fn resolved_levels(&self) -> usize {
        self.bounds.len()
    }

    pub(crate) fn bounds_of(&self, level: usize) -> Option<LevelBounds> {
        self.bounds.get(level).copied()
    }

    /// Append one level's newly discovered nodes and record its range.
    pub(crate) fn record_level(&mut self, discovered: Vec<MemberHandle>) -> LevelBounds {
        let start = self.nodes.len();
        self.nodes.extend(discovered);
        let bounds = LevelBounds {
            start,
            end: self.nodes.len(),
        };
        self.bounds.push(bounds);
        bounds
    }

    /// Release spare backing capacity once no further growth is expected.
    pub(crate) fn trim(&mut self) {
        self.nodes.shrink_to_fit();
        self.bounds.shrink_to_fit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::SymbolId;

    fn handles(ids: &[usize]) -> Vec<MemberHandle> {
        ids.iter().map(|&i| MemberHandle::new(SymbolId::from_raw(i))).collect()
    }

    #[test]
    fn test_record_level_ranges_are_contiguous() {
        let mut buffer = ExpansionBuffer::new();
        let first = buffer.record_level(handles(&[0, 1]));
        let second = buffer.record_level(handles(&[2, 3, 4]));

        assert_eq!((first.start, first.end), (0, 2));
        assert_eq!((second.start, second.end), (2, 5));
        assert_eq!(buffer.resolved_levels(), 2);
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.node(2).id(), SymbolId::from_raw(2));
    }

    #[test]
    fn test_seed_precedes_level_zero() {
        let mut buffer = ExpansionBuffer::new();
        buffer.seed(MemberHandle::new(SymbolId::from_raw(9)));
        let bounds = buffer.record_level(handles(&[0]));

        assert_eq!((bounds.start, bounds.end), (1, 2));
        assert_eq!(buffer.node(0).id(), SymbolId::from_raw(9));
        assert_eq!(buffer.nodes_up_to(bounds.end).len(), 2);
    }

    #[test]
    fn test_empty_level_records_empty_range() {
        let mut buffer = ExpansionBuffer::new();
        let bounds = buffer.record_level(Vec::new());
        assert_eq!(bounds.start, bounds.end);
        assert_eq!(buffer.resolved_levels(), 1);
    }
}
