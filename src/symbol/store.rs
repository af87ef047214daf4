//! The symbol store — the hierarchy the container's expansion functions walk.
//!
//! Uses petgraph to hold the containment tree and provides deterministic
//! child enumeration, qualified-name resolution, and flat-record ingest.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use super::types::{SymbolData, SymbolKind, SymbolRecord};

/// Identity of a symbol in the store.
///
/// Copyable and cheap to pass; symbols are compared by index equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolId(NodeIndex);

impl SymbolId {
    /// Create an identity from a raw index.
    ///
    /// The caller must ensure the index refers to a symbol in the store;
    /// a dangling identity surfaces as `PayloadConstruction` when its
    /// payload is materialized.
    pub fn from_raw(raw: usize) -> Self {
        Self(NodeIndex::new(raw))
    }

    /// The raw index value.
    pub fn raw(self) -> usize {
        self.0.index()
    }
}

/// The symbol hierarchy — holds all symbols, their containment edges, and
/// indexes for fast lookup.
///
/// The store only grows during an analysis pass; there is no removal API.
pub struct SymbolStore {
    /// The directed graph; an edge `parent -> child` means "contains".
    graph: DiGraph<SymbolData, ()>,
    /// Index: symbol name -> every symbol carrying that name.
    name_index: HashMap<String, Vec<SymbolId>>,
    /// Index: qualified path ("crate::net::Listener") -> symbol.
    path_index: HashMap<String, SymbolId>,
}

impl SymbolStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            name_index: HashMap::new(),
            path_index: HashMap::new(),
        }
    }

    // ─── Building ───────────────────────────────────────────────

    /// Add a symbol under `parent` (or as a root when `parent` is `None`).
    /// Returns the new symbol's identity.
    pub fn add_symbol(&mut self, parent: Option<SymbolId>, data: SymbolData) -> SymbolId {
        let name = data.name.clone();
        let idx = self.graph.add_node(data);
        let id = SymbolId(idx);

        if let Some(parent) = parent {
            self.graph.add_edge(parent.0, idx, ());
        }

        self.name_index.entry(name).or_default().push(id);
        if let Some(path) = self.qualified_name(id) {
            self.path_index.insert(path, id);
        }

        id
    }

    /// Ingest a flat list of records into the hierarchy under `root`.
    ///
    /// Parents are resolved by qualified path, so records are expected in
    /// source order (containers before their members); records whose
    /// parent path is absent or unresolvable attach directly to `root`.
    pub fn build_from_records(&mut self, root: SymbolId, records: Vec<SymbolRecord>) {
        debug!(record_count = records.len(), "ingesting symbol records");
        for record in records {
            let parent = record
                .parent
                .as_deref()
                .and_then(|path| self.find_by_path(path))
                .unwrap_or(root);
            self.add_symbol(
                Some(parent),
                SymbolData {
                    name: record.name,
                    kind: record.kind,
                    file_path: record.file_path,
                    line_start: record.line_start,
                    line_end: record.line_end,
                },
            );
        }
    }

    // ─── Lookup ─────────────────────────────────────────────────

    /// The data stored for a symbol, if the identity is live.
    pub fn symbol(&self, id: SymbolId) -> Option<&SymbolData> {
        self.graph.node_weight(id.0)
    }

    /// The symbol's declared name.
    pub fn display_name(&self, id: SymbolId) -> Option<&str> {
        self.symbol(id).map(|data| data.name.as_str())
    }

    /// The containing symbol, if any.
    pub fn parent(&self, id: SymbolId) -> Option<SymbolId> {
        self.graph
            .neighbors_directed(id.0, Direction::Incoming)
            .next()
            .map(SymbolId)
    }

    /// The fully qualified path of a symbol ("crate::net::Listener"),
    /// assembled from its ancestor chain.
    pub fn qualified_name(&self, id: SymbolId) -> Option<String> {
        let mut segments = vec![self.display_name(id)?.to_string()];
        let mut cursor = id;
        while let Some(parent) = self.parent(cursor) {
            segments.push(self.display_name(parent)?.to_string());
            cursor = parent;
        }
        segments.reverse();
        Some(segments.join("::"))
    }

    /// Every symbol carrying the given name, in insertion order.
    pub fn find_by_name(&self, name: &str) -> Vec<SymbolId> {
        self.name_index.get(name).cloned().unwrap_or_default()
    }

    /// Look a symbol up by its qualified path.
    pub fn find_by_path(&self, path: &str) -> Option<SymbolId> {
        self.path_index.get(path).copied()
    }

    // ─── Traversal ──────────────────────────────────────────────

    /// Direct children of a symbol, in insertion order.
    pub fn children(&self, id: SymbolId) -> Vec<SymbolId> {
        // petgraph yields outgoing neighbors in reverse insertion order
        let mut out: Vec<SymbolId> = self
            .graph
            .neighbors_directed(id.0, Direction::Outgoing)
            .map(SymbolId)
            .collect();
        out.reverse();
        out
    }

    /// The full subtree below a symbol, depth-first in declaration order.
    pub fn descendants(&self, id: SymbolId) -> Vec<SymbolId> {
        self.descendants_filtered(id, |_| true)
    }

    /// The subtree below a symbol, recursing only into children whose kind
    /// satisfies `descend`. Every child encountered is included; pruned
    /// children are included but their subtrees are not visited.
    pub fn descendants_filtered(
        &self,
        id: SymbolId,
        mut descend: impl FnMut(SymbolKind) -> bool,
    ) -> Vec<SymbolId> {
        let mut out = Vec::new();
        let mut stack = self.children(id);
        stack.reverse();
        while let Some(next) = stack.pop() {
            out.push(next);
            let recurse = self
                .symbol(next)
                .map(|data| descend(data.kind))
                .unwrap_or(false);
            if recurse {
                let mut kids = self.children(next);
                kids.reverse();
                stack.append(&mut kids);
            }
        }
        out
    }

    // ─── Stats ──────────────────────────────────────────────────

    /// Store statistics.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            symbol_count: self.graph.node_count(),
            containment_edges: self.graph.edge_count(),
            unique_names: self.name_index.len(),
            root_count: self
                .graph
                .externals(Direction::Incoming)
                .count(),
        }
    }
}

impl Default for SymbolStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStats {
    pub symbol_count: usize,
    pub containment_edges: usize,
    pub unique_names: usize,
    pub root_count: usize,
}
