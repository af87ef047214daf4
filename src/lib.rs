//! # Strata
//!
//! Leveled member resolution for code intelligence.
//!
//! Strata answers "give me the members of this symbol down to depth N"
//! without recomputing already-known levels and without allocating a
//! fresh collection per query. A leveled container expands a symbol
//! hierarchy breadth-level-by-breadth-level into one shared buffer and
//! memoizes every computed level as an immutable view. Reversing the
//! enumeration order is an index transform, not a copy.
//!
//! ## Key Features
//!
//! - **Lazy**: levels expand on first request; escalating a query from
//!   "direct" to "all" only pays for the delta
//! - **Memoized**: re-resolving a level is O(1) and re-runs nothing
//! - **Order-flexible**: root→leaf and leaf→root enumeration over the
//!   same buffer
//! - **Prunable**: a skip predicate keeps whole subtrees out of deeper
//!   levels
//!
//! ## Quick Start
//!
//! ```rust
//! use strata::{MemberDepth, ModuleMembers, SymbolData, SymbolKind, SymbolStore};
//!
//! # fn main() -> strata::Result<()> {
//! let mut store = SymbolStore::new();
//! let root = store.add_symbol(None, SymbolData::new("crate", SymbolKind::Module));
//! let net = store.add_symbol(Some(root), SymbolData::new("net", SymbolKind::Module));
//! store.add_symbol(Some(net), SymbolData::new("Listener", SymbolKind::Type));
//!
//! let mut members = ModuleMembers::new(&store, root)?;
//! let all = members.resolve(MemberDepth::All)?;
//! assert_eq!(all.names(&store)?, ["net", "Listener"]);
//! # Ok(())
//! # }
//! ```

pub mod container;
pub mod error;
pub mod member;
pub mod symbol;

// Re-exports for convenience
pub use error::{Result, StrataError};

// Container engine re-exports
pub use container::{ExpansionFn, LevelRegistry, LevelView, LeveledContainer, TraversalOrder};

// Member layer re-exports
pub use member::{
    FunctionDepth, FunctionMembers, MemberData, MemberDepth, MemberHandle, ModuleMembers,
    TypeMembers,
};

// Symbol hierarchy re-exports
pub use symbol::{StoreStats, SymbolData, SymbolId, SymbolKind, SymbolRecord, SymbolStore};

#[cfg(test)]
mod tests {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    fn sample_records() -> Vec<SymbolRecord> {
        vec![
            SymbolRecord::new("net", SymbolKind::Module).contained_in("crate"),
            SymbolRecord::new("Listener", SymbolKind::Type).contained_in("crate::net"),
            SymbolRecord::new("accept", SymbolKind::Function)
                .contained_in("crate::net::Listener"),
            SymbolRecord::new("fd", SymbolKind::Field).contained_in("crate::net::Listener"),
            SymbolRecord::new("fmt", SymbolKind::Module).contained_in("crate"),
            SymbolRecord::new("render", SymbolKind::Function).contained_in("crate::fmt"),
        ]
    }

    #[test]
    fn test_end_to_end_module_query() {
        init_tracing();

        let mut store = SymbolStore::new();
        let root = store.add_symbol(None, SymbolData::new("crate", SymbolKind::Module));
        store.build_from_records(root, sample_records());

        let mut members = ModuleMembers::new(&store, root).expect("adapter builds");

        let direct = members.resolve(MemberDepth::Direct).expect("direct resolves");
        assert_eq!(direct.names(&store).expect("live"), ["net", "fmt"]);

        let all = members.resolve(MemberDepth::All).expect("all resolves");
        assert_eq!(
            all.names(&store).expect("live"),
            ["net", "fmt", "Listener", "render", "accept", "fd"]
        );

        // Payloads materialize with fully qualified paths.
        let payloads = all.payloads(&store).expect("payloads build");
        let accept = payloads
            .iter()
            .find(|data| data.name == "accept")
            .expect("accept is a transitive member");
        assert_eq!(accept.qualified_name, "crate::net::Listener::accept");

        // Reversal flips every materialized view without re-expanding.
        members.reverse();
        let reversed = members.resolve(MemberDepth::All).expect("memoized");
        assert_eq!(
            reversed.names(&store).expect("live"),
            ["fd", "accept", "render", "Listener", "fmt", "net"]
        );
    }

    #[test]
    fn test_type_and_function_queries_share_one_store() {
        let mut store = SymbolStore::new();
        let root = store.add_symbol(None, SymbolData::new("crate", SymbolKind::Module));
        store.build_from_records(root, sample_records());

        let listener = store
            .find_by_path("crate::net::Listener")
            .expect("listener ingested");
        let mut type_members = TypeMembers::new(&store, listener).expect("adapter builds");
        let view = type_members.resolve(MemberDepth::Direct).expect("resolves");
        assert_eq!(view.names(&store).expect("live"), ["accept", "fd"]);

        let accept = store
            .find_by_path("crate::net::Listener::accept")
            .expect("accept ingested");
        let mut locals = FunctionMembers::new(&store, accept).expect("adapter builds");
        assert!(locals.resolve(FunctionDepth::All).expect("resolves").is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let record = SymbolRecord::new("accept", SymbolKind::Function)
            .contained_in("crate::net::Listener");
        let json = serde_json::to_string(&record).expect("record serializes");
        assert!(json.contains("\"function\""));
        let back: SymbolRecord = serde_json::from_str(&json).expect("record deserializes");
        assert_eq!(back, record);

        let mut store = SymbolStore::new();
        let root = store.add_symbol(None, SymbolData::new("crate", SymbolKind::Module));
        let stats_json = serde_json::to_string(&store.stats()).expect("stats serialize");
        assert!(stats_json.contains("\"symbol_count\":1"));

        let handle = MemberHandle::new(root);
        let data = handle.data(&store).expect("payload builds");
        let data_json = serde_json::to_string(data).expect("payload serializes");
        let back: MemberData = serde_json::from_str(&data_json).expect("payload deserializes");
        assert_eq!(back, *data);
    }
}

#[cfg(test)]
mod benchmarks {
    use super::*;

    #[test]
    fn benchmark_resolve_wide_tree() {
        // 100 modules x 20 types under one root: 2101 symbols.
        let mut store = SymbolStore::new();
        let root = store.add_symbol(None, SymbolData::new("crate", SymbolKind::Module));
        for module in 0..100 {
            let module_id = store.add_symbol(
                Some(root),
                SymbolData::new(format!("m{module}"), SymbolKind::Module),
            );
            for ty in 0..20 {
                store.add_symbol(
                    Some(module_id),
                    SymbolData::new(format!("T{ty}"), SymbolKind::Type),
                );
            }
        }

        let mut members = ModuleMembers::new(&store, root).expect("adapter builds");

        let start = std::time::Instant::now();
        let count = members.resolve(MemberDepth::All).expect("all resolves").len();
        let cold = start.elapsed();
        assert_eq!(count, 2100);

        let start = std::time::Instant::now();
        members.resolve(MemberDepth::All).expect("memoized");
        let warm = start.elapsed();

        println!(
            "Resolve benchmark: cold {}us, warm {}us",
            cold.as_micros(),
            warm.as_micros()
        );
        assert!(cold.as_millis() < 100);
    }
}
