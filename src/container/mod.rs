//! The leveled container module — the expansion cache engine.
//!
//! Provides the level registry, the shared expansion buffer, memoized
//! level views, and order/reversal control.

mod buffer;
pub mod leveled;
pub mod order;
pub mod registry;
pub mod view;

pub use leveled::LeveledContainer;
pub use order::TraversalOrder;
pub use registry::{ExpansionFn, LevelRegistry};
pub use view::LevelView;
