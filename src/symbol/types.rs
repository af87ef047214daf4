//! Core types for the symbol hierarchy.
//!
//! Defines symbol kinds, the data stored per symbol, and the flat record
//! format used to ingest a hierarchy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The kind of a symbol in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    /// A module or namespace.
    Module,
    /// A struct, class, enum, or other nominal type.
    Type,
    /// A trait or interface.
    Trait,
    /// A free function, method, or local function.
    Function,
    /// A field of a type.
    Field,
    /// A constant or static.
    Constant,
    /// A local variable binding.
    Variable,
    /// An import/use statement.
    Import,
}

impl SymbolKind {
    /// Whether symbols of this kind introduce a scope that can itself
    /// declare members.
    pub fn is_scope(self) -> bool {
        matches!(
            self,
            SymbolKind::Module | SymbolKind::Type | SymbolKind::Trait | SymbolKind::Function
        )
    }

    /// Whether this kind names a type declaration.
    pub fn is_type_like(self) -> bool {
        matches!(self, SymbolKind::Type | SymbolKind::Trait)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Module => write!(f, "module"),
            SymbolKind::Type => write!(f, "type"),
            SymbolKind::Trait => write!(f, "trait"),
            SymbolKind::Function => write!(f, "function"),
            SymbolKind::Field => write!(f, "field"),
            SymbolKind::Constant => write!(f, "constant"),
            SymbolKind::Variable => write!(f, "variable"),
            SymbolKind::Import => write!(f, "import"),
        }
    }
}

/// Data stored per symbol in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolData {
    /// The symbol's declared name (e.g. "Listener", "accept").
    pub name: String,
    /// What kind of symbol this is.
    pub kind: SymbolKind,
    /// The file this symbol is declared in.
    pub file_path: PathBuf,
    /// Starting line number (1-indexed; 0 when unknown).
    pub line_start: usize,
    /// Ending line number (1-indexed; 0 when unknown).
    pub line_end: usize,
}

impl SymbolData {
    pub fn new(name: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            kind,
            file_path: PathBuf::new(),
            line_start: 0,
            line_end: 0,
        }
    }

    /// Attach a source location.
    pub fn located(mut self, file_path: impl Into<PathBuf>, line_start: usize, line_end: usize) -> Self {
        self.file_path = file_path.into();
        self.line_start = line_start;
        self.line_end = line_end;
        self
    }
}

/// A flat symbol record, the intermediate representation an extraction
/// front end hands to the store before any hierarchy exists.
///
/// `parent` is the qualified path of the containing symbol
/// (e.g. `"crate::net"`); records whose parent cannot be resolved attach
/// to the ingest root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolRecord {
    /// Symbol name.
    pub name: String,
    /// What kind of symbol.
    pub kind: SymbolKind,
    /// Qualified path of the parent symbol, if any.
    pub parent: Option<String>,
    /// File the symbol was declared in.
    pub file_path: PathBuf,
    /// Line where the symbol starts (1-indexed).
    pub line_start: usize,
    /// Line where the symbol ends (1-indexed).
    pub line_end: usize,
}

impl SymbolRecord {
    pub fn new(name: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            kind,
            parent: None,
            file_path: PathBuf::new(),
            line_start: 0,
            line_end: 0,
        }
    }

    /// Set the qualified path of the containing symbol.
    pub fn contained_in(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}
