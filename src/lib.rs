//! # robotfw-base
//!
//! Parser and completion engine for pipe-delimited Robot Framework test files.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide      → Cursor classification, completion candidates, AnalysisHost
//!   ↓
//! parser   → Pipe-table grid, symbol tables, resource imports
//!   ↓
//! catalog  → Libraries, keywords, table headers, settings
//!   ↓
//! base     → Primitives (LineCol, LineIndex, TextSize)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use robotfw::ide::completions;
//! use robotfw::parser::Document;
//!
//! let doc = Document::parse("suite.robot", &text);
//! let items = completions(&doc, "| | Log | ${", 7, 12);
//! ```

/// Foundation types: LineCol, LineIndex, ordered Fx collections
pub mod base;

/// Reference catalog: library keywords, table kinds, settings
pub mod catalog;

/// Document parser: grid tokenizer, symbol table, resource imports
pub mod parser;

/// IDE features: completion
pub mod ide;

pub use base::{LineCol, LineIndex, TextRange, TextSize};
pub use catalog::{Catalog, TableKind};
pub use ide::{AnalysisHost, CompletionItem, CompletionKind, Completions, completions};
pub use parser::{Document, ImportOutcome, ParseOptions, ResourceLoader, SymbolTable};
