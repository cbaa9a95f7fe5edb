//! Document parser: pipe tables to symbol tables.
//!
//! ## Pipeline
//!
//! ```text
//! text ──split_rows──▶ Vec<Row> ──tables──▶ Table* ──DocumentParser──▶ SymbolTable
//!                                                        │
//!                                          Resource ─────┘ (ResourceLoader, recursive)
//! ```

mod document;
mod grid;
mod source;
mod symbols;

pub use document::{Document, ImportOutcome, ParseOptions};
pub use grid::{Row, Table, Tables, split_rows, tables};
pub use source::{FsLoader, ImportError, ResourceLoader, SourceSet};
pub use symbols::{BUILTIN_VARIABLES, SymbolTable};
