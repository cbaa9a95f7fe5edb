//! IDE features: completion queries over a parsed document.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take a [`Document`](crate::parser::Document) and a
//!    cursor, return candidates
//! 2. **No editor types**: Uses our own types, converted by the host
//! 3. **No errors**: An unusable cursor position yields no candidates
//!
//! ## Usage
//!
//! ```ignore
//! use robotfw::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new();
//! host.set_file_content("suite.robot", "| *** Settings *** |\n| Li");
//!
//! let items = host.completions_at(LineCol::new(1, 4));
//! ```

mod analysis;
mod completion;
mod context;

pub use analysis::{Analysis, AnalysisHost};
pub use completion::{CompletionItem, CompletionKind, CompletionMeta, Completions, completions};
pub use context::{CellContext, cell_context};
