//! Completions: candidates for the cell under the cursor.
//!
//! The candidate set depends only on the cursor's table column:
//!
//! | column | candidates |
//! |--------|------------|
//! | 0      | settings-table names |
//! | 1      | libraries not yet imported (after `Library`), otherwise aliases, library keywords and user keywords |
//! | 2+     | variables |
//!
//! A cursor directly after `alias.` short-circuits this and offers the keywords
//! of the aliased library.

use std::fmt;

use smol_str::SmolStr;
use tracing::debug;

use super::context::{CellContext, cell_context};
use crate::parser::Document;

/// Category of a completion candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompletionKind {
    Setting,
    Library,
    /// Keyword from a catalogued library
    Keyword,
    /// Keyword declared in a keywords table
    UserKeyword,
    Variable,
}

impl CompletionKind {
    /// Single-letter category code shown next to the candidate.
    pub fn code(self) -> char {
        match self {
            CompletionKind::Setting => 'S',
            CompletionKind::Library => 'L',
            CompletionKind::Keyword => 'K',
            CompletionKind::UserKeyword => 'k',
            CompletionKind::Variable => 'V',
        }
    }
}

impl fmt::Display for CompletionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single completion candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    pub name: SmolStr,
    pub kind: CompletionKind,
    /// Owning library, `Setting`, `Library`, `Variable` or `user defined`
    pub class: SmolStr,
}

impl CompletionItem {
    pub fn new(name: impl Into<SmolStr>, kind: CompletionKind, class: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            kind,
            class: class.into(),
        }
    }

    fn setting(name: &SmolStr) -> Self {
        Self::new(name.clone(), CompletionKind::Setting, "Setting")
    }

    fn library(name: &SmolStr) -> Self {
        Self::new(name.clone(), CompletionKind::Library, "Library")
    }

    fn keyword(name: &SmolStr, library: &SmolStr) -> Self {
        Self::new(name.clone(), CompletionKind::Keyword, library.clone())
    }

    fn user_keyword(name: &SmolStr) -> Self {
        Self::new(name.clone(), CompletionKind::UserKeyword, "user defined")
    }

    fn variable(name: &SmolStr) -> Self {
        Self::new(name.clone(), CompletionKind::Variable, "Variable")
    }

    /// `"name code class"`, for a detail popup.
    pub fn detail(&self) -> String {
        format!("{} {} {}", self.name, self.kind, self.class)
    }
}

/// Response metadata; carries nothing yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompletionMeta;

/// Result of a completion query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Completions {
    pub meta: CompletionMeta,
    pub items: Vec<CompletionItem>,
}

impl Completions {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompletionItem> {
        self.items.iter()
    }

    /// Candidate names, in result order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }
}

impl FromIterator<CompletionItem> for Completions {
    fn from_iter<I: IntoIterator<Item = CompletionItem>>(iter: I) -> Self {
        Self {
            meta: CompletionMeta,
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Completions {
    type Item = CompletionItem;
    type IntoIter = std::vec::IntoIter<CompletionItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Completion candidates for byte column `col` of `line`.
///
/// `line_number` is only used for logging. Positions outside any cell give
/// an empty result, never an error.
pub fn completions(document: &Document, line: &str, line_number: u32, col: usize) -> Completions {
    debug!(line = line_number, col, len = line.len(), "computing completions");

    let Some(context) = cell_context(line, col) else {
        return Completions::default();
    };

    if let Some(items) = qualified_keywords(document, &context) {
        return items;
    }

    let symbols = document.symbols();
    let catalog = document.catalog();
    let mut items = Vec::new();

    match context.column {
        0 => items.extend(catalog.settings().iter().map(CompletionItem::setting)),
        1 if context.first_cell() == "Library" => items.extend(
            catalog
                .importable_libraries()
                .filter(|name| !symbols.libraries().contains(*name))
                .map(CompletionItem::library),
        ),
        1 => {
            items.extend(symbols.aliases().keys().map(CompletionItem::library));
            for library in symbols.libraries() {
                items.extend(
                    catalog
                        .keywords(library)
                        .iter()
                        .map(|keyword| CompletionItem::keyword(keyword, library)),
                );
            }
            items.extend(symbols.keywords().iter().map(CompletionItem::user_keyword));
        }
        _ => items.extend(symbols.variables().iter().map(CompletionItem::variable)),
    }

    debug!(column = context.column, candidates = items.len(), "completions ready");
    items.into_iter().collect()
}

/// Keywords of the library behind `alias.`, when the alias is bound to a
/// library with catalogued keywords.
fn qualified_keywords(document: &Document, context: &CellContext<'_>) -> Option<Completions> {
    let alias = context.qualifier?;
    let library = document.symbols().resolve_alias(alias)?;
    let keywords = document.catalog().keywords(library);
    if keywords.is_empty() {
        return None;
    }

    debug!(alias, library = %library, "qualified keyword completion");
    Some(
        keywords
            .iter()
            .map(|keyword| CompletionItem::keyword(keyword, library))
            .collect(),
    )
}
