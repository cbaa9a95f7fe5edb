//! Reference catalog: libraries, their keywords, table headers and settings.
//!
//! The catalog is plain configuration data. It is built once, shared as an
//! `Arc<Catalog>` and passed into the parser and the completion engine, so a
//! test can swap in a two-library catalog without touching global state.
//!
//! Lookups never fail: an unknown library has no keywords, an unknown header
//! is not a table.

mod standard;

use std::sync::{Arc, OnceLock};

use smol_str::SmolStr;

use crate::base::FxIndexMap;

/// The four kinds of table a document may contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableKind {
    Settings,
    Variables,
    TestCases,
    Keywords,
}

impl TableKind {
    /// Classify a header cell such as `*** Test Cases ***`.
    ///
    /// Leading/trailing `*` and whitespace are stripped, the remainder must
    /// match one of the accepted spellings exactly (case-sensitive).
    pub fn from_header(cell: &str) -> Option<TableKind> {
        match strip_header(cell) {
            "Setting" | "Settings" | "Metadata" => Some(TableKind::Settings),
            "Variable" | "Variables" => Some(TableKind::Variables),
            "Test Case" | "Test Cases" => Some(TableKind::TestCases),
            "Keyword" | "Keywords" | "User Keyword" | "User Keywords" => {
                Some(TableKind::Keywords)
            }
            _ => None,
        }
    }

    /// Canonical display name of the table.
    pub fn as_str(self) -> &'static str {
        match self {
            TableKind::Settings => "Settings",
            TableKind::Variables => "Variables",
            TableKind::TestCases => "Test Cases",
            TableKind::Keywords => "Keywords",
        }
    }
}

/// Strip the `***` decoration around a table header.
pub fn strip_header(cell: &str) -> &str {
    cell.trim_matches(|c: char| c == '*' || c.is_whitespace())
}

/// Immutable table of known libraries, keywords and settings-table names.
#[derive(Clone, Debug)]
pub struct Catalog {
    /// Library that every document imports implicitly.
    base_library: SmolStr,
    /// Library name → catalogued keyword names, in catalog order.
    libraries: FxIndexMap<SmolStr, Vec<SmolStr>>,
    /// Names accepted in the first column of a settings table.
    settings: Vec<SmolStr>,
}

impl Catalog {
    /// Create a catalog that only knows its base library.
    pub fn new(base_library: impl Into<SmolStr>) -> Self {
        let base_library = base_library.into();
        let mut libraries = FxIndexMap::default();
        libraries.insert(base_library.clone(), Vec::new());
        Self {
            base_library,
            libraries,
            settings: Vec::new(),
        }
    }

    /// The catalog of standard and common third-party libraries.
    pub fn standard() -> Arc<Catalog> {
        static STANDARD: OnceLock<Arc<Catalog>> = OnceLock::new();
        STANDARD.get_or_init(|| Arc::new(standard::build())).clone()
    }

    /// Register a library and its keywords (replacing any earlier list).
    pub fn with_library<I, S>(mut self, name: impl Into<SmolStr>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.libraries
            .insert(name.into(), keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Set the settings-table names offered in the first column.
    pub fn with_settings<I, S>(mut self, settings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.settings = settings.into_iter().map(Into::into).collect();
        self
    }

    /// The implicitly imported library.
    pub fn base_library(&self) -> &SmolStr {
        &self.base_library
    }

    /// Standalone libraries a `Library` setting may name: every known
    /// library except the implicitly imported one.
    pub fn importable_libraries(&self) -> impl Iterator<Item = &SmolStr> {
        self.libraries
            .keys()
            .filter(move |name| **name != self.base_library)
    }

    /// Catalogued keywords of a library; empty if unknown or uncatalogued.
    pub fn keywords(&self, library: &str) -> &[SmolStr] {
        self.libraries
            .get(library)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Settings-table names, in catalog order.
    pub fn settings(&self) -> &[SmolStr] {
        &self.settings
    }
}

impl Default for Catalog {
    fn default() -> Self {
        standard::build()
    }
}
