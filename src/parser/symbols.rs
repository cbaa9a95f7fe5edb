//! Symbol table: the names a document declares or pulls in.

use std::path::{Path, PathBuf};

use smol_str::SmolStr;

use crate::base::{FxIndexMap, FxIndexSet};

/// Variables every document can reference without declaring them.
pub const BUILTIN_VARIABLES: [&str; 3] = ["${EMPTY}", "${True}", "${False}"];

/// Declared and imported names of a document, including everything merged
/// in from its resource imports.
///
/// Sets only ever grow. Iteration follows insertion order, equality is set
/// equality.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    keywords: FxIndexSet<SmolStr>,
    test_cases: FxIndexSet<SmolStr>,
    variables: FxIndexSet<SmolStr>,
    libraries: FxIndexSet<SmolStr>,
    /// Alias → library name, from `WITH NAME` clauses
    aliases: FxIndexMap<SmolStr, SmolStr>,
    /// Resource files already imported in this import chain
    resources: FxIndexSet<PathBuf>,
}

impl SymbolTable {
    /// An empty table with no built-ins.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table seeded with the built-in variables and the base library.
    pub fn seeded(base_library: &str) -> Self {
        let mut table = Self::new();
        table
            .variables
            .extend(BUILTIN_VARIABLES.iter().map(|v| SmolStr::new(v)));
        table.libraries.insert(SmolStr::new(base_library));
        table
    }

    pub fn keywords(&self) -> &FxIndexSet<SmolStr> {
        &self.keywords
    }

    pub fn test_cases(&self) -> &FxIndexSet<SmolStr> {
        &self.test_cases
    }

    pub fn variables(&self) -> &FxIndexSet<SmolStr> {
        &self.variables
    }

    pub fn libraries(&self) -> &FxIndexSet<SmolStr> {
        &self.libraries
    }

    pub fn aliases(&self) -> &FxIndexMap<SmolStr, SmolStr> {
        &self.aliases
    }

    pub fn resources(&self) -> &FxIndexSet<PathBuf> {
        &self.resources
    }

    /// Library bound to `alias`, if any.
    pub fn resolve_alias(&self, alias: &str) -> Option<&SmolStr> {
        self.aliases.get(alias)
    }

    pub fn has_resource(&self, path: &Path) -> bool {
        self.resources.contains(path)
    }

    pub fn add_keyword(&mut self, name: impl Into<SmolStr>) -> bool {
        self.keywords.insert(name.into())
    }

    pub fn add_test_case(&mut self, name: impl Into<SmolStr>) -> bool {
        self.test_cases.insert(name.into())
    }

    pub fn add_variable(&mut self, name: impl Into<SmolStr>) -> bool {
        self.variables.insert(name.into())
    }

    pub fn add_library(&mut self, name: impl Into<SmolStr>) -> bool {
        self.libraries.insert(name.into())
    }

    /// Bind an alias declared in this document; a later binding wins.
    pub fn bind_alias(&mut self, alias: impl Into<SmolStr>, library: impl Into<SmolStr>) {
        self.aliases.insert(alias.into(), library.into());
    }

    pub fn add_resource(&mut self, path: impl Into<PathBuf>) -> bool {
        self.resources.insert(path.into())
    }

    /// Union another table into this one.
    ///
    /// Nothing already present is removed; an alias that is already bound
    /// keeps its library.
    pub fn merge(&mut self, other: SymbolTable) {
        self.keywords.extend(other.keywords);
        self.test_cases.extend(other.test_cases);
        self.variables.extend(other.variables);
        self.libraries.extend(other.libraries);
        for (alias, library) in other.aliases {
            self.aliases.entry(alias).or_insert(library);
        }
        self.resources.extend(other.resources);
    }

    /// Whether every entry of `other` is present here.
    pub fn contains_all(&self, other: &SymbolTable) -> bool {
        other.keywords.is_subset(&self.keywords)
            && other.test_cases.is_subset(&self.test_cases)
            && other.variables.is_subset(&self.variables)
            && other.libraries.is_subset(&self.libraries)
            && other.resources.is_subset(&self.resources)
            && other.aliases.keys().all(|alias| self.aliases.contains_key(alias))
    }

    /// Total number of entries across all sets.
    pub fn len(&self) -> usize {
        self.keywords.len()
            + self.test_cases.len()
            + self.variables.len()
            + self.libraries.len()
            + self.aliases.len()
            + self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
