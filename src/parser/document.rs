//! Document parsing and resource import resolution.
//!
//! A [`Document`] is built in one go: its rows are split into tables, each
//! table contributes names to a [`SymbolTable`], and every `Resource` setting
//! is located, loaded through the [`ResourceLoader`] and parsed recursively.
//! The imported document is discarded once its symbols are merged.
//!
//! Cycles are cut with an [`ImportChain`]: a borrowed, upward-only list of the
//! resource sets of every parse currently in progress.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use smol_str::SmolStr;
use tracing::{debug, info, warn};

use super::grid::{self, Row};
use super::source::{FsLoader, ImportError, ResourceLoader};
use super::symbols::SymbolTable;
use crate::catalog::{Catalog, TableKind};

/// Options controlling how a document is parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Locate and merge `Resource` imports
    pub follow_resources: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            follow_resources: true,
        }
    }
}

/// What happened to one `Resource` setting.
#[derive(Debug)]
pub enum ImportOutcome {
    /// Parsed and merged; `symbols` counts the entries the resource carried
    Imported { path: PathBuf, symbols: usize },
    /// Already imported somewhere in the current import chain
    AlreadyImported { path: PathBuf },
    /// No ancestor directory contains the resource
    NotFound { resource: SmolStr },
    /// Located but could not be loaded; contributed nothing
    Failed { path: PathBuf, error: ImportError },
}

impl ImportOutcome {
    pub fn is_imported(&self) -> bool {
        matches!(self, ImportOutcome::Imported { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ImportOutcome::Failed { .. })
    }

    /// Resolved path, when the resource was located.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ImportOutcome::Imported { path, .. }
            | ImportOutcome::AlreadyImported { path }
            | ImportOutcome::Failed { path, .. } => Some(path),
            ImportOutcome::NotFound { .. } => None,
        }
    }
}

/// Resources imported by the parses currently on the stack, innermost first.
#[derive(Clone, Copy, Debug)]
struct ImportChain<'a> {
    resources: &'a SymbolTable,
    parent: Option<&'a ImportChain<'a>>,
}

impl ImportChain<'_> {
    fn contains(&self, path: &Path) -> bool {
        self.resources.has_resource(path) || self.parent.is_some_and(|p| p.contains(path))
    }
}

/// A parsed document with its fully merged symbol table.
#[derive(Debug)]
pub struct Document {
    path: PathBuf,
    catalog: Arc<Catalog>,
    symbols: SymbolTable,
    imports: Vec<ImportOutcome>,
}

impl Document {
    /// Parse with the standard catalog, reading resources from disk.
    pub fn parse(path: impl Into<PathBuf>, contents: &str) -> Document {
        Document::parse_with(
            path,
            contents,
            &FsLoader,
            Catalog::standard(),
            ParseOptions::default(),
        )
    }

    /// Parse with an explicit loader, catalog and options.
    ///
    /// This always builds a root document. Imported resources reach their
    /// importers through an internal chain of parent frames, used for the
    /// cycle guard, and are merged into the root's symbols.
    pub fn parse_with(
        path: impl Into<PathBuf>,
        contents: &str,
        loader: &dyn ResourceLoader,
        catalog: Arc<Catalog>,
        options: ParseOptions,
    ) -> Document {
        let path = path.into();
        let (symbols, imports) =
            DocumentParser::new(&path, None, loader, &catalog, options).parse(contents);

        info!(
            file = %path.display(),
            keywords = symbols.keywords().len(),
            test_cases = symbols.test_cases().len(),
            variables = symbols.variables().len(),
            resources = symbols.resources().len(),
            "parsed document"
        );

        Document {
            path,
            catalog,
            symbols,
            imports,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Every resource import attempt, nested imports included.
    pub fn imports(&self) -> &[ImportOutcome] {
        &self.imports
    }
}

/// A parse in progress for one file.
struct DocumentParser<'a> {
    path: &'a Path,
    parent: Option<&'a ImportChain<'a>>,
    loader: &'a dyn ResourceLoader,
    catalog: &'a Catalog,
    options: ParseOptions,
    symbols: SymbolTable,
    imports: Vec<ImportOutcome>,
}

impl<'a> DocumentParser<'a> {
    fn new(
        path: &'a Path,
        parent: Option<&'a ImportChain<'a>>,
        loader: &'a dyn ResourceLoader,
        catalog: &'a Catalog,
        options: ParseOptions,
    ) -> Self {
        Self {
            path,
            parent,
            loader,
            catalog,
            options,
            symbols: SymbolTable::seeded(catalog.base_library()),
            imports: Vec::new(),
        }
    }

    fn parse(mut self, contents: &str) -> (SymbolTable, Vec<ImportOutcome>) {
        let rows = grid::split_rows(contents);

        for table in grid::tables(&rows) {
            debug!(
                file = %self.path.display(),
                table = table.kind.as_str(),
                line = table.header.line(),
                rows = table.rows.len(),
                "found table"
            );
            match table.kind {
                TableKind::Settings => self.parse_settings(table.rows),
                TableKind::Variables => {
                    for name in declared_names(table.rows) {
                        debug!(variable = %name, "found variable");
                        self.symbols.add_variable(name.clone());
                    }
                }
                TableKind::TestCases => {
                    for name in declared_names(table.rows) {
                        debug!(test_case = %name, "found test case");
                        self.symbols.add_test_case(name.clone());
                    }
                }
                TableKind::Keywords => {
                    for name in declared_names(table.rows) {
                        debug!(keyword = %name, "found keyword");
                        self.symbols.add_keyword(name.clone());
                    }
                }
            }
        }

        (self.symbols, self.imports)
    }

    fn parse_settings(&mut self, rows: &[Row]) {
        for row in rows {
            match row.first() {
                "Resource" => {
                    if let Some(resource) = row.cell(1) {
                        if self.options.follow_resources {
                            self.import_resource(resource);
                        }
                    }
                }
                "Library" => self.parse_library_setting(row),
                _ => {}
            }
        }
    }

    /// `| Library | Name | args... | WITH NAME | Alias |`
    fn parse_library_setting(&mut self, row: &Row) {
        let Some(library) = row.cell(1).filter(|name| !name.is_empty()) else {
            return;
        };
        debug!(library = %library, "imported library");
        self.symbols.add_library(library.clone());

        let cells = row.cells();
        if cells.len() >= 4 && cells[cells.len() - 2].eq_ignore_ascii_case("WITH NAME") {
            let alias = &cells[cells.len() - 1];
            if !alias.is_empty() {
                debug!(alias = %alias, library = %library, "bound library alias");
                self.symbols.bind_alias(alias.clone(), library.clone());
            }
        }
    }

    fn import_resource(&mut self, resource: &SmolStr) {
        let Some(path) = self.locate_resource(resource) else {
            debug!(file = %self.path.display(), resource = %resource, "resource not found");
            self.imports.push(ImportOutcome::NotFound {
                resource: resource.clone(),
            });
            return;
        };

        if self.has_imported_resource(&path) {
            debug!(path = %path.display(), "resource already imported, skipping");
            self.imports.push(ImportOutcome::AlreadyImported { path });
            return;
        }

        let contents = match self.loader.load(&path) {
            Ok(contents) => contents,
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to import resource");
                self.imports.push(ImportOutcome::Failed { path, error });
                return;
            }
        };

        info!(path = %path.display(), "importing resource");
        self.symbols.add_resource(path.clone());

        let chain = ImportChain {
            resources: &self.symbols,
            parent: self.parent,
        };
        let (imported, nested) =
            DocumentParser::new(&path, Some(&chain), self.loader, self.catalog, self.options)
                .parse(&contents);

        let symbols = imported.len();
        self.symbols.merge(imported);
        self.imports.extend(nested);
        self.imports.push(ImportOutcome::Imported { path, symbols });
    }

    /// Whether this parse or any importer above it already pulled in `path`.
    fn has_imported_resource(&self, path: &Path) -> bool {
        ImportChain {
            resources: &self.symbols,
            parent: self.parent,
        }
        .contains(path)
    }

    /// Find `resource` relative to this file's directory or the nearest
    /// ancestor directory that contains it, and return its canonical path.
    ///
    /// Leading `..` segments are dropped before the search. The search stops
    /// at the first component of a relative document path.
    fn locate_resource(&self, resource: &str) -> Option<PathBuf> {
        let relative: PathBuf = resource
            .split(['/', '\\'])
            .filter(|segment| !segment.is_empty())
            .skip_while(|segment| *segment == "..")
            .collect();
        if relative.as_os_str().is_empty() {
            return None;
        }

        let dir = self.path.parent().unwrap_or(Path::new(""));
        dir.ancestors()
            .filter(|ancestor| !ancestor.as_os_str().is_empty())
            .map(|ancestor| ancestor.join(&relative))
            .find(|candidate| self.loader.exists(candidate))
            .map(|found| self.loader.canonicalize(&found))
            .inspect(|found| debug!(path = %found.display(), "located resource"))
    }
}

/// Names declared in a table body: every non-empty first cell.
///
/// Continuation rows leave the first cell blank and are skipped.
fn declared_names(rows: &[Row]) -> impl Iterator<Item = &SmolStr> {
    rows.iter()
        .filter_map(|row| row.cell(0))
        .filter(|name| !name.is_empty())
}
