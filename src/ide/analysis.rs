//! AnalysisHost: owns the most recently parsed document.
//!
//! The host keeps one document at a time. A caller re-parses through
//! [`AnalysisHost::set_file_content`] whenever the file changes; queries in
//! between always run against the last parse, even for lines that did not
//! exist when it was made.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use super::completion::{Completions, completions};
use crate::base::{LineCol, LineIndex, TextSize};
use crate::catalog::Catalog;
use crate::parser::{Document, FsLoader, ParseOptions, ResourceLoader};

/// Owner of the current document and the settings used to parse it.
pub struct AnalysisHost {
    loader: Arc<dyn ResourceLoader>,
    catalog: Arc<Catalog>,
    options: ParseOptions,
    file: Option<ParsedFile>,
}

struct ParsedFile {
    document: Document,
    text: Arc<str>,
    line_index: LineIndex,
}

impl AnalysisHost {
    /// A host using the standard catalog and the filesystem.
    pub fn new() -> Self {
        Self {
            loader: Arc::new(FsLoader),
            catalog: Catalog::standard(),
            options: ParseOptions::default(),
            file: None,
        }
    }

    pub fn with_loader(mut self, loader: Arc<dyn ResourceLoader>) -> Self {
        self.loader = loader;
        self
    }

    pub fn with_catalog(mut self, catalog: Arc<Catalog>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse `text` as the current document, replacing any previous one.
    pub fn set_file_content(&mut self, path: impl Into<PathBuf>, text: impl Into<Arc<str>>) {
        let text = text.into();
        let document = Document::parse_with(
            path,
            &text,
            self.loader.as_ref(),
            self.catalog.clone(),
            self.options,
        );
        debug!(file = %document.path().display(), "document ready");

        self.file = Some(ParsedFile {
            line_index: LineIndex::new(&text),
            document,
            text,
        });
    }

    /// Forget the current document.
    pub fn clear(&mut self) {
        self.file = None;
    }

    /// Path of the current document.
    pub fn path(&self) -> Option<&Path> {
        self.file.as_ref().map(|file| file.document.path())
    }

    /// The current document, if one has been parsed.
    pub fn document(&self) -> Option<&Document> {
        self.file.as_ref().map(|file| &file.document)
    }

    /// Read-only view for queries.
    pub fn analysis(&self) -> Option<Analysis<'_>> {
        self.file.as_ref().map(|file| Analysis {
            document: &file.document,
            text: &file.text,
            line_index: &file.line_index,
        })
    }

    /// Completions for an explicit line text; empty without a document.
    pub fn completions(&self, line_text: &str, line: u32, col: usize) -> Completions {
        self.analysis()
            .map(|analysis| analysis.completions(line_text, line, col))
            .unwrap_or_default()
    }

    /// Completions at a 0-indexed position of the stored text.
    pub fn completions_at(&self, position: LineCol) -> Completions {
        self.analysis()
            .map(|analysis| analysis.completions_at(position))
            .unwrap_or_default()
    }

    /// Completions at a 1-indexed editor position.
    pub fn completions_at_one_indexed(&self, line: u32, col: u32) -> Completions {
        self.completions_at(LineCol::from_one_indexed(line, col))
    }

    /// Completions at a byte offset of the stored text.
    pub fn completions_at_offset(&self, offset: TextSize) -> Completions {
        self.analysis()
            .map(|analysis| analysis.completions_at_offset(offset))
            .unwrap_or_default()
    }

    /// Whether a query at `position` would offer anything.
    pub fn should_complete(&self, position: LineCol) -> bool {
        !self.completions_at(position).is_empty()
    }
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed view of a parsed document and its text.
#[derive(Clone, Copy)]
pub struct Analysis<'a> {
    document: &'a Document,
    text: &'a str,
    line_index: &'a LineIndex,
}

impl<'a> Analysis<'a> {
    pub fn document(&self) -> &'a Document {
        self.document
    }

    /// Text of a stored line, without its terminator.
    pub fn line_text(&self, line: u32) -> Option<&'a str> {
        self.line_index.line_text(self.text, line)
    }

    pub fn completions(&self, line_text: &str, line: u32, col: usize) -> Completions {
        completions(self.document, line_text, line, col)
    }

    /// Lines past the end of the stored text have no candidates.
    pub fn completions_at(&self, position: LineCol) -> Completions {
        match self.line_text(position.line) {
            Some(text) => self.completions(text, position.line, position.col as usize),
            None => Completions::default(),
        }
    }

    pub fn completions_at_offset(&self, offset: TextSize) -> Completions {
        self.completions_at(self.line_index.line_col(offset))
    }
}
