//! Pipe-table tokenizer and table segmentation.
//!
//! A document is reduced to a grid of rows. Only lines that look like a pipe
//! table row (`| cell | cell |`) take part; everything else is invisible to
//! the grid, so blank lines and prose never break a table.

use smol_str::SmolStr;

use crate::catalog::TableKind;

/// One pipe-delimited row of trimmed cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    /// 0-indexed line of the row in its document
    line: u32,
    cells: Vec<SmolStr>,
}

impl Row {
    /// Build a row from already split cells.
    pub fn new<I, S>(line: u32, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            line,
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// Tokenize one physical line.
    ///
    /// Returns `None` unless splitting on `|` yields more than two segments.
    /// The segments before the first and after the last pipe are dropped.
    pub fn from_line(line: u32, text: &str) -> Option<Row> {
        let segments: Vec<&str> = text.split('|').collect();
        if segments.len() <= 2 {
            return None;
        }
        let inner = &segments[1..segments.len() - 1];
        Some(Row::new(line, inner.iter().map(|cell| cell.trim())))
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn cells(&self) -> &[SmolStr] {
        &self.cells
    }

    /// The name cell; empty for continuation rows.
    pub fn first(&self) -> &str {
        self.cells.first().map(SmolStr::as_str).unwrap_or_default()
    }

    pub fn cell(&self, index: usize) -> Option<&SmolStr> {
        self.cells.get(index)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Any row whose first cell starts with `*` closes the current table.
    pub fn is_header(&self) -> bool {
        self.first().starts_with('*')
    }

    /// The table this row opens, if it is a recognised header.
    pub fn header_kind(&self) -> Option<TableKind> {
        if self.is_header() {
            TableKind::from_header(self.first())
        } else {
            None
        }
    }
}

/// Split document text into its grid of table rows.
pub fn split_rows(text: &str) -> Vec<Row> {
    text.lines()
        .enumerate()
        .filter_map(|(line, content)| Row::from_line(line as u32, content))
        .collect()
}

/// A table region: the rows between a recognised header and the next header.
#[derive(Clone, Copy, Debug)]
pub struct Table<'a> {
    pub kind: TableKind,
    /// The header row that opened the table
    pub header: &'a Row,
    /// Body rows, header excluded
    pub rows: &'a [Row],
}

/// Iterate over the tables of a grid.
///
/// Rows before the first recognised header are skipped, as are the rows
/// following a `*` row whose name is not a known table.
pub fn tables(rows: &[Row]) -> Tables<'_> {
    Tables { rest: rows }
}

/// Iterator returned by [`tables`].
#[derive(Clone, Debug)]
pub struct Tables<'a> {
    rest: &'a [Row],
}

impl<'a> Iterator for Tables<'a> {
    type Item = Table<'a>;

    fn next(&mut self) -> Option<Table<'a>> {
        let (start, kind) = self
            .rest
            .iter()
            .enumerate()
            .find_map(|(i, row)| row.header_kind().map(|kind| (i, kind)))?;

        let header = &self.rest[start];
        let body = &self.rest[start + 1..];
        let end = body.iter().position(Row::is_header).unwrap_or(body.len());

        // hand the terminating header back for the next scan
        self.rest = &body[end..];

        Some(Table {
            kind,
            header,
            rows: &body[..end],
        })
    }
}
