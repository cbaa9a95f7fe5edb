//! Cursor classification: which cell of a row the cursor is completing.

/// Where the cursor sits inside a table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellContext<'a> {
    /// 0-indexed table column (the cell after the `column + 1`-th pipe)
    pub column: usize,
    /// Raw (untrimmed) cells of the row, first cell first
    pub cells: Vec<&'a str>,
    /// Word before a `.` directly left of the cursor (`alias.`)
    pub qualifier: Option<&'a str>,
}

impl CellContext<'_> {
    /// The row's first cell, trimmed.
    pub fn first_cell(&self) -> &str {
        self.cells.first().map(|cell| cell.trim()).unwrap_or_default()
    }
}

/// Classify a cursor at byte column `col` of `line`.
///
/// Returns `None` when the cursor is at line start, before the first pipe,
/// or directly after a pipe (the cell being completed is ambiguous).
/// Columns past the end of the line are treated as end of line.
pub fn cell_context(line: &str, col: usize) -> Option<CellContext<'_>> {
    let idx = col.min(line.len());
    if idx == 0 {
        return None;
    }

    let bytes = line.as_bytes();
    let pipes = bytes[..idx].iter().filter(|&&b| b == b'|').count();
    if pipes == 0 || bytes[idx - 1] == b'|' {
        return None;
    }

    let qualifier = if bytes[idx - 1] == b'.' {
        qualifier_before(&line[..idx - 1])
    } else {
        None
    };

    Some(CellContext {
        column: pipes - 1,
        cells: line.split('|').skip(1).collect(),
        qualifier,
    })
}

/// Trailing run of alphanumeric characters in `text`.
fn qualifier_before(text: &str) -> Option<&str> {
    let len: usize = text
        .chars()
        .rev()
        .take_while(|c| c.is_alphanumeric())
        .map(char::len_utf8)
        .sum();
    let word = &text[text.len() - len..];
    (!word.is_empty()).then_some(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_start_has_no_context() {
        assert_eq!(cell_context("| Library | String |", 0), None);
    }

    #[test]
    fn test_before_first_pipe_has_no_context() {
        assert_eq!(cell_context("  | Library |", 2), None);
        assert_eq!(cell_context("no pipes here", 5), None);
    }

    #[test]
    fn test_right_after_pipe_has_no_context() {
        let line = "| Library | String |";
        assert_eq!(cell_context(line, 1), None);
        assert_eq!(cell_context(line, 11), None);
    }

    #[test]
    fn test_column_index() {
        let line = "  | Library | Collections |";

        let first = cell_context(line, 6).unwrap();
        assert_eq!(first.column, 0);

        // still inside the first cell before its closing pipe
        assert_eq!(cell_context(line, 12).unwrap().column, 0);

        // right after `Library | `
        let second = cell_context(line, 14).unwrap();
        assert_eq!(second.column, 1);
        assert_eq!(second.first_cell(), "Library");
        assert_eq!(second.cells, vec![" Library ", " Collections ", ""]);

        let third = cell_context("| | Log | ${x", 13).unwrap();
        assert_eq!(third.column, 2);
    }

    #[test]
    fn test_column_past_end_is_clamped() {
        let ctx = cell_context("| Log", 40).unwrap();
        assert_eq!(ctx.column, 0);
    }

    #[test]
    fn test_qualifier() {
        let line = "| | S2L.";
        let ctx = cell_context(line, line.len()).unwrap();
        assert_eq!(ctx.qualifier, Some("S2L"));
        assert_eq!(ctx.column, 1);
    }

    #[test]
    fn test_qualifier_requires_word() {
        let line = "| | ${x}.";
        let ctx = cell_context(line, line.len()).unwrap();
        assert_eq!(ctx.qualifier, None);

        let ctx = cell_context("| | .", 5).unwrap();
        assert_eq!(ctx.qualifier, None);
    }

    #[test]
    fn test_qualifier_takes_only_trailing_word() {
        let line = "| | Run Keyword  my_lib.";
        // `_` is not alphanumeric
        assert_eq!(cell_context(line, line.len()).unwrap().qualifier, Some("lib"));
    }
}
