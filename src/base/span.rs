//! Cursor positions and line lookup.

use std::fmt;

pub use text_size::TextRange;
pub use text_size::TextSize;

/// A line and column position in a document.
///
/// Both line and column are 0-indexed internally, but displayed as 1-indexed,
/// which is also how editors report the cursor in completion requests.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct LineCol {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column (in UTF-8 bytes, not characters)
    pub col: u32,
}

impl LineCol {
    /// Create a new LineCol position.
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }

    /// Create from 1-indexed line and column (as sent by editors).
    #[inline]
    pub const fn from_one_indexed(line: u32, col: u32) -> Self {
        Self {
            line: line.saturating_sub(1),
            col: col.saturating_sub(1),
        }
    }

    /// Get 1-indexed line number (for display).
    #[inline]
    pub const fn line_one_indexed(self) -> u32 {
        self.line + 1
    }

    /// Get 1-indexed column number (for display).
    #[inline]
    pub const fn col_one_indexed(self) -> u32 {
        self.col + 1
    }
}

impl fmt::Debug for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_one_indexed(), self.col_one_indexed())
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_one_indexed(), self.col_one_indexed())
    }
}

/// Index for converting between byte offsets, line/column positions and
/// the raw text of a single line.
#[derive(Clone, Debug)]
pub struct LineIndex {
    /// Byte offset of the start of each line
    line_starts: Vec<TextSize>,
    /// Total length of the indexed text
    len: TextSize,
}

impl LineIndex {
    /// Build a line index from document text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];

        for (offset, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(TextSize::from((offset + 1) as u32));
            }
        }

        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Convert a byte offset to a line/column position.
    ///
    /// Offsets past the end of the text land on the last line.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);

        let line_start = self.line_starts[line];
        let col = offset - line_start;

        LineCol {
            line: line as u32,
            col: col.into(),
        }
    }

    /// Convert a line/column position to a byte offset.
    pub fn offset(&self, line_col: LineCol) -> Option<TextSize> {
        let line_start = self.line_starts.get(line_col.line as usize)?;
        Some(*line_start + TextSize::from(line_col.col))
    }

    /// Byte range of a line, without its terminator.
    pub fn line_range(&self, text: &str, line: u32) -> Option<TextRange> {
        let start = *self.line_starts.get(line as usize)?;
        let mut end = self
            .line_starts
            .get(line as usize + 1)
            .copied()
            .unwrap_or(self.len);

        let bytes = text.as_bytes();
        if end > start && bytes.get(usize::from(end) - 1) == Some(&b'\n') {
            end -= TextSize::from(1);
        }
        if end > start && bytes.get(usize::from(end) - 1) == Some(&b'\r') {
            end -= TextSize::from(1);
        }

        Some(TextRange::new(start, end))
    }

    /// Text of a line, without its terminator.
    ///
    /// `text` must be the same text the index was built from.
    pub fn line_text<'a>(&self, text: &'a str, line: u32) -> Option<&'a str> {
        let range = self.line_range(text, line)?;
        text.get(std::ops::Range::<usize>::from(range))
    }

    /// Get the number of lines.
    pub fn len(&self) -> usize {
        self.line_starts.len()
    }

    /// Check if there are no lines (never true, an empty text has one line).
    pub fn is_empty(&self) -> bool {
        self.line_starts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_display() {
        let pos = LineCol::new(0, 0);
        assert_eq!(format!("{}", pos), "1:1");

        let pos = LineCol::new(5, 10);
        assert_eq!(format!("{}", pos), "6:11");
    }

    #[test]
    fn test_line_col_from_one_indexed() {
        let pos = LineCol::from_one_indexed(3, 7);
        assert_eq!(pos, LineCol::new(2, 6));

        // editors never send 0, but it must not underflow
        assert_eq!(LineCol::from_one_indexed(0, 0), LineCol::new(0, 0));
    }

    #[test]
    fn test_line_index_multi_line() {
        let index = LineIndex::new("| a |\n| b |\n");

        assert_eq!(index.len(), 3);
        assert_eq!(index.line_col(TextSize::from(0)), LineCol::new(0, 0));
        assert_eq!(index.line_col(TextSize::from(4)), LineCol::new(0, 4));
        assert_eq!(index.line_col(TextSize::from(6)), LineCol::new(1, 0));
        assert_eq!(index.line_col(TextSize::from(9)), LineCol::new(1, 3));
    }

    #[test]
    fn test_line_index_offset_past_end() {
        let index = LineIndex::new("abc");
        assert_eq!(index.line_col(TextSize::from(50)), LineCol::new(0, 3));
    }

    #[test]
    fn test_line_index_offset() {
        let index = LineIndex::new("hello\nworld");

        assert_eq!(index.offset(LineCol::new(0, 0)), Some(TextSize::from(0)));
        assert_eq!(index.offset(LineCol::new(1, 3)), Some(TextSize::from(9)));
        assert_eq!(index.offset(LineCol::new(2, 0)), None);
    }

    #[test]
    fn test_line_text_strips_terminators() {
        let text = "| Settings |\r\n| Library | String |\nlast";
        let index = LineIndex::new(text);

        assert_eq!(index.line_text(text, 0), Some("| Settings |"));
        assert_eq!(index.line_text(text, 1), Some("| Library | String |"));
        assert_eq!(index.line_text(text, 2), Some("last"));
        assert_eq!(index.line_text(text, 3), None);
    }

    #[test]
    fn test_line_text_trailing_newline() {
        let text = "a\n";
        let index = LineIndex::new(text);

        assert_eq!(index.line_text(text, 0), Some("a"));
        assert_eq!(index.line_text(text, 1), Some(""));
    }
}
