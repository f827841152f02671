//! Rope-backed line access over a document snapshot.
//!
//! Classification works on an immutable snapshot of the full document text,
//! split on `\n`. The rope gives O(log N) line access without materializing a
//! `Vec<String>` for large logs.

use ropey::Rope;

/// Read-only line index over one document snapshot.
///
/// Line semantics follow a plain `split('\n')`: an empty document has one
/// (empty) line, and a trailing newline produces a trailing empty line.
/// Carriage returns are preserved as line content.
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Create an index over an empty document.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build the index from the full document text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Total line count (at least 1, even for an empty document).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total character count of the document.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total byte count of the document.
    pub fn byte_count(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Text of the given line, without its trailing `\n`.
    pub fn get_line_text(&self, line_number: usize) -> Option<String> {
        if line_number >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line_number).to_string();
        if text.ends_with('\n') {
            text.pop();
        }

        Some(text)
    }

    /// Character offset of the start of `line` plus `column`, clamped to the
    /// line's length.
    pub fn position_to_char_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }

        let line_start_char = self.rope.line_to_char(line);
        let line_len = if line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line + 1) - line_start_char - 1 // -1 for newline
        } else {
            self.rope.len_chars() - line_start_char
        };

        line_start_char + column.min(line_len)
    }

    /// Line number and column for a document character offset.
    pub fn char_offset_to_position(&self, char_offset: usize) -> (usize, usize) {
        let char_offset = char_offset.min(self.rope.len_chars());

        let line_idx = self.rope.char_to_line(char_offset);
        let line_start_char = self.rope.line_to_char(line_idx);

        (line_idx, char_offset - line_start_char)
    }

    /// The full document text.
    pub fn get_text(&self) -> String {
        self.rope.to_string()
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_has_one_line() {
        let index = LineIndex::new();
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.char_count(), 0);
        assert_eq!(index.get_line_text(0), Some(String::new()));
    }

    #[test]
    fn test_from_text() {
        let text = "[build] Starting build\n[ 50%] Building CXX object\nBuild completed";
        let index = LineIndex::from_text(text);

        assert_eq!(index.line_count(), 3);
        assert_eq!(index.byte_count(), text.len());
        assert_eq!(
            index.get_line_text(1).as_deref(),
            Some("[ 50%] Building CXX object")
        );
        assert_eq!(index.get_line_text(3), None);
    }

    #[test]
    fn test_trailing_newline_yields_empty_last_line() {
        let index = LineIndex::from_text("one\ntwo\n");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.get_line_text(2), Some(String::new()));
    }

    #[test]
    fn test_carriage_return_is_line_content() {
        let index = LineIndex::from_text("one\r\ntwo");
        assert_eq!(index.get_line_text(0).as_deref(), Some("one\r"));
        assert_eq!(index.get_line_text(1).as_deref(), Some("two"));
    }

    #[test]
    fn test_position_to_char_offset() {
        let text = "ABC\nDEF\nGHI";
        let index = LineIndex::from_text(text);

        assert_eq!(index.position_to_char_offset(0, 0), 0);
        assert_eq!(index.position_to_char_offset(0, 2), 2);
        assert_eq!(index.position_to_char_offset(1, 0), 4);
        assert_eq!(index.position_to_char_offset(2, 0), 8);
        // Column clamps to line length.
        assert_eq!(index.position_to_char_offset(0, 99), 3);
    }

    #[test]
    fn test_char_offset_to_position() {
        let text = "ABC\nDEF\nGHI";
        let index = LineIndex::from_text(text);

        assert_eq!(index.char_offset_to_position(0), (0, 0));
        assert_eq!(index.char_offset_to_position(4), (1, 0));
        assert_eq!(index.char_offset_to_position(8), (2, 0));
    }

    #[test]
    fn test_non_ascii_columns_are_chars() {
        let index = LineIndex::from_text("构建 完成\nC:\\out");
        assert_eq!(index.get_line_text(0).map(|l| l.chars().count()), Some(5));
        assert_eq!(index.position_to_char_offset(1, 0), 6);
    }

    #[test]
    fn test_large_document() {
        let mut lines = Vec::new();
        for i in 0..10000 {
            lines.push(format!("[ {:3}%] Building object {}", i % 100, i));
        }
        let text = lines.join("\n");

        let index = LineIndex::from_text(&text);
        assert_eq!(index.line_count(), 10000);
        assert!(index.get_line_text(5000).is_some());
    }
}
