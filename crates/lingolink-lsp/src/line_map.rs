//! Rope-backed line map for one document snapshot.
//!
//! The engine works in flat character offsets; LSP payloads need 0-based
//! (line, character) positions. A [`LineMap`] is built once per document
//! snapshot and answers both directions in O(log n).

use ropey::Rope;

/// Immutable line index over a document snapshot.
pub struct LineMap {
    rope: Rope,
}

impl LineMap {
    /// Build a line map from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Total character count of the snapshot.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total line count (N newlines => N+1 lines).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// The line containing the given character offset (clamped to the end).
    pub fn line_of_char(&self, char_offset: usize) -> usize {
        self.rope.char_to_line(char_offset.min(self.rope.len_chars()))
    }

    /// Character offset of the start of `line` (clamped to the last line).
    pub fn line_start_char(&self, line: usize) -> usize {
        let line = line.min(self.rope.len_lines().saturating_sub(1));
        self.rope.line_to_char(line)
    }

    /// Text of `line` with any trailing line break stripped.
    pub fn line_text(&self, line: usize) -> String {
        if line >= self.rope.len_lines() {
            return String::new();
        }
        let text: String = self.rope.line(line).chars().collect();
        text.trim_end_matches(['\n', '\r']).to_string()
    }

    /// Split a flat character offset into (line, character-offset-in-line).
    pub fn position_of_char(&self, char_offset: usize) -> (usize, usize) {
        let clamped = char_offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(clamped);
        (line, clamped - self.rope.line_to_char(line))
    }

    /// Rebuild a flat character offset from (line, character-offset-in-line).
    ///
    /// Out-of-range lines clamp to the document end; the in-line offset is
    /// clamped to the line length.
    pub fn char_of_position(&self, line: usize, char_in_line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        let start = self.rope.line_to_char(line);
        let line_len = self.line_text(line).chars().count();
        start + char_in_line.min(line_len)
    }
}
