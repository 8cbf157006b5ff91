//! LSP positions (UTF-16 code units) and coordinate conversion.
//!
//! The engine's spans are character offsets; LSP ranges are 0-based
//! line/character pairs where `character` counts UTF-16 code units. This
//! module converts between the two through a [`LineMap`].

use crate::line_map::LineMap;
use lingolink_core::DiagnosticRange;

/// LSP Position (based on UTF-16 code units)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LspPosition {
    /// Line number (0-based)
    pub line: u32,
    /// Character offset (UTF-16 code units, 0-based)
    pub character: u32,
}

impl LspPosition {
    /// Create a new LSP position (UTF-16 based).
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// LSP Range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LspRange {
    /// Range start position (inclusive).
    pub start: LspPosition,
    /// Range end position (exclusive).
    pub end: LspPosition,
}

impl LspRange {
    /// Create a new LSP range.
    pub fn new(start: LspPosition, end: LspPosition) -> Self {
        Self { start, end }
    }
}

/// Convert character offset to UTF-16 code unit offset within a line.
pub fn char_offset_to_utf16(line_text: &str, char_offset: usize) -> usize {
    line_text
        .chars()
        .take(char_offset)
        .map(|c| c.len_utf16())
        .sum()
}

/// Convert UTF-16 code unit offset to character offset within a line.
pub fn utf16_to_char_offset(line_text: &str, utf16_offset: usize) -> usize {
    let mut current_utf16 = 0;
    let mut char_count = 0;

    for ch in line_text.chars() {
        if current_utf16 >= utf16_offset {
            break;
        }
        current_utf16 += ch.len_utf16();
        char_count += 1;
    }

    char_count
}

/// Convert a flat character offset into an [`LspPosition`].
pub fn lsp_position(map: &LineMap, char_offset: usize) -> LspPosition {
    let (line, char_in_line) = map.position_of_char(char_offset);
    let utf16 = char_offset_to_utf16(&map.line_text(line), char_in_line);
    LspPosition::new(line as u32, utf16 as u32)
}

/// Convert an engine [`DiagnosticRange`] into an [`LspRange`].
pub fn lsp_range(map: &LineMap, range: DiagnosticRange) -> LspRange {
    LspRange::new(lsp_position(map, range.start), lsp_position(map, range.end))
}

/// Convert an [`LspPosition`] back into a flat character offset.
pub fn char_offset(map: &LineMap, position: LspPosition) -> usize {
    let line = position.line as usize;
    let char_in_line = utf16_to_char_offset(&map.line_text(line), position.character as usize);
    map.char_of_position(line, char_in_line)
}
