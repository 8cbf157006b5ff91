//! Link candidate extraction.
//!
//! Scans raw markdown text for links rooted at the shared `/docs/` prefix and
//! yields candidate matches with **character offsets** (not byte offsets) for
//! all public spans, matching the range convention used across the engine.
//!
//! Extraction is a pure function of its input: the pattern is compiled fresh
//! on every call and no matcher state survives between calls, so identical
//! text always yields an identical, order-preserving sequence.
//!
//! The grammar is strict: a candidate must fully match
//! `[text](/docs/target)`. Malformed links (e.g. a missing closing bracket)
//! do not partially match and are never counted.

use crate::locale::LocaleSet;
use regex::Regex;

/// Link candidate pattern: `[displayText](/docs/<targetPath>)`.
///
/// Only `/docs/`-rooted targets are candidates; external URLs, relative
/// links, and other prefixes never match.
pub(crate) const LINK_PATTERN: &str = r"\[([^\]]*)\]\(/docs/([^)]*)\)";

/// A single extracted link candidate.
///
/// Spans are half-open `[start, end)` character offsets covering the entire
/// `[text](/docs/target)` match in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    /// The link's display text (the bracketed part, may be empty).
    pub display_text: String,
    /// The raw target path as written after `/docs/`, fragment included.
    pub raw_target: String,
    /// Inclusive start character offset of the full match.
    pub start: usize,
    /// Exclusive end character offset of the full match.
    pub end: usize,
}

impl LinkMatch {
    /// The target path with any trailing `#fragment` removed.
    ///
    /// This is the path used for filesystem resolution; the fragment never
    /// participates in existence checks.
    pub fn base_target(&self) -> &str {
        self.raw_target
            .split_once('#')
            .map_or(self.raw_target.as_str(), |(base, _)| base)
    }

    /// The `#fragment` suffix (including `#`), if the target has one.
    pub fn fragment(&self) -> Option<&str> {
        self.raw_target.find('#').map(|i| &self.raw_target[i..])
    }
}

/// Extraction errors.
#[derive(Debug)]
pub enum ExtractError {
    /// The link pattern failed to compile.
    InvalidPattern(regex::Error),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPattern(err) => write!(f, "Invalid link pattern: {}", err),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Byte offset <-> character offset index over a text snapshot.
#[derive(Debug)]
pub(crate) struct CharIndex {
    char_to_byte: Vec<usize>,
    text_len: usize,
}

impl CharIndex {
    pub(crate) fn new(text: &str) -> Self {
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_to_byte.push(text.len());
        Self {
            char_to_byte,
            text_len: text.len(),
        }
    }

    pub(crate) fn char_count(&self) -> usize {
        self.char_to_byte.len().saturating_sub(1)
    }

    pub(crate) fn char_to_byte(&self, char_offset: usize) -> usize {
        let clamped = char_offset.min(self.char_count());
        self.char_to_byte
            .get(clamped)
            .cloned()
            .unwrap_or(self.text_len)
    }

    pub(crate) fn byte_to_char(&self, byte_offset: usize) -> usize {
        let clamped = byte_offset.min(self.text_len);
        match self.char_to_byte.binary_search(&clamped) {
            Ok(idx) => idx,
            Err(idx) => idx,
        }
    }
}

/// Extract every link candidate from `text`, in document order.
///
/// Candidates whose raw target already carries a locale-like segment (per
/// [`LocaleSet::is_already_localized`]) are excluded from the result: they
/// are never flagged, so they never need to surface.
pub fn extract_links(text: &str, locales: &LocaleSet) -> Result<Vec<LinkMatch>, ExtractError> {
    let re = Regex::new(LINK_PATTERN).map_err(ExtractError::InvalidPattern)?;
    let index = CharIndex::new(text);

    let mut matches = Vec::new();
    for caps in re.captures_iter(text) {
        let raw_target = caps.get(2).map_or("", |m| m.as_str());
        if locales.is_already_localized(raw_target) {
            continue;
        }

        let Some(whole) = caps.get(0) else {
            continue;
        };
        matches.push(LinkMatch {
            display_text: caps.get(1).map_or("", |m| m.as_str()).to_string(),
            raw_target: raw_target.to_string(),
            start: index.byte_to_char(whole.start()),
            end: index.byte_to_char(whole.end()),
        });
    }

    Ok(matches)
}
