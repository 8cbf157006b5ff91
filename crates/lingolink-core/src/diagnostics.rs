//! Diagnostics data model.
//!
//! A diagnostic annotates one link span in one document with an advisory
//! message and carries enough context (the originating match and the
//! document's locale) for quick-fix generation later, without re-running
//! validation.

use crate::extract::LinkMatch;

/// A half-open character-offset range (`start..end`) in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticRange {
    /// Range start offset (inclusive), in Unicode scalar values (`char`) from the start of the document.
    pub start: usize,
    /// Range end offset (exclusive), in Unicode scalar values (`char`) from the start of the document.
    pub end: usize,
}

impl DiagnosticRange {
    /// Create a new diagnostic range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Diagnostic severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    /// Error diagnostics.
    Error,
    /// Warning diagnostics.
    Warning,
    /// Informational diagnostics.
    Information,
    /// Hint diagnostics.
    Hint,
}

/// The closed set of diagnostic families this engine emits.
///
/// Downstream consumers match on this instead of comparing loose code and
/// source strings, so filtering stays exhaustive and typo-proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A `/docs/`-rooted link whose localized counterpart exists but whose
    /// target is missing the locale segment.
    MissingLocalePath,
}

impl DiagnosticKind {
    /// The stable diagnostic code string for host protocols.
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingLocalePath => "missing-locale-path",
        }
    }

    /// The diagnostic source tag for host protocols.
    pub fn source(self) -> &'static str {
        "lingolink"
    }
}

/// A single advisory diagnostic for one link in one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Span of the full `[text](/docs/target)` match, in character offsets.
    pub range: DiagnosticRange,
    /// Severity; the engine only ever emits [`DiagnosticSeverity::Warning`].
    pub severity: DiagnosticSeverity,
    /// Which diagnostic family this belongs to.
    pub kind: DiagnosticKind,
    /// Human-readable message (states the resource kind, echoes the original
    /// link, shows the suggested locale-qualified form).
    pub message: String,
    /// The validated document's locale, used to build the suggested link.
    pub locale: String,
    /// The link match this diagnostic was derived from.
    pub link: LinkMatch,
}
