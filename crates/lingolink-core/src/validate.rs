//! Validation orchestration.
//!
//! [`LinkValidator`] runs one full pass per document: extract candidates,
//! resolve each to its expected localized path, ask the oracle whether that
//! path exists, and commit a diagnostic only for links whose localized
//! counterpart is actually there. The committed list atomically replaces
//! whatever was previously stored for that document identity; documents that
//! are not validation targets get their entry cleared instead.
//!
//! The diagnostic table is owned by the validator instance, keyed by document
//! path. Each pass only touches its own document's entry, so concurrent
//! passes over different documents never interfere.

use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticRange, DiagnosticSeverity};
use crate::extract::{ExtractError, LinkMatch, extract_links};
use crate::locale::LocaleSet;
use crate::oracle::ExistenceOracle;
use crate::resolve::{MARKDOWN_EXT, ResourceKind, resolve_expected_path};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Validation errors.
#[derive(Debug)]
pub enum ValidateError {
    /// Link extraction failed.
    Extract(ExtractError),
}

impl std::fmt::Display for ValidateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Extract(err) => write!(f, "Link extraction failed: {}", err),
        }
    }
}

impl std::error::Error for ValidateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Extract(err) => Some(err),
        }
    }
}

impl From<ExtractError> for ValidateError {
    fn from(err: ExtractError) -> Self {
        Self::Extract(err)
    }
}

/// Per-document link validator with an owned diagnostic table.
pub struct LinkValidator<O: ExistenceOracle> {
    locales: LocaleSet,
    oracle: O,
    table: HashMap<PathBuf, Vec<Diagnostic>>,
}

impl<O: ExistenceOracle> LinkValidator<O> {
    /// Create a validator over the given locale configuration and oracle.
    pub fn new(locales: LocaleSet, oracle: O) -> Self {
        Self {
            locales,
            oracle,
            table: HashMap::new(),
        }
    }

    /// The validator's locale configuration.
    pub fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    /// Run one validation pass over a document snapshot.
    ///
    /// Returns the number of diagnostics committed for this document. The
    /// committed list fully replaces any prior list for the same identity; a
    /// document that is not a translation target (neutral locale, unsupported
    /// locale, outside the content grammar) has its entry cleared and
    /// contributes zero.
    ///
    /// Oracle answers are memoized for the duration of the pass: within one
    /// pass no writes occur, so repeated queries for the same localized path
    /// are stable.
    pub fn validate_document(
        &mut self,
        document_path: &Path,
        text: &str,
    ) -> Result<usize, ValidateError> {
        let identity = document_path.to_string_lossy();
        let Some(locale) = self.locales.translation_locale(&identity).map(str::to_owned) else {
            self.table.remove(document_path);
            return Ok(0);
        };

        let mut memo: HashMap<(PathBuf, ResourceKind), bool> = HashMap::new();
        let mut committed = Vec::new();
        for link in extract_links(text, &self.locales)? {
            let base = link.base_target();
            let kind = ResourceKind::of_target(base);
            let Some(expected) = resolve_expected_path(&identity, base, &locale) else {
                continue;
            };
            if !self.localized_target_exists(&mut memo, &expected, kind) {
                continue;
            }

            committed.push(Diagnostic {
                range: DiagnosticRange::new(link.start, link.end),
                severity: DiagnosticSeverity::Warning,
                kind: DiagnosticKind::MissingLocalePath,
                message: missing_locale_message(&link, kind, &locale),
                locale: locale.clone(),
                link,
            });
        }

        let count = committed.len();
        self.table.insert(document_path.to_path_buf(), committed);
        Ok(count)
    }

    /// The committed diagnostics for a document (empty if none).
    pub fn diagnostics(&self, document_path: &Path) -> &[Diagnostic] {
        self.table.get(document_path).map_or(&[], Vec::as_slice)
    }

    /// Drop the stored entry for one document.
    pub fn clear_document(&mut self, document_path: &Path) {
        self.table.remove(document_path);
    }

    /// Drop all stored diagnostics.
    pub fn clear_all(&mut self) {
        self.table.clear();
    }

    /// Number of documents currently tracked in the table.
    pub fn tracked_documents(&self) -> usize {
        self.table.len()
    }

    fn localized_target_exists(
        &self,
        memo: &mut HashMap<(PathBuf, ResourceKind), bool>,
        expected: &Path,
        kind: ResourceKind,
    ) -> bool {
        if self.check_memoized(memo, expected, kind) {
            return true;
        }
        // Folder links fall back to a same-named markdown file: either the
        // directory or `<name>.md` next to it satisfies existence.
        if kind == ResourceKind::Folder
            && let Some(fallback) = folder_fallback_file(expected)
        {
            return self.check_memoized(memo, &fallback, ResourceKind::File);
        }
        false
    }

    fn check_memoized(
        &self,
        memo: &mut HashMap<(PathBuf, ResourceKind), bool>,
        path: &Path,
        kind: ResourceKind,
    ) -> bool {
        *memo
            .entry((path.to_path_buf(), kind))
            .or_insert_with(|| self.oracle.exists(path, kind))
    }
}

fn folder_fallback_file(expected: &Path) -> Option<PathBuf> {
    let name = expected.file_name()?.to_str()?;
    Some(expected.parent()?.join(format!("{name}{MARKDOWN_EXT}")))
}

fn missing_locale_message(link: &LinkMatch, kind: ResourceKind, locale: &str) -> String {
    format!(
        "Localized {} exists but the link is missing its locale segment.\n\
         Current: [{}](/docs/{})\n\
         Suggested: [{}](/{}/docs/{})",
        kind.label(),
        link.display_text,
        link.raw_target,
        link.display_text,
        locale,
        link.raw_target
    )
}
