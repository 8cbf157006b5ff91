//! Quick-fix generation.
//!
//! Turns a committed diagnostic back into a concrete text replacement that
//! inserts the locale segment. The span recorded on the diagnostic is
//! re-parsed against the current document text rather than trusted: if the
//! user has edited the link since the diagnostic was computed, the re-parse
//! fails and no edit is produced, which guards against destructive stale
//! edits.

use crate::diagnostics::{Diagnostic, DiagnosticRange};
use crate::extract::{CharIndex, LINK_PATTERN};
use regex::Regex;

/// A textual replacement for a span of the document it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// The span to replace, in character offsets.
    pub range: DiagnosticRange,
    /// The replacement text.
    pub new_text: String,
}

impl TextEdit {
    /// Apply this edit to `text`, returning the edited document.
    ///
    /// Offsets are character offsets; out-of-range spans are clamped to the
    /// document end.
    pub fn apply(&self, text: &str) -> String {
        let index = CharIndex::new(text);
        let start = index.char_to_byte(self.range.start);
        let end = index.char_to_byte(self.range.end.max(self.range.start));
        let mut out = String::with_capacity(text.len() + self.new_text.len());
        out.push_str(&text[..start]);
        out.push_str(&self.new_text);
        out.push_str(&text[end..]);
        out
    }
}

/// Build the replacement edit for one diagnostic against the current
/// document text.
///
/// The text at the diagnostic's span must still fully match the link grammar
/// `[text](/docs/target)`; the display text and raw target (fragment
/// included) are taken from that re-parse, and the locale segment comes from
/// the locale stamped on the diagnostic at validation time. Returns `None`
/// when the span no longer holds a well-formed candidate link.
pub fn build_fix(document_text: &str, diagnostic: &Diagnostic) -> Option<TextEdit> {
    let range = diagnostic.range;
    let index = CharIndex::new(document_text);
    if range.start >= range.end || range.end > index.char_count() {
        return None;
    }

    let snippet =
        document_text.get(index.char_to_byte(range.start)..index.char_to_byte(range.end))?;
    let re = Regex::new(&format!("^{LINK_PATTERN}$")).ok()?;
    let caps = re.captures(snippet)?;
    let display_text = caps.get(1).map_or("", |m| m.as_str());
    let raw_target = caps.get(2).map_or("", |m| m.as_str());

    Some(TextEdit {
        range,
        new_text: format!(
            "[{}](/{}/docs/{})",
            display_text, diagnostic.locale, raw_target
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticKind, DiagnosticSeverity};
    use crate::extract::LinkMatch;
    use pretty_assertions::assert_eq;

    fn diagnostic_for(start: usize, end: usize, locale: &str) -> Diagnostic {
        Diagnostic {
            range: DiagnosticRange::new(start, end),
            severity: DiagnosticSeverity::Warning,
            kind: DiagnosticKind::MissingLocalePath,
            message: String::new(),
            locale: locale.to_string(),
            link: LinkMatch {
                display_text: String::new(),
                raw_target: String::new(),
                start,
                end,
            },
        }
    }

    #[test]
    fn rebuilds_link_with_locale_segment() {
        let text = "See [Pods](/docs/concepts/workloads/pods/).";
        let diag = diagnostic_for(4, 42, "ko");
        let edit = build_fix(text, &diag).unwrap();
        assert_eq!(edit.new_text, "[Pods](/ko/docs/concepts/workloads/pods/)");
        assert_eq!(
            edit.apply(text),
            "See [Pods](/ko/docs/concepts/workloads/pods/)."
        );
    }

    #[test]
    fn fragment_is_carried_through_verbatim() {
        let text = "[x](/docs/concepts/overview/#section)";
        let diag = diagnostic_for(0, text.chars().count(), "ja");
        let edit = build_fix(text, &diag).unwrap();
        assert_eq!(edit.new_text, "[x](/ja/docs/concepts/overview/#section)");
    }

    #[test]
    fn stale_span_produces_no_edit() {
        // The link was already edited; the span no longer matches.
        let text = "See [Pods](/ko/docs/concepts/workloads/pods/).";
        let diag = diagnostic_for(4, 42, "ko");
        assert_eq!(build_fix(text, &diag), None);
    }

    #[test]
    fn out_of_bounds_span_produces_no_edit() {
        let text = "[x](/docs/a)";
        let diag = diagnostic_for(0, 100, "ko");
        assert_eq!(build_fix(text, &diag), None);

        let diag = diagnostic_for(5, 5, "ko");
        assert_eq!(build_fix(text, &diag), None);
    }

    #[test]
    fn reparse_trusts_current_text_over_cached_match() {
        // The target changed under the same-width span; the edit follows the
        // current text, not the cached LinkMatch.
        let text = "[x](/docs/b)";
        let mut diag = diagnostic_for(0, 12, "ko");
        diag.link.raw_target = "a".to_string();
        let edit = build_fix(text, &diag).unwrap();
        assert_eq!(edit.new_text, "[x](/ko/docs/b)");
    }
}
