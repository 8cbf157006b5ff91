//! Locale configuration and content-path classification.
//!
//! A documentation corpus keeps its translations under a per-locale subtree:
//!
//! ```text
//! <root>/content/<locale>/docs/...
//! ```
//!
//! The neutral locale is the untranslated source tree. This module owns the
//! finite set of supported locale codes and answers the two classification
//! questions the validator needs:
//!
//! - is this document a translation target at all?
//! - does this link target already carry a locale segment?

/// Default supported translation locales (code, human-readable name).
const DEFAULT_LOCALES: &[(&str, &str)] = &[
    ("ko", "한국어"),
    ("ja", "日本語"),
    ("zh-cn", "中文(简体)"),
    ("zh", "中文(繁体)"),
    ("fr", "Français"),
    ("de", "Deutsch"),
    ("es", "Español"),
    ("it", "Italiano"),
    ("pt-br", "Português"),
    ("ru", "Русский"),
    ("uk", "Українська"),
    ("pl", "Polski"),
    ("hi", "हिन्दी"),
    ("vi", "Việt Nam"),
    ("id", "Indonesia"),
];

/// Default neutral (source) locale.
const DEFAULT_NEUTRAL: &str = "en";

/// The finite, ordered set of locale codes the corpus supports, plus the
/// distinguished neutral (source) code.
///
/// The neutral locale is never a validation target: documents under it are
/// the originals that translations are made from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    neutral: String,
    supported: Vec<String>,
}

impl LocaleSet {
    /// Create a locale set from a neutral code and an ordered list of
    /// supported codes.
    pub fn new(
        neutral: impl Into<String>,
        supported: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            neutral: neutral.into(),
            supported: supported.into_iter().map(Into::into).collect(),
        }
    }

    /// The neutral (source) locale code.
    pub fn neutral(&self) -> &str {
        &self.neutral
    }

    /// Returns `true` if `code` is a supported translation locale.
    ///
    /// The neutral code is not a translation locale.
    pub fn is_supported(&self, code: &str) -> bool {
        self.supported.iter().any(|c| c == code)
    }

    /// Iterate over the supported locale codes in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.supported.iter().map(String::as_str)
    }

    /// Human-readable name for a locale code from the default table.
    ///
    /// Falls back to the code itself for custom locales.
    pub fn display_name<'a>(&self, code: &'a str) -> &'a str {
        if code == DEFAULT_NEUTRAL {
            return "English";
        }
        DEFAULT_LOCALES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| *name)
            .unwrap_or(code)
    }

    /// Returns `true` if a raw link target already begins with a locale-like
    /// segment.
    ///
    /// A target counts as localized when its first path segment is either the
    /// neutral code or any two-letter lowercase segment, whether or not that
    /// two-letter code is actually in the supported set. Links that merely
    /// *look* locale-qualified are never flagged.
    pub fn is_already_localized(&self, raw_target: &str) -> bool {
        let Some((head, _)) = raw_target.split_once('/') else {
            return false;
        };
        head == self.neutral || (head.len() == 2 && head.bytes().all(|b| b.is_ascii_lowercase()))
    }

    /// Capture the `<locale>` segment from a `.../content/<locale>/...`
    /// document path, if present.
    ///
    /// The segment is returned verbatim; it is not checked against the
    /// supported set.
    pub fn document_locale<'a>(&self, document_path: &'a str) -> Option<&'a str> {
        let rest = document_path.split_once("/content/")?.1;
        let (locale, _) = rest.split_once('/')?;
        (!locale.is_empty()).then_some(locale)
    }

    /// Returns the document's locale when the document is a translation
    /// target, i.e. its path matches `.../content/<locale>/docs/...` with a
    /// supported, non-neutral `<locale>`.
    pub fn translation_locale<'a>(&self, document_path: &'a str) -> Option<&'a str> {
        let rest = document_path.split_once("/content/")?.1;
        let (locale, tail) = rest.split_once('/')?;
        if !tail.starts_with("docs/") {
            return None;
        }
        (locale != self.neutral && self.is_supported(locale)).then_some(locale)
    }

    /// Returns `true` if the document at `document_path` should be validated.
    pub fn is_translation_document(&self, document_path: &str) -> bool {
        self.translation_locale(document_path).is_some()
    }
}

impl Default for LocaleSet {
    /// The default corpus configuration: neutral `en` plus the stock
    /// translation locales.
    fn default() -> Self {
        Self::new(DEFAULT_NEUTRAL, DEFAULT_LOCALES.iter().map(|(code, _)| *code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_supports_stock_locales() {
        let locales = LocaleSet::default();
        assert_eq!(locales.neutral(), "en");
        assert!(locales.is_supported("ko"));
        assert!(locales.is_supported("pt-br"));
        assert!(!locales.is_supported("en"));
        assert!(!locales.is_supported("xx"));
        assert_eq!(locales.iter().next(), Some("ko"));
    }

    #[test]
    fn already_localized_accepts_two_letter_and_neutral_prefixes() {
        let locales = LocaleSet::default();
        assert!(locales.is_already_localized("ko/docs/concepts/overview"));
        assert!(locales.is_already_localized("en/docs/concepts/overview"));
        // Unsupported but two-letter: still treated as localized.
        assert!(locales.is_already_localized("zz/docs/concepts/overview"));
        assert!(!locales.is_already_localized("concepts/overview"));
        assert!(!locales.is_already_localized("kor/docs/overview"));
        assert!(!locales.is_already_localized("ko"));
    }

    #[test]
    fn translation_locale_requires_content_docs_grammar() {
        let locales = LocaleSet::default();
        assert_eq!(
            locales.translation_locale("/site/content/ko/docs/concepts/overview.md"),
            Some("ko")
        );
        // Neutral sources are not targets.
        assert_eq!(
            locales.translation_locale("/site/content/en/docs/concepts/overview.md"),
            None
        );
        // Unsupported locale: skip, do not flag.
        assert_eq!(
            locales.translation_locale("/site/content/xx/docs/concepts/overview.md"),
            None
        );
        // Outside the docs subtree.
        assert_eq!(locales.translation_locale("/site/content/ko/blog/post.md"), None);
        assert_eq!(locales.translation_locale("/site/README.md"), None);
        assert_eq!(locales.translation_locale(""), None);
    }

    #[test]
    fn document_locale_ignores_the_supported_set() {
        let locales = LocaleSet::default();
        assert_eq!(
            locales.document_locale("/site/content/xx/docs/a.md"),
            Some("xx")
        );
        assert_eq!(locales.document_locale("/site/docs/a.md"), None);
    }

    #[test]
    fn display_names_cover_defaults_and_fall_back() {
        let locales = LocaleSet::default();
        assert_eq!(locales.display_name("ko"), "한국어");
        assert_eq!(locales.display_name("en"), "English");
        assert_eq!(locales.display_name("tlh"), "tlh");
    }
}
