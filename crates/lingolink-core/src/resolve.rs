//! Expected-path resolution.
//!
//! Given the validated document's own path, a link's base target, and a
//! target locale, computes where the localized copy of the link target would
//! live on disk. Resolution is pure path arithmetic; it performs no I/O.

use std::path::PathBuf;

/// The markdown file extension appended by the implicit-extension rule.
pub const MARKDOWN_EXT: &str = ".md";

/// What kind of filesystem resource a link target denotes.
///
/// Folder-vs-file disambiguation is an explicit convention, not markdown
/// semantics: a base target ending in `/` denotes a folder, anything else a
/// markdown file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A regular markdown file.
    File,
    /// A directory.
    Folder,
}

impl ResourceKind {
    /// Classify a base target (fragment already stripped) by its trailing
    /// separator.
    pub fn of_target(base_target: &str) -> Self {
        if base_target.ends_with('/') {
            Self::Folder
        } else {
            Self::File
        }
    }

    /// Human-readable label for diagnostic messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}

/// Compute the localized filesystem path a `/docs/`-rooted link should
/// resolve to.
///
/// - The content-tree root is everything before the last `/content/` segment
///   of `document_path` that is followed by `<locale>/docs/`; a document
///   outside that grammar cannot anchor resolution and yields `None`.
/// - Folder targets (trailing `/`) are joined unchanged; folder existence is
///   what gets checked, not file existence.
/// - File targets get [`MARKDOWN_EXT`] appended unless they already carry it
///   (a link without an explicit suffix references a markdown file of that
///   name).
///
/// `base_target` must already have any `#fragment` stripped (see
/// [`crate::extract::LinkMatch::base_target`]). Empty inputs yield `None`.
pub fn resolve_expected_path(
    document_path: &str,
    base_target: &str,
    locale: &str,
) -> Option<PathBuf> {
    if document_path.is_empty() || base_target.is_empty() || locale.is_empty() {
        return None;
    }

    let (root, rest) = document_path.rsplit_once("/content/")?;
    let (_, tail) = rest.split_once('/')?;
    if !tail.starts_with("docs/") {
        return None;
    }

    let mut expected = format!("{root}/content/{locale}/docs/{base_target}");
    if !base_target.ends_with('/') && !expected.ends_with(MARKDOWN_EXT) {
        expected.push_str(MARKDOWN_EXT);
    }

    Some(PathBuf::from(expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOC: &str = "/root/content/ko/docs/concepts/overview.md";

    #[test]
    fn resolves_same_locale_sibling() {
        assert_eq!(
            resolve_expected_path(DOC, "concepts/cluster.md", "ko"),
            Some(PathBuf::from("/root/content/ko/docs/concepts/cluster.md"))
        );
    }

    #[test]
    fn folder_target_keeps_trailing_separator_and_gets_no_extension() {
        assert_eq!(
            resolve_expected_path(DOC, "tutorials/", "ja"),
            Some(PathBuf::from("/root/content/ja/docs/tutorials/"))
        );
    }

    #[test]
    fn file_target_without_suffix_gets_markdown_extension() {
        assert_eq!(
            resolve_expected_path(DOC, "tasks/install", "ko"),
            Some(PathBuf::from("/root/content/ko/docs/tasks/install.md"))
        );
    }

    #[test]
    fn unrecognized_document_paths_yield_none() {
        assert_eq!(resolve_expected_path("/root/README.md", "a/b", "ko"), None);
        assert_eq!(
            resolve_expected_path("/root/content/ko/blog/post.md", "a/b", "ko"),
            None
        );
    }

    #[test]
    fn empty_inputs_yield_none() {
        assert_eq!(resolve_expected_path("", "a/b", "ko"), None);
        assert_eq!(resolve_expected_path(DOC, "", "ko"), None);
        assert_eq!(resolve_expected_path(DOC, "a/b", ""), None);
    }

    #[test]
    fn nested_content_segments_anchor_on_the_last_one() {
        let doc = "/srv/content/mirror/content/ko/docs/a.md";
        assert_eq!(
            resolve_expected_path(doc, "b", "ko"),
            Some(PathBuf::from("/srv/content/mirror/content/ko/docs/b.md"))
        );
    }

    #[test]
    fn resource_kind_follows_trailing_separator() {
        assert_eq!(ResourceKind::of_target("tutorials/"), ResourceKind::Folder);
        assert_eq!(ResourceKind::of_target("tasks/install"), ResourceKind::File);
        assert_eq!(ResourceKind::Folder.label(), "folder");
        assert_eq!(ResourceKind::File.label(), "file");
    }
}
