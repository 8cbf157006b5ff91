#![warn(missing_docs)]
//! LSP-style host boundary for `lingolink-core`.
//!
//! The engine produces diagnostics and text edits in flat character offsets
//! keyed by filesystem path. Editor hosts speak LSP: `file://` URIs, UTF-16
//! line/character ranges, `textDocument/publishDiagnostics` payloads, and
//! `CodeAction` quick fixes. This crate bridges the two without pulling in a
//! full protocol stack; payloads are plain `serde_json` values.
//!
//! ```rust
//! use lingolink_core::{LinkValidator, LocaleSet, ResourceKind};
//! use lingolink_lsp::{LineMap, publish_params, quick_fix_action};
//! use std::path::Path;
//!
//! let mut validator = LinkValidator::new(
//!     LocaleSet::default(),
//!     |_: &Path, _: ResourceKind| true,
//! );
//! let doc = Path::new("/site/content/ko/docs/a.md");
//! let text = "[x](/docs/b)";
//! validator.validate_document(doc, text).unwrap();
//!
//! let map = LineMap::from_text(text);
//! let params = publish_params(doc, validator.diagnostics(doc), &map, Some(1));
//! assert_eq!(params["uri"], "file:///site/content/ko/docs/a.md");
//!
//! let action = quick_fix_action(doc, text, &validator.diagnostics(doc)[0]).unwrap();
//! assert_eq!(action["kind"], "quickfix");
//! ```

pub mod actions;
pub mod line_map;
pub mod position;
pub mod publish;
pub mod uri;

pub use actions::quick_fix_action;
pub use line_map::LineMap;
pub use position::{
    LspPosition, LspRange, char_offset, char_offset_to_utf16, lsp_position, lsp_range,
    utf16_to_char_offset,
};
pub use publish::{diagnostic_to_value, publish_params, severity_code};
pub use uri::{file_uri_to_path, path_to_file_uri, percent_decode_path, percent_encode_path};
