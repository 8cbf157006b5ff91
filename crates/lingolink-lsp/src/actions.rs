//! Quick-fix `CodeAction` construction.
//!
//! Wraps the engine's fix generator into an LSP `CodeAction` carrying a
//! `WorkspaceEdit` with a single `TextEdit` for the flagged document.

use crate::line_map::LineMap;
use crate::position::lsp_range;
use crate::publish::diagnostic_to_value;
use crate::uri::path_to_file_uri;
use lingolink_core::{Diagnostic, build_fix};
use serde_json::{Value, json};
use std::path::Path;

/// Build the quick-fix code action for one diagnostic, or `None` when the
/// document text no longer matches the diagnostic's span (stale span: the
/// host must not apply an edit).
///
/// `document_text` must be the *current* snapshot of the document the
/// diagnostic was published for; the edit targets that same document.
pub fn quick_fix_action(
    document_path: &Path,
    document_text: &str,
    diagnostic: &Diagnostic,
) -> Option<Value> {
    let edit = build_fix(document_text, diagnostic)?;
    let map = LineMap::from_text(document_text);
    let range = lsp_range(&map, edit.range);

    let text_edit = json!({
        "range": {
            "start": { "line": range.start.line, "character": range.start.character },
            "end": { "line": range.end.line, "character": range.end.character },
        },
        "newText": edit.new_text,
    });
    let mut changes = serde_json::Map::new();
    changes.insert(path_to_file_uri(document_path), json!([text_edit]));

    Some(json!({
        "title": format!("Insert locale segment: /{}/docs/...", diagnostic.locale),
        "kind": "quickfix",
        "isPreferred": true,
        "diagnostics": [diagnostic_to_value(diagnostic, &map)],
        "edit": { "changes": Value::Object(changes) },
    }))
}
