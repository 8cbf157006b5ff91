//! `textDocument/publishDiagnostics` payload construction.
//!
//! The engine's replace semantics map directly onto the protocol: every
//! validation pass produces one params object carrying the document's full
//! diagnostic list, and an empty list is how stale diagnostics get cleared
//! on the editor side.

use crate::line_map::LineMap;
use crate::position::{LspRange, lsp_range};
use crate::uri::path_to_file_uri;
use lingolink_core::{Diagnostic, DiagnosticSeverity};
use serde_json::{Value, json};
use std::path::Path;

/// Numeric LSP `DiagnosticSeverity` for an engine severity.
pub fn severity_code(severity: DiagnosticSeverity) -> u64 {
    match severity {
        DiagnosticSeverity::Error => 1,
        DiagnosticSeverity::Warning => 2,
        DiagnosticSeverity::Information => 3,
        DiagnosticSeverity::Hint => 4,
    }
}

fn range_to_value(range: LspRange) -> Value {
    json!({
        "start": { "line": range.start.line, "character": range.start.character },
        "end": { "line": range.end.line, "character": range.end.character },
    })
}

/// Serialize one engine diagnostic as an LSP `Diagnostic` value.
pub fn diagnostic_to_value(diagnostic: &Diagnostic, map: &LineMap) -> Value {
    json!({
        "range": range_to_value(lsp_range(map, diagnostic.range)),
        "severity": severity_code(diagnostic.severity),
        "code": diagnostic.kind.code(),
        "source": diagnostic.kind.source(),
        "message": diagnostic.message,
    })
}

/// Build `textDocument/publishDiagnostics` params for one document snapshot.
///
/// `diagnostics` is the document's full committed list (possibly empty);
/// `map` must be built from the same snapshot the diagnostics were computed
/// against.
pub fn publish_params(
    document_path: &Path,
    diagnostics: &[Diagnostic],
    map: &LineMap,
    version: Option<i32>,
) -> Value {
    let items: Vec<Value> = diagnostics
        .iter()
        .map(|d| diagnostic_to_value(d, map))
        .collect();

    let mut params = json!({
        "uri": path_to_file_uri(document_path),
        "diagnostics": items,
    });
    if let Some(version) = version
        && let Some(obj) = params.as_object_mut()
    {
        obj.insert("version".to_string(), json!(version));
    }
    params
}
