//! Protocol payload shape tests for publishing and quick fixes.

use lingolink_core::{LinkValidator, LocaleSet, ResourceKind};
use lingolink_lsp::{LineMap, publish_params, quick_fix_action};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::Path;

const DOC: &str = "/site/content/ko/docs/concepts/overview.md";

fn validate(text: &str) -> LinkValidator<fn(&Path, ResourceKind) -> bool> {
    fn always(_: &Path, _: ResourceKind) -> bool {
        true
    }
    let mut validator = LinkValidator::new(LocaleSet::default(), always as _);
    validator.validate_document(Path::new(DOC), text).unwrap();
    validator
}

#[test]
fn publish_params_carry_uri_version_and_diagnostics() {
    let text = "intro\n[cluster](/docs/concepts/cluster)\n";
    let validator = validate(text);
    let map = LineMap::from_text(text);

    let params = publish_params(
        Path::new(DOC),
        validator.diagnostics(Path::new(DOC)),
        &map,
        Some(7),
    );

    assert_eq!(
        params["uri"],
        "file:///site/content/ko/docs/concepts/overview.md"
    );
    assert_eq!(params["version"], 7);

    let diagnostics = params["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 1);
    let diag = &diagnostics[0];
    assert_eq!(diag["severity"], 2);
    assert_eq!(diag["code"], "missing-locale-path");
    assert_eq!(diag["source"], "lingolink");
    assert_eq!(
        diag["range"],
        json!({
            "start": { "line": 1, "character": 0 },
            "end": { "line": 1, "character": 33 },
        })
    );
    assert!(
        diag["message"]
            .as_str()
            .unwrap()
            .contains("/ko/docs/concepts/cluster")
    );
}

#[test]
fn empty_diagnostic_list_still_publishes_for_clearing() {
    let text = "no links";
    let validator = validate(text);
    let map = LineMap::from_text(text);

    let params = publish_params(Path::new(DOC), validator.diagnostics(Path::new(DOC)), &map, None);
    assert_eq!(params["diagnostics"], json!([]));
    assert!(params.get("version").is_none());
}

#[test]
fn ranges_count_utf16_units_not_chars() {
    // The emoji before the link is one char but two UTF-16 units.
    let text = "👋 [x](/docs/a)";
    let validator = validate(text);
    let map = LineMap::from_text(text);

    let params = publish_params(Path::new(DOC), validator.diagnostics(Path::new(DOC)), &map, None);
    let range = &params["diagnostics"][0]["range"];
    assert_eq!(range["start"]["character"], 3);
    assert_eq!(range["end"]["character"], 3 + 12);
}

#[test]
fn quick_fix_action_carries_workspace_edit() {
    let text = "see [a](/docs/a)";
    let validator = validate(text);
    let diag = &validator.diagnostics(Path::new(DOC))[0];

    let action = quick_fix_action(Path::new(DOC), text, diag).unwrap();
    assert_eq!(action["kind"], "quickfix");
    assert_eq!(action["isPreferred"], true);
    assert_eq!(action["title"], "Insert locale segment: /ko/docs/...");
    assert_eq!(action["diagnostics"].as_array().unwrap().len(), 1);

    let edits = &action["edit"]["changes"]["file:///site/content/ko/docs/concepts/overview.md"];
    assert_eq!(edits.as_array().unwrap().len(), 1);
    assert_eq!(edits[0]["newText"], "[a](/ko/docs/a)");
    assert_eq!(
        edits[0]["range"],
        json!({
            "start": { "line": 0, "character": 4 },
            "end": { "line": 0, "character": 16 },
        })
    );
}

#[test]
fn stale_span_yields_no_action() {
    let text = "see [a](/docs/a)";
    let validator = validate(text);
    let diag = &validator.diagnostics(Path::new(DOC))[0];

    // The user already fixed the link by hand.
    let edited = "see [a](/ko/docs/a)";
    assert_eq!(quick_fix_action(Path::new(DOC), edited, diag), None);
}
