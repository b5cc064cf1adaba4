use super::*;
use crate::playlist::model::PlaylistItem;
use serde_json::json;

fn paths(errs: &SchemaErrors) -> Vec<String> {
    errs.errors.iter().map(|e| e.path_string()).collect()
}

#[test]
fn playlist_errors_are_collected_with_paths() {
    let p = Playlist {
        uid: " ".to_string(),
        name: String::new(),
        interval: "0s".to_string(),
        items: vec![
            PlaylistItem::by_uid("ok"),
            PlaylistItem::by_tag(""),
            PlaylistItem::new(PlaylistItemType::DashboardById, "abc"),
        ],
    };
    let errs = validate_playlist(&p).unwrap_err();
    assert_eq!(
        paths(&errs),
        vec![
            "$.uid",
            "$.name",
            "$.interval",
            "$.items[1].value",
            "$.items[2].value",
        ]
    );
}

#[test]
fn duplicate_items_are_allowed() {
    let p = Playlist::new("u", "n").with_items([PlaylistItem::by_tag("a"), PlaylistItem::by_tag("a")]);
    validate_playlist(&p).unwrap();
}

#[test]
fn display_joins_errors_on_one_line() {
    let p = Playlist {
        uid: String::new(),
        name: String::new(),
        interval: "5m".to_string(),
        items: vec![],
    };
    let errs = validate_playlist(&p).unwrap_err();
    assert_eq!(
        errs.to_string(),
        "$.uid: uid must be non-empty; $.name: name must be non-empty"
    );
}

#[test]
fn errors_compare_by_path_and_message() {
    let p = Playlist::new("u", "n").with_items([
        PlaylistItem::by_uid("a"),
        PlaylistItem::new(PlaylistItemType::DashboardById, ""),
    ]);
    let errs = validate_playlist(&p).unwrap_err();
    assert_eq!(
        errs,
        SchemaErrors {
            errors: vec![SchemaError::new(
                &[
                    SchemaPathElem::Field("items"),
                    SchemaPathElem::Index(1),
                    SchemaPathElem::Field("value"),
                ],
                "value must be non-empty",
            )],
        }
    );
}

#[test]
fn root_errors_render_at_dollar() {
    let errs = validate_playlist_json(&json!([1, 2])).unwrap_err();
    assert_eq!(errs.errors, vec![SchemaError::new(&[], "playlist must be a JSON object")]);
    assert_eq!(errs.to_string(), "$: playlist must be a JSON object");
}

#[test]
fn playlist_json_reports_unknown_item_types() {
    let v = json!({
        "uid": "u",
        "name": "n",
        "interval": "5m",
        "items": [
            { "type": "dashboard_by_uid", "value": "a" },
            { "type": "dashboard_by_slug", "value": "b" },
            { "type": "dashboard_by_id", "value": 3 }
        ]
    });
    let errs = validate_playlist_json(&v).unwrap_err();
    assert_eq!(paths(&errs), vec!["$.items[1].type", "$.items[2].value"]);
    assert!(errs.errors[0].message.contains("dashboard_by_slug"));
}

#[test]
fn playlist_json_requires_core_fields() {
    let errs = validate_playlist_json(&json!({ "items": "nope" })).unwrap_err();
    assert_eq!(
        paths(&errs),
        vec!["$.uid", "$.name", "$.interval", "$.items"]
    );
    assert!(validate_playlist_json(&json!([])).is_err());
}

#[test]
fn panel_json_accepts_valid_shapes() {
    validate_panel_options_json(&json!({ "mode": "markdown", "content": "hi" })).unwrap();
    validate_panel_options_json(&json!({
        "mode": "code",
        "content": "SELECT 1",
        "code": { "language": "sql", "showLineNumbers": true, "showMiniMap": false }
    }))
    .unwrap();
}

#[test]
fn panel_json_distinguishes_unknown_literals() {
    let errs = validate_panel_options_json(&json!({
        "mode": "latex",
        "content": "x",
        "code": { "language": "rust", "showLineNumbers": "yes", "showMiniMap": false }
    }))
    .unwrap_err();
    assert_eq!(
        paths(&errs),
        vec!["$.mode", "$.code.language", "$.code.showLineNumbers"]
    );
}

#[test]
fn panel_json_requires_mode_and_content() {
    let errs = validate_panel_options_json(&json!({ "code": 5 })).unwrap_err();
    assert_eq!(paths(&errs), vec!["$.mode", "$.content", "$.code"]);
}
