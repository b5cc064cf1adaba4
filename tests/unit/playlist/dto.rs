use super::*;
use serde_json::json;

#[test]
fn zero_ids_and_org_are_not_serialized() {
    let dto = PlaylistDto {
        id: 0,
        uid: "u".to_string(),
        name: "n".to_string(),
        interval: "5m".to_string(),
        org_id: 7,
        items: vec![PlaylistItemDto::new(PlaylistItemType::DashboardByTag, "ops")],
    };
    let v = serde_json::to_value(&dto).unwrap();
    assert_eq!(
        v,
        json!({
            "uid": "u",
            "name": "n",
            "interval": "5m",
            "items": [{ "type": "dashboard_by_tag", "value": "ops" }]
        })
    );
}

#[test]
fn stored_item_keys_match_wire_names() {
    let item = PlaylistItemDto {
        id: 3,
        playlist_id: 9,
        kind: PlaylistItemType::DashboardById,
        title: "Home".to_string(),
        value: "12".to_string(),
        order: 2,
    };
    let v = serde_json::to_value(&item).unwrap();
    assert_eq!(
        v,
        json!({
            "id": 3,
            "playlistid": 9,
            "type": "dashboard_by_id",
            "title": "Home",
            "value": "12",
            "order": 2
        })
    );
}

#[test]
fn dto_to_playlist_orders_items() {
    let mut first = PlaylistItemDto::new(PlaylistItemType::DashboardByUid, "a");
    first.order = 2;
    let mut second = PlaylistItemDto::new(PlaylistItemType::DashboardByUid, "b");
    second.order = 1;
    let dto = PlaylistDto {
        id: 1,
        uid: "u".to_string(),
        name: "n".to_string(),
        interval: "1m".to_string(),
        org_id: 1,
        items: vec![first, second],
    };
    let p = Playlist::from(&dto);
    let values: Vec<&str> = p.items.iter().map(|i| i.value.as_str()).collect();
    assert_eq!(values, vec!["b", "a"]);
}

#[test]
fn item_dtos_are_numbered_from_one() {
    let p = Playlist::new("u", "n").with_items([
        PlaylistItem::by_tag("x"),
        PlaylistItem::by_uid("y"),
    ]);
    let orders: Vec<i32> = p.item_dtos().iter().map(|i| i.order).collect();
    assert_eq!(orders, vec![1, 2]);

    let cmd = p.to_create_command(4);
    assert_eq!(cmd.org_id, 4);
    assert_eq!(cmd.name, "n");
    assert_eq!(cmd.items.len(), 2);
}

#[test]
fn create_command_accepts_missing_interval() {
    let cmd: CreatePlaylistCommand = serde_json::from_str(r#"{"name":"n"}"#).unwrap();
    assert!(cmd.interval.is_empty());
    assert!(cmd.items.is_empty());
}

#[test]
fn from_json_rejects_unknown_item_type() {
    let s = r#"{"uid":"u","name":"n","interval":"5m","items":[{"type":"folder","value":"x"}]}"#;
    assert!(PlaylistDto::from_json(s).is_err());
}
