use super::*;

fn basic_playlist() -> Playlist {
    Playlist::new("pl-1", "Ops wall").with_items([
        PlaylistItem::by_uid("abc123"),
        PlaylistItem::by_tag("ops"),
        PlaylistItem::by_id(42),
    ])
}

#[test]
fn defaults_fill_only_interval_and_items() {
    let d = PartialPlaylist::defaults();
    assert_eq!(d.interval.as_deref(), Some("5m"));
    assert_eq!(d.items, Some(vec![]));
    assert!(d.uid.is_none());
    assert!(d.name.is_none());
}

#[test]
fn defaults_serialize_without_unset_fields() {
    let v = serde_json::to_value(PartialPlaylist::defaults()).unwrap();
    assert_eq!(v, serde_json::json!({ "interval": "5m", "items": [] }));
}

#[test]
fn new_applies_defaults() {
    let p = Playlist::new("u", "n");
    assert_eq!(p.interval, "5m");
    assert!(p.items.is_empty());
}

#[test]
fn complete_requires_uid_and_name() {
    let err = PartialPlaylist::defaults().complete().unwrap_err();
    assert!(err.to_string().contains("uid"));

    let partial = PartialPlaylist {
        uid: Some("u".to_string()),
        ..PartialPlaylist::defaults()
    };
    let err = partial.complete().unwrap_err();
    assert!(err.to_string().contains("name"));
}

#[test]
fn complete_keeps_explicit_values() {
    let partial = PartialPlaylist {
        uid: Some("u".to_string()),
        name: Some("n".to_string()),
        interval: Some("1h".to_string()),
        items: None,
    };
    let p = partial.complete().unwrap();
    assert_eq!(p.interval, "1h");
    assert!(p.items.is_empty());
}

#[test]
fn json_roundtrip_preserves_literals() {
    let p = basic_playlist();
    let s = serde_json::to_string(&p).unwrap();
    assert!(s.contains("\"type\":\"dashboard_by_uid\""));
    assert!(s.contains("\"type\":\"dashboard_by_tag\""));
    assert!(s.contains("\"type\":\"dashboard_by_id\""));
    let de: Playlist = serde_json::from_str(&s).unwrap();
    assert_eq!(de, p);
}

#[test]
fn items_are_optional_on_the_wire() {
    let de: Playlist =
        serde_json::from_str(r#"{"uid":"u","name":"n","interval":"5m"}"#).unwrap();
    assert!(de.items.is_empty());
}

#[test]
fn unknown_item_type_is_rejected() {
    let s = r#"{"uid":"u","name":"n","interval":"5m","items":[{"type":"dashboard_by_name","value":"x"}]}"#;
    assert!(serde_json::from_str::<Playlist>(s).is_err());
    assert!(matches!(
        "dashboard_by_name".parse::<PlaylistItemType>(),
        Err(ModelError::UnknownLiteral { .. })
    ));
}

#[test]
fn item_type_literals_roundtrip_through_from_str() {
    for t in PlaylistItemType::ALL {
        assert_eq!(t.as_str().parse::<PlaylistItemType>().unwrap(), t);
        assert_eq!(t.to_string(), t.as_str());
    }
}

#[test]
fn dashboard_id_only_for_id_items() {
    assert_eq!(PlaylistItem::by_id(7).dashboard_id().unwrap(), Some(7));
    assert_eq!(PlaylistItem::by_uid("7").dashboard_id().unwrap(), None);
    assert!(
        PlaylistItem::new(PlaylistItemType::DashboardById, "seven")
            .dashboard_id()
            .is_err()
    );
}

#[test]
fn dashboard_id_rejects_padded_values() {
    let padded = PlaylistItem::new(PlaylistItemType::DashboardById, " 42 ");
    assert!(padded.dashboard_id().is_err());

    let p = Playlist::new("pl-1", "Ops wall").with_items([padded]);
    let err = p.validate().unwrap_err();
    assert!(err.to_string().contains("$.items[0].value"), "{err}");
}

#[test]
fn validate_accepts_basic_playlist() {
    basic_playlist().validate().unwrap();
}

#[test]
fn validate_rejects_bad_interval() {
    let mut p = basic_playlist();
    p.interval = "soon".to_string();
    let err = p.validate().unwrap_err();
    assert!(err.to_string().contains("$.interval"));
}
