use serde::{Deserialize, Serialize};

use crate::foundation::error::ModelResult;
use crate::playlist::model::{Playlist, PlaylistItem, PlaylistItemType};

fn is_zero_i64(v: &i64) -> bool {
    *v == 0
}

fn is_zero_i32(v: &i32) -> bool {
    *v == 0
}

/// Playlist as returned by the store, including storage ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistDto {
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub id: i64,
    pub uid: String,
    pub name: String,
    pub interval: String,
    #[serde(skip)]
    pub org_id: i64,
    #[serde(default)]
    pub items: Vec<PlaylistItemDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistItemDto {
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub id: i64,
    #[serde(rename = "playlistid", default, skip_serializing_if = "is_zero_i64")]
    pub playlist_id: i64,
    #[serde(rename = "type")]
    pub kind: PlaylistItemType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "is_zero_i32")]
    pub order: i32,
}

impl PlaylistItemDto {
    pub fn new(kind: PlaylistItemType, value: impl Into<String>) -> Self {
        Self {
            id: 0,
            playlist_id: 0,
            kind,
            title: String::new(),
            value: value.into(),
            order: 0,
        }
    }
}

impl From<&PlaylistItem> for PlaylistItemDto {
    fn from(item: &PlaylistItem) -> Self {
        Self::new(item.kind, item.value.clone())
    }
}

impl From<&PlaylistItemDto> for PlaylistItem {
    fn from(dto: &PlaylistItemDto) -> Self {
        PlaylistItem::new(dto.kind, dto.value.clone())
    }
}

impl From<&PlaylistDto> for Playlist {
    fn from(dto: &PlaylistDto) -> Self {
        let mut items: Vec<&PlaylistItemDto> = dto.items.iter().collect();
        items.sort_by_key(|i| i.order);
        Playlist {
            uid: dto.uid.clone(),
            name: dto.name.clone(),
            interval: dto.interval.clone(),
            items: items.into_iter().map(PlaylistItem::from).collect(),
        }
    }
}

impl Playlist {
    /// Item DTOs numbered `1..=n` in playlist order.
    pub fn item_dtos(&self) -> Vec<PlaylistItemDto> {
        numbered(self.items.iter().map(PlaylistItemDto::from))
    }

    /// Build the command that would persist this playlist under a fresh uid.
    pub fn to_create_command(&self, org_id: i64) -> CreatePlaylistCommand {
        CreatePlaylistCommand {
            name: self.name.clone(),
            interval: self.interval.clone(),
            items: self.item_dtos(),
            org_id,
        }
    }
}

pub(crate) fn numbered(items: impl IntoIterator<Item = PlaylistItemDto>) -> Vec<PlaylistItemDto> {
    items
        .into_iter()
        .zip(1..)
        .map(|(mut item, order)| {
            item.order = order;
            item
        })
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePlaylistCommand {
    pub name: String,
    #[serde(default)]
    pub interval: String,
    #[serde(default)]
    pub items: Vec<PlaylistItemDto>,
    #[serde(skip)]
    pub org_id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePlaylistCommand {
    #[serde(skip)]
    pub org_id: i64,
    pub uid: String,
    pub name: String,
    #[serde(default)]
    pub interval: String,
    #[serde(default)]
    pub items: Vec<PlaylistItemDto>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeletePlaylistCommand {
    pub uid: String,
    pub org_id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GetPlaylistsQuery {
    pub name: String,
    /// Zero or negative means unlimited.
    pub limit: i32,
    pub org_id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GetPlaylistByUidQuery {
    pub uid: String,
    pub org_id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GetPlaylistItemsByUidQuery {
    pub playlist_uid: String,
    pub org_id: i64,
}

impl PlaylistDto {
    pub fn from_json(s: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playlist/dto.rs"]
mod tests;
