use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{ModelError, ModelResult};
use crate::schema::validate::validate_playlist;

/// Interval applied when a playlist does not specify one.
pub const DEFAULT_INTERVAL: &str = "5m";

/// How a playlist item's `value` refers to dashboards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaylistItemType {
    /// `value` is a dashboard UID.
    DashboardByUid,
    /// `value` is a tag; every dashboard carrying it is included.
    DashboardByTag,
    /// `value` is a numeric dashboard id encoded as a string.
    DashboardById,
}

impl PlaylistItemType {
    pub const ALL: [PlaylistItemType; 3] = [
        PlaylistItemType::DashboardByUid,
        PlaylistItemType::DashboardByTag,
        PlaylistItemType::DashboardById,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DashboardByUid => "dashboard_by_uid",
            Self::DashboardByTag => "dashboard_by_tag",
            Self::DashboardById => "dashboard_by_id",
        }
    }
}

impl FromStr for PlaylistItemType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ModelError::unknown_literal("playlist item type", s))
    }
}

impl fmt::Display for PlaylistItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(rename = "type")]
    pub kind: PlaylistItemType,
    pub value: String,
}

impl PlaylistItem {
    pub fn new(kind: PlaylistItemType, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn by_uid(uid: impl Into<String>) -> Self {
        Self::new(PlaylistItemType::DashboardByUid, uid)
    }

    pub fn by_tag(tag: impl Into<String>) -> Self {
        Self::new(PlaylistItemType::DashboardByTag, tag)
    }

    pub fn by_id(id: i64) -> Self {
        Self::new(PlaylistItemType::DashboardById, id.to_string())
    }

    /// Numeric dashboard id for `dashboard_by_id` items, `None` for other kinds.
    pub fn dashboard_id(&self) -> ModelResult<Option<i64>> {
        if self.kind != PlaylistItemType::DashboardById {
            return Ok(None);
        }
        self.value.parse::<i64>().map(Some).map_err(|e| {
            ModelError::validation(format!(
                "dashboard_by_id value '{}' is not an integer: {e}",
                self.value
            ))
        })
    }
}

/// A named, ordered list of dashboard references cycled every `interval`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub uid: String,
    pub name: String,
    pub interval: String,
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

impl Playlist {
    /// Build a playlist with the default interval and no items.
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
            interval: DEFAULT_INTERVAL.to_string(),
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = PlaylistItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> ModelResult<Self> {
        let playlist: Playlist = serde_json::from_reader(r)
            .map_err(|e| ModelError::serde(format!("parse playlist JSON: {e}")))?;
        Ok(playlist)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ModelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ModelError::validation(format!("open playlist JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> ModelResult<()> {
        validate_playlist(self)
            .map_err(|e| ModelError::validation(format!("playlist schema validation failed: {e}")))
    }
}

/// Playlist with every field optional; the shape the defaults are expressed in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialPlaylist {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<PlaylistItem>>,
}

impl PartialPlaylist {
    /// Only `interval` and `items` carry defaults; `uid` and `name` stay unset.
    pub fn defaults() -> Self {
        Self {
            uid: None,
            name: None,
            interval: Some(DEFAULT_INTERVAL.to_string()),
            items: Some(Vec::new()),
        }
    }

    /// Overlay `self` on top of the defaults and require the remaining fields.
    pub fn complete(self) -> ModelResult<Playlist> {
        let defaults = Self::defaults();
        let uid = self
            .uid
            .ok_or_else(|| ModelError::validation("playlist uid is required"))?;
        let name = self
            .name
            .ok_or_else(|| ModelError::validation("playlist name is required"))?;
        Ok(Playlist {
            uid,
            name,
            interval: self
                .interval
                .or(defaults.interval)
                .unwrap_or_else(|| DEFAULT_INTERVAL.to_string()),
            items: self.items.or(defaults.items).unwrap_or_default(),
        })
    }
}

impl From<Playlist> for PartialPlaylist {
    fn from(p: Playlist) -> Self {
        Self {
            uid: Some(p.uid),
            name: Some(p.name),
            interval: Some(p.interval),
            items: Some(p.items),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playlist/model.rs"]
mod tests;
