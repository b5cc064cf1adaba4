//! Typed models for two dashboard kinds:
//!
//! - [`Playlist`]: a named, ordered list of dashboard references cycled every `interval`.
//! - Text panel [`PanelOptions`]: a render mode plus the content and code-editor settings.
//!
//! Every kind comes with a `Partial*` twin whose `defaults()` fills exactly the fields that
//! carry defaults, JSON (de)serialization preserving wire names and literals, and
//! path-addressed schema validation. [`PlaylistStore`] executes the playlist commands
//! and queries in memory.
#![forbid(unsafe_code)]

mod foundation;
mod panel;
mod playlist;
mod schema;

pub use crate::foundation::duration::parse_interval;
pub use crate::foundation::error::{ModelError, ModelResult};

pub use crate::panel::text::{
    CodeLanguage, CodeOptions, DEFAULT_CONTENT, PANEL_MODEL_VERSION, PanelOptions,
    PanelOptionsDoc, PartialCodeOptions, PartialPanelOptions, TextMode,
};
pub use crate::playlist::dto::{
    CreatePlaylistCommand, DeletePlaylistCommand, GetPlaylistByUidQuery,
    GetPlaylistItemsByUidQuery, GetPlaylistsQuery, PlaylistDto, PlaylistItemDto,
    UpdatePlaylistCommand,
};
pub use crate::playlist::model::{
    DEFAULT_INTERVAL, PartialPlaylist, Playlist, PlaylistItem, PlaylistItemType,
};
pub use crate::playlist::store::{PlaylistStore, PlaylistStoreOpts, UidSource};
pub use crate::schema::validate::{
    SchemaError, SchemaErrors, SchemaPathElem, validate_panel_options_json, validate_playlist,
    validate_playlist_json,
};
pub use crate::schema::version::{Compatibility, SchemaVersion};
