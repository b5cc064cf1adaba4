use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::foundation::error::{ModelError, ModelResult};
use crate::playlist::dto::{
    CreatePlaylistCommand, DeletePlaylistCommand, GetPlaylistByUidQuery,
    GetPlaylistItemsByUidQuery, GetPlaylistsQuery, PlaylistDto, PlaylistItemDto,
    UpdatePlaylistCommand, numbered,
};
use crate::playlist::model::DEFAULT_INTERVAL;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaylistStoreOpts {
    /// Attempts at drawing an unused uid before giving up.
    pub max_uid_attempts: usize,
    /// Length of generated uids, capped at 32.
    pub uid_len: usize,
}

impl Default for PlaylistStoreOpts {
    fn default() -> Self {
        Self {
            max_uid_attempts: 3,
            uid_len: 9,
        }
    }
}

pub type UidSource = Box<dyn Fn() -> String + Send + Sync>;

#[derive(Default)]
struct StoreState {
    next_id: i64,
    next_item_id: i64,
    playlists: BTreeMap<(i64, String), PlaylistDto>,
}

/// In-memory playlist storage scoped by organization.
pub struct PlaylistStore {
    opts: PlaylistStoreOpts,
    uid_source: UidSource,
    state: RwLock<StoreState>,
}

impl Default for PlaylistStore {
    fn default() -> Self {
        Self::new(PlaylistStoreOpts::default())
    }
}

impl std::fmt::Debug for PlaylistStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaylistStore")
            .field("opts", &self.opts)
            .field("len", &self.read().playlists.len())
            .finish_non_exhaustive()
    }
}

impl PlaylistStore {
    pub fn new(opts: PlaylistStoreOpts) -> Self {
        let len = opts.uid_len.clamp(1, 32);
        Self::with_uid_source(
            opts,
            Box::new(move || {
                let mut uid = uuid::Uuid::new_v4().simple().to_string();
                uid.truncate(len);
                uid
            }),
        )
    }

    pub fn with_uid_source(opts: PlaylistStoreOpts, uid_source: UidSource) -> Self {
        Self {
            opts,
            uid_source,
            state: RwLock::new(StoreState::default()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[tracing::instrument(skip(self, cmd), fields(org_id = cmd.org_id, name = %cmd.name))]
    pub fn create(&self, cmd: CreatePlaylistCommand) -> ModelResult<PlaylistDto> {
        if cmd.name.trim().is_empty() {
            return Err(ModelError::CommandValidationFailed);
        }

        let mut state = self.write();
        let uid = self.unused_uid(&state, cmd.org_id)?;

        state.next_id += 1;
        let id = state.next_id;
        let items = assign_item_ids(&mut state, id, cmd.items);
        let dto = PlaylistDto {
            id,
            uid: uid.clone(),
            name: cmd.name,
            interval: interval_or_default(cmd.interval),
            org_id: cmd.org_id,
            items,
        };
        state.playlists.insert((cmd.org_id, uid), dto.clone());
        tracing::debug!(id, uid = %dto.uid, items = dto.items.len(), "playlist created");
        Ok(dto)
    }

    fn unused_uid(&self, state: &StoreState, org_id: i64) -> ModelResult<String> {
        for _ in 0..self.opts.max_uid_attempts {
            let uid = (self.uid_source)();
            if !uid.is_empty() && !state.playlists.contains_key(&(org_id, uid.clone())) {
                return Ok(uid);
            }
        }
        Err(ModelError::FailedGenerateUniqueUid)
    }

    #[tracing::instrument(skip(self, cmd), fields(org_id = cmd.org_id, uid = %cmd.uid))]
    pub fn update(&self, cmd: UpdatePlaylistCommand) -> ModelResult<PlaylistDto> {
        if cmd.name.trim().is_empty() {
            return Err(ModelError::CommandValidationFailed);
        }

        let mut state = self.write();
        let key = (cmd.org_id, cmd.uid);
        let id = state
            .playlists
            .get(&key)
            .map(|p| p.id)
            .ok_or(ModelError::PlaylistNotFound)?;
        let items = assign_item_ids(&mut state, id, cmd.items);

        let Some(existing) = state.playlists.get_mut(&key) else {
            return Err(ModelError::PlaylistNotFound);
        };
        existing.name = cmd.name;
        existing.interval = interval_or_default(cmd.interval);
        existing.items = items;
        Ok(existing.clone())
    }

    /// Removing a playlist that does not exist is not an error.
    #[tracing::instrument(skip(self, cmd), fields(org_id = cmd.org_id, uid = %cmd.uid))]
    pub fn delete(&self, cmd: DeletePlaylistCommand) -> ModelResult<()> {
        if cmd.uid.is_empty() {
            return Err(ModelError::CommandValidationFailed);
        }
        if self.write().playlists.remove(&(cmd.org_id, cmd.uid)).is_none() {
            tracing::debug!("delete of unknown playlist ignored");
        }
        Ok(())
    }

    pub fn get(&self, query: &GetPlaylistByUidQuery) -> ModelResult<PlaylistDto> {
        self.read()
            .playlists
            .get(&(query.org_id, query.uid.clone()))
            .cloned()
            .ok_or(ModelError::PlaylistNotFound)
    }

    /// Playlists of an org sorted by name, optionally filtered by a
    /// case-insensitive name substring.
    pub fn search(&self, query: &GetPlaylistsQuery) -> Vec<PlaylistDto> {
        let needle = query.name.to_lowercase();
        let state = self.read();
        let mut found: Vec<PlaylistDto> = state
            .playlists
            .values()
            .filter(|p| p.org_id == query.org_id)
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        if query.limit > 0 {
            found.truncate(query.limit as usize);
        }
        found
    }

    pub fn get_items(&self, query: &GetPlaylistItemsByUidQuery) -> ModelResult<Vec<PlaylistItemDto>> {
        let playlist = self.get(&GetPlaylistByUidQuery {
            uid: query.playlist_uid.clone(),
            org_id: query.org_id,
        })?;
        let mut items = playlist.items;
        items.sort_by_key(|i| i.order);
        Ok(items)
    }

    pub fn len(&self) -> usize {
        self.read().playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn interval_or_default(interval: String) -> String {
    if interval.trim().is_empty() {
        DEFAULT_INTERVAL.to_string()
    } else {
        interval
    }
}

fn assign_item_ids(
    state: &mut StoreState,
    playlist_id: i64,
    items: Vec<PlaylistItemDto>,
) -> Vec<PlaylistItemDto> {
    numbered(items)
        .into_iter()
        .map(|mut item| {
            state.next_item_id += 1;
            item.id = state.next_item_id;
            item.playlist_id = playlist_id;
            item
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/playlist/store.rs"]
mod tests;
