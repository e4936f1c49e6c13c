//! In-memory collaborator fakes for service tests
//!
//! Each fake implements the same narrow interface the production
//! implementations do, so every component runs unmodified against them.

use async_trait::async_trait;
use chorus_cache::{CacheError, CacheStore, Lookup};
use chorus_core::{
    error::Result,
    store::PlaylistStore,
    types::*,
    ChorusError,
};
use chorus_service::{DeliveryQueue, MailDispatcher, MailError, QueueError};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

#[derive(Default)]
struct StoreInner {
    users: HashMap<UserId, User>,
    songs: HashMap<SongId, Song>,
    playlists: Vec<(PlaylistId, String, UserId)>,
    playlist_songs: Vec<(PlaylistId, SongId)>,
    collaborations: Vec<(PlaylistId, UserId)>,
    activities: Vec<Activity>,
}

/// In-memory `PlaylistStore`
#[derive(Default)]
pub struct MemStore {
    inner: Mutex<StoreInner>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_user(&self, id: &str, username: &str) -> UserId {
        let user_id = UserId::new(id);
        self.inner.lock().unwrap().users.insert(
            user_id.clone(),
            User {
                id: user_id.clone(),
                username: username.to_string(),
                fullname: username.to_string(),
            },
        );
        user_id
    }

    pub fn seed_song(&self, id: &str, title: &str, performer: &str) -> SongId {
        let song_id = SongId::new(id);
        self.inner.lock().unwrap().songs.insert(
            song_id.clone(),
            Song {
                id: song_id.clone(),
                title: title.to_string(),
                year: 2024,
                genre: "pop".to_string(),
                performer: performer.to_string(),
                duration: Some(180),
                album_id: None,
            },
        );
        song_id
    }

    /// Mutate a playlist name behind the gateway's back, to prove reads
    /// come from the cache until an invalidating write happens
    pub fn rename_playlist(&self, id: &PlaylistId, name: &str) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(entry) = inner.playlists.iter_mut().find(|(pid, _, _)| pid == id) {
            entry.1 = name.to_string();
        }
    }

    fn username_of(inner: &StoreInner, user_id: &UserId) -> String {
        inner
            .users
            .get(user_id)
            .map(|u| u.username.clone())
            .unwrap_or_else(|| user_id.to_string())
    }

    fn to_playlist(inner: &StoreInner, entry: &(PlaylistId, String, UserId)) -> Playlist {
        Playlist {
            id: entry.0.clone(),
            name: entry.1.clone(),
            owner: entry.2.clone(),
            username: Self::username_of(inner, &entry.2),
        }
    }
}

#[async_trait]
impl PlaylistStore for MemStore {
    async fn user_exists(&self, id: &UserId) -> Result<bool> {
        Ok(self.inner.lock().unwrap().users.contains_key(id))
    }

    async fn song_exists(&self, id: &SongId) -> Result<bool> {
        Ok(self.inner.lock().unwrap().songs.contains_key(id))
    }

    async fn insert_playlist(&self, playlist: CreatePlaylist) -> Result<PlaylistId> {
        let id = PlaylistId::generate();
        self.inner
            .lock()
            .unwrap()
            .playlists
            .push((id.clone(), playlist.name, playlist.owner));
        Ok(id)
    }

    async fn playlist_by_id(&self, id: &PlaylistId) -> Result<Option<Playlist>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .playlists
            .iter()
            .find(|(pid, _, _)| pid == id)
            .map(|entry| Self::to_playlist(&inner, entry)))
    }

    async fn playlists_for_user(&self, user_id: &UserId) -> Result<Vec<Playlist>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .playlists
            .iter()
            .filter(|(pid, _, owner)| {
                owner == user_id
                    || inner
                        .collaborations
                        .iter()
                        .any(|(cpid, cuid)| cpid == pid && cuid == user_id)
            })
            .map(|entry| Self::to_playlist(&inner, entry))
            .collect())
    }

    async fn delete_playlist(&self, id: &PlaylistId) -> Result<u64> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.playlists.len();
        inner.playlists.retain(|(pid, _, _)| pid != id);
        let removed = (before - inner.playlists.len()) as u64;

        // Cascades
        inner.playlist_songs.retain(|(pid, _)| pid != id);
        inner.collaborations.retain(|(pid, _)| pid != id);
        inner.activities.retain(|a| &a.playlist_id != id);
        Ok(removed)
    }

    async fn insert_playlist_song(
        &self,
        playlist_id: &PlaylistId,
        song_id: &SongId,
    ) -> Result<()> {
        self.inner
            .lock()
            .unwrap()
            .playlist_songs
            .push((playlist_id.clone(), song_id.clone()));
        Ok(())
    }

    async fn delete_playlist_song(
        &self,
        playlist_id: &PlaylistId,
        song_id: &SongId,
    ) -> Result<u64> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.playlist_songs.len();
        inner
            .playlist_songs
            .retain(|(pid, sid)| !(pid == playlist_id && sid == song_id));
        Ok((before - inner.playlist_songs.len()) as u64)
    }

    async fn songs_in_playlist(&self, playlist_id: &PlaylistId) -> Result<Vec<SongSummary>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .playlist_songs
            .iter()
            .filter(|(pid, _)| pid == playlist_id)
            .filter_map(|(_, sid)| {
                inner.songs.get(sid).map(|song| SongSummary {
                    id: song.id.clone(),
                    title: song.title.clone(),
                    performer: song.performer.clone(),
                })
            })
            .collect())
    }

    async fn insert_collaboration(
        &self,
        playlist_id: &PlaylistId,
        user_id: &UserId,
    ) -> Result<String> {
        let mut inner = self.inner.lock().unwrap();
        if inner
            .collaborations
            .iter()
            .any(|(pid, uid)| pid == playlist_id && uid == user_id)
        {
            return Err(ChorusError::Duplicate(format!(
                "collaboration already exists for {user_id} on {playlist_id}"
            )));
        }
        inner
            .collaborations
            .push((playlist_id.clone(), user_id.clone()));
        Ok(format!("collab-{}", inner.collaborations.len()))
    }

    async fn delete_collaboration(
        &self,
        playlist_id: &PlaylistId,
        user_id: &UserId,
    ) -> Result<u64> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.collaborations.len();
        inner
            .collaborations
            .retain(|(pid, uid)| !(pid == playlist_id && uid == user_id));
        Ok((before - inner.collaborations.len()) as u64)
    }

    async fn collaboration_exists(
        &self,
        playlist_id: &PlaylistId,
        user_id: &UserId,
    ) -> Result<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .collaborations
            .iter()
            .any(|(pid, uid)| pid == playlist_id && uid == user_id))
    }

    async fn insert_activity(&self, activity: Activity) -> Result<()> {
        self.inner.lock().unwrap().activities.push(activity);
        Ok(())
    }

    async fn activities_for_playlist(
        &self,
        playlist_id: &PlaylistId,
    ) -> Result<Vec<ActivityEntry>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .activities
            .iter()
            .filter(|a| &a.playlist_id == playlist_id)
            .map(|a| ActivityEntry {
                username: MemStore::username_of(&inner, &a.user_id),
                title: inner
                    .songs
                    .get(&a.song_id)
                    .map(|s| s.title.clone())
                    .unwrap_or_else(|| a.song_id.to_string()),
                action: a.action,
                time: a.time,
            })
            .collect())
    }
}

/// In-memory `DeliveryQueue`
#[derive(Default)]
pub struct MemQueue {
    topics: Mutex<HashMap<String, VecDeque<Vec<u8>>>>,
}

impl MemQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self, topic: &str) -> Vec<Vec<u8>> {
        self.topics
            .lock()
            .unwrap()
            .get(topic)
            .map(|q| q.iter().cloned().collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl DeliveryQueue for MemQueue {
    async fn publish(&self, topic: &str, payload: &[u8]) -> std::result::Result<(), QueueError> {
        self.topics
            .lock()
            .unwrap()
            .entry(topic.to_string())
            .or_default()
            .push_back(payload.to_vec());
        Ok(())
    }

    async fn receive(&self, topic: &str) -> std::result::Result<Option<Vec<u8>>, QueueError> {
        Ok(self
            .topics
            .lock()
            .unwrap()
            .get_mut(topic)
            .and_then(|q| q.pop_front()))
    }
}

/// Mail dispatcher that records every send
#[derive(Default)]
pub struct MemMailer {
    sent: Mutex<Vec<(String, String)>>,
}

impl MemMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailDispatcher for MemMailer {
    async fn send(&self, to: &str, body: &str) -> std::result::Result<(), MailError> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), body.to_string()));
        Ok(())
    }
}

/// Cache store whose backend is permanently down
///
/// Reads report `Unavailable`, writes fail; callers must fall through to
/// the source of truth and keep working.
pub struct UnavailableCache;

#[async_trait]
impl CacheStore for UnavailableCache {
    async fn get(&self, _key: &str) -> Lookup {
        Lookup::Unavailable
    }

    async fn set(&self, _key: &str, _value: &[u8]) -> std::result::Result<(), CacheError> {
        Err(CacheError::Backend("cache is down".to_string()))
    }

    async fn delete(&self, _key: &str) -> std::result::Result<(), CacheError> {
        Err(CacheError::Backend("cache is down".to_string()))
    }
}
