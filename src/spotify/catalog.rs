use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::{
    error::Result,
    types::{Page, Playlist, TrackItem},
};

/// The catalog operations the dump needs from the streaming service.
///
/// [`SpotifyClient`](super::client::SpotifyClient) implements it over the Web
/// API; tests provide in-memory implementations. Every method is one blocking
/// round trip from the caller's point of view; callers never issue two at once.
#[async_trait]
pub trait CatalogService: Sync {
    /// First page of the current user's saved tracks.
    async fn saved_tracks(&self, limit: u32) -> Result<Page<TrackItem>>;

    /// First page of the tracks in the playlist with the given id.
    async fn playlist_tracks(&self, playlist_id: &str, limit: u32) -> Result<Page<TrackItem>>;

    /// First page of the playlists visible on the given user's profile.
    async fn user_playlists(&self, user: &str, limit: u32) -> Result<Page<Playlist>>;

    /// Follows a continuation link.
    ///
    /// Returns `Ok(None)` when there is no link or the service has no page
    /// behind it.
    async fn next_page<T>(&self, next: Option<&str>) -> Result<Option<Page<T>>>
    where
        T: DeserializeOwned + Send;
}
