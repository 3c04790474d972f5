#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use spotdump::{
    Result,
    spotify::CatalogService,
    types::{Page, Playlist, TrackItem},
};

pub const SAVED: &str = "saved";
pub const PLAYLISTS: &str = "playlists";
pub const NO_LINK: &str = "<no link>";

pub fn playlist_key(id: &str) -> String {
    format!("playlist:{id}")
}

/// Catalog serving canned JSON pages and logging every request key.
///
/// First pages are stored under [`SAVED`], [`PLAYLISTS`] and
/// [`playlist_key`]; continuation pages under their `next` link. A link
/// without a stored page behaves like the service returning nothing. A
/// continuation request without a link is logged as [`NO_LINK`].
#[derive(Default)]
pub struct MockCatalog {
    pages: HashMap<String, Value>,
    requests: Mutex<Vec<String>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, key: impl Into<String>, page: Value) -> Self {
        self.pages.insert(key.into(), page);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn fetch<T: DeserializeOwned>(&self, key: &str) -> Option<Result<Page<T>>> {
        self.requests.lock().unwrap().push(key.to_string());
        self.pages
            .get(key)
            .map(|page| serde_json::from_value(page.clone()).map_err(Into::into))
    }

    fn first<T: DeserializeOwned>(&self, key: &str) -> Result<Page<T>> {
        self.fetch(key)
            .unwrap_or_else(|| panic!("unexpected request for {key}"))
    }
}

#[async_trait]
impl CatalogService for MockCatalog {
    async fn saved_tracks(&self, _limit: u32) -> Result<Page<TrackItem>> {
        self.first(SAVED)
    }

    async fn playlist_tracks(&self, playlist_id: &str, _limit: u32) -> Result<Page<TrackItem>> {
        self.first(&playlist_key(playlist_id))
    }

    async fn user_playlists(&self, _user: &str, _limit: u32) -> Result<Page<Playlist>> {
        self.first(PLAYLISTS)
    }

    async fn next_page<T>(&self, next: Option<&str>) -> Result<Option<Page<T>>>
    where
        T: DeserializeOwned + Send,
    {
        match next {
            Some(link) => self.fetch(link).transpose(),
            None => {
                self.requests.lock().unwrap().push(NO_LINK.to_string());
                Ok(None)
            }
        }
    }
}

pub fn page(items: Vec<Value>, next: Option<&str>) -> Value {
    json!({ "items": items, "next": next })
}

pub fn track(name: &str, album: &str, artists: &[&str], isrc: Option<&str>) -> Value {
    let mut external_ids = serde_json::Map::new();
    if let Some(isrc) = isrc {
        external_ids.insert("isrc".into(), json!(isrc));
    }

    json!({
        "added_at": "2024-01-01T00:00:00Z",
        "track": {
            "name": name,
            "album": { "name": album, "type": "album", "album_type": "single" },
            "artists": artists.iter().map(|a| json!({ "name": a })).collect::<Vec<_>>(),
            "external_ids": external_ids,
        }
    })
}

/// Tracks named `"{prefix} {n}"` for `n` in `range`.
pub fn tracks(prefix: &str, range: std::ops::Range<usize>) -> Vec<Value> {
    range
        .map(|n| track(&format!("{prefix} {n}"), "Album", &["Artist"], None))
        .collect()
}

pub fn playlist(id: &str, name: &str, owner: &str) -> Value {
    json!({ "id": id, "name": name, "owner": { "id": owner } })
}
