use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Body returned by the token endpoint for both code exchange and refresh.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
    pub expires_in: Option<u64>,
}

/// State shared between the authorization flow and the callback handler.
#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
    pub error: Option<String>,
}

impl PkceToken {
    pub fn new(code_verifier: String) -> Self {
        Self {
            code_verifier,
            token: None,
            error: None,
        }
    }
}

/// One response unit of a paginated listing.
///
/// `next` is the opaque continuation link; `None` means the service has
/// nothing more to offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

/// Entry of the saved-tracks or playlist-tracks listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackItem {
    pub track: RawTrack,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTrack {
    pub name: String,
    pub album: RawAlbum,
    pub artists: Vec<RawArtist>,
    pub external_ids: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAlbum {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub owner: PlaylistOwner,
}

impl Playlist {
    pub fn owner_id(&self) -> &str {
        &self.owner.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
}

/// Normalized line written for every track.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub album: String,
    pub album_type: String,
    pub name: String,
    pub artists: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isrc: Option<String>,
}
