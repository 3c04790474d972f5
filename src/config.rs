//! Configuration management for spotdump.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. They are collected once into a
//! [`Config`] that is handed to the session initializer and the driver, so
//! nothing reads the environment after startup.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Built-in defaults for everything except the client id

use std::{env, path::PathBuf};

use crate::error::{DumpError, Result};

/// Permissions requested during authentication.
pub const DEFAULT_SCOPE: &str = "playlist-read-private user-library-read";

/// Page size used for saved tracks and playlist tracks.
pub const DEFAULT_TRACKS_LIMIT: u32 = 20;

/// Page size used when listing a user's playlists.
pub const DEFAULT_PLAYLISTS_LIMIT: u32 = 50;

/// Extension appended to every per-playlist output file.
pub const JSON_EXTENSION: &str = ".json";

const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `spotdump` data directory if needed and loads
/// `<data_local_dir>/spotdump/.env` when it exists:
/// - Linux: `~/.local/share/spotdump/.env`
/// - macOS: `~/Library/Application Support/spotdump/.env`
/// - Windows: `%LOCALAPPDATA%/spotdump/.env`
///
/// A missing file is not an error; variables may come from the real
/// environment instead. Variables already set are never overridden.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the file
/// exists but cannot be parsed.
pub async fn load_env() -> std::result::Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotdump/.env");
    path
}

/// Runtime settings for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Client id of the registered Spotify application.
    pub client_id: String,
    /// Redirect URI registered for the application; must point at `server_addr`.
    pub redirect_uri: String,
    /// Bind address of the local callback server, e.g. `127.0.0.1:8888`.
    pub server_addr: String,
    pub auth_url: String,
    pub token_url: String,
    /// Base URL of the Web API, without trailing slash.
    pub api_url: String,
    /// Page size for track listings.
    pub tracks_limit: u32,
}

impl Config {
    /// Builds the configuration from the current environment.
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::Config`] when `SPOTIFY_API_AUTH_CLIENT_ID` is not
    /// set or `SPOTDUMP_TRACKS_LIMIT` is not a positive number.
    pub fn from_env() -> Result<Self> {
        let client_id = env::var("SPOTIFY_API_AUTH_CLIENT_ID")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| DumpError::Config("SPOTIFY_API_AUTH_CLIENT_ID must be set".into()))?;

        let tracks_limit = match env::var("SPOTDUMP_TRACKS_LIMIT") {
            Ok(raw) => match raw.parse::<u32>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    return Err(DumpError::Config(format!(
                        "SPOTDUMP_TRACKS_LIMIT must be a positive number, got {raw:?}"
                    )));
                }
            },
            Err(_) => DEFAULT_TRACKS_LIMIT,
        };

        Ok(Self {
            client_id,
            redirect_uri: var_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI),
            server_addr: var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            auth_url: var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: var_or("SPOTIFY_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            tracks_limit,
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
