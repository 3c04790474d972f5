//! # Spotify Integration Module
//!
//! Everything that talks to, or abstracts over, the Spotify Web API.
//!
//! ## Architecture
//!
//! ```text
//! CLI driver
//!      ↓
//! Playlist lookup / Pagination   (generic over CatalogService)
//!      ↓
//! CatalogService  ←  SpotifyClient (reqwest, bearer token)
//!      ↑
//! Session  ←  TokenManager cache / PKCE authorization (auth + local server)
//! ```
//!
//! ## Core Modules
//!
//! - [`catalog`] - The [`CatalogService`] capability: first pages of saved
//!   tracks, playlist tracks and user playlists, plus continuation links.
//! - [`pagination`] - [`paginate`] turns a first page into a lazy item stream.
//!   An empty page ends the stream even when it carries a `next` link.
//! - [`playlists`] - Owner filtering and lookup of a playlist id by name.
//! - [`client`] - [`SpotifyClient`], the HTTP implementation. Retries 502
//!   responses and honours `Retry-After` on 429 up to two minutes.
//! - [`auth`] - OAuth 2.0 authorization code flow with PKCE, token exchange
//!   and refresh.
//! - [`session`] - [`init_session`] binds a client to one user's token.
//!
//! ## API Coverage
//!
//! - `GET /me/tracks` - Saved tracks of the current user
//! - `GET /playlists/{id}/tracks` - Tracks of a playlist
//! - `GET /users/{user_id}/playlists` - Playlists on a user's profile
//! - `POST /api/token` - Code exchange and refresh
//!
//! ## Usage Patterns
//!
//! ```rust,ignore
//! let session = spotify::init_session(&config, "someone").await?;
//! let first = session.catalog().saved_tracks(20).await?;
//! let mut tracks = std::pin::pin!(spotify::paginate(session.catalog(), first));
//! while let Some(item) = tracks.try_next().await? {
//!     println!("{}", item.track.name);
//! }
//! ```

pub mod auth;
pub mod catalog;
pub mod client;
pub mod pagination;
pub mod playlists;
pub mod session;

pub use catalog::CatalogService;
pub use client::SpotifyClient;
pub use pagination::paginate;
pub use playlists::{find_playlist_id, owned_playlists};
pub use session::{Session, init_session};
