//! # API Module
//!
//! HTTP endpoints served by the local server that spotdump starts while it
//! waits for the user to approve access in the browser.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the redirect from Spotify's authorization server
//!   and exchanges the authorization code (plus PKCE verifier) for a token.
//!   A denied or failed authorization is recorded as well, so the waiting
//!   flow can give up immediately.
//! - [`health`] - Returns status and version, handy for checking that the
//!   redirect URI actually reaches the server.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotdump::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
