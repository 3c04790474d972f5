use super::{auth, client::SpotifyClient};
use crate::{
    config::{Config, DEFAULT_SCOPE},
    error::{DumpError, Result},
    management::TokenManager,
    success, warning,
};

/// Authenticated handle for one user.
///
/// Created once per run and only read afterwards.
#[derive(Debug, Clone)]
pub struct Session {
    user: String,
    client: SpotifyClient,
}

impl Session {
    pub fn new(user: impl Into<String>, client: SpotifyClient) -> Self {
        Self {
            user: user.into(),
            client,
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn catalog(&self) -> &SpotifyClient {
        &self.client
    }
}

/// Obtains a session for `user` with the fixed read scope.
///
/// A cached token is reused (and refreshed when close to expiry) if it covers
/// the scope; otherwise the user is taken through the browser authorization
/// flow. The resulting token is cached for the next run.
///
/// # Errors
///
/// Returns [`DumpError::Auth`] when no usable token could be obtained. There is
/// no fallback to an anonymous session.
pub async fn init_session(config: &Config, user: &str) -> Result<Session> {
    let cached = match TokenManager::load(user).await {
        Ok(manager) if manager.covers(DEFAULT_SCOPE) => manager.into_valid(config).await.ok(),
        _ => None,
    };

    let manager = match cached {
        Some(manager) => manager,
        None => {
            let token = auth::authorize(config, user)
                .await
                .map_err(|e| match e {
                    err @ DumpError::Auth { .. } => err,
                    other => DumpError::auth(user, other),
                })?;
            success!("Authentication successful!");
            TokenManager::new(user, token)
        }
    };

    open_session(config, manager).await
}

/// Caches a usable token and binds a client to it. Empty tokens are never cached.
async fn open_session(config: &Config, manager: TokenManager) -> Result<Session> {
    if manager.access_token().is_empty() {
        return Err(DumpError::auth(manager.user(), "no access token returned"));
    }

    if let Err(e) = manager.persist().await {
        warning!("Failed to save token to cache: {}", e);
    }

    Ok(Session::new(
        manager.user(),
        SpotifyClient::new(&config.api_url, manager.access_token()),
    ))
}
