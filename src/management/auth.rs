use std::path::PathBuf;

use chrono::Utc;

use crate::{config::Config, error::Result, spotify::auth, types::Token};

/// Seconds before expiry at which a token is already treated as stale.
const EXPIRY_MARGIN_SECS: u64 = 240;

/// Cached token of one user.
pub struct TokenManager {
    user: String,
    token: Token,
}

impl TokenManager {
    pub fn new(user: &str, token: Token) -> Self {
        TokenManager {
            user: user.to_string(),
            token,
        }
    }

    pub async fn load(user: &str) -> Result<Self> {
        let content = async_fs::read_to_string(Self::token_path(user)).await?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Self::new(user, token))
    }

    pub async fn persist(&self) -> Result<()> {
        let path = Self::token_path(&self.user);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(path, json).await?;
        Ok(())
    }

    /// Returns a manager whose token is not about to expire, refreshing it if needed.
    pub async fn into_valid(mut self, config: &Config) -> Result<Self> {
        if self.is_expired() {
            self.token = auth::refresh_token(config, &self.token.refresh_token).await?;
        }
        Ok(self)
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + EXPIRY_MARGIN_SECS >= self.token.obtained_at + self.token.expires_in
    }

    /// True when every permission in `scope` was granted to this token.
    pub fn covers(&self, scope: &str) -> bool {
        let granted: Vec<&str> = self.token.scope.split_whitespace().collect();
        scope.split_whitespace().all(|s| granted.contains(&s))
    }

    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    fn token_path(user: &str) -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        let user = user.replace(['/', '\\'], "_");
        path.push(format!("spotdump/cache/token-{user}.json"));
        path
    }
}
