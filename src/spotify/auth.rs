use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use chrono::Utc;
use reqwest::{Client, Url};
use tokio::sync::Mutex;

use crate::{
    config::{Config, DEFAULT_SCOPE},
    error::{DumpError, Result},
    info,
    server::start_api_server,
    types::{PkceToken, Token, TokenResponse},
    utils, warning,
};

/// How long the user gets to approve access in the browser.
const AUTH_TIMEOUT: Duration = Duration::from_secs(60);

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Runs the authorization-code flow with PKCE and returns a fresh token.
///
/// Starts the local callback server, sends the user to the consent page and
/// waits for the callback to deliver a token. The server is stopped before
/// returning.
///
/// # Errors
///
/// Fails when the authorization URL cannot be built, the server cannot
/// start, the user denies access, the code exchange fails, or no callback
/// arrives within the timeout.
pub async fn authorize(config: &Config, user: &str) -> Result<Token> {
    // generate PKCE verifier and challenge
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    let auth_url = Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("code_challenge", code_challenge.as_str()),
            ("code_challenge_method", "S256"),
            ("scope", DEFAULT_SCOPE),
        ],
    )
    .map_err(|e| DumpError::Config(format!("invalid auth url {}: {}", config.auth_url, e)))?;

    // verifier must be in place before the callback can be hit
    let shared_state = Arc::new(Mutex::new(PkceToken::new(code_verifier)));

    let server_state = Arc::clone(&shared_state);
    let server_config = Arc::new(config.clone());
    let server = tokio::spawn(async move {
        if let Err(e) = start_api_server(server_config, Arc::clone(&server_state)).await {
            server_state.lock().await.error = Some(e.to_string());
        }
    });

    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    } else {
        info!("Waiting for authorization in the browser...");
    }

    let token = wait_for_token(shared_state, user, AUTH_TIMEOUT).await;
    server.abort();
    token
}

async fn wait_for_token(
    shared_state: Arc<Mutex<PkceToken>>,
    user: &str,
    max_wait: Duration,
) -> Result<Token> {
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(token) = &lock.token {
            return Ok(token.clone());
        }
        if let Some(reason) = &lock.error {
            return Err(DumpError::auth(user, reason));
        }
        drop(lock);
        tokio::time::sleep(POLL_INTERVAL).await;
    }

    Err(DumpError::auth(user, "authentication timed out"))
}

pub async fn exchange_code_pkce(config: &Config, code: &str, verifier: &str) -> Result<Token> {
    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", config.client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", config.redirect_uri.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json: TokenResponse = res.json().await?;
    Ok(into_token(json, None))
}

pub async fn refresh_token(config: &Config, refresh_token: &str) -> Result<Token> {
    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", config.client_id.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json: TokenResponse = res.json().await?;
    Ok(into_token(json, Some(refresh_token)))
}

/// Refresh responses may omit the refresh token; the old one stays valid then.
fn into_token(json: TokenResponse, previous_refresh: Option<&str>) -> Token {
    Token {
        access_token: json.access_token,
        refresh_token: json
            .refresh_token
            .or_else(|| previous_refresh.map(str::to_string))
            .unwrap_or_default(),
        scope: json.scope.unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
        expires_in: json.expires_in.unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    }
}
