use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{config::Config, spotify::auth::exchange_code_pkce, types::PkceToken, warning};

/// Completes the authorization flow.
///
/// Spotify redirects here with either `code` or `error` (e.g. `access_denied`
/// when the user cancels). Every outcome, including a request carrying
/// neither, is recorded in the shared state so the waiting flow can finish
/// right away.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<PkceToken>>>,
    Extension(config): Extension<Arc<Config>>,
) -> Html<&'static str> {
    let mut state = shared_state.lock().await;

    if let Some(reason) = params.get("error") {
        state.error = Some(format!("authorization was denied: {reason}"));
        return Html("<h4>Login cancelled.</h4>");
    }

    let Some(code) = params.get("code") else {
        state.error = Some("callback carried no authorization code".into());
        return Html("<h4>Missing authorization code.</h4>");
    };

    let verifier = state.code_verifier.clone();
    match exchange_code_pkce(&config, code, &verifier).await {
        Ok(token) => {
            state.token = Some(token);
            Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            state.error = Some(format!("token exchange failed: {e}"));
            Html("<h4>Login failed.</h4>")
        }
    }
}
