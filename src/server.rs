use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{
    api,
    config::Config,
    error::{DumpError, Result},
    types::PkceToken,
};

/// Serves `/callback` and `/health` on the configured address until aborted.
pub async fn start_api_server(config: Arc<Config>, state: Arc<Mutex<PkceToken>>) -> Result<()> {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback))
        .layer(Extension(state))
        .layer(Extension(config.clone()));

    let addr = SocketAddr::from_str(&config.server_addr).map_err(|e| {
        DumpError::Config(format!(
            "Failed to parse server address {}: {}",
            config.server_addr, e
        ))
    })?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
