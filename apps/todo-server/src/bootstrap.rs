use std::net::SocketAddr;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::app_state::AppState;
use todo_store::TodoStore;

pub(crate) const DEFAULT_DB_URI: &str = "mongodb://127.0.0.1:27017/test";

#[derive(Debug, thiserror::Error)]
pub(crate) enum HttpConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BIND: {0}")]
    InvalidBind(String),
}

#[derive(Debug)]
pub(crate) struct HttpConfig {
    pub addr: SocketAddr,
}

pub(crate) fn http_config_from_env() -> Result<HttpConfig, HttpConfigError> {
    let bind = std::env::var("BIND").unwrap_or_else(|_| "0.0.0.0".into());
    let port_raw = std::env::var("PORT").unwrap_or_else(|_| "3001".into());
    let port: u16 = port_raw
        .parse()
        .map_err(|_| HttpConfigError::InvalidPort(port_raw))?;

    let addr = format!("{}:{}", bind, port)
        .parse()
        .map_err(|_| HttpConfigError::InvalidBind(bind))?;

    Ok(HttpConfig { addr })
}

pub(crate) fn db_uri_from_env() -> String {
    std::env::var("DB_URI").unwrap_or_else(|_| DEFAULT_DB_URI.into())
}

pub(crate) async fn build() -> anyhow::Result<AppState> {
    let store = TodoStore::connect(&db_uri_from_env()).await?;
    Ok(AppState::new(store))
}

pub(crate) fn attach_http_layers(router: axum::Router<()>) -> axum::Router<()> {
    // The service is fully open to cross-origin callers.
    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
