use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers::pages::{self, PagesState};
use crate::shared::config::ServerConfig;

/// Фрагменты страниц, статика фронтенда и index.html для адресов истории
/// (`/office` после перезагрузки)
pub fn configure_routes(config: &ServerConfig) -> Router {
    let assets = ServeDir::new(config.static_path()).fallback(ServeFile::new(config.index_path()));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/src/pages/:file", get(pages::get_page))
        .with_state(PagesState::new(config.pages_path()))
        .fallback_service(assets)
}
