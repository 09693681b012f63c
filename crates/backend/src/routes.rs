use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::config::ServerConfig;

/// All API routes, plus the frontend bundle as fallback when configured
pub fn configure_routes(server: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/api/health", get(handlers::health::check))
        .route("/api/characters", get(handlers::a001_character::list_all))
        .route(
            "/api/character/:id",
            get(handlers::a001_character::get_by_id).put(handlers::a001_character::update),
        );

    match &server.static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    }
}
