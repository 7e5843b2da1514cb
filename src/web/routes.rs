//! Route definitions

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::AppState;

use super::api;
use super::pages;

/// Create the main router with all routes
pub fn create_router(app_state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.http.cors_enabled {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    let mut router = Router::new()
        .route("/", get(pages::index_page))
        // API endpoints (JSON)
        .route("/api/status", get(api::get_status))
        .route("/api/scene", get(api::get_scene));

    // Self-hosted copies of the library and audio
    if let Some(ref dir) = config.assets.vendor_dir {
        tracing::info!("Serving vendored assets from {}", dir.display());
        router = router.nest_service("/vendor", ServeDir::new(dir));
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
