//! Web module
//!
//! Serves the sparks page and a small JSON API.

pub mod api;
pub mod pages;
pub mod routes;

use axum::Router;
use std::sync::Arc;

use crate::config::Config;
use crate::AppState;

/// Web server for the page and API
pub struct WebServer {
    app_state: Arc<AppState>,
    config: Config,
}

impl WebServer {
    /// Create a new web server
    pub fn new(app_state: Arc<AppState>) -> Self {
        let config = app_state.config.clone();
        Self { app_state, config }
    }

    /// Address the server binds to
    pub fn addr(&self) -> String {
        format!("{}:{}", self.config.http.host, self.config.http.port)
    }

    /// Build the router
    pub fn router(&self) -> Router {
        routes::create_router(Arc::clone(&self.app_state), &self.config)
    }
}
