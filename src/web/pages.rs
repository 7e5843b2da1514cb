//! HTML page handlers

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::AppState;

/// Serve the sparks page
pub async fn index_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page().to_string())
}
