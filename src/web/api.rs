//! REST API endpoints

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

/// API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
        })
    }
}

/// Status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub name: String,
    pub version: String,
    pub library_url: String,
    pub audio_url: String,
}

/// Get service status
pub async fn get_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    ApiResponse::success(StatusResponse {
        name: crate::NAME.to_string(),
        version: crate::VERSION.to_string(),
        library_url: state.config.assets.library_url.clone(),
        audio_url: state.config.assets.audio_url.clone(),
    })
}

/// Get the scene options exactly as the page hands them to the library
pub async fn get_scene(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.scene.clone())
}
