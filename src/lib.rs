//! Fagulhas - ambient sparks page
//!
//! Serves a single page where a tsParticles scene of rising sparks glows over
//! a black background while a crackling-fire loop plays underneath:
//! - `scene` holds the particle options handed to the library
//! - `page` composes the host document, the isolated scene frame and the
//!   audio control
//! - `web` serves the rendered page and a small JSON API over axum

pub mod config;
pub mod error;
pub mod page;
pub mod scene;
pub mod web;

pub use config::Config;
pub use error::{FagulhasError, Result};

use std::sync::Arc;
use tokio::sync::broadcast;

use scene::SceneConfig;

/// Application state shared across handlers
#[derive(Debug)]
pub struct AppState {
    /// Configuration the page was rendered with
    pub config: Config,
    /// Particle options embedded in the page
    pub scene: SceneConfig,
    /// Rendered host document
    page: String,
    /// Shutdown signal
    shutdown_tx: broadcast::Sender<()>,
}

impl AppState {
    /// Render the page once and wrap everything for sharing
    pub fn new(config: Config) -> Result<Arc<Self>> {
        let scene = SceneConfig::sparks();
        let page = page::render_page(&scene, &config.assets, &config.page)?;
        let (shutdown_tx, _) = broadcast::channel(1);

        tracing::debug!("Rendered page ({} bytes)", page.len());

        Ok(Arc::new(Self {
            config,
            scene,
            page,
            shutdown_tx,
        }))
    }

    /// The host document served at `/`
    pub fn page(&self) -> &str {
        &self.page
    }

    /// Subscribe to shutdown signal
    pub fn subscribe_shutdown(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Signal shutdown
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_renders_page() {
        let state = AppState::new(Config::default()).unwrap();
        assert!(state.page().contains(page::HEADING));
        assert_eq!(state.scene, SceneConfig::sparks());
    }

    #[tokio::test]
    async fn test_shutdown_signal() {
        let state = AppState::new(Config::default()).unwrap();
        let mut rx = state.subscribe_shutdown();
        state.shutdown();
        assert!(rx.recv().await.is_ok());
    }
}
