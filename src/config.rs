//! Configuration parsing and management for Fagulhas

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, FagulhasError};

/// tsParticles 2.x bundle on jsDelivr
pub const DEFAULT_LIBRARY_URL: &str =
    "https://cdn.jsdelivr.net/npm/tsparticles@2/tsparticles.bundle.min.js";

/// Crackling fireplace loop on Pixabay
pub const DEFAULT_AUDIO_URL: &str = "https://cdn.pixabay.com/download/audio/2022/03/15/audio_ef3fcd5aab.mp3?filename=fireplace-crackling-11268.mp3";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub assets: AssetConfig,
    pub page: PageConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FagulhasError> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::ReadFile(format!("{}: {}", path.as_ref().display(), e))
        })?;

        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(s: &str) -> Result<Self, FagulhasError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()).into())
    }

    /// Load configuration from default paths
    pub fn load() -> Result<Self, FagulhasError> {
        let paths = [
            PathBuf::from("fagulhas.toml"),
            PathBuf::from("config/default.toml"),
            dirs_path().join("config.toml"),
        ];

        for path in &paths {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), FagulhasError> {
        if self.http.port == 0 {
            return Err(invalid("http.port", "Port must be greater than 0"));
        }

        if self.http.host.trim().is_empty() {
            return Err(invalid("http.host", "Host must not be empty"));
        }

        if self.assets.library_url.trim().is_empty() {
            return Err(invalid("assets.library_url", "Library URL must not be empty"));
        }

        if self.assets.audio_url.trim().is_empty() {
            return Err(invalid("assets.audio_url", "Audio URL must not be empty"));
        }

        if self.page.frame_height == 0 {
            return Err(invalid(
                "page.frame_height",
                "Frame height must be greater than 0",
            ));
        }

        if let Some(ref dir) = self.assets.vendor_dir {
            if !dir.is_dir() {
                tracing::warn!(
                    "Vendor directory not found, /vendor will return 404: {}",
                    dir.display()
                );
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> FagulhasError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
    .into()
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// HTTP server host
    pub host: String,
    /// HTTP server port
    pub port: u16,
    /// Allow cross-origin requests to the JSON API
    pub cors_enabled: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_enabled: false,
        }
    }
}

/// Locations of the assets the browser fetches
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Particle library script
    pub library_url: String,
    /// Ambient MP3
    pub audio_url: String,
    /// Local directory served under `/vendor` for self-hosted copies
    pub vendor_dir: Option<PathBuf>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            library_url: DEFAULT_LIBRARY_URL.to_string(),
            audio_url: DEFAULT_AUDIO_URL.to_string(),
            vendor_dir: None,
        }
    }
}

/// Page layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Height of the scene frame in CSS pixels
    pub frame_height: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self { frame_height: 600 }
    }
}

/// Get the platform-specific configuration directory
fn dirs_path() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        if let Some(config_dir) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(config_dir).join("fagulhas");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config/fagulhas");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join("Library/Application Support/fagulhas");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("fagulhas");
        }
    }

    PathBuf::from(".")
}
