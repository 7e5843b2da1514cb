//! Error types for Fagulhas

use thiserror::Error;

/// Main error type for Fagulhas
#[derive(Error, Debug)]
pub enum FagulhasError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Web server error: {0}")]
    Web(#[from] WebError),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid configuration value: {field} - {message}")]
    InvalidValue { field: String, message: String },
}

/// Page rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to serialize scene configuration: {0}")]
    SceneSerialize(String),
}

/// Web server errors
#[derive(Error, Debug)]
pub enum WebError {
    #[error("Failed to bind to address {addr}: {message}")]
    Bind { addr: String, message: String },

    #[error("Server stopped unexpectedly: {0}")]
    Serve(String),
}

/// Result type alias for Fagulhas operations
pub type Result<T> = std::result::Result<T, FagulhasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let err: FagulhasError = ConfigError::InvalidValue {
            field: "http.port".to_string(),
            message: "Port must be greater than 0".to_string(),
        }
        .into();

        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid configuration value: http.port - Port must be greater than 0"
        );
    }

    #[test]
    fn test_bind_message() {
        let err = WebError::Bind {
            addr: "127.0.0.1:80".to_string(),
            message: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("127.0.0.1:80"));
    }
}
