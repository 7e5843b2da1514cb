//! Particle scene module
//!
//! Declarative tsParticles options for the sparks scene.

pub mod options;

pub use options::{SceneConfig, BACKGROUND_COLOR, CONTAINER_ID, SPARK_PALETTE};
