//! Page composition module
//!
//! Builds the served document: an isolated scene frame, the page text and
//! the ambient audio control.

pub mod audio;
pub mod frame;
pub mod host;

pub use audio::AudioElement;
pub use frame::render_scene_frame;
pub use host::{escape_attribute, render_page, HEADING, DESCRIPTION};
