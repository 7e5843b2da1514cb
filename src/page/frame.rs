//! Scene frame document
//!
//! A standalone HTML document that resets its own `body`, loads the particle
//! library and hands it the scene options. It is embedded through
//! `<iframe srcdoc>` so the reset never reaches the host page.

use crate::error::RenderError;
use crate::scene::{SceneConfig, BACKGROUND_COLOR, CONTAINER_ID};

/// Render the scene frame document
pub fn render_scene_frame(scene: &SceneConfig, library_url: &str) -> Result<String, RenderError> {
    let options = scene.to_json()?;

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <style>
        html, body {{
            margin: 0;
            padding: 0;
            overflow: hidden;
            height: 100vh;
            width: 100vw;
            background: {background};
        }}
        #{container_id} {{
            position: fixed;
            width: 100%;
            height: 100%;
        }}
    </style>
</head>
<body>
    <div id="{container_id}"></div>
    <script src="{library_url}"></script>
    <script>
        tsParticles.load("{container_id}", {options});
    </script>
</body>
</html>"#,
        background = BACKGROUND_COLOR,
        container_id = CONTAINER_ID,
        library_url = super::escape_attribute(library_url),
        options = options,
    );

    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LIBRARY_URL;

    fn frame() -> String {
        render_scene_frame(&SceneConfig::sparks(), DEFAULT_LIBRARY_URL).unwrap()
    }

    /// Pull the options literal back out of `tsParticles.load("…", {…});`
    fn load_options(html: &str) -> serde_json::Value {
        let call = r#"tsParticles.load("tsparticles", "#;
        let start = html.find(call).unwrap() + call.len();
        let end = html[start..].rfind(");").unwrap() + start;
        serde_json::from_str(&html[start..end]).unwrap()
    }

    #[test]
    fn test_single_container() {
        let html = frame();
        assert_eq!(html.matches(r#"id="tsparticles""#).count(), 1);
        assert!(html.contains(r#"<div id="tsparticles"></div>"#));
    }

    #[test]
    fn test_library_loaded_before_init() {
        let html = frame();
        let library = html
            .find(&format!(r#"<script src="{}"></script>"#, DEFAULT_LIBRARY_URL))
            .unwrap();
        let init = html.find("tsParticles.load(").unwrap();
        assert!(library < init);
    }

    #[test]
    fn test_load_called_once_with_scene() {
        let html = frame();
        assert_eq!(html.matches("tsParticles.load(").count(), 1);

        let options = load_options(&html);
        assert_eq!(options, SceneConfig::sparks().to_value().unwrap());
        assert_eq!(options["particles"]["number"]["value"], 100);
    }

    #[test]
    fn test_frame_layout() {
        let html = frame();
        assert!(html.contains("html, body {"));
        assert!(html.contains("overflow: hidden;"));
        assert!(html.contains("height: 100vh;"));
        assert!(html.contains("width: 100vw;"));
        assert!(html.contains("background: #000000;"));
        assert!(html.contains("position: fixed;"));
    }

    #[test]
    fn test_vendored_library_url() {
        let html = render_scene_frame(&SceneConfig::sparks(), "/vendor/tsparticles.bundle.min.js")
            .unwrap();
        assert!(html.contains(r#"<script src="/vendor/tsparticles.bundle.min.js"></script>"#));
        assert!(!html.contains("cdn.jsdelivr.net"));
    }
}
