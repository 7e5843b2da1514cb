//! Host page: the document served at `/`

use crate::config::{AssetConfig, PageConfig};
use crate::error::RenderError;
use crate::scene::{SceneConfig, BACKGROUND_COLOR};

use super::audio::AudioElement;
use super::frame::render_scene_frame;

pub const HEADING: &str = "🔥 Fagulhas Ultra Realistas com Canvas + tsParticles";

pub const DESCRIPTION: &str =
    "Som ambiente com fagulhas subindo, com brilho, movimento aleatório e cauda longa.";

/// Render the full page
pub fn render_page(
    scene: &SceneConfig,
    assets: &AssetConfig,
    page: &PageConfig,
) -> Result<String, RenderError> {
    let frame = render_scene_frame(scene, &assets.library_url)?;
    let audio = AudioElement::new(assets.audio_url.as_str());

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Fagulhas</title>
    <style>
        html, body {{
            margin: 0;
            min-height: 100vh;
            background: {background};
            color: #f5f0e6;
            font-family: sans-serif;
        }}
        .scene-frame {{
            display: block;
            width: 100%;
            border: none;
        }}
        .content {{
            padding: 1rem 2rem;
        }}
    </style>
</head>
<body>
    <iframe class="scene-frame" title="Fagulhas" width="100%" height="{frame_height}" scrolling="no" srcdoc="{frame}"></iframe>
    <main class="content">
        <h1>{heading}</h1>
        <p>{description}</p>
        {audio}
    </main>
</body>
</html>"#,
        background = BACKGROUND_COLOR,
        frame_height = page.frame_height,
        frame = escape_attribute(&frame),
        heading = HEADING,
        description = DESCRIPTION,
        audio = audio.render(),
    );

    Ok(html)
}

/// Escape text for a double- or single-quoted HTML attribute
pub fn escape_attribute(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
