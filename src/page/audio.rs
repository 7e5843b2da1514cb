//! Ambient audio control

/// Shown by user agents without `<audio>` support
pub const FALLBACK_TEXT: &str = "Seu navegador não suporta o elemento de áudio.";

/// Looping, autoplaying `<audio>` with native controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioElement {
    src: String,
}

impl AudioElement {
    /// MIME type declared on the `<source>`
    pub const MIME_TYPE: &'static str = "audio/mp3";

    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    /// Render the element markup.
    ///
    /// `src` lands inside a double-quoted attribute, so `&` in query strings
    /// is escaped.
    pub fn render(&self) -> String {
        format!(
            r#"<audio autoplay loop controls style="width: 100%;">
    <source src="{src}" type="{mime}">
    {fallback}
</audio>"#,
            src = super::escape_attribute(&self.src),
            mime = Self::MIME_TYPE,
            fallback = FALLBACK_TEXT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_AUDIO_URL;

    #[test]
    fn test_playback_attributes() {
        let html = AudioElement::new(DEFAULT_AUDIO_URL).render();
        assert!(html.starts_with("<audio autoplay loop controls"));
        assert!(html.contains(r#"style="width: 100%;""#));
        assert_eq!(html.matches("<source").count(), 1);
        assert!(html.ends_with("</audio>"));
    }

    #[test]
    fn test_source() {
        let html = AudioElement::new(DEFAULT_AUDIO_URL).render();
        assert!(html.contains(&format!(r#"src="{}""#, DEFAULT_AUDIO_URL)));
        assert!(html.contains(r#"type="audio/mp3""#));
    }

    #[test]
    fn test_fallback_text() {
        let html = AudioElement::new(DEFAULT_AUDIO_URL).render();
        assert!(html.contains(FALLBACK_TEXT));
    }

    #[test]
    fn test_src_escaped() {
        let audio = AudioElement::new("/vendor/fire.mp3?a=1&b=2");
        assert_eq!(audio.src(), "/vendor/fire.mp3?a=1&b=2");
        assert!(audio.render().contains(r#"src="/vendor/fire.mp3?a=1&amp;b=2""#));
    }
}
