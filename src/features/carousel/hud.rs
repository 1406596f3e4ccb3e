//! HUD text resolution with placeholder fallbacks

use super::slide::Slide;

/// Fallback used when a slide has no tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagFallback {
    /// Same text for every slide
    Fixed(String),
    /// Prefix followed by the one-based, zero-padded slide number ("Clip 03")
    Numbered(String),
}

impl TagFallback {
    fn resolve(&self, index: usize) -> String {
        match self {
            TagFallback::Fixed(text) => text.clone(),
            TagFallback::Numbered(prefix) => format!("{} {:02}", prefix, index + 1),
        }
    }
}

/// Placeholder strings for missing slide metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub tag: TagFallback,
    pub title: String,
    pub subtitle: String,
}

impl Placeholders {
    /// Hero slider defaults
    pub fn hero() -> Self {
        Self {
            tag: TagFallback::Fixed("Highlight".to_string()),
            title: "Live Moment".to_string(),
            subtitle: String::new(),
        }
    }

    /// Showreel composer defaults
    pub fn showreel() -> Self {
        Self {
            tag: TagFallback::Numbered("Clip".to_string()),
            title: "Showreel Highlight".to_string(),
            subtitle: String::new(),
        }
    }
}

/// Data carried by the play trigger next to the HUD
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayTrigger {
    pub media: String,
    pub poster: String,
    pub title: String,
}

/// Text overlay for the active slide
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hud {
    pub tag: String,
    pub title: String,
    pub subtitle: String,
    pub trigger: PlayTrigger,
}

impl Hud {
    /// Resolve the HUD for `slide` at `index`, filling gaps from `placeholders`
    pub fn resolve(slide: &Slide, index: usize, placeholders: &Placeholders, brand: &str) -> Self {
        let tag = slide
            .tag()
            .map(str::to_string)
            .unwrap_or_else(|| placeholders.tag.resolve(index));
        let title = slide
            .title()
            .map(str::to_string)
            .unwrap_or_else(|| placeholders.title.clone());
        let subtitle = slide
            .subtitle()
            .map(str::to_string)
            .unwrap_or_else(|| placeholders.subtitle.clone());

        let trigger = PlayTrigger {
            media: slide.media().unwrap_or_default().to_string(),
            poster: slide.poster().unwrap_or_default().to_string(),
            title: format!("{} | {}", brand, tag),
        };

        Self {
            tag,
            title,
            subtitle,
            trigger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_placeholders() {
        let hud = Hud::resolve(&Slide::new(), 2, &Placeholders::hero(), "KASSABI");
        assert_eq!(hud.tag, "Highlight");
        assert_eq!(hud.title, "Live Moment");
        assert_eq!(hud.subtitle, "");
        assert_eq!(hud.trigger.title, "KASSABI | Highlight");
        assert_eq!(hud.trigger.media, "");
    }

    #[test]
    fn test_showreel_numbered_tag() {
        let placeholders = Placeholders::showreel();
        let hud = Hud::resolve(&Slide::new(), 0, &placeholders, "KASSABI");
        assert_eq!(hud.tag, "Clip 01");
        let hud = Hud::resolve(&Slide::new(), 11, &placeholders, "KASSABI");
        assert_eq!(hud.tag, "Clip 12");
        assert_eq!(hud.title, "Showreel Highlight");
    }

    #[test]
    fn test_slide_metadata_wins() {
        let slide = Slide::new()
            .with_tag("Backstage")
            .with_title("Soundcheck")
            .with_subtitle("Berlin, 2am")
            .with_media("media/soundcheck.mp4")
            .with_poster("media/soundcheck.jpg");
        let hud = Hud::resolve(&slide, 0, &Placeholders::showreel(), "KASSABI");
        assert_eq!(hud.tag, "Backstage");
        assert_eq!(hud.subtitle, "Berlin, 2am");
        assert_eq!(hud.trigger.media, "media/soundcheck.mp4");
        assert_eq!(hud.trigger.poster, "media/soundcheck.jpg");
        assert_eq!(hud.trigger.title, "KASSABI | Backstage");
    }
}
