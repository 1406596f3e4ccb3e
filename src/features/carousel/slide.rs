//! Slide records and the fixed slide sequence a carousel cycles through

use serde::{Deserialize, Serialize};

/// One displayable carousel item
///
/// Every field is optional; an empty string is treated the same as a
/// missing value so manifests can leave fields blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Slide {
    /// Short label shown above the title (e.g. "Festival")
    pub tag: Option<String>,
    /// Headline text
    pub title: Option<String>,
    /// Secondary line, showreel only
    pub subtitle: Option<String>,
    /// Video source path
    pub media: Option<String>,
    /// Poster image path shown while media loads or when playback is refused
    pub poster: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Slide {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }

    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }

    pub fn tag(&self) -> Option<&str> {
        non_empty(&self.tag)
    }

    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    pub fn subtitle(&self) -> Option<&str> {
        non_empty(&self.subtitle)
    }

    pub fn media(&self) -> Option<&str> {
        non_empty(&self.media)
    }

    pub fn poster(&self) -> Option<&str> {
        non_empty(&self.poster)
    }
}

/// Ordered, non-empty slide sequence
///
/// Fixed at construction; the controller never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSet {
    slides: Vec<Slide>,
}

impl SlideSet {
    /// Returns `None` for an empty sequence, since a carousel with nothing
    /// to show has no valid current index.
    pub fn new(slides: Vec<Slide>) -> Option<Self> {
        if slides.is_empty() {
            None
        } else {
            Some(Self { slides })
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }

    /// Wrap any signed index into `[0, len)`
    ///
    /// Negative values count back from the end, overflow wraps to the front.
    pub fn wrap(&self, target: isize) -> usize {
        let len = self.slides.len() as isize;
        target.rem_euclid(len) as usize
    }
}

impl std::ops::Index<usize> for SlideSet {
    type Output = Slide;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slides[index]
    }
}
