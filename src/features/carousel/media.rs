//! Featured media slot: swaps sources only when the path actually changes

use super::surface::MediaCue;

/// What the video element should do after a cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaAction {
    /// No media on the cue; leave the element alone
    Keep,
    /// Same source already loaded; restart playback only
    Replay,
    /// New source; reload then play
    Load,
}

#[derive(Debug, Clone, Default)]
pub struct MediaSlot {
    source: Option<String>,
    poster: Option<String>,
}

impl MediaSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a cue. The poster is adopted whenever the cue carries media.
    pub fn cue(&mut self, cue: &MediaCue) -> MediaAction {
        let Some(media) = cue.media.as_deref().filter(|m| !m.is_empty()) else {
            return MediaAction::Keep;
        };

        if let Some(poster) = cue.poster.as_deref().filter(|p| !p.is_empty()) {
            self.poster = Some(poster.to_string());
        }

        if self.source.as_deref() == Some(media) {
            return MediaAction::Replay;
        }

        self.source = Some(media.to_string());
        MediaAction::Load
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn poster(&self) -> Option<&str> {
        self.poster.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cue(media: &str, poster: &str) -> MediaCue {
        MediaCue {
            media: Some(media.to_string()),
            poster: Some(poster.to_string()),
        }
    }

    #[test]
    fn test_new_source_loads_same_source_replays() {
        let mut slot = MediaSlot::new();
        assert_eq!(slot.cue(&cue("a.mp4", "a.jpg")), MediaAction::Load);
        assert_eq!(slot.cue(&cue("a.mp4", "a.jpg")), MediaAction::Replay);
        assert_eq!(slot.cue(&cue("b.mp4", "b.jpg")), MediaAction::Load);
        assert_eq!(slot.source(), Some("b.mp4"));
        assert_eq!(slot.poster(), Some("b.jpg"));
    }

    #[test]
    fn test_missing_media_keeps_current_source() {
        let mut slot = MediaSlot::new();
        slot.cue(&cue("a.mp4", "a.jpg"));
        let empty = MediaCue {
            media: Some(String::new()),
            poster: Some("ignored.jpg".to_string()),
        };
        assert_eq!(slot.cue(&empty), MediaAction::Keep);
        assert_eq!(slot.cue(&MediaCue::default()), MediaAction::Keep);
        assert_eq!(slot.source(), Some("a.mp4"));
        assert_eq!(slot.poster(), Some("a.jpg"));
    }

    #[test]
    fn test_blank_poster_keeps_previous_poster() {
        let mut slot = MediaSlot::new();
        slot.cue(&cue("a.mp4", "a.jpg"));
        slot.cue(&cue("b.mp4", ""));
        assert_eq!(slot.poster(), Some("a.jpg"));
    }
}
