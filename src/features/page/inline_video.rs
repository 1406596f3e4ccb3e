//! Muted section loops that play only while well in view

use super::nav_spy::Section;
use super::viewport::{Span, intersection_ratio, intersects};
use crate::features::carousel::{MediaAction, MediaCue, MediaSlot};

/// Visible share a loop must exceed to play
pub const PLAY_THRESHOLD: f32 = 0.45;

/// What a section's video element should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineAction {
    /// Start playing; `reload` when the source was never loaded
    Play { reload: bool },
    Pause,
}

#[derive(Debug, Clone)]
struct InlineVideo {
    section: String,
    media: String,
    slot: MediaSlot,
    playing: bool,
}

#[derive(Debug, Clone, Default)]
pub struct InlineVideos {
    videos: Vec<InlineVideo>,
    enabled: bool,
}

impl InlineVideos {
    /// Track `(section id, media)` pairs; nothing plays under reduced motion
    pub fn new<'a>(
        videos: impl IntoIterator<Item = (&'a str, &'a str)>,
        reduced_motion: bool,
    ) -> Self {
        Self {
            videos: videos
                .into_iter()
                .filter(|(_, media)| !media.is_empty())
                .map(|(section, media)| InlineVideo {
                    section: section.to_string(),
                    media: media.to_string(),
                    slot: MediaSlot::new(),
                    playing: false,
                })
                .collect(),
            enabled: !reduced_motion,
        }
    }

    /// Re-evaluate every loop against the visible span
    ///
    /// Returns `(section id, action)` for each loop whose state changed.
    pub fn update(&mut self, sections: &[Section], visible: Span) -> Vec<(String, InlineAction)> {
        if !self.enabled {
            return Vec::new();
        }

        let mut actions = Vec::new();
        for video in &mut self.videos {
            let Some(section) = sections.iter().find(|s| s.id == video.section) else {
                continue;
            };
            let play = intersects(section.span, visible)
                && intersection_ratio(section.span, visible) > PLAY_THRESHOLD;
            if play == video.playing {
                continue;
            }

            video.playing = play;
            let action = if play {
                let cue = MediaCue {
                    media: Some(video.media.clone()),
                    poster: None,
                };
                InlineAction::Play {
                    reload: video.slot.cue(&cue) == MediaAction::Load,
                }
            } else {
                InlineAction::Pause
            };
            actions.push((video.section.clone(), action));
        }
        actions
    }

    pub fn is_playing(&self, section: &str) -> bool {
        self.find(section).is_some_and(|video| video.playing)
    }

    pub fn media(&self, section: &str) -> Option<&str> {
        self.find(section).map(|video| video.media.as_str())
    }

    fn find(&self, section: &str) -> Option<&InlineVideo> {
        self.videos.iter().find(|video| video.section == section)
    }
}
