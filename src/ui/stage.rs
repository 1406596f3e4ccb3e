//! Render-side state for a carousel
//!
//! `StageSurface` is what the controller writes into and what the view reads
//! back: active markers, HUD text and fade, progress cue, media slot and the
//! slide wipe between the outgoing and incoming poster.

use iced::animation::Animation;
use iced::time::Instant;

use crate::features::carousel::{
    Hud, MediaAction, MediaCue, MediaSlot, PlaybackError, ProgressCue, Surface, Transition,
};
use crate::ui::animation::HudFade;

#[derive(Debug)]
pub struct StageSurface {
    active: Vec<bool>,
    current: usize,
    last: usize,
    /// +1 when the incoming slide enters from the right, -1 from the left
    direction: i32,
    wipe: Animation<bool>,
    hud: Hud,
    fade: HudFade,
    progress: ProgressCue,
    media: MediaSlot,
    last_media_action: MediaAction,
}

impl StageSurface {
    /// `rise` is how far the HUD text travels while fading in
    pub fn new(rise: f32) -> Self {
        Self {
            active: Vec::new(),
            current: 0,
            last: 0,
            direction: 1,
            wipe: Animation::new(true),
            hud: Hud::default(),
            fade: HudFade::new(rise),
            progress: ProgressCue::Reset,
            media: MediaSlot::new(),
            last_media_action: MediaAction::Keep,
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    pub fn active_index(&self) -> usize {
        self.current
    }

    pub fn last_index(&self) -> usize {
        self.last
    }

    pub fn direction(&self) -> i32 {
        self.direction
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn fade(&self) -> &HudFade {
        &self.fade
    }

    pub fn progress(&self, now: Instant) -> f32 {
        self.progress.fraction(now)
    }

    /// Wipe progress between the last and current slide, 1.0 when settled
    pub fn wipe(&self, now: Instant) -> f32 {
        self.wipe.interpolate(0.0_f32, 1.0_f32, now)
    }

    pub fn media(&self) -> &MediaSlot {
        &self.media
    }

    pub fn last_media_action(&self) -> MediaAction {
        self.last_media_action
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.fade.is_animating() || self.wipe.is_animating(now)
    }

    pub fn tick(&mut self, now: Instant) {
        self.fade.tick(now);
    }
}

/// Start a muted section loop
///
/// Like the carousel stages, sections keep their still frame on desktop.
pub fn play_inline(media: &str) -> Result<(), PlaybackError> {
    Err(PlaybackError::Unsupported(media.to_string()))
}

impl Surface for StageSurface {
    fn set_active(&mut self, index: usize, active: bool) {
        if self.active.len() <= index {
            self.active.resize(index + 1, false);
        }
        self.active[index] = active;

        if active && index != self.current {
            let len = self.active.len().max(1);
            self.direction = if index == (self.current + 1) % len { 1 } else { -1 };
            self.last = self.current;
            self.current = index;
        }
    }

    fn show_hud(&mut self, hud: &Hud, transition: Transition) {
        self.hud = hud.clone();
        match transition {
            Transition::Instant => {
                self.fade.finish();
                self.wipe = Animation::new(true);
            }
            Transition::Eased(duration) => {
                self.fade.restart(duration);
                self.wipe = Animation::new(false).slow();
                self.wipe.go_mut(true, Instant::now());
            }
        }
    }

    fn set_progress(&mut self, cue: ProgressCue) {
        self.progress = cue;
    }

    fn load_media(&mut self, cue: &MediaCue) -> Result<(), PlaybackError> {
        self.last_media_action = self.media.cue(cue);
        match (self.last_media_action, self.media.source()) {
            // Posters only: the desktop stage has no video decoder
            (MediaAction::Load | MediaAction::Replay, Some(source)) => {
                Err(PlaybackError::Unsupported(source.to_string()))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::carousel::{Carousel, CarouselConfig, Environment, Slide, SlideSet};
    use std::time::Duration;

    fn slides() -> SlideSet {
        SlideSet::new(vec![
            Slide::new().with_tag("One").with_media("one.mp4").with_poster("one.jpg"),
            Slide::new().with_title("Two"),
            Slide::new().with_tag("Three").with_media("three.mp4"),
        ])
        .unwrap()
    }

    #[test]
    fn test_controller_drives_stage() {
        let t0 = Instant::now();
        let mut hero = Carousel::new(
            slides(),
            CarouselConfig::hero(),
            Environment::default(),
            StageSurface::new(8.0),
            t0,
        );
        assert!(hero.surface().is_active(0));
        assert_eq!(hero.surface().hud().tag, "One");
        assert_eq!(hero.surface().media().source(), Some("one.mp4"));

        hero.go_previous(t0);
        let stage = hero.surface();
        assert_eq!(stage.active_index(), 2);
        assert_eq!(stage.last_index(), 0);
        assert_eq!(stage.direction(), -1);
        assert!(!stage.is_active(0));
        assert!(stage.is_active(2));
        assert_eq!(stage.last_media_action(), MediaAction::Load);

        hero.go_next(t0);
        assert_eq!(hero.surface().direction(), 1);
        assert_eq!(hero.surface().hud().tag, "One");
    }

    #[test]
    fn test_slide_without_media_keeps_previous_source() {
        let t0 = Instant::now();
        let mut reel = Carousel::new(
            slides(),
            CarouselConfig::showreel(),
            Environment::default(),
            StageSurface::new(10.0),
            t0,
        );
        reel.go_to(1, false, t0);
        assert_eq!(reel.surface().hud().tag, "Clip 02");
        assert_eq!(reel.surface().last_media_action(), MediaAction::Keep);
        assert_eq!(reel.surface().media().source(), Some("one.mp4"));
    }

    #[test]
    fn test_progress_follows_cycle() {
        let t0 = Instant::now();
        let hero = Carousel::new(
            slides(),
            CarouselConfig::hero().with_cycle(Duration::from_millis(1000)),
            Environment::default(),
            StageSurface::new(8.0),
            t0,
        );
        let half = hero.surface().progress(t0 + Duration::from_millis(500));
        assert!((half - 0.5).abs() < 1e-3);
    }
}
