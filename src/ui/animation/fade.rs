//! HUD fade-in using iced_anim
//!
//! New HUD text starts dimmed and slightly lowered, then eases to full
//! opacity and its resting position.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

use crate::features::carousel::HUD_TRANSITION;

/// Opacity the HUD starts from on a fresh slide
const FADE_FROM: f32 = 0.2;

fn fade_easing(duration: Duration) -> Easing {
    Easing::EASE_OUT.with_duration(duration)
}

#[derive(Debug)]
pub struct HudFade {
    animation: Animated<f32>,
    /// Vertical travel of the text while fading in
    rise: f32,
}

impl HudFade {
    pub fn new(rise: f32) -> Self {
        Self {
            animation: Animated::transition(1.0, fade_easing(HUD_TRANSITION)),
            rise,
        }
    }

    /// Play the fade from the start over `duration`
    pub fn restart(&mut self, duration: Duration) {
        self.animation = Animated::transition(FADE_FROM, fade_easing(duration));
        self.animation.update(1.0.into());
    }

    /// Jump to fully visible
    pub fn finish(&mut self) {
        self.animation = Animated::transition(1.0, fade_easing(HUD_TRANSITION));
    }

    pub fn opacity(&self) -> f32 {
        self.animation.value().clamp(0.0, 1.0)
    }

    /// Remaining downward offset in logical pixels
    pub fn offset(&self) -> f32 {
        let progress = (self.opacity() - FADE_FROM) / (1.0 - FADE_FROM);
        self.rise * (1.0 - progress.clamp(0.0, 1.0))
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Tick the animation forward in time
    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_fully_visible() {
        let fade = HudFade::new(8.0);
        assert_eq!(fade.opacity(), 1.0);
        assert_eq!(fade.offset(), 0.0);
    }

    #[test]
    fn test_restart_dims_text() {
        let mut fade = HudFade::new(8.0);
        fade.restart(Duration::from_millis(420));
        assert!(fade.is_animating() || fade.opacity() > FADE_FROM);
        assert!(fade.opacity() >= FADE_FROM);
    }

    #[test]
    fn test_finish_snaps_to_visible() {
        let mut fade = HudFade::new(10.0);
        fade.restart(Duration::from_millis(420));
        fade.finish();
        assert_eq!(fade.opacity(), 1.0);
        assert_eq!(fade.offset(), 0.0);
        assert!(!fade.is_animating());
    }
}
