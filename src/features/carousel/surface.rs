//! Rendering collaborator driven by the carousel controller

use std::time::{Duration, Instant};

use super::cycle::linear_fill;
use super::hud::Hud;

/// How the HUD should change to its new text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Swap immediately (reduced motion, silent auto advance)
    Instant,
    /// Fade/slide in over the given duration
    Eased(Duration),
}

/// Instruction for the progress indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressCue {
    /// Show an empty bar
    Reset,
    /// Fill from empty to full, linearly, starting at `started`
    Run { started: Instant, duration: Duration },
    /// Hold the bar at this fraction
    Freeze(f32),
}

impl ProgressCue {
    /// Fill fraction this cue displays at `now`
    pub fn fraction(&self, now: Instant) -> f32 {
        match *self {
            ProgressCue::Reset => 0.0,
            ProgressCue::Freeze(fraction) => fraction,
            ProgressCue::Run { started, duration } => linear_fill(started, duration, now),
        }
    }
}

/// Media to present for the active slide
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaCue {
    pub media: Option<String>,
    pub poster: Option<String>,
}

/// Playback start failures reported by a surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The platform refused to start playback (autoplay policy, focus, ...)
    Rejected(String),
    /// The surface cannot play this source at all
    Unsupported(String),
}

impl std::fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackError::Rejected(e) => write!(f, "Playback rejected: {}", e),
            PlaybackError::Unsupported(src) => write!(f, "Unsupported media: {}", src),
        }
    }
}

impl std::error::Error for PlaybackError {}

/// Output side of a carousel
///
/// The controller calls these in a fixed order on every activation:
/// deactivate outgoing, activate incoming, HUD, media, progress.
pub trait Surface {
    /// Toggle the "active" marker of one slide
    fn set_active(&mut self, index: usize, active: bool);

    /// Replace the HUD text and play trigger
    fn show_hud(&mut self, hud: &Hud, transition: Transition);

    /// Drive the progress indicator
    fn set_progress(&mut self, cue: ProgressCue);

    /// Present the slide's media. Errors are ignored by the controller and
    /// the poster stays visible.
    fn load_media(&mut self, cue: &MediaCue) -> Result<(), PlaybackError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::carousel::Cycle;

    #[test]
    fn test_running_cue_tracks_cycle() {
        let t0 = Instant::now();
        let duration = Duration::from_millis(4000);
        let mut cycle = Cycle::new(duration);
        cycle.arm(t0);
        let cue = ProgressCue::Run {
            started: t0,
            duration,
        };

        for millis in [0, 1000, 3999, 9000] {
            let now = t0 + Duration::from_millis(millis);
            assert_eq!(cue.fraction(now), cycle.fraction(now));
        }
        assert_eq!(ProgressCue::Reset.fraction(t0), 0.0);
        assert_eq!(ProgressCue::Freeze(0.4).fraction(t0), 0.4);
    }
}
