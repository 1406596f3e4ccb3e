//! One-shot section reveals
//!
//! A section fades up the first time enough of it scrolls into view and
//! then stays shown. Sections already near the top of the first screen are
//! shown straight away, and reduced motion shows everything immediately.

use std::time::{Duration, Instant};

use super::nav_spy::Section;
use super::viewport::{Span, intersection_ratio, intersects};

/// Visible share that triggers a reveal
pub const REVEAL_THRESHOLD: f32 = 0.18;
/// Share of the viewport trimmed from the bottom before measuring
const BOTTOM_MARGIN: f32 = 0.08;
/// Sections starting above this share of the first screen skip the fade
const INITIAL_LINE: f32 = 0.94;
pub const REVEAL_DURATION: Duration = Duration::from_millis(820);
/// Distance a section rises while fading in
pub const REVEAL_RISE: f32 = 22.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Shown {
    Hidden,
    /// Shown without a fade
    Settled,
    Fading(Instant),
}

/// Opacity and downward offset of a section at some instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub offset: f32,
}

impl RevealStyle {
    const HIDDEN: Self = Self {
        opacity: 0.0,
        offset: REVEAL_RISE,
    };
    const SHOWN: Self = Self {
        opacity: 1.0,
        offset: 0.0,
    };
}

fn ease_out_expo(t: f32) -> f32 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2f32.powf(-10.0 * t)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Reveals {
    ids: Vec<String>,
    shown: Vec<Shown>,
}

impl Reveals {
    /// Track `sections`, settling those visible on the first screen
    pub fn new(sections: &[Section], reduced_motion: bool, viewport_height: f32) -> Self {
        let shown = sections
            .iter()
            .map(|section| {
                if reduced_motion || section.span.top < viewport_height * INITIAL_LINE {
                    Shown::Settled
                } else {
                    Shown::Hidden
                }
            })
            .collect();
        Self {
            ids: sections.iter().map(|section| section.id.clone()).collect(),
            shown,
        }
    }

    /// Reveal sections that crossed the threshold; returns their ids
    pub fn update(
        &mut self,
        sections: &[Section],
        scroll: f32,
        viewport_height: f32,
        now: Instant,
    ) -> Vec<String> {
        let band = Span::new(scroll, viewport_height * (1.0 - BOTTOM_MARGIN));
        let mut revealed = Vec::new();

        for section in sections {
            let Some(index) = self.index_of(&section.id) else {
                continue;
            };
            if self.shown[index] != Shown::Hidden {
                continue;
            }
            if intersects(section.span, band)
                && intersection_ratio(section.span, band) >= REVEAL_THRESHOLD
            {
                self.shown[index] = Shown::Fading(now);
                revealed.push(section.id.clone());
            }
        }
        revealed
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.index_of(id)
            .is_some_and(|index| self.shown[index] != Shown::Hidden)
    }

    /// Style for `id` at `now`; unknown sections render as shown
    pub fn style(&self, id: &str, now: Instant) -> RevealStyle {
        let Some(index) = self.index_of(id) else {
            return RevealStyle::SHOWN;
        };
        match self.shown[index] {
            Shown::Hidden => RevealStyle::HIDDEN,
            Shown::Settled => RevealStyle::SHOWN,
            Shown::Fading(started) => {
                let t = now.saturating_duration_since(started).as_secs_f32()
                    / REVEAL_DURATION.as_secs_f32();
                let eased = ease_out_expo(t.clamp(0.0, 1.0));
                RevealStyle {
                    opacity: eased,
                    offset: REVEAL_RISE * (1.0 - eased),
                }
            }
        }
    }

    /// Whether any fade is still running at `now`
    pub fn is_animating(&self, now: Instant) -> bool {
        self.shown.iter().any(|shown| match shown {
            Shown::Fading(started) => now.saturating_duration_since(*started) < REVEAL_DURATION,
            _ => false,
        })
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|known| known == id)
    }
}
