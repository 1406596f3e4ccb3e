//! Video modal open/close state with delayed media teardown

use std::time::{Duration, Instant};

use crate::features::carousel::PlayTrigger;

/// Time the close animation gets before the media is released
pub const TEARDOWN_DELAY: Duration = Duration::from_millis(220);

#[derive(Debug, Clone, Default, PartialEq)]
enum ModalState {
    #[default]
    Closed,
    Open(PlayTrigger),
    /// Fading out; media still attached until `teardown_at`
    Closing {
        trigger: PlayTrigger,
        teardown_at: Instant,
    },
}

#[derive(Debug, Clone, Default)]
pub struct VideoModal {
    state: ModalState,
}

impl VideoModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open for `trigger`. Ignored while already open or when the trigger
    /// has nothing to play. Returns whether the modal opened.
    pub fn open(&mut self, trigger: &PlayTrigger) -> bool {
        if trigger.media.is_empty() || self.is_open() {
            return false;
        }
        // Reopening during the fade replaces the pending teardown
        self.state = ModalState::Open(trigger.clone());
        true
    }

    /// Start closing. Ignored unless open.
    pub fn close(&mut self, now: Instant) -> bool {
        let ModalState::Open(trigger) = std::mem::take(&mut self.state) else {
            return false;
        };
        self.state = ModalState::Closing {
            trigger,
            teardown_at: now + TEARDOWN_DELAY,
        };
        true
    }

    /// Release the media once the close delay has passed
    pub fn tick(&mut self, now: Instant) {
        if let ModalState::Closing { teardown_at, .. } = self.state
            && now >= teardown_at
        {
            self.state = ModalState::Closed;
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn is_closing(&self) -> bool {
        matches!(self.state, ModalState::Closing { .. })
    }

    /// Dialog opacity: 1 while open, falling to 0 over the close delay
    pub fn fade(&self, now: Instant) -> f32 {
        match &self.state {
            ModalState::Closed => 0.0,
            ModalState::Open(_) => 1.0,
            ModalState::Closing { teardown_at, .. } => {
                let left = teardown_at.saturating_duration_since(now);
                left.as_secs_f32() / TEARDOWN_DELAY.as_secs_f32()
            }
        }
    }

    /// Media still attached to the modal player, if any
    pub fn media(&self) -> Option<&PlayTrigger> {
        match &self.state {
            ModalState::Closed => None,
            ModalState::Open(trigger) | ModalState::Closing { trigger, .. } => Some(trigger),
        }
    }
}
