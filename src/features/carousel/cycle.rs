//! Autoplay cycle: a one-shot deadline paired with a linear progress fill
//!
//! The deadline and the progress always move together. Arming starts both
//! from zero, cancelling drops the deadline and freezes the fill where it
//! stood. Nothing here resumes a partial cycle.

use std::time::{Duration, Instant};

/// Progress fill state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CycleProgress {
    /// Empty bar, nothing animating
    Idle,
    /// Filling linearly since `started`
    Running { started: Instant },
    /// Stopped mid-fill at the given fraction
    Frozen(f32),
}

#[derive(Debug, Clone)]
pub struct Cycle {
    duration: Duration,
    progress: CycleProgress,
    deadline: Option<Instant>,
}

impl Cycle {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            progress: CycleProgress::Idle,
            deadline: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Start a fresh cycle at `now`, replacing any pending deadline
    pub fn arm(&mut self, now: Instant) {
        self.progress = CycleProgress::Running { started: now };
        self.deadline = Some(now + self.duration);
    }

    /// Drop the deadline and empty the bar
    pub fn reset(&mut self) {
        self.progress = CycleProgress::Idle;
        self.deadline = None;
    }

    /// Drop the deadline and freeze the bar at its current fill
    ///
    /// Safe to call repeatedly; a cycle that is not running stays as it is.
    pub fn cancel(&mut self, now: Instant) -> f32 {
        self.deadline = None;
        if let CycleProgress::Running { .. } = self.progress {
            self.progress = CycleProgress::Frozen(self.fraction(now));
        }
        self.fraction(now)
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn progress(&self) -> CycleProgress {
        self.progress
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Fill fraction in `[0, 1]` at `now`
    pub fn fraction(&self, now: Instant) -> f32 {
        match self.progress {
            CycleProgress::Idle => 0.0,
            CycleProgress::Frozen(fraction) => fraction,
            CycleProgress::Running { started } => linear_fill(started, self.duration, now),
        }
    }
}

/// Share of `duration` elapsed since `started`, clamped to `[0, 1]`
///
/// A zero duration reads as already full.
pub fn linear_fill(started: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(started);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}
