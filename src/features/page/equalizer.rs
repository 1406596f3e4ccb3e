//! Decorative equalizer bars with randomised speed and phase

use std::time::Duration;

use rand::Rng;

const MIN_SPEED_MS: u64 = 620;
const SPEED_SPREAD_MS: u64 = 820;
const MAX_DELAY_MS: u64 = 420;
/// Resting height so bars never collapse entirely
const FLOOR: f32 = 0.15;

/// Timing of a single bar's bounce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarTiming {
    /// Period of one full bounce
    pub speed: Duration,
    /// Start offset
    pub delay: Duration,
}

impl BarTiming {
    pub fn randomize<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let speed = MIN_SPEED_MS + rng.random_range(0..=SPEED_SPREAD_MS);
        let delay = rng.random_range(0..=MAX_DELAY_MS);
        Self {
            speed: Duration::from_millis(speed),
            delay: Duration::from_millis(delay),
        }
    }

    /// Bar height in `[FLOOR, 1]` after `elapsed`
    pub fn level(&self, elapsed: Duration) -> f32 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return FLOOR;
        };
        let phase = running.as_secs_f32() / self.speed.as_secs_f32();
        let wave = 0.5 - 0.5 * (phase * std::f32::consts::TAU).cos();
        FLOOR + (1.0 - FLOOR) * wave
    }
}

#[derive(Debug, Clone, Default)]
pub struct Equalizer {
    bars: Vec<BarTiming>,
}

impl Equalizer {
    pub fn new<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        Self {
            bars: (0..count).map(|_| BarTiming::randomize(rng)).collect(),
        }
    }

    pub fn bars(&self) -> &[BarTiming] {
        &self.bars
    }

    /// Heights of every bar after `elapsed`
    pub fn levels(&self, elapsed: Duration) -> Vec<f32> {
        self.bars.iter().map(|bar| bar.level(elapsed)).collect()
    }
}
