//! Horizontal swipe detection from pointer press/release positions

/// Direction of a recognised swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Pointer travelled towards smaller x; advances the carousel
    Left,
    /// Pointer travelled towards larger x; goes back
    Right,
}

#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    pub fn press(&mut self, x: f32) {
        self.start = Some(x);
    }

    /// Finish the gesture. Displacements under the threshold are taps.
    pub fn release(&mut self, x: f32) -> Option<Swipe> {
        let start = self.start.take()?;
        let diff = x - start;
        if diff.abs() < self.threshold {
            return None;
        }
        if diff < 0.0 {
            Some(Swipe::Left)
        } else {
            Some(Swipe::Right)
        }
    }
}
