//! Vertical intersection geometry

/// A vertical span in content coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

impl Span {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Height of the overlap with `other`
    pub fn overlap(&self, other: &Span) -> f32 {
        (self.bottom().min(other.bottom()) - self.top.max(other.top)).max(0.0)
    }
}

/// Visible share of `section` inside `viewport`, in `[0, 1]`
pub fn intersection_ratio(section: Span, viewport: Span) -> f32 {
    if section.height <= 0.0 {
        return 0.0;
    }
    (section.overlap(&viewport) / section.height).clamp(0.0, 1.0)
}

/// Whether any part of `section` is inside `viewport`
pub fn intersects(section: Span, viewport: Span) -> bool {
    section.top < viewport.bottom() && section.bottom() > viewport.top
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_visible() {
        let ratio = intersection_ratio(Span::new(100.0, 200.0), Span::new(0.0, 900.0));
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn test_partially_visible() {
        let ratio = intersection_ratio(Span::new(800.0, 400.0), Span::new(0.0, 900.0));
        assert!((ratio - 0.25).abs() < 1e-6);
        assert!(intersects(Span::new(800.0, 400.0), Span::new(0.0, 900.0)));
    }

    #[test]
    fn test_outside_and_degenerate() {
        assert_eq!(
            intersection_ratio(Span::new(1000.0, 400.0), Span::new(0.0, 900.0)),
            0.0
        );
        assert!(!intersects(Span::new(900.0, 400.0), Span::new(0.0, 900.0)));
        assert_eq!(
            intersection_ratio(Span::new(100.0, 0.0), Span::new(0.0, 900.0)),
            0.0
        );
    }
}
