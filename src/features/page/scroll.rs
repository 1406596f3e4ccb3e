//! Scroll progress ratio for the top progress bar

/// Fraction of the scrollable distance covered, in `[0, 1]`
///
/// Returns 0 when the content fits in the viewport.
pub fn progress(offset: f32, content_height: f32, viewport_height: f32) -> f32 {
    let max = content_height - viewport_height;
    if max > 0.0 {
        (offset / max).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_range() {
        assert_eq!(progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(progress(2000.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_overscroll_is_clamped() {
        assert_eq!(progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress(2400.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_short_content() {
        assert_eq!(progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(progress(10.0, 1000.0, 1000.0), 0.0);
    }
}
