//! Pointer-driven parallax for the active hero image

use crate::features::carousel::Environment;

const RANGE_X: f32 = 22.0;
const RANGE_Y: f32 = 16.0;
const SCALE: f32 = 1.06;

/// Image transform derived from the pointer position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub dx: f32,
    pub dy: f32,
    pub scale: f32,
}

impl Parallax {
    /// Untransformed image (pointer left the stage)
    pub const NONE: Parallax = Parallax {
        dx: 0.0,
        dy: 0.0,
        scale: 1.0,
    };
}

/// Parallax only runs with a fine pointer and full motion
pub fn enabled(environment: Environment) -> bool {
    !environment.coarse_pointer && !environment.reduced_motion
}

/// Offset for a pointer at `(x, y)` over a stage of `width` x `height`,
/// with the pointer given relative to the stage's top-left corner
pub fn offset(x: f32, y: f32, width: f32, height: f32) -> Parallax {
    if width <= 0.0 || height <= 0.0 {
        return Parallax::NONE;
    }
    Parallax {
        dx: (x / width - 0.5) * RANGE_X,
        dy: (y / height - 0.5) * RANGE_Y,
        scale: SCALE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centre_has_no_offset() {
        let p = offset(500.0, 300.0, 1000.0, 600.0);
        assert_eq!(p.dx, 0.0);
        assert_eq!(p.dy, 0.0);
        assert_eq!(p.scale, 1.06);
    }

    #[test]
    fn test_corners_reach_range() {
        let p = offset(0.0, 0.0, 1000.0, 600.0);
        assert_eq!((p.dx, p.dy), (-11.0, -8.0));
        let p = offset(1000.0, 600.0, 1000.0, 600.0);
        assert_eq!((p.dx, p.dy), (11.0, 8.0));
    }

    #[test]
    fn test_disabled_for_coarse_pointer_or_reduced_motion() {
        assert!(enabled(Environment::default()));
        assert!(!enabled(Environment {
            coarse_pointer: true,
            reduced_motion: false,
        }));
        assert!(!enabled(Environment {
            coarse_pointer: false,
            reduced_motion: true,
        }));
        assert_eq!(offset(10.0, 10.0, 0.0, 100.0), Parallax::NONE);
    }
}
