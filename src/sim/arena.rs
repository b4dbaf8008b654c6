//! The play field

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Fixed-size 2D play field. All entity positions are expressed in arena
/// coordinates with the origin at the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    /// Create a play field.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is non-positive or non-finite. Every
    /// dimension in the game is derived from these two values, so degenerate
    /// geometry must be rejected up front.
    pub fn new(width: f32, height: f32) -> Self {
        assert!(
            width.is_finite() && width > 0.0,
            "arena width must be positive, got {width}"
        );
        assert!(
            height.is_finite() && height > 0.0,
            "arena height must be positive, got {height}"
        );
        Self { width, height }
    }

    /// Center of the play field
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let arena = Arena::new(800.0, 600.0);
        assert_eq!(arena.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    #[should_panic(expected = "arena width must be positive")]
    fn test_zero_width_rejected() {
        Arena::new(0.0, 600.0);
    }

    #[test]
    #[should_panic(expected = "arena height must be positive")]
    fn test_negative_height_rejected() {
        Arena::new(800.0, -1.0);
    }
}
