//! Data-driven game balance
//!
//! Every dimension in the game scales from the arena size, so tuning is a
//! set of fractions rather than absolute pixel values. Hosts can deserialize
//! an override or just take the defaults.

use serde::{Deserialize, Serialize};

/// Arena-relative balance knobs.
///
/// Fractions of arena width (`*_w`) or height (`*_h`) unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ball radius as a fraction of arena height
    pub ball_radius_h: f32,
    /// Serve impulse magnitude as a fraction of arena height
    pub ball_speed_h: f32,
    /// Degrees added to the serve angle on each ball reset
    pub serve_angle_step: f32,

    /// Paddle width as a fraction of arena width
    pub paddle_width_w: f32,
    /// Paddle height as a fraction of arena height
    pub paddle_height_h: f32,
    /// Paddle travel speed as a fraction of arena height (per second)
    pub paddle_speed_h: f32,
    /// Paddle track inset from the goal line as a fraction of arena width
    pub paddle_inset_w: f32,
    /// Gap below the ceiling the paddle may not enter, fraction of height
    pub paddle_ceiling_margin_h: f32,
    /// Gap above the floor the paddle may not enter, fraction of height
    pub paddle_floor_margin_h: f32,

    /// Wall band thickness as a fraction of arena height
    pub wall_thickness_h: f32,
    /// Wall center inset from the top/bottom edge, fraction of height
    pub wall_margin_h: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ball_radius_h: 0.01,
            ball_speed_h: 0.005,
            serve_angle_step: 1.0,

            paddle_width_w: 0.025,
            paddle_height_h: 0.2,
            paddle_speed_h: 0.05,
            paddle_inset_w: 0.05,
            paddle_ceiling_margin_h: 0.03,
            paddle_floor_margin_h: 0.03,

            wall_thickness_h: 0.025,
            wall_margin_h: 0.015,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_json() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(tuning, back);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"serve_angle_step": 5.0}"#).unwrap();
        assert_eq!(tuning.serve_angle_step, 5.0);
        assert_eq!(tuning.ball_radius_h, Tuning::default().ball_radius_h);
    }
}
