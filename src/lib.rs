//! Pang - a two-player paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, windowing, and input-device binding are the host's job: it
//! forwards logical input events into the core and calls [`sim::tick`]
//! once per frame, then reads entity positions back out for drawing.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Default arena dimensions for hosts that don't supply their own
    pub const DEFAULT_ARENA_WIDTH: f32 = 800.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 600.0;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle % 360.0;
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}

/// Quadrant anchor for a wrapped angle in degrees.
///
/// Buckets the angle by rounding up to the nearest of {90, 180, 270, 360};
/// 0 and the fourth quadrant both land on 360. The serve heading is measured
/// against this anchor, so headings stair-step by quadrant rather than vary
/// continuously with the angle. That clustering is part of the game's feel;
/// don't smooth it out.
#[inline]
pub fn quadrant_anchor(angle: f32) -> f32 {
    if angle > 0.0 && angle <= 90.0 {
        90.0
    } else if angle > 90.0 && angle <= 180.0 {
        180.0
    } else if angle > 180.0 && angle <= 270.0 {
        270.0
    } else {
        360.0
    }
}

/// Impulse vector for a serve angle in degrees and a scalar speed.
///
/// The heading is the absolute offset from the quadrant anchor, so both
/// components are always non-negative.
#[inline]
pub fn heading_impulse(angle: f32, speed: f32) -> Vec2 {
    let wrapped = wrap_degrees(angle);
    let theta = (quadrant_anchor(wrapped) - wrapped).abs().to_radians();
    Vec2::new(theta.cos(), theta.sin()) * speed
}
