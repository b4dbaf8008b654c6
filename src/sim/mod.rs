//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The host feeds [`InputEvent`]s into [`GameState::handle`] as they arrive
//! and calls [`tick`] once per frame; entity positions are read back from
//! the state for drawing.

pub mod arena;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use collision::{Aabb, Body, reflect_off_paddle, reflect_off_wall, resolve_ball_contacts};
pub use input::{Action, InputEvent, InputLatch};
pub use state::{Ball, GameState, Paddle, PaddleSide, Wall, WallSide};
pub use tick::{TickEvents, tick};
