//! Latched input state
//!
//! The host owns the real key codes; the core only sees logical actions.
//! Movement is level-triggered: the latch holds the current on/off state of
//! each key and the tick reads it once. There is no event queue, because a
//! held key generates no repeats, only press/release boundaries.

use serde::{Deserialize, Serialize};

/// Logical actions the host can map keys onto. Anything else the host
/// receives is its own business and never reaches the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    MoveUp,
    MoveDown,
    /// Edge-triggered: fires on key-down only
    ResetBall,
}

/// A press/release boundary forwarded by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Action),
    KeyUp(Action),
}

/// Current on/off level of the movement keys.
///
/// Both paddles read this one latch, so a single key set drives both
/// players. That shared control is the documented contract; giving each
/// player their own bindings would mean a second latch, not a change here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLatch {
    pub up_pressed: bool,
    pub down_pressed: bool,
}

impl InputLatch {
    pub fn press(&mut self, action: Action) {
        match action {
            Action::MoveUp => self.up_pressed = true,
            Action::MoveDown => self.down_pressed = true,
            Action::ResetBall => {}
        }
    }

    pub fn release(&mut self, action: Action) {
        match action {
            Action::MoveUp => self.up_pressed = false,
            Action::MoveDown => self.down_pressed = false,
            Action::ResetBall => {}
        }
    }
}
