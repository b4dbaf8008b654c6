//! Per-frame simulation step
//!
//! The host calls [`tick`] once per rendered frame with its timestep. The
//! per-tick order is a fixed contract: latched input is applied to both
//! paddles first, then positions integrate, then contacts resolve.

use serde::{Deserialize, Serialize};

use super::collision::resolve_ball_contacts;
use super::state::GameState;

/// What happened during one tick, for the host's sound/flash hooks and for
/// tests. Cleared at the start of every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickEvents {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
}

/// Advance the simulation by one timestep.
///
/// Both paddles consume the same shared latch, so one key set drives both
/// players; see [`super::input::InputLatch`].
pub fn tick(state: &mut GameState, dt: f32) -> TickEvents {
    let mut events = TickEvents::default();

    // 1. Latched input decides this tick's paddle velocities
    let input = state.input;
    for paddle in &mut state.paddles {
        paddle.move_player(input.up_pressed, input.down_pressed);
    }

    // 2. Integrate: paddles clamp to their track bounds, the ball flies free
    for paddle in &mut state.paddles {
        paddle.integrate(dt);
    }
    state.ball.pos += state.ball.vel * dt;

    // 3. Resolve contacts left by the integration
    resolve_ball_contacts(&mut state.ball, &state.paddles, &state.walls, &mut events);

    state.time_ticks += 1;
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::arena::Arena;
    use crate::sim::input::{Action, InputEvent};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn scenario() -> GameState {
        GameState::new(Arena::new(800.0, 600.0), Tuning::default(), 7)
    }

    #[test]
    fn test_shared_latch_drives_both_paddles() {
        let mut state = scenario();
        state.handle(InputEvent::KeyDown(Action::MoveUp));

        tick(&mut state, SIM_DT);

        let expected = 300.0 + state.paddles[0].speed * SIM_DT;
        for paddle in &state.paddles {
            assert!((paddle.pos.y - expected).abs() < 1e-4);
            assert_eq!(paddle.pos.x, paddle.track_x);
        }
    }

    #[test]
    fn test_both_keys_hard_stop() {
        let mut state = scenario();
        state.handle(InputEvent::KeyDown(Action::MoveUp));
        tick(&mut state, SIM_DT);
        let y_after_move = state.paddles[0].pos.y;

        state.handle(InputEvent::KeyDown(Action::MoveDown));
        tick(&mut state, SIM_DT);

        assert_eq!(state.paddles[0].pos.y, y_after_move);
        assert_eq!(state.paddles[0].vel_y, 0.0);
    }

    #[test]
    fn test_paddle_stops_at_ceiling() {
        let mut state = scenario();
        state.handle(InputEvent::KeyDown(Action::MoveUp));

        // Plenty of time to reach the end of the track
        for _ in 0..2_000 {
            tick(&mut state, SIM_DT);
        }

        for paddle in &state.paddles {
            assert_eq!(paddle.pos.y, paddle.ceiling);
        }
    }

    #[test]
    fn test_paddle_stops_at_floor() {
        let mut state = scenario();
        state.handle(InputEvent::KeyDown(Action::MoveDown));

        for _ in 0..2_000 {
            tick(&mut state, SIM_DT);
        }

        for paddle in &state.paddles {
            assert_eq!(paddle.pos.y, paddle.floor);
        }
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut state = scenario();
        state.ball.pos = Vec2::new(400.0, 300.0);
        state.ball.vel = Vec2::new(120.0, -60.0);

        tick(&mut state, SIM_DT);

        assert!((state.ball.pos.x - (400.0 + 120.0 * SIM_DT)).abs() < 1e-4);
        assert!((state.ball.pos.y - (300.0 - 60.0 * SIM_DT)).abs() < 1e-4);
    }

    #[test]
    fn test_wall_bounce_through_tick() {
        let mut state = scenario();
        state.ball.pos = Vec2::new(400.0, 582.0);
        state.ball.vel = Vec2::new(0.0, 240.0);

        let events = tick(&mut state, SIM_DT);

        assert!(events.ball_hit_wall);
        assert!(state.ball.vel.y < 0.0);
        assert!(state.ball.pos.y <= 583.5 - state.ball.radius);
    }

    #[test]
    fn test_events_clear_every_tick() {
        let mut state = scenario();
        state.ball.pos = Vec2::new(400.0, 582.0);
        state.ball.vel = Vec2::new(0.0, 240.0);

        let first = tick(&mut state, SIM_DT);
        assert!(first.ball_hit_wall);

        let second = tick(&mut state, SIM_DT);
        assert!(!second.ball_hit_wall);
    }

    #[test]
    fn test_tick_counter_advances() {
        let mut state = scenario();
        tick(&mut state, SIM_DT);
        tick(&mut state, SIM_DT);
        assert_eq!(state.time_ticks, 2);
    }
}
