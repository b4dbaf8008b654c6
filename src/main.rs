//! Pang headless driver
//!
//! Runs the simulation without a window: a scripted input sequence stands in
//! for the keyboard, and the final state is dumped as JSON. Useful for
//! eyeballing the loop and as a smoke test; a real host would replace the
//! script with its windowing layer's key events.

use pang::consts::{DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH, SIM_DT};
use pang::sim::{Action, Arena, GameState, InputEvent, tick};
use pang::tuning::Tuning;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(7);

    let arena = Arena::new(DEFAULT_ARENA_WIDTH, DEFAULT_ARENA_HEIGHT);
    let mut state = GameState::new(arena, Tuning::default(), seed);

    // Five simulated seconds: hold up, hold both, release, then reset the
    // ball and let it fly.
    let script: &[(u64, InputEvent)] = &[
        (0, InputEvent::KeyDown(Action::MoveUp)),
        (120, InputEvent::KeyDown(Action::MoveDown)),
        (180, InputEvent::KeyUp(Action::MoveUp)),
        (300, InputEvent::KeyUp(Action::MoveDown)),
        (360, InputEvent::KeyDown(Action::ResetBall)),
        (360, InputEvent::KeyUp(Action::ResetBall)),
    ];

    let total_ticks = 600;
    let mut next_event = 0;
    let mut wall_hits = 0u32;
    let mut paddle_hits = 0u32;

    for tick_index in 0..total_ticks {
        while next_event < script.len() && script[next_event].0 == tick_index {
            state.handle(script[next_event].1);
            next_event += 1;
        }

        let events = tick(&mut state, SIM_DT);
        wall_hits += u32::from(events.ball_hit_wall);
        paddle_hits += u32::from(events.ball_hit_paddle);

        if tick_index % 120 == 0 {
            log::info!(
                "t={:>3}: ball ({:6.1}, {:6.1}), paddles y ({:5.1}, {:5.1})",
                tick_index,
                state.ball.pos.x,
                state.ball.pos.y,
                state.paddles[0].pos.y,
                state.paddles[1].pos.y,
            );
        }
    }

    log::info!("{total_ticks} ticks: {wall_hits} wall hits, {paddle_hits} paddle hits");

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize final state: {err}"),
    }
}
