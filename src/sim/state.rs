//! Game state and core simulation types
//!
//! Everything needed to reproduce a run lives here: the entities, the input
//! latch, and the seed the serve angle was drawn from.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::collision::Aabb;
use super::input::{Action, InputEvent, InputLatch};
use crate::heading_impulse;
use crate::tuning::Tuning;

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Serve impulse magnitude
    pub speed: f32,
    /// Serve angle in degrees, unbounded; wrapped mod 360 on use
    pub angle: f32,
    /// Center of the arena, where every serve starts
    pub origin: Vec2,
}

impl Ball {
    /// Create the ball at the arena center and serve it once.
    ///
    /// The initial serve angle is drawn from `rng`, which is the only
    /// randomness in the simulation.
    pub fn new(arena: &Arena, tuning: &Tuning, rng: &mut Pcg32) -> Self {
        let mut ball = Self {
            pos: arena.center(),
            vel: Vec2::ZERO,
            radius: arena.height * tuning.ball_radius_h,
            speed: arena.height * tuning.ball_speed_h,
            angle: rng.random_range(0.0..360.0),
            origin: arena.center(),
        };
        ball.launch();
        ball
    }

    /// Re-center the ball, drop any residual velocity, nudge the serve
    /// angle, and serve again.
    pub fn reset(&mut self, angle_step: f32) {
        self.pos = self.origin;
        self.vel = Vec2::ZERO;
        self.angle += angle_step;
        log::debug!("ball reset, serve angle now {:.1}°", self.angle);
        self.launch();
    }

    /// Apply the serve impulse for the current angle.
    ///
    /// The impulse adds to whatever velocity the ball already carries; it
    /// only fully determines the heading right after a reset.
    pub fn launch(&mut self) {
        self.vel += heading_impulse(self.angle, self.speed);
    }
}

/// Which vertical track a paddle rides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleSide {
    Left,
    Right,
}

/// A player paddle, free to move on a vertical track only
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: PaddleSide,
    pub pos: Vec2,
    /// Input-driven vertical velocity, set fresh every tick
    pub vel_y: f32,
    pub speed: f32,
    pub half_width: f32,
    pub half_height: f32,
    /// Lowest allowed center y
    pub floor: f32,
    /// Highest allowed center y
    pub ceiling: f32,
    /// The track's fixed x; the paddle is pinned here every tick
    pub track_x: f32,
}

impl Paddle {
    /// Create a paddle centered vertically on its track.
    ///
    /// Track placement keeps the historical side naming: `Right` rides the
    /// low-x track near the left goal line and `Left` the high-x one. The
    /// labels stay because the rest of the game (and its tests) key off
    /// them, not off screen position.
    pub fn new(arena: &Arena, tuning: &Tuning, side: PaddleSide) -> Self {
        let half_height = arena.height * tuning.paddle_height_h * 0.5;
        let track_x = match side {
            PaddleSide::Right => arena.width * tuning.paddle_inset_w,
            PaddleSide::Left => arena.width * (1.0 - tuning.paddle_inset_w),
        };
        Self {
            side,
            pos: Vec2::new(track_x, arena.height * 0.5),
            vel_y: 0.0,
            speed: arena.height * tuning.paddle_speed_h,
            half_width: arena.width * tuning.paddle_width_w * 0.5,
            half_height,
            floor: half_height + arena.height * tuning.paddle_floor_margin_h,
            ceiling: arena.height * (1.0 - tuning.paddle_ceiling_margin_h) - half_height,
            track_x,
        }
    }

    /// Translate the latched key state into this tick's velocity.
    ///
    /// Only-up runs at full speed upward, only-down at full speed downward,
    /// and both-or-neither is a hard stop. The decision is made fresh every
    /// tick, so speed never ramps.
    pub fn move_player(&mut self, up_pressed: bool, down_pressed: bool) {
        self.vel_y = match (up_pressed, down_pressed) {
            (true, false) => self.speed,
            (false, true) => -self.speed,
            _ => 0.0,
        };
    }

    /// Advance along the track and enforce the hard positional bounds.
    ///
    /// The clamp runs unconditionally, so no impulse sequence can push the
    /// paddle out of `[floor, ceiling]`, and x stays pinned to the track.
    pub fn integrate(&mut self, dt: f32) {
        self.pos.y = (self.pos.y + self.vel_y * dt).clamp(self.floor, self.ceiling);
        self.pos.x = self.track_x;
    }

    /// Collision rectangle
    #[inline]
    pub fn rect(&self) -> Aabb {
        Aabb::from_center_size(
            self.pos,
            Vec2::new(self.half_width * 2.0, self.half_height * 2.0),
        )
    }
}

/// Which boundary a wall guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallSide {
    Top,
    Bottom,
}

/// A static boundary band across the full arena width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub side: WallSide,
    pub rect: Aabb,
}

impl Wall {
    pub fn new(arena: &Arena, tuning: &Tuning, side: WallSide) -> Self {
        let center_y = match side {
            WallSide::Top => arena.height * (1.0 - tuning.wall_margin_h),
            WallSide::Bottom => arena.height * tuning.wall_margin_h,
        };
        let size = Vec2::new(arena.width, arena.height * tuning.wall_thickness_h);
        Self {
            side,
            rect: Aabb::from_center_size(Vec2::new(arena.width * 0.5, center_y), size),
        }
    }

    /// Wall center, for the host's pose readback
    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.rect.center()
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub arena: Arena,
    pub tuning: Tuning,
    pub ball: Ball,
    /// Both paddles, [Left, Right]
    pub paddles: [Paddle; 2],
    /// Both boundary walls, [Top, Bottom]
    pub walls: [Wall; 2],
    /// Level-triggered key state, read once per tick
    pub input: InputLatch,
}

impl GameState {
    /// Build a fresh game for the given arena and seed.
    pub fn new(arena: Arena, tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::new(&arena, &tuning, &mut rng);
        log::info!(
            "new game: arena {}x{}, seed {seed}, serve angle {:.1}°",
            arena.width,
            arena.height,
            ball.angle
        );
        Self {
            seed,
            time_ticks: 0,
            ball,
            paddles: [
                Paddle::new(&arena, &tuning, PaddleSide::Left),
                Paddle::new(&arena, &tuning, PaddleSide::Right),
            ],
            walls: [
                Wall::new(&arena, &tuning, WallSide::Top),
                Wall::new(&arena, &tuning, WallSide::Bottom),
            ],
            input: InputLatch::default(),
            arena,
            tuning,
        }
    }

    /// Consume a logical input event from the host.
    ///
    /// Movement keys update the latch for the next tick. `ResetBall` is
    /// edge-triggered and takes effect immediately, independent of the
    /// frame loop.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(Action::ResetBall) => self.reset_ball(),
            InputEvent::KeyDown(action) => self.input.press(action),
            InputEvent::KeyUp(action) => self.input.release(action),
        }
    }

    /// Put the ball back on the center spot and serve it again.
    pub fn reset_ball(&mut self) {
        let step = self.tuning.serve_angle_step;
        self.ball.reset(step);
    }

    /// Paddle lookup by side
    pub fn paddle(&self, side: PaddleSide) -> &Paddle {
        match side {
            PaddleSide::Left => &self.paddles[0],
            PaddleSide::Right => &self.paddles[1],
        }
    }
}
