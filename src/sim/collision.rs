//! Collision detection and response
//!
//! The ball is the only dynamic body, so every contact pairs it with a
//! static obstacle. Response is dispatched on the resolved [`Body`]
//! identity, never on a shared filter mask, so a paddle contact can't be
//! mistaken for a wall contact.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle, Wall, WallSide};
use super::tick::TickEvents;

/// A static body the ball can contact, tagged by kind
#[derive(Debug, Clone, Copy)]
pub enum Body<'a> {
    Wall(&'a Wall),
    Paddle(&'a Paddle),
}

impl Body<'_> {
    fn rect(&self) -> Aabb {
        match self {
            Body::Wall(wall) => wall.rect,
            Body::Paddle(paddle) => paddle.rect(),
        }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Check if a circle intersects this box
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = Vec2::new(
            center.x.clamp(self.min.x, self.max.x),
            center.y.clamp(self.min.y, self.max.y),
        );
        (center - closest).length_squared() <= radius * radius
    }
}

/// Detect and resolve every contact involving the ball this tick.
///
/// Walls first, then paddles; the margins keep paddles out of the wall
/// bands so the two sets never overlap each other.
pub fn resolve_ball_contacts(
    ball: &mut Ball,
    paddles: &[Paddle; 2],
    walls: &[Wall; 2],
    events: &mut TickEvents,
) {
    let obstacles = walls
        .iter()
        .map(Body::Wall)
        .chain(paddles.iter().map(Body::Paddle));

    for body in obstacles {
        if !body.rect().intersects_circle(ball.pos, ball.radius) {
            continue;
        }
        match body {
            Body::Wall(wall) => {
                reflect_off_wall(ball, wall);
                events.ball_hit_wall = true;
                log::debug!("ball bounced off {:?} wall at x={:.1}", wall.side, ball.pos.x);
            }
            Body::Paddle(paddle) => {
                if reflect_off_paddle(ball, paddle) {
                    events.ball_hit_paddle = true;
                    log::debug!(
                        "ball bounced off {:?} paddle at y={:.1}",
                        paddle.side,
                        ball.pos.y
                    );
                }
            }
        }
    }
}

/// Elastic bounce off a boundary wall.
///
/// Full restitution: the vertical component flips, the horizontal one is
/// untouched, and the ball is pushed flush against the band so it can't
/// tunnel through on the next tick.
pub fn reflect_off_wall(ball: &mut Ball, wall: &Wall) {
    match wall.side {
        WallSide::Top => {
            ball.vel.y = -ball.vel.y.abs();
            ball.pos.y = wall.rect.min.y - ball.radius;
        }
        WallSide::Bottom => {
            ball.vel.y = ball.vel.y.abs();
            ball.pos.y = wall.rect.max.y + ball.radius;
        }
    }
}

/// Elastic bounce off a paddle face.
///
/// Only fires when the ball is actually heading into the paddle; a ball
/// already leaving it is left alone so one overlap can't bounce twice.
/// Returns whether the contact was resolved.
pub fn reflect_off_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    let moving_toward = (paddle.pos.x - ball.pos.x) * ball.vel.x > 0.0;
    if !moving_toward {
        return false;
    }
    // Send the ball back toward the side it came from and push it clear
    let exit_sign = (ball.pos.x - paddle.pos.x).signum();
    ball.vel.x = ball.vel.x.abs() * exit_sign;
    ball.pos.x = paddle.pos.x + exit_sign * (paddle.half_width + ball.radius);
    true
}
