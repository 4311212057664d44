//! Game state and core simulation types
//!
//! Everything a round owns lives here; there are no ambient globals. The
//! renderer reads this state immutably each frame.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for the start trigger
    Menu,
    /// Active gameplay
    Playing,
    /// Round ended; `winner` is set and entities no longer update
    Finished,
}

/// The agent that reached the score threshold first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    You,
    Computer,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::You => "You",
            Winner::Computer => "Computer",
        }
    }
}

/// The human-controlled agent
#[derive(Debug, Clone)]
pub struct Player {
    /// Center of the bounding box
    pub pos: Vec2,
    /// Box side length
    pub size: f32,
    /// Step per active direction signal, per tick
    pub speed: f32,
    pub score: u32,
}

impl Player {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            size: AGENT_SIZE,
            speed,
            score: 0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.size))
    }

    /// Apply one tick of directional input, then clamp the box to the field.
    ///
    /// Each active signal contributes a full step on its axis. Diagonal input
    /// is unnormalized, so moving on both axes is ~1.41x axis speed.
    pub fn update(&mut self, left: bool, right: bool, up: bool, down: bool, field: Vec2) {
        if left {
            self.pos.x -= self.speed;
        }
        if right {
            self.pos.x += self.speed;
        }
        if up {
            self.pos.y -= self.speed;
        }
        if down {
            self.pos.y += self.speed;
        }
        self.pos = clamp_center(self.pos, Vec2::splat(self.size), field);
    }
}

/// The computer-controlled agent
#[derive(Debug, Clone)]
pub struct Pursuer {
    /// Center of the bounding box
    pub pos: Vec2,
    /// Box side length
    pub size: f32,
    /// Step along the pursuit direction, per tick
    pub speed: f32,
    pub score: u32,
}

impl Pursuer {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            size: AGENT_SIZE,
            speed,
            score: 0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.size))
    }

    /// Step toward the nearest ball, then clamp the box to the field.
    ///
    /// Distance ties keep the first ball in scan order (strict `<`), so the
    /// ball vec's ordering is part of the contract. A ball at exactly zero
    /// distance produces no movement this tick; once it drifts away under its
    /// own velocity, pursuit resumes. An empty set is a no-op.
    pub fn update(&mut self, balls: &[Ball], field: Vec2) {
        let mut nearest = None;
        let mut min_distance = f32::INFINITY;
        for ball in balls {
            let distance = self.pos.distance(ball.pos);
            if distance < min_distance {
                min_distance = distance;
                nearest = Some(ball.pos);
            }
        }
        let Some(target) = nearest else {
            return;
        };
        if min_distance > 0.0 {
            self.pos += (target - self.pos) / min_distance * self.speed;
        }
        self.pos = clamp_center(self.pos, Vec2::splat(self.size), field);
    }
}

/// A collectable ball, reflecting off the field edges
#[derive(Debug, Clone)]
pub struct Ball {
    /// Center of the bounding box
    pub pos: Vec2,
    /// Per-tick displacement; components fixed at spawn, only signs ever change
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.radius * 2.0))
    }

    /// Advance one tick and reflect off any field edge the box has crossed.
    ///
    /// The check runs on the post-move box: a ball may protrude past an edge
    /// on the tick it reflects, but never travels further out afterwards.
    /// Reflection flips a component's sign only; speed magnitude is constant
    /// for the ball's lifetime.
    pub fn update(&mut self, field: Vec2) {
        self.pos += self.vel;
        let aabb = self.aabb();
        if aabb.min.x < 0.0 || aabb.max.x > field.x {
            self.vel.x = -self.vel.x;
        }
        if aabb.min.y < 0.0 || aabb.max.y > field.y {
            self.vel.y = -self.vel.y;
        }
    }
}

/// Clamp a box center so the whole box stays inside the field
fn clamp_center(center: Vec2, size: Vec2, field: Vec2) -> Vec2 {
    let half = size / 2.0;
    Vec2::new(
        center.x.clamp(half.x, field.x - half.x),
        center.y.clamp(half.y, field.y - half.y),
    )
}

/// RNG state wrapper for reproducible rounds
#[derive(Debug, Clone, Copy)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete round state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Round seed for reproducibility
    pub seed: u64,
    /// Balance parameters, fixed at round start
    pub tuning: Tuning,
    /// Simulation tick counter; advances only while Playing
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Set exactly once, on the Playing -> Finished transition
    pub winner: Option<Winner>,
    pub player: Player,
    pub pursuer: Pursuer,
    /// Live balls; destroyed on first collision, never recreated mid-round
    pub balls: Vec<Ball>,
}

impl GameState {
    /// Create a round in the Menu phase with a freshly spawned ball set
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut rng = RngState::new(seed).to_rng();
        let balls = spawn_balls(&tuning, &mut rng);
        Self {
            seed,
            tuning,
            time_ticks: 0,
            phase: GamePhase::Menu,
            winner: None,
            player: Player::new(tuning.player_start, tuning.player_speed),
            pursuer: Pursuer::new(tuning.pursuer_start, tuning.pursuer_speed),
            balls,
        }
    }

    /// Field extents as a vector
    pub fn field(&self) -> Vec2 {
        self.tuning.field()
    }
}

/// Spawn the round's ball set at random centers with random integer velocities.
///
/// Centers land anywhere on the field, so a rim spawn may protrude until its
/// first reflection. Both velocity components can come up zero; a stationary
/// ball is still collectable.
fn spawn_balls(tuning: &Tuning, rng: &mut Pcg32) -> Vec<Ball> {
    (0..tuning.ball_count)
        .map(|_| {
            let pos = Vec2::new(
                rng.random_range(0.0..=tuning.field_width),
                rng.random_range(0.0..=tuning.field_height),
            );
            let vel = Vec2::new(
                rng.random_range(-BALL_MAX_SPEED..=BALL_MAX_SPEED) as f32,
                rng.random_range(-BALL_MAX_SPEED..=BALL_MAX_SPEED) as f32,
            );
            Ball::new(pos, vel, tuning.ball_radius)
        })
        .collect()
}
