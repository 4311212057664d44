//! Ball Battle - a two-agent ball-collection arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity motion, collisions, game state)
//! - `render`: macroquad presentation (menu, field, HUD, winner overlay)
//! - `tuning`: Data-driven game balance

pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum catch-up ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Both agents are squares of this side length
    pub const AGENT_SIZE: f32 = 30.0;
    /// Player step per active direction signal, per tick
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Pursuer step along its pursuit direction, per tick
    pub const PURSUER_SPEED: f32 = 3.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Balls spawned at round start; never replenished mid-round
    pub const BALL_COUNT: usize = 20;
    /// Spawn velocity components are integers in [-BALL_MAX_SPEED, BALL_MAX_SPEED]
    pub const BALL_MAX_SPEED: i32 = 3;

    /// First agent to reach this score ends the round
    pub const WIN_THRESHOLD: u32 = 10;
    /// Winner overlay hold time before exit (milliseconds)
    pub const WIN_DISPLAY_MS: u64 = 2000;

    /// Agent spawn centers
    pub const PLAYER_START: (f32, f32) = (100.0, 100.0);
    pub const PURSUER_START: (f32, f32) = (700.0, 500.0);
}
