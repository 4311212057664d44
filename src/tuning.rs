//! Data-driven game balance
//!
//! Defaults mirror `consts`; an optional JSON file next to the binary can
//! override any subset of them at startup. Values are fixed once a round
//! starts.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable round parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Field width in pixels
    pub field_width: f32,
    /// Field height in pixels
    pub field_height: f32,
    /// Balls spawned at round start
    pub ball_count: usize,
    /// Ball radius; the collision box is the circumscribing square
    pub ball_radius: f32,
    /// Player step per active direction signal, per tick
    pub player_speed: f32,
    /// Pursuer step along its pursuit direction, per tick
    pub pursuer_speed: f32,
    /// First score to reach this ends the round
    pub win_threshold: u32,
    /// Player spawn center
    pub player_start: Vec2,
    /// Pursuer spawn center
    pub pursuer_start: Vec2,
    /// Winner overlay hold time in milliseconds
    pub win_display_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ball_count: BALL_COUNT,
            ball_radius: BALL_RADIUS,
            player_speed: PLAYER_SPEED,
            pursuer_speed: PURSUER_SPEED,
            win_threshold: WIN_THRESHOLD,
            player_start: Vec2::new(PLAYER_START.0, PLAYER_START.1),
            pursuer_start: Vec2::new(PURSUER_START.0, PURSUER_START.1),
            win_display_ms: WIN_DISPLAY_MS,
        }
    }
}

impl Tuning {
    /// Field extents as a vector
    pub fn field(&self) -> Vec2 {
        Vec2::new(self.field_width, self.field_height)
    }

    /// Load overrides from a JSON file, falling back to defaults.
    ///
    /// A missing file is the normal case and stays silent; an unreadable one
    /// is logged and ignored.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides from {path}");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring invalid tuning file {path}: {e}");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
