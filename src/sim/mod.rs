//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, collect_hits};
pub use state::{Ball, GamePhase, GameState, Player, Pursuer, RngState, Winner};
pub use tick::{TickInput, tick};
