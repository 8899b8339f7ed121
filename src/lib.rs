//! Toss-o-Lantern - a pumpkin-flinging catapult arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (frame clock, input edges, flight
//!   physics, animation cycles, game state machine)
//! - `tuning`: Data-driven game balance
//!
//! The engine is renderer-agnostic. Each ready frame it produces a
//! back-to-front batch of sprite sheet tiles plus a title overlay flag, and
//! consumes decoded gamepad reports. Display, sprite sheet, and USB plumbing
//! all belong to the host.

pub mod sim;
pub mod tuning;

pub use sim::Engine;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep, in animation-frame units. Flight constants
    /// are tuned in pixels per frame, so one step always advances one frame.
    pub const FRAME_DT: f32 = 1.0;
    /// Default frame interval (~30 fps, the cadence the tile art reads well at)
    pub const FRAME_INTERVAL_MS: u32 = 33;

    /// Sprite sheet geometry: 8x8 tiles, ten per sheet row. Multi-tile
    /// sprites carry their top-left tile; companions sit at +1 and +10.
    pub const TILE_SIZE: i32 = 8;
    pub const SHEET_COLUMNS: u8 = 10;

    /// The charge bar is seven cells wide: two rounded end caps around five
    /// interior cells of four charge units each
    pub const CHARGE_BAR_CELLS: usize = 7;
    pub const CHARGE_UNITS_PER_CELL: u32 = 4;
    /// Total charge units the bar art can show
    pub const CHARGE_BAR_UNITS: u32 = 20;
}

/// Velocity for a launch at `speed` px/frame, `elevation_deg` above
/// horizontal. Screen y grows downward, so upward motion is negative vy.
#[inline]
pub fn launch_vector(speed: f32, elevation_deg: f32) -> Vec2 {
    let rad = elevation_deg.to_radians();
    Vec2::new(speed * rad.cos(), -speed * rad.sin())
}
