//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, gated by the frame clock
//! - Seeded RNG only
//! - Stable iteration order (by skeleton slot)
//! - No rendering or platform dependencies

pub mod actors;
pub mod anim;
pub mod clock;
pub mod engine;
pub mod input;
pub mod physics;
pub mod rect;
pub mod sprites;
pub mod state;
pub mod tick;

pub use anim::{AnimationCycle, LoopMode};
pub use clock::FrameScheduler;
pub use engine::Engine;
pub use input::{Button, ButtonState, ControlReport, InputSampler};
pub use physics::{Projectile, StepResult, launch_velocity};
pub use rect::Rect;
pub use sprites::{Sprite, SpriteId};
pub use state::{GameEvent, GamePhase, GameState, ImpactOutcome};
pub use tick::tick;
