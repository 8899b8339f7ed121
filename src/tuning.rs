//! Data-driven game balance
//!
//! Every gameplay constant the designers iterate on lives here so a build is
//! never needed to retune the game. The engine takes one [`Tuning`] at
//! construction and validates it once; a rejected tuning never reaches the
//! simulation.
//!
//! Distances are pixels, speeds are pixels per frame, durations are frames
//! unless a field name says otherwise. Screen y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::Rect;

/// A tuning field the engine cannot run with
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("frame interval must be at least 1 ms")]
    ZeroFrameInterval,
    #[error("charge settings must be nonzero (max {max}, per frame {per_frame})")]
    BadCharge { max: u8, per_frame: u8 },
    #[error("launch speed range is invalid (base {base}, max {max})")]
    BadSpeedRange { base: f32, max: f32 },
    #[error("aim angle range is invalid ({min}..{max} degrees)")]
    BadAngleRange { min: f32, max: f32 },
    #[error("drag coefficient {0} must be in 0..1")]
    BadDrag(f32),
    #[error("gravity coefficient {0} must not be negative")]
    BadGravity(f32),
    #[error("playfield has no area")]
    EmptyPlayfield,
    #[error("muzzle {0} lies outside the playfield")]
    MuzzleOutOfBounds(Vec2),
    #[error("at least one skeleton slot is required")]
    NoSkeletons,
    #[error("at least one pumpkin is required")]
    NoPumpkins,
    #[error("animation hold durations must be at least 1 frame")]
    ZeroHold,
    #[error("miss impact hold must be at least 1 frame")]
    ZeroImpactHold,
}

/// Gameplay balance knobs, loadable from JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Timing ===
    /// Milliseconds per animation frame
    pub frame_interval_ms: u32,

    // === Charge ===
    /// Charge cap; launch power saturates here
    pub max_charge: u8,
    /// Charge gained per frame while the charge button is down
    pub charge_per_frame: u8,

    // === Launch mapping ===
    /// Launch speed at zero charge (px/frame)
    pub speed_base: f32,
    /// Extra launch speed per charge unit (px/frame)
    pub speed_per_charge: f32,
    /// Launch speed cap (px/frame)
    pub speed_max: f32,
    /// Elevation added on top of the player's aim angle (degrees)
    pub angle_base_deg: f32,
    /// Extra elevation per charge unit (degrees)
    pub angle_per_charge_deg: f32,
    /// Elevation clamp range (degrees above horizontal)
    pub angle_min_deg: f32,
    pub angle_max_deg: f32,
    /// Aim angle at the start of a game (degrees)
    pub aim_init_deg: f32,
    /// Aim change per aim-button press (degrees)
    pub aim_step_deg: f32,

    // === Flight ===
    /// Horizontal drag, fraction of vx bled per frame
    pub drag_coeff: f32,
    /// Downward acceleration (px/frame^2)
    pub gravity_coeff: f32,
    /// Flight region; leaving it ends the toss
    pub playfield: Rect,
    /// Where a tossed pumpkin leaves the catapult basket
    pub muzzle: Vec2,

    // === Scene layout ===
    /// Catapult sprite top-left corner
    pub catapult_pos: Vec2,
    /// Charge bar top-left corner
    pub charge_bar_pos: Vec2,
    /// Skeleton top-left corners; hit credit follows this order
    pub skeleton_slots: Vec<Vec2>,
    /// Ground line a missed pumpkin splats on
    pub splat_y: f32,

    // === Rounds ===
    /// Tosses per game
    pub pumpkins: u8,
    /// Points per skeleton felled
    pub skeleton_points: u32,
    /// Frames the Impact phase lingers after a miss
    pub impact_hold_frames: u32,
    /// Upper bound on each skeleton's respawn delay within a wave
    pub rise_stagger_frames: u32,

    // === Animation holds (frames per tile) ===
    pub skeleton_stand_hold: u32,
    pub skeleton_rise_hold: u32,
    pub skeleton_sink_hold: u32,
    pub catapult_toss_hold: u32,
    pub pumpkin_splat_hold: u32,

    // === Input ===
    /// Consecutive active polls before a press registers (1 = no filtering)
    pub press_dwell_polls: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            frame_interval_ms: crate::consts::FRAME_INTERVAL_MS,

            max_charge: 20,
            charge_per_frame: 1,

            speed_base: 1.0,
            speed_per_charge: 0.25,
            speed_max: 6.0,
            angle_base_deg: 0.0,
            angle_per_charge_deg: 0.5,
            angle_min_deg: 0.0,
            angle_max_deg: 90.0,
            aim_init_deg: 45.0,
            aim_step_deg: 5.0,

            drag_coeff: 0.02,
            gravity_coeff: 0.12,
            // Logical 128x64 scene with headroom above the screen for high
            // lobs and an 8 px apron past the side edges
            playfield: Rect::new(Vec2::new(-8.0, -64.0), Vec2::new(136.0, 57.0)),
            muzzle: Vec2::new(12.0, 26.0),

            catapult_pos: Vec2::new(0.0, 25.0),
            charge_bar_pos: Vec2::new(0.0, 8.0),
            skeleton_slots: vec![
                Vec2::new(54.0, 44.0),
                Vec2::new(74.0, 44.0),
                Vec2::new(94.0, 44.0),
            ],
            splat_y: 57.0,

            pumpkins: 10,
            skeleton_points: 100,
            impact_hold_frames: 45,
            rise_stagger_frames: 20,

            skeleton_stand_hold: 5,
            skeleton_rise_hold: 3,
            skeleton_sink_hold: 3,
            catapult_toss_hold: 2,
            pumpkin_splat_hold: 4,

            press_dwell_polls: 1,
        }
    }
}

impl Tuning {
    /// Check every field the simulation depends on. Runs once, at engine
    /// construction; the first problem found is returned.
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.frame_interval_ms == 0 {
            return Err(TuningError::ZeroFrameInterval);
        }
        if self.max_charge == 0 || self.charge_per_frame == 0 {
            return Err(TuningError::BadCharge {
                max: self.max_charge,
                per_frame: self.charge_per_frame,
            });
        }
        if self.speed_base <= 0.0 || self.speed_max < self.speed_base {
            return Err(TuningError::BadSpeedRange {
                base: self.speed_base,
                max: self.speed_max,
            });
        }
        if self.angle_min_deg > self.angle_max_deg {
            return Err(TuningError::BadAngleRange {
                min: self.angle_min_deg,
                max: self.angle_max_deg,
            });
        }
        if !(0.0..1.0).contains(&self.drag_coeff) {
            return Err(TuningError::BadDrag(self.drag_coeff));
        }
        if self.gravity_coeff < 0.0 {
            return Err(TuningError::BadGravity(self.gravity_coeff));
        }
        if !self.playfield.is_valid() {
            return Err(TuningError::EmptyPlayfield);
        }
        if !self.playfield.contains(self.muzzle) {
            return Err(TuningError::MuzzleOutOfBounds(self.muzzle));
        }
        if self.skeleton_slots.is_empty() {
            return Err(TuningError::NoSkeletons);
        }
        if self.pumpkins == 0 {
            return Err(TuningError::NoPumpkins);
        }
        if self.skeleton_stand_hold == 0
            || self.skeleton_rise_hold == 0
            || self.skeleton_sink_hold == 0
            || self.catapult_toss_hold == 0
            || self.pumpkin_splat_hold == 0
        {
            return Err(TuningError::ZeroHold);
        }
        if self.impact_hold_frames == 0 {
            return Err(TuningError::ZeroImpactHold);
        }
        Ok(())
    }
}
