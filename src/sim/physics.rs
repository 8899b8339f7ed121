//! Pumpkin flight physics
//!
//! Deliberately not a real drag model: a horizontal bleed plus constant
//! downward gravity, integrated at a fixed timestep in pixel/frame units and
//! tuned entirely by feel. Collision against skeletons is the state
//! machine's job; this module only flies the pumpkin and reports when it
//! leaves the playfield.

use glam::Vec2;

use super::rect::Rect;
use crate::launch_vector;
use crate::tuning::Tuning;

/// Outcome of one integration step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Still inside the playfield
    Airborne,
    /// Crossed the playfield boundary this step; the flight is over
    LeftPlayfield,
}

/// Launch velocity for a charge level and aim angle.
///
/// Speed and elevation are both affine in charge and saturate at the tuned
/// caps, so launch speed never decreases as charge grows.
pub fn launch_velocity(charge: u8, aim_deg: f32, tuning: &Tuning) -> Vec2 {
    let charge = charge.min(tuning.max_charge) as f32;
    let speed = (tuning.speed_base + tuning.speed_per_charge * charge).min(tuning.speed_max);
    let elevation = (tuning.angle_base_deg + tuning.angle_per_charge_deg * charge + aim_deg)
        .clamp(tuning.angle_min_deg, tuning.angle_max_deg);
    launch_vector(speed, elevation)
}

/// The flying pumpkin. One exists for the whole game; every toss relaunches
/// it rather than allocating.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    /// Sprite top-left corner, sub-pixel
    pub pos: Vec2,
    pub vel: Vec2,
    pub in_flight: bool,
}

impl Projectile {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            in_flight: false,
        }
    }

    /// Leave the muzzle with the velocity for `charge` and `aim_deg`
    pub fn launch(&mut self, charge: u8, aim_deg: f32, tuning: &Tuning) {
        self.pos = tuning.muzzle;
        self.vel = launch_velocity(charge, aim_deg, tuning);
        self.in_flight = true;
    }

    /// One fixed-dt step: drag bleeds horizontal speed, gravity pulls down,
    /// then the updated velocity carries the position.
    pub fn step(&mut self, dt: f32, tuning: &Tuning) -> StepResult {
        if !self.in_flight {
            return StepResult::LeftPlayfield;
        }
        self.vel.x -= tuning.drag_coeff * self.vel.x * dt;
        self.vel.y += tuning.gravity_coeff * dt;
        self.pos += self.vel * dt;
        if tuning.playfield.contains(self.pos) {
            StepResult::Airborne
        } else {
            self.in_flight = false;
            StepResult::LeftPlayfield
        }
    }

    /// Hit-box for skeleton overlap tests: the 8x8 pumpkin tile inset by a
    /// pixel on each side, matching the round art
    pub fn hitbox(&self) -> Rect {
        Rect::from_origin_size(self.pos + Vec2::ONE, Vec2::new(6.0, 6.0))
    }
}

impl Default for Projectile {
    fn default() -> Self {
        Self::new()
    }
}
