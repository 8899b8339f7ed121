//! Catapult, skeleton, and pumpkin actors
//!
//! Each actor pairs an animation cycle with the little state the game
//! machine needs from it. Tile numbers index the shared sprite sheet by
//! top-left cell; the renderer derives companion cells from the sheet layout
//! (+1 across, +10 down).

use glam::Vec2;

use super::anim::{AnimationCycle, LoopMode};
use super::rect::Rect;
use crate::consts::{CHARGE_BAR_CELLS, CHARGE_BAR_UNITS, CHARGE_UNITS_PER_CELL};
use crate::tuning::Tuning;

/// Catapult 16x16 sprite, arm cocked with a pumpkin in the basket
pub const CATAPULT_LOAD: &[u8] = &[12];
/// Arm swinging out; the final frame has an empty basket
pub const CATAPULT_TOSS: &[u8] = &[14, 16, 18];

/// Pumpkin in flight (single 8x8 tile)
pub const PUMPKIN_FLY: &[u8] = &[10];
/// Squash on the ground: 3/4 height, 1/2 height, flat
pub const PUMPKIN_SPLAT: &[u8] = &[11, 20, 21];

/// Skeleton 8x16 sprite, fully underground
pub const SKELETON_HIDE: &[u8] = &[30];
/// Climbing out of the grave, skull first
pub const SKELETON_RISE: &[u8] = &[31, 32, 33, 34, 35];
/// March-in-place loop
pub const SKELETON_STAND: &[u8] = &[36, 37, 38, 39];
/// The rise run backwards: sinking home after a hit
pub const SKELETON_SINK: &[u8] = &[35, 34, 33, 32, 31, 30];

/// Skeleton sprite footprint, which doubles as its hit-box
pub const SKELETON_SIZE: Vec2 = Vec2::new(8.0, 16.0);

// Charge bar cell tiles
const BAR_CAP_LEFT: u8 = 1;
const BAR_EMPTY: u8 = 2;
const BAR_FULL: u8 = 6;
const BAR_CAP_RIGHT: u8 = 7;
/// Transparent sheet cell, used to blank the bar at zero charge
const BAR_HIDDEN: u8 = 0;

/// Tiles for the seven-cell charge bar at `charge` out of `max_charge`.
///
/// The bar art encodes twenty charge units: five interior cells of four
/// units each, one unit two pixels wide. Partial fills use the one, two, and
/// three unit tiles. Other charge ranges are scaled onto those twenty units,
/// rounding up so the first unit of charge always shows. Zero charge blanks
/// the bar entirely.
pub fn charge_bar_tiles(charge: u8, max_charge: u8) -> [u8; CHARGE_BAR_CELLS] {
    if charge == 0 || max_charge == 0 {
        return [BAR_HIDDEN; CHARGE_BAR_CELLS];
    }
    let units = (charge.min(max_charge) as u32 * CHARGE_BAR_UNITS).div_ceil(max_charge as u32);
    let mut cells = [BAR_EMPTY; CHARGE_BAR_CELLS];
    cells[0] = BAR_CAP_LEFT;
    cells[CHARGE_BAR_CELLS - 1] = BAR_CAP_RIGHT;
    for i in 0..CHARGE_BAR_CELLS - 2 {
        let filled = units.saturating_sub(i as u32 * CHARGE_UNITS_PER_CELL);
        cells[i + 1] = match filled {
            0 => BAR_EMPTY,
            1..=3 => BAR_EMPTY + filled as u8,
            _ => BAR_FULL,
        };
    }
    cells
}

/// The catapult: charge, aim, and the arm animation
#[derive(Debug, Clone)]
pub struct CatapultActor {
    cycle: AnimationCycle,
    /// Accrued launch power, capped at the tuned maximum
    pub charge: u8,
    /// Player-set launch elevation in degrees
    pub aim_deg: f32,
}

impl CatapultActor {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            cycle: AnimationCycle::new(CATAPULT_LOAD, 1, LoopMode::Loop),
            charge: 0,
            aim_deg: tuning.aim_init_deg,
        }
    }

    /// Fresh game: no charge, aim back at its starting angle, arm loaded
    pub fn new_game(&mut self, tuning: &Tuning) {
        self.charge = 0;
        self.aim_deg = tuning.aim_init_deg;
        self.cycle.play(CATAPULT_LOAD, 1, LoopMode::Loop);
    }

    /// Wind up by one increment, saturating at the cap
    pub fn add_charge(&mut self, increment: u8, max_charge: u8) {
        self.charge = self.charge.saturating_add(increment).min(max_charge);
    }

    /// Nudge the launch elevation, clamped to the tuned range
    pub fn nudge_aim(&mut self, delta_deg: f32, tuning: &Tuning) {
        self.aim_deg =
            (self.aim_deg + delta_deg).clamp(tuning.angle_min_deg, tuning.angle_max_deg);
    }

    /// Swing the arm; the cycle parks on the empty-basket frame
    pub fn toss(&mut self, tuning: &Tuning) {
        self.cycle
            .play(CATAPULT_TOSS, tuning.catapult_toss_hold, LoopMode::OnceThenHold);
    }

    /// Load the next pumpkin; aim carries over between tosses
    pub fn reload(&mut self) {
        self.charge = 0;
        self.cycle.play(CATAPULT_LOAD, 1, LoopMode::Loop);
    }

    pub fn update(&mut self, elapsed_frames: u32) {
        self.cycle.advance(elapsed_frames);
    }

    /// Top-left tile of the 2x2 sprite
    pub fn tile(&self) -> u8 {
        self.cycle.current_tile()
    }
}

/// Skeleton life stages; the pose gates both animation and the hit-box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonPose {
    /// Below ground, waiting out its rise delay
    Buried,
    /// Climbing out; already hittable
    Rising,
    /// Above ground, marching in place
    Standing,
    /// Hit; sink animation running
    Collapsing,
    /// Fully underground again, staying there until the next wave
    Down,
}

/// One skeleton in a fixed scene slot
#[derive(Debug, Clone)]
pub struct SkeletonActor {
    /// Position in hit-credit order
    pub slot: u8,
    /// Sprite top-left corner; never moves
    pub pos: Vec2,
    pose: SkeletonPose,
    cycle: AnimationCycle,
    /// Frames left before this skeleton starts rising
    rise_delay: u32,
}

impl SkeletonActor {
    pub fn new(slot: u8, pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            slot,
            pos,
            pose: SkeletonPose::Standing,
            cycle: AnimationCycle::new(SKELETON_STAND, tuning.skeleton_stand_hold, LoopMode::Loop),
            rise_delay: 0,
        }
    }

    /// Send the skeleton underground, to rise again after `delay_frames`
    pub fn bury(&mut self, delay_frames: u32) {
        self.pose = SkeletonPose::Buried;
        self.rise_delay = delay_frames;
        self.cycle.play(SKELETON_HIDE, 1, LoopMode::Loop);
    }

    /// Start the sink animation. Does nothing unless the skeleton is up.
    pub fn kill(&mut self, tuning: &Tuning) {
        if self.alive() {
            self.pose = SkeletonPose::Collapsing;
            self.cycle
                .play(SKELETON_SINK, tuning.skeleton_sink_hold, LoopMode::OnceThenSignal);
        }
    }

    /// Hittable: above ground and not already going down
    pub fn alive(&self) -> bool {
        matches!(self.pose, SkeletonPose::Rising | SkeletonPose::Standing)
    }

    /// The sink animation has fully played out
    pub fn down(&self) -> bool {
        self.pose == SkeletonPose::Down
    }

    /// Hit-box while the skeleton is above ground
    pub fn hitbox(&self) -> Option<Rect> {
        self.alive()
            .then(|| Rect::from_origin_size(self.pos, SKELETON_SIZE))
    }

    pub fn update(&mut self, elapsed_frames: u32, tuning: &Tuning) {
        match self.pose {
            SkeletonPose::Buried => {
                if self.rise_delay > elapsed_frames {
                    self.rise_delay -= elapsed_frames;
                } else {
                    self.rise_delay = 0;
                    self.pose = SkeletonPose::Rising;
                    self.cycle
                        .play(SKELETON_RISE, tuning.skeleton_rise_hold, LoopMode::OnceThenHold);
                }
            }
            SkeletonPose::Rising => {
                self.cycle.advance(elapsed_frames);
                if self.cycle.is_complete() {
                    self.pose = SkeletonPose::Standing;
                    self.cycle
                        .play(SKELETON_STAND, tuning.skeleton_stand_hold, LoopMode::Loop);
                }
            }
            SkeletonPose::Standing => {
                self.cycle.advance(elapsed_frames);
            }
            SkeletonPose::Collapsing => {
                self.cycle.advance(elapsed_frames);
                if self.cycle.take_completed() {
                    self.pose = SkeletonPose::Down;
                }
            }
            SkeletonPose::Down => {}
        }
    }

    /// Top tile of the 8x16 sprite
    pub fn tile(&self) -> u8 {
        self.cycle.current_tile()
    }

    pub fn pose(&self) -> SkeletonPose {
        self.pose
    }
}

/// What the pumpkin sprite shows. Flight position comes from the
/// projectile; this only tracks which tile to draw and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PumpkinVis {
    /// In the catapult basket, drawn as part of the catapult art
    Hidden,
    Flying,
    Splatting,
}

/// The visible pumpkin sprite
#[derive(Debug, Clone)]
pub struct PumpkinActor {
    vis: PumpkinVis,
    cycle: AnimationCycle,
    /// Sprite top-left corner; pinned to the ground line for a splat
    pub pos: Vec2,
}

impl PumpkinActor {
    pub fn new() -> Self {
        Self {
            vis: PumpkinVis::Hidden,
            cycle: AnimationCycle::new(PUMPKIN_FLY, 1, LoopMode::Loop),
            pos: Vec2::ZERO,
        }
    }

    pub fn hide(&mut self) {
        self.vis = PumpkinVis::Hidden;
    }

    /// Show the pumpkin in flight at `pos`
    pub fn fly(&mut self, pos: Vec2) {
        self.vis = PumpkinVis::Flying;
        self.cycle.play(PUMPKIN_FLY, 1, LoopMode::Loop);
        self.pos = pos;
    }

    /// Track the projectile while flying
    pub fn follow(&mut self, pos: Vec2) {
        if self.vis == PumpkinVis::Flying {
            self.pos = pos;
        }
    }

    /// Squash on the ground at `x`
    pub fn splat(&mut self, x: f32, tuning: &Tuning) {
        self.vis = PumpkinVis::Splatting;
        self.cycle
            .play(PUMPKIN_SPLAT, tuning.pumpkin_splat_hold, LoopMode::OnceThenHold);
        self.pos = Vec2::new(x, tuning.splat_y);
    }

    pub fn visible(&self) -> bool {
        self.vis != PumpkinVis::Hidden
    }

    pub fn update(&mut self, elapsed_frames: u32) {
        if self.vis == PumpkinVis::Splatting {
            self.cycle.advance(elapsed_frames);
        }
    }

    pub fn tile(&self) -> u8 {
        self.cycle.current_tile()
    }
}

impl Default for PumpkinActor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_bar_is_blank_at_zero() {
        assert_eq!(charge_bar_tiles(0, 20), [0; CHARGE_BAR_CELLS]);
    }

    #[test]
    fn test_charge_bar_fill_progression() {
        // One unit: left cap, one-unit sliver, empties, right cap
        assert_eq!(charge_bar_tiles(1, 20), [1, 3, 2, 2, 2, 2, 7]);
        // First interior cell full
        assert_eq!(charge_bar_tiles(4, 20), [1, 6, 2, 2, 2, 2, 7]);
        // Spilling into the second cell
        assert_eq!(charge_bar_tiles(5, 20), [1, 6, 3, 2, 2, 2, 7]);
        assert_eq!(charge_bar_tiles(7, 20), [1, 6, 5, 2, 2, 2, 7]);
        // Three cells full
        assert_eq!(charge_bar_tiles(12, 20), [1, 6, 6, 6, 2, 2, 7]);
        assert_eq!(charge_bar_tiles(14, 20), [1, 6, 6, 6, 4, 2, 7]);
        // Full bar
        assert_eq!(charge_bar_tiles(20, 20), [1, 6, 6, 6, 6, 6, 7]);
    }

    #[test]
    fn test_charge_bar_scales_other_ranges() {
        // A 60-unit range maps onto the same 20-unit art
        assert_eq!(charge_bar_tiles(60, 60), [1, 6, 6, 6, 6, 6, 7]);
        assert_eq!(charge_bar_tiles(30, 60), charge_bar_tiles(10, 20));
        // The first unit of charge always shows something
        assert_eq!(charge_bar_tiles(1, 60), [1, 3, 2, 2, 2, 2, 7]);
    }

    #[test]
    fn test_charge_bar_clamps_overflow() {
        assert_eq!(charge_bar_tiles(200, 20), charge_bar_tiles(20, 20));
    }

    #[test]
    fn test_catapult_charge_saturates() {
        let tuning = Tuning::default();
        let mut cat = CatapultActor::new(&tuning);
        for _ in 0..100 {
            cat.add_charge(1, tuning.max_charge);
        }
        assert_eq!(cat.charge, tuning.max_charge);
    }

    #[test]
    fn test_catapult_aim_clamps() {
        let tuning = Tuning::default();
        let mut cat = CatapultActor::new(&tuning);
        for _ in 0..30 {
            cat.nudge_aim(tuning.aim_step_deg, &tuning);
        }
        assert!((cat.aim_deg - tuning.angle_max_deg).abs() < 0.001);
        for _ in 0..60 {
            cat.nudge_aim(-tuning.aim_step_deg, &tuning);
        }
        assert!((cat.aim_deg - tuning.angle_min_deg).abs() < 0.001);
    }

    #[test]
    fn test_catapult_toss_parks_on_empty_basket() {
        let tuning = Tuning::default();
        let mut cat = CatapultActor::new(&tuning);
        assert_eq!(cat.tile(), 12);
        cat.toss(&tuning);
        for _ in 0..30 {
            cat.update(1);
        }
        assert_eq!(cat.tile(), 18);
        cat.reload();
        assert_eq!(cat.tile(), 12);
        assert_eq!(cat.charge, 0);
    }

    #[test]
    fn test_skeleton_rises_after_its_delay() {
        let tuning = Tuning::default();
        let mut skel = SkeletonActor::new(0, Vec2::new(54.0, 44.0), &tuning);
        skel.bury(3);
        assert_eq!(skel.pose(), SkeletonPose::Buried);
        assert!(skel.hitbox().is_none());
        skel.update(1, &tuning);
        skel.update(1, &tuning);
        assert_eq!(skel.pose(), SkeletonPose::Buried);
        skel.update(1, &tuning);
        assert_eq!(skel.pose(), SkeletonPose::Rising);
        assert!(skel.hitbox().is_some());
        // Ride the rise out into the marching loop
        for _ in 0..40 {
            skel.update(1, &tuning);
        }
        assert_eq!(skel.pose(), SkeletonPose::Standing);
    }

    #[test]
    fn test_skeleton_kill_sinks_and_stays_down() {
        let tuning = Tuning::default();
        let mut skel = SkeletonActor::new(1, Vec2::new(74.0, 44.0), &tuning);
        skel.kill(&tuning);
        assert_eq!(skel.pose(), SkeletonPose::Collapsing);
        assert!(!skel.alive());
        assert!(skel.hitbox().is_none());
        for _ in 0..60 {
            skel.update(1, &tuning);
        }
        assert!(skel.down());
        assert_eq!(skel.tile(), 30);
        // A second hit on a dead skeleton is a no-op
        skel.kill(&tuning);
        assert!(skel.down());
    }

    #[test]
    fn test_skeleton_kill_while_rising() {
        let tuning = Tuning::default();
        let mut skel = SkeletonActor::new(2, Vec2::new(94.0, 44.0), &tuning);
        skel.bury(0);
        skel.update(1, &tuning);
        assert_eq!(skel.pose(), SkeletonPose::Rising);
        skel.kill(&tuning);
        assert_eq!(skel.pose(), SkeletonPose::Collapsing);
    }

    #[test]
    fn test_pumpkin_splat_plays_out_and_holds_flat() {
        let tuning = Tuning::default();
        let mut pumpkin = PumpkinActor::new();
        assert!(!pumpkin.visible());
        pumpkin.fly(Vec2::new(20.0, 10.0));
        assert_eq!(pumpkin.tile(), 10);
        pumpkin.splat(33.4, &tuning);
        assert!((pumpkin.pos.y - tuning.splat_y).abs() < 0.001);
        for _ in 0..40 {
            pumpkin.update(1);
        }
        assert_eq!(pumpkin.tile(), 21);
        assert!(pumpkin.visible());
        pumpkin.hide();
        assert!(!pumpkin.visible());
    }

    #[test]
    fn test_pumpkin_follow_only_applies_in_flight() {
        let tuning = Tuning::default();
        let mut pumpkin = PumpkinActor::new();
        pumpkin.splat(10.0, &tuning);
        pumpkin.follow(Vec2::new(99.0, 99.0));
        assert!((pumpkin.pos.x - 10.0).abs() < 0.001);
    }
}
