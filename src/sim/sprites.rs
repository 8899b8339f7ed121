//! Renderer boundary: the per-frame sprite batch
//!
//! The engine's whole output is a back-to-front list of (sprite id, tile,
//! x, y) plus a title overlay flag. Positions are whole pixels; sub-pixel
//! flight positions round here and nowhere else. Multi-tile sprites carry
//! their top-left tile and the renderer derives companion cells from the
//! sheet layout.

use super::actors::charge_bar_tiles;
use super::state::{GamePhase, GameState};
use crate::consts::TILE_SIZE;
use crate::tuning::Tuning;

/// Which scene element a batch entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    /// 8x16 skeleton, by slot
    Skeleton(u8),
    /// 16x16 catapult
    Catapult,
    /// One 8x8 cell of the charge bar, left to right
    ChargeCell(u8),
    /// 8x8 pumpkin
    Pumpkin,
}

/// One draw entry: a sprite sheet tile at a screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub id: SpriteId,
    pub tile: u8,
    pub x: i32,
    pub y: i32,
}

fn px(v: f32) -> i32 {
    v.round() as i32
}

/// Fill `out` with this frame's draw list, back to front
pub fn collect(state: &GameState, tuning: &Tuning, out: &mut Vec<Sprite>) {
    out.clear();

    for skeleton in &state.skeletons {
        out.push(Sprite {
            id: SpriteId::Skeleton(skeleton.slot),
            tile: skeleton.tile(),
            x: px(skeleton.pos.x),
            y: px(skeleton.pos.y),
        });
    }

    out.push(Sprite {
        id: SpriteId::Catapult,
        tile: state.catapult.tile(),
        x: px(tuning.catapult_pos.x),
        y: px(tuning.catapult_pos.y),
    });

    // The bar only shows while the player can wind up
    if state.phase == GamePhase::Charging {
        let cells = charge_bar_tiles(state.catapult.charge, tuning.max_charge);
        for (i, tile) in cells.into_iter().enumerate() {
            out.push(Sprite {
                id: SpriteId::ChargeCell(i as u8),
                tile,
                x: px(tuning.charge_bar_pos.x) + i as i32 * TILE_SIZE,
                y: px(tuning.charge_bar_pos.y),
            });
        }
    }

    if state.pumpkin.visible() {
        out.push(Sprite {
            id: SpriteId::Pumpkin,
            tile: state.pumpkin.tile(),
            x: px(state.pumpkin.pos.x),
            y: px(state.pumpkin.pos.y),
        });
    }
}

/// Whether the host should draw the title overlay
pub fn title_visible(state: &GameState) -> bool {
    state.phase == GamePhase::Title
}
