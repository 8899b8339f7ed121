//! Once-per-frame game update
//!
//! The order inside a frame is fixed: input edges were sampled before entry,
//! then phase logic and flight physics run, then every animation advances.
//! Sprites therefore always reflect the decisions made in the same frame.

use super::input::{Button, InputSampler};
use super::physics::StepResult;
use super::state::{GameEvent, GamePhase, GameState, ImpactOutcome};
use crate::tuning::Tuning;

/// Advance the game by one fixed frame step
pub fn tick(state: &mut GameState, input: &InputSampler, tuning: &Tuning, dt: f32) {
    state.frame += 1;

    match state.phase {
        GamePhase::Title => title(state, input, tuning),
        GamePhase::Charging => charging(state, input, tuning),
        GamePhase::Flight => flight(state, tuning, dt),
        GamePhase::Impact => impact(state),
        GamePhase::Reset => reset(state, tuning),
    }

    // Animations advance last, one frame each
    state.catapult.update(1);
    for skeleton in &mut state.skeletons {
        skeleton.update(1, tuning);
    }
    state.pumpkin.update(1);
}

fn title(state: &mut GameState, input: &InputSampler, tuning: &Tuning) {
    if input.pressed(Button::Start) {
        state.pumpkins_left = tuning.pumpkins;
        state.score = 0;
        state.wave = 0;
        state.outcome = None;
        state.impact_frames = 0;
        state.catapult.new_game(tuning);
        state.pumpkin.hide();
        state.projectile.in_flight = false;
        state.spawn_wave(tuning);
        state.push_event(GameEvent::GameStarted);
        state.phase = GamePhase::Charging;
        log::info!("Game started (seed {})", state.seed);
    }
}

fn charging(state: &mut GameState, input: &InputSampler, tuning: &Tuning) {
    if input.pressed(Button::AimUp) {
        state.catapult.nudge_aim(tuning.aim_step_deg, tuning);
    }
    if input.pressed(Button::AimDown) {
        state.catapult.nudge_aim(-tuning.aim_step_deg, tuning);
    }

    if input.down(Button::Charge) {
        state
            .catapult
            .add_charge(tuning.charge_per_frame, tuning.max_charge);
    } else if state.catapult.charge > 0 {
        // Button came back up with power wound on: toss
        let charge = state.catapult.charge;
        state.projectile.launch(charge, state.catapult.aim_deg, tuning);
        state.pumpkin.fly(state.projectile.pos);
        state.catapult.toss(tuning);
        state.pumpkins_left = state.pumpkins_left.saturating_sub(1);
        state.push_event(GameEvent::PumpkinLaunched { charge });
        state.phase = GamePhase::Flight;
        log::debug!(
            "Toss: charge {charge}, aim {:.0} deg, vel ({:.2}, {:.2})",
            state.catapult.aim_deg,
            state.projectile.vel.x,
            state.projectile.vel.y
        );
    }
}

fn flight(state: &mut GameState, tuning: &Tuning, dt: f32) {
    let result = state.projectile.step(dt, tuning);
    state.pumpkin.follow(state.projectile.pos);

    // First overlapping live skeleton in slot order gets the credit
    let pumpkin_box = state.projectile.hitbox();
    let hit = state.skeletons.iter().position(|skeleton| {
        skeleton
            .hitbox()
            .is_some_and(|hb| hb.overlaps(&pumpkin_box))
    });

    if let Some(slot) = hit {
        state.skeletons[slot].kill(tuning);
        state.score += tuning.skeleton_points;
        state.projectile.in_flight = false;
        state.pumpkin.hide();
        state.outcome = Some(ImpactOutcome::Hit { slot: slot as u8 });
        state.push_event(GameEvent::SkeletonDown { slot: slot as u8 });
        state.phase = GamePhase::Impact;
        log::debug!("Skeleton {slot} down, score {}", state.score);
    } else if result == StepResult::LeftPlayfield {
        // Out through the bottom means it came down on the grass
        if state.projectile.pos.y >= tuning.playfield.max.y {
            state.pumpkin.splat(state.projectile.pos.x, tuning);
        } else {
            state.pumpkin.hide();
        }
        state.outcome = Some(ImpactOutcome::Miss);
        state.impact_frames = tuning.impact_hold_frames;
        state.push_event(GameEvent::TossMissed);
        state.phase = GamePhase::Impact;
        log::debug!(
            "Missed at ({:.0}, {:.0})",
            state.projectile.pos.x,
            state.projectile.pos.y
        );
    }
}

fn impact(state: &mut GameState) {
    match state.outcome {
        Some(ImpactOutcome::Hit { slot }) => {
            // Wait for the sink animation to finish
            if state.skeletons[slot as usize].down() {
                state.phase = GamePhase::Reset;
            }
        }
        Some(ImpactOutcome::Miss) => {
            state.impact_frames = state.impact_frames.saturating_sub(1);
            if state.impact_frames == 0 {
                state.phase = GamePhase::Reset;
            }
        }
        // Impact without an outcome cannot happen; recover by moving on
        None => state.phase = GamePhase::Reset,
    }
}

fn reset(state: &mut GameState, tuning: &Tuning) {
    state.catapult.reload();
    state.pumpkin.hide();
    state.projectile.in_flight = false;
    state.outcome = None;
    state.impact_frames = 0;

    if state.all_skeletons_down() {
        state.wave += 1;
        state.spawn_wave(tuning);
        state.push_event(GameEvent::WaveCleared { wave: state.wave });
        log::info!("Wave {} cleared", state.wave);
    }

    if state.pumpkins_left == 0 {
        state.push_event(GameEvent::OutOfPumpkins { score: state.score });
        state.phase = GamePhase::Title;
        log::info!("Out of pumpkins: final score {}", state.score);
    } else {
        state.phase = GamePhase::Charging;
    }
}
