//! Engine facade
//!
//! One owned context wiring the frame clock, input edge detection, and the
//! game state together. The host calls [`Engine::tick`] as often as it
//! likes with its millisecond counter and the latest gamepad report; the
//! engine steps at most one simulation frame per call and reports when the
//! scene needs repainting.

use super::clock::FrameScheduler;
use super::input::{ControlReport, InputSampler};
use super::sprites::{self, Sprite};
use super::state::{GameEvent, GameState};
use super::tick;
use crate::consts::FRAME_DT;
use crate::tuning::{Tuning, TuningError};

pub struct Engine {
    tuning: Tuning,
    clock: FrameScheduler,
    sampler: InputSampler,
    state: GameState,
    /// Reports merged since the last simulated frame, so a press shorter
    /// than the frame interval still lands on the next poll
    pending: Option<ControlReport>,
}

impl Engine {
    /// Validates the tuning once; after that the engine is infallible
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        log::info!(
            "Engine up: seed {seed}, {} skeleton slots, {} pumpkins, {} ms frames",
            tuning.skeleton_slots.len(),
            tuning.pumpkins,
            tuning.frame_interval_ms
        );
        let state = GameState::new(&tuning, seed);
        Ok(Self {
            clock: FrameScheduler::new(tuning.frame_interval_ms),
            sampler: InputSampler::new(tuning.press_dwell_polls),
            state,
            pending: None,
            tuning,
        })
    }

    /// Feed the host clock and the latest decoded gamepad report (`None`
    /// when no device is connected). Returns true when a frame was simulated
    /// and the scene should be repainted.
    pub fn tick(&mut self, now_ms: u32, report: Option<ControlReport>) -> bool {
        if let Some(report) = report {
            self.pending = Some(
                self.pending
                    .unwrap_or(ControlReport::EMPTY)
                    .union(report),
            );
        }
        if !self.clock.tick(now_ms) {
            return false;
        }
        self.sampler.poll(self.pending.take());
        tick::tick(&mut self.state, &self.sampler, &self.tuning, FRAME_DT);
        true
    }

    /// This frame's draw list, back to front
    pub fn sprites(&self, out: &mut Vec<Sprite>) {
        sprites::collect(&self.state, &self.tuning, out);
    }

    /// Whether the host should draw the title overlay
    pub fn title_visible(&self) -> bool {
        sprites::title_visible(&self.state)
    }

    /// Queued gameplay events since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.state.take_events()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::Button;

    #[test]
    fn test_rejects_invalid_tuning() {
        let tuning = Tuning {
            frame_interval_ms: 0,
            ..Tuning::default()
        };
        assert!(matches!(
            Engine::new(tuning, 0),
            Err(TuningError::ZeroFrameInterval)
        ));
    }

    #[test]
    fn test_reports_between_frames_are_merged() {
        let tuning = Tuning::default();
        let mut engine = Engine::new(tuning, 1).unwrap();
        engine.tick(0, None);
        // A tap that fits entirely between two frames
        engine.tick(10, Some(ControlReport::EMPTY.with(Button::Start)));
        engine.tick(20, Some(ControlReport::EMPTY));
        assert!(engine.tick(40, Some(ControlReport::EMPTY)));
        assert_eq!(
            engine.take_events(),
            vec![GameEvent::GameStarted],
            "a sub-frame tap must still register"
        );
    }
}
