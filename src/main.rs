//! Headless demo
//!
//! Drives the engine with a synthetic millisecond clock and a scripted
//! gamepad, logging events until the pumpkins run out. Pass a tuning JSON
//! path to play with balance:
//!
//!     toss-o-lantern [tuning.json]

use std::process::ExitCode;

use toss_o_lantern::sim::{Button, ControlReport, GameEvent};
use toss_o_lantern::{Engine, Tuning};

fn load_tuning() -> Result<Tuning, String> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text =
                std::fs::read_to_string(&path).map_err(|e| format!("read {path}: {e}"))?;
            serde_json::from_str(&text).map_err(|e| format!("parse {path}: {e}"))
        }
        None => Ok(Tuning::default()),
    }
}

/// Scripted gamepad, indexed by simulated frame. Starts the game, nudges the
/// aim now and then, and winds up a different amount each toss.
fn script(frame: u64) -> Option<ControlReport> {
    if frame == 5 {
        return Some(ControlReport::EMPTY.with(Button::Start));
    }
    let round = frame / 150;
    let step = frame % 150;
    let wind_up = 5 + (round % 14);
    let report = if step == 2 && round.is_multiple_of(3) {
        ControlReport::EMPTY.with(Button::AimUp)
    } else if step == 2 {
        ControlReport::EMPTY.with(Button::AimDown)
    } else if (10..10 + wind_up).contains(&step) {
        ControlReport::EMPTY.with(Button::Charge)
    } else {
        ControlReport::EMPTY
    };
    Some(report)
}

fn main() -> ExitCode {
    env_logger::init();

    let tuning = match load_tuning() {
        Ok(tuning) => tuning,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut engine = match Engine::new(tuning, seed) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("bad tuning: {e}");
            return ExitCode::FAILURE;
        }
    };

    // The host polls faster than the frame interval, as real hardware would
    let mut now_ms = 0u32;
    let mut frame = 0u64;
    let mut batch = Vec::new();
    loop {
        now_ms = now_ms.wrapping_add(8);
        if engine.tick(now_ms, script(frame)) {
            frame += 1;
            engine.sprites(&mut batch);
            for event in engine.take_events() {
                log::info!("frame {frame}: {event:?} ({} sprites)", batch.len());
                if let GameEvent::OutOfPumpkins { score } = event {
                    log::info!("demo over, final score {score}");
                    return ExitCode::SUCCESS;
                }
            }
        }
        if frame > 20_000 {
            log::warn!("demo never ran out of pumpkins, giving up");
            return ExitCode::FAILURE;
        }
    }
}
