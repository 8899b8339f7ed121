//! Tile animation cycles
//!
//! Every actor owns one cycle: an ordered run of sprite sheet tiles stepped
//! by a per-tile hold timer. `Loop` wraps forever; the one-shot modes park on
//! the final tile and latch a completion signal the state machine collects
//! with [`AnimationCycle::take_completed`].

/// What happens at the final tile of a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    /// Wrap back to the first tile
    Loop,
    /// Park on the final tile; complete as soon as it is reached
    OnceThenHold,
    /// Park on the final tile; complete only after it has been shown for its
    /// full hold duration
    OnceThenSignal,
}

/// One running tile sequence
#[derive(Debug, Clone)]
pub struct AnimationCycle {
    frames: &'static [u8],
    index: usize,
    /// Simulation frames accrued toward the current tile's hold
    counter: u32,
    hold: u32,
    mode: LoopMode,
    completed: bool,
    signal_taken: bool,
}

impl AnimationCycle {
    /// `frames` must be non-empty. A zero `hold` is bumped to one frame,
    /// since it could never fill the counter.
    pub fn new(frames: &'static [u8], hold: u32, mode: LoopMode) -> Self {
        debug_assert!(!frames.is_empty());
        Self {
            frames,
            index: 0,
            counter: 0,
            hold: hold.max(1),
            mode,
            completed: false,
            signal_taken: false,
        }
    }

    /// Re-target the cycle and restart from the first tile
    pub fn play(&mut self, frames: &'static [u8], hold: u32, mode: LoopMode) {
        debug_assert!(!frames.is_empty());
        self.frames = frames;
        self.hold = hold.max(1);
        self.mode = mode;
        self.reset();
    }

    /// Back to the first tile with a cleared hold counter
    pub fn reset(&mut self) {
        self.index = 0;
        self.counter = 0;
        self.completed = false;
        self.signal_taken = false;
    }

    /// Tile to draw this frame
    pub fn current_tile(&self) -> u8 {
        // Index stays in bounds by construction; clamp anyway
        self.frames[self.index.min(self.frames.len() - 1)]
    }

    /// Whether a one-shot run has finished (latched until the next reset)
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Completion signal, delivered exactly once per run
    pub fn take_completed(&mut self) -> bool {
        if self.completed && !self.signal_taken {
            self.signal_taken = true;
            true
        } else {
            false
        }
    }

    /// Accrue `elapsed_frames` toward the hold timer and step tiles as holds
    /// fill. A one-tile sequence never changes tiles but still completes
    /// under the one-shot rules.
    pub fn advance(&mut self, elapsed_frames: u32) {
        let last = self.frames.len() - 1;
        if last == 0 {
            match self.mode {
                LoopMode::Loop => {}
                LoopMode::OnceThenHold => self.completed = true,
                LoopMode::OnceThenSignal => {
                    self.counter = self.counter.saturating_add(elapsed_frames).min(self.hold);
                    if self.counter >= self.hold {
                        self.completed = true;
                    }
                }
            }
            return;
        }

        self.counter = self.counter.saturating_add(elapsed_frames);
        while self.counter >= self.hold {
            match self.mode {
                LoopMode::Loop => {
                    self.counter -= self.hold;
                    self.index = (self.index + 1) % self.frames.len();
                }
                LoopMode::OnceThenHold => {
                    if self.index < last {
                        self.counter -= self.hold;
                        self.index += 1;
                        if self.index == last {
                            self.completed = true;
                        }
                    } else {
                        self.counter = self.hold;
                        break;
                    }
                }
                LoopMode::OnceThenSignal => {
                    if self.index < last {
                        self.counter -= self.hold;
                        self.index += 1;
                    } else {
                        // The final tile has now been shown for its full hold
                        self.completed = true;
                        self.counter = self.hold;
                        break;
                    }
                }
            }
        }
    }
}
