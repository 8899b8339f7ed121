//! Gamepad edge detection
//!
//! Decoded controller reports arrive as a bitset over the logical controls.
//! This module turns raw down/up levels into Released/Pressed/Held edges for
//! the state machine. A missing device reads as an empty report, so gameplay
//! degrades to "nothing pressed" instead of halting.

/// Logical controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Begin a game from the title screen
    Start,
    /// Wind up the catapult; release to toss
    Charge,
    /// Nudge the launch angle up
    AimUp,
    /// Nudge the launch angle down
    AimDown,
}

impl Button {
    pub const ALL: [Button; 4] = [
        Button::Start,
        Button::Charge,
        Button::AimUp,
        Button::AimDown,
    ];

    fn index(self) -> usize {
        match self {
            Button::Start => 0,
            Button::Charge => 1,
            Button::AimUp => 2,
            Button::AimDown => 3,
        }
    }

    fn bit(self) -> u8 {
        1 << self.index()
    }
}

/// One decoded controller report: the set of controls currently down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlReport(u8);

impl ControlReport {
    pub const EMPTY: ControlReport = ControlReport(0);

    pub fn with(self, button: Button) -> Self {
        Self(self.0 | button.bit())
    }

    pub fn contains(self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    /// Merge two reports; a control down in either is down in the result
    pub fn union(self, other: ControlReport) -> Self {
        Self(self.0 | other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Edge-detected state of one control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Released,
    /// Down, and was Released at the previous poll; lasts exactly one poll
    Pressed,
    /// Down for two or more consecutive polls
    Held,
}

/// Per-control edge detector over polled reports
#[derive(Debug, Clone)]
pub struct InputSampler {
    states: [ButtonState; Button::ALL.len()],
    /// Consecutive down polls per control, for dwell filtering
    dwell: [u8; Button::ALL.len()],
    /// Down polls required before a press registers (1 = no filtering)
    min_dwell: u8,
}

impl InputSampler {
    pub fn new(min_dwell: u8) -> Self {
        Self {
            states: [ButtonState::Released; Button::ALL.len()],
            dwell: [0; Button::ALL.len()],
            min_dwell: min_dwell.max(1),
        }
    }

    /// Fold one report into the edge state. `None` means no device is
    /// connected and reads as an empty report.
    pub fn poll(&mut self, report: Option<ControlReport>) {
        let report = report.unwrap_or(ControlReport::EMPTY);
        for button in Button::ALL {
            let i = button.index();
            let down = report.contains(button);
            self.dwell[i] = if down {
                self.dwell[i].saturating_add(1)
            } else {
                0
            };
            self.states[i] = match (self.states[i], down) {
                (_, false) => ButtonState::Released,
                (ButtonState::Released, true) if self.dwell[i] >= self.min_dwell => {
                    ButtonState::Pressed
                }
                // Still dwelling below the debounce threshold
                (ButtonState::Released, true) => ButtonState::Released,
                (ButtonState::Pressed | ButtonState::Held, true) => ButtonState::Held,
            };
        }
    }

    pub fn state(&self, button: Button) -> ButtonState {
        self.states[button.index()]
    }

    /// True only on the poll where the press edge fires
    pub fn pressed(&self, button: Button) -> bool {
        self.state(button) == ButtonState::Pressed
    }

    /// True while the control is down, press edge included
    pub fn down(&self, button: Button) -> bool {
        matches!(
            self.state(button),
            ButtonState::Pressed | ButtonState::Held
        )
    }
}
