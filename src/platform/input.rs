//! Input controls and per-tick sampling

use crate::sim::TickInput;

/// Logical controls the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    MoveLeft,
    MoveRight,
    Jump,
    Fire,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::MoveLeft,
        Control::MoveRight,
        Control::Jump,
        Control::Fire,
    ];

    /// Map a `KeyboardEvent.code` string to a control
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Control::MoveLeft),
            "ArrowRight" => Some(Control::MoveRight),
            "Space" => Some(Control::Jump),
            "KeyZ" => Some(Control::Fire),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Control::MoveLeft => 0,
            Control::MoveRight => 1,
            Control::Jump => 2,
            Control::Fire => 3,
        }
    }
}

/// Anything that can report whether a control is held right now
pub trait InputSource {
    fn is_held(&self, control: Control) -> bool;
}

/// Held-key tracker fed by key down/up events
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: [bool; 4],
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press. Returns false for keys that map to no control.
    pub fn key_down(&mut self, code: &str) -> bool {
        self.set(code, true)
    }

    /// Handle a key release. Returns false for keys that map to no control.
    pub fn key_up(&mut self, code: &str) -> bool {
        self.set(code, false)
    }

    pub fn set_held(&mut self, control: Control, held: bool) {
        self.held[control.index()] = held;
    }

    /// Release everything (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.held = [false; 4];
    }

    fn set(&mut self, code: &str, held: bool) -> bool {
        match Control::from_key_code(code) {
            Some(control) => {
                self.set_held(control, held);
                true
            }
            None => false,
        }
    }
}

impl InputSource for KeyboardState {
    fn is_held(&self, control: Control) -> bool {
        self.held[control.index()]
    }
}

/// Sample every control once for the coming tick
pub fn sample(source: &dyn InputSource) -> TickInput {
    TickInput {
        move_left: source.is_held(Control::MoveLeft),
        move_right: source.is_held(Control::MoveRight),
        jump: source.is_held(Control::Jump),
        fire: source.is_held(Control::Fire),
    }
}
