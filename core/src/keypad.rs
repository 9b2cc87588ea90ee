use crate::constants::KEY_COUNT;

/// Whether the interpreter may fetch, or is parked on a key-wait for register Vx.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Running,
    AwaitingKey(u8),
}

/// # Keypad
/// Tracks the pressed status of keys 0..F.
/// Emulation halts in `Mode::AwaitingKey` until a key's value is written to the waiting register.
#[derive(Clone, Debug)]
pub struct Keypad {
    keys: [bool; KEY_COUNT],
    pub mode: Mode,
}

impl Keypad {
    pub fn new() -> Self {
        Keypad {
            keys: [false; KEY_COUNT],
            mode: Mode::Running,
        }
    }

    /// Keys past 0xF don't exist and are never down.
    pub fn is_down(&self, key: u8) -> bool {
        self.keys.get(key as usize).copied().unwrap_or(false)
    }

    /// Records a key transition.
    /// Returns the register waiting on this key, if the press completes a key-wait.
    pub fn set(&mut self, key: u8, down: bool) -> Option<u8> {
        if let Some(pressed) = self.keys.get_mut(key as usize) {
            *pressed = down;
        }
        match self.mode {
            Mode::AwaitingKey(x) if down => {
                self.mode = Mode::Running;
                Some(x)
            }
            _ => None,
        }
    }

    pub fn await_key(&mut self, x: u8) {
        self.mode = Mode::AwaitingKey(x);
    }

    pub fn release_all(&mut self) {
        self.keys = [false; KEY_COUNT];
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}
