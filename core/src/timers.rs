/// # Timers
/// Two 8-bit countdown timers (delay & sound).
/// They decrement once per tick and stop at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    /// The host should be beeping while this is true.
    pub fn is_sounding(&self) -> bool {
        self.sound > 0
    }
}
