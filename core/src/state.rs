use crate::frame::FrameBuffer;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::registers::Registers;
use crate::timers::Timers;

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// - `registers` V0..VF, I, the program counter and the call stack
/// - `timers` delay & sound, counting down at whatever rate the host ticks them
///
/// ## Memory
/// - 4096 bytes of addressable memory, sprite sheet first, program from 0x200
/// - 64x32 frame buffer
///
/// ## Input
/// - the pressed status of keys 0..F
/// - emulation may halt until a key's value is written to some register
#[derive(Clone)]
pub struct State {
    pub memory: Memory,
    pub registers: Registers,
    pub frame_buffer: FrameBuffer,
    pub keypad: Keypad,
    pub timers: Timers,
}

impl State {
    pub fn new() -> Self {
        State {
            memory: Memory::new(),
            registers: Registers::new(),
            frame_buffer: FrameBuffer::new(),
            keypad: Keypad::new(),
            timers: Timers::new(),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
