use std::io::Read;

use log::{info, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::KEY_COUNT;
use crate::error::Chip8Error;
use crate::frame::Frame;
use crate::instruction::{decode, StepResult};
use crate::keypad::Mode;
use crate::memory::Memory;
use crate::opcode::Opcode;
use crate::registers::Registers;
use crate::state::State;
use crate::timers::Timers;

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the random source behind `RND`
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU one instruction at a time
/// - advancing its timers
/// - inspecting its frame buffer for rendering by some display
///
/// Stepping and ticking are independent; how often each is called is up to the host.
pub struct Chip8 {
    state: State,
    rng: StdRng,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A machine whose `RND` results are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Chip8 {
            state: State::new(),
            rng,
        }
    }

    /// Copies a program into memory at 0x200, dropping whatever doesn't fit.
    /// Returns how many bytes were loaded.
    pub fn load_program(&mut self, program: &[u8]) -> usize {
        let loaded = self.state.memory.load_program(program);
        if loaded < program.len() {
            warn!(
                "program is {} bytes; only the first {} fit in memory",
                program.len(),
                loaded
            );
        }
        loaded
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<usize, Chip8Error> {
        let mut program = Vec::new();
        reader.read_to_end(&mut program)?;
        let loaded = self.load_program(&program);
        info!("loaded {} bytes", loaded);
        Ok(loaded)
    }

    /// Returns to the power-on state: empty memory apart from the sprite sheet,
    /// zeroed registers, blank screen, no keys held.
    pub fn reset(&mut self) {
        self.state = State::new();
    }

    /// Advances the CPU by a single instruction
    /// - does nothing while awaiting a keypress
    /// - otherwise fetches the opcode at the pc, moves the pc past it and executes it
    pub fn step(&mut self) -> StepResult {
        if let Mode::AwaitingKey(x) = self.state.keypad.mode {
            return StepResult::AwaitingKey(x);
        }

        let registers = &mut self.state.registers;
        let pc = registers.pc;
        let op = Opcode(self.state.memory.read_word(pc));
        registers.advance();

        match decode(op) {
            Some(instruction) => {
                trace!(
                    "{:03X}: {} {} v{:02X?} i{:03X}",
                    pc,
                    op,
                    instruction.mnemonic,
                    registers.v,
                    registers.i
                );
                (instruction.execute)(op, &mut self.state, &mut self.rng)
            }
            None => {
                warn!("unknown opcode {} at {:03X}", op, pc);
                StepResult::UnknownOpcode(op.0)
            }
        }
    }

    /// Counts both timers down by one, stopping at zero.
    pub fn tick(&mut self) {
        self.state.timers.tick();
    }

    /// Set the pressed status of key
    /// A press while awaiting a key writes the key to the waiting register and resumes execution.
    ///
    /// # Arguments
    /// * `key` the keypad index 0..F
    /// * `down` whether the key is now held
    pub fn set_key(&mut self, key: u8, down: bool) -> Result<(), Chip8Error> {
        if key as usize >= KEY_COUNT {
            return Err(Chip8Error::InvalidKey(key));
        }
        if let Some(x) = self.state.keypad.set(key, down) {
            trace!("key {:X} resumes wait on v{:X}", key, x);
            self.state.registers.set(x, key);
        }
        Ok(())
    }

    pub fn is_down(&self, key: u8) -> bool {
        self.state.keypad.is_down(key)
    }

    /// Lets go of every key, e.g. when the host loses focus.
    pub fn release_keys(&mut self) {
        self.state.keypad.release_all();
    }

    pub fn mode(&self) -> Mode {
        self.state.keypad.mode
    }

    pub fn snapshot(&self) -> Frame {
        self.state.frame_buffer.snapshot()
    }

    /// Returns the frame if the display should be redrawn
    pub fn take_frame(&mut self) -> Option<Frame> {
        self.state.frame_buffer.take()
    }

    pub fn registers(&self) -> &Registers {
        &self.state.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.state.memory
    }

    pub fn timers(&self) -> Timers {
        self.state.timers
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
