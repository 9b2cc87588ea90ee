use crate::constants::{MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET};

/// # Memory
/// 4096 bytes of addressable memory.
///
/// - 0x000..0x050 holds the sprite sheet
/// - 0x200.. holds the loaded program
///
/// Addresses wrap at 4096, so no access ever leaves the store.
#[derive(Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        bytes[..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
        Memory { bytes }
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[wrap(addr)]
    }

    pub fn write(&mut self, addr: u16, byte: u8) {
        self.bytes[wrap(addr)] = byte;
    }

    /// Reads the big-endian word at `addr`.
    /// Opcodes are 16 bits but memory is stored as bytes, so two subsequent bytes are combined.
    pub fn read_word(&self, addr: u16) -> u16 {
        let left = u16::from(self.read(addr));
        let right = u16::from(self.read(addr.wrapping_add(1)));
        left << 8 | right
    }

    /// Copies a program in at `PROGRAM_START`.
    /// Anything that doesn't fit is dropped; returns how many bytes were stored.
    pub fn load_program(&mut self, program: &[u8]) -> usize {
        let start = PROGRAM_START as usize;
        let len = program.len().min(MEMORY_SIZE - start);
        self.bytes[start..start + len].copy_from_slice(&program[..len]);
        len
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap(addr: u16) -> usize {
    addr as usize % MEMORY_SIZE
}
