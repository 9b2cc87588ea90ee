use crate::constants::{FLAG, PROGRAM_START, REGISTER_COUNT, STACK_DEPTH};
use crate::error::StackFault;

/// # Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry flag
/// - (i) a 16-bit memory address register, of which 12 bits are meaningful
/// - (pc) a 16-bit program counter pointing at the next opcode to fetch
/// - (stack) 16 return addresses, with (sp) counting how many are in use
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registers {
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    stack: [u16; STACK_DEPTH],
    sp: usize,
}

impl Registers {
    pub fn new() -> Self {
        Registers {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            stack: [0; STACK_DEPTH],
            sp: 0,
        }
    }

    pub fn get(&self, x: u8) -> u8 {
        self.v[x as usize]
    }

    pub fn set(&mut self, x: u8, value: u8) {
        self.v[x as usize] = value;
    }

    pub fn set_flag(&mut self, flag: bool) {
        self.v[FLAG] = u8::from(flag);
    }

    pub fn flag(&self) -> u8 {
        self.v[FLAG]
    }

    /// Moves past the current opcode, or past the next one as well when skipping.
    pub fn advance(&mut self) {
        self.pc = self.pc.wrapping_add(2);
    }

    pub fn sp(&self) -> usize {
        self.sp
    }

    /// STACK.push(addr)
    /// Leaves the stack untouched when all 16 slots are in use.
    pub fn push(&mut self, addr: u16) -> Result<(), StackFault> {
        if self.sp >= STACK_DEPTH {
            return Err(StackFault::Overflow);
        }
        self.stack[self.sp] = addr;
        self.sp += 1;
        Ok(())
    }

    /// STACK.pop()
    pub fn pop(&mut self) -> Result<u16, StackFault> {
        if self.sp == 0 {
            return Err(StackFault::Underflow);
        }
        self.sp -= 1;
        Ok(self.stack[self.sp])
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_program_start() {
        let registers = Registers::new();
        assert_eq!(registers.pc, 0x200);
        assert_eq!(registers.sp(), 0);
    }

    #[test]
    fn test_push_then_pop() {
        let mut registers = Registers::new();
        registers.push(0x0ABC).unwrap();
        registers.push(0x0DEF).unwrap();
        assert_eq!(registers.pop(), Ok(0x0DEF));
        assert_eq!(registers.pop(), Ok(0x0ABC));
    }

    #[test]
    fn test_push_saturates() {
        let mut registers = Registers::new();
        for addr in 0..STACK_DEPTH as u16 {
            registers.push(addr).unwrap();
        }
        assert_eq!(registers.push(0xFFF), Err(StackFault::Overflow));
        assert_eq!(registers.sp(), STACK_DEPTH);
        assert_eq!(registers.pop(), Ok(0xF));
    }

    #[test]
    fn test_pop_empty() {
        let mut registers = Registers::new();
        assert_eq!(registers.pop(), Err(StackFault::Underflow));
        assert_eq!(registers.sp(), 0);
    }

    #[test]
    fn test_set_flag() {
        let mut registers = Registers::new();
        registers.set_flag(true);
        assert_eq!(registers.flag(), 0x1);
        registers.set_flag(false);
        assert_eq!(registers.flag(), 0x0);
    }
}
