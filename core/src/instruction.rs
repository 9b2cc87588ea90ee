use rand::RngCore;

use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// What a single step did, from the host's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    Continued,
    /// The machine is parked until a key press is written to Vx.
    AwaitingKey(u8),
    /// Nothing matched; the opcode was skipped.
    UnknownOpcode(u16),
}

/// Executes one decoded instruction against the machine state.
/// The program counter already points past the opcode.
pub type Operation = fn(op: Opcode, state: &mut State, rng: &mut dyn RngCore) -> StepResult;

/// Picks an instruction out of the family sharing a major nibble.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    /// The major nibble alone identifies the instruction.
    Any,
    /// `[___n]` must match.
    N(u8),
    /// `[__kk]` must match.
    Kk(u8),
}

impl Selector {
    fn matches(self, op: Opcode) -> bool {
        match self {
            Selector::Any => true,
            Selector::N(n) => op.n() == n,
            Selector::Kk(kk) => op.kk() == kk,
        }
    }
}

/// Describes one instruction: how it's recognised and what it does.
pub struct Instruction {
    pub mnemonic: &'static str,
    pub major: u8,
    pub selector: Selector,
    pub execute: Operation,
}

impl Instruction {
    pub fn matches(&self, op: Opcode) -> bool {
        op.major() == self.major && self.selector.matches(op)
    }
}

macro_rules! instructions {
    ($($mnemonic:literal => ($major:literal, $selector:expr, $execute:ident)),* $(,)?) => {
        &[$(Instruction {
            mnemonic: $mnemonic,
            major: $major,
            selector: $selector,
            execute: $execute,
        }),*]
    };
}

use Selector::{Any, Kk, N};

/// Every instruction the interpreter understands, keyed by (major nibble, selector).
pub static INSTRUCTIONS: &[Instruction] = instructions![
    "CLS" => (0x0, Kk(0xE0), clr),
    "RET" => (0x0, Kk(0xEE), rts),
    "JP addr" => (0x1, Any, jump),
    "CALL addr" => (0x2, Any, call),
    "SE Vx, byte" => (0x3, Any, ske),
    "SNE Vx, byte" => (0x4, Any, skne),
    "SE Vx, Vy" => (0x5, Any, skre),
    "LD Vx, byte" => (0x6, Any, load),
    "ADD Vx, byte" => (0x7, Any, add),
    "LD Vx, Vy" => (0x8, N(0x0), mv),
    "OR Vx, Vy" => (0x8, N(0x1), or),
    "AND Vx, Vy" => (0x8, N(0x2), and),
    "XOR Vx, Vy" => (0x8, N(0x3), xor),
    "ADD Vx, Vy" => (0x8, N(0x4), addr),
    "SUB Vx, Vy" => (0x8, N(0x5), sub),
    "SHR Vx" => (0x8, N(0x6), shr),
    "SUBN Vx, Vy" => (0x8, N(0x7), subn),
    "SHL Vx" => (0x8, N(0xE), shl),
    "SNE Vx, Vy" => (0x9, Any, skrne),
    "LD I, addr" => (0xA, Any, loadi),
    "JP V0, addr" => (0xB, Any, jumpi),
    "RND Vx, byte" => (0xC, Any, rand),
    "DRW Vx, Vy, n" => (0xD, Any, draw),
    "SKP Vx" => (0xE, Kk(0x9E), skpr),
    "SKNP Vx" => (0xE, Kk(0xA1), skup),
    "LD Vx, DT" => (0xF, Kk(0x07), moved),
    "LD Vx, K" => (0xF, Kk(0x0A), keyd),
    "LD DT, Vx" => (0xF, Kk(0x15), loads),
    "LD ST, Vx" => (0xF, Kk(0x18), ld),
    "ADD I, Vx" => (0xF, Kk(0x1E), addi),
    "LD F, Vx" => (0xF, Kk(0x29), ldspr),
    "LD B, Vx" => (0xF, Kk(0x33), bcd),
    "LD [I], Vx" => (0xF, Kk(0x55), stor),
    "LD Vx, [I]" => (0xF, Kk(0x65), read),
];

/// Selects the correct Instruction for a given Opcode
pub fn decode(op: Opcode) -> Option<&'static Instruction> {
    INSTRUCTIONS.iter().find(|instruction| instruction.matches(op))
}
