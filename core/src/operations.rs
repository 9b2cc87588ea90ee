use log::warn;
use rand::{Rng, RngCore};

use crate::constants::{FLAG, GLYPH_HEIGHT};
use crate::instruction::StepResult;
use crate::opcode::Opcode;
use crate::state::State;

// The program counter has already been moved past `op` by the time any of these run,
// so "skip" means advancing it once more and `state.registers.pc` is the return address.

/// clear
pub fn clr(_op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    state.frame_buffer.clear();
    StepResult::Continued
}

/// PC = STACK.pop()
pub fn rts(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    match state.registers.pop() {
        Ok(addr) => state.registers.pc = addr,
        Err(fault) => warn!("{} ignored: {} at {:#05X}", op, fault, state.registers.pc),
    }
    StepResult::Continued
}

/// PC = addr
pub fn jump(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    state.registers.pc = op.nnn();
    StepResult::Continued
}

/// STACK.push(PC); PC = addr
pub fn call(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let registers = &mut state.registers;
    match registers.push(registers.pc) {
        Ok(()) => registers.pc = op.nnn(),
        Err(fault) => warn!("{} ignored: {} at {:#05X}", op, fault, registers.pc),
    }
    StepResult::Continued
}

fn skip_if(state: &mut State, condition: bool) -> StepResult {
    if condition {
        state.registers.advance();
    }
    StepResult::Continued
}

/// if Vx == kk then pc += 2
pub fn ske(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let condition = state.registers.get(op.x()) == op.kk();
    skip_if(state, condition)
}

/// if Vx != kk then pc += 2
pub fn skne(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let condition = state.registers.get(op.x()) != op.kk();
    skip_if(state, condition)
}

/// if Vx == Vy then pc += 2
pub fn skre(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let condition = state.registers.get(op.x()) == state.registers.get(op.y());
    skip_if(state, condition)
}

/// Vx = kk
pub fn load(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    state.registers.set(op.x(), op.kk());
    StepResult::Continued
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but implicitly drop it
pub fn add(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let res = state.registers.get(op.x()).wrapping_add(op.kk());
    state.registers.set(op.x(), res);
    StepResult::Continued
}

/// Vx = Vy
pub fn mv(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let vy = state.registers.get(op.y());
    state.registers.set(op.x(), vy);
    StepResult::Continued
}

/// Vx |= Vy
pub fn or(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let vy = state.registers.get(op.y());
    state.registers.v[op.x() as usize] |= vy;
    StepResult::Continued
}

/// Vx &= Vy
pub fn and(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let vy = state.registers.get(op.y());
    state.registers.v[op.x() as usize] &= vy;
    StepResult::Continued
}

/// Vx ^= Vy
pub fn xor(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let vy = state.registers.get(op.y());
    state.registers.v[op.x() as usize] ^= vy;
    StepResult::Continued
}

// The ALU operations below compute their result before touching VF, then write VF
// before Vx. With x == 0xF the result therefore wins over the flag.

/// Vx += Vy; VF = overflow
pub fn addr(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let (res, over) = state
        .registers
        .get(op.x())
        .overflowing_add(state.registers.get(op.y()));
    state.registers.set_flag(over);
    state.registers.set(op.x(), res);
    StepResult::Continued
}

/// Vx -= Vy; VF = !underflow
pub fn sub(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let (res, under) = state
        .registers
        .get(op.x())
        .overflowing_sub(state.registers.get(op.y()));
    state.registers.set_flag(!under);
    state.registers.set(op.x(), res);
    StepResult::Continued
}

/// Vx >>= 1; VF = lsb
pub fn shr(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let vx = state.registers.get(op.x());
    state.registers.v[FLAG] = vx & 0x1;
    state.registers.set(op.x(), vx >> 1);
    StepResult::Continued
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let (res, under) = state
        .registers
        .get(op.y())
        .overflowing_sub(state.registers.get(op.x()));
    state.registers.set_flag(!under);
    state.registers.set(op.x(), res);
    StepResult::Continued
}

/// Vx <<= 1; VF = msb
pub fn shl(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let vx = state.registers.get(op.x());
    state.registers.v[FLAG] = vx >> 7;
    state.registers.set(op.x(), vx << 1);
    StepResult::Continued
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let condition = state.registers.get(op.x()) != state.registers.get(op.y());
    skip_if(state, condition)
}

/// I = addr
pub fn loadi(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    state.registers.i = op.nnn();
    StepResult::Continued
}

/// PC = V0 + addr
pub fn jumpi(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    state.registers.pc = op.nnn() + u16::from(state.registers.get(0x0));
    StepResult::Continued
}

/// Vx = rand_byte & kk
pub fn rand(op: Opcode, state: &mut State, rng: &mut dyn RngCore) -> StepResult {
    let rand_byte: u8 = rng.gen();
    state.registers.set(op.x(), rand_byte & op.kk());
    StepResult::Continued
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..n at position x, y on the FrameBuffer with wrapping.
/// Sets VF if any pixels were erased
pub fn draw(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let i = state.registers.i;
    let rows: Vec<u8> = (0..u16::from(op.n()))
        .map(|row| state.memory.read(i.wrapping_add(row)))
        .collect();
    // Reset the carry flag (used for collision detection)
    state.registers.set_flag(false);
    let x = state.registers.get(op.x()) as usize;
    let y = state.registers.get(op.y()) as usize;
    let collision = state.frame_buffer.draw_sprite(x, y, &rows);
    state.registers.set_flag(collision);
    StepResult::Continued
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let condition = state.keypad.is_down(state.registers.get(op.x()));
    skip_if(state, condition)
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let condition = !state.keypad.is_down(state.registers.get(op.x()));
    skip_if(state, condition)
}

/// Vx = DT
pub fn moved(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    state.registers.set(op.x(), state.timers.delay);
    StepResult::Continued
}

/// await keypress for Vx
/// The next key press writes Vx; until then the machine refuses to step.
pub fn keyd(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    state.keypad.await_key(op.x());
    StepResult::AwaitingKey(op.x())
}

/// DT = Vx
pub fn loads(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    state.timers.delay = state.registers.get(op.x());
    StepResult::Continued
}

/// ST = Vx
pub fn ld(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    state.timers.sound = state.registers.get(op.x());
    StepResult::Continued
}

/// I += Vx
pub fn addi(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let vx = u16::from(state.registers.get(op.x()));
    state.registers.i = state.registers.i.wrapping_add(vx);
    StepResult::Continued
}

/// I = Vx * 5
/// Set I to the memory address of the sprite for Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    state.registers.i = u16::from(state.registers.get(op.x())) * GLYPH_HEIGHT;
    StepResult::Continued
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let vx = state.registers.get(op.x());
    let i = state.registers.i;
    state.memory.write(i, vx / 100);
    state.memory.write(i.wrapping_add(1), vx / 10 % 10);
    state.memory.write(i.wrapping_add(2), vx % 10);
    StepResult::Continued
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let i = state.registers.i;
    for offset in 0..=op.x() {
        let value = state.registers.get(offset);
        state.memory.write(i.wrapping_add(u16::from(offset)), value);
    }
    StepResult::Continued
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(op: Opcode, state: &mut State, _rng: &mut dyn RngCore) -> StepResult {
    let i = state.registers.i;
    for offset in 0..=op.x() {
        let value = state.memory.read(i.wrapping_add(u16::from(offset)));
        state.registers.set(offset, value);
    }
    StepResult::Continued
}
