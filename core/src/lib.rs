pub use chip8::Chip8;
pub use constants::{key_index, KEYMAP};
pub use error::{Chip8Error, StackFault};
pub use frame::Frame;
pub use instruction::StepResult;
pub use keypad::Mode;
pub use opcode::Opcode;

mod chip8;
pub mod constants;
mod error;
pub mod frame;
pub mod instruction;
pub mod keypad;
pub mod memory;
mod opcode;
mod operations;
pub mod registers;
pub mod state;
pub mod timers;
