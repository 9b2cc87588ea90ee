use std::io;

/// Errors surfaced to whoever drives the machine.
///
/// Everything that can go wrong while executing is absorbed by the
/// interpreter instead, so any byte sequence remains runnable.
#[derive(Debug, thiserror::Error)]
pub enum Chip8Error {
    #[error("unable to read ROM: {0}")]
    Load(#[from] io::Error),

    #[error("key {0:#X} is not on the keypad")]
    InvalidKey(u8),
}

/// A CALL with a full stack or a RET with an empty one.
/// Both are treated as no-ops; this only exists to be logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackFault {
    #[error("stack overflow")]
    Overflow,

    #[error("stack underflow")]
    Underflow,
}
