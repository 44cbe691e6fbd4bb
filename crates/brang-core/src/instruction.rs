//! Target machine instruction set.
//!
//! The target is a single-tape, single-pointer machine with unary increment.
//! Each instruction is a single ASCII character; anything else in a program
//! text is a comment and must be ignored by interpreters.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// A target machine command.
///
/// The discriminant of each variant is the ASCII byte of its command
/// character, so conversion to and from the textual form is a plain cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Instruction {
    // =========================================================================
    // Head Motion
    // =========================================================================
    /// Move the head one cell right (`>`).
    MoveRight = 0x3E,
    /// Move the head one cell left (`<`).
    MoveLeft = 0x3C,

    // =========================================================================
    // Cell Mutation
    // =========================================================================
    /// Increment the cell under the head, wrapping at the cell width (`+`).
    Increment = 0x2B,
    /// Decrement the cell under the head, wrapping at the cell width (`-`).
    Decrement = 0x2D,

    // =========================================================================
    // Control
    // =========================================================================
    /// Skip past the matching `]` if the current cell is zero (`[`).
    LoopStart = 0x5B,
    /// Jump back to the matching `[` if the current cell is non-zero (`]`).
    LoopEnd = 0x5D,

    // =========================================================================
    // I/O
    // =========================================================================
    /// Write the current cell to the output (`.`).
    Write = 0x2E,
    /// Read one value from the input into the current cell (`,`).
    Read = 0x2C,
}

impl Instruction {
    /// All instructions, in a stable order.
    pub const ALL: [Instruction; 8] = [
        Instruction::MoveRight,
        Instruction::MoveLeft,
        Instruction::Increment,
        Instruction::Decrement,
        Instruction::LoopStart,
        Instruction::LoopEnd,
        Instruction::Write,
        Instruction::Read,
    ];

    /// The command character for this instruction.
    pub fn as_char(self) -> char {
        char::from(u8::from(self))
    }

    /// Decode a command character.
    ///
    /// Returns `None` for every non-command character, which interpreters
    /// treat as a no-op.
    pub fn from_char(ch: char) -> Option<Self> {
        u8::try_from(ch)
            .ok()
            .and_then(|byte| Instruction::try_from(byte).ok())
    }

    /// Whether this instruction moves the head.
    pub fn is_motion(self) -> bool {
        matches!(self, Instruction::MoveRight | Instruction::MoveLeft)
    }

    /// Signed head displacement caused by this instruction.
    pub fn displacement(self) -> isize {
        match self {
            Instruction::MoveRight => 1,
            Instruction::MoveLeft => -1,
            _ => 0,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
