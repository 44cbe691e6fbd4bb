//! Finished target machine programs.

use std::fmt;

use brang_core::Instruction;

/// How often each instruction was emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstructionStats {
    counts: [usize; 8],
}

impl InstructionStats {
    fn slot(instruction: Instruction) -> usize {
        match instruction {
            Instruction::MoveRight => 0,
            Instruction::MoveLeft => 1,
            Instruction::Increment => 2,
            Instruction::Decrement => 3,
            Instruction::LoopStart => 4,
            Instruction::LoopEnd => 5,
            Instruction::Write => 6,
            Instruction::Read => 7,
        }
    }

    pub(crate) fn record(&mut self, instruction: Instruction) {
        self.counts[Self::slot(instruction)] += 1;
    }

    /// Number of times `instruction` was emitted.
    pub fn count(&self, instruction: Instruction) -> usize {
        self.counts[Self::slot(instruction)]
    }

    /// Total command characters.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Right moves minus left moves.
    pub fn net_displacement(&self) -> isize {
        self.count(Instruction::MoveRight) as isize - self.count(Instruction::MoveLeft) as isize
    }
}

/// A complete emitted program.
///
/// The text contains command characters plus cosmetic line breaks. Any
/// consumer must treat non-command characters as no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    text: String,
    stats: InstructionStats,
}

impl Program {
    pub(crate) fn new(text: String, stats: InstructionStats) -> Self {
        Self { text, stats }
    }

    /// The program text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the program, returning its text.
    pub fn into_string(self) -> String {
        self.text
    }

    /// The command instructions, skipping everything else.
    pub fn instructions(&self) -> impl Iterator<Item = Instruction> + '_ {
        self.text.chars().filter_map(Instruction::from_char)
    }

    /// Number of command characters.
    pub fn command_count(&self) -> usize {
        self.stats.total()
    }

    /// Per-instruction statistics.
    pub fn stats(&self) -> &InstructionStats {
        &self.stats
    }

    /// Final head offset obtained by replaying only the motion instructions.
    pub fn net_motion(&self) -> isize {
        self.instructions().map(Instruction::displacement).sum()
    }

    /// Whether every `[` has a matching `]`.
    pub fn is_balanced(&self) -> bool {
        let mut depth = 0usize;
        for instruction in self.instructions() {
            match instruction {
                Instruction::LoopStart => depth += 1,
                Instruction::LoopEnd => match depth.checked_sub(1) {
                    Some(d) => depth = d,
                    None => return false,
                },
                _ => {}
            }
        }
        depth == 0
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
