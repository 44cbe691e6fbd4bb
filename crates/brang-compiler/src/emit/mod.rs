//! Instruction emitter for the brang code generator.
//!
//! The [`InstructionEmitter`] owns the append-only output stream of a single
//! compilation unit. It knows nothing about the tape: callers decide which
//! instructions to write, the emitter only records them, keeps statistics
//! and wraps the text into lines.
//!
//! # Example
//!
//! ```
//! use brang_compiler::emit::InstructionEmitter;
//! use brang_core::Instruction;
//!
//! let mut emitter = InstructionEmitter::new(50);
//! emitter.emit_repeated(Instruction::Increment, 3);
//! emitter.emit(Instruction::Write);
//!
//! let program = emitter.finish();
//! assert_eq!(program.as_str(), "+++.");
//! ```

mod program;

use brang_core::Instruction;

pub use program::{InstructionStats, Program};

/// Emits target machine instructions as text.
#[derive(Debug)]
pub struct InstructionEmitter {
    /// Program text, including cosmetic line breaks
    text: String,

    /// Command characters written so far
    written: usize,

    /// Break the line every `line_width` commands (0 = never)
    line_width: usize,

    /// Per-instruction counts
    stats: InstructionStats,
}

impl InstructionEmitter {
    /// Create an emitter that wraps every `line_width` command characters.
    pub fn new(line_width: usize) -> Self {
        Self {
            text: String::new(),
            written: 0,
            line_width,
            stats: InstructionStats::default(),
        }
    }

    /// Emit a single instruction.
    pub fn emit(&mut self, instruction: Instruction) {
        self.text.push(instruction.as_char());
        self.stats.record(instruction);
        self.written += 1;
        if self.line_width != 0 && self.written % self.line_width == 0 {
            self.text.push('\n');
        }
    }

    /// Emit `count` copies of one instruction.
    pub fn emit_repeated(&mut self, instruction: Instruction, count: usize) {
        for _ in 0..count {
            self.emit(instruction);
        }
    }

    /// Emit a fixed instruction sequence.
    pub fn emit_sequence(&mut self, instructions: &[Instruction]) {
        for &instruction in instructions {
            self.emit(instruction);
        }
    }

    /// Number of command characters emitted so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Statistics for everything emitted so far.
    pub fn stats(&self) -> &InstructionStats {
        &self.stats
    }

    /// The text emitted so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Finish emission and return the program.
    pub fn finish(self) -> Program {
        Program::new(self.text, self.stats)
    }
}
