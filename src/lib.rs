//! brang: a code generator for single-tape target machines.
//!
//! Lowers a linear, post-order sequence of arithmetic stack operations
//! (push immediate, load/store variable, add, sub, mul, I/O) into a program
//! for a machine with one tape of fixed-width cells, one head, and the
//! commands `> < + - [ ] . ,`.
//!
//! # Example
//!
//! ```
//! use brang::{Compiler, EmitterConfig, StackOp};
//!
//! let ops = [
//!     StackOp::PushImmediate(3),
//!     StackOp::PushImmediate(4),
//!     StackOp::Mul,
//! ];
//! let program = Compiler::compile(&ops, EmitterConfig::default()).unwrap();
//! assert!(program.is_balanced());
//! ```
//!
//! For finer control drive a [`CodegenContext`] directly:
//!
//! ```
//! use brang::{CodegenContext, EmitterConfig};
//!
//! let mut ctx = CodegenContext::new(EmitterConfig::default());
//! let x = ctx.declare_variable(250).unwrap();
//! ctx.load_variable(x).unwrap();
//! ctx.push_immediate(10).unwrap();
//! ctx.add().unwrap();
//! ctx.store_variable(x).unwrap();
//! let program = ctx.finish();
//! assert_eq!(program.net_motion(), 1);
//! ```

pub use brang_compiler::{
    Address, CodegenContext, Compiler, Flow, InstructionEmitter, InstructionStats, Program,
    StackAllocator, StackOp, TapeHead, ZeroedSlot,
};
pub use brang_core::{CellWidth, CodegenError, EmitterConfig, Instruction, Result};

/// Lower `ops` with the default configuration.
pub fn compile(ops: &[StackOp]) -> Result<Program> {
    Compiler::compile(ops, EmitterConfig::default())
}
