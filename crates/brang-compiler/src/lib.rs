//! brang Compiler
//!
//! Lowers arithmetic stack-machine operations into programs for a
//! single-tape, single-pointer, unary-increment target machine.
//!
//! ## Architecture
//!
//! Emission is a single linear pass. Every operation is lowered as soon as
//! it arrives, while the context keeps a compile-time simulation of the head
//! position and the stack top. Nothing is checked at run time: the emitted
//! program is correct only because that simulation is exact.
//!
//! ## Modules
//!
//! - [`tape`]: Addresses, the zeroed-slot marker and the head model
//! - [`emit`]: Output stream, line wrapping and finished [`Program`]s
//! - [`stack`]: LIFO slot allocation over the tape
//! - [`context`]: The emission context and the transfer primitives
//! - [`operators`]: Push, load, store, add, sub, mul and I/O

pub mod context;
pub mod emit;
pub mod operators;
pub mod stack;
pub mod tape;

pub use context::{CodegenContext, Flow};
pub use emit::{InstructionEmitter, InstructionStats, Program};
pub use operators::StackOp;
pub use stack::StackAllocator;
pub use tape::{Address, TapeHead, ZeroedSlot};

use brang_core::{EmitterConfig, Result};
use tracing::info;

/// The main compiler entry point.
pub struct Compiler;

impl Compiler {
    /// Lower a post-order sequence of operations into one program.
    ///
    /// Stops at the first failing operation; the partial output is discarded.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn compile(ops: &[StackOp], config: EmitterConfig) -> Result<Program> {
        let mut ctx = CodegenContext::new(config);
        for &op in ops {
            ctx.apply(op)?;
        }

        info!(
            ops = ops.len(),
            commands = ctx.stats().total(),
            live = ctx.stack().live(),
            high_water = ctx.stack().high_water(),
            "compiled"
        );
        Ok(ctx.finish())
    }
}
