//! CodegenContext - the emission state of one compilation unit.
//!
//! The context owns the three pieces of state that every primitive touches:
//! the simulated head position, the stack allocator and the output stream.
//! It is created once per compilation unit, mutated by every operation, and
//! consumed by [`CodegenContext::finish`].
//!
//! The primitives here are the building blocks of the operation compiler:
//!
//! - [`move_to`](CodegenContext::move_to): move the head
//! - [`zero_and_set`](CodegenContext::zero_and_set): overwrite the cell under the head
//! - [`allocate`](CodegenContext::allocate) / [`free`](CodegenContext::free): stack slots
//! - [`drain`](CodegenContext::drain): the drain loop every transfer is made of
//! - [`transfer`](CodegenContext::transfer), [`accumulate`](CodegenContext::accumulate),
//!   [`copy`](CodegenContext::copy): value transfer between cells

use brang_core::{CodegenError, EmitterConfig, Instruction, Result};
use tracing::trace;

use crate::emit::{InstructionEmitter, InstructionStats, Program};
use crate::stack::StackAllocator;
use crate::tape::{Address, TapeHead, ZeroedSlot};

/// Effect of one drain loop iteration on a target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Increment the target once per unit drained.
    Add,
    /// Decrement the target once per unit drained.
    Subtract,
}

impl Flow {
    fn instruction(self) -> Instruction {
        match self {
            Flow::Add => Instruction::Increment,
            Flow::Subtract => Instruction::Decrement,
        }
    }
}

/// Emission context for a single compilation unit.
#[derive(Debug)]
pub struct CodegenContext {
    config: EmitterConfig,
    head: TapeHead,
    stack: StackAllocator,
    emitter: InstructionEmitter,
}

impl CodegenContext {
    /// Create a context with the head at the origin and an empty stack.
    pub fn new(config: EmitterConfig) -> Self {
        Self {
            config,
            head: TapeHead::new(),
            stack: StackAllocator::new(config.tape_limit),
            emitter: InstructionEmitter::new(config.line_width),
        }
    }

    /// The configuration this context was created with.
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Where the head will be after everything emitted so far has run.
    pub fn head(&self) -> Address {
        self.head.position()
    }

    /// The first free stack cell.
    pub fn stack_top(&self) -> Address {
        self.stack.top()
    }

    /// The stack allocator.
    pub fn stack(&self) -> &StackAllocator {
        &self.stack
    }

    /// Statistics for everything emitted so far.
    pub fn stats(&self) -> &InstructionStats {
        self.emitter.stats()
    }

    /// The program text emitted so far.
    pub fn text(&self) -> &str {
        self.emitter.text()
    }

    /// Finish the compilation unit and return the emitted program.
    pub fn finish(self) -> Program {
        self.emitter.finish()
    }

    pub(crate) fn emit(&mut self, instruction: Instruction) {
        self.emitter.emit(instruction);
    }

    // ==========================================================================
    // Head and Cell Primitives
    // ==========================================================================

    /// Move the head to `target`.
    pub fn move_to(&mut self, target: Address) {
        let (direction, steps) = self.head.seek(target);
        self.emitter.emit_repeated(direction, steps);
    }

    /// Clear the cell under the head, then increment it `value` times.
    ///
    /// Fails with `InvalidImmediate` before emitting anything when `value`
    /// does not fit one cell.
    pub fn zero_and_set(&mut self, value: i64) -> Result<()> {
        let count = self.config.cell_width.check_immediate(value)?;
        self.emit_set(count);
        Ok(())
    }

    /// Emit `[-]` followed by `count` increments.
    pub(crate) fn emit_set(&mut self, count: u32) {
        self.emit_clear();
        self.emitter.emit_repeated(Instruction::Increment, count as usize);
    }

    /// Emit the self-terminating clear loop `[-]`.
    fn emit_clear(&mut self) {
        self.emitter.emit_sequence(&[
            Instruction::LoopStart,
            Instruction::Decrement,
            Instruction::LoopEnd,
        ]);
    }

    /// Move to `address` and set it to `value`.
    pub fn set_cell(&mut self, address: Address, value: i64) -> Result<()> {
        let count = self.config.cell_width.check_immediate(value)?;
        self.move_to(address);
        self.emit_set(count);
        Ok(())
    }

    // ==========================================================================
    // Stack Allocation
    // ==========================================================================

    /// Reserve `size` cells at the stack top, zero each, and return the first.
    pub fn allocate(&mut self, size: usize) -> Result<Address> {
        let base = self.stack.reserve(size)?;
        // Top-down so the head finishes on the first reserved cell.
        for offset in (0..size).rev() {
            self.move_to(base.offset(offset));
            self.emit_clear();
        }
        trace!(base = base.index(), size, "allocate");
        Ok(base)
    }

    /// Reserve one zeroed cell.
    pub fn allocate_slot(&mut self) -> Result<ZeroedSlot> {
        let address = self.allocate(1)?;
        Ok(ZeroedSlot::new(address, self.emitter.written()))
    }

    /// Release the top `size` cells without touching their contents.
    pub fn free(&mut self, size: usize) -> Result<()> {
        self.stack.release(size)?;
        trace!(top = self.stack.top().index(), size, "free");
        Ok(())
    }

    /// Release the top slot and return its address.
    ///
    /// The popped value stays in the cell until something overwrites it, so
    /// callers read it through the returned address.
    pub fn pop(&mut self) -> Result<Address> {
        self.free(1)?;
        Ok(self.stack.top())
    }

    /// Fail with [`CodegenError::DeadAddress`] unless `address` is live.
    pub(crate) fn require_live(&self, address: Address) -> Result<()> {
        if self.stack.is_live(address) {
            Ok(())
        } else {
            Err(CodegenError::DeadAddress {
                address: address.index(),
                stack_top: self.stack.top().index(),
            })
        }
    }

    // ==========================================================================
    // Transfer Primitives
    // ==========================================================================

    /// Emit a loop counted down on `counter`.
    ///
    /// The loop is opened and closed with the head on `counter`, so the
    /// simulated head position is correct whether the body runs zero or many
    /// times. The body must leave the stack as it found it.
    pub(crate) fn with_loop<F>(&mut self, counter: Address, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let top = self.stack.top();
        self.move_to(counter);
        self.emit(Instruction::LoopStart);
        body(self)?;
        debug_assert_eq!(self.stack.top(), top, "loop body must be stack neutral");
        self.move_to(counter);
        self.emit(Instruction::LoopEnd);
        Ok(())
    }

    /// Decrement `source` to zero, applying `targets` once per unit drained.
    pub fn drain(&mut self, source: Address, targets: &[(Address, Flow)]) -> Result<()> {
        debug_assert!(
            targets.iter().all(|(target, _)| *target != source),
            "drain source {source} is also a target"
        );
        trace!(source = source.index(), targets = targets.len(), "drain");
        self.with_loop(source, |ctx| {
            ctx.emit(Instruction::Decrement);
            for &(target, flow) in targets {
                ctx.move_to(target);
                ctx.emit(flow.instruction());
            }
            Ok(())
        })
    }

    /// Move the value of `source` into `target`: `target += source; source = 0`.
    pub fn transfer(&mut self, source: Address, target: Address) -> Result<()> {
        self.drain(source, &[(target, Flow::Add)])
    }

    /// Add the value of `source` to `target`, leaving `source` unchanged.
    ///
    /// Uses one temporary cell, freed before returning. Both cells must be
    /// live and distinct.
    pub fn accumulate(&mut self, source: Address, target: Address) -> Result<()> {
        self.require_live(source)?;
        self.require_live(target)?;
        if source == target {
            return Err(CodegenError::AliasedTransfer {
                address: source.index(),
            });
        }
        let tmp = self.allocate(1)?;
        self.drain(source, &[(target, Flow::Add), (tmp, Flow::Add)])?;
        self.transfer(tmp, source)?;
        self.free(1)
    }

    /// Copy `source` into a freshly zeroed slot, leaving `source` unchanged.
    ///
    /// The slot must be consumed before anything else is emitted.
    pub fn copy(&mut self, source: Address, target: ZeroedSlot) -> Result<()> {
        if target.zeroed_at() != self.emitter.written() {
            return Err(CodegenError::StaleSlot {
                address: target.address().index(),
            });
        }
        self.accumulate(source, target.address())
    }
}
