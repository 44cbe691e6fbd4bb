//! Binary arithmetic operations.
//!
//! Each operation consumes the top two slots and leaves the result in the
//! lower one (`lhs`), so the net stack effect is always -1. All arithmetic
//! wraps at the cell width because the target machine's cells do.

use brang_core::{Instruction, Result};
use tracing::debug;

use crate::context::{CodegenContext, Flow};
use crate::tape::Address;

impl CodegenContext {
    /// `lhs + rhs`: drain `rhs` into `lhs`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn add(&mut self) -> Result<Address> {
        let result = self.drain_top_into_next(Flow::Add)?;
        debug!(result = result.index(), "add");
        Ok(result)
    }

    /// `lhs - rhs`: drain `rhs` out of `lhs`, wrapping below zero.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn sub(&mut self) -> Result<Address> {
        let result = self.drain_top_into_next(Flow::Subtract)?;
        debug!(result = result.index(), "sub");
        Ok(result)
    }

    /// `lhs * rhs` by repeated addition.
    ///
    /// `rhs` is moved into a temporary multiplicand, then for every unit
    /// drained from `lhs` the multiplicand is added back onto `rhs` without
    /// consuming it. Finally the product is moved down into `lhs`.
    ///
    /// ```text
    /// before:  lhs=a  rhs=b
    /// move:    lhs=a  rhs=0    tmp=b
    /// loop:    lhs=0  rhs=a*b  tmp=b   (one accumulate per unit of a)
    /// collapse lhs=a*b         (rhs, tmp freed)
    /// ```
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn mul(&mut self) -> Result<Address> {
        self.stack().require(2)?;
        // The multiplicand plus the accumulate temporary.
        self.stack().ensure_headroom(2)?;
        let rhs = self.stack().peek(0)?;
        let lhs = self.stack().peek(1)?;

        let multiplicand = self.allocate_slot()?.address();
        self.transfer(rhs, multiplicand)?;
        self.with_loop(lhs, |ctx| {
            ctx.emit(Instruction::Decrement);
            ctx.accumulate(multiplicand, rhs)
        })?;
        self.set_cell(multiplicand, 0)?;
        self.free(1)?;

        self.transfer(rhs, lhs)?;
        self.pop()?;
        debug!(result = lhs.index(), "mul");
        Ok(lhs)
    }

    fn drain_top_into_next(&mut self, flow: Flow) -> Result<Address> {
        self.stack().require(2)?;
        let rhs = self.pop()?;
        let lhs = self.stack().peek(0)?;
        self.drain(rhs, &[(lhs, flow)])?;
        Ok(lhs)
    }
}
