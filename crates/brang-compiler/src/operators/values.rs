//! Value operations: immediates, variables and I/O.
//!
//! | Operation          | Stack effect | Emitted shape                        |
//! |--------------------|--------------|--------------------------------------|
//! | `push_immediate`   | +1           | zero slot, `[-]` then `value` × `+`  |
//! | `declare_variable` | +1           | same as `push_immediate`             |
//! | `load_variable`    | +1           | zero slot, non-destructive copy      |
//! | `store_variable`   | -1           | clear variable, drain top into it    |
//! | `write_top`        | -1           | `.` on the top slot                  |
//! | `read_input`       | +1           | zero slot, `,` into it               |

use brang_core::{CodegenError, Instruction, Result};
use tracing::debug;

use crate::context::CodegenContext;
use crate::tape::Address;

impl CodegenContext {
    /// Push an immediate value onto the stack.
    ///
    /// The value is validated against the cell width before anything is
    /// emitted.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn push_immediate(&mut self, value: i64) -> Result<Address> {
        let count = self.config().cell_width.check_immediate(value)?;
        let slot = self.allocate(1)?;
        self.move_to(slot);
        self.emit_set(count);
        debug!(value, slot = slot.index(), "push immediate");
        Ok(slot)
    }

    /// Reserve a slot for a named variable holding `initial`.
    ///
    /// Returns the variable's address for the caller's symbol table. The
    /// variable stays live until the slots above it and the variable itself
    /// have been popped.
    pub fn declare_variable(&mut self, initial: i64) -> Result<Address> {
        let address = self.push_immediate(initial)?;
        debug!(address = address.index(), initial, "declare variable");
        Ok(address)
    }

    /// Push a copy of the variable at `address`, leaving the variable unchanged.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn load_variable(&mut self, address: Address) -> Result<Address> {
        self.require_live(address)?;
        // The new slot plus the copy temporary.
        self.stack().ensure_headroom(2)?;
        let slot = self.allocate_slot()?;
        let target = slot.address();
        self.copy(address, slot)?;
        debug!(
            variable = address.index(),
            slot = target.index(),
            "load variable"
        );
        Ok(target)
    }

    /// Pop the top value into the variable at `address`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn store_variable(&mut self, address: Address) -> Result<()> {
        let value = self.stack().peek(0)?;
        if address >= value {
            return Err(CodegenError::DeadAddress {
                address: address.index(),
                stack_top: self.stack_top().index(),
            });
        }
        self.pop()?;
        self.set_cell(address, 0)?;
        self.transfer(value, address)?;
        debug!(variable = address.index(), from = value.index(), "store variable");
        Ok(())
    }

    /// Pop the top value and write it to the output.
    pub fn write_top(&mut self) -> Result<()> {
        let slot = self.pop()?;
        self.move_to(slot);
        self.emit(Instruction::Write);
        debug!(slot = slot.index(), "write top");
        Ok(())
    }

    /// Push one value read from the input.
    pub fn read_input(&mut self) -> Result<Address> {
        let slot = self.allocate(1)?;
        self.move_to(slot);
        self.emit(Instruction::Read);
        debug!(slot = slot.index(), "read input");
        Ok(slot)
    }
}
