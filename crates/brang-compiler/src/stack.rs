//! Stack allocation over the tape.
//!
//! The stack is the prefix of the tape below `top`. Cells below `top` are
//! live (pushed values, named variables, in-flight temporaries); cells at or
//! above it are free. Allocation is a bump of `top`, deallocation the matching
//! decrement, in strict LIFO order.
//!
//! This type only does the bookkeeping. Emitting the zeroing code for newly
//! reserved cells is the context's job, see
//! [`CodegenContext::allocate`](crate::CodegenContext::allocate).

use brang_core::{CodegenError, Result};

use crate::tape::Address;

/// Bump allocator for stack slots.
#[derive(Debug, Clone, Default)]
pub struct StackAllocator {
    /// First free cell
    top: usize,

    /// Highest value `top` may reach
    limit: Option<usize>,

    /// Highest value `top` has reached
    high_water: usize,
}

impl StackAllocator {
    /// Create an empty stack.
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            top: 0,
            limit,
            high_water: 0,
        }
    }

    /// The first free cell.
    pub fn top(&self) -> Address {
        Address::new(self.top)
    }

    /// Number of live cells.
    pub fn live(&self) -> usize {
        self.top
    }

    /// Most cells ever live at once.
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Whether `address` lies inside the live region.
    pub fn is_live(&self, address: Address) -> bool {
        address.index() < self.top
    }

    /// Reserve `size` cells and return the first one.
    pub fn reserve(&mut self, size: usize) -> Result<Address> {
        if size == 0 {
            return Err(CodegenError::InvalidAllocationSize { size });
        }
        let exhausted = || CodegenError::AllocationExhausted {
            requested: size,
            stack_top: self.top,
            limit: self.limit,
        };
        let new_top = self.top.checked_add(size).ok_or_else(exhausted)?;
        if self.limit.is_some_and(|limit| new_top > limit) {
            return Err(exhausted());
        }

        let base = Address::new(self.top);
        self.top = new_top;
        self.high_water = self.high_water.max(new_top);
        Ok(base)
    }

    /// Fail with [`CodegenError::AllocationExhausted`] unless `cells` more
    /// cells could be reserved right now.
    pub fn ensure_headroom(&self, cells: usize) -> Result<()> {
        let fits = self
            .top
            .checked_add(cells)
            .is_some_and(|new_top| self.limit.is_none_or(|limit| new_top <= limit));
        if fits {
            Ok(())
        } else {
            Err(CodegenError::AllocationExhausted {
                requested: cells,
                stack_top: self.top,
                limit: self.limit,
            })
        }
    }

    /// Release the top `size` cells.
    pub fn release(&mut self, size: usize) -> Result<()> {
        if size == 0 {
            return Err(CodegenError::InvalidAllocationSize { size });
        }
        self.require(size)?;
        self.top -= size;
        Ok(())
    }

    /// Fail with [`CodegenError::StackUnderflow`] unless `count` cells are live.
    pub fn require(&self, count: usize) -> Result<()> {
        if self.top < count {
            return Err(CodegenError::StackUnderflow {
                required: count,
                live: self.top,
            });
        }
        Ok(())
    }

    /// Address of the slot `depth` positions below the top (0 = top slot).
    pub fn peek(&self, depth: usize) -> Result<Address> {
        self.require(depth + 1)?;
        Ok(Address::new(self.top - depth - 1))
    }
}
