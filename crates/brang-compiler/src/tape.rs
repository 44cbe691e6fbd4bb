//! Compile-time model of the target machine's tape and head.
//!
//! The tape itself is never materialized: it exists only as the cumulative
//! effect of the emitted program. What the generator does track is where the
//! head will be once every instruction emitted so far has run.

use std::fmt;

use brang_core::Instruction;

/// Index of a tape cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address(usize);

impl Address {
    /// The leftmost cell, where the head starts.
    pub const ORIGIN: Address = Address(0);

    /// Create an address from a cell index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The cell index.
    pub const fn index(self) -> usize {
        self.0
    }

    /// The address `cells` to the right of this one.
    pub const fn offset(self, cells: usize) -> Self {
        Self(self.0 + cells)
    }
}

impl From<usize> for Address {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// A freshly allocated cell known to hold zero.
///
/// Only the allocator hands these out. The slot records how many commands
/// had been emitted when its cell was zeroed; a primitive consuming it
/// rejects the slot once anything else has been emitted, since that output
/// may have written the cell. Primitives that require a zero destination
/// take one by value.
#[derive(Debug, PartialEq, Eq)]
pub struct ZeroedSlot {
    address: Address,
    zeroed_at: usize,
}

impl ZeroedSlot {
    pub(crate) fn new(address: Address, zeroed_at: usize) -> Self {
        Self { address, zeroed_at }
    }

    /// The address of the zeroed cell.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Emitted command count at the time the cell was zeroed.
    pub(crate) fn zeroed_at(&self) -> usize {
        self.zeroed_at
    }
}

/// Position of the head after replaying everything emitted so far.
#[derive(Debug, Clone, Copy, Default)]
pub struct TapeHead {
    position: Address,
}

impl TapeHead {
    /// A head at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current head position.
    pub fn position(&self) -> Address {
        self.position
    }

    /// Plan a move to `target` and update the position.
    ///
    /// Returns the motion instruction and how many times it must be emitted.
    /// A zero count means the head is already there.
    pub fn seek(&mut self, target: Address) -> (Instruction, usize) {
        let from = self.position.index();
        let to = target.index();
        self.position = target;
        if to >= from {
            (Instruction::MoveRight, to - from)
        } else {
            (Instruction::MoveLeft, from - to)
        }
    }
}
