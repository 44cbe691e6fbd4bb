//! Tape cell width.

use std::fmt;

use crate::error::{CodegenError, Result};

/// Numeric width of one tape cell.
///
/// Every arithmetic operation wraps modulo `2^bits`, matching the target
/// machine's native cell. Values wider than one cell would need an explicit
/// carry chain across adjacent cells, which the generator does not emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellWidth {
    /// 8-bit cells, values `0..=255`.
    #[default]
    Bits8,
    /// 16-bit cells, values `0..=65535`.
    Bits16,
}

impl CellWidth {
    /// Number of bits in one cell.
    pub const fn bits(self) -> u32 {
        match self {
            CellWidth::Bits8 => 8,
            CellWidth::Bits16 => 16,
        }
    }

    /// Largest value a cell can hold.
    pub const fn max_value(self) -> u32 {
        match self {
            CellWidth::Bits8 => u8::MAX as u32,
            CellWidth::Bits16 => u16::MAX as u32,
        }
    }

    /// Number of distinct cell values (`2^bits`).
    pub const fn modulus(self) -> u64 {
        1u64 << self.bits()
    }

    /// Reduce an arbitrary integer into the cell's value range.
    pub fn wrap(self, value: i64) -> u32 {
        value.rem_euclid(self.modulus() as i64) as u32
    }

    /// Validate an immediate operand for a single cell.
    ///
    /// Returns the value as an increment count, or
    /// [`CodegenError::InvalidImmediate`] when it falls outside
    /// `0..=max_value()`.
    pub fn check_immediate(self, value: i64) -> Result<u32> {
        u32::try_from(value)
            .ok()
            .filter(|v| *v <= self.max_value())
            .ok_or(CodegenError::InvalidImmediate {
                value,
                width: self,
                max: self.max_value(),
            })
    }
}

impl fmt::Display for CellWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}
