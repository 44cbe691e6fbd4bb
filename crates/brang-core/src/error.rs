//! Error types for code generation.
//!
//! All errors are detected at emission time. None of them is recoverable in
//! place: a failed operation emits nothing, and the caller is expected to
//! abandon the compilation unit.
//!
//! ```text
//! CodegenError
//! ├── StackUnderflow        - too few live slots for an operation
//! ├── AllocationExhausted   - the tape cannot hold another slot
//! ├── InvalidImmediate      - immediate does not fit one cell
//! ├── InvalidAllocationSize - zero-sized allocate/free
//! ├── DeadAddress           - address outside the live region
//! ├── AliasedTransfer       - copy or accumulate of a cell into itself
//! └── StaleSlot             - zeroed slot used after further emission
//! ```

use thiserror::Error;

use crate::CellWidth;

/// Result alias used throughout the code generator.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors raised while emitting target machine code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// An operation needs more live stack slots than are allocated.
    #[error("stack underflow: operation needs {required} live slot(s), {live} allocated")]
    StackUnderflow {
        /// Slots the operation consumes.
        required: usize,
        /// Slots currently live.
        live: usize,
    },

    /// The tape cannot hold the requested cells.
    #[error(
        "allocation exhausted: cannot reserve {requested} cell(s) at stack top {stack_top}{}",
        .limit.map(|l| format!(" (tape limit {l})")).unwrap_or_default()
    )]
    AllocationExhausted {
        /// Cells requested.
        requested: usize,
        /// Stack top at the time of the request.
        stack_top: usize,
        /// Configured tape limit, if any.
        limit: Option<usize>,
    },

    /// An immediate value does not fit in a single cell.
    #[error("immediate {value} does not fit a {width} cell (expected 0..={max})")]
    InvalidImmediate {
        /// The rejected value.
        value: i64,
        /// Width of the target cell.
        width: CellWidth,
        /// Largest accepted value.
        max: u32,
    },

    /// Allocations and frees must cover at least one cell.
    #[error("invalid allocation size {size}: must be at least 1")]
    InvalidAllocationSize {
        /// The rejected size.
        size: usize,
    },

    /// A variable address does not lie inside the live stack region.
    #[error("address {address} is not a live slot (stack top is {stack_top})")]
    DeadAddress {
        /// The rejected address.
        address: usize,
        /// Stack top at the time of the request.
        stack_top: usize,
    },
    /// A non-destructive transfer names the same cell as source and target.
    #[error("cannot copy cell {address} into itself")]
    AliasedTransfer {
        /// The cell named on both sides.
        address: usize,
    },

    /// A zeroed slot was used after other output could have written it.
    #[error("slot {address} is no longer known to be zero")]
    StaleSlot {
        /// Address of the stale slot.
        address: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = CodegenError::StackUnderflow { required: 2, live: 1 };
        assert_eq!(
            err.to_string(),
            "stack underflow: operation needs 2 live slot(s), 1 allocated"
        );

        let err = CodegenError::InvalidImmediate {
            value: 300,
            width: CellWidth::Bits8,
            max: 255,
        };
        assert_eq!(
            err.to_string(),
            "immediate 300 does not fit a 8-bit cell (expected 0..=255)"
        );
    }

    #[test]
    fn exhausted_mentions_limit_only_when_set() {
        let bounded = CodegenError::AllocationExhausted {
            requested: 1,
            stack_top: 30_000,
            limit: Some(30_000),
        };
        assert!(bounded.to_string().ends_with("(tape limit 30000)"));

        let unbounded = CodegenError::AllocationExhausted {
            requested: 2,
            stack_top: usize::MAX,
            limit: None,
        };
        assert!(!unbounded.to_string().contains("tape limit"));
    }

    #[test]
    fn transfer_messages() {
        assert_eq!(
            CodegenError::AliasedTransfer { address: 3 }.to_string(),
            "cannot copy cell 3 into itself"
        );
        assert_eq!(
            CodegenError::StaleSlot { address: 1 }.to_string(),
            "slot 1 is no longer known to be zero"
        );
    }
}
