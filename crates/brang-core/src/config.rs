//! Emitter configuration.

use crate::CellWidth;

/// Configuration for one compilation unit.
///
/// The defaults match the classic target machine: 8-bit cells, output
/// wrapped every 50 command characters, and an unbounded tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Width of one tape cell.
    pub cell_width: CellWidth,
    /// Command characters per output line. `0` disables wrapping.
    pub line_width: usize,
    /// Highest number of cells the stack may occupy, if bounded.
    pub tape_limit: Option<usize>,
}

impl EmitterConfig {
    /// Default line width of the textual output.
    pub const DEFAULT_LINE_WIDTH: usize = 50;

    /// Tape length of the classic target machine.
    pub const CLASSIC_TAPE_LENGTH: usize = 30_000;

    /// Create the default configuration.
    pub fn new() -> Self {
        Self {
            cell_width: CellWidth::default(),
            line_width: Self::DEFAULT_LINE_WIDTH,
            tape_limit: None,
        }
    }

    /// Configuration bounded to the classic 30 000-cell tape.
    pub fn classic() -> Self {
        Self::new().with_tape_limit(Self::CLASSIC_TAPE_LENGTH)
    }

    /// Use a different cell width.
    pub fn with_cell_width(mut self, cell_width: CellWidth) -> Self {
        self.cell_width = cell_width;
        self
    }

    /// Wrap output after `line_width` command characters (`0` = never).
    pub fn with_line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width;
        self
    }

    /// Bound the stack to `limit` cells.
    pub fn with_tape_limit(mut self, limit: usize) -> Self {
        self.tape_limit = Some(limit);
        self
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self::new()
    }
}
