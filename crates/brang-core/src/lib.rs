//! brang core types.
//!
//! Vocabulary shared by every stage of the brang code generator:
//!
//! - [`Instruction`]: the target machine's command characters
//! - [`CellWidth`]: the numeric width of one tape cell
//! - [`EmitterConfig`]: configuration for a single compilation unit
//! - [`CodegenError`]: everything that can go wrong during emission

mod cell;
mod config;
mod error;
mod instruction;

pub use cell::CellWidth;
pub use config::EmitterConfig;
pub use error::{CodegenError, Result};
pub use instruction::Instruction;
