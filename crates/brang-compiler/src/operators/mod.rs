//! The operation compiler.
//!
//! High-level stack operations arrive from the front-end in post-order
//! (operands before the operator that consumes them) as [`StackOp`]
//! requests. Each request is lowered immediately into target machine code
//! by composing the primitives on [`CodegenContext`]; there is no second
//! pass.
//!
//! - [`values`]: immediates, variable load/store, I/O
//! - [`binary`]: add, sub, mul

mod binary;
mod values;

use std::fmt;

use brang_core::Result;

use crate::context::CodegenContext;
use crate::tape::Address;

/// A high-level operation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOp {
    /// Push an immediate value.
    PushImmediate(i64),
    /// Push a copy of the variable at a resolved address.
    LoadVariable(Address),
    /// Pop the top value into the variable at a resolved address.
    StoreVariable(Address),
    /// Pop two values, push their sum.
    Add,
    /// Pop two values, push `lhs - rhs`.
    Sub,
    /// Pop two values, push their product.
    Mul,
    /// Pop the top value and write it to the output.
    Write,
    /// Push one value read from the input.
    Read,
}

impl StackOp {
    /// Change in live stack slots caused by this operation.
    pub fn stack_effect(self) -> isize {
        match self {
            StackOp::PushImmediate(_) | StackOp::LoadVariable(_) | StackOp::Read => 1,
            StackOp::StoreVariable(_) | StackOp::Write => -1,
            StackOp::Add | StackOp::Sub | StackOp::Mul => -1,
        }
    }
}

impl fmt::Display for StackOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackOp::PushImmediate(value) => write!(f, "push {value}"),
            StackOp::LoadVariable(address) => write!(f, "load {address}"),
            StackOp::StoreVariable(address) => write!(f, "store {address}"),
            StackOp::Add => write!(f, "add"),
            StackOp::Sub => write!(f, "sub"),
            StackOp::Mul => write!(f, "mul"),
            StackOp::Write => write!(f, "write"),
            StackOp::Read => write!(f, "read"),
        }
    }
}

impl CodegenContext {
    /// Lower one operation request.
    pub fn apply(&mut self, op: StackOp) -> Result<()> {
        match op {
            StackOp::PushImmediate(value) => self.push_immediate(value).map(drop),
            StackOp::LoadVariable(address) => self.load_variable(address).map(drop),
            StackOp::StoreVariable(address) => self.store_variable(address),
            StackOp::Add => self.add().map(drop),
            StackOp::Sub => self.sub().map(drop),
            StackOp::Mul => self.mul().map(drop),
            StackOp::Write => self.write_top(),
            StackOp::Read => self.read_input().map(drop),
        }
    }
}
