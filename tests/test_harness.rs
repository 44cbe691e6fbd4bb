// tests/test_harness.rs
//! Test harness for brang integration tests
//!
//! Provides a reference interpreter for the target machine so tests can
//! check what emitted programs actually compute, not just what they look
//! like.

#![allow(dead_code)]

use brang::{CellWidth, CodegenContext, EmitterConfig, Instruction, Program};
use rustc_hash::FxHashMap;

/// Steps after which a run is considered non-terminating.
const STEP_LIMIT: usize = 50_000_000;

/// Final state of a reference machine run.
#[derive(Debug)]
pub struct RunResult {
    pub cells: Vec<u32>,
    pub head: usize,
    pub output: Vec<u32>,
    pub steps: usize,
}

impl RunResult {
    /// Value of the cell at `index` (cells never touched read as zero).
    pub fn cell(&self, index: usize) -> u32 {
        self.cells.get(index).copied().unwrap_or(0)
    }
}

/// Reference interpreter for the target machine.
pub struct TapeMachine {
    width: CellWidth,
    input: Vec<u32>,
}

impl TapeMachine {
    /// A machine with the given cell width and no input.
    pub fn new(width: CellWidth) -> Self {
        Self {
            width,
            input: Vec::new(),
        }
    }

    /// Values returned by successive reads; reads past the end yield 0.
    pub fn with_input(mut self, input: &[u32]) -> Self {
        self.input = input.to_vec();
        self
    }

    /// Execute `program` from a zeroed tape with the head at cell 0.
    pub fn run(&self, program: &Program) -> RunResult {
        let code: Vec<Instruction> = program.instructions().collect();
        let jumps = jump_table(&code);
        let modulus = self.width.modulus() as u32;

        let mut cells = vec![0u32; 16];
        let mut head = 0usize;
        let mut pc = 0usize;
        let mut steps = 0usize;
        let mut input = self.input.iter().copied();
        let mut output = Vec::new();

        while pc < code.len() {
            steps += 1;
            assert!(steps <= STEP_LIMIT, "program did not terminate");
            match code[pc] {
                Instruction::MoveRight => {
                    head += 1;
                    if head == cells.len() {
                        cells.resize(cells.len() * 2, 0);
                    }
                }
                Instruction::MoveLeft => {
                    head = head.checked_sub(1).expect("head moved left of cell 0");
                }
                Instruction::Increment => cells[head] = (cells[head] + 1) % modulus,
                Instruction::Decrement => cells[head] = (cells[head] + modulus - 1) % modulus,
                Instruction::LoopStart => {
                    if cells[head] == 0 {
                        pc = jumps[&pc];
                    }
                }
                Instruction::LoopEnd => {
                    if cells[head] != 0 {
                        pc = jumps[&pc];
                    }
                }
                Instruction::Write => output.push(cells[head]),
                Instruction::Read => cells[head] = input.next().unwrap_or(0) % modulus,
            }
            pc += 1;
        }

        RunResult {
            cells,
            head,
            output,
            steps,
        }
    }
}

/// Map each bracket to its partner.
fn jump_table(code: &[Instruction]) -> FxHashMap<usize, usize> {
    let mut table = FxHashMap::default();
    let mut open = Vec::new();
    for (pc, instruction) in code.iter().enumerate() {
        match instruction {
            Instruction::LoopStart => open.push(pc),
            Instruction::LoopEnd => {
                let start = open.pop().expect("unmatched ]");
                table.insert(start, pc);
                table.insert(pc, start);
            }
            _ => {}
        }
    }
    assert!(open.is_empty(), "unmatched [");
    table
}

/// Run a context's program on a machine of the context's cell width.
pub fn run(ctx: CodegenContext) -> RunResult {
    let width = ctx.config().cell_width;
    TapeMachine::new(width).run(&ctx.finish())
}

/// A context with default settings.
pub fn context() -> CodegenContext {
    CodegenContext::new(EmitterConfig::default())
}

/// Compute `a op b` through emitted code and return the result cell.
pub fn binary(a: i64, b: i64, op: fn(&mut CodegenContext) -> brang::Result<brang::Address>) -> u32 {
    let mut ctx = context();
    ctx.push_immediate(a).unwrap();
    ctx.push_immediate(b).unwrap();
    let result = op(&mut ctx).unwrap();
    assert_eq!(ctx.stack_top().index(), result.index() + 1);
    run(ctx).cell(result.index())
}
