//! Performance benchmarks for the brang code generator.
//!
//! Emitted code size is proportional to the values involved (unary
//! increments, drain loops), so the suites scale along value magnitude and
//! along expression length:
//! - Primitives: push immediate and copy across the value range
//! - Arithmetic: add, sub, mul at small and large operands
//! - Programs: long post-order operation sequences
//!
//! Run with the `profile-with-puffin` feature to collect per-operation
//! scopes:
//!
//! ```bash
//! cargo bench --features profile-with-puffin
//! ```

use brang::{CodegenContext, Compiler, EmitterConfig, StackOp};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

#[cfg(feature = "profile-with-puffin")]
static FRAME_VIEW: std::sync::OnceLock<puffin::GlobalFrameView> = std::sync::OnceLock::new();

/// Initialize puffin profiler.
#[cfg(feature = "profile-with-puffin")]
fn setup_profiler() {
    puffin::set_scopes_on(true);
    FRAME_VIEW.get_or_init(puffin::GlobalFrameView::default);
}

#[cfg(not(feature = "profile-with-puffin"))]
fn setup_profiler() {}

/// Call at the end of each benchmark iteration to flush profiling data.
#[cfg(feature = "profile-with-puffin")]
fn end_profiling_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(not(feature = "profile-with-puffin"))]
fn end_profiling_frame() {}

#[cfg(feature = "profile-with-puffin")]
fn print_profiling_stats() {
    if let Some(frame_view) = FRAME_VIEW.get() {
        let frames = frame_view.lock().recent_frames().count();
        println!("\n=== Profiling: {} frames recorded ===", frames);
    }
}

#[cfg(not(feature = "profile-with-puffin"))]
fn print_profiling_stats() {}

/// Benchmark the value primitives across the cell range.
fn primitive_benchmarks(c: &mut Criterion) {
    setup_profiler();
    let mut group = c.benchmark_group("codegen/primitives");

    for value in [0i64, 16, 128, 255] {
        group.bench_with_input(BenchmarkId::new("push_immediate", value), &value, |b, &v| {
            b.iter(|| {
                let mut ctx = CodegenContext::new(EmitterConfig::default());
                ctx.push_immediate(black_box(v)).unwrap();
                end_profiling_frame();
                black_box(ctx.finish().command_count())
            });
        });

        group.bench_with_input(BenchmarkId::new("load_variable", value), &value, |b, &v| {
            b.iter(|| {
                let mut ctx = CodegenContext::new(EmitterConfig::default());
                let x = ctx.declare_variable(v).unwrap();
                ctx.load_variable(black_box(x)).unwrap();
                end_profiling_frame();
                black_box(ctx.finish().command_count())
            });
        });
    }

    group.finish();
}

/// Benchmark the binary operations.
fn arithmetic_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("codegen/arithmetic");

    for (a, b) in [(3i64, 4i64), (200, 100), (255, 255)] {
        let label = format!("{a}x{b}");
        for (name, op) in [("add", StackOp::Add), ("sub", StackOp::Sub), ("mul", StackOp::Mul)] {
            let ops = [StackOp::PushImmediate(a), StackOp::PushImmediate(b), op];
            group.bench_with_input(BenchmarkId::new(name, &label), &ops, |bench, ops| {
                bench.iter(|| {
                    let program = Compiler::compile(black_box(ops), EmitterConfig::default());
                    end_profiling_frame();
                    black_box(program.unwrap().command_count())
                });
            });
        }
    }

    group.finish();
}

/// Benchmark long operation sequences.
fn program_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("codegen/programs");

    for terms in [10usize, 100, 1000] {
        // 1 + 2 * 3 + 2 * 3 + ... kept on a two-slot stack
        let mut ops = vec![StackOp::PushImmediate(1)];
        for _ in 0..terms {
            ops.extend([
                StackOp::PushImmediate(2),
                StackOp::PushImmediate(3),
                StackOp::Mul,
                StackOp::Add,
            ]);
        }

        group.throughput(Throughput::Elements(ops.len() as u64));
        group.bench_with_input(BenchmarkId::new("sum_of_products", terms), &ops, |b, ops| {
            b.iter(|| {
                let program = Compiler::compile(black_box(ops), EmitterConfig::default());
                end_profiling_frame();
                black_box(program.unwrap().command_count())
            });
        });
    }

    group.finish();
    print_profiling_stats();
}

criterion_group!(
    benches,
    primitive_benchmarks,
    arithmetic_benchmarks,
    program_benchmarks
);

criterion_main!(benches);
