//! Benchmarks for the pure derivations that run on every frame.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use millview_core::{quantize_mm, SimulationCursor};

fn bench_phase_derivation(c: &mut Criterion) {
    let cursor = SimulationCursor::new(true, 5_000);
    c.bench_function("phase_of_10k_segments", |b| {
        b.iter(|| {
            let mut completed = 0usize;
            for i in 0..10_000usize {
                if cursor.phase_of(black_box(i)) == millview_core::PathPhase::Completed {
                    completed += 1;
                }
            }
            black_box(completed)
        })
    });
}

fn bench_quantization(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000).map(|i| i as f64 * 0.0317).collect();
    c.bench_function("quantize_10k_values", |b| {
        b.iter(|| {
            let mut sum = 0.0f64;
            for v in &values {
                sum += quantize_mm(black_box(*v));
            }
            black_box(sum)
        })
    });
}

criterion_group!(benches, bench_phase_derivation, bench_quantization);
criterion_main!(benches);
