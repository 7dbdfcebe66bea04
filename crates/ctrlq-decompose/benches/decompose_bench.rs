//! Benchmarks for the controlled decompositions
//!
//! Run with: cargo bench -p ctrlq-decompose

use ctrlq_decompose::{
    SolverConfig, compute_bisection_factor, ctrl_decomp_bisect_od, ctrl_decomp_zyz,
};
use ctrlq_ir::{Gate, QubitId, StandardGate, Unitary2x2, wires};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Benchmark the ZYZ decomposition with known angles and with matrix extraction
fn bench_zyz(c: &mut Criterion) {
    let mut group = c.benchmark_group("ctrl_decomp_zyz");
    let rot = Gate::rot(0.123, 0.456, 0.789, QubitId(0));
    let h = Gate::single(StandardGate::H, QubitId(0)).unwrap();

    for num_controls in [1u32, 3, 8] {
        let controls = wires(1..=num_controls);
        group.bench_with_input(
            BenchmarkId::new("rot", num_controls),
            &controls,
            |b, controls| {
                b.iter(|| ctrl_decomp_zyz(black_box(&rot), black_box(controls)).unwrap());
            },
        );
        group.bench_with_input(
            BenchmarkId::new("matrix", num_controls),
            &controls,
            |b, controls| {
                b.iter(|| ctrl_decomp_zyz(black_box(&h), black_box(controls)).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark the bisection decomposition, dominated by the root-finder
fn bench_bisect_od(c: &mut Criterion) {
    let mut group = c.benchmark_group("ctrl_decomp_bisect_od");

    for theta in [0.3, 1.5, 3.0] {
        let ry = Gate::ry(theta, QubitId(0));
        let controls = wires(1..=4);
        group.bench_with_input(BenchmarkId::new("ry", theta), &ry, |b, ry| {
            b.iter(|| ctrl_decomp_bisect_od(black_box(ry), black_box(&controls)).unwrap());
        });
    }

    let config = SolverConfig::default();
    let z = Unitary2x2::rz(std::f64::consts::PI);
    group.bench_function("factor_z", |b| {
        b.iter(|| compute_bisection_factor(black_box(&z), &config).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_zyz, bench_bisect_od);

criterion_main!(benches);
