//! Criterion benchmarks for the BRKGA bin-packing engine.
//!
//! Uses synthetic uniform instances to measure decode and generation
//! throughput independent of any particular OR-Library file.

use binpack_brkga::brkga::{BrkgaConfig, BrkgaEngine};
use binpack_brkga::packing::{BinPackingDecoder, FitnessFunction, Instance};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ===========================================================================
// Synthetic instance: n objects, weights uniform in [1, 35], capacity 100
// ===========================================================================

fn synthetic_decoder(n: usize, seed: u64) -> BinPackingDecoder {
    let mut rng = StdRng::seed_from_u64(seed);
    let weights: Vec<f64> = (0..n).map(|_| rng.random_range(1..=35) as f64).collect();
    let instance = Instance::new(weights, 100.0).expect("synthetic instance is valid");
    BinPackingDecoder::new(instance, FitnessFunction::Falkenauer)
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for &n in &[60usize, 120, 250] {
        let decoder = synthetic_decoder(n, 7);
        let mut rng = StdRng::seed_from_u64(11);
        let keys: Vec<f64> = (0..2 * n).map(|_| rng.random_range(0.0..1.0)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| black_box(&decoder).decode_solution(black_box(keys)).boxes_used());
        });
    }

    group.finish();
}

fn bench_evolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve_20_generations");
    group.sample_size(10);

    for &n in &[60usize, 120] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let decoder = synthetic_decoder(n, 7);
                let config = BrkgaConfig::new(decoder.chromosome_length())
                    .with_population_size(100)
                    .with_seed(42);
                let mut engine =
                    BrkgaEngine::new(decoder, config).expect("valid bench config");
                for _ in 0..20 {
                    engine.evolve();
                }
                black_box(engine.best_fitness())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_evolve);
criterion_main!(benches);
