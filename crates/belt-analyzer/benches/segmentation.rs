//! Segmentation Engine Benchmarks
//!
//! Measures single-pass analysis throughput over synthetic width signals
//! of varying length and seam density.
//!
//! # Running Benchmarks
//! ```bash
//! cargo bench --package belt-analyzer --bench segmentation
//! ```

use std::time::Duration;

use belt_analyzer::{AnalyzerConfig, BeltAnalyzer};
use belt_models::{SourceInfo, WidthSample};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Create a synthetic width signal with a seam every `segment_len` samples.
fn synthetic_signal(len: usize, segment_len: usize) -> Vec<WidthSample> {
    (0..len)
        .map(|i| {
            let base = if (i / segment_len) % 2 == 0 {
                500.0
            } else {
                800.0
            };
            // Small deterministic ripple so the aggregates do real work
            let ripple = ((i % 7) as f64 - 3.0) * 0.4;
            WidthSample::new(i as u64, base + ripple)
        })
        .collect()
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(5));

    let analyzer = BeltAnalyzer::new(AnalyzerConfig::default());

    for len in [1_000usize, 10_000, 100_000] {
        let signal = synthetic_signal(len, 250);

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("samples", len), &signal, |b, signal| {
            b.iter(|| {
                let result = analyzer
                    .analyze(
                        black_box(signal.iter().copied()),
                        SourceInfo::new(signal.len() as u64),
                    )
                    .unwrap();
                black_box(result)
            })
        });
    }

    group.finish();
}

fn bench_seam_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("seam_density");
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(5));

    let analyzer = BeltAnalyzer::new(AnalyzerConfig::default());
    let len = 10_000usize;

    for segment_len in [10usize, 100, 1_000] {
        let signal = synthetic_signal(len, segment_len);

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(
            BenchmarkId::new("segment_len", segment_len),
            &signal,
            |b, signal| {
                b.iter(|| {
                    let result = analyzer
                        .analyze(black_box(signal.iter().copied()), SourceInfo::new(len as u64))
                        .unwrap();
                    black_box(result)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_analyze, bench_seam_density);
criterion_main!(benches);
