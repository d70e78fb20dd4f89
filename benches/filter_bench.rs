//! Benchmarks for the filter kernels and normalization.
//!
//! Run with: cargo bench
//!
//! The crate processes complete in-memory buffers rather than realtime
//! blocks, so the sizes below span short clips up to a few seconds of
//! 44.1kHz audio.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use soundlab_dsp::dsp::chorus::{chorus_buffer, ChorusParams};
use soundlab_dsp::dsp::delay::{delay_buffer, DelayParams};
use soundlab_dsp::dsp::distortion::{distortion_buffer, DistortionParams};
use soundlab_dsp::dsp::normalize::normalize;

/// Buffer lengths from a short clip up to ~3 seconds at 44.1kHz.
const BUFFER_SIZES: &[usize] = &[4_096, 32_768, 131_072];

const SAMPLE_RATE: u32 = 44_100;

fn test_signal(len: usize) -> Vec<f32> {
    (0..len).map(|i| (i as f32 * 0.1).sin() * 0.8).collect()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/normalize");
    for &size in BUFFER_SIZES {
        let input = test_signal(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| normalize(black_box(&input)).unwrap())
        });
    }
    group.finish();
}

fn bench_chorus(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/chorus");
    let params = ChorusParams::default();
    for &size in BUFFER_SIZES {
        let input = test_signal(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| chorus_buffer(black_box(&input), SAMPLE_RATE, black_box(&params)).unwrap())
        });
    }
    group.finish();
}

fn bench_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/delay");
    let params = DelayParams::default();
    for &size in BUFFER_SIZES {
        let input = test_signal(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| delay_buffer(black_box(&input), SAMPLE_RATE, black_box(&params)).unwrap())
        });
    }
    group.finish();
}

fn bench_distortion(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/distortion");
    let params = DistortionParams::default();
    for &size in BUFFER_SIZES {
        let input = test_signal(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                distortion_buffer(black_box(&input), SAMPLE_RATE, black_box(&params)).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_chorus,
    bench_delay,
    bench_distortion,
);
criterion_main!(benches);
