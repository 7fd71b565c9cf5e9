//! Transform benchmarks
//!
//! Run with: cargo bench -p spectral-stream-core --bench transform
//!
//! The per-call cost of the streaming objects is deliberately lumpy: one
//! call per hop pays the whole O(N log N) transform. The per-hop group
//! below measures that worst-case call; the throughput group measures the
//! amortized cost across a long stream.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use spectral_stream::spectrum::fft::{transform, Direction};
use spectral_stream::ForwardFft;

fn bench_fft_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft_kernel");

    for &n in &[64usize, 256, 1024, 4096] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("forward", n), &n, |b, &n| {
            let mut buf = vec![0.0f32; 2 * n];
            for (i, v) in buf.iter_mut().enumerate() {
                *v = (i as f32 * 0.37).sin();
            }
            b.iter(|| transform(black_box(&mut buf), Direction::Forward));
        });
    }

    group.finish();
}

fn bench_forward_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward_stream");

    for &n in &[256usize, 1024, 4096] {
        let signal: Vec<f32> = (0..4 * n).map(|i| (i as f32 * 0.11).sin()).collect();

        group.throughput(Throughput::Elements(signal.len() as u64));
        group.bench_with_input(BenchmarkId::new("per_sample", n), &n, |b, &n| {
            b.iter(|| {
                let mut fwd = ForwardFft::new(n);
                let mut acc = 0.0f32;
                for &x in &signal {
                    let (re, im) = fwd.process(x);
                    acc += re + im;
                }
                black_box(acc)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fft_kernel, bench_forward_stream);
criterion_main!(benches);
