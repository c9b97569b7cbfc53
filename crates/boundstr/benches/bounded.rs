#![allow(missing_docs)]

use std::time::Duration;

use boundstr::{bounded_append, bounded_copy, bounded_format};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Deterministically create a terminated source of `len` content bytes.
fn make_source(len: usize) -> Vec<u8> {
    let mut s: Vec<u8> = (0..len).map(|i| b'a' + (i % 26) as u8).collect();
    s.push(0);
    s
}

#[cfg(not(feature = "bench-fast"))]
const SIZES: &[usize] = &[16, 256, 4096, 65536];
#[cfg(feature = "bench-fast")]
const SIZES: &[usize] = &[16, 256];

fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_copy");
    group.measurement_time(Duration::from_secs(3));

    for &capacity in SIZES {
        for (name, src_len) in [("fits", capacity / 2), ("truncates", capacity * 4)] {
            let src = make_source(src_len);
            let mut dst = vec![0u8; capacity];
            group.throughput(Throughput::Bytes(src_len as u64));
            group.bench_with_input(BenchmarkId::new(name, capacity), &src, |b, src| {
                b.iter(|| bounded_copy(black_box(&mut dst), black_box(src.as_slice())));
            });
        }
    }

    group.finish();
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_append");
    group.measurement_time(Duration::from_secs(3));

    for &capacity in SIZES {
        let piece = make_source(capacity / 8);
        let mut dst = vec![0u8; capacity];
        group.bench_with_input(BenchmarkId::new("fill", capacity), &piece, |b, piece| {
            b.iter(|| {
                bounded_copy(&mut dst, "");
                let mut intended = 0;
                for _ in 0..10 {
                    intended = bounded_append(black_box(&mut dst), black_box(piece.as_slice()));
                }
                intended
            });
        });
    }

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_format");
    let mut dst = [0u8; 16];
    group.bench_function("near_limit", |b| {
        b.iter(|| {
            bounded_format(
                black_box(&mut dst),
                format_args!("id={} tag={}", black_box(42), black_box("near-limit")),
            )
        });
    });
    group.finish();
}

criterion_group!(benches, bench_copy, bench_append, bench_format);
criterion_main!(benches);
