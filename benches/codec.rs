//! 短码编解码性能基准测试

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tagshort::codec::{decode, encode, is_valid_code};

const SAMPLES: [u64; 4] = [1, 12_345, 1_000_000_000, u64::MAX];

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec/encode");
    group.throughput(Throughput::Elements(1));

    for n in SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| encode(black_box(n)));
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec/decode");
    group.throughput(Throughput::Elements(1));

    for n in SAMPLES {
        let code = encode(n);
        group.bench_with_input(BenchmarkId::from_parameter(&code), &code, |b, code| {
            b.iter(|| decode(black_box(code)));
        });
    }

    // 非法字符在第一位就失败
    group.bench_function("invalid", |b| {
        b.iter(|| decode(black_box("0abc")));
    });

    group.finish();
}

fn bench_is_valid_code(c: &mut Criterion) {
    c.bench_function("codec/is_valid_code", |b| {
        b.iter(|| is_valid_code(black_box("4L5(VKZJ9^i")));
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_is_valid_code);
criterion_main!(benches);
