use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use inve_sha2::{hash, Digest, Sha256, Sha512, Variant};

const SIZES: [usize; 5] = [64, 256, 1024, 16384, 65536];

fn bench_typed(c: &mut Criterion) {
    let mut group = c.benchmark_group("typed");

    for size in SIZES {
        let data = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("sha256", size), &data, |b, data| {
            b.iter(|| Sha256::digest(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("sha512", size), &data, |b, data| {
            b.iter(|| Sha512::digest(black_box(data)))
        });
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");
    let data = vec![0u8; 16384];
    group.throughput(Throughput::Bytes(data.len() as u64));

    for variant in Variant::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(variant), &data, |b, data| {
            b.iter(|| hash(variant, black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_typed, bench_session);
criterion_main!(benches);
