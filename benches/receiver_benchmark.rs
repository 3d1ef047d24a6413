// Criterion benchmark comparing the two receiver qualifiers

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ownership_demos::timing::Workload;

fn benchmark_receivers(c: &mut Criterion) {
    let mut data = Workload::default();

    c.bench_function("sum_by_ref", |b| b.iter(|| black_box(&data).sum_by_ref()));

    c.bench_function("sum_by_mut", |b| {
        b.iter(|| black_box(&mut data).sum_by_mut())
    });
}

criterion_group!(benches, benchmark_receivers);
criterion_main!(benches);
