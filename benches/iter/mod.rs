use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use fingeravl::FingerTree;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("iter");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree, with every key inserted twice.
    let keys = crate::random(n_values);
    let t = keys
        .iter()
        .chain(keys.iter())
        .copied()
        .collect::<FingerTree<_>>();

    let bench_name = BenchName {
        n_values,
        bench_name: "iter",
    };

    g.throughput(Throughput::Elements(n_values as _)); // Distinct keys per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            for v in t.iter() {
                black_box(v);
            }
        })
    });

    let bench_name = BenchName {
        n_values,
        bench_name: "to_sorted_sequence",
    };

    g.throughput(Throughput::Elements(2 * n_values as u64)); // Keys per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| black_box(t.to_sorted_sequence()))
    });
}
