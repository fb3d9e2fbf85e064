use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
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
    let mut g = c.benchmark_group("bulk_load_and_sort");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_sorted(&mut g, n_values);
        bench_reversed(&mut g, n_values);
        bench_random(&mut g, n_values);
        bench_swapped(&mut g, n_values);
    }
}

/// Measure the time needed to sort `n_values` keys generated in the named
/// order by inserting them into an empty tree.
macro_rules! insert_bench {
    (
        $name:ident
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
            where
                M: Measurement,
            {
                let keys = crate::$name(n_values);
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                g.throughput(Throughput::Elements(n_values as _)); // Keys inserted per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter_batched(
                        || (FingerTree::with_capacity(n_values), keys.clone()),
                        |(mut t, keys)| t.bulk_load_and_sort(keys),
                        BatchSize::LargeInput,
                    );
                });
            }
        }
    };
}

insert_bench!(sorted);
insert_bench!(reversed);
insert_bench!(random);
insert_bench!(swapped);
