use criterion::measurement::WallTime;
use criterion::{
    criterion_group, criterion_main, BatchSize, BenchmarkGroup, BenchmarkId, Criterion,
};
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zipf::ZipfDistribution;

use rowsort::sorts::{bubble, selection};
use rowsort::Sort;

fn uniform_input(len: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(0xDA7A);
    (0..len).map(|_| rng.gen_range(-1_000..=1_000)).collect()
}

// Heavily duplicated values, the pattern where bubble's early exit never helps.
fn zipf_input(len: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(0xDA7A);
    let dist = ZipfDistribution::new(1_000, 1.0).unwrap();
    (0..len).map(|_| dist.sample(&mut rng) as i64).collect()
}

fn bench_sort<S: Sort>(group: &mut BenchmarkGroup<'_, WallTime>, pattern: &str, input: &[i64]) {
    group.bench_with_input(
        BenchmarkId::new(format!("{}_{pattern}", S::name()), input.len()),
        input,
        |b, input| b.iter_batched_ref(|| input.to_vec(), |v| S::sort(v), BatchSize::SmallInput),
    );
}

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorts");

    // Both algorithms are O(n^2), keep the sizes modest.
    for len in [100usize, 1_000] {
        for (pattern, input) in [
            ("uniform", uniform_input(len)),
            ("zipf", zipf_input(len)),
            ("ascending", (0..len as i64).collect()),
        ] {
            bench_sort::<bubble::SortImpl>(&mut group, pattern, &input);
            bench_sort::<selection::SortImpl>(&mut group, pattern, &input);
        }
    }

    group.finish();
}

criterion_group!(benches, bench_sorts);
criterion_main!(benches);
