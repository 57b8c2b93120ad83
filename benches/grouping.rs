use std::{collections::HashMap, hint::black_box, time::Duration};

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{RngExt, SeedableRng, rngs::StdRng};
use streamfold::{Stream, collectors};

macro_rules! bench_fn {
    ($group:ident, $nums:ident, $($f:ident)*) => {
        $(
            $group.bench_function(stringify!($f), |bencher| {
                bencher.iter(|| black_box($f(black_box(&$nums))));
            });
        )*
    };
}

fn grouping(criterion: &mut Criterion) {
    let seed = 0;
    let mut rng = StdRng::seed_from_u64(seed);

    let nums: Box<_> = std::iter::repeat_with(|| rng.random_range(0..1_000_000_u32))
        .take(200_000)
        .collect();

    println!("Seed: {seed}");
    println!("First 10 elements: {:?}", &nums[..10]);

    let mut group = criterion.benchmark_group("grouping");
    bench_fn!(group, nums, entry_api grouping_by grouping_by_count);
    group.finish();

    let mut group = criterion.benchmark_group("partition");
    bench_fn!(group, nums, iter_partition partition partition_count);
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(5))
        .measurement_time(Duration::from_secs(15))
        .sample_size(100);
    targets = grouping
}
criterion_main!(benches);

fn entry_api(nums: &[u32]) -> HashMap<u32, Vec<u32>> {
    let mut groups = HashMap::<_, Vec<_>>::new();
    for &n in nums {
        groups.entry(n % 64).or_default().push(n);
    }
    groups
}

fn grouping_by(nums: &[u32]) -> HashMap<u32, Vec<u32>> {
    Stream::of(nums.iter().copied()).collect(collectors::grouping_by(|n: &u32| n % 64))
}

fn grouping_by_count(nums: &[u32]) -> HashMap<u32, usize> {
    Stream::of(nums.iter().copied()).collect(collectors::grouping_by_downstream(
        |n: &u32| n % 64,
        collectors::reducing_mapper(0, |_: u32| 1, |a, b| a + b),
    ))
}

fn iter_partition(nums: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let (even, odd) = nums.iter().partition(|&&n| n.is_multiple_of(2));
    (odd, even)
}

fn partition(nums: &[u32]) -> (Vec<u32>, Vec<u32>) {
    Stream::of(nums.iter().copied())
        .collect(collectors::partition(|n: &u32| n.is_multiple_of(2)))
}

fn partition_count(nums: &[u32]) -> (usize, usize) {
    Stream::of(nums.iter().copied()).collect(collectors::partition_downstream(
        |n: &u32| n.is_multiple_of(2),
        collectors::reducing_mapper(0, |_: u32| 1, |a, b| a + b),
    ))
}
