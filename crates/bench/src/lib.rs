use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RUNTIME_SAMPLE_SIZE: usize = 15;
const RUNTIME_WARM_UP_MS: u64 = 100;
const RUNTIME_MEASURE_MS: u64 = 200;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Random `(i, j)` pairs with `i <= j <= len`.
pub fn random_block_pairs<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    count: usize,
) -> Vec<(usize, usize)> {
    (0..count)
        .map(|_| {
            let j = rng.random_range(0..=len);
            let i = rng.random_range(0..=j);
            (i, j)
        })
        .collect()
}
