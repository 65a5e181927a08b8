use descent_data::datasets::synthetic::noisy_line;
use descent_data::LinearDataset;
use descent_optim::seeded_rng;

/// The noiseless line `y = x + 1` sampled at `x = 0, 0.5, 1`.
#[allow(dead_code)]
pub(crate) fn three_points() -> LinearDataset {
    LinearDataset::new(vec![0.0, 0.5, 1.0], vec![1.0, 1.5, 2.0]).expect("Test dataset creation failed")
}

/// Noisy line with `n` points, reproducible through `seed`.
#[allow(dead_code)]
pub(crate) fn noisy(n: usize, seed: u64) -> LinearDataset {
    noisy_line(n, 1.0, &mut seeded_rng(seed)).expect("Test dataset creation failed")
}
