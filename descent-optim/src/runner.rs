//! The optimizer loop shared by every update rule.

use crate::config::{RunConfig, Sampling};
use crate::trajectory::{RunOutput, Trajectory};
use descent_core::optim::Optimizer;
use descent_core::{sse_gradient, DescentError, Params};
use descent_data::{DataLoader, Dataset, LinearDataset, RandomSampler, Sampler, SequentialSampler};
use log::{debug, info, log_enabled, trace, Level};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound on the snapshots reserved up front; longer runs grow on demand.
const MAX_PREALLOCATED_STEPS: usize = 1 << 16;

/// Generator handed to a run. Same seed, same shuffles.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Runs `config` on `dataset`, drawing epoch shuffles from `rng`.
///
/// Parameters start at `config.initial` and the rule accumulators start at zero.
///
/// # Errors
/// Configuration errors are reported before the first step. `NonFiniteParams`
/// aborts the run as soon as an update leaves the finite range.
pub fn run<R: Rng + ?Sized>(
    dataset: &LinearDataset,
    config: &RunConfig,
    rng: &mut R,
) -> Result<RunOutput, DescentError> {
    config.validate(dataset.len())?;
    let label = config.label();
    let mut rule = config.rule.build(config.lr)?;
    let mut params = config.initial;

    info!(
        "Starting {} run: lr={}, epochs={}, {} points",
        label,
        config.lr,
        config.epochs,
        dataset.len()
    );

    let trajectory = match config.sampling {
        Sampling::FullBatch => full_batch(dataset, config.epochs, rule.as_mut(), &mut params)?,
        Sampling::MiniBatch {
            batch_size,
            shuffle,
            drop_last,
        } => {
            if shuffle {
                let loader = DataLoader::new(dataset, batch_size, RandomSampler::new(), drop_last)?;
                mini_batches(&loader, config.epochs, rule.as_mut(), &mut params, rng)?
            } else {
                let loader =
                    DataLoader::new(dataset, batch_size, SequentialSampler::new(), drop_last)?;
                mini_batches(&loader, config.epochs, rule.as_mut(), &mut params, rng)?
            }
        }
    };

    let final_loss = dataset.loss(&params)?;
    info!(
        "Finished {} run after {} steps: w={}, loss={:.6}",
        label,
        trajectory.steps().len(),
        params,
        final_loss
    );
    Ok(RunOutput {
        label,
        final_params: params,
        final_loss,
        trajectory,
    })
}

/// Runs every configuration with its own generator, seeded with `seed + index`.
///
/// Each result is independent of the other entries and of their order.
pub fn run_all(
    dataset: &LinearDataset,
    configs: &[RunConfig],
    seed: u64,
) -> Result<Vec<RunOutput>, DescentError> {
    configs
        .iter()
        .enumerate()
        .map(|(i, config)| {
            let mut rng = seeded_rng(seed.wrapping_add(i as u64));
            run(dataset, config, &mut rng)
        })
        .collect()
}

fn apply_step(
    rule: &mut dyn Optimizer,
    params: &mut Params,
    grad: &Params,
) -> Result<(), DescentError> {
    rule.step(params, grad)?;
    if !params.is_finite() {
        return Err(DescentError::NonFiniteParams {
            step: rule.iterations() as usize,
            params: *params,
        });
    }
    Ok(())
}

fn log_epoch(dataset: &LinearDataset, epoch: usize, params: &Params) -> Result<(), DescentError> {
    if log_enabled!(Level::Debug) {
        debug!("epoch {}: w={}, loss={:.6}", epoch + 1, params, dataset.loss(params)?);
    }
    Ok(())
}

fn full_batch(
    dataset: &LinearDataset,
    epochs: usize,
    rule: &mut dyn Optimizer,
    params: &mut Params,
) -> Result<Trajectory, DescentError> {
    let reserved = epochs.min(MAX_PREALLOCATED_STEPS);
    let mut trajectory = Trajectory::with_capacity(reserved, reserved);
    for epoch in 0..epochs {
        let grad = dataset.gradient(params)?;
        apply_step(rule, params, &grad)?;
        trajectory.record_step(*params);
        trajectory.record_epoch(*params);
        log_epoch(dataset, epoch, params)?;
    }
    Ok(trajectory)
}

fn mini_batches<S: Sampler, R: Rng + ?Sized>(
    loader: &DataLoader<'_, LinearDataset, S>,
    epochs: usize,
    rule: &mut dyn Optimizer,
    params: &mut Params,
    rng: &mut R,
) -> Result<Trajectory, DescentError> {
    let dataset = loader.dataset();
    let steps = epochs.saturating_mul(loader.num_batches()).min(MAX_PREALLOCATED_STEPS);
    let mut trajectory = Trajectory::with_capacity(steps, epochs.min(MAX_PREALLOCATED_STEPS));
    for epoch in 0..epochs {
        for batch in loader.epoch(&mut *rng) {
            let (xs, ys) = dataset.select(&batch)?;
            let grad = sse_gradient(params, &xs, &ys)?;
            apply_step(rule, params, &grad)?;
            trace!("batch {:?}: w={}", batch, params);
            trajectory.record_step(*params);
        }
        trajectory.record_epoch(*params);
        log_epoch(dataset, epoch, params)?;
    }
    Ok(trajectory)
}
