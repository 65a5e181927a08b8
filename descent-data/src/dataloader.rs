//! # DataLoader
//!
//! Splits the index order produced by a [`Sampler`] into consecutive batches,
//! one epoch at a time.
//!
//! ```rust
//! use descent_data::dataloader::DataLoader;
//! use descent_data::datasets::LinearDataset;
//! use descent_data::samplers::SequentialSampler;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let dataset = LinearDataset::new(vec![0.0, 0.5, 1.0], vec![1.0, 1.5, 2.0]).unwrap();
//! let loader = DataLoader::new(&dataset, 2, SequentialSampler::new(), false).unwrap();
//! let mut rng = StdRng::seed_from_u64(0);
//! let batches: Vec<_> = loader.epoch(&mut rng).collect();
//! assert_eq!(batches, vec![vec![0, 1], vec![2]]);
//! ```
//!
//! When the dataset length is not a multiple of `batch_size`, the last batch is
//! shorter. `drop_last` discards it instead.

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use descent_core::DescentError;
use rand::Rng;

/// Batching of a borrowed dataset.
///
/// # Fields
/// - `dataset`: The source dataset.
/// - `batch_size`: Number of indices per batch.
/// - `sampler`: Produces the index order of each epoch.
/// - `drop_last`: If true, the last batch is ignored when incomplete.
#[derive(Debug)]
pub struct DataLoader<'a, D: Dataset, S: Sampler> {
    dataset: &'a D,
    batch_size: usize,
    sampler: S,
    drop_last: bool,
}

impl<'a, D: Dataset, S: Sampler> DataLoader<'a, D, S> {
    /// Creates a new DataLoader.
    ///
    /// # Errors
    /// `EmptyInput` for an empty dataset, `ConfigurationError` if `batch_size` is
    /// zero or larger than the dataset.
    pub fn new(
        dataset: &'a D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
    ) -> Result<Self, DescentError> {
        if dataset.is_empty() {
            return Err(DescentError::EmptyInput {
                operation: "DataLoader::new".to_string(),
            });
        }
        if batch_size == 0 || batch_size > dataset.len() {
            return Err(DescentError::ConfigurationError(format!(
                "Batch size must be in [1, {}], got {}",
                dataset.len(),
                batch_size
            )));
        }
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
        })
    }

    pub fn dataset(&self) -> &'a D {
        self.dataset
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn drop_last(&self) -> bool {
        self.drop_last
    }

    /// Number of batches yielded per epoch.
    pub fn num_batches(&self) -> usize {
        let total = self.sampler.len(self.dataset.len());
        if self.drop_last {
            total / self.batch_size
        } else {
            total.div_ceil(self.batch_size)
        }
    }

    /// Draws the index order of a new epoch and returns its batches of indices.
    ///
    /// Every call consults the sampler again, so random samplers reshuffle.
    pub fn epoch<R: Rng + ?Sized>(&self, rng: &mut R) -> EpochBatches {
        let indices: Vec<usize> = self.sampler.iter(self.dataset.len(), rng).collect();
        EpochBatches {
            indices,
            batch_size: self.batch_size,
            drop_last: self.drop_last,
            position: 0,
        }
    }

    /// Same as [`DataLoader::epoch`], but resolves indices to dataset items.
    pub fn epoch_items<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<Vec<D::Item>>, DescentError> {
        self.epoch(rng)
            .map(|batch| {
                batch
                    .into_iter()
                    .map(|idx| self.dataset.get(idx))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect()
    }
}

/// Batches of one epoch, in sampler order.
#[derive(Debug, Clone)]
pub struct EpochBatches {
    indices: Vec<usize>,
    batch_size: usize,
    drop_last: bool,
    position: usize,
}

impl EpochBatches {
    /// The full index order drawn for this epoch.
    pub fn order(&self) -> &[usize] {
        &self.indices
    }
}

impl Iterator for EpochBatches {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.indices.len() - self.position;
        if remaining == 0 || (self.drop_last && remaining < self.batch_size) {
            return None;
        }
        let end = self.position + remaining.min(self.batch_size);
        let batch = self.indices[self.position..end].to_vec();
        self.position = end;
        Some(batch)
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
