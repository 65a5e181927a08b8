use rand::Rng;
use std::fmt::Debug;

/// A Sampler trait that defines how to iterate over indices of a dataset.
///
/// Samplers are used by `DataLoader` to generate the index order of one epoch.
/// Randomness comes from the generator passed by the caller, never from a
/// process-wide source, so the same seed always gives the same order.
pub trait Sampler: Debug {
    /// Returns an iterator over the indices of a dataset for one epoch.
    ///
    /// # Arguments
    ///
    /// * `dataset_len` - The total number of items in the dataset.
    /// * `rng` - Generator consulted by random samplers.
    fn iter<R: Rng + ?Sized>(
        &self,
        dataset_len: usize,
        rng: &mut R,
    ) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Returns the total number of indices yielded per epoch.
    fn len(&self, dataset_len: usize) -> usize;
}
