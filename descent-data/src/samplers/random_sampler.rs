use super::traits::Sampler;
use rand::seq::SliceRandom;
use rand::Rng;

/// Draws a fresh permutation of all indices on every call, without replacement.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSampler;

impl RandomSampler {
    pub fn new() -> Self {
        RandomSampler
    }
}

impl Sampler for RandomSampler {
    fn iter<R: Rng + ?Sized>(
        &self,
        dataset_len: usize,
        rng: &mut R,
    ) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }
        let mut indices: Vec<usize> = (0..dataset_len).collect();
        indices.shuffle(rng);
        Box::new(indices.into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        dataset_len
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
