//! Data side of the descent workspace: the regression dataset, the synthetic
//! generator, samplers and the epoch-wise [`DataLoader`].

pub mod dataloader;
pub mod datasets;
pub mod samplers;

pub use dataloader::DataLoader;
pub use datasets::{Dataset, LinearDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
