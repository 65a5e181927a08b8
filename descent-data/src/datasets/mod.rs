pub mod linear_dataset;
pub mod synthetic;
pub mod traits;

pub use linear_dataset::LinearDataset;
pub use traits::Dataset;
