use super::*;
use crate::datasets::LinearDataset;
use crate::samplers::{RandomSampler, SequentialSampler};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn dataset(n: usize) -> LinearDataset {
    let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x).collect();
    LinearDataset::new(xs, ys).expect("valid dataset")
}

#[test]
fn test_dataloader_sequential() -> Result<(), DescentError> {
    let data = dataset(6);
    let loader = DataLoader::new(&data, 2, SequentialSampler::new(), false)?;
    let mut rng = StdRng::seed_from_u64(0);
    let batches: Vec<Vec<usize>> = loader.epoch(&mut rng).collect();
    assert_eq!(batches, vec![vec![0, 1], vec![2, 3], vec![4, 5]]);
    assert_eq!(loader.num_batches(), 3);
    Ok(())
}

#[test]
fn test_dataloader_keeps_short_last_batch() -> Result<(), DescentError> {
    let data = dataset(5);
    let loader = DataLoader::new(&data, 2, SequentialSampler::new(), false)?;
    let mut rng = StdRng::seed_from_u64(0);
    let batches: Vec<Vec<usize>> = loader.epoch(&mut rng).collect();
    assert_eq!(batches, vec![vec![0, 1], vec![2, 3], vec![4]]);
    assert_eq!(loader.num_batches(), 3);
    Ok(())
}

#[test]
fn test_dataloader_drop_last() -> Result<(), DescentError> {
    let data = dataset(5);
    let loader = DataLoader::new(&data, 2, SequentialSampler::new(), true)?;
    let mut rng = StdRng::seed_from_u64(0);
    let batches: Vec<Vec<usize>> = loader.epoch(&mut rng).collect();
    assert_eq!(batches, vec![vec![0, 1], vec![2, 3]]);
    assert_eq!(loader.num_batches(), 2);
    assert_eq!(loader.batch_size(), 2);
    assert!(loader.drop_last());
    Ok(())
}

#[test]
fn test_dataloader_random_epochs_cover_all_indices() -> Result<(), DescentError> {
    let data = dataset(7);
    let loader = DataLoader::new(&data, 3, RandomSampler::new(), false)?;
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..4 {
        let mut seen: Vec<usize> = loader.epoch(&mut rng).flatten().collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..7).collect::<Vec<_>>());
    }
    Ok(())
}

#[test]
fn test_dataloader_epoch_order_matches_batches() -> Result<(), DescentError> {
    let data = dataset(8);
    let loader = DataLoader::new(&data, 3, RandomSampler::new(), false)?;
    let mut rng = StdRng::seed_from_u64(9);
    let epoch = loader.epoch(&mut rng);
    let order = epoch.order().to_vec();
    let flattened: Vec<usize> = epoch.flatten().collect();
    assert_eq!(order, flattened);
    Ok(())
}

#[test]
fn test_dataloader_epoch_items() -> Result<(), DescentError> {
    let data = dataset(3);
    let loader = DataLoader::new(&data, 2, SequentialSampler::new(), false)?;
    let mut rng = StdRng::seed_from_u64(0);
    let batches = loader.epoch_items(&mut rng)?;
    assert_eq!(batches, vec![vec![(0.0, 0.0), (1.0, 2.0)], vec![(2.0, 4.0)]]);
    Ok(())
}

#[test]
fn test_dataloader_invalid_batch_size() {
    let data = dataset(4);
    assert!(matches!(
        DataLoader::new(&data, 0, SequentialSampler::new(), false),
        Err(DescentError::ConfigurationError(_))
    ));
    assert!(matches!(
        DataLoader::new(&data, 5, SequentialSampler::new(), false),
        Err(DescentError::ConfigurationError(_))
    ));
    assert!(DataLoader::new(&data, 4, SequentialSampler::new(), true).is_ok());
}
