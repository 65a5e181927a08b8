use super::*;

#[test]
fn test_linear_dataset_creation_and_len() -> Result<(), DescentError> {
    let dataset = LinearDataset::new(vec![0.0, 0.5, 1.0], vec![1.0, 1.5, 2.0])?;
    assert_eq!(dataset.len(), 3);
    assert!(!dataset.is_empty());
    assert_eq!(dataset.xs(), &[0.0, 0.5, 1.0]);
    assert_eq!(dataset.ys(), &[1.0, 1.5, 2.0]);
    Ok(())
}

#[test]
fn test_linear_dataset_length_mismatch() {
    let err = LinearDataset::new(vec![0.0, 1.0], vec![1.0]).unwrap_err();
    assert!(matches!(
        err,
        DescentError::ShapeMismatch {
            expected: 2,
            actual: 1,
            ..
        }
    ));
}

#[test]
fn test_linear_dataset_empty() {
    let err = LinearDataset::new(vec![], vec![]).unwrap_err();
    assert!(matches!(err, DescentError::EmptyInput { .. }));
}

#[test]
fn test_linear_dataset_get() -> Result<(), DescentError> {
    let dataset = LinearDataset::new(vec![0.0, 0.5], vec![1.0, 1.5])?;
    assert_eq!(dataset.get(1)?, (0.5, 1.5));
    assert_eq!(
        dataset.get(2),
        Err(DescentError::IndexOutOfBounds { index: 2, len: 2 })
    );
    Ok(())
}

#[test]
fn test_linear_dataset_select_keeps_order() -> Result<(), DescentError> {
    let dataset = LinearDataset::new(vec![0.0, 1.0, 2.0, 3.0], vec![10.0, 11.0, 12.0, 13.0])?;
    let (xs, ys) = dataset.select(&[3, 0, 2])?;
    assert_eq!(xs, vec![3.0, 0.0, 2.0]);
    assert_eq!(ys, vec![13.0, 10.0, 12.0]);
    assert!(dataset.select(&[0, 4]).is_err());
    Ok(())
}

#[test]
fn test_linear_dataset_loss_and_gradient() -> Result<(), DescentError> {
    let dataset = LinearDataset::new(vec![0.0, 0.5, 1.0], vec![1.0, 1.5, 2.0])?;
    assert_eq!(dataset.loss(&Params::new(1.0, 1.0))?, 0.0);
    assert_eq!(dataset.gradient(&Params::ZERO)?, Params::new(-4.5, -2.75));
    Ok(())
}
