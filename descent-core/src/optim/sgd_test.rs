use super::*;
use approx::assert_abs_diff_eq;

#[test]
fn test_sgd_basic_step() -> Result<(), DescentError> {
    let mut optimizer = SgdOptimizer::new(0.1)?;
    let mut w = Params::new(1.0, 2.0);
    optimizer.step(&mut w, &Params::new(10.0, -20.0))?;
    // [1, 2] - 0.1 * [10, -20] = [0, 4]
    assert_abs_diff_eq!(w.intercept(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(w.slope(), 4.0, epsilon = 1e-12);
    assert_eq!(optimizer.iterations(), 1);
    Ok(())
}

#[test]
fn test_sgd_invalid_lr() {
    assert!(SgdOptimizer::new(0.0).is_err());
    assert!(SgdOptimizer::new(-0.1).is_err());
    assert!(SgdOptimizer::new(f64::NAN).is_err());
}

#[test]
fn test_sgd_set_lr() -> Result<(), DescentError> {
    let mut optimizer = SgdOptimizer::new(0.1)?;
    optimizer.set_lr(0.5)?;
    let mut w = Params::ZERO;
    optimizer.step(&mut w, &Params::new(1.0, 1.0))?;
    assert_eq!(w, Params::new(-0.5, -0.5));

    for bad in [0.0, -0.5, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            optimizer.set_lr(bad),
            Err(DescentError::ConfigurationError(_))
        ));
        assert_eq!(optimizer.lr(), 0.5);
    }
    Ok(())
}

#[test]
fn test_sgd_state_dict() -> Result<(), DescentError> {
    let mut optimizer = SgdOptimizer::new(0.1)?;
    let mut w = Params::ZERO;
    optimizer.step(&mut w, &Params::new(1.0, 1.0))?;
    assert_eq!(optimizer.state_dict(), OptimizerState::Plain);
    optimizer.load_state_dict(&OptimizerState::Plain)?;
    assert_eq!(optimizer.iterations(), 0);

    let foreign = OptimizerState::RmsProp {
        square_avg: Params::new(1.0, 1.0),
        iterations: 3,
    };
    assert!(matches!(
        optimizer.load_state_dict(&foreign),
        Err(DescentError::IncompatibleState(_))
    ));
    Ok(())
}
