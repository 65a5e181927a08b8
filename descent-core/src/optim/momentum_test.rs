use super::*;
use crate::optim::SgdOptimizer;
use approx::assert_abs_diff_eq;

#[test]
fn test_momentum_two_steps() -> Result<(), DescentError> {
    let (lr, momentum) = (0.1, 0.9);
    let mut optimizer = MomentumOptimizer::new(lr, momentum)?;
    let mut w = Params::new(1.0, 2.0);
    let g1 = Params::new(1.0, -2.0);
    let g2 = Params::new(0.5, 0.5);

    optimizer.step(&mut w, &g1)?;
    // velocity = 0.1 * g1
    assert_abs_diff_eq!(optimizer.velocity().intercept(), 0.1, epsilon = 1e-12);
    assert_abs_diff_eq!(optimizer.velocity().slope(), -0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(w.intercept(), 0.99, epsilon = 1e-12);
    assert_abs_diff_eq!(w.slope(), 2.02, epsilon = 1e-12);

    optimizer.step(&mut w, &g2)?;
    // velocity = 0.9 * [0.1, -0.2] + 0.1 * [0.5, 0.5] = [0.14, -0.13]
    assert_abs_diff_eq!(optimizer.velocity().intercept(), 0.14, epsilon = 1e-12);
    assert_abs_diff_eq!(optimizer.velocity().slope(), -0.13, epsilon = 1e-12);
    assert_abs_diff_eq!(w.intercept(), 0.976, epsilon = 1e-12);
    assert_abs_diff_eq!(w.slope(), 2.033, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_zero_momentum_matches_sgd() -> Result<(), DescentError> {
    let mut momentum = MomentumOptimizer::new(0.05, 0.0)?;
    let mut sgd = SgdOptimizer::new(0.05)?;
    let mut w_momentum = Params::new(0.3, -0.7);
    let mut w_sgd = w_momentum;
    let grads = [
        Params::new(1.0, 2.0),
        Params::new(-3.0, 0.5),
        Params::new(0.25, -1.25),
    ];
    for g in grads.iter() {
        momentum.step(&mut w_momentum, g)?;
        sgd.step(&mut w_sgd, g)?;
        assert_eq!(w_momentum, w_sgd);
    }
    Ok(())
}

#[test]
fn test_momentum_invalid_hyperparams() {
    assert!(MomentumOptimizer::new(-0.1, 0.9).is_err());
    assert!(MomentumOptimizer::new(0.1, -0.1).is_err());
    assert!(MomentumOptimizer::new(0.1, 1.0).is_err());
    assert!(MomentumOptimizer::new(0.1, 0.0).is_ok());
}

#[test]
fn test_momentum_set_lr() -> Result<(), DescentError> {
    let mut optimizer = MomentumOptimizer::new(0.1, 0.9)?;
    assert_eq!(optimizer.momentum(), 0.9);
    optimizer.set_lr(0.2)?;
    assert_eq!(optimizer.lr(), 0.2);
    assert!(optimizer.set_lr(-0.5).is_err());
    assert!(optimizer.set_lr(f64::NAN).is_err());
    assert_eq!(optimizer.lr(), 0.2);
    Ok(())
}

#[test]
fn test_momentum_reset_and_state_dict() -> Result<(), DescentError> {
    let mut optimizer = MomentumOptimizer::new(0.1, 0.5)?;
    let mut w = Params::ZERO;
    optimizer.step(&mut w, &Params::new(2.0, 4.0))?;
    let saved = optimizer.state_dict();
    assert_eq!(
        saved,
        OptimizerState::Momentum {
            velocity: Params::new(1.0, 2.0),
            iterations: 1,
        }
    );

    optimizer.reset();
    assert_eq!(optimizer.velocity(), Params::ZERO);
    assert_eq!(optimizer.iterations(), 0);

    optimizer.load_state_dict(&saved)?;
    assert_eq!(optimizer.velocity(), Params::new(1.0, 2.0));
    assert_eq!(optimizer.iterations(), 1);

    let foreign = OptimizerState::RmsProp {
        square_avg: Params::ZERO,
        iterations: 0,
    };
    assert!(optimizer.load_state_dict(&foreign).is_err());

    for bad in [f64::NAN, f64::INFINITY] {
        let corrupt = OptimizerState::Momentum {
            velocity: Params::new(bad, 0.0),
            iterations: 2,
        };
        assert!(matches!(
            optimizer.load_state_dict(&corrupt),
            Err(DescentError::IncompatibleState(_))
        ));
    }
    assert_eq!(optimizer.velocity(), Params::new(1.0, 2.0));
    Ok(())
}
