use crate::error::DescentError;
use crate::optim::optimizer_state::OptimizerState;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::validate_lr;
use crate::params::Params;

/// Plain gradient descent: `w <- w - lr * grad`.
///
/// Whether this is batch, stochastic or mini-batch descent depends only on which
/// points the loop used to evaluate `grad`.
#[derive(Debug, Clone)]
pub struct SgdOptimizer {
    lr: f64,
    iterations: u64,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Errors
    ///
    /// `ConfigurationError` if `lr` is not strictly positive and finite.
    pub fn new(lr: f64) -> Result<Self, DescentError> {
        validate_lr(lr)?;
        Ok(SgdOptimizer { lr, iterations: 0 })
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self, params: &mut Params, grad: &Params) -> Result<(), DescentError> {
        self.iterations += 1;
        *params -= *grad * self.lr;
        Ok(())
    }

    fn reset(&mut self) {
        self.iterations = 0;
    }

    fn lr(&self) -> f64 {
        self.lr
    }

    fn set_lr(&mut self, lr: f64) -> Result<(), DescentError> {
        validate_lr(lr)?;
        self.lr = lr;
        Ok(())
    }

    fn iterations(&self) -> u64 {
        self.iterations
    }

    fn load_state_dict(&mut self, state_dict: &OptimizerState) -> Result<(), DescentError> {
        match state_dict {
            OptimizerState::Plain => {
                self.iterations = 0;
                Ok(())
            }
            OptimizerState::Momentum { velocity, .. } if *velocity == Params::ZERO => {
                log::warn!("Loading an empty momentum state into SgdOptimizer. Velocity is ignored.");
                self.iterations = 0;
                Ok(())
            }
            other => Err(DescentError::IncompatibleState(format!(
                "Attempted to load {} state into SgdOptimizer",
                other.name()
            ))),
        }
    }

    fn state_dict(&self) -> OptimizerState {
        OptimizerState::Plain
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
