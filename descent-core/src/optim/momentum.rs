use crate::error::DescentError;
use crate::optim::optimizer_state::OptimizerState;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::{validate_coefficient, validate_lr};
use crate::params::Params;

/// Gradient descent with an exponentially averaged velocity.
///
/// ```text
/// velocity <- momentum * velocity + (1 - momentum) * grad
/// w        <- w - lr * velocity
/// ```
///
/// With `momentum = 0` this is exactly [`SgdOptimizer`](super::SgdOptimizer).
#[derive(Debug, Clone)]
pub struct MomentumOptimizer {
    lr: f64,
    momentum: f64,
    velocity: Params,
    iterations: u64,
}

impl MomentumOptimizer {
    /// Creates a new `MomentumOptimizer` with a zero velocity.
    ///
    /// # Errors
    ///
    /// `ConfigurationError` if `lr <= 0` or `momentum` is outside `[0, 1)`.
    pub fn new(lr: f64, momentum: f64) -> Result<Self, DescentError> {
        validate_lr(lr)?;
        validate_coefficient("Momentum", momentum)?;
        Ok(MomentumOptimizer {
            lr,
            momentum,
            velocity: Params::ZERO,
            iterations: 0,
        })
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn velocity(&self) -> Params {
        self.velocity
    }
}

impl Optimizer for MomentumOptimizer {
    fn step(&mut self, params: &mut Params, grad: &Params) -> Result<(), DescentError> {
        self.iterations += 1;
        self.velocity = self.velocity * self.momentum + *grad * (1.0 - self.momentum);
        *params -= self.velocity * self.lr;
        Ok(())
    }

    fn reset(&mut self) {
        self.velocity = Params::ZERO;
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
            OptimizerState::Momentum {
                velocity,
                iterations,
            } => {
                if !velocity.is_finite() {
                    return Err(DescentError::IncompatibleState(format!(
                        "Momentum velocity must be finite, got {}",
                        velocity
                    )));
                }
                if self.momentum == 0.0 && *velocity != Params::ZERO {
                    log::warn!("Loading a non-zero velocity, but optimizer momentum is 0. It will be discarded on the next step.");
                }
                self.velocity = *velocity;
                self.iterations = *iterations;
                Ok(())
            }
            OptimizerState::Plain => {
                log::warn!("Loading Plain state into MomentumOptimizer. Velocity is reset to zero.");
                self.reset();
                Ok(())
            }
            other => Err(DescentError::IncompatibleState(format!(
                "Attempted to load {} state into MomentumOptimizer",
                other.name()
            ))),
        }
    }

    fn state_dict(&self) -> OptimizerState {
        OptimizerState::Momentum {
            velocity: self.velocity,
            iterations: self.iterations,
        }
    }
}

#[cfg(test)]
#[path = "momentum_test.rs"]
mod tests;
