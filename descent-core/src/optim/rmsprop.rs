use crate::error::DescentError;
use crate::optim::optimizer_state::OptimizerState;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::{validate_coefficient, validate_lr};
use crate::params::Params;

/// Default stabilizer added to the RMS denominator.
pub const DEFAULT_EPS: f64 = 1e-8;

#[derive(Clone, Debug, PartialEq)]
pub struct RmsPropHyperParams {
    pub lr: f64,
    /// Decay of the squared-gradient running average.
    pub decay: f64,
    pub eps: f64,
}

/// RMSprop: gradient scaled by a running RMS of past gradients.
///
/// ```text
/// square_avg <- decay * square_avg + (1 - decay) * grad^2
/// w          <- w - lr * grad / (sqrt(square_avg) + eps)
/// ```
///
/// The normalized step has roughly unit size per component, so `lr` is usually
/// much smaller than for the other rules.
#[derive(Debug, Clone)]
pub struct RmsPropOptimizer {
    hyper: RmsPropHyperParams,
    square_avg: Params,
    iterations: u64,
}

impl RmsPropOptimizer {
    /// # Errors
    ///
    /// `ConfigurationError` if `lr <= 0`, `decay` is outside `[0, 1)` or `eps <= 0`.
    pub fn new(lr: f64, decay: f64, eps: f64) -> Result<Self, DescentError> {
        validate_lr(lr)?;
        validate_coefficient("Decay", decay)?;
        if !(eps > 0.0 && eps.is_finite()) {
            return Err(DescentError::config("Epsilon must be positive"));
        }
        Ok(Self {
            hyper: RmsPropHyperParams { lr, decay, eps },
            square_avg: Params::ZERO,
            iterations: 0,
        })
    }

    pub fn hyper_params(&self) -> &RmsPropHyperParams {
        &self.hyper
    }

    pub fn square_avg(&self) -> Params {
        self.square_avg
    }

    /// Denominator `sqrt(square_avg) + eps` of the next update.
    pub fn denominator(&self) -> Params {
        self.square_avg.sqrt() + self.hyper.eps
    }
}

impl Optimizer for RmsPropOptimizer {
    fn step(&mut self, params: &mut Params, grad: &Params) -> Result<(), DescentError> {
        self.iterations += 1;
        let RmsPropHyperParams { lr, decay, .. } = self.hyper;
        self.square_avg = self.square_avg * decay + grad.square() * (1.0 - decay);
        *params -= (*grad / self.denominator()) * lr;
        Ok(())
    }

    fn reset(&mut self) {
        self.square_avg = Params::ZERO;
        self.iterations = 0;
    }

    fn lr(&self) -> f64 {
        self.hyper.lr
    }

    fn set_lr(&mut self, lr: f64) -> Result<(), DescentError> {
        validate_lr(lr)?;
        self.hyper.lr = lr;
        Ok(())
    }

    fn iterations(&self) -> u64 {
        self.iterations
    }

    fn load_state_dict(&mut self, state_dict: &OptimizerState) -> Result<(), DescentError> {
        match state_dict {
            OptimizerState::RmsProp {
                square_avg,
                iterations,
            } => {
                if !square_avg.is_finite() || square_avg.0.iter().any(|v| *v < 0.0) {
                    return Err(DescentError::IncompatibleState(format!(
                        "RMSprop square average must be finite and non-negative, got {}",
                        square_avg
                    )));
                }
                self.square_avg = *square_avg;
                self.iterations = *iterations;
                Ok(())
            }
            other => Err(DescentError::IncompatibleState(format!(
                "Expected rmsprop state for RmsPropOptimizer, got {}",
                other.name()
            ))),
        }
    }

    fn state_dict(&self) -> OptimizerState {
        OptimizerState::RmsProp {
            square_avg: self.square_avg,
            iterations: self.iterations,
        }
    }
}

#[cfg(test)]
#[path = "rmsprop_test.rs"]
mod tests;
