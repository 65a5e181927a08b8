use super::optimizer_state::OptimizerState;
use crate::error::DescentError;
use crate::params::Params;

/// Trait defining the common interface for all update rules.
///
/// An optimizer owns its accumulators (velocity, squared-gradient average) for
/// the lifetime of one run, while the parameter vector itself is owned by the loop.
pub trait Optimizer: std::fmt::Debug {
    /// Applies one update to `params` using `grad`, the gradient evaluated at `params`.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `DescentError` otherwise.
    fn step(&mut self, params: &mut Params, grad: &Params) -> Result<(), DescentError>;

    /// Clears the accumulated state, as at the start of a run.
    fn reset(&mut self);

    /// Current learning rate.
    fn lr(&self) -> f64;

    /// Overrides the learning rate for the following steps.
    ///
    /// # Errors
    ///
    /// `ConfigurationError` if `lr` is not strictly positive and finite. The
    /// previous rate is kept in that case.
    fn set_lr(&mut self, lr: f64) -> Result<(), DescentError>;

    /// Number of steps taken since the last reset.
    fn iterations(&self) -> u64;

    /// Loads the optimizer's state from an `OptimizerState` object.
    ///
    /// # Errors
    ///
    /// `IncompatibleState` if the state was produced by another update rule.
    fn load_state_dict(&mut self, state_dict: &OptimizerState) -> Result<(), DescentError>;

    /// Returns the optimizer's current state as an `OptimizerState` object.
    fn state_dict(&self) -> OptimizerState;
}
