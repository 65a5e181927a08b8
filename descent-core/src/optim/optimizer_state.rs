use crate::params::Params;

/// Represents the accumulated state of an update rule.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OptimizerState {
    /// Batch / stochastic descent carry nothing between steps besides the step count.
    #[default]
    Plain,
    /// State specific to the momentum rule.
    Momentum { velocity: Params, iterations: u64 },
    /// State specific to the RMSprop rule.
    RmsProp { square_avg: Params, iterations: u64 },
}

impl OptimizerState {
    pub fn name(&self) -> &'static str {
        match self {
            OptimizerState::Plain => "plain",
            OptimizerState::Momentum { .. } => "momentum",
            OptimizerState::RmsProp { .. } => "rmsprop",
        }
    }
}
