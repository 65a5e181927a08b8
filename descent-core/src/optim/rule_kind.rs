use super::momentum::MomentumOptimizer;
use super::optimizer_trait::Optimizer;
use super::rmsprop::{RmsPropOptimizer, DEFAULT_EPS};
use super::sgd::SgdOptimizer;
use crate::error::DescentError;

/// Selects which update rule a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RuleKind {
    /// `w <- w - lr * grad`
    #[default]
    Sgd,
    /// Exponentially averaged velocity, see [`MomentumOptimizer`].
    Momentum { momentum: f64 },
    /// RMS-normalized gradient, see [`RmsPropOptimizer`].
    RmsProp { decay: f64, eps: f64 },
}

impl RuleKind {
    /// RMSprop with the default epsilon.
    pub fn rmsprop(decay: f64) -> Self {
        RuleKind::RmsProp {
            decay,
            eps: DEFAULT_EPS,
        }
    }

    /// Instantiates the rule with fresh, zeroed accumulators.
    pub fn build(&self, lr: f64) -> Result<Box<dyn Optimizer>, DescentError> {
        let rule: Box<dyn Optimizer> = match *self {
            RuleKind::Sgd => Box::new(SgdOptimizer::new(lr)?),
            RuleKind::Momentum { momentum } => Box::new(MomentumOptimizer::new(lr, momentum)?),
            RuleKind::RmsProp { decay, eps } => Box::new(RmsPropOptimizer::new(lr, decay, eps)?),
        };
        Ok(rule)
    }

    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Sgd => "sgd",
            RuleKind::Momentum { .. } => "momentum",
            RuleKind::RmsProp { .. } => "rmsprop",
        }
    }
}
