//! Update rules applied by the optimizer loop.
//!
//! This module provides the `Optimizer` trait, the `OptimizerState` snapshot
//! shared by all rules, and the implementations: plain descent (batch, stochastic
//! and mini-batch only differ in the points fed to the gradient), momentum and RMSprop.

pub mod momentum;
pub mod optimizer_state;
pub mod optimizer_trait;
pub mod rmsprop;
pub mod rule_kind;
pub mod sgd;

pub use momentum::MomentumOptimizer;
pub use optimizer_state::OptimizerState;
pub use optimizer_trait::Optimizer;
pub use rmsprop::{RmsPropHyperParams, RmsPropOptimizer, DEFAULT_EPS};
pub use rule_kind::RuleKind;
pub use sgd::SgdOptimizer;

use crate::error::DescentError;

pub(crate) fn validate_lr(lr: f64) -> Result<(), DescentError> {
    if !(lr > 0.0 && lr.is_finite()) {
        return Err(DescentError::config(format!(
            "Learning rate must be positive, got {}",
            lr
        )));
    }
    Ok(())
}

/// Momentum / decay coefficients live in `[0, 1)`.
pub(crate) fn validate_coefficient(name: &str, value: f64) -> Result<(), DescentError> {
    if !(0.0..1.0).contains(&value) {
        return Err(DescentError::config(format!(
            "{} must be in [0.0, 1.0), got {}",
            name, value
        )));
    }
    Ok(())
}
