use crate::error::DescentError;
use crate::gradient::{sse_gradient, sse_loss};
use crate::params::Params;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for component {component}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        component: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for component {component}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        component: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for component {component}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { component: usize, value: f64 },

    #[error("Evaluation error during gradient check: {0}")]
    EvaluationError(DescentError),
}

impl From<DescentError> for GradCheckError {
    fn from(err: DescentError) -> Self {
        GradCheckError::EvaluationError(err)
    }
}

/// Checks [`sse_gradient`] against central finite differences of [`sse_loss`] at `w`.
///
/// A component passes when `|analytical - numerical| <= tolerance * max(1, |numerical|)`.
pub fn check_gradient(
    w: &Params,
    xs: &[f64],
    ys: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError> {
    let analytical = sse_gradient(w, xs, ys)?;

    for component in 0..2 {
        let analytical_grad = analytical.0[component];
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                component,
                value: analytical_grad,
            });
        }

        let mut plus = *w;
        plus.0[component] += epsilon;
        let mut minus = *w;
        minus.0[component] -= epsilon;

        let loss_plus = sse_loss(&plus, xs, ys)?;
        let loss_minus = sse_loss(&minus, xs, ys)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                component,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > tolerance * numerical_grad.abs().max(1.0) {
            return Err(GradCheckError::GradientMismatch {
                component,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}
