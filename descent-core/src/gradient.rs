//! Sum-of-squared-errors loss and its analytic gradient for `y = w0 + w1 * x`.
//!
//! `L(w) = 1/2 * Σ (y_i - w0 - w1 * x_i)^2`

use crate::error::DescentError;
use crate::params::Params;

fn check_inputs(xs: &[f64], ys: &[f64], operation: &str) -> Result<(), DescentError> {
    if xs.len() != ys.len() {
        return Err(DescentError::ShapeMismatch {
            expected: xs.len(),
            actual: ys.len(),
            operation: operation.to_string(),
        });
    }
    if xs.is_empty() {
        return Err(DescentError::EmptyInput {
            operation: operation.to_string(),
        });
    }
    Ok(())
}

/// Residual `y - w0 - w1 * x` of a single point.
#[inline]
pub fn residual(w: &Params, x: f64, y: f64) -> f64 {
    y - w.intercept() - w.slope() * x
}

/// Gradient of the SSE loss over the points `(xs[i], ys[i])`.
///
/// ```text
/// g0 = -Σ r_i
/// g1 = -Σ r_i * x_i        with r_i = y_i - w0 - w1 * x_i
/// ```
///
/// # Errors
/// `ShapeMismatch` if `xs` and `ys` differ in length, `EmptyInput` if they are empty.
pub fn sse_gradient(w: &Params, xs: &[f64], ys: &[f64]) -> Result<Params, DescentError> {
    check_inputs(xs, ys, "sse_gradient")?;
    let (g0, g1) = xs
        .iter()
        .zip(ys.iter())
        .fold((0.0, 0.0), |(g0, g1), (&x, &y)| {
            let r = residual(w, x, y);
            (g0 - r, g1 - r * x)
        });
    Ok(Params::new(g0, g1))
}

/// Value of the SSE loss `1/2 * Σ r_i^2`.
pub fn sse_loss(w: &Params, xs: &[f64], ys: &[f64]) -> Result<f64, DescentError> {
    check_inputs(xs, ys, "sse_loss")?;
    let sum_sq: f64 = xs
        .iter()
        .zip(ys.iter())
        .map(|(&x, &y)| residual(w, x, y).powi(2))
        .sum();
    Ok(0.5 * sum_sq)
}

/// Closed-form least-squares fit, used as a reference point for the loss surface.
///
/// Returns `None` when every `x` is identical and the slope is undetermined.
pub fn least_squares(xs: &[f64], ys: &[f64]) -> Result<Option<Params>, DescentError> {
    check_inputs(xs, ys, "least_squares")?;
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let (sxy, sxx) = xs
        .iter()
        .zip(ys.iter())
        .fold((0.0, 0.0), |(sxy, sxx), (&x, &y)| {
            let dx = x - mean_x;
            (sxy + dx * (y - mean_y), sxx + dx * dx)
        });
    if sxx == 0.0 {
        return Ok(None);
    }
    let slope = sxy / sxx;
    Ok(Some(Params::new(mean_y - slope * mean_x, slope)))
}

#[cfg(test)]
#[path = "gradient_test.rs"]
mod tests;
