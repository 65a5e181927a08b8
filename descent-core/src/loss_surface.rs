//! Loss values over a mesh of candidate `(intercept, slope)` pairs, for contour plots.

use crate::error::DescentError;
use crate::gradient::sse_loss;
use crate::params::Params;
use log::{debug, warn};

/// Number of mesh points per axis used by contour plots.
pub const DEFAULT_RESOLUTION: usize = 101;

/// Evenly spaced grid of SSE loss values.
///
/// `values[i][j]` is the loss at `(intercepts[i], slopes[j])`.
#[derive(Debug, Clone, PartialEq)]
pub struct LossSurface {
    pub intercepts: Vec<f64>,
    pub slopes: Vec<f64>,
    pub values: Vec<Vec<f64>>,
}

/// `resolution` evenly spaced points from `start` to `end`, both included.
fn axis(start: f64, end: f64, resolution: usize) -> Vec<f64> {
    let step = (end - start) / (resolution - 1) as f64;
    (0..resolution).map(|i| start + step * i as f64).collect()
}

impl LossSurface {
    /// Evaluates the loss of `(xs, ys)` on a `resolution x resolution` mesh.
    ///
    /// # Errors
    /// `ConfigurationError` if `resolution < 2`, plus the input errors of [`sse_loss`].
    pub fn compute(
        xs: &[f64],
        ys: &[f64],
        intercept_range: (f64, f64),
        slope_range: (f64, f64),
        resolution: usize,
    ) -> Result<Self, DescentError> {
        if resolution < 2 {
            return Err(DescentError::config(format!(
                "Loss surface resolution must be at least 2, got {}",
                resolution
            )));
        }
        if intercept_range.0 > intercept_range.1 || slope_range.0 > slope_range.1 {
            warn!(
                "Loss surface with inverted range: intercepts {:?}, slopes {:?}",
                intercept_range, slope_range
            );
        }

        let intercepts = axis(intercept_range.0, intercept_range.1, resolution);
        let slopes = axis(slope_range.0, slope_range.1, resolution);
        let values = intercepts
            .iter()
            .map(|&b| {
                slopes
                    .iter()
                    .map(|&m| sse_loss(&Params::new(b, m), xs, ys))
                    .collect::<Result<Vec<f64>, DescentError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Computed {}x{} loss surface", resolution, resolution);
        Ok(LossSurface {
            intercepts,
            slopes,
            values,
        })
    }

    /// Same as [`LossSurface::compute`] with [`DEFAULT_RESOLUTION`].
    pub fn with_default_resolution(
        xs: &[f64],
        ys: &[f64],
        intercept_range: (f64, f64),
        slope_range: (f64, f64),
    ) -> Result<Self, DescentError> {
        Self::compute(xs, ys, intercept_range, slope_range, DEFAULT_RESOLUTION)
    }

    pub fn resolution(&self) -> usize {
        self.intercepts.len()
    }

    /// Mesh point with the lowest loss.
    pub fn argmin(&self) -> Option<(Params, f64)> {
        self.values
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, &v)| (i, j, v)))
            .min_by(|a, b| a.2.total_cmp(&b.2))
            .map(|(i, j, v)| (Params::new(self.intercepts[i], self.slopes[j]), v))
    }
}
