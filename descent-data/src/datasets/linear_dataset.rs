use crate::datasets::traits::Dataset;
use descent_core::{DescentError, Params};

/// Paired independent / dependent values of a 1-D regression problem.
///
/// Immutable once built. The i-th `x` corresponds to the i-th `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearDataset {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearDataset {
    /// Creates a new dataset from independent and dependent values.
    ///
    /// # Errors
    /// `ShapeMismatch` if the lengths differ, `EmptyInput` if both are empty.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, DescentError> {
        if xs.len() != ys.len() {
            return Err(DescentError::ShapeMismatch {
                expected: xs.len(),
                actual: ys.len(),
                operation: "LinearDataset::new".to_string(),
            });
        }
        if xs.is_empty() {
            return Err(DescentError::EmptyInput {
                operation: "LinearDataset::new".to_string(),
            });
        }
        Ok(LinearDataset { xs, ys })
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Gathers the points at `indices`, in that order, as separate x / y vectors.
    pub fn select(&self, indices: &[usize]) -> Result<(Vec<f64>, Vec<f64>), DescentError> {
        let mut xs = Vec::with_capacity(indices.len());
        let mut ys = Vec::with_capacity(indices.len());
        for &index in indices {
            let (x, y) = self.get(index)?;
            xs.push(x);
            ys.push(y);
        }
        Ok((xs, ys))
    }

    /// SSE loss of the whole dataset at `w`.
    pub fn loss(&self, w: &Params) -> Result<f64, DescentError> {
        descent_core::sse_loss(w, &self.xs, &self.ys)
    }

    /// SSE gradient of the whole dataset at `w`.
    pub fn gradient(&self, w: &Params) -> Result<Params, DescentError> {
        descent_core::sse_gradient(w, &self.xs, &self.ys)
    }
}

impl Dataset for LinearDataset {
    type Item = (f64, f64);

    fn get(&self, index: usize) -> Result<Self::Item, DescentError> {
        match (self.xs.get(index), self.ys.get(index)) {
            (Some(&x), Some(&y)) => Ok((x, y)),
            _ => Err(DescentError::IndexOutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }

    fn len(&self) -> usize {
        self.xs.len()
    }
}

#[cfg(test)]
#[path = "linear_dataset_test.rs"]
mod tests;
