use descent_core::{DescentError, Params};
use descent_data::LinearDataset;

/// Append-only record of the parameters visited by a run.
///
/// `steps` holds one snapshot after every update, `epochs` one snapshot at
/// every epoch boundary. Full-batch runs take one step per epoch, so both match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    steps: Vec<Params>,
    epochs: Vec<Params>,
}

impl Trajectory {
    pub fn with_capacity(steps: usize, epochs: usize) -> Self {
        Trajectory {
            steps: Vec::with_capacity(steps),
            epochs: Vec::with_capacity(epochs),
        }
    }

    pub(crate) fn record_step(&mut self, params: Params) {
        self.steps.push(params);
    }

    pub(crate) fn record_epoch(&mut self, params: Params) {
        self.epochs.push(params);
    }

    pub fn steps(&self) -> &[Params] {
        &self.steps
    }

    pub fn epochs(&self) -> &[Params] {
        &self.epochs
    }

    /// Parameters after the final update, if any update happened.
    pub fn last(&self) -> Option<Params> {
        self.steps.last().copied()
    }

    /// Full-dataset loss at every epoch boundary.
    pub fn epoch_losses(&self, dataset: &LinearDataset) -> Result<Vec<f64>, DescentError> {
        self.epochs.iter().map(|w| dataset.loss(w)).collect()
    }
}

/// Everything a run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    pub label: String,
    pub final_params: Params,
    pub final_loss: f64,
    pub trajectory: Trajectory,
}
