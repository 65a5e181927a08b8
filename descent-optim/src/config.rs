//! Typed configuration of one optimizer run.

use descent_core::optim::RuleKind;
use descent_core::{DescentError, Params};

/// How the points feeding each gradient evaluation are chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sampling {
    /// One step per epoch on the whole dataset, no randomness.
    FullBatch,
    /// Consecutive groups of `batch_size` indices of each epoch's order.
    MiniBatch {
        batch_size: usize,
        /// Fresh random permutation every epoch when true, natural order otherwise.
        shuffle: bool,
        /// Discard the final group when it is shorter than `batch_size`.
        drop_last: bool,
    },
}

/// Hyperparameters of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub lr: f64,
    pub epochs: usize,
    pub sampling: Sampling,
    pub rule: RuleKind,
    /// Starting parameters, `(0, 0)` unless overridden.
    pub initial: Params,
}

impl RunConfig {
    /// Full-batch gradient descent.
    pub fn batch(lr: f64, epochs: usize) -> Self {
        RunConfig {
            lr,
            epochs,
            sampling: Sampling::FullBatch,
            rule: RuleKind::Sgd,
            initial: Params::ZERO,
        }
    }

    /// Stochastic gradient descent, one shuffled point per step.
    pub fn stochastic(lr: f64, epochs: usize) -> Self {
        Self::mini_batch(lr, epochs, 1)
    }

    /// Mini-batch gradient descent on shuffled groups of `batch_size` points.
    pub fn mini_batch(lr: f64, epochs: usize, batch_size: usize) -> Self {
        RunConfig {
            sampling: Sampling::MiniBatch {
                batch_size,
                shuffle: true,
                drop_last: false,
            },
            ..Self::batch(lr, epochs)
        }
    }

    /// Stochastic sampling with a momentum-averaged velocity.
    pub fn momentum(lr: f64, momentum: f64, epochs: usize) -> Self {
        Self::stochastic(lr, epochs).with_rule(RuleKind::Momentum { momentum })
    }

    /// Stochastic sampling with RMSprop normalization and the default epsilon.
    pub fn rmsprop(lr: f64, decay: f64, epochs: usize) -> Self {
        Self::stochastic(lr, epochs).with_rule(RuleKind::rmsprop(decay))
    }

    pub fn with_rule(mut self, rule: RuleKind) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_initial(mut self, initial: Params) -> Self {
        self.initial = initial;
        self
    }

    /// Switches to mini-batch sampling if needed and sets the group size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.sampling = match self.sampling {
            Sampling::FullBatch => Sampling::MiniBatch {
                batch_size,
                shuffle: true,
                drop_last: false,
            },
            Sampling::MiniBatch {
                shuffle, drop_last, ..
            } => Sampling::MiniBatch {
                batch_size,
                shuffle,
                drop_last,
            },
        };
        self
    }

    /// No effect on full-batch runs.
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        if let Sampling::MiniBatch {
            shuffle: ref mut current,
            ..
        } = self.sampling
        {
            *current = shuffle;
        }
        self
    }

    /// No effect on full-batch runs.
    pub fn with_drop_last(mut self, drop_last: bool) -> Self {
        if let Sampling::MiniBatch {
            drop_last: ref mut current,
            ..
        } = self.sampling
        {
            *current = drop_last;
        }
        self
    }

    /// Short human-readable name, e.g. `mini-batch(5)` or `momentum(0.9)`.
    pub fn label(&self) -> String {
        let sampling = match self.sampling {
            Sampling::FullBatch => "batch".to_string(),
            Sampling::MiniBatch { batch_size: 1, .. } => "stochastic".to_string(),
            Sampling::MiniBatch { batch_size, .. } => format!("mini-batch({})", batch_size),
        };
        match self.rule {
            RuleKind::Sgd => sampling,
            RuleKind::Momentum { momentum } => format!("{} momentum({})", sampling, momentum),
            RuleKind::RmsProp { decay, .. } => format!("{} rmsprop({})", sampling, decay),
        }
    }

    /// Checks the configuration against a dataset of `dataset_len` points.
    ///
    /// # Errors
    /// `ConfigurationError` for a zero epoch count, a batch size outside
    /// `[1, dataset_len]`, a non-finite starting point or invalid rule hyperparameters.
    pub fn validate(&self, dataset_len: usize) -> Result<(), DescentError> {
        if self.epochs == 0 {
            return Err(DescentError::ConfigurationError(
                "Epoch count must be at least 1".to_string(),
            ));
        }
        if let Sampling::MiniBatch { batch_size, .. } = self.sampling {
            if batch_size == 0 || batch_size > dataset_len {
                return Err(DescentError::ConfigurationError(format!(
                    "Batch size must be in [1, {}], got {}",
                    dataset_len, batch_size
                )));
            }
        }
        if !self.initial.is_finite() {
            return Err(DescentError::ConfigurationError(format!(
                "Initial parameters must be finite, got {}",
                self.initial
            )));
        }
        self.rule.build(self.lr).map(|_| ())
    }
}
