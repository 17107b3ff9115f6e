//! Parallel batch training and forecasting
//!
//! Training splits the series into windows, learns an independent partial
//! model per window on the rayon pool and folds the partials into one
//! aggregate in batch order. Each window starts early by the model's
//! context (warm-up plus order) so transitions spanning a boundary are not
//! lost, which makes the aggregate identical to a sequential fit.

use std::path::PathBuf;

use fts_spi::{FtsError, Forecaster, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::persistence;
use crate::song::ConventionalFts;

/// Batch training configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Number of windows the series is split into
    pub batches: usize,
    /// Save the aggregate after this many successful batches
    pub checkpoint_interval: Option<usize>,
    pub checkpoint_path: Option<PathBuf>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batches: 10,
            checkpoint_interval: None,
            checkpoint_path: None,
        }
    }
}

impl BatchConfig {
    pub fn with_batches(batches: usize) -> Self {
        Self {
            batches,
            ..Self::default()
        }
    }

    pub fn with_checkpoints(mut self, interval: usize, path: impl Into<PathBuf>) -> Self {
        self.checkpoint_interval = Some(interval);
        self.checkpoint_path = Some(path.into());
        self
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| FtsError::invalid_parameter("batch config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.batches == 0 {
            return Err(FtsError::invalid_parameter("batches", "must be at least 1"));
        }
        if self.checkpoint_interval == Some(0) {
            return Err(FtsError::invalid_parameter("checkpoint_interval", "must be at least 1"));
        }
        Ok(())
    }
}

/// A batch that could not be trained
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    pub batch: usize,
    pub error: FtsError,
}

/// Outcome of a batch training run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub batches: usize,
    pub succeeded: usize,
    pub failures: Vec<BatchFailure>,
    /// Checkpoints written during the run
    pub checkpoints: usize,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Trains and forecasts a [`ConventionalFts`] over data split in batches
#[derive(Debug, Clone, Default)]
pub struct BatchTrainer {
    config: BatchConfig,
}

impl BatchTrainer {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Train a copy of `model` on `data` in parallel batches
    ///
    /// Failed batches are recorded in the report and skipped. The run only
    /// fails when no batch succeeds or a checkpoint cannot be written.
    pub fn train(&self, model: &ConventionalFts, data: &[f64]) -> Result<(ConventionalFts, BatchReport)> {
        self.config.validate()?;

        let context = model.warmup() + model.order();
        if data.len() <= context {
            return Err(FtsError::InsufficientData {
                required: context + 1,
                actual: data.len(),
            });
        }

        let windows: Vec<(usize, usize)> = split(data.len() - context, self.config.batches)
            .into_iter()
            .map(|(start, end)| (start, end + context))
            .collect();
        info!(batches = windows.len(), samples = data.len(), "batch training started");

        let partials: Vec<Result<ConventionalFts>> = windows
            .par_iter()
            .map(|&(start, end)| -> Result<ConventionalFts> {
                let mut partial = model.fresh();
                partial.train(&data[start..end])?;
                Ok(partial)
            })
            .collect();

        let mut aggregate = model.fresh();
        let mut report = BatchReport {
            batches: windows.len(),
            ..BatchReport::default()
        };

        for (batch, outcome) in partials.into_iter().enumerate() {
            match outcome {
                Ok(partial) => {
                    aggregate.merge(&partial)?;
                    report.succeeded += 1;
                    if self.checkpoint_due(report.succeeded) {
                        self.checkpoint(&aggregate, batch)?;
                        report.checkpoints += 1;
                    }
                }
                Err(error) => {
                    warn!(batch, %error, "batch training failed");
                    report.failures.push(BatchFailure { batch, error });
                }
            }
        }

        info!(
            batches = report.batches,
            succeeded = report.succeeded,
            failed = report.failures.len(),
            "batch training finished"
        );

        if report.succeeded == 0 {
            if let Some(failure) = report.failures.first() {
                return Err(failure.error.clone());
            }
        }
        Ok((aggregate, report))
    }

    /// Forecast `data` in parallel chunks
    ///
    /// Chunks overlap by the model's context and the overlapping outputs
    /// are dropped, so the result equals `model.forecast(data)`.
    pub fn forecast(&self, model: &ConventionalFts, data: &[f64]) -> Result<Vec<f64>> {
        self.config.validate()?;
        if !model.is_trained() {
            return Err(FtsError::NotTrained);
        }
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let overlap = model.warmup() + model.order();
        let chunks = split(data.len(), self.config.batches);

        let outputs = chunks
            .par_iter()
            .map(|&(start, end)| -> Result<Vec<f64>> {
                let from = start.saturating_sub(overlap);
                let forecast = model.forecast(&data[from..end])?;
                Ok(forecast[start - from..].to_vec())
            })
            .collect::<Result<Vec<Vec<f64>>>>()?;

        Ok(outputs.concat())
    }

    fn checkpoint_due(&self, succeeded: usize) -> bool {
        match (self.config.checkpoint_interval, &self.config.checkpoint_path) {
            (Some(interval), Some(_)) => succeeded % interval == 0,
            _ => false,
        }
    }

    fn checkpoint(&self, model: &ConventionalFts, batch: usize) -> Result<()> {
        if let Some(path) = &self.config.checkpoint_path {
            persistence::save(model, path)?;
            info!(batch, path = %path.display(), "checkpoint written");
        }
        Ok(())
    }
}

/// Split `0..len` into at most `parts` contiguous ranges of near-equal size
fn split(len: usize, parts: usize) -> Vec<(usize, usize)> {
    let parts = parts.clamp(1, len.max(1));
    let size = len.div_ceil(parts);
    (0..len)
        .step_by(size.max(1))
        .map(|start| (start, (start + size).min(len)))
        .collect()
}
