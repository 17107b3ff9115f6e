//! Forecaster trait for fuzzy time series models

use crate::error::Result;

/// Common trait for fuzzy time series models
///
/// Follows a train-forecast pattern: `train` learns from a historical
/// series, `forecast` maps each input value to a one-step-ahead prediction.
///
/// # Example
///
/// ```rust,ignore
/// use fts_spi::Forecaster;
///
/// fn one_step<F: Forecaster>(model: &mut F, history: &[f64], recent: &[f64]) -> fts_spi::Result<Vec<f64>> {
///     model.train(history)?;
///     model.forecast(recent)
/// }
/// ```
pub trait Forecaster {
    /// Learn from historical data
    fn train(&mut self, data: &[f64]) -> Result<()>;

    /// Forecast the value following each input value
    ///
    /// The result has the same length as `data`.
    fn forecast(&self, data: &[f64]) -> Result<Vec<f64>>;

    /// Check if the model has been trained
    fn is_trained(&self) -> bool;

    /// Number of lags the model consumes
    fn order(&self) -> usize;
}
