//! Forecast accuracy metrics
//!
//! Mismatched or empty inputs yield `NaN` rather than an error so metrics
//! can be tabulated without unwrapping.

/// Mean Absolute Error (MAE)
///
/// # Example
///
/// ```rust
/// use fts_core::metrics::mae;
///
/// let error = mae(&[1.0, 2.0, 3.0], &[1.5, 2.0, 2.0]);
/// assert!((error - 0.5).abs() < 1e-12);
/// ```
pub fn mae(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum();

    sum / actual.len() as f64
}

/// Mean Squared Error (MSE)
pub fn mse(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    sum / actual.len() as f64
}

/// Root Mean Squared Error (RMSE)
pub fn rmse(actual: &[f64], predicted: &[f64]) -> f64 {
    mse(actual, predicted).sqrt()
}

/// Mean Absolute Percentage Error (MAPE), in percent
///
/// Points whose actual value is zero are skipped.
pub fn mape(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .filter(|(a, _)| a.abs() > 1e-10)
        .map(|(a, p)| ((a - p) / a).abs())
        .sum();

    100.0 * sum / actual.len() as f64
}

/// Theil's U statistic
///
/// `predicted[t]` is taken as the forecast of `actual[t + 1]`. The error of
/// those forecasts is divided by the error of the naive forecast
/// `actual[t]`. Values below 1 beat the naive forecast.
pub fn u_statistic(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.len() < 2 {
        return f64::NAN;
    }

    let (num, den) = actual
        .windows(2)
        .zip(predicted.iter())
        .fold((0.0_f64, 0.0_f64), |(num, den), (pair, p)| {
            let (current, next) = (pair[0], pair[1]);
            (num + (next - p).powi(2), den + (next - current).powi(2))
        });

    if den < 1e-10 {
        return f64::NAN;
    }

    (num / den).sqrt()
}
