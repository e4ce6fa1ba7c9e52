//! Exponential smoothing for one-step-ahead forecasting
//!
//! The level is seeded with the first observation and every update folds in
//! one more actual value:
//!
//! `level = alpha * value + (1 - alpha) * level`

use crate::{MathError, Result};

/// Simple exponential smoothing state
#[derive(Debug, Clone)]
pub struct ExponentialSmoothing {
    alpha: f64,
    level: Option<f64>,
    values_seen: usize,
}

impl ExponentialSmoothing {
    /// Create a new Exponential Smoothing with the specified alpha (smoothing factor)
    ///
    /// Both ends of the range are accepted: `0.0` keeps the seed level forever,
    /// `1.0` tracks the last observation exactly.
    pub fn new(alpha: f64) -> Result<Self> {
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(MathError::InvalidInput(format!(
                "Alpha must be between 0 and 1 (inclusive), got {}",
                alpha
            )));
        }

        Ok(Self {
            alpha,
            level: None,
            values_seen: 0,
        })
    }

    /// Update the smoothed level with a new value
    pub fn update(&mut self, value: f64) {
        self.values_seen += 1;

        self.level = Some(match self.level {
            None => value,
            Some(level) => self.alpha * value + (1.0 - self.alpha) * level,
        });
    }

    /// Get the current smoothed value
    pub fn value(&self) -> Result<f64> {
        self.level.ok_or_else(|| {
            MathError::InsufficientData("No data available for exponential smoothing".to_string())
        })
    }

    /// Get the current alpha value
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Number of values folded into the level so far
    pub fn values_seen(&self) -> usize {
        self.values_seen
    }

    /// Reset the Exponential Smoothing, clearing all values
    pub fn reset(&mut self) {
        self.level = None;
        self.values_seen = 0;
    }
}

/// One-step-ahead smoothed series and next-period forecast for `data`.
///
/// `S[0] = D[0]` and `S[i] = alpha * D[i-1] + (1 - alpha) * S[i-1]`, so each
/// `S[i]` only uses actuals before `i`. The forecast is
/// `alpha * D[last] + (1 - alpha) * S[last]`.
pub fn smoothed_series(data: &[f64], alpha: f64) -> Result<(Vec<f64>, f64)> {
    let mut smoother = ExponentialSmoothing::new(alpha)?;
    let first = data.first().copied().ok_or_else(|| {
        MathError::InsufficientData("Cannot smooth an empty series".to_string())
    })?;

    // Seeding with D[0] and folding D[0] again leaves S[1] = D[0], which is
    // what the recurrence gives.
    smoother.update(first);

    let mut series = Vec::with_capacity(data.len());
    for &actual in data {
        series.push(smoother.value()?);
        smoother.update(actual);
    }

    Ok((series, smoother.value()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exponential_smoothing() {
        let mut es = ExponentialSmoothing::new(0.3).unwrap();

        es.update(10.0); // Initial level = 10
        assert_relative_eq!(es.value().unwrap(), 10.0);

        es.update(20.0); // New level = 0.3*20 + 0.7*10 = 13
        assert_relative_eq!(es.value().unwrap(), 13.0);
        assert_eq!(es.values_seen(), 2);

        es.reset();
        assert!(es.value().is_err());
    }

    #[test]
    fn test_alpha_bounds() {
        assert!(ExponentialSmoothing::new(0.0).is_ok());
        assert!(ExponentialSmoothing::new(1.0).is_ok());
        assert!(ExponentialSmoothing::new(-0.1).is_err());
        assert!(ExponentialSmoothing::new(1.5).is_err());
        assert!(ExponentialSmoothing::new(f64::NAN).is_err());
    }

    #[test]
    fn test_smoothed_series_recurrence() {
        let (series, forecast) = smoothed_series(&[10.0, 20.0, 30.0], 0.5).unwrap();

        // S0 = 10, S1 = 0.5*10 + 0.5*10 = 10, S2 = 0.5*20 + 0.5*10 = 15
        assert_eq!(series, vec![10.0, 10.0, 15.0]);
        // F = 0.5*30 + 0.5*15
        assert_relative_eq!(forecast, 22.5);
    }

    #[test]
    fn test_constant_series_stays_flat() {
        let (series, forecast) = smoothed_series(&[10.0, 10.0, 10.0], 0.5).unwrap();
        assert_eq!(series, vec![10.0, 10.0, 10.0]);
        assert_relative_eq!(forecast, 10.0);
    }

    #[test]
    fn test_alpha_extremes() {
        let data = [4.0, 8.0, 6.0];

        let (series, forecast) = smoothed_series(&data, 0.0).unwrap();
        assert_eq!(series, vec![4.0, 4.0, 4.0]);
        assert_eq!(forecast, 4.0);

        let (series, forecast) = smoothed_series(&data, 1.0).unwrap();
        assert_eq!(series, vec![4.0, 4.0, 8.0]);
        assert_eq!(forecast, 6.0);
    }

    #[test]
    fn test_empty_series_rejected() {
        assert!(matches!(
            smoothed_series(&[], 0.3),
            Err(MathError::InsufficientData(_))
        ));
    }
}
