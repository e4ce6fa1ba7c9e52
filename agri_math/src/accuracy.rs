//! Accuracy metrics for retrospectively fitted series
//!
//! Fitted series may be only partially defined (a moving average has no value
//! before its first full window). Positions whose fitted value is `None` or
//! not finite are skipped. A metric with no position left to average is
//! `None` rather than `NaN`.

use crate::{MathError, Result};
use statrs::statistics::Statistics;

/// Mean absolute error and mean absolute percentage error of a fitted series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracyMetrics {
    /// Mean Absolute Error
    pub mae: Option<f64>,
    /// Mean Absolute Percentage Error, in percent
    pub mape: Option<f64>,
    /// Positions that contributed to MAE
    pub evaluated: usize,
    /// Positions that contributed to MAPE (non-zero actuals only)
    pub percentage_evaluated: usize,
}

impl AccuracyMetrics {
    /// Whether at least one position could be scored
    pub fn has_data(&self) -> bool {
        self.evaluated > 0
    }
}

fn check_lengths(actual: &[f64], fitted: &[Option<f64>]) -> Result<()> {
    if actual.len() != fitted.len() {
        return Err(MathError::InvalidInput(format!(
            "Actual length ({}) doesn't match fitted length ({})",
            actual.len(),
            fitted.len()
        )));
    }
    Ok(())
}

/// Pairs of (actual, fitted) where both sides are usable
fn scored_pairs<'a>(
    actual: &'a [f64],
    fitted: &'a [Option<f64>],
) -> impl Iterator<Item = (f64, f64)> + 'a {
    actual
        .iter()
        .zip(fitted.iter())
        .filter_map(|(&a, f)| match f {
            Some(f) if f.is_finite() && a.is_finite() => Some((a, *f)),
            _ => None,
        })
}

/// Mean of `|actual - fitted|` over the scored positions
pub fn mean_absolute_error(actual: &[f64], fitted: &[Option<f64>]) -> Result<Option<f64>> {
    check_lengths(actual, fitted)?;

    let errors: Vec<f64> = scored_pairs(actual, fitted)
        .map(|(a, f)| (a - f).abs())
        .collect();

    if errors.is_empty() {
        return Ok(None);
    }
    Ok(Some(errors.iter().mean()))
}

/// Mean of `|actual - fitted| / |actual| * 100` over the scored positions
///
/// Positions with a zero actual are left out of both the sum and the count.
pub fn mean_absolute_percentage_error(
    actual: &[f64],
    fitted: &[Option<f64>],
) -> Result<Option<f64>> {
    check_lengths(actual, fitted)?;

    let errors: Vec<f64> = scored_pairs(actual, fitted)
        .filter(|(a, _)| *a != 0.0)
        .map(|(a, f)| (a - f).abs() / a.abs() * 100.0)
        .collect();

    if errors.is_empty() {
        return Ok(None);
    }
    Ok(Some(errors.iter().mean()))
}

/// Compute MAE and MAPE together
pub fn evaluate(actual: &[f64], fitted: &[Option<f64>]) -> Result<AccuracyMetrics> {
    let mae = mean_absolute_error(actual, fitted)?;
    let mape = mean_absolute_percentage_error(actual, fitted)?;

    let evaluated = scored_pairs(actual, fitted).count();
    let percentage_evaluated = scored_pairs(actual, fitted)
        .filter(|(a, _)| *a != 0.0)
        .count();

    Ok(AccuracyMetrics {
        mae,
        mape,
        evaluated,
        percentage_evaluated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_scored_point() {
        let metrics = evaluate(&[10.0, 20.0, 30.0], &[None, None, Some(20.0)]).unwrap();

        assert_eq!(metrics.evaluated, 1);
        assert_relative_eq!(metrics.mae.unwrap(), 10.0);
        assert_relative_eq!(metrics.mape.unwrap(), 100.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_regression_metrics() {
        let actual = [10.0, 20.0, 30.0, 40.0, 50.0];
        let fitted = [Some(12.0), Some(18.0), Some(33.0), Some(37.0), Some(52.0)];

        let metrics = evaluate(&actual, &fitted).unwrap();
        assert_relative_eq!(metrics.mae.unwrap(), 2.4, epsilon = 1e-9);
        // (20 + 10 + 10 + 7.5 + 4) / 5
        assert_relative_eq!(metrics.mape.unwrap(), 10.3, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_actuals_skipped_for_mape_only() {
        let actual = [0.0, 10.0, 0.0, 20.0];
        let fitted = [Some(5.0), Some(15.0), Some(1.0), Some(10.0)];

        let metrics = evaluate(&actual, &fitted).unwrap();
        assert_eq!(metrics.evaluated, 4);
        assert_eq!(metrics.percentage_evaluated, 2);
        // (5 + 5 + 1 + 10) / 4
        assert_relative_eq!(metrics.mae.unwrap(), 5.25, epsilon = 1e-9);
        // (50 + 50) / 2, the zero actuals count neither way
        assert_relative_eq!(metrics.mape.unwrap(), 50.0);
    }

    #[test]
    fn test_no_scored_points_is_none() {
        let metrics = evaluate(&[1.0, 2.0], &[None, None]).unwrap();
        assert!(!metrics.has_data());
        assert_eq!(metrics.mae, None);
        assert_eq!(metrics.mape, None);
    }

    #[test]
    fn test_all_zero_actuals_leave_mape_undefined() {
        let metrics = evaluate(&[0.0, 0.0], &[Some(1.0), Some(0.0)]).unwrap();
        assert_relative_eq!(metrics.mae.unwrap(), 0.5);
        assert_eq!(metrics.mape, None);
    }

    #[test]
    fn test_non_finite_fitted_values_skipped() {
        let metrics = evaluate(&[4.0, 8.0], &[Some(f64::NAN), Some(6.0)]).unwrap();
        assert_eq!(metrics.evaluated, 1);
        assert_relative_eq!(metrics.mae.unwrap(), 2.0);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            mean_absolute_error(&[1.0, 2.0], &[Some(1.0)]),
            Err(MathError::InvalidInput(_))
        ));
    }
}
