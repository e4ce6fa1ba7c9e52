//! Retrospective accuracy of a trained model

use crate::error::Result;
use crate::models::TrainedForecastModel;
use agri_math::accuracy;
use serde::{Deserialize, Serialize};

/// Accuracy of a model replayed over its own training data
///
/// A metric is `None` when no point could be scored, e.g. a moving average
/// whose window spans the whole history has no fitted prefix to compare.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastAccuracy {
    /// Mean Absolute Error
    pub mae: Option<f64>,
    /// Mean Absolute Percentage Error, in percent
    pub mape: Option<f64>,
}

impl ForecastAccuracy {
    /// Whether either metric could be computed
    pub fn is_available(&self) -> bool {
        self.mae.is_some() || self.mape.is_some()
    }
}

impl std::fmt::Display for ForecastAccuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Accuracy Metrics:")?;
        match self.mae {
            Some(mae) => writeln!(f, "  MAE:   {:.4}", mae)?,
            None => writeln!(f, "  MAE:   N/A")?,
        }
        match self.mape {
            Some(mape) => writeln!(f, "  MAPE:  {:.4}%", mape)?,
            None => writeln!(f, "  MAPE:  N/A")?,
        }
        Ok(())
    }
}

/// Score the fitted series of `model` against the actual values it was trained on
pub fn evaluate_fit<T: TrainedForecastModel + ?Sized>(
    model: &T,
    actual: &[f64],
) -> Result<ForecastAccuracy> {
    let metrics = accuracy::evaluate(actual, model.predict())?;

    if !metrics.has_data() {
        log::warn!(
            "{}: no fitted points to score over {} observations",
            model.name(),
            actual.len()
        );
    }
    log::debug!(
        "{}: scored {} points ({} for MAPE), mae={:?}, mape={:?}",
        model.name(),
        metrics.evaluated,
        metrics.percentage_evaluated,
        metrics.mae,
        metrics.mape
    );

    Ok(ForecastAccuracy {
        mae: metrics.mae,
        mape: metrics.mape,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::moving_average::MovingAverage;
    use crate::models::ForecastModel;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_window_accuracy() {
        let data = [10.0, 20.0, 30.0];
        let trained = MovingAverage::new(3).unwrap().train(&data).unwrap();

        let accuracy = evaluate_fit(&trained, &data).unwrap();
        assert_relative_eq!(accuracy.mae.unwrap(), 10.0);
        assert_relative_eq!(accuracy.mape.unwrap(), 33.333333, epsilon = 1e-5);
    }

    #[test]
    fn test_display_marks_missing_metrics() {
        let accuracy = ForecastAccuracy {
            mae: Some(1.5),
            mape: None,
        };
        let text = accuracy.to_string();

        assert!(text.contains("MAE:   1.5000"));
        assert!(text.contains("MAPE:  N/A"));
        assert!(accuracy.is_available());
    }

    #[test]
    fn test_serializes_missing_metric_as_null() {
        let accuracy = ForecastAccuracy {
            mae: None,
            mape: None,
        };
        assert_eq!(
            serde_json::to_string(&accuracy).unwrap(),
            r#"{"mae":null,"mape":null}"#
        );
    }
}
