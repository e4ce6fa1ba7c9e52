//! Forecast requests and results
//!
//! [`ForecastEngine::forecast`] fits the selected model to the history,
//! forecasts the next period, replays the model over the history to score
//! it, and lays the numbers out for charting.

use crate::config::ForecastDefaults;
use crate::data::{demand_values, next_period_label, HistoricalDemand};
use crate::error::{ForecastError, Result};
use crate::metrics::{evaluate_fit, ForecastAccuracy};
use crate::models::exponential_smoothing::ExponentialSmoothing;
use crate::models::moving_average::MovingAverage;
use crate::models::{ForecastMethod, ForecastModel, TrainedForecastModel};
use serde::{Deserialize, Serialize};

/// A forecast request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastInput {
    pub product_name: String,
    /// Observations, oldest first
    pub historical_demand: Vec<HistoricalDemand>,
    pub method: ForecastMethod,
    /// Exponential smoothing factor, defaults to 0.3
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoothing_factor: Option<f64>,
    /// Moving-average window, defaults to 3
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_length: Option<usize>,
}

/// Forecast for one future period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastedPoint {
    pub period: String,
    pub forecast: f64,
}

/// A labelled value on the demand chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub period: String,
    pub value: f64,
}

/// History and forecast laid out for plotting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastChart {
    pub historical: Vec<ChartPoint>,
    pub forecast: Vec<ChartPoint>,
}

/// Outcome of a forecast request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    pub product_name: String,
    /// Exactly one point, the period after the history
    pub forecasted: Vec<ForecastedPoint>,
    pub accuracy: ForecastAccuracy,
    pub chart: ForecastChart,
}

impl ForecastResult {
    /// The next-period forecast
    pub fn next(&self) -> Option<&ForecastedPoint> {
        self.forecasted.first()
    }
}

/// Runs forecasts with a fixed set of parameter defaults
#[derive(Debug, Clone, Default)]
pub struct ForecastEngine {
    defaults: ForecastDefaults,
}

impl ForecastEngine {
    pub fn new(defaults: ForecastDefaults) -> Self {
        Self { defaults }
    }

    /// Get the parameter defaults
    pub fn defaults(&self) -> &ForecastDefaults {
        &self.defaults
    }

    /// Moving-average window the request resolves to
    pub fn period_length(&self, input: &ForecastInput) -> usize {
        input.period_length.unwrap_or(self.defaults.period_length)
    }

    /// Smoothing factor the request resolves to
    pub fn smoothing_factor(&self, input: &ForecastInput) -> f64 {
        input
            .smoothing_factor
            .unwrap_or(self.defaults.smoothing_factor)
    }

    /// Forecast the period after `input.historical_demand`
    ///
    /// Fails with [`ForecastError::InvalidParameter`] when the window is longer
    /// than the history or the smoothing factor is outside `[0, 1]`. Schema
    /// checks belong to [`ForecastInput::validate`].
    pub fn forecast(&self, input: &ForecastInput) -> Result<ForecastResult> {
        let history = &input.historical_demand;
        let last = history.last().ok_or_else(|| {
            ForecastError::InsufficientData("No historical demand to forecast from".to_string())
        })?;
        let demand = demand_values(history);

        let (next, accuracy) = match input.method {
            ForecastMethod::Sma => {
                let model = MovingAverage::new(self.period_length(input))?;
                fit_and_score(&model, &demand)?
            }
            ForecastMethod::Exponential => {
                let model = ExponentialSmoothing::new(self.smoothing_factor(input))?;
                fit_and_score(&model, &demand)?
            }
        };

        let forecasted = vec![ForecastedPoint {
            period: next_period_label(&last.period, history.len()),
            forecast: next,
        }];

        let chart = ForecastChart {
            historical: history
                .iter()
                .map(|point| ChartPoint {
                    period: point.period.clone(),
                    value: point.demand,
                })
                .collect(),
            forecast: forecasted
                .iter()
                .map(|point| ChartPoint {
                    period: point.period.clone(),
                    value: point.forecast,
                })
                .collect(),
        };

        Ok(ForecastResult {
            product_name: input.product_name.clone(),
            forecasted,
            accuracy,
            chart,
        })
    }
}

fn fit_and_score<M: ForecastModel>(model: &M, demand: &[f64]) -> Result<(f64, ForecastAccuracy)> {
    let trained = model.train(demand)?;
    let next = trained.forecast();

    log::debug!(
        "{} forecast {} from {} observations",
        trained.name(),
        next,
        demand.len()
    );

    let accuracy = evaluate_fit(&trained, demand)?;
    Ok((next, accuracy))
}

/// Forecast with the default parameters
pub fn generate_forecast(input: &ForecastInput) -> Result<ForecastResult> {
    ForecastEngine::default().forecast(input)
}
