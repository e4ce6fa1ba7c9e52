//! Request/response boundary over the analysis engines

use crate::config::AnalysisConfig;
use crate::Result;
use chrono::{DateTime, Utc};
use demand_forecast::{ForecastEngine, ForecastInput, ForecastResult};
use feasibility::{BusinessFeasibilityInput, FeasibilityCalculator, FeasibilityResult};
use serde::{Deserialize, Serialize};

/// Kind of analysis, used as the storage key next to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    Feasibility,
    Forecast,
}

/// An analysis request as received from a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnalysisRequest {
    Feasibility(BusinessFeasibilityInput),
    Forecast(ForecastInput),
}

impl AnalysisRequest {
    pub fn analysis_type(&self) -> AnalysisType {
        match self {
            AnalysisRequest::Feasibility(_) => AnalysisType::Feasibility,
            AnalysisRequest::Forecast(_) => AnalysisType::Forecast,
        }
    }
}

/// The result returned for an [`AnalysisRequest`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnalysisResponse {
    Feasibility(FeasibilityResult),
    Forecast(ForecastResult),
}

/// The `{input, results}` pair a persistence layer stores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub analysis_type: AnalysisType,
    pub input: AnalysisRequest,
    pub results: AnalysisResponse,
    pub created_at: DateTime<Utc>,
}

/// Validates requests and dispatches them to the matching engine
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    calculator: FeasibilityCalculator,
    forecaster: ForecastEngine,
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        Ok(Self {
            calculator: FeasibilityCalculator::new(config.feasibility.clone())?,
            forecaster: ForecastEngine::new(config.forecast.clone()),
            config,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Validate `request` and run it; no partial result on failure
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse> {
        log::debug!("Running {:?} analysis", request.analysis_type());

        match request {
            AnalysisRequest::Feasibility(input) => {
                input.validate()?;
                Ok(AnalysisResponse::Feasibility(self.calculator.calculate(input)))
            }
            AnalysisRequest::Forecast(input) => {
                input.validate_with(&self.config.forecast)?;
                Ok(AnalysisResponse::Forecast(self.forecaster.forecast(input)?))
            }
        }
    }

    /// JSON in, JSON out
    pub fn analyze_json(&self, request: &str) -> Result<String> {
        let request: AnalysisRequest = serde_json::from_str(request)?;
        let response = self.analyze(&request)?;
        Ok(serde_json::to_string(&response)?)
    }

    /// Run `request` and pair it with its results for storage
    pub fn record(&self, request: AnalysisRequest) -> Result<AnalysisRecord> {
        let results = self.analyze(&request)?;

        Ok(AnalysisRecord {
            analysis_type: request.analysis_type(),
            input: request,
            results,
            created_at: Utc::now(),
        })
    }
}
