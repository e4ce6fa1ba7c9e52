//! Combined engine configuration

use crate::Result;
use demand_forecast::ForecastDefaults;
use feasibility::FeasibilityConfig;
use serde::{Deserialize, Serialize};

/// Configuration for both engines, loadable from JSON
///
/// ```
/// use agri_advisor::AnalysisConfig;
///
/// let config = AnalysisConfig::from_json(r#"{"feasibility": {"roiThreshold": 20}}"#).unwrap();
/// assert_eq!(config.feasibility.roi_threshold, 20.0);
/// assert_eq!(config.forecast.period_length, 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub feasibility: FeasibilityConfig,
    pub forecast: ForecastDefaults,
}

impl AnalysisConfig {
    /// Parse a configuration document; missing sections take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.feasibility.validate()?;
        Ok(config)
    }
}
