//! Defaults and bounds for forecast parameters

use serde::{Deserialize, Serialize};

/// Smoothing factor used when an exponential forecast omits one
pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.3;

/// Window used when a moving-average forecast omits one
pub const DEFAULT_PERIOD_LENGTH: usize = 3;

/// Parameter defaults and validation bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForecastDefaults {
    pub smoothing_factor: f64,
    pub period_length: usize,
    /// Fewest historical points accepted by validation
    pub min_history: usize,
    /// Smallest moving-average window accepted by validation
    pub min_period_length: usize,
    /// Largest moving-average window accepted by validation
    pub max_period_length: usize,
}

impl Default for ForecastDefaults {
    fn default() -> Self {
        Self {
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            period_length: DEFAULT_PERIOD_LENGTH,
            min_history: 3,
            min_period_length: 2,
            max_period_length: 12,
        }
    }
}
