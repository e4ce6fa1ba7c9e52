//! Calculator configuration

use crate::{FeasibilityError, Result};
use serde::{Deserialize, Serialize};

/// Minimum annualized ROI, in percent, for a plan to count as feasible
pub const DEFAULT_ROI_THRESHOLD: f64 = 15.0;

/// Currency symbol used in the summary narrative
pub const DEFAULT_CURRENCY_SYMBOL: &str = "Rp";

/// Tunable parameters of the feasibility verdict and report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeasibilityConfig {
    /// ROI (percent) that must be strictly exceeded
    pub roi_threshold: f64,
    /// Prefix for currency amounts in the summary
    pub currency_symbol: String,
}

impl Default for FeasibilityConfig {
    fn default() -> Self {
        Self {
            roi_threshold: DEFAULT_ROI_THRESHOLD,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl FeasibilityConfig {
    /// Create a configuration, rejecting a non-finite ROI threshold
    pub fn new(roi_threshold: f64, currency_symbol: impl Into<String>) -> Result<Self> {
        let config = Self {
            roi_threshold,
            currency_symbol: currency_symbol.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check a configuration built by hand or deserialized
    pub fn validate(&self) -> Result<()> {
        if !self.roi_threshold.is_finite() {
            return Err(FeasibilityError::InvalidConfig(format!(
                "ROI threshold must be a finite number, got {}",
                self.roi_threshold
            )));
        }
        Ok(())
    }
}
