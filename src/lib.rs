//! # Agri Advisor
//!
//! `agri_advisor` is the quantitative core of an agricultural business
//! advisory service. It bundles two independent, pure engines:
//!
//! - [`feasibility`]: unit cost, break-even, profit, payback, ROI and a verdict
//! - [`demand_forecast`]: next-period demand by moving average or exponential
//!   smoothing, with MAE/MAPE accuracy
//!
//! and the JSON boundary a request handler uses to reach them.
//!
//! ## Example
//!
//! ```
//! use agri_advisor::Analyzer;
//!
//! let request = r#"{
//!     "type": "forecast",
//!     "productName": "Cocoa beans",
//!     "historicalDemand": [
//!         {"id": "1", "period": "Period 1", "demand": 10},
//!         {"id": "2", "period": "Period 2", "demand": 20},
//!         {"id": "3", "period": "Period 3", "demand": 30}
//!     ],
//!     "method": "sma",
//!     "periodLength": 3
//! }"#;
//!
//! let response = Analyzer::default().analyze_json(request)?;
//! assert!(response.contains(r#""period":"Period 4""#));
//! # Ok::<(), agri_advisor::AnalysisError>(())
//! ```

pub mod analysis;
pub mod config;

pub use analysis::{AnalysisRecord, AnalysisRequest, AnalysisResponse, AnalysisType, Analyzer};
pub use config::AnalysisConfig;

pub use demand_forecast;
pub use feasibility;

use thiserror::Error;

/// Errors surfaced to the caller of an analysis
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Feasibility(#[from] feasibility::FeasibilityError),

    #[error(transparent)]
    Forecast(#[from] demand_forecast::ForecastError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
