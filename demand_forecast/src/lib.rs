//! # Demand Forecast
//!
//! A Rust library for one-period-ahead demand forecasting over short,
//! user-entered demand histories.
//!
//! ## Features
//!
//! - Historical demand handling, including CSV import
//! - Forecasting models (Simple Moving Average, Exponential Smoothing)
//! - Retrospective accuracy (MAE, MAPE) from replaying the model over the history
//! - Chart-ready layout of history and forecast
//!
//! ## Quick Start
//!
//! ```rust
//! use demand_forecast::data::history_from_values;
//! use demand_forecast::{generate_forecast, ForecastInput, ForecastMethod};
//!
//! let input = ForecastInput {
//!     product_name: "Cassava".to_string(),
//!     historical_demand: history_from_values(&[10.0, 20.0, 30.0]),
//!     method: ForecastMethod::Sma,
//!     smoothing_factor: None,
//!     period_length: Some(3),
//! };
//! input.validate()?;
//!
//! let result = generate_forecast(&input)?;
//! assert_eq!(result.forecasted[0].period, "Period 4");
//! assert_eq!(result.forecasted[0].forecast, 20.0);
//! assert_eq!(result.accuracy.mae, Some(10.0));
//! # Ok::<(), demand_forecast::ForecastError>(())
//! ```

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod models;
mod validation;

// Re-export commonly used types
pub use crate::config::ForecastDefaults;
pub use crate::data::{DemandLoader, HistoricalDemand};
pub use crate::engine::{
    generate_forecast, ChartPoint, ForecastChart, ForecastEngine, ForecastInput, ForecastResult,
    ForecastedPoint,
};
pub use crate::error::ForecastError;
pub use crate::metrics::ForecastAccuracy;
pub use crate::models::{ForecastMethod, ForecastModel, TrainedForecastModel};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
