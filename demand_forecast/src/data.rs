//! Historical demand data handling

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Demand observed in one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalDemand {
    /// Row identifier, opaque to the engine
    pub id: String,
    /// Period label, conventionally ending in its number (e.g. `Period 3`)
    pub period: String,
    pub demand: f64,
}

impl HistoricalDemand {
    pub fn new(id: impl Into<String>, period: impl Into<String>, demand: f64) -> Self {
        Self {
            id: id.into(),
            period: period.into(),
            demand,
        }
    }
}

/// Build a history labelled `Period 1..=n` from plain values
pub fn history_from_values(values: &[f64]) -> Vec<HistoricalDemand> {
    values
        .iter()
        .enumerate()
        .map(|(i, &demand)| {
            HistoricalDemand::new((i + 1).to_string(), format!("Period {}", i + 1), demand)
        })
        .collect()
}

/// Demand values in chronological order
pub fn demand_values(history: &[HistoricalDemand]) -> Vec<f64> {
    history.iter().map(|point| point.demand).collect()
}

/// Trailing integer of a period label, if it has one
///
/// `"Period 12"` gives `Some(12)`, `"Q3-2024"` gives `Some(2024)`, `"March"` gives `None`.
pub fn period_number(label: &str) -> Option<u64> {
    let trimmed = label.trim_end();
    let digits_start = trimmed
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;

    trimmed[digits_start..].parse().ok()
}

/// Label of the period after `last_label`
///
/// The number is the trailing integer of `last_label` plus one. A label
/// without a trailing integer is treated as period `history_len`.
pub fn next_period_label(last_label: &str, history_len: usize) -> String {
    let current = period_number(last_label).unwrap_or_else(|| {
        log::warn!(
            "Period label '{}' has no trailing number, numbering from history length {}",
            last_label,
            history_len
        );
        history_len as u64
    });

    format!("Period {}", current.saturating_add(1))
}

#[derive(Debug, Deserialize)]
struct DemandRow {
    period: String,
    demand: f64,
}

/// Loader for historical demand tables
#[derive(Debug)]
pub struct DemandLoader;

impl DemandLoader {
    /// Load a `period,demand` CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<HistoricalDemand>> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Read a `period,demand` CSV table; ids are assigned by row position
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<HistoricalDemand>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut history = Vec::new();
        for (i, row) in csv_reader.deserialize::<DemandRow>().enumerate() {
            let row = row?;
            if !row.demand.is_finite() {
                return Err(ForecastError::DataError(format!(
                    "Row {} has a non-finite demand value",
                    i + 1
                )));
            }
            history.push(HistoricalDemand::new((i + 1).to_string(), row.period, row.demand));
        }

        if history.is_empty() {
            return Err(ForecastError::DataError(
                "No demand rows found in data".to_string(),
            ));
        }

        log::debug!("Loaded {} demand rows", history.len());
        Ok(history)
    }
}
