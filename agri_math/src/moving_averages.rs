//! Moving average calculation implementations
//!
//! Contains the Simple Moving Average (SMA) used by the demand models, in
//! streaming form and as a retrospective fitted series.

use crate::{MathError, Result};
use std::collections::VecDeque;

/// Simple Moving Average (SMA) implementation
#[derive(Debug, Clone)]
pub struct SimpleMovingAverage {
    period: usize,
    values: VecDeque<f64>,
}

impl SimpleMovingAverage {
    /// Create a new Simple Moving Average with the specified period
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(MathError::InvalidInput(
                "Period must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            period,
            values: VecDeque::with_capacity(period),
        })
    }

    /// Push a new value into the window, dropping the oldest once full
    pub fn update(&mut self, value: f64) {
        self.values.push_back(value);

        if self.values.len() > self.period {
            self.values.pop_front();
        }
    }

    /// Whether the window holds a full period of values
    pub fn is_ready(&self) -> bool {
        self.values.len() == self.period
    }

    /// Get the current SMA value
    pub fn value(&self) -> Result<f64> {
        if !self.is_ready() {
            return Err(MathError::InsufficientData(format!(
                "Not enough data for SMA calculation. Need {} values, have {}.",
                self.period,
                self.values.len()
            )));
        }

        // Summed from the window each time so the result is the exact mean of
        // the values it holds, with no drift from a running total.
        Ok(self.values.iter().sum::<f64>() / self.period as f64)
    }

    /// Get the current period
    pub fn period(&self) -> usize {
        self.period
    }

    /// Reset the SMA, clearing all values
    pub fn reset(&mut self) {
        self.values.clear();
    }
}

/// Mean of the last `period` values of `data`.
pub fn trailing_mean(data: &[f64], period: usize) -> Result<f64> {
    let mut sma = SimpleMovingAverage::new(period)?;
    if data.len() < period {
        return Err(MathError::InsufficientData(format!(
            "Need at least {} values for a {}-period average, have {}",
            period,
            period,
            data.len()
        )));
    }

    for &value in &data[data.len() - period..] {
        sma.update(value);
    }
    sma.value()
}

/// Retrospective SMA series aligned with `data`.
///
/// Position `i` holds the mean of `data[i + 1 - period..=i]`; positions before
/// the first full window are `None`.
pub fn rolling_means(data: &[f64], period: usize) -> Result<Vec<Option<f64>>> {
    let mut sma = SimpleMovingAverage::new(period)?;

    Ok(data
        .iter()
        .map(|&value| {
            sma.update(value);
            sma.value().ok()
        })
        .collect())
}
