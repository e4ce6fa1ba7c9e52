//! # Feasibility
//!
//! `feasibility` turns a business plan (one-time investment costs, recurring
//! monthly costs, production cost, sales volume and markup) into unit cost,
//! break-even point, profit, payback period, ROI and a feasibility verdict.
//!
//! The calculation is a pure function of its input. Degenerate plans (zero
//! sales volume, no margin, no investment) never fail; they produce sentinel
//! zeros that callers are expected to render as "N/A".
//!
//! ## Usage Example
//!
//! ```
//! use feasibility::{BusinessFeasibilityInput, CostItem, FeasibilityCalculator};
//!
//! let input = BusinessFeasibilityInput {
//!     business_name: "Hydroponic lettuce".to_string(),
//!     investment_costs: vec![CostItem::new("1", "Greenhouse", 12_000.0)],
//!     operational_costs: vec![CostItem::new("2", "Electricity", 300.0)],
//!     production_cost_per_unit: 5.0,
//!     monthly_sales_volume: 1_000.0,
//!     markup: 40.0,
//!     project_lifespan: 5,
//! };
//!
//! let result = FeasibilityCalculator::default().calculate(&input);
//! assert!(result.selling_price > result.unit_cost);
//! assert!(result.feasible);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod calculator;
pub mod config;
pub mod format;
mod validation;

pub use calculator::{calculate_feasibility, FeasibilityCalculator};
pub use config::FeasibilityConfig;
pub use validation::FieldError;

/// Errors that can occur in feasibility analysis
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeasibilityError {
    #[error("Invalid feasibility input: {}", validation::join(.0))]
    ValidationError(Vec<FieldError>),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for feasibility operations
pub type Result<T> = std::result::Result<T, FeasibilityError>;

/// A named cost line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostItem {
    /// Row identifier, opaque to the calculator
    pub id: String,
    /// Label
    pub name: String,
    /// Amount in currency units
    pub amount: f64,
}

impl CostItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
        }
    }
}

/// One-time cost paid before the business starts
pub type InvestmentCost = CostItem;

/// Recurring monthly cost
pub type OperationalCost = CostItem;

/// Plan to evaluate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessFeasibilityInput {
    /// Descriptive name, used in the summary only
    pub business_name: String,
    /// One-time costs
    pub investment_costs: Vec<InvestmentCost>,
    /// Recurring monthly costs
    pub operational_costs: Vec<OperationalCost>,
    /// Direct production cost of one unit
    pub production_cost_per_unit: f64,
    /// Units sold per month
    pub monthly_sales_volume: f64,
    /// Percentage added on top of the unit cost
    pub markup: f64,
    /// Project lifespan in years
    pub project_lifespan: u32,
}

impl BusinessFeasibilityInput {
    /// Sum of all investment cost amounts
    pub fn total_investment(&self) -> f64 {
        self.investment_costs.iter().fold(0.0, |acc, c| acc + c.amount)
    }

    /// Sum of all operational cost amounts
    pub fn monthly_operational_costs(&self) -> f64 {
        self.operational_costs.iter().fold(0.0, |acc, c| acc + c.amount)
    }
}

/// Outcome of a feasibility analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityResult {
    /// Production cost plus the per-unit share of operational costs
    pub unit_cost: f64,
    /// Unit cost with markup applied
    pub selling_price: f64,
    /// Units per month needed to break even, 0 when unreachable or when
    /// there are no costs to recover
    pub break_even_units: f64,
    /// Revenue at the break-even point
    pub break_even_amount: f64,
    pub monthly_net_profit: f64,
    /// Net profit as a percentage of revenue
    pub profit_margin: f64,
    /// Months to recover the investment, 0 when it never pays back
    pub payback_period: f64,
    /// Annualized return on investment, in percent
    pub roi: f64,
    pub feasible: bool,
    /// Narrative report (markdown)
    pub summary: String,
}

impl FeasibilityResult {
    /// Whether a break-even volume exists at the current price
    ///
    /// True whenever each unit sold contributes a margin over its cost, even
    /// when `break_even_units` is 0 because there is nothing to recover.
    pub fn break_even_reachable(&self) -> bool {
        self.selling_price > self.unit_cost
    }

    /// Payback in months, `None` when the investment is never recovered
    pub fn payback_months(&self) -> Option<f64> {
        (self.payback_period > 0.0).then_some(self.payback_period)
    }

    /// Payback in years, `None` when the investment is never recovered
    pub fn payback_years(&self) -> Option<f64> {
        self.payback_months().map(|months| months / 12.0)
    }
}

impl std::fmt::Display for FeasibilityResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Feasibility Analysis:")?;
        writeln!(f, "  Unit Cost:        {:.2}", self.unit_cost)?;
        writeln!(f, "  Selling Price:    {:.2}", self.selling_price)?;
        if self.break_even_reachable() {
            writeln!(f, "  Break-even Units: {:.2}", self.break_even_units)?;
            writeln!(f, "  Break-even Sales: {:.2}", self.break_even_amount)?;
        } else {
            writeln!(f, "  Break-even Units: N/A")?;
            writeln!(f, "  Break-even Sales: N/A")?;
        }
        writeln!(f, "  Net Profit/Month: {:.2}", self.monthly_net_profit)?;
        writeln!(f, "  Profit Margin:    {:.2}%", self.profit_margin)?;
        match self.payback_months() {
            Some(months) => writeln!(f, "  Payback Period:   {:.1} months", months)?,
            None => writeln!(f, "  Payback Period:   N/A")?,
        }
        writeln!(f, "  ROI:              {:.2}%", self.roi)?;
        writeln!(
            f,
            "  Verdict:          {}",
            if self.feasible { "Feasible" } else { "Not feasible" }
        )?;
        Ok(())
    }
}
