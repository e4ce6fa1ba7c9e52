//! The feasibility calculation
//!
//! Each step feeds the next:
//!
//! 1. total investment and monthly operational cost
//! 2. unit cost, production cost plus the per-unit share of operational cost
//! 3. selling price from the markup
//! 4. break-even units and amount from the per-unit contribution
//! 5. monthly net profit, margin, payback period and annualized ROI
//! 6. verdict: ROI above the threshold and payback within the lifespan

use crate::config::FeasibilityConfig;
use crate::format::{format_currency, format_number};
use crate::{BusinessFeasibilityInput, FeasibilityResult, Result};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Computes [`FeasibilityResult`]s under a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct FeasibilityCalculator {
    config: FeasibilityConfig,
}

/// Intermediate figures shared by the result and the summary
#[derive(Debug, Clone, Copy)]
struct Figures {
    total_investment: f64,
    monthly_operational_costs: f64,
    unit_cost: f64,
    selling_price: f64,
    /// Selling price minus unit cost
    contribution: f64,
    break_even_units: f64,
    break_even_amount: f64,
    monthly_net_profit: f64,
    profit_margin: f64,
    payback_period: f64,
    roi: f64,
    feasible: bool,
}

/// Replace an overflowed figure with the 0 sentinel
fn finite_or_zero(name: &str, value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        log::warn!("{} is not finite ({}), reported as 0", name, value);
        0.0
    }
}

impl FeasibilityCalculator {
    /// Create a calculator with a validated configuration
    pub fn new(config: FeasibilityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the active configuration
    pub fn config(&self) -> &FeasibilityConfig {
        &self.config
    }

    /// Evaluate a plan
    ///
    /// Never fails: the input is assumed to have passed
    /// [`BusinessFeasibilityInput::validate`], and degenerate plans yield
    /// zeros in the affected fields.
    pub fn calculate(&self, input: &BusinessFeasibilityInput) -> FeasibilityResult {
        let figures = self.figures(input);
        let summary = self.summary(input, &figures);

        FeasibilityResult {
            unit_cost: figures.unit_cost,
            selling_price: figures.selling_price,
            break_even_units: figures.break_even_units,
            break_even_amount: figures.break_even_amount,
            monthly_net_profit: figures.monthly_net_profit,
            profit_margin: figures.profit_margin,
            payback_period: figures.payback_period,
            roi: figures.roi,
            feasible: figures.feasible,
            summary,
        }
    }

    fn figures(&self, input: &BusinessFeasibilityInput) -> Figures {
        let total_investment = finite_or_zero("total investment", input.total_investment());
        let monthly_operational_costs =
            finite_or_zero("monthly operational costs", input.monthly_operational_costs());
        let volume = input.monthly_sales_volume;

        let unit_cost = if volume > 0.0 {
            input.production_cost_per_unit + monthly_operational_costs / volume
        } else {
            log::warn!(
                "Sales volume {} is not positive, operational costs left out of unit cost",
                volume
            );
            input.production_cost_per_unit
        };
        let unit_cost = finite_or_zero("unit cost", unit_cost);

        let selling_price =
            finite_or_zero("selling price", unit_cost * (1.0 + input.markup / 100.0));
        let contribution = selling_price - unit_cost;

        let break_even_units = if contribution <= 0.0 {
            log::warn!(
                "Contribution margin {} is not positive, break-even is unreachable",
                contribution
            );
            0.0
        } else if monthly_operational_costs > 0.0 {
            monthly_operational_costs / contribution
        } else {
            total_investment / contribution
        };
        let break_even_units = finite_or_zero("break-even units", break_even_units);
        let break_even_amount =
            finite_or_zero("break-even amount", break_even_units * selling_price);

        let revenue = volume * selling_price;
        let monthly_net_profit = finite_or_zero(
            "monthly net profit",
            revenue - volume * unit_cost - monthly_operational_costs,
        );

        let profit_margin = if revenue.is_finite() && revenue != 0.0 {
            monthly_net_profit / revenue * 100.0
        } else {
            0.0
        };
        let profit_margin = finite_or_zero("profit margin", profit_margin);

        let payback_period = if monthly_net_profit > 0.0 {
            total_investment / monthly_net_profit
        } else {
            0.0
        };
        let payback_period = finite_or_zero("payback period", payback_period);

        let roi = if total_investment > 0.0 {
            monthly_net_profit * MONTHS_PER_YEAR / total_investment * 100.0
        } else {
            0.0
        };
        let roi = finite_or_zero("ROI", roi);

        let feasible = roi > self.config.roi_threshold
            && payback_period / MONTHS_PER_YEAR < f64::from(input.project_lifespan);

        log::debug!(
            "Feasibility of '{}': unit_cost={}, selling_price={}, net_profit={}, roi={}, \
             feasible={}",
            input.business_name,
            unit_cost,
            selling_price,
            monthly_net_profit,
            roi,
            feasible
        );

        Figures {
            total_investment,
            monthly_operational_costs,
            unit_cost,
            selling_price,
            contribution,
            break_even_units,
            break_even_amount,
            monthly_net_profit,
            profit_margin,
            payback_period,
            roi,
            feasible,
        }
    }

    fn summary(&self, input: &BusinessFeasibilityInput, figures: &Figures) -> String {
        let money = |amount: f64| format_currency(&self.config.currency_symbol, amount);

        let verdict = if figures.feasible {
            format!(
                "**{}** is **feasible**. An annualized ROI of {}% clears the {}% threshold \
                 and the investment is recovered within the {}-year project lifespan.",
                input.business_name,
                format_number(figures.roi, 2),
                format_number(self.config.roi_threshold, 0),
                input.project_lifespan
            )
        } else {
            format!(
                "**{}** is **not feasible** under the current assumptions. It needs an \
                 annualized ROI above {}% (currently {}%) and a payback period shorter \
                 than the {}-year project lifespan.",
                input.business_name,
                format_number(self.config.roi_threshold, 0),
                format_number(figures.roi, 2),
                input.project_lifespan
            )
        };

        let pricing = format!(
            "Total investment is {} with monthly operational costs of {}. \
             Each unit costs {} to produce and sells for {}.",
            money(figures.total_investment),
            money(figures.monthly_operational_costs),
            money(figures.unit_cost),
            money(figures.selling_price)
        );

        let break_even = if figures.contribution <= 0.0 {
            "Break-even point: N/A. The selling price leaves no margin over unit cost, \
             so break-even cannot be reached."
                .to_string()
        } else if figures.break_even_units > 0.0 {
            format!(
                "Break-even point: **{} units** per month, or **{}** in sales.",
                format_number(figures.break_even_units, 2),
                money(figures.break_even_amount)
            )
        } else {
            format!(
                "Break-even point: **immediate**. Each unit sold contributes {} and \
                 there are no costs to recover.",
                money(figures.contribution)
            )
        };

        let profit = format!(
            "Monthly net profit is {} ({}% margin).",
            money(figures.monthly_net_profit),
            format_number(figures.profit_margin, 2)
        );

        let payback = if figures.monthly_net_profit <= 0.0 {
            "Payback period: N/A, the business does not generate a monthly profit.".to_string()
        } else if figures.total_investment <= 0.0 {
            "Payback period: immediate, there is no investment to recover.".to_string()
        } else {
            format!(
                "The investment pays back in {} months.",
                format_number(figures.payback_period, 1)
            )
        };

        let closing = if figures.feasible {
            "The plan is worth pursuing; keep monitoring costs and sales volume."
        } else {
            "Consider lowering costs, raising the markup or increasing sales volume \
             before investing."
        };

        [verdict, pricing, break_even, profit, payback, closing.to_string()].join("\n\n")
    }
}

/// Evaluate a plan with the default configuration
pub fn calculate_feasibility(input: &BusinessFeasibilityInput) -> FeasibilityResult {
    FeasibilityCalculator::default().calculate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CostItem;
    use approx::assert_relative_eq;

    fn plan(investment: f64, operational: f64, markup: f64) -> BusinessFeasibilityInput {
        BusinessFeasibilityInput {
            business_name: "Mushroom farm".to_string(),
            investment_costs: vec![CostItem::new("i1", "Building", investment)],
            operational_costs: vec![CostItem::new("o1", "Labor", operational)],
            production_cost_per_unit: 10.0,
            monthly_sales_volume: 100.0,
            markup,
            project_lifespan: 2,
        }
    }

    #[test]
    fn test_operational_costs_drive_break_even() {
        let result = calculate_feasibility(&plan(5_000.0, 500.0, 50.0));

        // unit cost = 10 + 500/100 = 15, price = 22.5, contribution = 7.5
        assert_relative_eq!(result.unit_cost, 15.0);
        assert_relative_eq!(result.selling_price, 22.5);
        assert_relative_eq!(result.break_even_units, 500.0 / 7.5, epsilon = 1e-9);
        assert_relative_eq!(result.break_even_amount, 500.0 / 7.5 * 22.5, epsilon = 1e-9);
    }

    #[test]
    fn test_investment_drives_break_even_without_operational_costs() {
        let result = calculate_feasibility(&plan(3_000.0, 0.0, 50.0));

        // unit cost = 10, price = 15, contribution = 5
        assert_relative_eq!(result.break_even_units, 600.0);
        assert_relative_eq!(result.break_even_amount, 9_000.0);
    }

    #[test]
    fn test_zero_markup_is_degenerate() {
        let result = calculate_feasibility(&plan(3_000.0, 200.0, 0.0));

        assert_eq!(result.break_even_units, 0.0);
        assert_eq!(result.break_even_amount, 0.0);
        assert!(!result.break_even_reachable());
        // Revenue equals variable cost, so the operational costs are the loss
        assert_relative_eq!(result.monthly_net_profit, -200.0, epsilon = 1e-9);
        assert_eq!(result.payback_period, 0.0);
        assert!(!result.feasible);
        assert!(result.summary.contains("cannot be reached"));
    }

    #[test]
    fn test_plan_without_costs_breaks_even_immediately() {
        let input = BusinessFeasibilityInput {
            business_name: "Roadside stall".to_string(),
            investment_costs: Vec::new(),
            operational_costs: Vec::new(),
            production_cost_per_unit: 100.0,
            monthly_sales_volume: 10.0,
            markup: 50.0,
            project_lifespan: 1,
        };
        let result = calculate_feasibility(&input);

        assert!(result.break_even_units.is_sign_positive());
        assert!(result.payback_period.is_sign_positive());
        assert!(result.break_even_reachable());
        assert!(result.summary.contains("Monthly net profit is Rp 500.00"));
        assert!(result.summary.contains("**immediate**"));
        assert!(result.summary.contains("no investment to recover"));
        assert!(!result.summary.contains("cannot be reached"));
        assert!(!result.summary.contains("does not generate"));
    }

    #[test]
    fn test_overflowing_price_reports_finite_figures() {
        let mut input = plan(1_000.0, 100.0, 100.0);
        input.production_cost_per_unit = 1e308;

        let result = calculate_feasibility(&input);
        for value in [
            result.unit_cost,
            result.selling_price,
            result.break_even_units,
            result.break_even_amount,
            result.monthly_net_profit,
            result.profit_margin,
            result.payback_period,
            result.roi,
        ] {
            assert!(value.is_finite());
        }
        assert!(!result.break_even_reachable());
        assert!(!result.feasible);
    }

    #[test]
    fn test_zero_sales_volume_guard() {
        let mut input = plan(1_000.0, 300.0, 20.0);
        input.monthly_sales_volume = 0.0;

        let result = calculate_feasibility(&input);
        assert_eq!(result.unit_cost, 10.0);
        assert_relative_eq!(result.selling_price, 12.0);
        assert_eq!(result.profit_margin, 0.0);
        assert_relative_eq!(result.monthly_net_profit, -300.0);
        assert!(result.roi.is_finite());
        assert!(!result.feasible);
    }

    #[test]
    fn test_custom_roi_threshold() {
        let input = plan(10_000.0, 0.0, 50.0);
        // profit = 100 * 5 = 500/month, roi = 6000/10000 = 60%
        let config = FeasibilityConfig::new(75.0, "$").unwrap();
        let strict = FeasibilityCalculator::new(config).unwrap();
        let lenient = FeasibilityCalculator::default();

        assert!(!strict.calculate(&input).feasible);
        assert!(lenient.calculate(&input).feasible);
        assert!(strict.calculate(&input).summary.contains("$ "));
    }

    #[test]
    fn test_payback_must_fit_lifespan() {
        // profit 500/month, payback 48 months = 4 years > 2-year lifespan
        let result = calculate_feasibility(&plan(24_000.0, 0.0, 50.0));

        assert_relative_eq!(result.payback_period, 48.0);
        assert_relative_eq!(result.roi, 25.0);
        assert!(!result.feasible);
        assert_eq!(result.payback_years(), Some(4.0));
    }
}
