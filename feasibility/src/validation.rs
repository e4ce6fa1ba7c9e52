//! Schema checks for feasibility input

use crate::{BusinessFeasibilityInput, CostItem, FeasibilityError, Result};
use serde::{Deserialize, Serialize};

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Path of the offending field, e.g. `investmentCosts[1].amount`
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub(crate) fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn check_items(list: &str, items: &[CostItem], errors: &mut Vec<FieldError>) {
    for (i, item) in items.iter().enumerate() {
        if item.name.trim().is_empty() {
            errors.push(FieldError::new(
                format!("{}[{}].name", list, i),
                "name is required",
            ));
        }
        if !item.amount.is_finite() || item.amount < 0.0 {
            errors.push(FieldError::new(
                format!("{}[{}].amount", list, i),
                "amount must be a non-negative number",
            ));
        }
    }
}

/// Values that are each finite can still overflow once combined
fn check_magnitudes(input: &BusinessFeasibilityInput, errors: &mut Vec<FieldError>) {
    let total_investment = input.total_investment();
    let operational = input.monthly_operational_costs();

    if !total_investment.is_finite() {
        errors.push(FieldError::new(
            "investmentCosts",
            "total investment is too large",
        ));
    }
    if !operational.is_finite() {
        errors.push(FieldError::new(
            "operationalCosts",
            "total operational costs are too large",
        ));
        return;
    }

    let unit_cost = input.production_cost_per_unit + operational / input.monthly_sales_volume;
    let selling_price = unit_cost * (1.0 + input.markup / 100.0);
    if !selling_price.is_finite() || !(selling_price * input.monthly_sales_volume).is_finite() {
        errors.push(FieldError::new(
            "productionCostPerUnit",
            "production cost, markup and sales volume give a price or revenue that is too large",
        ));
    }
}

impl BusinessFeasibilityInput {
    /// Reject structurally invalid input, reporting every offending field
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.business_name.trim().is_empty() {
            errors.push(FieldError::new("businessName", "business name is required"));
        }

        check_items("investmentCosts", &self.investment_costs, &mut errors);
        check_items("operationalCosts", &self.operational_costs, &mut errors);

        if !self.production_cost_per_unit.is_finite() || self.production_cost_per_unit < 0.0 {
            errors.push(FieldError::new(
                "productionCostPerUnit",
                "production cost must be a non-negative number",
            ));
        }
        if !self.monthly_sales_volume.is_finite() || self.monthly_sales_volume < 1.0 {
            errors.push(FieldError::new(
                "monthlySalesVolume",
                "monthly sales volume must be at least 1",
            ));
        }
        if !self.markup.is_finite() || self.markup < 0.0 {
            errors.push(FieldError::new(
                "markup",
                "markup must be a non-negative percentage",
            ));
        }
        if errors.is_empty() {
            check_magnitudes(self, &mut errors);
        }
        if self.project_lifespan < 1 {
            errors.push(FieldError::new(
                "projectLifespan",
                "project lifespan must be at least 1 year",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FeasibilityError::ValidationError(errors))
        }
    }
}
