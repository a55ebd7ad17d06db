//! Operating projection of a project report: capacity utilization, sales
//! realization and escalated operating expenses per year.
//!
//! Utilization starts at `initial_utilization` and rises by
//! `utilization_step` a year, capped at full capacity. Sales are the
//! full-capacity figure scaled by that year's utilization. Each expense line
//! escalates linearly from its year-1 amount: `base * (1 + escalation * (year - 1))`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::MAX_REPORT_YEARS;
use crate::error::SubsidyError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::SubsidyResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const DEFAULT_YEARS: u32 = 5;
const DEFAULT_INITIAL_UTILIZATION: Decimal = dec!(0.60);
const DEFAULT_UTILIZATION_STEP: Decimal = dec!(0.10);
const DEFAULT_EXPENSE_ESCALATION: Decimal = dec!(0.10);

fn default_years() -> u32 {
    DEFAULT_YEARS
}

fn default_initial_utilization() -> Rate {
    DEFAULT_INITIAL_UTILIZATION
}

fn default_utilization_step() -> Rate {
    DEFAULT_UTILIZATION_STEP
}

fn default_expense_escalation() -> Rate {
    DEFAULT_EXPENSE_ESCALATION
}

// ---------------------------------------------------------------------------
// Input / Output Types
// ---------------------------------------------------------------------------

/// One operating expense line at its year-1 amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLine {
    /// e.g. "Raw materials", "Wages", "Power and Fuel".
    pub name: String,
    pub base_amount: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationsInput {
    pub expenses: Vec<ExpenseLine>,
    /// Annual sales at 100% capacity.
    pub full_capacity_sales: Money,
    #[serde(default = "default_years")]
    pub years: u32,
    /// Capacity utilization in year 1 (0.60 = 60%).
    #[serde(default = "default_initial_utilization")]
    pub initial_utilization: Rate,
    /// Utilization added each following year.
    #[serde(default = "default_utilization_step")]
    pub utilization_step: Rate,
    /// Linear yearly escalation applied to every expense line.
    #[serde(default = "default_expense_escalation")]
    pub expense_escalation: Rate,
}

impl OperationsInput {
    /// Projection with the standard 5-year ramp from 60% capacity and 10%
    /// yearly escalation.
    pub fn new(expenses: Vec<ExpenseLine>, full_capacity_sales: Money) -> Self {
        OperationsInput {
            expenses,
            full_capacity_sales,
            years: DEFAULT_YEARS,
            initial_utilization: DEFAULT_INITIAL_UTILIZATION,
            utilization_step: DEFAULT_UTILIZATION_STEP,
            expense_escalation: DEFAULT_EXPENSE_ESCALATION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseProjection {
    pub name: String,
    pub base_amount: Money,
    /// One amount per projection year.
    pub yearly: Vec<Money>,
    pub total: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingYear {
    pub year: u32,
    pub capacity_utilization: Rate,
    pub sales_revenue: Money,
    pub total_expenses: Money,
    /// sales_revenue - total_expenses.
    pub operating_surplus: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationsOutput {
    pub years: Vec<OperatingYear>,
    pub expenses: Vec<ExpenseProjection>,
    pub total_sales: Money,
    pub total_expenses: Money,
    /// First year running at full capacity, if the ramp gets there.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_capacity_year: Option<u32>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Capacity ramp, sales realization and operating expenses per year.
pub fn operating_statement(
    input: &OperationsInput,
) -> SubsidyResult<ComputationOutput<OperationsOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();
    validate_operations_input(input)?;

    let expenses: Vec<ExpenseProjection> = input
        .expenses
        .iter()
        .map(|line| {
            let yearly: Vec<Money> = (0..input.years)
                .map(|y| escalated_amount(line.base_amount, input.expense_escalation, y))
                .collect();
            ExpenseProjection {
                name: line.name.clone(),
                base_amount: line.base_amount,
                total: yearly.iter().copied().sum(),
                yearly,
            }
        })
        .collect();

    let mut years: Vec<OperatingYear> = Vec::with_capacity(input.years as usize);
    let mut capped = false;
    for y in 0..input.years {
        let ramp = input.initial_utilization + input.utilization_step * Decimal::from(y);
        if ramp > Decimal::ONE {
            capped = true;
        }
        let capacity_utilization = ramp.min(Decimal::ONE);
        let sales_revenue = input.full_capacity_sales * capacity_utilization;
        let total_expenses: Money = expenses.iter().map(|e| e.yearly[y as usize]).sum();

        years.push(OperatingYear {
            year: y + 1,
            capacity_utilization,
            sales_revenue,
            total_expenses,
            operating_surplus: sales_revenue - total_expenses,
        });
    }

    if capped {
        warnings.push(format!(
            "Utilization ramp exceeds 100% within {} years; capped at full capacity",
            input.years
        ));
    }
    if let Some(loss) = years.iter().find(|y| y.operating_surplus < Decimal::ZERO) {
        warnings.push(format!(
            "Operating deficit of {} in year {}",
            -loss.operating_surplus, loss.year
        ));
    }

    let output = OperationsOutput {
        total_sales: years.iter().map(|y| y.sales_revenue).sum(),
        total_expenses: years.iter().map(|y| y.total_expenses).sum(),
        full_capacity_year: years
            .iter()
            .find(|y| y.capacity_utilization == Decimal::ONE)
            .map(|y| y.year),
        years,
        expenses,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Sales = full-capacity sales x utilization; expense = base x (1 + escalation x (year - 1))",
        input,
        warnings,
        elapsed,
        output,
    ))
}

/// Year-`y` (0-based) amount of an expense line under linear escalation.
pub fn escalated_amount(base: Money, escalation: Rate, y: u32) -> Money {
    base * (Decimal::ONE + escalation * Decimal::from(y))
}

fn validate_operations_input(input: &OperationsInput) -> SubsidyResult<()> {
    if input.years == 0 {
        return Err(SubsidyError::InvalidInput {
            field: "years".into(),
            reason: "Projection must cover at least 1 year".into(),
        });
    }
    if input.years > MAX_REPORT_YEARS {
        return Err(SubsidyError::InvalidInput {
            field: "years".into(),
            reason: format!("Projection cannot cover more than {MAX_REPORT_YEARS} years"),
        });
    }
    if input.full_capacity_sales < Decimal::ZERO {
        return Err(SubsidyError::InvalidInput {
            field: "full_capacity_sales".into(),
            reason: "Sales cannot be negative".into(),
        });
    }
    if input.initial_utilization <= Decimal::ZERO || input.initial_utilization > Decimal::ONE {
        return Err(SubsidyError::InvalidInput {
            field: "initial_utilization".into(),
            reason: "Initial utilization must be above 0 and at most 1".into(),
        });
    }
    if input.utilization_step < Decimal::ZERO || input.utilization_step > Decimal::ONE {
        return Err(SubsidyError::InvalidInput {
            field: "utilization_step".into(),
            reason: "Utilization step must be between 0 and 1".into(),
        });
    }
    if input.expense_escalation < Decimal::ZERO || input.expense_escalation > Decimal::ONE {
        return Err(SubsidyError::InvalidInput {
            field: "expense_escalation".into(),
            reason: "Expense escalation must be between 0 and 1".into(),
        });
    }
    for line in &input.expenses {
        if line.base_amount < Decimal::ZERO {
            return Err(SubsidyError::InvalidInput {
                field: format!("{}.base_amount", line.name),
                reason: "Expense amount cannot be negative".into(),
            });
        }
    }
    Ok(())
}
