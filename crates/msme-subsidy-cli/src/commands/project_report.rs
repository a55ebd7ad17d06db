use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use msme_subsidy_core::project_report::depreciation::{self, DepreciationInput};
use msme_subsidy_core::project_report::operations::{self, OperationsInput};

use crate::input;

#[derive(Args)]
pub struct DepreciationArgs {
    /// Path to JSON file listing asset classes
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Args)]
pub struct OperationsArgs {
    /// Path to JSON file with expense lines and full-capacity sales
    #[arg(long)]
    pub input: Option<String>,

    /// Projection horizon in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Year-1 capacity utilization (0.60 = 60%)
    #[arg(long)]
    pub initial_utilization: Option<Decimal>,

    /// Utilization added each year
    #[arg(long)]
    pub utilization_step: Option<Decimal>,

    /// Linear yearly escalation of every expense line
    #[arg(long)]
    pub expense_escalation: Option<Decimal>,
}

pub fn run_depreciation(args: DepreciationArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let dep_input: DepreciationInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required for depreciation".into());
    };
    let result = depreciation::depreciation_schedule(&dep_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_operations(args: OperationsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut ops_input: OperationsInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required for operations".into());
    };

    // Flags override the file
    if let Some(years) = args.years {
        ops_input.years = years;
    }
    if let Some(u) = args.initial_utilization {
        ops_input.initial_utilization = u;
    }
    if let Some(step) = args.utilization_step {
        ops_input.utilization_step = step;
    }
    if let Some(esc) = args.expense_escalation {
        ops_input.expense_escalation = esc;
    }

    let result = operations::operating_statement(&ops_input)?;
    Ok(serde_json::to_value(result)?)
}
