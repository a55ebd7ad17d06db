use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use msme_subsidy_core::emi::{self, EmiInput};

use crate::input;

/// Arguments for an equated monthly installment schedule
#[derive(Args)]
pub struct EmiArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as a decimal (0.12 = 12%)
    #[arg(long, alias = "rate")]
    pub interest_rate: Option<Decimal>,

    /// Number of monthly installments
    #[arg(long, alias = "tenure")]
    pub tenure_months: Option<u32>,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let emi_input: EmiInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        EmiInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_interest_rate: args
                .interest_rate
                .ok_or("--interest-rate is required (or provide --input)")?,
            tenure_months: args
                .tenure_months
                .ok_or("--tenure-months is required (or provide --input)")?,
        }
    };
    let result = emi::calculate_emi(&emi_input)?;
    Ok(serde_json::to_value(result)?)
}
