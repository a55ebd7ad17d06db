use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use msme_subsidy_core::amortization::{annual, schedule, LoanTerms, SubventionBasis};

use crate::input;

/// Arguments for a level-principal repayment schedule
#[derive(Args)]
pub struct ScheduleArgs {
    /// Path to JSON loan terms (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal before any day-one credit
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as a decimal (0.10 = 10%)
    #[arg(long, alias = "rate")]
    pub interest_rate: Option<Decimal>,

    /// Number of monthly installments
    #[arg(long, alias = "tenure")]
    pub tenure_months: Option<u32>,

    /// Upfront capital subsidy applied before the first accrual
    #[arg(long, default_value = "0")]
    pub day_one_credit: Decimal,

    /// Annual interest-subvention rate as a decimal
    #[arg(long, default_value = "0")]
    pub subvention_rate: Decimal,

    /// First installment month, YYYY-MM-DD (defaults to the current month)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Calendar month (1-12) in which subvention is credited
    #[arg(long, default_value_t = schedule::DEFAULT_CREDIT_MONTH)]
    pub credit_month: u32,

    /// Years from start during which subvention accrues
    #[arg(long, default_value_t = schedule::DEFAULT_ELIGIBLE_YEARS)]
    pub eligible_years: u32,

    /// Compute subvention on the average balance since the last credit
    #[arg(long)]
    pub year_averaged: bool,

    /// Ceiling on any single subvention credit
    #[arg(long)]
    pub subvention_cap: Option<Decimal>,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = loan_terms(args)?;
    let result = schedule::compute_schedule(&terms)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_annual(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = loan_terms(args)?;
    let result = annual::compute_annual_schedule(&terms)?;
    Ok(serde_json::to_value(result)?)
}

fn loan_terms(args: ScheduleArgs) -> Result<LoanTerms, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let start_date = args.start.unwrap_or_else(|| chrono::Local::now().date_naive());
    let basis = if args.year_averaged {
        SubventionBasis::YearAveraged
    } else {
        SubventionBasis::PointInTime
    };

    Ok(LoanTerms {
        principal: args
            .principal
            .ok_or("--principal is required (or provide --input)")?,
        annual_interest_rate: args
            .interest_rate
            .ok_or("--interest-rate is required (or provide --input)")?,
        tenure_months: args
            .tenure_months
            .ok_or("--tenure-months is required (or provide --input)")?,
        day_one_credit: args.day_one_credit,
        annual_subvention_rate: args.subvention_rate,
        start_date,
        credit_month: args.credit_month,
        eligible_years: args.eligible_years,
        subvention_basis: basis,
        subvention_cap: args.subvention_cap,
    })
}
