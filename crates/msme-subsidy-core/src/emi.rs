//! Level-payment (EMI) loans.
//!
//! Several bank sanction letters quote an equated monthly installment rather
//! than a level-principal schedule. This module computes that annuity figure
//! and its schedule on its own; the level-principal engine never uses it.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::SubsidyError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate, MAX_TENURE_MONTHS};
use crate::SubsidyResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiInput {
    pub principal: Money,
    pub annual_interest_rate: Rate,
    pub tenure_months: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiPeriod {
    pub month: u32,
    pub opening_balance: Money,
    pub installment: Money,
    pub interest: Money,
    pub principal: Money,
    pub closing_balance: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiOutput {
    pub emi: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub schedule: Vec<EmiPeriod>,
}

/// Equated monthly installment and its annuity schedule.
pub fn calculate_emi(input: &EmiInput) -> SubsidyResult<ComputationOutput<EmiOutput>> {
    let start = Instant::now();
    validate_emi_input(input)?;

    let emi = emi_amount(input.principal, input.annual_interest_rate, input.tenure_months)?;
    let monthly_rate = input.annual_interest_rate / MONTHS_PER_YEAR;

    let mut schedule: Vec<EmiPeriod> = Vec::with_capacity(input.tenure_months as usize);
    let mut balance = input.principal;

    for month in 1..=input.tenure_months {
        let opening_balance = balance;
        let interest = opening_balance * monthly_rate;
        // Final installment clears whatever rounding left behind.
        let principal = if month == input.tenure_months {
            opening_balance
        } else {
            (emi - interest).min(opening_balance)
        };
        let closing_balance = (opening_balance - principal).max(Decimal::ZERO);

        schedule.push(EmiPeriod {
            month,
            opening_balance,
            installment: principal + interest,
            interest,
            principal,
            closing_balance,
        });
        balance = closing_balance;
    }

    let total_payment: Money = schedule.iter().map(|p| p.installment).sum();
    let total_interest: Money = schedule.iter().map(|p| p.interest).sum();

    let output = EmiOutput {
        emi,
        total_payment,
        total_interest,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Annuity EMI = P*r*(1+r)^n / ((1+r)^n - 1), r = annual rate / 12",
        input,
        Vec::new(),
        elapsed,
        output,
    ))
}

/// EMI for a principal, annual rate and tenure. A zero rate divides the
/// principal evenly.
pub fn emi_amount(principal: Money, annual_interest_rate: Rate, tenure_months: u32) -> SubsidyResult<Money> {
    validate_tenure(tenure_months)?;
    let n = Decimal::from(tenure_months);
    if annual_interest_rate.is_zero() {
        return Ok(principal / n);
    }

    let r = annual_interest_rate / MONTHS_PER_YEAR;
    let factor = (Decimal::ONE + r)
        .checked_powu(tenure_months as u64)
        .ok_or_else(|| SubsidyError::InvalidInput {
            field: "tenure_months".into(),
            reason: "Compounding factor overflows for this rate and tenure".into(),
        })?;

    Ok(principal * r * factor / (factor - Decimal::ONE))
}

fn validate_emi_input(input: &EmiInput) -> SubsidyResult<()> {
    if input.principal <= Decimal::ZERO {
        return Err(SubsidyError::InvalidTerms {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    validate_tenure(input.tenure_months)?;
    if input.annual_interest_rate < Decimal::ZERO || input.annual_interest_rate > Decimal::ONE {
        return Err(SubsidyError::InvalidTerms {
            field: "annual_interest_rate".into(),
            reason: "Interest rate must be between 0 and 1".into(),
        });
    }
    Ok(())
}

fn validate_tenure(tenure_months: u32) -> SubsidyResult<()> {
    if tenure_months == 0 {
        return Err(SubsidyError::InvalidTerms {
            field: "tenure_months".into(),
            reason: "Tenure must be at least 1 month".into(),
        });
    }
    if tenure_months > MAX_TENURE_MONTHS {
        return Err(SubsidyError::InvalidTerms {
            field: "tenure_months".into(),
            reason: format!("Tenure cannot exceed {MAX_TENURE_MONTHS} months"),
        });
    }
    Ok(())
}
