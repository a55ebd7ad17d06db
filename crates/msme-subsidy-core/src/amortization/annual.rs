//! Loan-year roll-up of a monthly schedule, as shown in the repayment
//! statement of a detailed project report.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::schedule::{build_schedule, LoanTerms, ScheduleEntry};
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::SubsidyResult;

/// One loan year of repayments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualRepayment {
    /// 1-based loan year.
    pub year: u32,
    pub months: u32,
    pub opening_balance: Money,
    pub principal_paid: Money,
    pub interest_charged: Money,
    pub subsidy_credit: Money,
    pub installments: Money,
    pub closing_balance: Money,
}

/// Yearly repayment statement for a loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualOutput {
    pub years: Vec<AnnualRepayment>,
    /// Loan years that started with an outstanding balance.
    pub active_years: usize,
}

/// Run the monthly engine and roll the result up into loan years.
pub fn compute_annual_schedule(
    terms: &LoanTerms,
) -> SubsidyResult<ComputationOutput<AnnualOutput>> {
    let start = Instant::now();
    let entries = build_schedule(terms)?;
    let years = summarize_by_year(&entries);
    let output = AnnualOutput {
        active_years: active_years(&years),
        years,
    };
    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Level-principal amortization rolled up by loan year",
        terms,
        Vec::new(),
        elapsed,
        output,
    ))
}

/// Group monthly entries into loan years counted from the start month.
pub fn summarize_by_year(entries: &[ScheduleEntry]) -> Vec<AnnualRepayment> {
    let mut years: Vec<AnnualRepayment> = Vec::new();

    for entry in entries {
        let year = entry.year_index + 1;
        match years.last_mut() {
            Some(current) if current.year == year => {
                current.months += 1;
                current.principal_paid += entry.principal_paid;
                current.interest_charged += entry.interest_charged;
                current.subsidy_credit += entry.subsidy_credit;
                current.installments += entry.installment;
                current.closing_balance = entry.closing_balance;
            }
            _ => years.push(AnnualRepayment {
                year,
                months: 1,
                opening_balance: entry.opening_balance,
                principal_paid: entry.principal_paid,
                interest_charged: entry.interest_charged,
                subsidy_credit: entry.subsidy_credit,
                installments: entry.installment,
                closing_balance: entry.closing_balance,
            }),
        }
    }

    years
}

/// Loan years in which any principal was still outstanding.
pub fn active_years(years: &[AnnualRepayment]) -> usize {
    years
        .iter()
        .filter(|y| y.opening_balance > Decimal::ZERO)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn seven_year_loan() -> LoanTerms {
        LoanTerms::new(
            dec!(3_040_000),
            dec!(0.10),
            84,
            NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
        )
    }

    #[test]
    fn test_groups_into_loan_years() {
        let entries = build_schedule(&seven_year_loan()).unwrap();
        let years = summarize_by_year(&entries);
        assert_eq!(years.len(), 7);
        assert!(years.iter().all(|y| y.months == 12));
        assert_eq!(years[0].opening_balance, dec!(3_040_000));
        assert_eq!(years[6].closing_balance, Decimal::ZERO);
        assert_eq!(active_years(&years), 7);
    }

    #[test]
    fn test_year_boundaries_chain() {
        let entries = build_schedule(&seven_year_loan()).unwrap();
        let years = summarize_by_year(&entries);
        for pair in years.windows(2) {
            assert_eq!(pair[0].closing_balance, pair[1].opening_balance);
        }
        let principal: Decimal = years.iter().map(|y| y.principal_paid).sum();
        assert!((principal - dec!(3_040_000)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_partial_final_year() {
        let terms = LoanTerms::new(
            dec!(180_000),
            dec!(0.09),
            18,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        );
        let years = summarize_by_year(&build_schedule(&terms).unwrap());
        assert_eq!(years.len(), 2);
        assert_eq!(years[1].months, 6);
        assert_eq!(years[1].principal_paid, dec!(60_000));
    }

    #[test]
    fn test_compute_annual_schedule_with_day_one_credit() {
        let terms = seven_year_loan().with_day_one_credit(dec!(3_040_000));
        let out = compute_annual_schedule(&terms).unwrap();
        assert_eq!(out.result.years.len(), 7);
        assert_eq!(out.result.active_years, 0);
    }

    #[test]
    fn test_empty_schedule() {
        assert!(summarize_by_year(&[]).is_empty());
    }
}
