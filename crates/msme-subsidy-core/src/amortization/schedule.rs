//! Level-principal loan amortization with an upfront capital subsidy and
//! annual interest-subvention credits.
//!
//! The principal portion of every installment is constant; interest is charged
//! monthly on the declining balance. A day-one credit reduces the balance
//! before the first accrual, and an interest-subvention credit is computed once
//! per year in the configured credit month for a limited number of years.
//! All math uses `rust_decimal::Decimal`.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::SubsidyError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate, MAX_TENURE_MONTHS};
use crate::SubsidyResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const MONTHS_PER_YEAR: Decimal = dec!(12);
/// April, the start of the Indian financial year.
pub const DEFAULT_CREDIT_MONTH: u32 = 4;
pub const DEFAULT_ELIGIBLE_YEARS: u32 = 5;

pub(crate) fn default_credit_month() -> u32 {
    DEFAULT_CREDIT_MONTH
}

pub(crate) fn default_eligible_years() -> u32 {
    DEFAULT_ELIGIBLE_YEARS
}

// ---------------------------------------------------------------------------
// Input / Output Types
// ---------------------------------------------------------------------------

/// Which outstanding balance an interest-subvention credit is computed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubventionBasis {
    /// Opening balance of the credit month itself.
    #[default]
    PointInTime,
    /// Mean opening balance of the months since the previous credit month,
    /// the credit month included.
    YearAveraged,
}

/// Resolved loan terms for one scheme candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Sanctioned loan amount before any day-one credit.
    pub principal: Money,
    /// Annual interest rate (0.10 = 10%), charged monthly at rate / 12.
    pub annual_interest_rate: Rate,
    /// Number of monthly installments.
    pub tenure_months: u32,
    /// Upfront capital subsidy applied before the first interest accrual.
    #[serde(default)]
    pub day_one_credit: Money,
    /// Annual interest-subvention rate on the outstanding balance.
    #[serde(default)]
    pub annual_subvention_rate: Rate,
    /// First installment month. Only year and month are significant.
    pub start_date: NaiveDate,
    /// Calendar month (1-12) in which the subvention credit is booked.
    #[serde(default = "default_credit_month")]
    pub credit_month: u32,
    /// Years from start during which subvention credits accrue.
    #[serde(default = "default_eligible_years")]
    pub eligible_years: u32,
    #[serde(default)]
    pub subvention_basis: SubventionBasis,
    /// Ceiling on any single subvention credit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subvention_cap: Option<Money>,
}

impl LoanTerms {
    /// Plain loan with no subsidy component.
    pub fn new(
        principal: Money,
        annual_interest_rate: Rate,
        tenure_months: u32,
        start_date: NaiveDate,
    ) -> Self {
        LoanTerms {
            principal,
            annual_interest_rate,
            tenure_months,
            day_one_credit: Decimal::ZERO,
            annual_subvention_rate: Decimal::ZERO,
            start_date,
            credit_month: DEFAULT_CREDIT_MONTH,
            eligible_years: DEFAULT_ELIGIBLE_YEARS,
            subvention_basis: SubventionBasis::PointInTime,
            subvention_cap: None,
        }
    }

    pub fn with_day_one_credit(mut self, credit: Money) -> Self {
        self.day_one_credit = credit;
        self
    }

    pub fn with_subvention(mut self, rate: Rate, credit_month: u32, eligible_years: u32) -> Self {
        self.annual_subvention_rate = rate;
        self.credit_month = credit_month;
        self.eligible_years = eligible_years;
        self
    }

    pub fn with_subvention_basis(mut self, basis: SubventionBasis) -> Self {
        self.subvention_basis = basis;
        self
    }

    pub fn with_subvention_cap(mut self, cap: Money) -> Self {
        self.subvention_cap = Some(cap);
        self
    }

    /// Day-one credit actually absorbed by the loan, i.e. clamped to principal.
    pub fn effective_day_one_credit(&self) -> Money {
        self.day_one_credit.min(self.principal).max(Decimal::ZERO)
    }

    /// Balance outstanding after the day-one credit, never negative.
    pub fn net_principal(&self) -> Money {
        (self.principal - self.day_one_credit).max(Decimal::ZERO)
    }
}

/// One month of the repayment schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based installment number.
    pub month: u32,
    /// First day of the calendar month of this installment.
    pub date: NaiveDate,
    /// Whole years elapsed since the start month (0-based).
    pub year_index: u32,
    pub opening_balance: Money,
    pub principal_paid: Money,
    pub interest_charged: Money,
    pub subsidy_credit: Money,
    /// principal_paid + interest_charged.
    pub installment: Money,
    pub closing_balance: Money,
}

impl ScheduleEntry {
    /// Entry for a month after the loan has been fully repaid.
    fn settled(month: u32, date: NaiveDate, year_index: u32) -> Self {
        ScheduleEntry {
            month,
            date,
            year_index,
            opening_balance: Decimal::ZERO,
            principal_paid: Decimal::ZERO,
            interest_charged: Decimal::ZERO,
            subsidy_credit: Decimal::ZERO,
            installment: Decimal::ZERO,
            closing_balance: Decimal::ZERO,
        }
    }
}

/// Totals over a full schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Opening balance of month 1.
    pub net_principal: Money,
    pub total_principal: Money,
    pub total_interest: Money,
    pub total_subvention: Money,
    pub total_installments: Money,
    /// total_interest - total_subvention.
    pub net_interest_cost: Money,
    /// Month in which the balance first reaches zero, if it had any balance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payoff_month: Option<u32>,
    /// Number of months with a non-zero subvention credit.
    pub credit_count: u32,
}

impl ScheduleSummary {
    pub fn from_entries(entries: &[ScheduleEntry]) -> Self {
        let net_principal = entries
            .first()
            .map(|e| e.opening_balance)
            .unwrap_or(Decimal::ZERO);
        let total_principal: Money = entries.iter().map(|e| e.principal_paid).sum();
        let total_interest: Money = entries.iter().map(|e| e.interest_charged).sum();
        let total_subvention: Money = entries.iter().map(|e| e.subsidy_credit).sum();
        let total_installments: Money = entries.iter().map(|e| e.installment).sum();
        let payoff_month = entries
            .iter()
            .find(|e| e.principal_paid > Decimal::ZERO && e.closing_balance.is_zero())
            .map(|e| e.month);
        let credit_count = entries
            .iter()
            .filter(|e| e.subsidy_credit > Decimal::ZERO)
            .count() as u32;

        ScheduleSummary {
            net_principal,
            total_principal,
            total_interest,
            total_subvention,
            total_installments,
            net_interest_cost: total_interest - total_subvention,
            payoff_month,
            credit_count,
        }
    }
}

/// Output of a schedule run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutput {
    pub entries: Vec<ScheduleEntry>,
    pub summary: ScheduleSummary,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the month-by-month repayment schedule wrapped in the standard
/// output envelope.
pub fn compute_schedule(terms: &LoanTerms) -> SubsidyResult<ComputationOutput<ScheduleOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let entries = build_schedule(terms)?;
    let summary = ScheduleSummary::from_entries(&entries);

    if terms.day_one_credit > terms.principal {
        warnings.push(format!(
            "Day-one credit {} exceeds principal {}; opening balance clamped to zero",
            terms.day_one_credit, terms.principal
        ));
    }
    if terms.annual_subvention_rate > Decimal::ZERO
        && summary.credit_count == 0
        && summary.net_principal > Decimal::ZERO
    {
        warnings.push(format!(
            "Subvention rate {} configured but no credit month {} falls within the first {} year(s) of the schedule",
            terms.annual_subvention_rate, terms.credit_month, terms.eligible_years
        ));
    }

    log::debug!(
        "schedule: {} months, net principal {}, interest {}, subvention {}",
        entries.len(),
        summary.net_principal,
        summary.total_interest,
        summary.total_subvention
    );

    let methodology = match terms.subvention_basis {
        SubventionBasis::PointInTime => {
            "Level-principal amortization with point-in-time interest subvention"
        }
        SubventionBasis::YearAveraged => {
            "Level-principal amortization with year-averaged interest subvention"
        }
    };

    let output = ScheduleOutput { entries, summary };
    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(methodology, terms, warnings, elapsed, output))
}

/// Run the amortization loop and return the bare entries.
pub fn build_schedule(terms: &LoanTerms) -> SubsidyResult<Vec<ScheduleEntry>> {
    validate_loan_terms(terms)?;

    let first_month = first_of_month(terms.start_date)?;
    let net_principal = terms.net_principal();
    let fixed_principal = net_principal / Decimal::from(terms.tenure_months);

    let mut entries: Vec<ScheduleEntry> = Vec::with_capacity(terms.tenure_months as usize);
    let mut balance = net_principal;
    let mut cycle = CreditCycle::default();

    for month in 1..=terms.tenure_months {
        let date = installment_date(first_month, month)?;
        let year_index = (month - 1) / 12;

        if balance <= Decimal::ZERO {
            entries.push(ScheduleEntry::settled(month, date, year_index));
            continue;
        }

        let opening_balance = balance;
        let interest_charged = opening_balance * terms.annual_interest_rate / MONTHS_PER_YEAR;

        cycle.record(opening_balance);
        let is_credit_month = date.month() == terms.credit_month;
        let subsidy_credit = if is_credit_month && subvention_active(terms, year_index) {
            let basis_balance = match terms.subvention_basis {
                SubventionBasis::PointInTime => opening_balance,
                SubventionBasis::YearAveraged => cycle.average(),
            };
            let credit = basis_balance * terms.annual_subvention_rate;
            match terms.subvention_cap {
                Some(cap) => credit.min(cap),
                None => credit,
            }
        } else {
            Decimal::ZERO
        };
        if is_credit_month {
            cycle = CreditCycle::default();
        }

        // The last installment sweeps any residue left by the division above.
        let principal_paid = if month == terms.tenure_months {
            opening_balance
        } else {
            fixed_principal.min(opening_balance)
        };
        let closing_balance = (opening_balance - principal_paid).max(Decimal::ZERO);

        entries.push(ScheduleEntry {
            month,
            date,
            year_index,
            opening_balance,
            principal_paid,
            interest_charged,
            subsidy_credit,
            installment: principal_paid + interest_charged,
            closing_balance,
        });

        balance = closing_balance;
    }

    Ok(entries)
}

/// Reject terms no schedule can be computed for.
pub fn validate_loan_terms(terms: &LoanTerms) -> SubsidyResult<()> {
    if terms.principal <= Decimal::ZERO {
        return Err(SubsidyError::InvalidTerms {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    if terms.tenure_months == 0 {
        return Err(SubsidyError::InvalidTerms {
            field: "tenure_months".into(),
            reason: "Tenure must be at least 1 month".into(),
        });
    }
    if terms.tenure_months > MAX_TENURE_MONTHS {
        return Err(SubsidyError::InvalidTerms {
            field: "tenure_months".into(),
            reason: format!("Tenure cannot exceed {MAX_TENURE_MONTHS} months"),
        });
    }
    if terms.annual_interest_rate < Decimal::ZERO || terms.annual_interest_rate > Decimal::ONE {
        return Err(SubsidyError::InvalidTerms {
            field: "annual_interest_rate".into(),
            reason: "Interest rate must be between 0 and 1".into(),
        });
    }
    if terms.day_one_credit < Decimal::ZERO {
        return Err(SubsidyError::InvalidTerms {
            field: "day_one_credit".into(),
            reason: "Day-one credit cannot be negative".into(),
        });
    }
    if terms.annual_subvention_rate < Decimal::ZERO || terms.annual_subvention_rate >= Decimal::ONE
    {
        return Err(SubsidyError::InvalidTerms {
            field: "annual_subvention_rate".into(),
            reason: "Subvention rate must be at least 0 and below 1".into(),
        });
    }
    if !(1..=12).contains(&terms.credit_month) {
        return Err(SubsidyError::InvalidTerms {
            field: "credit_month".into(),
            reason: "Credit month must be between 1 and 12".into(),
        });
    }
    if let Some(cap) = terms.subvention_cap {
        if cap < Decimal::ZERO {
            return Err(SubsidyError::InvalidTerms {
                field: "subvention_cap".into(),
                reason: "Subvention cap cannot be negative".into(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Running opening balances since the last credit month.
#[derive(Debug, Default)]
struct CreditCycle {
    balance_sum: Money,
    months: u32,
}

impl CreditCycle {
    fn record(&mut self, opening_balance: Money) {
        self.balance_sum += opening_balance;
        self.months += 1;
    }

    fn average(&self) -> Money {
        if self.months == 0 {
            Decimal::ZERO
        } else {
            self.balance_sum / Decimal::from(self.months)
        }
    }
}

fn subvention_active(terms: &LoanTerms, year_index: u32) -> bool {
    terms.annual_subvention_rate > Decimal::ZERO && year_index < terms.eligible_years
}

fn first_of_month(date: NaiveDate) -> SubsidyResult<NaiveDate> {
    date.with_day(1)
        .ok_or_else(|| SubsidyError::DateError(format!("Cannot normalise {date} to month start")))
}

fn installment_date(first_month: NaiveDate, month: u32) -> SubsidyResult<NaiveDate> {
    first_month
        .checked_add_months(Months::new(month - 1))
        .ok_or_else(|| {
            SubsidyError::DateError(format!(
                "Installment {month} from {first_month} is outside the supported calendar"
            ))
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
