pub mod annual;
pub mod schedule;

pub use annual::{compute_annual_schedule, summarize_by_year, AnnualOutput, AnnualRepayment};
pub use schedule::{
    build_schedule, compute_schedule, validate_loan_terms, LoanTerms, ScheduleEntry,
    ScheduleOutput, ScheduleSummary, SubventionBasis,
};
