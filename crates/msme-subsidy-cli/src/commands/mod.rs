pub mod amortization;
pub mod emi;
pub mod project_report;
pub mod schemes;
