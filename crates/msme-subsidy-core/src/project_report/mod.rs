pub mod depreciation;
pub mod operations;

/// Longest horizon any project-report statement covers.
pub const MAX_REPORT_YEARS: u32 = 50;

pub use depreciation::{depreciation_schedule, AssetClass, DepreciationInput, DepreciationOutput};
pub use operations::{
    operating_statement, ExpenseLine, OperatingYear, OperationsInput, OperationsOutput,
};
