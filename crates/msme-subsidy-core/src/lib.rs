pub mod error;
pub mod types;

#[cfg(feature = "amortization")]
pub mod amortization;

#[cfg(feature = "schemes")]
pub mod schemes;

#[cfg(feature = "emi")]
pub mod emi;

#[cfg(feature = "project_report")]
pub mod project_report;

pub use error::SubsidyError;
pub use types::*;

/// Standard result type for all subsidy calculations
pub type SubsidyResult<T> = Result<T, SubsidyError>;
