use napi::Result as NapiResult;
use napi_derive::napi;

use msme_subsidy_core::schemes::resolver::{ApplicantProfile, PolicyFormat, PolicyTable};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_schedule(terms_json: String) -> NapiResult<String> {
    let terms: msme_subsidy_core::amortization::LoanTerms =
        serde_json::from_str(&terms_json).map_err(to_napi_error)?;
    let output =
        msme_subsidy_core::amortization::compute_schedule(&terms).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn annual_schedule(terms_json: String) -> NapiResult<String> {
    let terms: msme_subsidy_core::amortization::LoanTerms =
        serde_json::from_str(&terms_json).map_err(to_napi_error)?;
    let output = msme_subsidy_core::amortization::compute_annual_schedule(&terms)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Schemes
// ---------------------------------------------------------------------------

#[napi]
pub fn compare_schemes(candidates_json: String) -> NapiResult<String> {
    let candidates: Vec<msme_subsidy_core::schemes::SchemeCandidate> =
        serde_json::from_str(&candidates_json).map_err(to_napi_error)?;
    let output =
        msme_subsidy_core::schemes::compare_schemes(&candidates).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// `start_date` is an ISO date (YYYY-MM-DD) for the first installment.
/// `policy` is a policy table in `policy_format`: `"json"` (the default)
/// or `"yaml"`.
#[napi]
pub fn resolve_schemes(
    profile_json: String,
    policy: String,
    start_date: String,
    policy_format: Option<String>,
) -> NapiResult<String> {
    let profile: ApplicantProfile = serde_json::from_str(&profile_json).map_err(to_napi_error)?;
    let format = match policy_format {
        Some(name) => name.parse::<PolicyFormat>().map_err(to_napi_error)?,
        None => PolicyFormat::Json,
    };
    let table = PolicyTable::parse(&policy, format).map_err(to_napi_error)?;
    let start = start_date
        .parse::<chrono::NaiveDate>()
        .map_err(to_napi_error)?;
    let output = msme_subsidy_core::schemes::resolve_and_compare(&profile, &table, start)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// EMI and project report
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_emi(input_json: String) -> NapiResult<String> {
    let input: msme_subsidy_core::emi::EmiInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = msme_subsidy_core::emi::calculate_emi(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn depreciation_schedule(input_json: String) -> NapiResult<String> {
    let input: msme_subsidy_core::project_report::DepreciationInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = msme_subsidy_core::project_report::depreciation_schedule(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn operating_statement(input_json: String) -> NapiResult<String> {
    let input: msme_subsidy_core::project_report::OperationsInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = msme_subsidy_core::project_report::operating_statement(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
