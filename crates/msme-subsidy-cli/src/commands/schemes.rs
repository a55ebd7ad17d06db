use chrono::NaiveDate;
use clap::Args;
use serde_json::Value;

use msme_subsidy_core::schemes::compare::{self, SchemeCandidate};
use msme_subsidy_core::schemes::resolver::{self, ApplicantProfile};

use crate::input;

/// Arguments for ranking already-resolved scheme candidates
#[derive(Args)]
pub struct CompareArgs {
    /// Path to a JSON array of scheme candidates
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for resolving an applicant against a policy table
#[derive(Args)]
pub struct ResolveArgs {
    /// Path to the applicant profile JSON (stdin if omitted)
    #[arg(long)]
    pub profile: Option<String>,

    /// Policy table, JSON or YAML by extension
    #[arg(long, default_value = "config/schemes.json")]
    pub schemes: String,

    /// First installment month, YYYY-MM-DD (defaults to the current month)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Only list eligible candidates and their loan terms, without ranking
    #[arg(long)]
    pub candidates_only: bool,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let candidates: Vec<SchemeCandidate> = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required for scheme comparison".into());
    };
    let result = compare::compare_schemes(&candidates)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_resolve(args: ResolveArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let profile: ApplicantProfile = if let Some(ref path) = args.profile {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--profile <file.json> or stdin required for scheme resolution".into());
    };
    let table = input::file::read_policy_table(&args.schemes)?;
    let start_date = args.start.unwrap_or_else(|| chrono::Local::now().date_naive());

    if args.candidates_only {
        let result = resolver::resolve_candidates(&profile, &table, start_date)?;
        Ok(serde_json::to_value(result)?)
    } else {
        let result = resolver::resolve_and_compare(&profile, &table, start_date)?;
        Ok(serde_json::to_value(result)?)
    }
}
