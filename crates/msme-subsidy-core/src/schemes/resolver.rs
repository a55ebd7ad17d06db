//! Resolve an applicant profile against a policy table into per-scheme loan
//! terms.
//!
//! Scheme rules are data: each `SchemePolicy` carries its eligibility bounds,
//! capital-subsidy rate rules, own-contribution rates and loan policy. The
//! resolver only evaluates them; it knows nothing about any particular scheme.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Instant;

use super::compare::{compare_schemes, ComparisonOutput, SchemeCandidate};
use crate::amortization::schedule::{
    default_credit_month, default_eligible_years, LoanTerms, SubventionBasis,
};
use crate::error::SubsidyError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::SubsidyResult;

// ---------------------------------------------------------------------------
// Applicant profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Transgender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialCategory {
    General,
    Obc,
    Sc,
    St,
    Minority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Rural,
    Urban,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub gender: Gender,
    pub social_category: SocialCategory,
    pub location: Location,
    pub age: u32,
    /// Business sector, e.g. "Manufacturing", "Service", "Traditional Artisan".
    pub sector: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    pub project_cost: Money,
    #[serde(default)]
    pub ex_serviceman: bool,
    #[serde(default)]
    pub differently_abled: bool,
    /// Product is the district's One District One Product item.
    #[serde(default)]
    pub odop_product: bool,
}

impl ApplicantProfile {
    /// Women, transgender applicants, SC/ST/OBC/minority, ex-servicemen and
    /// differently-abled applicants qualify for the special-category rates.
    pub fn is_special_category(&self) -> bool {
        self.gender != Gender::Male
            || self.social_category != SocialCategory::General
            || self.ex_serviceman
            || self.differently_abled
    }
}

// ---------------------------------------------------------------------------
// Policy table
// ---------------------------------------------------------------------------

/// Bounds an applicant must satisfy. Empty lists and `None` bounds mean any.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Eligibility {
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub sectors: Vec<String>,
    pub districts: Vec<String>,
    pub min_project_cost: Option<Money>,
    pub max_project_cost: Option<Money>,
    pub special_category_only: bool,
    pub odop_only: bool,
}

/// Capital subsidy rate for a location / category combination. The first
/// matching rule wins; `None` fields match anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsidyRule {
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub special_category: Option<bool>,
    pub rate: Rate,
}

/// Share of project cost the applicant funds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContributionRule {
    pub general: Rate,
    pub special: Rate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanPolicy {
    pub annual_interest_rate: Rate,
    pub tenure_months: u32,
    #[serde(default)]
    pub annual_subvention_rate: Rate,
    #[serde(default = "default_credit_month")]
    pub credit_month: u32,
    #[serde(default = "default_eligible_years")]
    pub eligible_years: u32,
    #[serde(default)]
    pub subvention_basis: SubventionBasis,
    #[serde(default)]
    pub subvention_cap: Option<Money>,
    /// Upper limit on the sanctioned loan.
    #[serde(default)]
    pub max_loan: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemePolicy {
    pub scheme: String,
    #[serde(default)]
    pub benefit_type: String,
    #[serde(default)]
    pub eligibility: Eligibility,
    #[serde(default)]
    pub capital_subsidy: Vec<SubsidyRule>,
    #[serde(default)]
    pub capital_subsidy_cap: Option<Money>,
    #[serde(default)]
    pub own_contribution: ContributionRule,
    pub loan: LoanPolicy,
    #[serde(default)]
    pub other_grants: Money,
}

/// Serialization of a policy table on disk or over the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyFormat {
    #[default]
    Json,
    Yaml,
}

impl PolicyFormat {
    /// YAML for `.yaml`/`.yml` extensions, JSON for anything else.
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext {
            Some(e) if e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml") => {
                PolicyFormat::Yaml
            }
            _ => PolicyFormat::Json,
        }
    }
}

impl std::str::FromStr for PolicyFormat {
    type Err = SubsidyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(PolicyFormat::Json),
            "yaml" | "yml" => Ok(PolicyFormat::Yaml),
            other => Err(SubsidyError::PolicyError(format!(
                "Unknown policy format '{other}', expected json or yaml"
            ))),
        }
    }
}

/// The set of schemes an operator has configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyTable {
    pub schemes: Vec<SchemePolicy>,
}

impl PolicyTable {
    pub fn from_json(contents: &str) -> SubsidyResult<Self> {
        let table: PolicyTable = serde_json::from_str(contents)?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_yaml(contents: &str) -> SubsidyResult<Self> {
        let table: PolicyTable = serde_yaml::from_str(contents)?;
        table.validate()?;
        Ok(table)
    }

    pub fn parse(contents: &str, format: PolicyFormat) -> SubsidyResult<Self> {
        match format {
            PolicyFormat::Json => Self::from_json(contents),
            PolicyFormat::Yaml => Self::from_yaml(contents),
        }
    }

    /// Reject tables with unnamed or duplicate schemes or out-of-range rates.
    pub fn validate(&self) -> SubsidyResult<()> {
        if self.schemes.is_empty() {
            return Err(SubsidyError::PolicyError(
                "Policy table defines no schemes".into(),
            ));
        }
        let mut seen: HashSet<&str> = HashSet::new();
        for policy in &self.schemes {
            let name = policy.scheme.trim();
            if name.is_empty() {
                return Err(SubsidyError::PolicyError("Scheme name is empty".into()));
            }
            if !seen.insert(name) {
                return Err(SubsidyError::PolicyError(format!(
                    "Scheme '{name}' is defined more than once"
                )));
            }
            for rule in &policy.capital_subsidy {
                if !is_fraction(rule.rate) {
                    return Err(SubsidyError::PolicyError(format!(
                        "{name}: capital subsidy rate {} is outside 0..1",
                        rule.rate
                    )));
                }
            }
            let contribution = &policy.own_contribution;
            if !contribution_in_range(contribution.general)
                || !contribution_in_range(contribution.special)
            {
                return Err(SubsidyError::PolicyError(format!(
                    "{name}: own contribution must be at least 0 and below 1"
                )));
            }
            if policy.other_grants < Decimal::ZERO {
                return Err(SubsidyError::PolicyError(format!(
                    "{name}: grants cannot be negative"
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedScheme {
    pub scheme: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionOutput {
    pub special_category: bool,
    pub candidates: Vec<SchemeCandidate>,
    pub skipped: Vec<SkippedScheme>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Evaluate every scheme in the table against the profile and build loan
/// terms for the ones the applicant qualifies for.
pub fn resolve_candidates(
    profile: &ApplicantProfile,
    table: &PolicyTable,
    start_date: NaiveDate,
) -> SubsidyResult<ComputationOutput<ResolutionOutput>> {
    let start = Instant::now();
    let output = resolve(profile, table, start_date)?;
    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Policy-table eligibility and capital subsidy = min(project cost x rate, cap)",
        profile,
        Vec::new(),
        elapsed,
        output,
    ))
}

/// Resolve the profile, then rank the eligible schemes by total benefit.
/// Skipped schemes are reported as warnings.
pub fn resolve_and_compare(
    profile: &ApplicantProfile,
    table: &PolicyTable,
    start_date: NaiveDate,
) -> SubsidyResult<ComputationOutput<ComparisonOutput>> {
    let resolution = resolve(profile, table, start_date)?;
    if resolution.candidates.is_empty() {
        let reasons: Vec<String> = resolution
            .skipped
            .iter()
            .map(|s| format!("{} ({})", s.scheme, s.reason))
            .collect();
        return Err(SubsidyError::InvalidInput {
            field: "profile".into(),
            reason: format!("Applicant is not eligible for any scheme: {}", reasons.join("; ")),
        });
    }

    let mut output = compare_schemes(&resolution.candidates)?;
    output.warnings.extend(
        resolution
            .skipped
            .iter()
            .map(|s| format!("{} not eligible: {}", s.scheme, s.reason)),
    );
    Ok(output)
}

fn resolve(
    profile: &ApplicantProfile,
    table: &PolicyTable,
    start_date: NaiveDate,
) -> SubsidyResult<ResolutionOutput> {
    validate_profile(profile)?;
    table.validate()?;

    let special = profile.is_special_category();
    let mut candidates: Vec<SchemeCandidate> = Vec::new();
    let mut skipped: Vec<SkippedScheme> = Vec::new();

    for policy in &table.schemes {
        if let Some(reason) = ineligibility_reason(profile, special, &policy.eligibility) {
            log::debug!("{} skipped: {}", policy.scheme, reason);
            skipped.push(SkippedScheme {
                scheme: policy.scheme.clone(),
                reason,
            });
            continue;
        }

        let contribution_rate = if special {
            policy.own_contribution.special
        } else {
            policy.own_contribution.general
        };
        let mut principal = profile.project_cost * (Decimal::ONE - contribution_rate);
        if let Some(max_loan) = policy.loan.max_loan {
            principal = principal.min(max_loan);
        }
        if principal <= Decimal::ZERO {
            skipped.push(SkippedScheme {
                scheme: policy.scheme.clone(),
                reason: "no loan component after own contribution".into(),
            });
            continue;
        }

        let day_one_credit = capital_subsidy(profile, special, policy);
        let terms = LoanTerms {
            principal,
            annual_interest_rate: policy.loan.annual_interest_rate,
            tenure_months: policy.loan.tenure_months,
            day_one_credit,
            annual_subvention_rate: policy.loan.annual_subvention_rate,
            start_date,
            credit_month: policy.loan.credit_month,
            eligible_years: policy.loan.eligible_years,
            subvention_basis: policy.loan.subvention_basis,
            subvention_cap: policy.loan.subvention_cap,
        };

        candidates.push(SchemeCandidate {
            scheme: policy.scheme.clone(),
            benefit_type: policy.benefit_type.clone(),
            terms,
            other_grants: policy.other_grants,
        });
    }

    Ok(ResolutionOutput {
        special_category: special,
        candidates,
        skipped,
    })
}

/// Capital subsidy = project cost x first matching rate, limited by the cap.
pub fn capital_subsidy(profile: &ApplicantProfile, special: bool, policy: &SchemePolicy) -> Money {
    let rate = policy
        .capital_subsidy
        .iter()
        .find(|rule| {
            rule.location.map_or(true, |l| l == profile.location)
                && rule.special_category.map_or(true, |s| s == special)
        })
        .map(|rule| rule.rate)
        .unwrap_or(Decimal::ZERO);
    let subsidy = profile.project_cost * rate;
    match policy.capital_subsidy_cap {
        Some(cap) => subsidy.min(cap),
        None => subsidy,
    }
}

fn ineligibility_reason(
    profile: &ApplicantProfile,
    special: bool,
    rules: &Eligibility,
) -> Option<String> {
    if let Some(min) = rules.min_age {
        if profile.age < min {
            return Some(format!("minimum age is {min}"));
        }
    }
    if let Some(max) = rules.max_age {
        if profile.age > max {
            return Some(format!("maximum age is {max}"));
        }
    }
    if !rules.sectors.is_empty()
        && !rules
            .sectors
            .iter()
            .any(|s| s.eq_ignore_ascii_case(profile.sector.trim()))
    {
        return Some(format!("sector '{}' not covered", profile.sector));
    }
    if !rules.districts.is_empty() {
        let covered = profile.district.as_deref().is_some_and(|d| {
            rules
                .districts
                .iter()
                .any(|r| r.eq_ignore_ascii_case(d.trim()))
        });
        if !covered {
            return Some("district not covered".into());
        }
    }
    if let Some(min) = rules.min_project_cost {
        if profile.project_cost < min {
            return Some(format!("project cost below minimum {min}"));
        }
    }
    if let Some(max) = rules.max_project_cost {
        if profile.project_cost > max {
            return Some(format!("project cost above maximum {max}"));
        }
    }
    if rules.special_category_only && !special {
        return Some("restricted to special-category applicants".into());
    }
    if rules.odop_only && !profile.odop_product {
        return Some("restricted to One District One Product items".into());
    }
    None
}

fn validate_profile(profile: &ApplicantProfile) -> SubsidyResult<()> {
    if profile.project_cost <= Decimal::ZERO {
        return Err(SubsidyError::InvalidInput {
            field: "project_cost".into(),
            reason: "Project cost must be positive".into(),
        });
    }
    if profile.sector.trim().is_empty() {
        return Err(SubsidyError::InvalidInput {
            field: "sector".into(),
            reason: "Sector is required".into(),
        });
    }
    Ok(())
}

fn is_fraction(rate: Rate) -> bool {
    rate >= Decimal::ZERO && rate <= Decimal::ONE
}

fn contribution_in_range(rate: Rate) -> bool {
    rate >= Decimal::ZERO && rate < Decimal::ONE
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()
    }

    fn rural_woman() -> ApplicantProfile {
        ApplicantProfile {
            name: Some("Applicant".into()),
            gender: Gender::Female,
            social_category: SocialCategory::General,
            location: Location::Rural,
            age: 32,
            sector: "Manufacturing".into(),
            district: Some("Udaipur".into()),
            project_cost: dec!(4_000_000),
            ex_serviceman: false,
            differently_abled: false,
            odop_product: false,
        }
    }

    fn pmegp() -> SchemePolicy {
        SchemePolicy {
            scheme: "PMEGP".into(),
            benefit_type: "Margin Money Subsidy".into(),
            eligibility: Eligibility {
                min_age: Some(18),
                sectors: vec!["Manufacturing".into(), "Service".into()],
                max_project_cost: Some(dec!(5_000_000)),
                ..Eligibility::default()
            },
            capital_subsidy: vec![
                SubsidyRule {
                    location: Some(Location::Rural),
                    special_category: Some(true),
                    rate: dec!(0.35),
                },
                SubsidyRule {
                    location: Some(Location::Urban),
                    special_category: Some(true),
                    rate: dec!(0.25),
                },
                SubsidyRule {
                    location: Some(Location::Rural),
                    special_category: Some(false),
                    rate: dec!(0.25),
                },
                SubsidyRule {
                    location: None,
                    special_category: None,
                    rate: dec!(0.15),
                },
            ],
            capital_subsidy_cap: None,
            own_contribution: ContributionRule {
                general: dec!(0.10),
                special: dec!(0.05),
            },
            loan: LoanPolicy {
                annual_interest_rate: dec!(0.10),
                tenure_months: 84,
                annual_subvention_rate: Decimal::ZERO,
                credit_month: 4,
                eligible_years: 5,
                subvention_basis: SubventionBasis::PointInTime,
                subvention_cap: None,
                max_loan: None,
            },
            other_grants: Decimal::ZERO,
        }
    }

    fn stand_up() -> SchemePolicy {
        SchemePolicy {
            scheme: "Stand-Up India".into(),
            benefit_type: "Margin Money Support".into(),
            eligibility: Eligibility {
                min_project_cost: Some(dec!(1_000_000)),
                special_category_only: true,
                ..Eligibility::default()
            },
            capital_subsidy: vec![SubsidyRule {
                location: None,
                special_category: None,
                rate: dec!(0.15),
            }],
            capital_subsidy_cap: None,
            own_contribution: ContributionRule::default(),
            loan: LoanPolicy {
                annual_interest_rate: dec!(0.11),
                tenure_months: 84,
                annual_subvention_rate: Decimal::ZERO,
                credit_month: 4,
                eligible_years: 5,
                subvention_basis: SubventionBasis::PointInTime,
                subvention_cap: None,
                max_loan: None,
            },
            other_grants: Decimal::ZERO,
        }
    }

    fn odop() -> SchemePolicy {
        SchemePolicy {
            scheme: "ODOP".into(),
            benefit_type: "Machinery Grant".into(),
            eligibility: Eligibility {
                odop_only: true,
                ..Eligibility::default()
            },
            capital_subsidy: vec![SubsidyRule {
                location: None,
                special_category: None,
                rate: dec!(0.25),
            }],
            capital_subsidy_cap: Some(dec!(2_000_000)),
            own_contribution: ContributionRule::default(),
            loan: LoanPolicy {
                annual_interest_rate: dec!(0.11),
                tenure_months: 60,
                annual_subvention_rate: Decimal::ZERO,
                credit_month: 4,
                eligible_years: 5,
                subvention_basis: SubventionBasis::PointInTime,
                subvention_cap: None,
                max_loan: None,
            },
            other_grants: Decimal::ZERO,
        }
    }

    fn table() -> PolicyTable {
        PolicyTable {
            schemes: vec![pmegp(), stand_up(), odop()],
        }
    }

    #[test]
    fn test_special_category_detection() {
        let mut p = rural_woman();
        assert!(p.is_special_category());
        p.gender = Gender::Male;
        assert!(!p.is_special_category());
        p.social_category = SocialCategory::Sc;
        assert!(p.is_special_category());
    }

    #[test]
    fn test_rural_special_rate_and_contribution() {
        let out = resolve_candidates(&rural_woman(), &table(), start()).unwrap();
        let pmegp = out
            .result
            .candidates
            .iter()
            .find(|c| c.scheme == "PMEGP")
            .unwrap();
        // 35% of 40 lakh, loan = 95% of cost
        assert_eq!(pmegp.terms.day_one_credit, dec!(1_400_000));
        assert_eq!(pmegp.terms.principal, dec!(3_800_000));
        assert_eq!(pmegp.terms.tenure_months, 84);
        assert_eq!(pmegp.terms.start_date, start());
    }

    #[test]
    fn test_urban_general_falls_back_to_catch_all_rule() {
        let mut p = rural_woman();
        p.gender = Gender::Male;
        p.location = Location::Urban;
        let subsidy = capital_subsidy(&p, p.is_special_category(), &pmegp());
        assert_eq!(subsidy, dec!(600_000));
    }

    #[test]
    fn test_cap_applies() {
        let mut p = rural_woman();
        p.odop_product = true;
        p.project_cost = dec!(10_000_000);
        let subsidy = capital_subsidy(&p, true, &odop());
        assert_eq!(subsidy, dec!(2_000_000));
    }

    #[test]
    fn test_ineligible_schemes_reported() {
        let mut p = rural_woman();
        p.gender = Gender::Male;
        let out = resolve_candidates(&p, &table(), start()).unwrap();
        let skipped: Vec<&str> = out
            .result
            .skipped
            .iter()
            .map(|s| s.scheme.as_str())
            .collect();
        assert_eq!(skipped, vec!["Stand-Up India", "ODOP"]);
        assert_eq!(out.result.candidates.len(), 1);
        assert!(!out.result.special_category);
    }

    #[test]
    fn test_sector_match_is_case_insensitive() {
        let mut p = rural_woman();
        p.sector = "service".into();
        let out = resolve_candidates(&p, &table(), start()).unwrap();
        assert!(out.result.candidates.iter().any(|c| c.scheme == "PMEGP"));

        p.sector = "Trading".into();
        let out = resolve_candidates(&p, &table(), start()).unwrap();
        assert!(out.result.candidates.iter().all(|c| c.scheme != "PMEGP"));
    }

    #[test]
    fn test_resolve_and_compare_ranks_pmegp_first() {
        let out = resolve_and_compare(&rural_woman(), &table(), start()).unwrap();
        assert_eq!(out.result.best_scheme.as_deref(), Some("PMEGP"));
        assert!(out.warnings.iter().any(|w| w.starts_with("ODOP not eligible")));
    }

    #[test]
    fn test_no_eligible_scheme_is_an_error() {
        let mut p = rural_woman();
        p.age = 16;
        p.gender = Gender::Male;
        assert!(resolve_and_compare(&p, &table(), start()).is_err());
    }

    #[test]
    fn test_duplicate_scheme_rejected() {
        let t = PolicyTable {
            schemes: vec![pmegp(), pmegp()],
        };
        assert!(matches!(t.validate(), Err(SubsidyError::PolicyError(_))));
    }

    #[test]
    fn test_policy_table_from_json() {
        let json = r#"{
            "schemes": [{
                "scheme": "PMFME",
                "capital_subsidy": [{ "rate": "0.35" }],
                "capital_subsidy_cap": "1000000",
                "own_contribution": { "general": "0.10", "special": "0.10" },
                "loan": { "annual_interest_rate": "0.105", "tenure_months": 60 }
            }]
        }"#;
        let t = PolicyTable::from_json(json).unwrap();
        assert_eq!(t.schemes[0].loan.credit_month, 4);
        assert_eq!(t.schemes[0].loan.eligible_years, 5);
        assert_eq!(t.schemes[0].capital_subsidy[0].location, None);
    }

    #[test]
    fn test_policy_table_from_yaml() {
        let yaml = "
schemes:
  - scheme: CGTMSE Subvention
    benefit_type: Interest Subvention
    loan:
      annual_interest_rate: 0.11
      tenure_months: 60
      annual_subvention_rate: 0.03
      credit_month: 3
      subvention_basis: year_averaged
";
        let t = PolicyTable::from_yaml(yaml).unwrap();
        let loan = &t.schemes[0].loan;
        assert_eq!(loan.annual_subvention_rate, dec!(0.03));
        assert_eq!(loan.subvention_basis, SubventionBasis::YearAveraged);
        assert_eq!(loan.credit_month, 3);
    }

    #[test]
    fn test_policy_format_selection() {
        assert_eq!("YAML".parse::<PolicyFormat>().unwrap(), PolicyFormat::Yaml);
        assert_eq!("json".parse::<PolicyFormat>().unwrap(), PolicyFormat::Json);
        assert!(matches!(
            "toml".parse::<PolicyFormat>(),
            Err(SubsidyError::PolicyError(_))
        ));
        assert_eq!(PolicyFormat::from_extension(Some("yml")), PolicyFormat::Yaml);
        assert_eq!(PolicyFormat::from_extension(Some("json")), PolicyFormat::Json);
        assert_eq!(PolicyFormat::from_extension(None), PolicyFormat::Json);
    }

    #[test]
    fn test_parse_yaml_and_json_tables_alike() {
        let yaml = "
schemes:
  - scheme: PMFME
    capital_subsidy:
      - rate: 0.35
    loan:
      annual_interest_rate: 0.105
      tenure_months: 60
";
        let json = r#"{
            "schemes": [{
                "scheme": "PMFME",
                "capital_subsidy": [{ "rate": "0.35" }],
                "loan": { "annual_interest_rate": "0.105", "tenure_months": 60 }
            }]
        }"#;
        let from_yaml = PolicyTable::parse(yaml, PolicyFormat::Yaml).unwrap();
        let from_json = PolicyTable::parse(json, PolicyFormat::Json).unwrap();
        assert_eq!(from_yaml, from_json);
        assert_eq!(from_yaml.schemes[0].loan.eligible_years, 5);
        assert!(PolicyTable::parse(yaml, PolicyFormat::Json).is_err());
    }
}
