//! Rank candidate schemes by the total subsidy benefit they deliver.
//!
//! Each candidate's loan terms are run through the amortization engine once;
//! the benefit is the effective day-one credit plus every subvention credit in
//! the schedule plus any standalone grants the scheme pays.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::schedule::{build_schedule, LoanTerms, ScheduleSummary};
use crate::error::SubsidyError;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::SubsidyResult;

// ---------------------------------------------------------------------------
// Input / Output Types
// ---------------------------------------------------------------------------

/// A scheme with its resolved loan terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeCandidate {
    pub scheme: String,
    /// Free-text description, e.g. "Capital Subsidy" or "Interest Subvention".
    #[serde(default)]
    pub benefit_type: String,
    pub terms: LoanTerms,
    /// Grants paid outside the loan (toolkit grants, training stipends).
    #[serde(default)]
    pub other_grants: Money,
}

/// Benefit breakdown for one ranked scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeBenefit {
    /// 1 = largest total benefit.
    pub rank: u32,
    pub scheme: String,
    pub benefit_type: String,
    pub day_one_credit: Money,
    pub total_subvention: Money,
    pub other_grants: Money,
    pub total_benefit: Money,
    pub net_principal: Money,
    pub total_interest: Money,
    /// Interest paid after subvention credits.
    pub net_interest_cost: Money,
}

/// Output of a scheme comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonOutput {
    pub rankings: Vec<SchemeBenefit>,
    pub best_scheme: Option<String>,
    pub candidates_evaluated: usize,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run the engine once per candidate and rank by total benefit, largest first.
/// Candidates with equal benefit keep their input order.
pub fn compare_schemes(
    candidates: &[SchemeCandidate],
) -> SubsidyResult<ComputationOutput<ComparisonOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if candidates.is_empty() {
        return Err(SubsidyError::InvalidInput {
            field: "candidates".into(),
            reason: "At least one scheme candidate is required".into(),
        });
    }

    let mut rankings: Vec<SchemeBenefit> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if candidate.terms.day_one_credit > candidate.terms.principal {
            warnings.push(format!(
                "{}: day-one credit {} exceeds loan {}; only {} counted",
                candidate.scheme,
                candidate.terms.day_one_credit,
                candidate.terms.principal,
                candidate.terms.effective_day_one_credit()
            ));
        }
        rankings.push(evaluate_candidate(candidate)?);
    }

    rankings.sort_by(|a, b| b.total_benefit.cmp(&a.total_benefit));
    for (i, benefit) in rankings.iter_mut().enumerate() {
        benefit.rank = i as u32 + 1;
    }

    if let [first, second, ..] = rankings.as_slice() {
        if first.total_benefit == second.total_benefit {
            warnings.push(format!(
                "{} and {} tie on total benefit {}",
                first.scheme, second.scheme, first.total_benefit
            ));
        }
    }

    log::debug!(
        "compared {} schemes; best = {:?}",
        rankings.len(),
        rankings.first().map(|b| &b.scheme)
    );

    let output = ComparisonOutput {
        best_scheme: rankings.first().map(|b| b.scheme.clone()),
        candidates_evaluated: candidates.len(),
        rankings,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Total benefit = day-one credit + interest subvention + grants, one engine run per scheme",
        &candidates,
        warnings,
        elapsed,
        output,
    ))
}

/// Benefit breakdown for a single candidate. The returned rank is 0.
pub fn evaluate_candidate(candidate: &SchemeCandidate) -> SubsidyResult<SchemeBenefit> {
    if candidate.other_grants < Decimal::ZERO {
        return Err(SubsidyError::InvalidInput {
            field: format!("{}.other_grants", candidate.scheme),
            reason: "Grants cannot be negative".into(),
        });
    }

    let entries = build_schedule(&candidate.terms).map_err(|e| e.in_scheme(&candidate.scheme))?;
    let summary = ScheduleSummary::from_entries(&entries);
    let day_one_credit = candidate.terms.effective_day_one_credit();

    Ok(SchemeBenefit {
        rank: 0,
        scheme: candidate.scheme.clone(),
        benefit_type: candidate.benefit_type.clone(),
        day_one_credit,
        total_subvention: summary.total_subvention,
        other_grants: candidate.other_grants,
        total_benefit: day_one_credit + summary.total_subvention + candidate.other_grants,
        net_principal: summary.net_principal,
        total_interest: summary.total_interest,
        net_interest_cost: summary.net_interest_cost,
    })
}
