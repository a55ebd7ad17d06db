//! Written-down-value depreciation statement for the fixed assets of a
//! project report.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::MAX_REPORT_YEARS;
use crate::error::SubsidyError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::SubsidyResult;

const DEFAULT_YEARS: u32 = 5;

fn default_years() -> u32 {
    DEFAULT_YEARS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetClass {
    /// e.g. "Plant & Machinery".
    pub name: String,
    /// Annual WDV rate (0.15 = 15%).
    pub rate: Rate,
    pub value: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepreciationInput {
    pub assets: Vec<AssetClass>,
    #[serde(default = "default_years")]
    pub years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepreciationYear {
    pub year: u32,
    pub opening_value: Money,
    pub charge: Money,
    pub closing_value: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDepreciation {
    pub name: String,
    pub rate: Rate,
    pub value: Money,
    pub yearly: Vec<DepreciationYear>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepreciationOutput {
    pub assets: Vec<AssetDepreciation>,
    /// Sum of all asset charges, per year.
    pub yearly_totals: Vec<Money>,
    pub total_depreciation: Money,
    pub closing_book_value: Money,
}

/// Depreciate each asset class on its written-down value.
pub fn depreciation_schedule(
    input: &DepreciationInput,
) -> SubsidyResult<ComputationOutput<DepreciationOutput>> {
    let start = Instant::now();
    validate_depreciation_input(input)?;

    let mut yearly_totals = vec![Decimal::ZERO; input.years as usize];
    let mut assets: Vec<AssetDepreciation> = Vec::with_capacity(input.assets.len());

    for asset in &input.assets {
        let mut wdv = asset.value;
        let mut yearly: Vec<DepreciationYear> = Vec::with_capacity(input.years as usize);
        for (i, total) in yearly_totals.iter_mut().enumerate() {
            let charge = wdv * asset.rate;
            let closing_value = wdv - charge;
            yearly.push(DepreciationYear {
                year: i as u32 + 1,
                opening_value: wdv,
                charge,
                closing_value,
            });
            *total += charge;
            wdv = closing_value;
        }
        assets.push(AssetDepreciation {
            name: asset.name.clone(),
            rate: asset.rate,
            value: asset.value,
            yearly,
        });
    }

    let total_depreciation: Money = yearly_totals.iter().copied().sum();
    let gross: Money = input.assets.iter().map(|a| a.value).sum();

    let output = DepreciationOutput {
        assets,
        yearly_totals,
        total_depreciation,
        closing_book_value: gross - total_depreciation,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Written-down value: charge = opening book value x rate",
        input,
        Vec::new(),
        elapsed,
        output,
    ))
}

fn validate_depreciation_input(input: &DepreciationInput) -> SubsidyResult<()> {
    if input.assets.is_empty() {
        return Err(SubsidyError::InvalidInput {
            field: "assets".into(),
            reason: "At least one asset class is required".into(),
        });
    }
    if input.years == 0 {
        return Err(SubsidyError::InvalidInput {
            field: "years".into(),
            reason: "Depreciation must cover at least 1 year".into(),
        });
    }
    if input.years > MAX_REPORT_YEARS {
        return Err(SubsidyError::InvalidInput {
            field: "years".into(),
            reason: format!("Depreciation cannot cover more than {MAX_REPORT_YEARS} years"),
        });
    }
    for asset in &input.assets {
        if asset.value < Decimal::ZERO {
            return Err(SubsidyError::InvalidInput {
                field: format!("{}.value", asset.name),
                reason: "Asset value cannot be negative".into(),
            });
        }
        if asset.rate < Decimal::ZERO || asset.rate > Decimal::ONE {
            return Err(SubsidyError::InvalidInput {
                field: format!("{}.rate", asset.name),
                reason: "Depreciation rate must be between 0 and 1".into(),
            });
        }
    }
    Ok(())
}
