use chrono::{Datelike, NaiveDate};
use msme_subsidy_core::amortization::{
    build_schedule, compute_schedule, LoanTerms, ScheduleEntry, SubventionBasis,
};
use msme_subsidy_core::SubsidyError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, 1).unwrap()
}

/// Loans exercising every path: plain, day-one credit, clamped credit,
/// subvention with both bases, zero rate, odd tenures.
fn loan_variants() -> Vec<LoanTerms> {
    vec![
        LoanTerms::new(dec!(1_200_000), dec!(0.10), 12, date(2026, 1)),
        LoanTerms::new(dec!(1_200_000), dec!(0.10), 12, date(2026, 1))
            .with_day_one_credit(dec!(200_000)),
        LoanTerms::new(dec!(500_000), dec!(0.10), 6, date(2026, 1))
            .with_day_one_credit(dec!(500_000)),
        LoanTerms::new(dec!(500_000), dec!(0.10), 6, date(2026, 1))
            .with_day_one_credit(dec!(900_000)),
        LoanTerms::new(dec!(1_000_000), dec!(0.12), 60, date(2026, 1))
            .with_subvention(dec!(0.08), 4, 5),
        LoanTerms::new(dec!(1_000_000), dec!(0.12), 84, date(2025, 9))
            .with_subvention(dec!(0.03), 3, 3)
            .with_subvention_basis(SubventionBasis::YearAveraged),
        LoanTerms::new(dec!(777_777), Decimal::ZERO, 37, date(2026, 11)),
        LoanTerms::new(dec!(3_040_000), dec!(0.095), 83, date(2026, 4))
            .with_day_one_credit(dec!(1_064_000))
            .with_subvention(dec!(0.05), 4, 5)
            .with_subvention_cap(dec!(40_000)),
    ]
}

// ===========================================================================
// Properties
// ===========================================================================

#[test]
fn test_principal_is_conserved() {
    for terms in loan_variants() {
        let entries = build_schedule(&terms).unwrap();
        let paid: Decimal = entries.iter().map(|e| e.principal_paid).sum();
        let expected = (terms.principal - terms.day_one_credit).max(Decimal::ZERO);
        assert!(
            (paid - expected).abs() < dec!(0.000001),
            "paid {paid}, expected {expected}, terms: {terms:?}"
        );
    }
}

#[test]
fn test_no_negative_amounts() {
    for terms in loan_variants() {
        for e in build_schedule(&terms).unwrap() {
            assert!(e.opening_balance >= Decimal::ZERO);
            assert!(e.principal_paid >= Decimal::ZERO);
            assert!(e.interest_charged >= Decimal::ZERO);
            assert!(e.subsidy_credit >= Decimal::ZERO);
            assert!(e.closing_balance >= Decimal::ZERO);
        }
    }
}

#[test]
fn test_closing_balance_identity_and_chaining() {
    for terms in loan_variants() {
        let entries = build_schedule(&terms).unwrap();
        assert_eq!(entries[0].opening_balance, terms.net_principal());
        for e in &entries {
            assert_eq!(
                e.closing_balance,
                (e.opening_balance - e.principal_paid).max(Decimal::ZERO)
            );
        }
        for pair in entries.windows(2) {
            assert_eq!(pair[0].closing_balance, pair[1].opening_balance);
        }
    }
}

#[test]
fn test_monotonic_payoff() {
    for terms in loan_variants() {
        let entries = build_schedule(&terms).unwrap();
        let mut paid_off = false;
        for pair in entries.windows(2) {
            assert!(pair[1].closing_balance <= pair[0].closing_balance);
        }
        for e in &entries {
            if paid_off {
                assert_eq!(e.principal_paid, Decimal::ZERO);
                assert_eq!(e.interest_charged, Decimal::ZERO);
                assert_eq!(e.subsidy_credit, Decimal::ZERO);
                assert_eq!(e.closing_balance, Decimal::ZERO);
            }
            if e.closing_balance.is_zero() {
                paid_off = true;
            }
        }
        assert_eq!(entries.last().unwrap().closing_balance, Decimal::ZERO);
    }
}

#[test]
fn test_credit_month_gating() {
    for terms in loan_variants() {
        for e in build_schedule(&terms).unwrap() {
            if e.subsidy_credit > Decimal::ZERO {
                assert_eq!(e.date.month(), terms.credit_month);
                assert!(e.year_index < terms.eligible_years);
            }
        }
    }
}

#[test]
fn test_idempotent() {
    for terms in loan_variants() {
        let a = compute_schedule(&terms).unwrap();
        let b = compute_schedule(&terms).unwrap();
        assert_eq!(a.result, b.result);
        assert_eq!(a.warnings, b.warnings);
    }
}

#[test]
fn test_entries_are_sequential_months() {
    let terms = LoanTerms::new(dec!(100_000), dec!(0.10), 15, date(2026, 11));
    let entries = build_schedule(&terms).unwrap();
    let months: Vec<u32> = entries.iter().map(|e| e.month).collect();
    assert_eq!(months, (1..=15).collect::<Vec<u32>>());
    assert_eq!(entries[2].date, date(2027, 1));
    assert_eq!(entries[12].year_index, 1);
}

// ===========================================================================
// Concrete scenarios
// ===========================================================================

#[test]
fn test_scenario_plain_twelve_month_loan() {
    let terms = LoanTerms::new(dec!(1_200_000), dec!(0.10), 12, date(2026, 1));
    let entries = build_schedule(&terms).unwrap();
    assert!(entries.iter().all(|e| e.principal_paid == dec!(100_000)));
    assert_eq!(entries[0].interest_charged, dec!(10_000));
    assert_eq!(entries[11].closing_balance, Decimal::ZERO);
}

#[test]
fn test_scenario_day_one_credit() {
    let terms = LoanTerms::new(dec!(1_200_000), dec!(0.10), 12, date(2026, 1))
        .with_day_one_credit(dec!(200_000));
    let entries = build_schedule(&terms).unwrap();
    assert_eq!(entries[0].opening_balance, dec!(1_000_000));
    assert_eq!(entries[0].principal_paid.round_dp(2), dec!(83333.33));
}

#[test]
fn test_scenario_fully_credited_loan() {
    let terms = LoanTerms::new(dec!(500_000), dec!(0.10), 6, date(2026, 1))
        .with_day_one_credit(dec!(500_000));
    let entries = build_schedule(&terms).unwrap();
    let zero = ScheduleEntry {
        month: 0,
        date: date(2026, 1),
        year_index: 0,
        opening_balance: Decimal::ZERO,
        principal_paid: Decimal::ZERO,
        interest_charged: Decimal::ZERO,
        subsidy_credit: Decimal::ZERO,
        installment: Decimal::ZERO,
        closing_balance: Decimal::ZERO,
    };
    for e in entries {
        assert_eq!(
            ScheduleEntry {
                month: 0,
                date: date(2026, 1),
                year_index: 0,
                ..e
            },
            zero
        );
    }
}

#[test]
fn test_scenario_april_subvention_for_five_years() {
    let terms = LoanTerms::new(dec!(1_000_000), dec!(0.12), 60, date(2026, 1))
        .with_subvention(dec!(0.08), 4, 5);
    let entries = build_schedule(&terms).unwrap();
    let credited: Vec<NaiveDate> = entries
        .iter()
        .filter(|e| e.subsidy_credit > Decimal::ZERO)
        .map(|e| e.date)
        .collect();
    assert_eq!(
        credited,
        vec![
            date(2026, 4),
            date(2027, 4),
            date(2028, 4),
            date(2029, 4),
            date(2030, 4)
        ]
    );
}

#[test]
fn test_scenario_zero_tenure_rejected() {
    let mut terms = LoanTerms::new(dec!(1_000_000), dec!(0.12), 60, date(2026, 1));
    terms.tenure_months = 0;
    let err = compute_schedule(&terms).unwrap_err();
    assert!(matches!(err, SubsidyError::InvalidTerms { .. }));
    assert!(err.to_string().contains("tenure_months"));
}

#[test]
fn test_loan_terms_json_defaults() {
    let json = r#"{
        "principal": "1000000",
        "annual_interest_rate": "0.12",
        "tenure_months": 60,
        "annual_subvention_rate": "0.08",
        "start_date": "2026-01-01"
    }"#;
    let terms: LoanTerms = serde_json::from_str(json).unwrap();
    assert_eq!(terms.credit_month, 4);
    assert_eq!(terms.eligible_years, 5);
    assert_eq!(terms.day_one_credit, Decimal::ZERO);
    assert_eq!(terms.subvention_basis, SubventionBasis::PointInTime);
    assert_eq!(compute_schedule(&terms).unwrap().result.summary.credit_count, 5);
}
