//! Property-based integration tests for the calculation core.
//!
//! These tests check invariants that must hold for every input, using the
//! `proptest` crate for random test case generation.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sipfolio_core::assets::{Asset, AssetCategory};
use sipfolio_core::calculations::{
    calculate_return_metrics, calculate_sip, calculate_xirr, CashFlow, SipInput,
};
use sipfolio_core::investments::{total_units, Investment, InvestmentType};
use sipfolio_core::portfolio::charts::{
    calculate_asset_allocation, calculate_portfolio_growth, calculate_sip_contributions,
};
use sipfolio_core::prices::{PriceBook, PricePoint};
use sipfolio_core::settings::ChartSettings;
use sipfolio_core::utils::{months_between, MonthKey};

// =============================================================================
// Generators
// =============================================================================

/// Positive money amount with two decimals.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_price() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000).prop_map(|paise| Decimal::new(paise, 4))
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..3650).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2015, 1, 1).unwrap() + Duration::days(offset)
    })
}

fn arb_month() -> impl Strategy<Value = MonthKey> {
    (1990i32..2100, 1u32..=12).prop_map(|(year, month)| MonthKey::new(year, month).unwrap())
}

/// Generates an investment with any mix of explicit units and price per unit.
fn arb_investment() -> impl Strategy<Value = Investment> {
    (
        "[a-c]",                                // asset_id
        arb_amount(),                           // amount
        proptest::option::of(arb_price()),      // units
        proptest::option::of(arb_price()),      // price_per_unit
        arb_date(),                             // investment_date
        prop_oneof![Just(InvestmentType::Sip), Just(InvestmentType::LumpSum)],
    )
        .prop_map(|(asset_id, amount, units, price_per_unit, investment_date, investment_type)| {
            Investment {
                id: format!("{}-{}", asset_id, investment_date),
                asset_id,
                amount,
                units,
                price_per_unit,
                investment_date,
                investment_type,
                notes: None,
            }
        })
}

fn arb_investments(max: usize) -> impl Strategy<Value = Vec<Investment>> {
    prop::collection::vec(arb_investment(), 0..max)
}

// =============================================================================
// Return metrics
// =============================================================================

proptest! {
    /// Total invested is the exact sum of amounts.
    #[test]
    fn prop_total_invested_is_sum_of_amounts(
        investments in arb_investments(30),
        price in proptest::option::of(arb_price()),
    ) {
        let expected: Decimal = investments.iter().map(|i| i.amount).sum();
        let metrics = calculate_return_metrics(&investments, price);
        prop_assert!((metrics.total_invested - expected).abs() <= dec!(0.000000001));
    }

    /// Unit totals are additive across concatenation.
    #[test]
    fn prop_units_are_linear(
        a in arb_investments(20),
        b in arb_investments(20),
    ) {
        let combined: Vec<Investment> = a.iter().chain(b.iter()).cloned().collect();
        let difference = total_units(&combined) - (total_units(&a) + total_units(&b));
        prop_assert!(difference.abs() <= dec!(0.000000001));
        prop_assert!(total_units(&combined) >= Decimal::ZERO);
    }

    /// The return percentage is unknown exactly when no valuation exists.
    #[test]
    fn prop_return_percentage_null_iff_no_valuation(
        investments in arb_investments(10),
        price in proptest::option::of(-1000i64..1000).prop_map(|p| p.map(|p| Decimal::new(p, 1))),
    ) {
        let metrics = calculate_return_metrics(&investments, price);
        let valued = price.is_some_and(|p| p > Decimal::ZERO)
            && metrics.total_units > Decimal::ZERO
            && metrics.total_invested > Decimal::ZERO;
        prop_assert_eq!(metrics.return_percentage.is_some(), valued);
        if !valued {
            prop_assert_eq!(metrics.current_value, Decimal::ZERO);
            prop_assert_eq!(metrics.absolute_return, Decimal::ZERO);
        }
    }
}

// =============================================================================
// XIRR and SIP projection
// =============================================================================

proptest! {
    /// A one-year investment recovers its growth rate.
    #[test]
    fn prop_xirr_recovers_one_year_rate(
        rate in -0.4f64..1.0,
        start in arb_date(),
        principal in 100.0f64..1_000_000.0,
    ) {
        let flows = [
            CashFlow::on_date(-principal, start),
            CashFlow::on_date(principal * (1.0 + rate), start + Duration::days(365)),
        ];
        let solved = calculate_xirr(&flows);
        prop_assert!(solved.is_some());
        prop_assert!((solved.unwrap() - rate).abs() < 1e-4);
    }

    /// A lone flow never has a rate.
    #[test]
    fn prop_single_flow_has_no_xirr(amount in -1e9f64..1e9, start in arb_date()) {
        prop_assert_eq!(calculate_xirr(&[CashFlow::on_date(amount, start)]), None);
    }

    /// Projection outputs stay finite and consistent for any input.
    #[test]
    fn prop_sip_outputs_are_finite(
        monthly_investment in -1e6f64..1e15,
        duration_months in -12i32..2400,
        expected_annual_return in -0.9f64..10.0,
    ) {
        let result = calculate_sip(&SipInput {
            monthly_investment,
            duration_months,
            expected_annual_return,
        });
        prop_assert!(result.total_invested.is_finite());
        prop_assert!(result.estimated_returns.is_finite());
        prop_assert!(result.final_corpus.is_finite());
        prop_assert!(
            (result.final_corpus - result.total_invested - result.estimated_returns).abs()
                <= (result.final_corpus.abs() + result.total_invested.abs()) * 1e-9 + 1e-6
        );
    }
}

// =============================================================================
// Monthly series
// =============================================================================

proptest! {
    /// Month ranges are contiguous and strictly increasing.
    #[test]
    fn prop_month_range_is_contiguous(start in arb_month(), span in 0u32..240) {
        let end = (0..span).fold(start, |month, _| month.succ());
        let months: Vec<MonthKey> = months_between(start, end).collect();

        prop_assert_eq!(months.len(), span as usize + 1);
        prop_assert_eq!(months[0], start);
        prop_assert_eq!(*months.last().unwrap(), end);
        for pair in months.windows(2) {
            prop_assert!(pair[0] < pair[1]);
            prop_assert_eq!(pair[0].succ(), pair[1]);
        }
    }

    /// Growth and contribution series cover every month without gaps.
    #[test]
    fn prop_series_have_no_gaps(investments in arb_investments(25)) {
        let as_of = MonthKey::new(2020, 6).unwrap();
        let prices = PriceBook::default();

        let growth = calculate_portfolio_growth(&investments, &prices, as_of);
        for pair in growth.windows(2) {
            prop_assert_eq!(pair[0].month.succ(), pair[1].month);
            prop_assert!(pair[0].invested <= pair[1].invested);
        }
        if let Some(first) = investments.iter().map(|i| i.month()).min() {
            prop_assert_eq!(growth[0].month, first);
            prop_assert!(growth.last().unwrap().month >= as_of);
        }

        let contributions = calculate_sip_contributions(&investments, as_of);
        for pair in contributions.windows(2) {
            prop_assert_eq!(pair[0].month.succ(), pair[1].month);
        }
        let sip_count: u32 = contributions.iter().map(|p| p.count).sum();
        prop_assert_eq!(sip_count as usize, investments.iter().filter(|i| i.is_sip()).count());
    }

    /// Allocation shares add up to 100 whenever anything is valued.
    #[test]
    fn prop_allocation_percentages_sum_to_hundred(
        holdings in prop::collection::vec((arb_amount(), arb_price(), arb_price()), 1..8),
    ) {
        let mut assets = Vec::new();
        let mut investments = Vec::new();
        let mut prices = Vec::new();
        for (index, (amount, units, price)) in holdings.into_iter().enumerate() {
            let asset_id = format!("asset-{}", index);
            assets.push(Asset {
                id: asset_id.clone(),
                name: asset_id.clone(),
                category: AssetCategory::ALL[index % AssetCategory::ALL.len()],
                currency: "INR".to_string(),
            });
            investments.push(Investment {
                id: asset_id.clone(),
                asset_id: asset_id.clone(),
                amount,
                units: Some(units),
                price_per_unit: None,
                investment_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                investment_type: InvestmentType::LumpSum,
                notes: None,
            });
            prices.push(PricePoint {
                asset_id,
                price,
                price_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            });
        }

        let allocation = calculate_asset_allocation(
            &assets,
            &investments,
            &PriceBook::new(prices),
            &ChartSettings::default(),
        );

        let sum: Decimal = allocation.iter().map(|p| p.percentage).sum();
        prop_assert!(!allocation.is_empty());
        prop_assert!((sum - dec!(100)).abs() <= dec!(0.1));
        for pair in allocation.windows(2) {
            prop_assert!(pair[0].value >= pair[1].value);
        }
    }
}
