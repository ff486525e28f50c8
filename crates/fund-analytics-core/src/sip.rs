//! Systematic Investment Plan simulation.

use chrono::NaiveDate;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::dates::add_months;
use crate::error::FundAnalyticsError;
use crate::nav::NavSeries;
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Units};
use crate::FundAnalyticsResult;

/// Contribution frequency. Monthly is the only supported cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SipFrequency {
    Monthly,
}

/// Input for a SIP simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipInput {
    /// Fixed amount invested per instalment
    pub amount: Money,
    pub frequency: SipFrequency,
    /// First contribution date
    pub from: NaiveDate,
    /// Last date a contribution may fall on (inclusive)
    pub to: NaiveDate,
}

/// Portfolio value after a contribution settled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub date: NaiveDate,
    pub value: Money,
}

/// Output of a SIP simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipOutput {
    pub total_invested: Money,
    pub total_units: Units,
    /// Valued at the series' latest NAV ("value if redeemed today"), not the
    /// NAV as of `to`
    pub current_value: Money,
    pub absolute_return: Percent,
    pub annualized_return: Percent,
    /// Instalments that matched a NAV and purchased units
    pub contributions: u32,
    /// Instalment dates with no NAV at or before them (fund not yet live)
    pub skipped_contributions: u32,
    pub timeline: Vec<TimelinePoint>,
}

/// Simulate a monthly SIP over `[from, to]` against a NAV history.
///
/// Contribution date `i` is `from` advanced by `i` calendar months, day
/// clamped to the target month's length. Each instalment buys units at the
/// most recent NAV on or before its date; dates with no NAV available are
/// skipped, not failed.
pub fn simulate_sip(
    input: &SipInput,
    series: &NavSeries,
) -> FundAnalyticsResult<ComputationOutput<SipOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // --- Validation ---
    if input.amount <= Decimal::ZERO {
        return Err(FundAnalyticsError::InvalidInput {
            field: "amount".into(),
            reason: "Instalment amount must be > 0".into(),
        });
    }
    if input.from > input.to {
        return Err(FundAnalyticsError::InvalidInput {
            field: "from".into(),
            reason: "Start date must not be after end date".into(),
        });
    }
    let latest = series
        .latest_valid()
        .ok_or(FundAnalyticsError::EmptySeries)?;

    // --- Contribution loop ---
    let mut total_invested = Decimal::ZERO;
    let mut total_units = Decimal::ZERO;
    let mut skipped: u32 = 0;
    let mut timeline: Vec<TimelinePoint> = Vec::new();

    let mut instalment: i32 = 0;
    loop {
        let date = add_months(input.from, instalment);
        if date > input.to {
            break;
        }
        match series.find_nearest(date) {
            Some(point) => {
                let units = input.amount / point.nav;
                total_units += units;
                total_invested += input.amount;
                timeline.push(TimelinePoint {
                    date,
                    value: total_units * point.nav,
                });
            }
            None => skipped += 1,
        }
        instalment += 1;
    }

    if skipped > 0 {
        warnings.push(format!(
            "{skipped} instalment date(s) preceded the earliest available NAV and were skipped"
        ));
    }
    if total_invested.is_zero() {
        return Err(FundAnalyticsError::NoContributions);
    }

    // --- Returns ---
    let current_value = total_units * latest.nav;
    let absolute_return = (current_value - total_invested) / total_invested * dec!(100);

    let days = (input.to - input.from).num_days();
    let years = Decimal::from(days) / dec!(365);
    let annualized_return = if years > Decimal::ZERO {
        let growth = current_value / total_invested;
        (growth.powd(Decimal::ONE / years) - Decimal::ONE) * dec!(100)
    } else {
        Decimal::ZERO
    };

    let contributions = timeline.len() as u32;
    let output = SipOutput {
        total_invested,
        total_units,
        current_value,
        absolute_return,
        annualized_return,
        contributions,
        skipped_contributions: skipped,
        timeline,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "SIP Simulation (monthly fixed-amount instalments, as-of NAV pricing)",
        &serde_json::json!({
            "amount": input.amount.to_string(),
            "from": input.from.to_string(),
            "to": input.to.to_string(),
            "valuation_nav_date": latest.date.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NavPoint;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn two_point_series() -> NavSeries {
        NavSeries::new(vec![
            NavPoint {
                date: d(2023, 2, 1),
                nav: dec!(120),
            },
            NavPoint {
                date: d(2023, 1, 1),
                nav: dec!(100),
            },
        ])
    }

    fn monthly(amount: Decimal, from: NaiveDate, to: NaiveDate) -> SipInput {
        SipInput {
            amount,
            frequency: SipFrequency::Monthly,
            from,
            to,
        }
    }

    #[test]
    fn test_two_instalments() {
        let input = monthly(dec!(1000), d(2023, 1, 1), d(2023, 2, 1));
        let out = simulate_sip(&input, &two_point_series()).unwrap().result;

        assert_eq!(out.total_invested, dec!(2000));
        assert_eq!(out.contributions, 2);
        // 10 units @ 100 plus ~8.333 units @ 120
        assert!((out.total_units - dec!(18.3333333333)).abs() < dec!(0.0001));
        assert!((out.current_value - dec!(2200)).abs() < dec!(0.0001));
        assert!((out.absolute_return - dec!(10)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        let input = monthly(dec!(0), d(2023, 1, 1), d(2023, 2, 1));
        let err = simulate_sip(&input, &two_point_series()).unwrap_err();
        assert!(matches!(err, FundAnalyticsError::InvalidInput { .. }));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let input = monthly(dec!(1000), d(2023, 2, 1), d(2023, 1, 1));
        let err = simulate_sip(&input, &two_point_series()).unwrap_err();
        assert!(matches!(err, FundAnalyticsError::InvalidInput { .. }));
    }

    #[test]
    fn test_empty_series() {
        let input = monthly(dec!(1000), d(2023, 1, 1), d(2023, 2, 1));
        let err = simulate_sip(&input, &NavSeries::new(vec![])).unwrap_err();
        assert!(matches!(err, FundAnalyticsError::EmptySeries));
    }

    #[test]
    fn test_no_contributions_before_series() {
        // Whole SIP window predates the fund
        let input = monthly(dec!(1000), d(2022, 1, 1), d(2022, 6, 1));
        let err = simulate_sip(&input, &two_point_series()).unwrap_err();
        assert!(matches!(err, FundAnalyticsError::NoContributions));
    }

    #[test]
    fn test_single_day_window_annualized_is_zero() {
        let input = monthly(dec!(1000), d(2023, 2, 1), d(2023, 2, 1));
        let out = simulate_sip(&input, &two_point_series()).unwrap().result;
        assert_eq!(out.contributions, 1);
        assert_eq!(out.annualized_return, Decimal::ZERO);
    }
}
