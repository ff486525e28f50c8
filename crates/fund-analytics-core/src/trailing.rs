//! Trailing-period return calculation.

use chrono::NaiveDate;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use crate::dates::subtract_months;
use crate::error::FundAnalyticsError;
use crate::nav::NavSeries;
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Years};
use crate::FundAnalyticsResult;

/// Lookback window ending at the series' latest valuation date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrailingPeriod {
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "3y")]
    ThreeYears,
    #[serde(rename = "5y")]
    FiveYears,
}

impl TrailingPeriod {
    /// Lookback length in calendar months
    pub fn months(&self) -> i32 {
        match self {
            TrailingPeriod::OneMonth => 1,
            TrailingPeriod::ThreeMonths => 3,
            TrailingPeriod::SixMonths => 6,
            TrailingPeriod::OneYear => 12,
            TrailingPeriod::ThreeYears => 36,
            TrailingPeriod::FiveYears => 60,
        }
    }

    /// Nominal year count, present only for periods where annualizing is
    /// meaningful (>= 1 year)
    pub fn years(&self) -> Option<Years> {
        match self {
            TrailingPeriod::OneYear => Some(dec!(1)),
            TrailingPeriod::ThreeYears => Some(dec!(3)),
            TrailingPeriod::FiveYears => Some(dec!(5)),
            _ => None,
        }
    }
}

impl fmt::Display for TrailingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            TrailingPeriod::OneMonth => "1m",
            TrailingPeriod::ThreeMonths => "3m",
            TrailingPeriod::SixMonths => "6m",
            TrailingPeriod::OneYear => "1y",
            TrailingPeriod::ThreeYears => "3y",
            TrailingPeriod::FiveYears => "5y",
        };
        f.write_str(token)
    }
}

impl FromStr for TrailingPeriod {
    type Err = FundAnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1m" => Ok(TrailingPeriod::OneMonth),
            "3m" => Ok(TrailingPeriod::ThreeMonths),
            "6m" => Ok(TrailingPeriod::SixMonths),
            "1y" => Ok(TrailingPeriod::OneYear),
            "3y" => Ok(TrailingPeriod::ThreeYears),
            "5y" => Ok(TrailingPeriod::FiveYears),
            _ => Err(FundAnalyticsError::InvalidInput {
                field: "period".into(),
                reason: format!("Unknown period '{s}'. Use: 1m, 3m, 6m, 1y, 3y, 5y"),
            }),
        }
    }
}

/// Output of a trailing-return calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailingOutput {
    pub period: TrailingPeriod,
    /// Start of the window actually used (nearest NAV on or before the
    /// nominal period start)
    pub start_date: NaiveDate,
    pub start_nav: Money,
    pub end_date: NaiveDate,
    pub end_nav: Money,
    pub simple_return: Percent,
    /// CAGR over the nominal year count; absent for sub-year periods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annualized_return: Option<Percent>,
}

/// Point-to-point return over a trailing window ending at the series' latest
/// valid NAV.
pub fn trailing_return(
    series: &NavSeries,
    period: TrailingPeriod,
) -> FundAnalyticsResult<ComputationOutput<TrailingOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    let latest = series
        .latest_valid()
        .ok_or(FundAnalyticsError::EmptySeries)?;

    let window_start = subtract_months(latest.date, period.months());
    let opening =
        series
            .find_nearest(window_start)
            .ok_or(FundAnalyticsError::InsufficientHistory {
                period: period.to_string(),
                required: window_start,
            })?;

    let simple_return = (latest.nav - opening.nav) / opening.nav * dec!(100);
    let annualized_return = period.years().map(|years| {
        let growth = latest.nav / opening.nav;
        (growth.powd(Decimal::ONE / years) - Decimal::ONE) * dec!(100)
    });

    let output = TrailingOutput {
        period,
        start_date: opening.date,
        start_nav: opening.nav,
        end_date: latest.date,
        end_nav: latest.nav,
        simple_return,
        annualized_return,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Trailing Return (point-to-point NAV, CAGR for periods >= 1 year)",
        &serde_json::json!({
            "period": period.to_string(),
            "window_start": window_start.to_string(),
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

    fn series(points: &[(NaiveDate, Decimal)]) -> NavSeries {
        NavSeries::new(
            points
                .iter()
                .map(|(date, nav)| NavPoint {
                    date: *date,
                    nav: *nav,
                })
                .collect(),
        )
    }

    #[test]
    fn test_one_month_simple_return() {
        let s = series(&[
            (d(2023, 6, 1), dec!(110)),
            (d(2023, 5, 1), dec!(100)),
            (d(2023, 4, 1), dec!(95)),
        ]);
        let out = trailing_return(&s, TrailingPeriod::OneMonth).unwrap().result;
        assert_eq!(out.start_date, d(2023, 5, 1));
        assert_eq!(out.simple_return, dec!(10));
        assert!(out.annualized_return.is_none());
    }

    #[test]
    fn test_one_year_annualized_equals_simple() {
        let s = series(&[(d(2024, 1, 2), dec!(112)), (d(2023, 1, 2), dec!(100))]);
        let out = trailing_return(&s, TrailingPeriod::OneYear).unwrap().result;
        let annualized = out.annualized_return.unwrap();
        assert!((annualized - out.simple_return).abs() < dec!(0.0001));
    }

    #[test]
    fn test_period_token_round_trip() {
        for token in ["1m", "3m", "6m", "1y", "3y", "5y"] {
            let period: TrailingPeriod = token.parse().unwrap();
            assert_eq!(period.to_string(), token);
        }
    }

    #[test]
    fn test_unknown_period_token() {
        let err = "2w".parse::<TrailingPeriod>().unwrap_err();
        assert!(matches!(err, FundAnalyticsError::InvalidInput { .. }));
    }

    #[test]
    fn test_insufficient_history() {
        // Ten days of history cannot support a 1m lookback
        let s = series(&[(d(2023, 6, 10), dec!(101)), (d(2023, 6, 1), dec!(100))]);
        let err = trailing_return(&s, TrailingPeriod::OneMonth).unwrap_err();
        assert!(matches!(
            err,
            FundAnalyticsError::InsufficientHistory { .. }
        ));
    }

    #[test]
    fn test_empty_series() {
        let err = trailing_return(&NavSeries::new(vec![]), TrailingPeriod::OneMonth).unwrap_err();
        assert!(matches!(err, FundAnalyticsError::EmptySeries));
    }
}
