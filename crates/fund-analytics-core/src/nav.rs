//! NAV history container and as-of lookup.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FundAnalyticsError;
use crate::types::{NavPoint, RawNavEntry};
use crate::FundAnalyticsResult;

/// A fund's NAV history, ordered most-recent-first.
///
/// The constructor sorts descending by date, so callers may supply history in
/// any order. The series is read-only after construction; calculations on a
/// shared series need no locking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavSeries {
    points: Vec<NavPoint>,
}

impl NavSeries {
    pub fn new(mut points: Vec<NavPoint>) -> Self {
        // Stable: duplicate dates keep their input order
        points.sort_by(|a, b| b.date.cmp(&a.date));
        NavSeries { points }
    }

    /// Build a series from provider entries (`date` as ISO-8601 string).
    pub fn from_raw(entries: &[RawNavEntry]) -> FundAnalyticsResult<Self> {
        let mut points = Vec::with_capacity(entries.len());
        for entry in entries {
            let date = NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d").map_err(|e| {
                FundAnalyticsError::DateError(format!(
                    "Unparseable NAV date '{}': {}",
                    entry.date, e
                ))
            })?;
            points.push(NavPoint {
                date,
                nav: entry.nav,
            });
        }
        Ok(NavSeries::new(points))
    }

    /// Most recent valid point with `date <= target`, or `None` when the
    /// target precedes the whole series. Points with `nav <= 0` are skipped;
    /// a fund publishes no NAV on non-trading days, so this is the standard
    /// as-of price for a contribution falling on a weekend or holiday.
    pub fn find_nearest(&self, target: NaiveDate) -> Option<&NavPoint> {
        self.points
            .iter()
            .find(|p| p.date <= target && p.nav > Decimal::ZERO)
    }

    /// The series' latest valid valuation. Defines "today" for every
    /// calculation; the engine never reads the wall clock.
    pub fn latest_valid(&self) -> Option<&NavPoint> {
        self.points.iter().find(|p| p.nav > Decimal::ZERO)
    }

    pub fn points(&self) -> &[NavPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn point(y: i32, m: u32, day: u32, nav: rust_decimal::Decimal) -> NavPoint {
        NavPoint {
            date: d(y, m, day),
            nav,
        }
    }

    #[test]
    fn test_find_nearest_exact_date() {
        let series = NavSeries::new(vec![
            point(2023, 2, 1, dec!(120)),
            point(2023, 1, 1, dec!(100)),
        ]);
        let hit = series.find_nearest(d(2023, 2, 1)).unwrap();
        assert_eq!(hit.date, d(2023, 2, 1));
        assert_eq!(hit.nav, dec!(120));
    }

    #[test]
    fn test_find_nearest_falls_back_to_prior_point() {
        let series = NavSeries::new(vec![
            point(2023, 2, 1, dec!(120)),
            point(2023, 1, 1, dec!(100)),
        ]);
        // Mid-January query resolves to the Jan 1 point
        let hit = series.find_nearest(d(2023, 1, 15)).unwrap();
        assert_eq!(hit.date, d(2023, 1, 1));
    }

    #[test]
    fn test_find_nearest_before_series_start() {
        let series = NavSeries::new(vec![point(2023, 1, 1, dec!(100))]);
        assert!(series.find_nearest(d(2022, 12, 31)).is_none());
    }

    #[test]
    fn test_find_nearest_empty_series() {
        let series = NavSeries::new(vec![]);
        assert!(series.find_nearest(d(2023, 1, 1)).is_none());
    }

    #[test]
    fn test_find_nearest_skips_non_positive_nav() {
        let series = NavSeries::new(vec![
            point(2023, 2, 1, dec!(0)),
            point(2023, 1, 1, dec!(5)),
        ]);
        let hit = series.find_nearest(d(2023, 2, 1)).unwrap();
        assert_eq!(hit.date, d(2023, 1, 1));
        assert_eq!(hit.nav, dec!(5));
    }

    #[test]
    fn test_constructor_sorts_descending() {
        let series = NavSeries::new(vec![
            point(2023, 1, 1, dec!(100)),
            point(2023, 3, 1, dec!(110)),
            point(2023, 2, 1, dec!(120)),
        ]);
        let dates: Vec<NaiveDate> = series.points().iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![d(2023, 3, 1), d(2023, 2, 1), d(2023, 1, 1)]);
    }

    #[test]
    fn test_latest_valid_skips_zero_head() {
        let series = NavSeries::new(vec![
            point(2023, 3, 1, dec!(0)),
            point(2023, 2, 1, dec!(120)),
            point(2023, 1, 1, dec!(100)),
        ]);
        assert_eq!(series.latest_valid().unwrap().date, d(2023, 2, 1));
    }

    #[test]
    fn test_from_raw_parses_iso_dates() {
        let entries = vec![
            RawNavEntry {
                date: "2023-01-01".into(),
                nav: dec!(100.5),
            },
            RawNavEntry {
                date: "2023-02-01".into(),
                nav: dec!(101.25),
            },
        ];
        let series = NavSeries::from_raw(&entries).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.points()[0].date, d(2023, 2, 1));
    }

    #[test]
    fn test_from_raw_rejects_bad_date() {
        let entries = vec![RawNavEntry {
            date: "01-01-2023".into(),
            nav: dec!(100),
        }];
        let err = NavSeries::from_raw(&entries).unwrap_err();
        assert!(matches!(err, FundAnalyticsError::DateError(_)));
    }
}
