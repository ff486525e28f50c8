//! Calendar-month arithmetic with day-of-month clamping.
//!
//! Adding one month to a date whose day exceeds the target month's length
//! clamps to the last day of that month (2023-01-31 + 1m = 2023-02-28).
//! Naive rollover (Jan 31 -> Mar 3) is never produced.

use chrono::{Datelike, NaiveDate};

/// Add a number of months to a date, clamping the day to the month's max.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    shift_months(date, months)
}

/// Subtract a number of months from a date, clamping the day to the month's max.
pub fn subtract_months(date: NaiveDate, months: i32) -> NaiveDate {
    shift_months(date, -months)
}

fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let total_months = date.year() * 12 + date.month() as i32 - 1 + months;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    let max_day = days_in_month(new_year, new_month);
    let day = date.day().min(max_day);
    NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap_or(date)
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_add_months_plain() {
        assert_eq!(add_months(d(2023, 1, 15), 1), d(2023, 2, 15));
        assert_eq!(add_months(d(2023, 11, 5), 3), d(2024, 2, 5));
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        assert_eq!(add_months(d(2023, 1, 31), 1), d(2023, 2, 28));
        assert_eq!(add_months(d(2024, 1, 31), 1), d(2024, 2, 29));
        assert_eq!(add_months(d(2023, 3, 31), 1), d(2023, 4, 30));
    }

    #[test]
    fn test_add_months_year_boundary() {
        assert_eq!(add_months(d(2023, 12, 1), 1), d(2024, 1, 1));
        assert_eq!(add_months(d(2023, 12, 31), 2), d(2024, 2, 29));
    }

    #[test]
    fn test_subtract_months_clamps() {
        assert_eq!(subtract_months(d(2023, 3, 31), 1), d(2023, 2, 28));
        assert_eq!(subtract_months(d(2024, 3, 31), 1), d(2024, 2, 29));
        assert_eq!(subtract_months(d(2024, 1, 15), 12), d(2023, 1, 15));
        assert_eq!(subtract_months(d(2024, 2, 29), 60), d(2019, 2, 28));
    }

    #[test]
    fn test_february_lengths() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }
}
