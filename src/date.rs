use chrono::{Datelike as _, Duration, NaiveDate};

use crate::ValidationError;

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

pub fn add_weeks(date: NaiveDate, weeks: i64) -> NaiveDate {
    add_days(date, 7 * weeks)
}

/// Month arithmetic with native overflow semantics: when the target month is
/// shorter than the original day-of-month, the extra days spill into the
/// following month (Jan 31 + 1 month lands in early March) instead of
/// clamping to the month's last day. Callers that want "skip short months"
/// re-check the day-of-month themselves.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 + months;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let last = days_in_month(year, month);

    if date.day() <= last {
        NaiveDate::from_ymd_opt(year, month, date.day()).expect("bug: day fits month")
    } else {
        let base = NaiveDate::from_ymd_opt(year, month, last).expect("bug: last day of month");
        add_days(base, i64::from(date.day() - last))
    }
}

/// Same overflow policy as [`add_months`]: Feb 29 plus a year in a non-leap
/// year lands on Mar 1.
pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    add_months(date, 12 * years)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("bug: month out of range");
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("bug: first of next month");

    (next - first).num_days() as u32
}

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    add_days(date, -i64::from(date.weekday().num_days_from_sunday()))
}

/// Parses a `YYYY-MM-DD` string into a civil date. The result carries no
/// time-of-day or timezone, so a round trip through the UI boundary cannot
/// shift the day the way instant-based parsing can.
pub fn parse_iso(input: &str) -> Result<NaiveDate, ValidationError> {
    Ok(input.parse::<NaiveDate>()?)
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::date;

    #[test]
    fn days_across_month_boundary() {
        assert_eq!(add_days(date(2024, 1, 30), 3), date(2024, 2, 2));
        assert_eq!(add_days(date(2024, 12, 31), 1), date(2025, 1, 1));
    }

    #[test]
    fn weeks_are_seven_days() {
        assert_eq!(add_weeks(date(2024, 1, 1), 2), date(2024, 1, 15));
    }

    #[test]
    fn months_plain() {
        assert_eq!(add_months(date(2024, 1, 15), 1), date(2024, 2, 15));
        assert_eq!(add_months(date(2024, 11, 15), 3), date(2025, 2, 15));
    }

    #[test]
    fn months_overflow_spills_forward() {
        // 2024 is a leap year: Feb 31 normalizes to Mar 2
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 3, 2));
        // non-leap: Feb 31 normalizes to Mar 3
        assert_eq!(add_months(date(2023, 1, 31), 1), date(2023, 3, 3));
        assert_eq!(add_months(date(2024, 3, 31), 1), date(2024, 5, 1));
    }

    #[test]
    fn years_from_leap_day() {
        assert_eq!(add_years(date(2024, 2, 29), 1), date(2025, 3, 1));
        assert_eq!(add_years(date(2024, 2, 29), 4), date(2028, 2, 29));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn week_start_is_sunday_on_or_before() {
        // 2024-01-01 is a Monday
        assert_eq!(week_start(date(2024, 1, 1)), date(2023, 12, 31));
        assert_eq!(week_start(date(2023, 12, 31)), date(2023, 12, 31));
        assert_eq!(week_start(date(2024, 1, 6)), date(2023, 12, 31));
    }

    #[test]
    fn iso_round_trip() {
        let parsed = parse_iso("2024-02-29").unwrap();
        assert_eq!(parsed, date(2024, 2, 29));
        assert_eq!(format_iso(parsed), "2024-02-29");
    }

    #[test]
    fn iso_rejects_garbage() {
        assert!(parse_iso("02/29/2024").is_err());
        assert!(parse_iso("2023-02-29").is_err());
    }
}
