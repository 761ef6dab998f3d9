use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{date, Weekday};

/// Which occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ordinal {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

/// Finds the nth occurrence of `weekday` within the given month, or `None`
/// when the month has fewer than n such days. "No match" is a normal
/// outcome; callers skip the month and move on.
pub fn nth_weekday_of_month(
    year: i32,
    month: u32,
    ordinal: Ordinal,
    weekday: Weekday,
) -> Option<NaiveDate> {
    let last = date::days_in_month(year, month);
    let day_in_month = |day| NaiveDate::from_ymd_opt(year, month, day).expect("bug: day in month");

    let nth = match ordinal {
        Ordinal::Last => {
            return (1..=last)
                .rev()
                .map(day_in_month)
                .find(|d| Weekday::from_date(*d) == weekday);
        }
        Ordinal::First => 0,
        Ordinal::Second => 1,
        Ordinal::Third => 2,
        Ordinal::Fourth => 3,
    };

    (1..=last)
        .map(day_in_month)
        .filter(|d| Weekday::from_date(*d) == weekday)
        .nth(nth)
}
