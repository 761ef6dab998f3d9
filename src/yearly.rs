use chrono::{Datelike as _, NaiveDate};

use crate::{date, rule::RecurrenceRule};

pub(crate) fn step(
    rule: &RecurrenceRule,
    cursor: NaiveDate,
    end: NaiveDate,
    out: &mut Vec<NaiveDate>,
) -> NaiveDate {
    let start = rule.start();

    // Feb 29 only materializes in leap years; from_ymd_opt rejects the rest
    if let Some(d) = NaiveDate::from_ymd_opt(cursor.year(), start.month(), start.day()) {
        if d >= start && d <= end {
            out.push(d);
        }
    }

    date::add_years(cursor, rule.interval() as i32)
}
