use chrono::NaiveDate;

use crate::{date, rule::RecurrenceRule};

pub(crate) fn step(
    rule: &RecurrenceRule,
    cursor: NaiveDate,
    _end: NaiveDate,
    out: &mut Vec<NaiveDate>,
) -> NaiveDate {
    out.push(cursor);
    date::add_days(cursor, i64::from(rule.interval()))
}
