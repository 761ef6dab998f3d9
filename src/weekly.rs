use chrono::NaiveDate;

use crate::{date, rule::RecurrenceRule};

pub(crate) fn step(
    rule: &RecurrenceRule,
    cursor: NaiveDate,
    end: NaiveDate,
    out: &mut Vec<NaiveDate>,
) -> NaiveDate {
    if rule.weekdays().is_empty() {
        // no explicit selection: repeat on the start date's own weekday
        out.push(cursor);
    } else {
        let week = date::week_start(cursor);
        for &weekday in rule.weekdays() {
            let candidate = date::add_days(week, i64::from(weekday.index()));
            // the first window's Sunday can precede the rule start, so both
            // bounds are checked per day
            if candidate >= rule.start() && candidate <= end {
                out.push(candidate);
            }
        }
    }

    date::add_weeks(cursor, i64::from(rule.interval()))
}
