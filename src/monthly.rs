use chrono::{Datelike as _, NaiveDate};

use crate::{
    date,
    nth_weekday::nth_weekday_of_month,
    rule::{MonthlyPattern, RecurrenceRule},
};

pub(crate) fn step(
    rule: &RecurrenceRule,
    cursor: NaiveDate,
    end: NaiveDate,
    out: &mut Vec<NaiveDate>,
) -> NaiveDate {
    let occurrence = match rule.monthly_pattern() {
        MonthlyPattern::DayOfMonth => {
            let target = rule.start().day();
            // months too short for the target day are skipped, never clamped
            if target <= date::days_in_month(cursor.year(), cursor.month()) {
                Some(
                    NaiveDate::from_ymd_opt(cursor.year(), cursor.month(), target)
                        .expect("bug: day fits month"),
                )
            } else {
                None
            }
        }
        MonthlyPattern::NthWeekday => {
            nth_weekday_of_month(cursor.year(), cursor.month(), rule.ordinal(), rule.weekday())
        }
    };

    if let Some(d) = occurrence {
        if d >= rule.start() && d <= end {
            out.push(d);
        }
    }

    date::add_months(cursor, rule.interval() as i32)
}
