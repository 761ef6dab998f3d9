//! Expands recurrence rules into concrete calendar dates.
//!
//! A [`RecurrenceRule`] describes a repeating pattern over civil dates:
//! frequency, interval, and frequency-specific modifiers such as selected
//! weekdays or "the last Friday of the month". [`expand`] turns a rule into
//! a sorted, bounded sequence of `chrono::NaiveDate`s; [`RuleSet`] merges
//! several rules into one schedule.

pub mod date;

mod daily;
mod expand;
mod monthly;
mod nth_weekday;
mod rule;
mod set;
mod weekly;
mod yearly;

#[cfg(test)]
mod test_helpers;

pub use crate::expand::{expand, Expander, Expansion, DEFAULT_STEP_CAP};
pub use crate::nth_weekday::{nth_weekday_of_month, Ordinal};
pub use crate::rule::{
    Frequency, MonthlyPattern, Options, RecurrenceRule, ValidationError, Weekday,
};
pub use crate::set::RuleSet;
