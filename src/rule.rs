use chrono::{Datelike as _, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{date, nth_weekday::Ordinal};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Days since Sunday, 0..=6.
    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_date(date: NaiveDate) -> Self {
        const WEEK: [Weekday; 7] = [
            Weekday::Sunday,
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
        ];
        WEEK[date.weekday().num_days_from_sunday() as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthlyPattern {
    DayOfMonth,
    NthWeekday,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("end date {end} precedes start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("interval {0} outside 1..={max}", max = RecurrenceRule::MAX_INTERVAL)]
    IntervalOutOfRange(u32),
    #[error("invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),
}

#[derive(Default)]
pub struct Options {
    pub end: Option<NaiveDate>,
    pub interval: Option<u32>,
    /// Weekly only. Empty means "recur on the start date's own weekday".
    pub weekdays: Vec<Weekday>,
    /// Monthly only.
    pub monthly_pattern: Option<MonthlyPattern>,
    /// Monthly with [`MonthlyPattern::NthWeekday`] only.
    pub ordinal: Option<Ordinal>,
    pub weekday: Option<Weekday>,
}

/// An immutable description of a repeating date pattern. Built once from
/// caller input, validated up front, then only read during expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    frequency: Frequency,
    start: NaiveDate,
    end: Option<NaiveDate>,
    interval: u32,
    weekdays: Vec<Weekday>,
    monthly_pattern: MonthlyPattern,
    ordinal: Ordinal,
    weekday: Weekday,
}

impl RecurrenceRule {
    pub const MAX_INTERVAL: u32 = 365;

    pub fn new(
        frequency: Frequency,
        start: NaiveDate,
        options: Options,
    ) -> Result<Self, ValidationError> {
        if let Some(end) = options.end {
            if end < start {
                return Err(ValidationError::EndBeforeStart { start, end });
            }
        }

        let interval = options.interval.unwrap_or(1);
        if interval == 0 || interval > Self::MAX_INTERVAL {
            return Err(ValidationError::IntervalOutOfRange(interval));
        }

        let mut weekdays = options.weekdays;
        weekdays.sort_unstable();
        weekdays.dedup();

        Ok(RecurrenceRule {
            frequency,
            start,
            end: options.end,
            interval,
            weekdays,
            monthly_pattern: options.monthly_pattern.unwrap_or(MonthlyPattern::DayOfMonth),
            ordinal: options.ordinal.unwrap_or(Ordinal::First),
            weekday: options.weekday.unwrap_or_else(|| Weekday::from_date(start)),
        })
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// The last date expansion may emit: the configured end date, or one
    /// year past the start when none was given.
    pub fn until(&self) -> NaiveDate {
        self.end.unwrap_or_else(|| date::add_years(self.start, 1))
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn weekdays(&self) -> &[Weekday] {
        &self.weekdays
    }

    pub fn monthly_pattern(&self) -> MonthlyPattern {
        self.monthly_pattern
    }

    pub fn ordinal(&self) -> Ordinal {
        self.ordinal
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}
