use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    daily, date, monthly,
    rule::{Frequency, RecurrenceRule},
    weekly, yearly,
};

/// Default bound on expansion loop steps. Keeps malformed or very wide
/// rules from spinning; hitting it truncates the result and sets
/// [`Expansion::truncated`].
pub const DEFAULT_STEP_CAP: usize = 1000;

#[derive(Debug, Clone, Copy)]
pub struct Expander {
    step_cap: usize,
}

impl Default for Expander {
    fn default() -> Self {
        Expander {
            step_cap: DEFAULT_STEP_CAP,
        }
    }
}

impl Expander {
    pub fn new() -> Self {
        Expander::default()
    }

    pub fn with_step_cap(step_cap: usize) -> Self {
        Expander { step_cap }
    }

    /// Expands `rule` into every occurrence between its start and end
    /// (inclusive), ascending. Total: never panics for a validated rule.
    pub fn expand(&self, rule: &RecurrenceRule) -> Expansion {
        let end = rule.until();
        let mut dates = Vec::new();
        let mut cursor = rule.start();
        let mut steps = 0;
        let mut truncated = false;

        while cursor <= end {
            if steps == self.step_cap {
                truncated = true;
                tracing::debug!(step_cap = self.step_cap, %cursor, "expansion hit the step cap");
                break;
            }
            steps += 1;

            cursor = match rule.frequency() {
                Frequency::Daily => daily::step(rule, cursor, end, &mut dates),
                Frequency::Weekly => weekly::step(rule, cursor, end, &mut dates),
                Frequency::Monthly => monthly::step(rule, cursor, end, &mut dates),
                Frequency::Yearly => yearly::step(rule, cursor, end, &mut dates),
            };
        }

        // the weekly multi-day branch emits within a week in selection
        // order, not date order
        dates.sort_unstable();

        tracing::trace!(count = dates.len(), steps, "expansion finished");
        Expansion { dates, truncated }
    }
}

/// Expands with the default step cap. The single entry point for callers
/// that do not need to tune the bound.
pub fn expand(rule: &RecurrenceRule) -> Expansion {
    Expander::default().expand(rule)
}

/// The outcome of expanding one or more rules: the sorted occurrence dates
/// plus whether the step cap cut the sequence short.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expansion {
    dates: Vec<NaiveDate>,
    truncated: bool,
}

impl Expansion {
    pub(crate) fn new(dates: Vec<NaiveDate>, truncated: bool) -> Self {
        Expansion { dates, truncated }
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn truncated(&self) -> bool {
        self.truncated
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn into_dates(self) -> Vec<NaiveDate> {
        self.dates
    }

    /// `YYYY-MM-DD` strings for the UI boundary.
    pub fn iso_dates(&self) -> Vec<String> {
        self.dates.iter().map(|d| date::format_iso(*d)).collect()
    }
}
