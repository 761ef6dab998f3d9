use std::cmp::Reverse;
use std::collections::BinaryHeap;

use chrono::NaiveDate;

use crate::{
    expand::{Expander, Expansion},
    rule::RecurrenceRule,
};

/// A collection of rules expanded as one schedule: the per-rule sequences
/// are merged ascending, dates produced by more than one rule appear once.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<RecurrenceRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        RuleSet::default()
    }

    pub fn rule(mut self, rule: RecurrenceRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn expand(&self) -> Expansion {
        self.expand_with(&Expander::default())
    }

    pub fn expand_with(&self, expander: &Expander) -> Expansion {
        let mut truncated = false;

        let mut min_heap: BinaryHeap<_> = self
            .rules
            .iter()
            .map(|rule| expander.expand(rule))
            .filter_map(|expansion| {
                truncated |= expansion.truncated();
                let mut iter = expansion.into_dates().into_iter();
                iter.next().map(|cursor| Reverse(IterHolder { iter, cursor }))
            })
            .collect();

        let mut dates = Vec::new();
        while let Some(Reverse(IterHolder { cursor, mut iter })) = min_heap.pop() {
            if let Some(next) = iter.next() {
                min_heap.push(Reverse(IterHolder { cursor: next, iter }));
            }

            if dates.last() != Some(&cursor) {
                dates.push(cursor);
            }
        }

        Expansion::new(dates, truncated)
    }

    /// Merged occurrences on or after `min`.
    pub fn after(&self, min: NaiveDate) -> Expansion {
        let expansion = self.expand();
        let truncated = expansion.truncated();
        let dates = expansion
            .into_dates()
            .into_iter()
            .filter(|d| *d >= min)
            .collect();

        Expansion::new(dates, truncated)
    }
}

/// Holds an iterator and the latest date that came out of it.
struct IterHolder<I: Iterator<Item = NaiveDate>> {
    cursor: NaiveDate,
    iter: I,
}

impl<I: Iterator<Item = NaiveDate>> Eq for IterHolder<I> {}

impl<I: Iterator<Item = NaiveDate>> PartialEq for IterHolder<I> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor.eq(&other.cursor)
    }
}

impl<I: Iterator<Item = NaiveDate>> PartialOrd for IterHolder<I> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ordered by cursor alone; wrapped in Reverse at the call site because
// BinaryHeap is a max-heap and the merge wants the earliest date first
impl<I: Iterator<Item = NaiveDate>> Ord for IterHolder<I> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cursor.cmp(&other.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::date;
    use crate::{Frequency, Options, RecurrenceRule};

    fn daily(start: chrono::NaiveDate, end: chrono::NaiveDate) -> RecurrenceRule {
        RecurrenceRule::new(
            Frequency::Daily,
            start,
            Options {
                end: Some(end),
                interval: Some(7),
                ..Options::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn merges_ascending() {
        let set = RuleSet::new()
            .rule(daily(date(2024, 1, 4), date(2024, 1, 31)))
            .rule(daily(date(2024, 1, 1), date(2024, 1, 31)));

        assert_eq!(
            set.expand().dates(),
            &[
                date(2024, 1, 1),
                date(2024, 1, 4),
                date(2024, 1, 8),
                date(2024, 1, 11),
                date(2024, 1, 15),
                date(2024, 1, 18),
                date(2024, 1, 22),
                date(2024, 1, 25),
                date(2024, 1, 29),
            ]
        );
    }

    #[test]
    fn skips_repeated() {
        let start = date(2024, 1, 1);
        let set = RuleSet::new()
            .rule(
                RecurrenceRule::new(
                    Frequency::Daily,
                    start,
                    Options {
                        end: Some(date(2024, 1, 15)),
                        interval: Some(7),
                        ..Options::default()
                    },
                )
                .unwrap(),
            )
            .rule(
                RecurrenceRule::new(
                    Frequency::Weekly,
                    start,
                    Options {
                        end: Some(date(2024, 1, 15)),
                        ..Options::default()
                    },
                )
                .unwrap(),
            );

        // both rules land on the same Mondays; each shows up once
        assert_eq!(
            set.expand().dates(),
            &[date(2024, 1, 1), date(2024, 1, 8), date(2024, 1, 15)]
        );
    }

    #[test]
    fn after_drops_earlier_dates() {
        let set = RuleSet::new().rule(daily(date(2024, 1, 1), date(2024, 1, 31)));

        assert_eq!(
            set.after(date(2024, 1, 10)).dates(),
            &[date(2024, 1, 15), date(2024, 1, 22), date(2024, 1, 29)]
        );
    }

    #[test]
    fn empty_set_is_empty() {
        let expansion = RuleSet::new().expand();
        assert!(expansion.is_empty());
        assert!(!expansion.truncated());
    }

    #[test]
    fn propagates_truncation() {
        let set = RuleSet::new().rule(daily(date(2024, 1, 1), date(2024, 1, 31)));

        assert!(!set.expand().truncated());
        assert!(set.expand_with(&Expander::with_step_cap(2)).truncated());
    }
}
