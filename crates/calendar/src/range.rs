//! Iteration over runs of days.

use std::iter::FusedIterator;

use crate::day::Day;

/// An iterator over evenly spaced days.
///
/// Created by [`Day::days_until`], [`Day::days_through`] and [`Day::stride`].
/// The length is fixed at construction, so the iterator is exact-size and
/// can be walked from either end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRange {
    next: i64,
    step: i64,
    remaining: u64,
}

impl DayRange {
    /// Days from `start` towards `end` (excluded) in steps of `step`.
    pub(crate) fn half_open(start: Day, end: Day, step: i32) -> Self {
        let (start, end, step) = (
            i64::from(start.days_since_epoch()),
            i64::from(end.days_since_epoch()),
            i64::from(step),
        );
        let span = end - start;
        // Round the span up to whole steps; a span against the step's sign is empty.
        let remaining = if step > 0 && span > 0 {
            (span + step - 1) / step
        } else if step < 0 && span < 0 {
            (span + step + 1) / step
        } else {
            0
        };
        Self {
            next: start,
            step,
            remaining: remaining as u64,
        }
    }

    /// Days from `start` to `end`, both included.
    pub(crate) fn closed(start: Day, end: Day) -> Self {
        let span = i64::from(end.days_since_epoch()) - i64::from(start.days_since_epoch());
        Self {
            next: i64::from(start.days_since_epoch()),
            step: 1,
            remaining: (span + 1).max(0) as u64,
        }
    }

    fn day_at(&self, offset: u64) -> Day {
        // Every yielded value lies between the two `i32` endpoints.
        Day::from_days_since_epoch((self.next + offset as i64 * self.step) as i32)
    }
}

impl Iterator for DayRange {
    type Item = Day;

    fn next(&mut self) -> Option<Day> {
        if self.remaining == 0 {
            return None;
        }
        let day = self.day_at(0);
        self.next += self.step;
        self.remaining -= 1;
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (len, Some(len))
    }
}

impl DoubleEndedIterator for DayRange {
    fn next_back(&mut self) -> Option<Day> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.day_at(self.remaining))
    }
}

impl ExactSizeIterator for DayRange {}

impl FusedIterator for DayRange {}
