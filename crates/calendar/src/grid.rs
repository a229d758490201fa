//! Week-aligned month grids.
//!
//! A grid is an ordered map from the first [`Day`] of each week to that
//! week's seven [`CalendarDay`] cells. Grids for neighbouring months share
//! their boundary week, which merging collapses into a single row.

use std::cmp::Ordering;
use std::ops::Add;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::components::DayComponents;
use crate::day::Day;
use crate::error::CalendarError;
use crate::math;
use crate::weekday::{StartOfWeek, Weekday};

/// One cell of a calendar grid: a day and its precomputed components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDay {
    day: Day,
    components: DayComponents,
}

impl CalendarDay {
    /// Creates a cell for `day`.
    pub fn new(day: Day) -> Self {
        Self {
            day,
            components: day.components(),
        }
    }

    /// Returns the day.
    pub fn day(&self) -> Day {
        self.day
    }

    /// Returns the day's year, month and day of month.
    pub fn components(&self) -> DayComponents {
        self.components
    }
}

/// Seven consecutive cells, starting on the grid's start-of-week day.
pub type Week = [CalendarDay; 7];

/// A calendar grid keyed by the first day of each week.
///
/// Keys are unique and strictly increasing, and every week holds seven
/// consecutive days. Grids are only built by [`CalendarDays::containing`]
/// and the merge operations, which preserve both properties. Equality
/// compares weeks in order.
#[derive(Debug, Clone, Default)]
pub struct CalendarDays {
    weeks: IndexMap<Day, Week>,
}

impl CalendarDays {
    /// Builds the grid for the month containing `day`.
    ///
    /// The first row starts on the last `start` weekday on or before the 1st
    /// of the month; rows continue until the month's last day is covered, so
    /// the first and last rows may hold days of the neighbouring months.
    ///
    /// A day outside [`Day::MIN`]`..=`[`Day::MAX`] yields an empty grid; see
    /// [`CalendarDays::try_containing`].
    pub fn containing(day: Day, start: StartOfWeek) -> Self {
        Self::try_containing(day, start).unwrap_or_else(|err| {
            debug!(%err, "no calendar grid for day");
            Self::default()
        })
    }

    /// Builds the grid for the month containing `day`, rejecting days
    /// outside [`Day::MIN`]`..=`[`Day::MAX`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedDayCount`] for such days.
    #[tracing::instrument(level = "debug", skip_all, fields(days_since_epoch = day.days_since_epoch(), ?start))]
    pub fn try_containing(day: Day, start: StartOfWeek) -> Result<Self, CalendarError> {
        let day = Day::try_from_days_since_epoch(day.days_since_epoch())?;
        let (year, month, _) = day.components().ymd();
        let first_of_month =
            Day::from_days_since_epoch(math::day_count_from_components(year, i32::from(month), 1));
        let last_of_month = Day::from_days_since_epoch(math::day_count_from_components(
            year,
            i32::from(month) + 1,
            1,
        )) - 1;

        let offset = (first_of_month.weekday().index() + 7 - start.weekday().index()) % 7;
        let mut cursor = first_of_month - i32::from(offset);

        let mut weeks = IndexMap::with_capacity(6);
        loop {
            let week_start = cursor;
            let week: Week = std::array::from_fn(|i| CalendarDay::new(week_start + i as i32));
            trace!(week_start = week_start.days_since_epoch(), "built calendar week");
            weeks.insert(week_start, week);
            cursor = week_start + 7;
            if cursor > last_of_month {
                break;
            }
        }
        Ok(Self { weeks })
    }

    /// Merges two grids in chronological order.
    ///
    /// When both grids hold a week with the same start day, the week from
    /// `self` is kept.
    #[tracing::instrument(level = "debug", skip_all, fields(lhs = self.len(), rhs = other.len()))]
    pub fn merge(&self, other: &CalendarDays) -> CalendarDays {
        let mut weeks = IndexMap::with_capacity(self.len() + other.len());
        let mut left = self.weeks.iter().peekable();
        let mut right = other.weeks.iter().peekable();
        loop {
            let order = match (left.peek(), right.peek()) {
                (Some((l, _)), Some((r, _))) => l.cmp(r),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => break,
            };
            let entry = match order {
                Ordering::Less => left.next(),
                Ordering::Greater => right.next(),
                Ordering::Equal => {
                    right.next();
                    left.next()
                }
            };
            if let Some((key, week)) = entry {
                weeks.insert(*key, *week);
            }
        }
        CalendarDays { weeks }
    }

    /// Merges the month containing `day` into this grid.
    ///
    /// The new month uses this grid's start of week: Monday if the first key
    /// is a Monday, otherwise Sunday. An empty grid yields the Sunday-start
    /// month containing `day`.
    pub fn merge_day(&self, day: Day) -> CalendarDays {
        match self.start_of_week() {
            Some(start) => self.merge(&CalendarDays::containing(day, start)),
            None => CalendarDays::containing(day, StartOfWeek::Sunday),
        }
    }

    /// Returns the start of week inferred from the first key, or `None` if
    /// the grid is empty.
    pub fn start_of_week(&self) -> Option<StartOfWeek> {
        self.first_key().map(|key| {
            if key.weekday() == Weekday::Monday {
                StartOfWeek::Monday
            } else {
                StartOfWeek::Sunday
            }
        })
    }

    /// Returns the number of weeks.
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Returns `true` if the grid holds no weeks.
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Returns the week starting on `key`.
    pub fn get(&self, key: Day) -> Option<&Week> {
        self.weeks.get(&key)
    }

    /// Returns the first week's start day.
    pub fn first_key(&self) -> Option<Day> {
        self.weeks.first().map(|(key, _)| *key)
    }

    /// Returns the last week's start day.
    pub fn last_key(&self) -> Option<Day> {
        self.weeks.last().map(|(key, _)| *key)
    }

    /// Iterates over week start days in chronological order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = Day> + ExactSizeIterator + '_ {
        self.weeks.keys().copied()
    }

    /// Iterates over weeks in chronological order.
    pub fn weeks(&self) -> impl DoubleEndedIterator<Item = &Week> + ExactSizeIterator + '_ {
        self.weeks.values()
    }

    /// Iterates over every cell, week by week.
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> + '_ {
        self.weeks.values().flatten()
    }

    /// Iterates over `(week start, week)` pairs in chronological order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Day, Week> {
        self.weeks.iter()
    }
}

impl PartialEq for CalendarDays {
    fn eq(&self, other: &Self) -> bool {
        self.weeks.len() == other.weeks.len() && self.weeks.iter().eq(other.weeks.iter())
    }
}

impl Eq for CalendarDays {}

impl<'a> IntoIterator for &'a CalendarDays {
    type Item = (&'a Day, &'a Week);
    type IntoIter = indexmap::map::Iter<'a, Day, Week>;

    fn into_iter(self) -> Self::IntoIter {
        self.weeks.iter()
    }
}

impl Add<&CalendarDays> for &CalendarDays {
    type Output = CalendarDays;

    fn add(self, rhs: &CalendarDays) -> CalendarDays {
        self.merge(rhs)
    }
}

impl Add for CalendarDays {
    type Output = CalendarDays;

    fn add(self, rhs: CalendarDays) -> CalendarDays {
        self.merge(&rhs)
    }
}

impl Add<Day> for &CalendarDays {
    type Output = CalendarDays;

    fn add(self, rhs: Day) -> CalendarDays {
        self.merge_day(rhs)
    }
}

impl Add<Day> for CalendarDays {
    type Output = CalendarDays;

    fn add(self, rhs: Day) -> CalendarDays {
        self.merge_day(rhs)
    }
}

impl Day {
    /// Builds the grid for the month containing this day.
    pub fn calendar_month(self, start: StartOfWeek) -> CalendarDays {
        CalendarDays::containing(self, start)
    }
}
