//! The [`Day`] value type.

use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::components::DayComponents;
use crate::error::CalendarError;
use crate::math;
use crate::range::DayRange;
use crate::weekday::Weekday;

/// A calendar day with no time of day and no time zone.
///
/// Stores only the number of days since 1970-01-01, so equality, ordering
/// and hashing are all by that count. Serializes as the bare day count;
/// deserializing rejects counts outside [`Day::MIN`]`..=`[`Day::MAX`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Day {
    days_since_epoch: i32,
}

/// The component changed by [`Day::adding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateUnit {
    /// Whole days.
    Day,
    /// Calendar months; the day of month is kept and rolls over if needed.
    Month,
    /// Calendar years; the month and day are kept and roll over if needed.
    Year,
}

impl Day {
    /// 1970-01-01.
    pub const EPOCH: Day = Day::from_days_since_epoch(0);

    /// Earliest supported day, about 2.9 million years before the epoch.
    ///
    /// Within `MIN..=MAX` every month grid fits in an `i32` day count and the
    /// distance between any two days fits in an `i32`.
    pub const MIN: Day = Day::from_days_since_epoch(-(1 << 30));

    /// Latest supported day, about 2.9 million years after the epoch.
    pub const MAX: Day = Day::from_days_since_epoch((1 << 30) - 1);

    /// Creates a day from its count of days since 1970-01-01.
    ///
    /// Any `i32` is stored as given. Counts outside [`Day::MIN`]`..=`[`Day::MAX`]
    /// have no month grid; use [`Day::try_from_days_since_epoch`] to reject them.
    pub const fn from_days_since_epoch(days_since_epoch: i32) -> Self {
        Self { days_since_epoch }
    }

    /// Creates a day from its count of days since 1970-01-01, rejecting
    /// counts outside [`Day::MIN`]`..=`[`Day::MAX`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedDayCount`] for such counts.
    pub const fn try_from_days_since_epoch(days_since_epoch: i32) -> Result<Self, CalendarError> {
        let day = Self::from_days_since_epoch(days_since_epoch);
        if day.is_supported() {
            Ok(day)
        } else {
            Err(CalendarError::UnsupportedDayCount { days: days_since_epoch })
        }
    }

    /// Returns `true` if this day lies in [`Day::MIN`]`..=`[`Day::MAX`].
    pub const fn is_supported(self) -> bool {
        self.days_since_epoch >= Day::MIN.days_since_epoch && self.days_since_epoch <= Day::MAX.days_since_epoch
    }

    /// Creates a day from a wide count, saturating at the `i32` bounds.
    fn saturating(days_since_epoch: i64) -> Self {
        Self::from_days_since_epoch(days_since_epoch.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
    }

    /// Creates a day from a year, month and day of month.
    ///
    /// Never fails. Out-of-range months and days roll forward or backward
    /// through the calendar, so `Day::new(2023, 4, 45)` is 2023-05-15.
    /// Year 0 is read as year 1, following the common calendar-library
    /// convention that there is no year zero; use [`Day::from_components`]
    /// for astronomical years.
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        let year = if year == 0 { 1 } else { year };
        Self::from_days_since_epoch(math::day_count_from_components(year, month, day))
    }

    /// Creates a day from a year, month and day of month, rejecting dates
    /// that do not exist.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month or day is out of range.
    pub fn try_new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        DayComponents::new(year, month, day).map(Self::from_components)
    }

    /// Creates a day from validated components. Years are astronomical.
    pub fn from_components(components: DayComponents) -> Self {
        let (year, month, day) = components.ymd();
        Self::from_days_since_epoch(math::day_count_from_components(
            year,
            i32::from(month),
            i32::from(day),
        ))
    }

    /// Returns the number of days since 1970-01-01.
    pub const fn days_since_epoch(self) -> i32 {
        self.days_since_epoch
    }

    /// Returns the year, month and day of month.
    pub fn components(self) -> DayComponents {
        DayComponents::from_day_count(self.days_since_epoch)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.components().year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.components().month()
    }

    /// Returns the day within the month (1..=31).
    pub fn day_of_month(self) -> u8 {
        self.components().day()
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        math::weekday_from_day_count(self.days_since_epoch)
    }

    /// Adds `value` to one component and rolls the result into a valid day.
    ///
    /// `Day::new(2001, 2, 3).adding(DateUnit::Day, 55)` is 2001-03-30, and
    /// adding one month to January 31 gives March 2 or 3.
    ///
    /// Months are folded into years before the day is placed, so
    /// `Day::new(2001, 2, 3).adding(DateUnit::Month, 55)` is 2005-09-03.
    /// Feeding month 57 straight into Hinnant's formula would instead land
    /// on 2005-09-10 (any month of 15 or more drifts this way), since the
    /// formula is only exact for months 1..=14.
    pub fn adding(self, unit: DateUnit, value: i32) -> Self {
        let (year, month, day) = self.components().ymd();
        let (month, day) = (i32::from(month), i32::from(day));
        let days = match unit {
            DateUnit::Day => math::day_count_from_components(year, month, day.saturating_add(value)),
            DateUnit::Month => math::day_count_from_components(year, month.saturating_add(value), day),
            DateUnit::Year => math::day_count_from_components(year.saturating_add(value), month, day),
        };
        Self::from_days_since_epoch(days)
    }

    /// Returns the signed number of days from `self` to `other`.
    pub fn distance_to(self, other: Day) -> i32 {
        other - self
    }

    /// Returns the day `n` days after `self` (before, if `n` is negative).
    pub fn advanced_by(self, n: i32) -> Self {
        self + n
    }

    /// Iterates from `self` up to but excluding `end`.
    pub fn days_until(self, end: Day) -> DayRange {
        DayRange::half_open(self, end, 1)
    }

    /// Iterates from `self` up to and including `end`.
    pub fn days_through(self, end: Day) -> DayRange {
        DayRange::closed(self, end)
    }

    /// Iterates from `self` towards `end` (excluded) in steps of `by` days.
    ///
    /// A negative step walks backwards; an empty range results when `end`
    /// lies in the opposite direction.
    ///
    /// # Panics
    ///
    /// Panics if `by` is zero.
    pub fn stride(self, end: Day, by: i32) -> DayRange {
        assert!(by != 0, "stride step must be non-zero");
        DayRange::half_open(self, end, by)
    }
}

impl Add<i32> for Day {
    type Output = Day;

    /// Saturates at the `i32` day-count bounds.
    fn add(self, rhs: i32) -> Day {
        Day::saturating(i64::from(self.days_since_epoch) + i64::from(rhs))
    }
}

impl Sub<i32> for Day {
    type Output = Day;

    /// Saturates at the `i32` day-count bounds.
    fn sub(self, rhs: i32) -> Day {
        Day::saturating(i64::from(self.days_since_epoch) - i64::from(rhs))
    }
}

impl Sub<Day> for Day {
    type Output = i32;

    /// Exact for supported days; saturates at the `i32` bounds otherwise.
    fn sub(self, rhs: Day) -> i32 {
        let distance = i64::from(self.days_since_epoch) - i64::from(rhs.days_since_epoch);
        distance.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }
}

impl AddAssign<i32> for Day {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl SubAssign<i32> for Day {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

impl TryFrom<i32> for Day {
    type Error = CalendarError;

    fn try_from(days_since_epoch: i32) -> Result<Self, CalendarError> {
        Day::try_from_days_since_epoch(days_since_epoch)
    }
}

impl From<Day> for i32 {
    fn from(day: Day) -> i32 {
        day.days_since_epoch
    }
}

impl From<DayComponents> for Day {
    fn from(components: DayComponents) -> Self {
        Day::from_components(components)
    }
}
