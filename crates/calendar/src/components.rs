//! Year, month and day-of-month of a [`Day`].

use std::fmt;

use crate::day::Day;
use crate::error::CalendarError;
use crate::math;

/// The civil-calendar components of a [`Day`].
///
/// Always holds a real date: month in 1..=12 and a day that exists in that
/// month. Years use astronomical numbering (year 0 is 1 BCE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayComponents {
    year: i32,
    month: u8,
    day: u8,
}

impl DayComponents {
    /// Creates validated components.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12 and
    /// [`CalendarError::InvalidDay`] if `day` does not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = math::days_in_month(year, month).ok_or(CalendarError::InvalidMonth { month })?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Derives the components of a day count.
    pub(crate) fn from_day_count(days: i32) -> Self {
        let (year, month, day) = math::components_from_day_count(days);
        Self { year, month, day }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(year, month, day)` as a tuple.
    pub fn ymd(self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Converts back into a [`Day`].
    pub fn to_day(self) -> Day {
        Day::from_components(self)
    }
}

impl From<Day> for DayComponents {
    fn from(day: Day) -> Self {
        day.components()
    }
}

/// Renders as `yyyy-MM-dd`, with a sign and at least four year digits
/// outside 0..=9999.
impl fmt::Display for DayComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..=9999).contains(&self.year) {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        } else {
            write!(f, "{:+05}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}
