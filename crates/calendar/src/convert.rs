//! Bridging between [`Day`] and chrono's date and time types.
//!
//! A day becomes a point in time only once a UTC offset is chosen: the
//! instant of a day is its midnight at that offset, and an instant belongs
//! to the day whose midnight-to-midnight span at that offset contains it.

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, Offset, TimeZone, Utc};

use crate::day::Day;
use crate::error::CalendarError;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// `NaiveDate::num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

impl Day {
    /// Returns the current day in the host's local time zone.
    ///
    /// Reads the wall clock once.
    pub fn today() -> Self {
        Self::from(Local::now().date_naive())
    }

    /// Returns the current day at the given UTC offset.
    pub fn today_in(offset: FixedOffset) -> Self {
        Self::from_datetime(&Utc::now().with_timezone(&offset))
    }

    /// Returns the UTC day containing `secs` seconds since the Unix epoch.
    ///
    /// Partial days are dropped towards negative infinity, so one second
    /// before the epoch is 1969-12-31.
    pub fn from_timestamp(secs: i64) -> Self {
        Self::from_timestamp_in(secs, Utc.fix())
    }

    /// Returns the day at `offset` containing `secs` seconds since the Unix
    /// epoch. Results outside the `i32` day range saturate.
    pub fn from_timestamp_in(secs: i64, offset: FixedOffset) -> Self {
        let local = i128::from(secs) + i128::from(offset.local_minus_utc());
        let days = local.div_euclid(i128::from(SECONDS_PER_DAY));
        Self::from_days_since_epoch(days.clamp(i128::from(i32::MIN), i128::from(i32::MAX)) as i32)
    }

    /// Returns the local calendar day of a zoned date-time.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::from(datetime.date_naive())
    }

    /// Returns the Unix timestamp of midnight UTC at the start of this day.
    pub fn timestamp(self) -> i64 {
        self.timestamp_in(Utc.fix())
    }

    /// Returns the Unix timestamp of midnight at `offset` at the start of
    /// this day.
    pub fn timestamp_in(self, offset: FixedOffset) -> i64 {
        i64::from(self.days_since_epoch()) * SECONDS_PER_DAY - i64::from(offset.local_minus_utc())
    }

    /// Returns midnight at `offset` at the start of this day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if chrono cannot represent the day.
    pub fn midnight_in(self, offset: FixedOffset) -> Result<DateTime<FixedOffset>, CalendarError> {
        let out_of_range = CalendarError::OutOfRange {
            days: self.days_since_epoch(),
        };
        let date = NaiveDate::try_from(self)?;
        let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| out_of_range.clone())?;
        offset.from_local_datetime(&midnight).single().ok_or(out_of_range)
    }
}

impl From<NaiveDate> for Day {
    fn from(date: NaiveDate) -> Self {
        Day::from_days_since_epoch(date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE)
    }
}

impl TryFrom<Day> for NaiveDate {
    type Error = CalendarError;

    fn try_from(day: Day) -> Result<Self, Self::Error> {
        let days = day.days_since_epoch();
        days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or(CalendarError::OutOfRange { days })
    }
}
