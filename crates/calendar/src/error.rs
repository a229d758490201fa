//! Error types for the daytype-calendar crate.

/// Error type for all fallible operations in the daytype-calendar crate.
///
/// Lenient constructors such as [`Day::new`](crate::Day::new) never fail;
/// these variants come from the strict constructors and from bridging to
/// host date types whose range is narrower than a day count.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year, which decides February's length.
        year: i32,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a day count cannot be represented by the host date type.
    #[error("day {days} is outside the range supported by chrono")]
    OutOfRange {
        /// The day count, in days since 1970-01-01.
        days: i32,
    },

    /// Returned when a day count lies outside `Day::MIN..=Day::MAX`.
    #[error(
        "day count {days} is outside the supported range {}..={}",
        crate::Day::MIN.days_since_epoch(),
        crate::Day::MAX.days_since_epoch()
    )]
    UnsupportedDayCount {
        /// The day count, in days since 1970-01-01.
        days: i32,
    },
}
