//! Human-readable rendering of a [`Day`].

use std::fmt;

use chrono::NaiveDate;

use crate::day::Day;

/// Display style for [`Day::formatted`].
///
/// Rendering is delegated to chrono with English month and weekday names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DayStyle {
    /// `Feb 3, 2012`
    #[default]
    Abbreviated,
    /// `Friday, February 3, 2012`
    Complete,
    /// `February 3, 2012`
    Long,
    /// `2/3/2012`
    Numeric,
}

impl DayStyle {
    fn pattern(self) -> &'static str {
        match self {
            DayStyle::Abbreviated => "%b %-d, %Y",
            DayStyle::Complete => "%A, %B %-d, %Y",
            DayStyle::Long => "%B %-d, %Y",
            DayStyle::Numeric => "%-m/%-d/%Y",
        }
    }
}

impl Day {
    /// Renders this day in the given style.
    ///
    /// Days beyond chrono's range fall back to `yyyy-MM-dd`.
    pub fn formatted(self, style: DayStyle) -> String {
        match NaiveDate::try_from(self) {
            Ok(date) => date.format(style.pattern()).to_string(),
            Err(_) => self.components().to_string(),
        }
    }
}

/// Renders the [`DayStyle::Abbreviated`] style.
impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted(DayStyle::Abbreviated))
    }
}
