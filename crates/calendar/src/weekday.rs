//! Days of the week and the first day of a calendar row.

use std::fmt;

/// A day of the week.
///
/// Discriminants follow Hinnant's `weekday_from_days` output: 0 is Sunday
/// and 6 is Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Index 0.
    Sunday = 0,
    /// Index 1.
    Monday = 1,
    /// Index 2.
    Tuesday = 2,
    /// Index 3.
    Wednesday = 3,
    /// Index 4.
    Thursday = 4,
    /// Index 5.
    Friday = 5,
    /// Index 6.
    Saturday = 6,
}

impl Weekday {
    /// All weekdays in index order, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Returns the weekday with the given index (0 = Sunday), or `None` if
    /// the index is greater than 6.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Returns the index of this weekday (0 = Sunday, 6 = Saturday).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the following weekday, wrapping Saturday to Sunday.
    pub fn succ(self) -> Self {
        Self::ALL[usize::from((self.index() + 1) % 7)]
    }

    /// Returns the preceding weekday, wrapping Sunday to Saturday.
    pub fn pred(self) -> Self {
        Self::ALL[usize::from((self.index() + 6) % 7)]
    }

    /// Returns the English name of this weekday.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The weekday that begins each row of a calendar grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StartOfWeek {
    /// Rows run Sunday to Saturday.
    #[default]
    Sunday,
    /// Rows run Monday to Sunday.
    Monday,
}

impl StartOfWeek {
    /// Returns the weekday that opens a row.
    pub fn weekday(self) -> Weekday {
        match self {
            StartOfWeek::Sunday => Weekday::Sunday,
            StartOfWeek::Monday => Weekday::Monday,
        }
    }
}

impl From<StartOfWeek> for Weekday {
    fn from(start: StartOfWeek) -> Self {
        start.weekday()
    }
}
