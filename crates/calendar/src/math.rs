//! Civil-calendar arithmetic on day counts.
//!
//! Implements Howard Hinnant's era-based algorithms
//! (<http://howardhinnant.github.io/date_algorithms.html>) for the proleptic
//! Gregorian calendar. A day count is the number of days since 1970-01-01.
//! Years use astronomical numbering: year 0 is 1 BCE.
//!
//! All intermediate arithmetic runs in `i64`, so every `i32` day count
//! converts exactly.

use crate::weekday::Weekday;

/// Days from 0000-03-01 to 1970-01-01.
const EPOCH_SHIFT: i64 = 719_468;

/// Days in one 400-year era.
const DAYS_PER_ERA: i64 = 146_097;

/// Converts a day count into `(year, month, day)`.
///
/// The month is in 1..=12 and the day in 1..=31 for every input.
pub fn components_from_day_count(days: i32) -> (i32, u8, u8) {
    // Shift the epoch to 0000-03-01 so the leap day falls at the end of the year.
    let shifted = i64::from(days) + EPOCH_SHIFT;
    let era = shifted.div_euclid(DAYS_PER_ERA);
    let day_of_era = shifted - era * DAYS_PER_ERA; // [0, 146096]
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365; // [0, 399]
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100); // [0, 365]
    let month_index = (5 * day_of_year + 2) / 153; // [0, 11], March = 0
    let day = day_of_year - (153 * month_index + 2) / 5 + 1;
    let month = if month_index < 10 {
        month_index + 3
    } else {
        month_index - 9
    };
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    (year as i32, month as u8, day as u8)
}

/// Converts `(year, month, day)` into a day count.
///
/// Out-of-range months and days roll over instead of failing: month 13 is
/// January of the following year, day 0 is the last day of the previous
/// month, and day 45 of a 30-day month lands 15 days into the next one.
/// Results beyond the `i32` range saturate.
pub fn day_count_from_components(year: i32, month: i32, day: i32) -> i32 {
    // Fold the month into 1..=12, carrying whole years.
    let month_zero = i64::from(month) - 1;
    let month = month_zero.rem_euclid(12) + 1;
    let year = i64::from(year) + month_zero.div_euclid(12) - i64::from(month <= 2);

    let era = year.div_euclid(400);
    let year_of_era = year - era * 400; // [0, 399]
    let month_index = if month > 2 { month - 3 } else { month + 9 }; // [0, 11]
    // Linear in `day`, which is what makes day overflow roll into later months.
    let day_of_year = (153 * month_index + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    let days = era * DAYS_PER_ERA + day_of_era - EPOCH_SHIFT;
    days.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Returns the weekday of a day count.
///
/// Uses Hinnant's `weekday_from_days` branch, which keeps the remainder
/// non-negative under truncating `%`.
pub fn weekday_from_day_count(days: i32) -> Weekday {
    let z = i64::from(days);
    let index = if z >= -4 { (z + 4) % 7 } else { (z + 5) % 7 + 6 };
    Weekday::ALL[index as usize]
}

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`, or `None` if the month
/// is outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}
