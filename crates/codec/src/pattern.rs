//! Date patterns such as `dd/MM/yyyy`.
//!
//! Patterns use the Unicode date field letters, compiled once into chrono
//! format items that drive both parsing and rendering.
//!
//! | Field | Letters | Meaning |
//! |-------|---------|---------|
//! | year | `y`, `yyyy` | full year, unpadded or zero-padded to four digits |
//! | year | `yy` | two-digit year, parsed into 1970..=2069 |
//! | month | `M`, `MM` | month number, unpadded or two digits |
//! | month | `MMM`, `MMMM` | abbreviated or full English month name |
//! | day | `d`, `dd` | day of month, unpadded or two digits |
//! | weekday | `EEE`, `EEEE` | abbreviated or full English weekday name |
//!
//! Text between single quotes is literal, and `''` is a single quote.
//! Any other non-letter character is literal.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use chrono::format::{self, Fixed, Item, Numeric, Pad, ParseError, Parsed};
use daytype_calendar::Day;

use crate::error::CodecError;

/// A compiled date pattern.
///
/// A pattern must mention the year, month and day, so every string it
/// parses names exactly one day. Patterns are immutable after compilation
/// and can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct DayPattern {
    pattern: String,
    items: Vec<Item<'static>>,
}

#[derive(Default)]
struct Coverage {
    year: bool,
    month: bool,
    day: bool,
}

impl DayPattern {
    /// Compiles a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidPattern`] for an unknown field letter, an
    /// unsupported field width, an unterminated quote, or a pattern missing
    /// the year, month or day.
    pub fn new(pattern: &str) -> Result<Self, CodecError> {
        let invalid = |reason: String| CodecError::InvalidPattern {
            pattern: pattern.to_owned(),
            reason,
        };

        let mut items = Vec::new();
        let mut coverage = Coverage::default();
        let mut literal = String::new();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.next_if_eq(&'\'').is_some() {
                    literal.push('\'');
                    continue;
                }
                let mut closed = false;
                while let Some(q) = chars.next() {
                    if q != '\'' {
                        literal.push(q);
                    } else if chars.next_if_eq(&'\'').is_some() {
                        literal.push('\'');
                    } else {
                        closed = true;
                        break;
                    }
                }
                if !closed {
                    return Err(invalid("unterminated quoted literal".to_owned()));
                }
            } else if c.is_ascii_alphabetic() {
                let mut width = 1;
                while chars.next_if_eq(&c).is_some() {
                    width += 1;
                }
                flush_literal(&mut items, &mut literal);
                let item = field_item(c, width, &mut coverage).ok_or_else(|| {
                    invalid(format!("unsupported field '{}'", c.to_string().repeat(width)))
                })?;
                items.push(item);
            } else {
                literal.push(c);
            }
        }
        flush_literal(&mut items, &mut literal);

        let missing: Vec<&str> = [
            (coverage.year, "year"),
            (coverage.month, "month"),
            (coverage.day, "day"),
        ]
        .into_iter()
        .filter_map(|(present, name)| (!present).then_some(name))
        .collect();
        if !missing.is_empty() {
            return Err(invalid(format!("missing {} field", missing.join(" and "))));
        }

        Ok(Self {
            pattern: pattern.to_owned(),
            items,
        })
    }

    /// `dd/MM/yyyy`
    pub fn dmy() -> Self {
        Self::builtin(
            "dd/MM/yyyy",
            [
                Item::Numeric(Numeric::Day, Pad::Zero),
                Item::Literal("/"),
                Item::Numeric(Numeric::Month, Pad::Zero),
                Item::Literal("/"),
                Item::Numeric(Numeric::Year, Pad::Zero),
            ],
        )
    }

    /// `MM/dd/yyyy`
    pub fn mdy() -> Self {
        Self::builtin(
            "MM/dd/yyyy",
            [
                Item::Numeric(Numeric::Month, Pad::Zero),
                Item::Literal("/"),
                Item::Numeric(Numeric::Day, Pad::Zero),
                Item::Literal("/"),
                Item::Numeric(Numeric::Year, Pad::Zero),
            ],
        )
    }

    /// `yyyy-MM-dd`
    pub fn ymd() -> Self {
        Self::builtin(
            "yyyy-MM-dd",
            [
                Item::Numeric(Numeric::Year, Pad::Zero),
                Item::Literal("-"),
                Item::Numeric(Numeric::Month, Pad::Zero),
                Item::Literal("-"),
                Item::Numeric(Numeric::Day, Pad::Zero),
            ],
        )
    }

    fn builtin(pattern: &str, items: [Item<'static>; 5]) -> Self {
        Self {
            pattern: pattern.to_owned(),
            items: items.into(),
        }
    }

    /// Returns the pattern as written.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Parses a whole string into a day. Trailing input is an error.
    ///
    /// # Errors
    ///
    /// Returns chrono's [`ParseError`] if the string does not match or names
    /// a date that does not exist.
    pub fn parse(&self, input: &str) -> Result<Day, ParseError> {
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, input, self.items.iter())?;
        parsed.to_naive_date().map(Day::from)
    }

    /// Renders a day, or returns `None` if chrono cannot represent it.
    pub fn format(&self, day: Day) -> Option<String> {
        let date = NaiveDate::try_from(day).ok()?;
        Some(date.format_with_items(self.items.iter()).to_string())
    }
}

fn flush_literal(items: &mut Vec<Item<'static>>, literal: &mut String) {
    if !literal.is_empty() {
        items.push(Item::OwnedLiteral(std::mem::take(literal).into_boxed_str()));
    }
}

fn field_item(letter: char, width: usize, coverage: &mut Coverage) -> Option<Item<'static>> {
    let item = match (letter, width) {
        ('y', 1) => Item::Numeric(Numeric::Year, Pad::None),
        ('y', 2) => Item::Numeric(Numeric::YearMod100, Pad::Zero),
        ('y', _) => Item::Numeric(Numeric::Year, Pad::Zero),
        ('M', 1) => Item::Numeric(Numeric::Month, Pad::None),
        ('M', 2) => Item::Numeric(Numeric::Month, Pad::Zero),
        ('M', 3) => Item::Fixed(Fixed::ShortMonthName),
        ('M', 4) => Item::Fixed(Fixed::LongMonthName),
        ('d', 1) => Item::Numeric(Numeric::Day, Pad::None),
        ('d', 2) => Item::Numeric(Numeric::Day, Pad::Zero),
        ('E', 1..=3) => Item::Fixed(Fixed::ShortWeekdayName),
        ('E', 4) => Item::Fixed(Fixed::LongWeekdayName),
        _ => return None,
    };
    match letter {
        'y' => coverage.year = true,
        'M' => coverage.month = true,
        'd' => coverage.day = true,
        _ => {}
    }
    Some(item)
}

impl PartialEq for DayPattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for DayPattern {}

impl FromStr for DayPattern {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for DayPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
