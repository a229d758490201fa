//! ISO 8601 date-time strings.
//!
//! A day travels as the instant of its midnight, so the string always
//! carries a time of day. Decoding accepts any time and fractional seconds;
//! encoding writes whole seconds.

use chrono::format::{self, Fixed, Item, Numeric, Pad, ParseError, Parsed};
use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Layout options for ISO 8601 strings.
///
/// The default layout is `2012-02-02T13:00:00Z`: dashes in the date,
/// colons in the time and offset, `T` between date and time, and a UTC
/// offset. The zone is used both to render instants and to read strings
/// that carry no offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iso8601Options {
    time_zone: bool,
    dash_separator: bool,
    colon_separator: bool,
    space_separator: bool,
    zone: FixedOffset,
}

impl Default for Iso8601Options {
    fn default() -> Self {
        Self {
            time_zone: true,
            dash_separator: true,
            colon_separator: true,
            space_separator: false,
            zone: Utc.fix(),
        }
    }
}

impl Iso8601Options {
    /// The default layout without the trailing offset:
    /// `2012-02-02T13:00:00`, read as UTC.
    pub fn sans_time_zone() -> Self {
        Self::default().with_time_zone(false)
    }

    /// Sets whether the string ends with a UTC offset.
    pub fn with_time_zone(mut self, time_zone: bool) -> Self {
        self.time_zone = time_zone;
        self
    }

    /// Sets whether the date fields are separated by `-`.
    pub fn with_dash_separator(mut self, dash_separator: bool) -> Self {
        self.dash_separator = dash_separator;
        self
    }

    /// Sets whether the time fields and offset are separated by `:`.
    pub fn with_colon_separator(mut self, colon_separator: bool) -> Self {
        self.colon_separator = colon_separator;
        self
    }

    /// Sets whether a space replaces the `T` between date and time.
    pub fn with_space_separator(mut self, space_separator: bool) -> Self {
        self.space_separator = space_separator;
        self
    }

    /// Sets the zone used to render instants and to read offset-less input.
    pub fn with_zone(mut self, zone: FixedOffset) -> Self {
        self.zone = zone;
        self
    }

    /// Whether the offset is written and expected.
    pub fn time_zone(&self) -> bool {
        self.time_zone
    }

    /// Whether date fields are separated by `-`.
    pub fn dash_separator(&self) -> bool {
        self.dash_separator
    }

    /// Whether time fields are separated by `:`.
    pub fn colon_separator(&self) -> bool {
        self.colon_separator
    }

    /// Whether a space replaces the `T`.
    pub fn space_separator(&self) -> bool {
        self.space_separator
    }

    /// Zone for rendering and for offset-less input.
    pub fn zone(&self) -> FixedOffset {
        self.zone
    }

    fn items(&self, parsing: bool) -> Vec<Item<'static>> {
        let dash = || Item::Literal("-");
        let colon = || Item::Literal(":");
        let mut items = Vec::with_capacity(14);

        items.push(Item::Numeric(Numeric::Year, Pad::Zero));
        items.extend(self.dash_separator.then(dash));
        items.push(Item::Numeric(Numeric::Month, Pad::Zero));
        items.extend(self.dash_separator.then(dash));
        items.push(Item::Numeric(Numeric::Day, Pad::Zero));
        items.push(Item::Literal(if self.space_separator { " " } else { "T" }));
        items.push(Item::Numeric(Numeric::Hour, Pad::Zero));
        items.extend(self.colon_separator.then(colon));
        items.push(Item::Numeric(Numeric::Minute, Pad::Zero));
        items.extend(self.colon_separator.then(colon));
        items.push(Item::Numeric(Numeric::Second, Pad::Zero));
        if parsing {
            items.push(Item::Fixed(Fixed::Nanosecond));
        }
        if self.time_zone {
            // Both variants accept offsets with or without a colon when parsing.
            items.push(Item::Fixed(if self.colon_separator {
                Fixed::TimezoneOffsetColonZ
            } else {
                Fixed::TimezoneOffsetZ
            }));
        }
        items
    }

    /// Parses a string into seconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns chrono's [`ParseError`] if the string does not follow this
    /// layout.
    pub fn parse_timestamp(&self, input: &str) -> Result<i64, ParseError> {
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, input, self.items(true).iter())?;
        if self.time_zone {
            Ok(parsed.to_datetime()?.timestamp())
        } else {
            let wall = parsed.to_naive_datetime_with_offset(0)?.and_utc().timestamp();
            Ok(wall - i64::from(self.zone.local_minus_utc()))
        }
    }

    /// Renders an instant given in seconds since the Unix epoch, or returns
    /// `None` if chrono cannot represent it.
    pub fn format_timestamp(&self, secs: i64) -> Option<String> {
        let instant = DateTime::from_timestamp(secs, 0)?.with_timezone(&self.zone);
        Some(instant.format_with_items(self.items(false).iter()).to_string())
    }
}
